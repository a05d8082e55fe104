//! Input tags: `label[:instance[:process]]` references to a branch of another component.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = ':';

/// Returned when a string cannot be read as an [`InputTag`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid input tag '{input}': {reason}")]
pub struct InvalidInputTag {
    pub input: String,
    pub reason: &'static str,
}

/// Reference to the branch (`instance`) produced by the component registered under `label`.
///
/// An empty `instance` names the default branch, an empty `process` the current process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputTag {
    label: String,
    instance: String,
    process: String,
}

impl InputTag {
    /// Creates a tag for `label:instance` in the current process.
    ///
    /// # Errors
    /// Returns [`InvalidInputTag`] if `label` is empty or either part contains `:`.
    pub fn new(label: impl Into<String>, instance: impl Into<String>) -> Result<Self, InvalidInputTag> {
        Self::with_process(label, instance, String::new())
    }

    /// Creates a fully qualified tag.
    ///
    /// # Errors
    /// Returns [`InvalidInputTag`] if `label` is empty or any part contains `:`.
    pub fn with_process(
        label: impl Into<String>,
        instance: impl Into<String>,
        process: impl Into<String>,
    ) -> Result<Self, InvalidInputTag> {
        let tag = Self { label: label.into(), instance: instance.into(), process: process.into() };
        if tag.label.trim().is_empty() {
            return Err(InvalidInputTag { input: tag.to_string(), reason: "label is empty" });
        }
        if [&tag.label, &tag.instance, &tag.process].iter().any(|p| p.contains(SEPARATOR)) {
            return Err(InvalidInputTag {
                input: format!("{}/{}/{}", tag.label, tag.instance, tag.process),
                reason: "parts must not contain ':'",
            });
        }
        Ok(tag)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn instance(&self) -> &str {
        &self.instance
    }

    #[must_use]
    pub fn process(&self) -> &str {
        &self.process
    }
}

impl FromStr for InputTag {
    type Err = InvalidInputTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(SEPARATOR);
        let label = parts.next().unwrap_or_default();
        let instance = parts.next().unwrap_or_default();
        let process = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(InvalidInputTag { input: s.to_owned(), reason: "more than three parts" });
        }
        if label.is_empty() {
            return Err(InvalidInputTag { input: s.to_owned(), reason: "label is empty" });
        }
        Ok(Self { label: label.to_owned(), instance: instance.to_owned(), process: process.to_owned() })
    }
}

impl fmt::Display for InputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)?;
        if !self.instance.is_empty() || !self.process.is_empty() {
            write!(f, "{SEPARATOR}{}", self.instance)?;
        }
        if !self.process.is_empty() {
            write!(f, "{SEPARATOR}{}", self.process)?;
        }
        Ok(())
    }
}

impl Serialize for InputTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Tags are written either as `"label:instance"` strings or as tables.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTag {
    Text(String),
    Table {
        label: String,
        #[serde(default)]
        instance: String,
        #[serde(default)]
        process: String,
    },
}

impl<'de> Deserialize<'de> for InputTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = match RawTag::deserialize(deserializer)? {
            RawTag::Text(text) => text.parse(),
            RawTag::Table { label, instance, process } => {
                Self::with_process(label, instance, process)
            },
        };
        tag.map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_forms() {
        let tag: InputTag = "TrackerTFPProducerGP".parse().unwrap();
        assert_eq!(tag.label(), "TrackerTFPProducerGP");
        assert_eq!(tag.instance(), "");

        let tag: InputTag = "StubAssociator:UseForAlgEff".parse().unwrap();
        assert_eq!(tag.instance(), "UseForAlgEff");
        assert_eq!(tag.process(), "");

        let tag: InputTag = "a:b:HLT".parse().unwrap();
        assert_eq!(tag.process(), "HLT");
    }

    #[test]
    fn rejects_malformed() {
        assert!("".parse::<InputTag>().is_err());
        assert!(":StubAccepted".parse::<InputTag>().is_err());
        assert!("a:b:c:d".parse::<InputTag>().is_err());
        assert!(InputTag::new("a:b", "c").is_err());
    }

    #[test]
    fn display_omits_empty_trailing_parts() {
        assert_eq!(InputTag::new("gp", "").unwrap().to_string(), "gp");
        assert_eq!(InputTag::new("gp", "StubLost").unwrap().to_string(), "gp:StubLost");
        assert_eq!(InputTag::with_process("gp", "", "RECO").unwrap().to_string(), "gp::RECO");
        let text = "gp::RECO";
        assert_eq!(text.parse::<InputTag>().unwrap().to_string(), text);
    }
}
