use crate::pset::error::PsetError;
use crate::pset::schema::Schema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use tfp_domain::ParamValue;

/// Caller-supplied replacements for schema defaults, keyed by parameter name.
///
/// Deserializes from a plain table (`RunTime = 5.0`). Validation against a schema
/// happens in [`Schema::instantiate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides(BTreeMap<String, ParamValue>);

impl Overrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one override.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads `KEY=VALUE` assignments, typing each value by the declaration in `schema`.
    ///
    /// Later assignments to the same key win.
    ///
    /// # Errors
    /// * [`PsetError::InvalidAssignment`] if an item has no `=` or an empty key.
    /// * [`PsetError::UnknownKey`] / [`PsetError::TypeMismatch`] from [`Schema::parse_value`].
    pub fn from_assignments<I, S>(schema: &Schema, assignments: I) -> Result<Self, PsetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = Self::new();
        for assignment in assignments {
            let assignment = assignment.as_ref();
            let Some((key, raw)) = assignment.split_once('=') else {
                return Err(PsetError::InvalidAssignment {
                    message: Cow::Owned(format!("'{assignment}' is not KEY=VALUE")),
                    context: None,
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(PsetError::InvalidAssignment {
                    message: Cow::Owned(format!("'{assignment}' has an empty key")),
                    context: None,
                });
            }
            let value = schema.parse_value(key, raw)?;
            overrides.set(key, value);
        }
        Ok(overrides)
    }
}

impl<K, V> FromIterator<(K, V)> for Overrides
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_are_typed_by_schema() {
        let schema = Schema::builder("s")
            .double("RunTime", 2.0)
            .string("DirIPBB", "")
            .build()
            .unwrap();

        let overrides =
            Overrides::from_assignments(&schema, ["RunTime=5", "DirIPBB = /tmp/ipbb/", "RunTime=7.5"])
                .unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides.get("RunTime"), Some(&ParamValue::Double(7.5)));
        assert_eq!(overrides.get("DirIPBB"), Some(&ParamValue::from("/tmp/ipbb/")));
    }

    #[test]
    fn malformed_assignments_fail() {
        let schema = Schema::builder("s").double("RunTime", 2.0).build().unwrap();
        assert!(matches!(
            Overrides::from_assignments(&schema, ["RunTime"]),
            Err(PsetError::InvalidAssignment { .. })
        ));
        assert!(matches!(
            Overrides::from_assignments(&schema, ["=5"]),
            Err(PsetError::InvalidAssignment { .. })
        ));
    }

    #[test]
    fn collects_from_pairs() {
        let overrides: Overrides = [("CheckHistory", false)].into_iter().collect();
        assert_eq!(overrides.get("CheckHistory"), Some(&ParamValue::Bool(false)));
    }
}
