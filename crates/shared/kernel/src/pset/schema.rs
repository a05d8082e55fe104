use crate::pset::error::PsetError;
use crate::pset::overrides::Overrides;
use crate::pset::record::ParameterSet;
use fxhash::FxHashMap;
use std::borrow::Cow;
use std::sync::Arc;
use tfp_domain::{InputTag, ParamKind, ParamValue};
use tracing::debug;

/// One declared parameter: name, kind and default value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    name: Cow<'static, str>,
    kind: ParamKind,
    default: ParamValue,
    doc: Option<Cow<'static, str>>,
}

impl FieldSpec {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.kind
    }

    #[must_use]
    pub const fn default_value(&self) -> &ParamValue {
        &self.default
    }

    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// An ordered, duplicate-free set of [`FieldSpec`]s.
///
/// Schemas are built once and shared; cloning only bumps a reference count.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: Cow<'static, str>,
    fields: Arc<[FieldSpec]>,
    index: Arc<FxHashMap<String, usize>>,
}

impl Schema {
    /// Starts declaring a schema called `name`.
    #[must_use = "The builder must be finished with `build`"]
    pub fn builder(name: impl Into<Cow<'static, str>>) -> SchemaBuilder {
        SchemaBuilder { name: name.into(), fields: Vec::new() }
    }

    /// Unions several schemas, keeping declaration order.
    ///
    /// # Errors
    /// Returns [`PsetError::DuplicateKey`] if two parts declare the same key.
    pub fn compose<'a>(
        name: impl Into<Cow<'static, str>>,
        parts: impl IntoIterator<Item = &'a Self>,
    ) -> Result<Self, PsetError> {
        parts.into_iter().fold(Self::builder(name), SchemaBuilder::include).build()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.index.get(key).map(|&i| &self.fields[i])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds the record holding every default.
    #[must_use]
    pub fn defaults(&self) -> ParameterSet {
        let values = self.fields.iter().map(|f| f.default.clone()).collect();
        ParameterSet::from_parts(self.name.clone(), Arc::clone(&self.fields), Arc::clone(&self.index), values)
    }

    /// Builds a record from the defaults with `overrides` applied.
    ///
    /// Either every override is accepted or no record is produced.
    ///
    /// # Errors
    /// * [`PsetError::UnknownKey`] for an override the schema does not declare.
    /// * [`PsetError::TypeMismatch`] for an override whose kind disagrees with the declaration.
    pub fn instantiate(&self, overrides: &Overrides) -> Result<ParameterSet, PsetError> {
        let mut values: Vec<ParamValue> = self.fields.iter().map(|f| f.default.clone()).collect();

        for (key, value) in overrides.iter() {
            let &slot = self.index.get(key).ok_or_else(|| PsetError::unknown(key))?;
            values[slot] = self.coerce(key, value.clone())?;
        }

        debug!(schema = %self.name, overrides = overrides.len(), "Parameter set instantiated");
        Ok(ParameterSet::from_parts(self.name.clone(), Arc::clone(&self.fields), Arc::clone(&self.index), values))
    }

    /// Checks `value` against the declaration of `key`.
    ///
    /// Integers are already widened on deserialization. Strings given for
    /// input-tag fields are parsed as tags.
    ///
    /// # Errors
    /// [`PsetError::UnknownKey`], [`PsetError::TypeMismatch`] or [`PsetError::InvalidInputTag`].
    pub fn coerce(&self, key: &str, value: ParamValue) -> Result<ParamValue, PsetError> {
        let expected = self.field(key).ok_or_else(|| PsetError::unknown(key))?.kind;
        match (expected, value) {
            (ParamKind::InputTag, ParamValue::String(text)) => {
                let tag = text.parse::<InputTag>().map_err(|source| PsetError::InvalidInputTag {
                    source,
                    context: Some(Cow::Owned(format!("parameter '{key}'"))),
                })?;
                Ok(ParamValue::InputTag(tag))
            },
            (expected, value) if value.kind() == expected => Ok(value),
            (expected, value) => Err(PsetError::mismatch(key, expected, value.kind().to_string())),
        }
    }

    /// Reads `raw` text as a value of the kind declared for `key`.
    ///
    /// # Errors
    /// [`PsetError::UnknownKey`] for undeclared keys, [`PsetError::TypeMismatch`] if the
    /// text is not a literal of the declared kind.
    pub fn parse_value(&self, key: &str, raw: &str) -> Result<ParamValue, PsetError> {
        let kind = self.field(key).ok_or_else(|| PsetError::unknown(key))?.kind;
        let text = raw.trim();
        let found = || Cow::Owned(format!("text '{text}'"));
        match kind {
            ParamKind::String => Ok(ParamValue::String(unquote(text).to_owned())),
            ParamKind::Bool => match text {
                "true" | "True" => Ok(ParamValue::Bool(true)),
                "false" | "False" => Ok(ParamValue::Bool(false)),
                _ => Err(PsetError::mismatch(key, kind, found())),
            },
            ParamKind::Double => text
                .parse::<f64>()
                .map(ParamValue::Double)
                .map_err(|_| PsetError::mismatch(key, kind, found())),
            ParamKind::InputTag => self.coerce(key, ParamValue::String(unquote(text).to_owned())),
        }
    }
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"').and_then(|t| t.strip_suffix('"')).unwrap_or(text)
}

/// Declares the fields of a [`Schema`].
///
/// Duplicate names are reported by [`SchemaBuilder::build`], not while declaring.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: Cow<'static, str>,
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Declares a field whose kind is taken from `default`.
    #[must_use]
    pub fn field(mut self, name: impl Into<Cow<'static, str>>, default: impl Into<ParamValue>) -> Self {
        let default = default.into();
        self.fields.push(FieldSpec { name: name.into(), kind: default.kind(), default, doc: None });
        self
    }

    #[must_use]
    pub fn string(self, name: impl Into<Cow<'static, str>>, default: impl Into<String>) -> Self {
        self.field(name, ParamValue::String(default.into()))
    }

    #[must_use]
    pub fn bool(self, name: impl Into<Cow<'static, str>>, default: bool) -> Self {
        self.field(name, ParamValue::Bool(default))
    }

    #[must_use]
    pub fn double(self, name: impl Into<Cow<'static, str>>, default: f64) -> Self {
        self.field(name, ParamValue::Double(default))
    }

    #[must_use]
    pub fn input_tag(self, name: impl Into<Cow<'static, str>>, default: InputTag) -> Self {
        self.field(name, ParamValue::InputTag(default))
    }

    /// Attaches a description to the most recently declared field.
    #[must_use]
    pub fn doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        if let Some(last) = self.fields.last_mut() {
            last.doc = Some(doc.into());
        }
        self
    }

    /// Appends every field of `other`.
    #[must_use]
    pub fn include(mut self, other: &Schema) -> Self {
        self.fields.extend(other.fields.iter().cloned());
        self
    }

    /// Finishes the schema.
    ///
    /// # Errors
    /// Returns [`PsetError::DuplicateKey`] if a name was declared twice.
    pub fn build(self) -> Result<Schema, PsetError> {
        let mut index = FxHashMap::default();
        for (i, field) in self.fields.iter().enumerate() {
            if index.insert(field.name.to_string(), i).is_some() {
                return Err(PsetError::DuplicateKey {
                    key: field.name.clone(),
                    context: Some(Cow::Owned(format!("schema '{}'", self.name))),
                });
            }
        }

        Ok(Schema { name: self.name, fields: self.fields.into(), index: Arc::new(index) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> Schema {
        Schema::builder("demo")
            .string("LabelInput", "TrackerTFPProducerGP")
            .double("RunTime", 2.0)
            .bool("CheckHistory", true)
            .input_tag("InputTagSelection", "StubAssociator:UseForAlgEff".parse().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn duplicate_declaration_is_rejected() {
        let err = Schema::builder("dup").bool("CheckHistory", true).bool("CheckHistory", false).build();
        assert!(matches!(err, Err(PsetError::DuplicateKey { ref key, .. }) if key == "CheckHistory"));
    }

    #[test]
    fn compose_rejects_overlapping_parts() {
        let a = Schema::builder("a").string("LabelGP", "gp").build().unwrap();
        let b = Schema::builder("b").string("LabelGP", "other").build().unwrap();
        let c = Schema::builder("c").bool("UseMCTruth", true).build().unwrap();

        assert!(matches!(Schema::compose("ab", [&a, &b]), Err(PsetError::DuplicateKey { .. })));
        let ac = Schema::compose("ac", [&a, &c]).unwrap();
        assert_eq!(ac.len(), 2);
        assert_eq!(ac.fields()[0].name(), "LabelGP");
        assert_eq!(ac.fields()[1].kind(), ParamKind::Bool);
    }

    #[test]
    fn coerce_accepts_tag_text_only_for_tag_fields() {
        let schema = demo();
        let tag = schema.coerce("InputTagSelection", ParamValue::from("Other:Branch")).unwrap();
        assert_eq!(tag.as_input_tag().unwrap().label(), "Other");

        assert!(matches!(
            schema.coerce("InputTagSelection", ParamValue::from(":broken")),
            Err(PsetError::InvalidInputTag { .. })
        ));
        assert!(matches!(
            schema.coerce("LabelInput", ParamValue::Bool(true)),
            Err(PsetError::TypeMismatch { expected: ParamKind::String, .. })
        ));
    }

    #[test]
    fn parse_value_follows_declared_kind() {
        let schema = demo();
        assert_eq!(schema.parse_value("RunTime", "5").unwrap(), ParamValue::Double(5.0));
        assert_eq!(schema.parse_value("CheckHistory", "false").unwrap(), ParamValue::Bool(false));
        assert_eq!(schema.parse_value("LabelInput", "\"true\"").unwrap(), ParamValue::from("true"));
        assert!(matches!(
            schema.parse_value("CheckHistory", "yes"),
            Err(PsetError::TypeMismatch { expected: ParamKind::Bool, .. })
        ));
        assert!(matches!(schema.parse_value("RunTimes", "1"), Err(PsetError::UnknownKey { .. })));
    }

    #[test]
    fn doc_attaches_to_last_field() {
        let schema = Schema::builder("docs")
            .bool("EnableTruncation", true)
            .doc("lost stubs are filled in BranchLost")
            .build()
            .unwrap();
        assert_eq!(schema.field("EnableTruncation").and_then(FieldSpec::doc), Some("lost stubs are filled in BranchLost"));
    }
}
