use crate::pset::error::PsetError;
use crate::pset::schema::FieldSpec;
use fxhash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::sync::Arc;
use tfp_domain::{InputTag, ParamKind, ParamValue};

#[derive(Debug, PartialEq)]
struct ParameterSetInner {
    name: Cow<'static, str>,
    fields: Arc<[FieldSpec]>,
    index: Arc<FxHashMap<String, usize>>,
    values: Vec<ParamValue>,
}

/// Immutable, typed parameter record built by [`Schema::instantiate`](crate::pset::Schema::instantiate).
///
/// Thin `Arc` wrapper: clones are cheap and share the same values, and the record can
/// be read from any number of threads without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    inner: Arc<ParameterSetInner>,
}

impl ParameterSet {
    pub(crate) fn from_parts(
        name: Cow<'static, str>,
        fields: Arc<[FieldSpec]>,
        index: Arc<FxHashMap<String, usize>>,
        values: Vec<ParamValue>,
    ) -> Self {
        Self { inner: Arc::new(ParameterSetInner { name, fields, index, values }) }
    }

    /// Name of the schema this record was built from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.inner.index.get(key).map(|&i| &self.inner.values[i])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.index.contains_key(key)
    }

    /// # Errors
    /// [`PsetError::UnknownKey`] or [`PsetError::TypeMismatch`].
    pub fn get_string(&self, key: &str) -> Result<&str, PsetError> {
        let value = self.require(key)?;
        value.as_str().ok_or_else(|| mismatch(key, ParamKind::String, value))
    }

    /// # Errors
    /// [`PsetError::UnknownKey`] or [`PsetError::TypeMismatch`].
    pub fn get_bool(&self, key: &str) -> Result<bool, PsetError> {
        let value = self.require(key)?;
        value.as_bool().ok_or_else(|| mismatch(key, ParamKind::Bool, value))
    }

    /// # Errors
    /// [`PsetError::UnknownKey`] or [`PsetError::TypeMismatch`].
    pub fn get_float(&self, key: &str) -> Result<f64, PsetError> {
        let value = self.require(key)?;
        value.as_float().ok_or_else(|| mismatch(key, ParamKind::Double, value))
    }

    /// # Errors
    /// [`PsetError::UnknownKey`] or [`PsetError::TypeMismatch`].
    pub fn get_input_tag(&self, key: &str) -> Result<&InputTag, PsetError> {
        let value = self.require(key)?;
        value.as_input_tag().ok_or_else(|| mismatch(key, ParamKind::InputTag, value))
    }

    /// Iterates `(key, value)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.inner.fields.iter().map(FieldSpec::name).zip(self.inner.values.iter())
    }

    /// Keys whose value differs from the schema default.
    pub fn changed(&self) -> impl Iterator<Item = &str> {
        self.inner
            .fields
            .iter()
            .zip(self.inner.values.iter())
            .filter(|(field, value)| field.default_value() != *value)
            .map(|(field, _)| field.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.values.is_empty()
    }

    fn require(&self, key: &str) -> Result<&ParamValue, PsetError> {
        self.get(key).ok_or_else(|| PsetError::unknown(key))
    }
}

fn mismatch(key: &str, expected: ParamKind, found: &ParamValue) -> PsetError {
    PsetError::mismatch(key, expected, found.kind().to_string())
}

impl Serialize for ParameterSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
