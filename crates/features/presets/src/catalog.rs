use crate::error::PresetError;
use crate::{analyzer, associator, demonstrator, producer};
use std::borrow::Cow;
use std::collections::BTreeMap;
use tfp_kernel::pset::{Overrides, ParameterSet, Schema};
use tracing::debug;

/// Parameter-set schemas addressable by name.
///
/// Names are unique: registering a second definition under an existing name fails
/// instead of replacing or merging the first.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: BTreeMap<String, Schema>,
}

impl PresetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the stage presets of the processing chain.
    ///
    /// # Errors
    /// Propagates declaration errors of the built-in presets.
    pub fn standard() -> Result<Self, PresetError> {
        let mut catalog = Self::new();
        catalog.register(producer::NAME, producer::schema()?)?;
        catalog.register(demonstrator::NAME, demonstrator::schema()?)?;
        catalog.register(analyzer::NAME, analyzer::schema()?)?;
        catalog.register(associator::NAME, associator::schema()?)?;
        Ok(catalog)
    }

    /// Adds `schema` under `name`.
    ///
    /// # Errors
    /// Returns [`PresetError::DuplicatePreset`] if `name` is taken.
    pub fn register(&mut self, name: impl Into<String>, schema: Schema) -> Result<(), PresetError> {
        let name = name.into();
        if self.presets.contains_key(&name) {
            return Err(PresetError::DuplicatePreset { name: Cow::Owned(name), context: None });
        }
        debug!(preset = %name, fields = schema.len(), "Preset registered");
        self.presets.insert(name, schema);
        Ok(())
    }

    /// # Errors
    /// Returns [`PresetError::UnknownPreset`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<&Schema, PresetError> {
        self.presets
            .get(name)
            .ok_or_else(|| PresetError::UnknownPreset { name: Cow::Owned(name.to_owned()), context: None })
    }

    /// Builds the preset `name` with `overrides` applied.
    ///
    /// # Errors
    /// [`PresetError::UnknownPreset`], or [`PresetError::Pset`] for rejected overrides.
    pub fn instantiate(&self, name: &str, overrides: &Overrides) -> Result<ParameterSet, PresetError> {
        let schema = self.get(name)?;
        schema.instantiate(overrides).map_err(|source| PresetError::Pset {
            source,
            context: Some(Cow::Owned(format!("preset '{name}'"))),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.presets.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
