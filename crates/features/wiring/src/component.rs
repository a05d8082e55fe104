//! Handles registered under a label.

use crate::plugin::{Plugin, Ports};
use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;
use tfp_domain::{InputTag, ModuleKind};
use tfp_kernel::pset::ParameterSet;

/// A stage or data source that other components can reach by label.
pub trait Component: Any + Debug + Send + Sync {
    fn label(&self) -> &str;

    fn kind(&self) -> ModuleKind;

    /// Branches this component emits. Always empty for analyzers.
    fn produces(&self) -> &[String];

    /// Input tags this component reads.
    fn consumes(&self) -> &[InputTag];

    /// Parameters the component was configured with, if any.
    fn params(&self) -> Option<&ParameterSet> {
        None
    }

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// Converts a shared handle for typed downcasting.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// A configured processing stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    label: String,
    plugin: Plugin,
    params: ParameterSet,
    ports: Ports,
}

impl Module {
    #[must_use]
    pub const fn new(label: String, plugin: Plugin, params: ParameterSet, ports: Ports) -> Self {
        Self { label, plugin, params, ports }
    }

    #[must_use]
    pub const fn plugin(&self) -> Plugin {
        self.plugin
    }

    #[must_use]
    pub const fn parameter_set(&self) -> &ParameterSet {
        &self.params
    }
}

impl Component for Module {
    fn label(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> ModuleKind {
        self.plugin.kind()
    }

    fn produces(&self) -> &[String] {
        &self.ports.produces
    }

    fn consumes(&self) -> &[InputTag] {
        &self.ports.consumes
    }

    fn params(&self) -> Option<&ParameterSet> {
        Some(&self.params)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Data made outside the configured process (an upstream job, an input file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    label: String,
    branches: Vec<String>,
}

impl Source {
    #[must_use]
    pub fn new(label: impl Into<String>, branches: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { label: label.into(), branches: branches.into_iter().map(Into::into).collect() }
    }
}

impl Component for Source {
    fn label(&self) -> &str {
        &self.label
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Source
    }

    fn produces(&self) -> &[String] {
        &self.branches
    }

    fn consumes(&self) -> &[InputTag] {
        &[]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}
