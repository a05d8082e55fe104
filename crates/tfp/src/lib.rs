//! Facade crate for the track-trigger configuration layer.
//! Re-exports the parameter-set, preset, wiring and logging crates and reads whole
//! process files. Keep this crate thin: it composes the others, it does not add rules.
//!
//! ## Usage
//! - Load a file with [`ProcessFile::load`], install logging from its `[logging]` section.
//! - Build and validate the [`wiring::Process`] it describes.

use serde::Deserialize;
use std::borrow::Cow;
use std::path::Path;
use tfp_kernel::config::load_config;
use tfp_wiring::{Process, ProcessConfig, WiringError};

pub use tfp_domain as domain;
pub use tfp_kernel as kernel;
#[cfg(feature = "logger")]
pub use tfp_logger as logger;
pub use tfp_presets as presets;
pub use tfp_wiring as wiring;

pub mod prelude {
    pub use tfp_domain::{InputTag, ModuleKind, ParamKind, ParamValue};
    pub use tfp_kernel::pset::{Overrides, ParameterSet, Schema};
    pub use tfp_presets::PresetCatalog;
    pub use tfp_wiring::{Component, LabelResolver, Plugin, Process, ProcessConfig, WiringError};
}

/// A process file: the process description plus its optional `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessFile {
    #[serde(flatten)]
    pub process: ProcessConfig,
    #[cfg(feature = "logger")]
    #[serde(default)]
    pub logging: tfp_logger::LogSettings,
}

impl ProcessFile {
    /// Reads `path`, with `TFP__`-prefixed environment variables layered on top.
    ///
    /// # Errors
    /// Returns [`WiringError::Config`] if the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WiringError> {
        let path = path.as_ref();
        load_config(Some(path)).map_err(|source| WiringError::Config {
            source,
            context: Some(Cow::Owned(path.display().to_string())),
        })
    }

    /// # Errors
    /// See [`Process::build`].
    pub fn build(&self) -> Result<Process, WiringError> {
        Process::build(&self.process)
    }
}
