//! # Presets
//!
//! Parameter-set declarations of the track-finding processor stages, each available
//! under its own name in a [`PresetCatalog`]:
//!
//! | Preset | Used by |
//! |---|---|
//! | [`producer`] | geometric processor and linear fitter producers, analyzers |
//! | [`demonstrator`] | hardware demonstrator comparing emulator and firmware output |
//! | [`analyzer`] | truth-matching inputs of the analyzers |
//! | [`associator`] | stub associator |
//!
//! Every preset module exposes `schema()` and a typed view (`*Params::from_pset`) that
//! reads a built [`ParameterSet`](tfp_kernel::pset::ParameterSet) through the typed accessors.
//!
//! Variants of one nominal parameter set are registered under separate names; the
//! catalog never merges two definitions.
//!
//! ```rust
//! use tfp_kernel::pset::Overrides;
//! use tfp_presets::{PresetCatalog, demonstrator};
//!
//! let catalog = PresetCatalog::standard().unwrap();
//! let pset = catalog.instantiate(demonstrator::NAME, &Overrides::new().with("RunTime", 5.0)).unwrap();
//! let params = demonstrator::DemonstratorParams::from_pset(&pset).unwrap();
//! assert_eq!(params.label_input, "TrackerTFPProducerGP");
//! assert_eq!(params.run_duration().as_secs(), 5);
//! ```

pub mod analyzer;
pub mod associator;
mod catalog;
pub mod demonstrator;
mod error;
pub mod producer;

pub use crate::catalog::PresetCatalog;
pub use crate::error::{PresetError, PresetErrorExt};
