//! # Wiring
//!
//! Components name each other by label instead of holding direct handles. This crate
//! provides the lookup side of that contract:
//!
//! * [`Component`]: the handle interface every registered stage or source exposes.
//! * [`LabelResolver`]: label → handle lookup, failing with [`WiringError::LabelNotFound`].
//! * [`ComponentRegistry`]: the resolver built once at startup and immutable afterwards.
//! * [`Plugin`]: the known stage types, their composed schemas and consumed/produced branches.
//! * [`Process`]: builds a registry from a [`ProcessConfig`] and checks that every consumed
//!   input tag is produced by the component its label resolves to.
//!
//! ```rust
//! use tfp_wiring::{LabelResolver, Process, ProcessConfig};
//!
//! let config: ProcessConfig = toml::from_str(r#"
//!     [[sources]]
//!     label = "TrackerDTCProducer"
//!     branches = ["StubAccepted"]
//!
//!     [[modules]]
//!     label = "TrackerTFPProducerGP"
//!     plugin = "trackerTFP::ProducerGP"
//! "#).unwrap();
//!
//! let process = Process::build(&config).unwrap();
//! let connections = process.validate().unwrap();
//! assert_eq!(connections.len(), 1);
//! assert!(process.registry().resolve("TrackerTFPProducerGP").is_ok());
//! ```

mod component;
mod error;
mod plugin;
mod process;
mod registry;
mod resolver;

pub use crate::component::{Component, Module, Source};
pub use crate::error::{WiringError, WiringErrorExt};
pub use crate::plugin::{Plugin, Ports};
pub use crate::process::{Connection, ModuleConfig, Process, ProcessConfig, SourceConfig};
pub use crate::registry::{ComponentRegistry, RegistryBuilder};
pub use crate::resolver::LabelResolver;
