//! Kernel of the parameter registry.
//! Holds the schema/record pair every stage is configured with, plus the layered
//! configuration loader used by binaries.
//!
//! ## Parameter sets
//! ```rust
//! use tfp_kernel::pset::{Overrides, Schema};
//!
//! let schema = Schema::builder("demo")
//!     .string("LabelInput", "TrackerTFPProducerGP")
//!     .double("RunTime", 2.0)
//!     .bool("EnableTruncation", true)
//!     .build()
//!     .unwrap();
//!
//! let pset = schema.instantiate(&Overrides::new().with("RunTime", 5.0)).unwrap();
//! assert_eq!(pset.get_string("LabelInput").unwrap(), "TrackerTFPProducerGP");
//! assert_eq!(pset.get_float("RunTime").unwrap(), 5.0);
//! assert!(pset.get_bool("EnableTruncation").unwrap());
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use tfp_kernel::config::load_config;
//! let cfg: serde_json::Value = load_config(Some("process.toml")).unwrap();
//! ```
pub mod config;
pub mod pset;

pub use tfp_domain as domain;
