//! # Domain Models
//!
//! Pure types shared by every crate of the workspace: parameter values and kinds,
//! input tags, module kinds and the well-known key, label and branch names of the
//! track-trigger processing chain.
//! Keep it lean: no I/O and no registry logic, just data and simple helpers.

pub mod constants;
pub mod module;
pub mod tag;
pub mod value;

pub use module::ModuleKind;
pub use tag::{InputTag, InvalidInputTag};
pub use value::{ParamKind, ParamValue};
