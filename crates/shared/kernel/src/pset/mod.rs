//! Parameter sets: a [`Schema`] declares typed fields with defaults, and
//! [`Schema::instantiate`] turns it plus [`Overrides`] into an immutable [`ParameterSet`].

mod error;
mod overrides;
mod record;
mod schema;

pub use error::{PsetError, PsetErrorExt};
pub use overrides::Overrides;
pub use record::ParameterSet;
pub use schema::{FieldSpec, Schema, SchemaBuilder};
