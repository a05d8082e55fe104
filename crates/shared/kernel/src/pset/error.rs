use std::borrow::Cow;
use tfp_domain::{InvalidInputTag, ParamKind};

/// Errors raised while declaring schemas or building and reading parameter sets.
#[tfp_derive::tfp_error]
pub enum PsetError {
    /// The key is not declared by the schema of the set.
    #[error("Unknown parameter '{key}'{}", format_context(.context))]
    UnknownKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The supplied or requested value kind disagrees with the declared kind.
    #[error("Type mismatch for '{key}'{}: expected {expected}, found {found}", format_context(.context))]
    TypeMismatch {
        key: Cow<'static, str>,
        expected: ParamKind,
        found: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// A key was declared twice in one schema.
    #[error("Duplicate parameter '{key}'{}", format_context(.context))]
    DuplicateKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A `KEY=VALUE` assignment could not be split.
    #[error("Invalid assignment{}: {message}", format_context(.context))]
    InvalidAssignment { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Text given for an input-tag field is not a valid tag.
    #[error("Invalid input tag{}: {source}", format_context(.context))]
    InvalidInputTag { source: InvalidInputTag, context: Option<Cow<'static, str>> },
}

impl PsetError {
    pub(crate) fn unknown(key: &str) -> Self {
        Self::UnknownKey { key: Cow::Owned(key.to_owned()), context: None }
    }

    pub(crate) fn mismatch(key: &str, expected: ParamKind, found: impl Into<Cow<'static, str>>) -> Self {
        Self::TypeMismatch {
            key: Cow::Owned(key.to_owned()),
            expected,
            found: found.into(),
            context: None,
        }
    }
}
