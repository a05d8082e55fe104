#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the parameter registry workspace.
//!
//! Only one macro lives here today: [`macro@tfp_error`], which turns a plain enum
//! of named-field variants into a `thiserror` error type with attachable context.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! tfp-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for workspace error enums.
///
/// Adds `#[derive(Debug, thiserror::Error)]` (unless already derived) and generates:
/// * `From<Source>` for every variant carrying a `source` field (or a `#[source]`/`#[from]` field);
/// * an `<Name>Ext` trait with a `context()` method for both `Result<T, Name>` and
///   `Result<T, Source>`, so context can be attached while propagating with `?`;
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists;
/// * a private `format_context` helper to render the optional context in messages.
///
/// Every variant must use named fields. Variants with a source must also declare
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[tfp_derive::tfp_error]
/// pub enum LoaderError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Unknown key{}: {key}", format_context(.context))]
///     UnknownKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoaderError> {
///     std::fs::read_to_string(path).context("Reading process file")
/// }
/// ```
#[proc_macro_attribute]
pub fn tfp_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
