use std::borrow::Cow;
use tfp_kernel::pset::PsetError;

/// Error types specific to the preset catalog and typed parameter views.
#[tfp_derive::tfp_error]
pub enum PresetError {
    #[error("Unknown preset '{name}'{}", format_context(.context))]
    UnknownPreset { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Preset '{name}' is already registered{}", format_context(.context))]
    DuplicatePreset { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A value has the right type but is unusable (negative run time, empty directory, ...).
    #[error("Invalid value for '{key}'{}: {message}", format_context(.context))]
    InvalidValue {
        key: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Parameter set error with optional context.
    #[error("Parameter set error{}: {source}", format_context(.context))]
    Pset { source: PsetError, context: Option<Cow<'static, str>> },
}
