use std::borrow::Cow;
use tfp_kernel::config::ConfigError;
use tfp_kernel::pset::PsetError;
use tfp_presets::PresetError;

/// Errors raised while registering, resolving or validating components.
#[tfp_derive::tfp_error]
pub enum WiringError {
    /// No component is registered under the label.
    #[error("Label not found{}: {label}", format_context(.context))]
    LabelNotFound { label: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate label{}: {label}", format_context(.context))]
    DuplicateLabel { label: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The label resolves, but the component does not produce the requested branch.
    #[error("Branch not produced{}: {tag}", format_context(.context))]
    BranchNotProduced { tag: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A component consumes a branch under its own label.
    #[error("Component consumes itself{}: {label}", format_context(.context))]
    SelfReference { label: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A consumer with `CheckHistory` reads data made by another process.
    #[error("Input not produced by process '{process}'{}: {tag}", format_context(.context))]
    ForeignProcess {
        tag: Cow<'static, str>,
        process: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown plugin type{}: {name}", format_context(.context))]
    UnknownPlugin { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A resolved handle is not of the requested concrete type.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Parameter set error with optional context.
    #[error("Parameter set error{}: {source}", format_context(.context))]
    Pset { source: PsetError, context: Option<Cow<'static, str>> },

    /// Preset error with optional context.
    #[error("Preset error{}: {source}", format_context(.context))]
    Preset { source: PresetError, context: Option<Cow<'static, str>> },

    /// Process file could not be loaded.
    #[error("Process configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
}

impl WiringError {
    pub(crate) fn label_not_found(label: &str) -> Self {
        Self::LabelNotFound { label: Cow::Owned(label.to_owned()), context: None }
    }
}
