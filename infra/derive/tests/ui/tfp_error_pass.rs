use std::borrow::Cow;
use tfp_derive::tfp_error;

#[tfp_error]
pub enum LoaderError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown key{}: {key}", format_context(.context))]
    UnknownKey { key: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String, LoaderError> {
    std::fs::read_to_string(path).context("reading")
}

fn main() {
    let err = read("/definitely/not/here").unwrap_err();
    assert!(err.to_string().starts_with("IO error (reading)"));

    let err: LoaderError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err: Result<(), LoaderError> =
        Err(LoaderError::UnknownKey { key: "RunTimes".into(), context: None });
    let err = err.context("overrides").unwrap_err();
    assert_eq!(err.to_string(), "Unknown key (overrides): RunTimes");
}
