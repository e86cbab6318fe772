use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from executing statements against the runtime.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown command `{name}`")]
    #[diagnostic(help("available commands: {known}"))]
    UnknownCommand { name: String, known: String },

    #[error("`{command}` expects {expected}")]
    BadArguments {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{name}` is not a usable name")]
    #[diagnostic(help("names are one or more letters"))]
    InvalidName { name: String },

    #[error("no function named `{name}` in the workspace")]
    FunctionNotFound { name: String },

    #[error("input ended where a statement was expected")]
    #[diagnostic(help("`if` gates the statement that follows it"))]
    UnexpectedEof,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Expr(#[from] quine_core::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
