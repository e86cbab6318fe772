//! Error types for quine-build.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for quine-build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while driving a build.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Failed to create the variant build directory.
    #[error("Failed to create build directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An external tool could not be started at all.
    #[error("Failed to run `{tool}`: {source}")]
    ToolSpawn {
        tool: String,
        source: std::io::Error,
    },

    /// An external tool ran and reported failure.
    #[error("`{tool}` failed with {}", exit_description(.code))]
    ToolFailed { tool: String, code: Option<i32> },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code".to_string(),
    }
}
