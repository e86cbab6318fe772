//! Build orchestration for the native workbench programs.
//!
//! This crate drives an out-of-source CMake build: it optionally clears
//! the `debug/` and `release/` output directories, ensures the selected
//! variant's directory exists, then runs the configuration step and the
//! compilation step inside it.
//!
//! # Example
//!
//! ```no_run
//! use quine_build::{BuildDriver, BuildOptions, Variant};
//!
//! let options = BuildOptions::new().variant(Variant::Debug).rebuild(true);
//! BuildDriver::new(".", options).run()?;
//! # Ok::<(), quine_build::BuildError>(())
//! ```

mod driver;
mod error;
mod variant;

pub use driver::{BuildDriver, BuildOptions, ToolInvocation};
pub use error::{BuildError, Result};
pub use variant::Variant;
