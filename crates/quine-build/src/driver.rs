//! Planning and execution of the two-step CMake build.
//!
//! The driver never changes the process working directory: every external
//! tool carries its own working directory, so the caller's cwd is left
//! alone and the plan can be inspected before anything runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::error::{BuildError, Result};
use crate::variant::Variant;

/// Configuration for one build run.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Which variant to configure and compile.
    pub variant: Variant,
    /// Delete both variant directories before building.
    pub rebuild: bool,
    /// Forwarded to CMake as the C++ compiler when set.
    pub compiler: Option<String>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the variant to build.
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Request a clean rebuild.
    pub fn rebuild(mut self, rebuild: bool) -> Self {
        self.rebuild = rebuild;
        self
    }

    /// Override the compiler CMake configures with.
    pub fn compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = Some(compiler.into());
        self
    }
}

/// One external tool run: program, arguments, and the directory to run in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ToolInvocation {
    fn new(program: &str, args: Vec<String>, cwd: PathBuf) -> Self {
        Self {
            program: program.to_string(),
            args,
            cwd,
        }
    }

    /// The full command line, program first.
    pub fn command_line(&self) -> Vec<&str> {
        let mut line = Vec::with_capacity(self.args.len() + 1);
        line.push(self.program.as_str());
        line.extend(self.args.iter().map(String::as_str));
        line
    }

    /// Run the tool to completion. Its stdout and stderr are inherited,
    /// so build output streams straight through.
    pub fn run(&self) -> Result<()> {
        info!(command = %self.command_line().join(" "), dir = %self.cwd.display(), "running");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|source| BuildError::ToolSpawn {
                tool: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(BuildError::ToolFailed {
                tool: self.program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Outcome of a best-effort directory removal.
#[derive(Debug, PartialEq, Eq)]
enum Removal {
    Removed,
    Missing,
}

/// Remove a directory tree, reporting absence as its own outcome rather
/// than an error.
fn remove_dir(path: &Path) -> io::Result<Removal> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(Removal::Removed),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Removal::Missing),
        Err(err) => Err(err),
    }
}

/// Drives the remove, create, configure, compile sequence for one
/// project root.
#[derive(Debug)]
pub struct BuildDriver {
    root: PathBuf,
    options: BuildOptions,
}

impl BuildDriver {
    pub fn new(root: impl Into<PathBuf>, options: BuildOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    /// The selected variant's build directory.
    pub fn build_dir(&self) -> PathBuf {
        self.root.join(self.options.variant.as_str())
    }

    /// Delete both variant directories. A missing directory is ignored;
    /// any other failure is logged and the build proceeds.
    pub fn clean(&self) {
        for variant in Variant::ALL {
            let dir = self.root.join(variant.as_str());
            match remove_dir(&dir) {
                Ok(Removal::Removed) => debug!(dir = %dir.display(), "removed build directory"),
                Ok(Removal::Missing) => {}
                Err(err) => {
                    warn!(dir = %dir.display(), %err, "could not remove build directory");
                }
            }
        }
    }

    /// Create the selected variant's directory if it does not exist.
    pub fn prepare(&self) -> Result<PathBuf> {
        let dir = self.build_dir();
        fs::create_dir_all(&dir).map_err(|source| BuildError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }

    /// The configuration and compilation steps, in order. Nothing is
    /// touched until the invocations run.
    pub fn plan(&self) -> Vec<ToolInvocation> {
        let cwd = self.build_dir();

        let mut configure = vec![format!("-DCMAKE_BUILD_TYPE={}", self.options.variant)];
        if let Some(compiler) = &self.options.compiler {
            configure.push(format!("-DCMAKE_CXX_COMPILER={compiler}"));
        }
        configure.push("..".to_string());

        vec![
            ToolInvocation::new("cmake", configure, cwd.clone()),
            ToolInvocation::new("make", Vec::new(), cwd),
        ]
    }

    /// Run the whole sequence: clean when rebuilding, ensure the build
    /// directory, then configuration and compilation in order.
    pub fn run(&self) -> Result<()> {
        if self.options.rebuild {
            self.clean();
        }

        let dir = self.prepare()?;
        debug!(dir = %dir.display(), "build directory ready");

        for step in self.plan() {
            step.run()?;
        }

        Ok(())
    }
}
