use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quine_build::{BuildDriver, BuildError, BuildOptions, Variant};

/// Build the native workbench programs with CMake.
#[derive(Parser)]
#[command(name = "quine-build")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Build the debug variant instead of release
    #[arg(short, long)]
    debug: bool,

    /// Delete both build directories before building
    #[arg(short, long)]
    rebuild: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();

    let mut options = BuildOptions::new()
        .variant(Variant::select(cli.debug))
        .rebuild(cli.rebuild);
    if let Ok(compiler) = std::env::var("COMPILER") {
        options = options.compiler(compiler);
    }

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: cannot determine the working directory: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = BuildDriver::new(root, options).run() {
        eprintln!("error: {err}");
        let code = match err {
            BuildError::ToolFailed { code: Some(code), .. } => code,
            _ => 1,
        };
        process::exit(code);
    }
}
