use std::io::{self, Cursor};
use std::path::PathBuf;

use clap::Parser;
use miette::Result;
use quine_lang::{DispatchTable, Interpreter, Runtime};

#[derive(Parser)]
#[command(name = "quine")]
#[command(version, about = "A truth-table workbench for boolean functions")]
struct Cli {
    /// Script file to execute instead of starting the shell
    file: Option<PathBuf>,

    /// Execute the given statements and exit
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    code: Option<String>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match (cli.file, cli.code) {
        (Some(file), None) => {
            let source = std::fs::read_to_string(&file)
                .map_err(|e| miette::miette!("Failed to read {}: {}", file.display(), e))?;
            run_script(&source)
        }
        (None, Some(code)) => run_script(&code),
        _ => shell(),
    }
}

/// Execute a script to completion, stopping at the first error.
fn run_script(source: &str) -> Result<()> {
    let mut runtime = Runtime::new();
    let dispatch = DispatchTable::with_default_commands();
    let stdout = io::stdout();

    Interpreter::new(&mut runtime, &dispatch, Cursor::new(source), stdout.lock()).run()?;
    Ok(())
}

/// The interactive shell: report errors and keep the session going.
fn shell() -> Result<()> {
    println!("quine {}", env!("CARGO_PKG_VERSION"));
    println!("Statements end with `;`. Type `quit;` to leave.");

    let mut runtime = Runtime::new();
    let dispatch = DispatchTable::with_default_commands();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut interpreter = Interpreter::new(&mut runtime, &dispatch, stdin.lock(), stdout.lock())
        .with_prompt("quine> ");

    loop {
        match interpreter.run() {
            Ok(()) => break,
            Err(err) => eprintln!("ERROR: {err}"),
        }
    }

    Ok(())
}
