use std::io::Write;

use quine_core::{is_valid_variable, parse, BooleanFunction};

use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// What the interpreter should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Proceed to the next statement.
    Continue,
    /// Stop the session.
    Quit,
    /// Execute the next statement only when the flag is true, discarding
    /// it otherwise.
    RunNextIf(bool),
}

/// A named operation on the runtime workspace.
///
/// `args` is the statement text after the command symbol, already stripped
/// of leading whitespace. Commands write user-visible output to `out`;
/// failures are returned, not printed.
pub trait Command {
    fn execute(&self, args: &str, runtime: &mut Runtime, out: &mut dyn Write) -> Result<Flow>;
}

/// `let <name> = <expression>`: parse and save a function.
pub struct LetCommand;

impl Command for LetCommand {
    fn execute(&self, args: &str, runtime: &mut Runtime, _out: &mut dyn Write) -> Result<Flow> {
        let (name, expression) = split_assignment(args)?;
        let function = parse(expression)?;
        runtime.save(name, function);
        Ok(Flow::Continue)
    }
}

/// `print <name>`: write the function's truth table.
///
/// An unknown name writes `Not found: <name>` to the output instead of
/// failing, so exploratory sessions keep moving.
pub struct PrintCommand;

impl Command for PrintCommand {
    fn execute(&self, args: &str, runtime: &mut Runtime, out: &mut dyn Write) -> Result<Flow> {
        let name = required_name("print", args)?;
        match runtime.get(name) {
            Some(function) => writeln!(out, "{function}")?,
            None => writeln!(out, "Not found: {name}")?,
        }
        Ok(Flow::Continue)
    }
}

/// `delete <name>`: drop a function from the workspace.
pub struct DeleteCommand;

impl Command for DeleteCommand {
    fn execute(&self, args: &str, runtime: &mut Runtime, _out: &mut dyn Write) -> Result<Flow> {
        let name = required_name("delete", args)?;
        if runtime.remove(name).is_none() {
            return Err(Error::FunctionNotFound {
                name: name.to_string(),
            });
        }
        Ok(Flow::Continue)
    }
}

/// `minterms <name>`: the rows where the function is true, as `m(...)`.
pub struct MintermsCommand;

impl Command for MintermsCommand {
    fn execute(&self, args: &str, runtime: &mut Runtime, out: &mut dyn Write) -> Result<Flow> {
        let name = required_name("minterms", args)?;
        let function = lookup(runtime, name)?;
        writeln!(out, "{}", format_terms('m', &function.minterms()))?;
        Ok(Flow::Continue)
    }
}

/// `maxterms <name>`: the rows where the function is false, as `M(...)`.
pub struct MaxtermsCommand;

impl Command for MaxtermsCommand {
    fn execute(&self, args: &str, runtime: &mut Runtime, out: &mut dyn Write) -> Result<Flow> {
        let name = required_name("maxterms", args)?;
        let function = lookup(runtime, name)?;
        writeln!(out, "{}", format_terms('M', &function.maxterms()))?;
        Ok(Flow::Continue)
    }
}

/// `variables <name>`: the function's variables, space-joined.
pub struct VariablesCommand;

impl Command for VariablesCommand {
    fn execute(&self, args: &str, runtime: &mut Runtime, out: &mut dyn Write) -> Result<Flow> {
        let name = required_name("variables", args)?;
        let function = lookup(runtime, name)?;
        writeln!(out, "{}", function.variables().join(" "))?;
        Ok(Flow::Continue)
    }
}

/// `if <name-or-expression>`: gate the next statement on a tautology.
pub struct IfCommand;

impl Command for IfCommand {
    fn execute(&self, args: &str, runtime: &mut Runtime, _out: &mut dyn Write) -> Result<Flow> {
        let condition = args.trim();
        if condition.is_empty() {
            return Err(Error::BadArguments {
                command: "if",
                expected: "a saved name or an expression",
            });
        }
        // A saved name shadows its reading as a one-variable expression.
        let holds = match runtime.get(condition) {
            Some(function) => function.is_tautology(),
            None => parse(condition)?.is_tautology(),
        };
        Ok(Flow::RunNextIf(holds))
    }
}

/// `quit`: stop the session. Arguments are ignored.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn execute(&self, _args: &str, _runtime: &mut Runtime, _out: &mut dyn Write) -> Result<Flow> {
        Ok(Flow::Quit)
    }
}

fn split_assignment(args: &str) -> Result<(&str, &str)> {
    let Some((name, expression)) = args.split_once('=') else {
        return Err(Error::BadArguments {
            command: "let",
            expected: "a `<name> = <expression>` assignment",
        });
    };
    let name = name.trim();
    if !is_valid_variable(name) {
        return Err(Error::InvalidName {
            name: name.to_string(),
        });
    }
    Ok((name, expression.trim()))
}

fn required_name<'a>(command: &'static str, args: &'a str) -> Result<&'a str> {
    let name = args.trim();
    if name.is_empty() {
        return Err(Error::BadArguments {
            command,
            expected: "a function name",
        });
    }
    Ok(name)
}

fn lookup<'a>(runtime: &'a Runtime, name: &str) -> Result<&'a BooleanFunction> {
    runtime.get(name).ok_or_else(|| Error::FunctionNotFound {
        name: name.to_string(),
    })
}

fn format_terms(prefix: char, terms: &[u64]) -> String {
    let list = terms
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{prefix}({list})")
}
