use std::io::{BufRead, Write};

use crate::command::Flow;
use crate::dispatch::DispatchTable;
use crate::error::{Error, Result};
use crate::runtime::Runtime;

/// Reads `;`-terminated statements and executes them against a runtime.
///
/// Statements may span lines and one line may carry several; at end of
/// input any remaining non-whitespace text forms a final statement. The
/// first whitespace-delimited word of a statement is the command symbol,
/// the rest is its argument string.
pub struct Interpreter<'a, R, W> {
    runtime: &'a mut Runtime,
    dispatch: &'a DispatchTable,
    input: R,
    output: W,
    prompt: Option<String>,
    pending: String,
    reached_eof: bool,
}

impl<'a, R: BufRead, W: Write> Interpreter<'a, R, W> {
    pub fn new(
        runtime: &'a mut Runtime,
        dispatch: &'a DispatchTable,
        input: R,
        output: W,
    ) -> Self {
        Self {
            runtime,
            dispatch,
            input,
            output,
            prompt: None,
            pending: String::new(),
            reached_eof: false,
        }
    }

    /// Write `prompt` before every line read.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Execute statements until `quit` or end of input.
    ///
    /// The first failing statement returns its error with the rest of the
    /// input still buffered, so a caller may report it and call `run`
    /// again.
    pub fn run(&mut self) -> Result<()> {
        while let Some(statement) = self.next_command()? {
            if self.handle(&statement)? {
                break;
            }
        }
        Ok(())
    }

    /// Execute one statement and whatever it gates; true means the session
    /// should stop.
    fn handle(&mut self, statement: &str) -> Result<bool> {
        let mut flow = self.execute(statement)?;
        loop {
            match flow {
                Flow::Continue => return Ok(false),
                Flow::Quit => return Ok(true),
                Flow::RunNextIf(condition) => {
                    // An `if` always owns the following statement, whether
                    // or not it runs.
                    let consequence = self.next_command()?.ok_or(Error::UnexpectedEof)?;
                    flow = if condition {
                        self.execute(&consequence)?
                    } else {
                        Flow::Continue
                    };
                }
            }
        }
    }

    fn execute(&mut self, statement: &str) -> Result<Flow> {
        let (symbol, args) = split_statement(statement);
        let Some(command) = self.dispatch.get(symbol) else {
            return Err(Error::UnknownCommand {
                name: symbol.to_string(),
                known: self.dispatch.symbols().collect::<Vec<_>>().join(", "),
            });
        };
        command.execute(args, self.runtime, &mut self.output)
    }

    /// The next non-empty statement, trimmed.
    fn next_command(&mut self) -> Result<Option<String>> {
        while let Some(statement) = self.next_statement()? {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
        Ok(None)
    }

    /// Everything up to the next `;`, reading further lines as needed, or
    /// the text remaining at end of input.
    fn next_statement(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(position) = self.pending.find(';') {
                let statement = self.pending[..position].to_string();
                self.pending.drain(..=position);
                return Ok(Some(statement));
            }
            if self.reached_eof {
                if self.pending.trim().is_empty() {
                    self.pending.clear();
                    return Ok(None);
                }
                return Ok(Some(std::mem::take(&mut self.pending)));
            }
            if let Some(prompt) = &self.prompt {
                write!(self.output, "{prompt}")?;
                self.output.flush()?;
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                self.reached_eof = true;
            } else {
                self.pending.push_str(&line);
            }
        }
    }
}

fn split_statement(statement: &str) -> (&str, &str) {
    match statement.split_once(|c: char| c.is_whitespace()) {
        Some((symbol, args)) => (symbol, args.trim_start()),
        None => (statement, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> (Result<()>, String, Runtime) {
        let mut runtime = Runtime::new();
        let dispatch = DispatchTable::with_default_commands();
        let mut out = Vec::new();
        let result = {
            let mut interpreter =
                Interpreter::new(&mut runtime, &dispatch, Cursor::new(script), &mut out);
            interpreter.run()
        };
        (result, String::from_utf8(out).unwrap(), runtime)
    }

    #[test]
    fn test_statements_split_on_semicolons() {
        let (result, out, runtime) = session("let f = a & b; print f;");
        result.unwrap();
        assert_eq!(out, "a b\n0 0 : 0\n1 0 : 0\n0 1 : 0\n1 1 : 1\n");
        assert!(runtime.contains("f"));
    }

    #[test]
    fn test_final_statement_needs_no_semicolon() {
        let (result, out, _) = session("let f = a; print f");
        result.unwrap();
        assert_eq!(out, "a\n0 : 0\n1 : 1\n");
    }

    #[test]
    fn test_statements_may_span_lines() {
        let (result, out, _) = session("let f =\n  a &\n  b;\nminterms f;");
        result.unwrap();
        assert_eq!(out, "m(3)\n");
    }

    #[test]
    fn test_empty_statements_are_skipped() {
        let (result, out, runtime) = session(" ; ;\n\n ; ");
        result.unwrap();
        assert!(out.is_empty());
        assert!(runtime.is_empty());
    }

    #[test]
    fn test_quit_stops_execution() {
        let (result, out, runtime) = session("let f = a; quit; print f;");
        result.unwrap();
        assert!(out.is_empty());
        assert!(runtime.contains("f"));
    }

    #[test]
    fn test_unknown_command_lists_the_known_ones() {
        let (result, _, _) = session("halt;");
        match result.unwrap_err() {
            Error::UnknownCommand { name, known } => {
                assert_eq!(name, "halt");
                assert!(known.starts_with("let, l, print"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_resumes_after_an_error() {
        let mut runtime = Runtime::new();
        let dispatch = DispatchTable::with_default_commands();
        let mut out = Vec::new();
        let mut interpreter = Interpreter::new(
            &mut runtime,
            &dispatch,
            Cursor::new("nope; print f;"),
            &mut out,
        );
        assert!(matches!(
            interpreter.run(),
            Err(Error::UnknownCommand { .. })
        ));
        interpreter.run().unwrap();
        drop(interpreter);
        assert_eq!(String::from_utf8(out).unwrap(), "Not found: f\n");
    }

    #[test]
    fn test_if_runs_the_consequence_when_the_condition_holds() {
        let (result, out, _) = session("if a | !a; let g = a; print g;");
        result.unwrap();
        assert_eq!(out, "a\n0 : 0\n1 : 1\n");
    }

    #[test]
    fn test_if_discards_the_consequence_otherwise() {
        let (result, out, _) = session("if a; let g = a; print g;");
        result.unwrap();
        assert_eq!(out, "Not found: g\n");
    }

    #[test]
    fn test_if_condition_may_be_a_saved_name() {
        let (result, out, _) = session("let t = a | !a; if t; print t;");
        result.unwrap();
        assert_eq!(out, "a\n0 : 1\n1 : 1\n");
    }

    #[test]
    fn test_if_without_a_following_statement_is_an_error() {
        let (result, _, _) = session("if a;");
        assert!(matches!(result, Err(Error::UnexpectedEof)));
        let (result, _, _) = session("if a | !a;");
        assert!(matches!(result, Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_nested_if_consumes_statements_once_each() {
        let (result, out, _) = session("if a | !a; if a & !a; let g = a; print g;");
        result.unwrap();
        assert_eq!(out, "Not found: g\n");
    }

    #[test]
    fn test_long_if_chains_run_in_constant_stack() {
        let mut script = "if a | !a; ".repeat(50_000);
        script.push_str("let g = a;");
        let (result, out, runtime) = session(&script);
        result.unwrap();
        assert!(out.is_empty());
        assert!(runtime.contains("g"));
    }

    #[test]
    fn test_prompt_is_written_before_every_line() {
        let mut runtime = Runtime::new();
        let dispatch = DispatchTable::with_default_commands();
        let mut out = Vec::new();
        {
            let mut interpreter = Interpreter::new(
                &mut runtime,
                &dispatch,
                Cursor::new("let f = a;\nquit;\n"),
                &mut out,
            )
            .with_prompt("> ");
            interpreter.run().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "> > ");
    }
}
