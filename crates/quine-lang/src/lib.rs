//! The command language over boolean-function workspaces.
//!
//! Statements are `;`-terminated, in the shape `<command> <arguments>`.
//! The [`Interpreter`] reads them from any `BufRead`, resolves the command
//! symbol through a [`DispatchTable`], and executes it against a
//! [`Runtime`] of named functions, writing command output to any `Write`.

mod command;
mod dispatch;
mod error;
mod interpreter;
mod runtime;

pub use command::{
    Command, DeleteCommand, Flow, IfCommand, LetCommand, MaxtermsCommand, MintermsCommand,
    PrintCommand, QuitCommand, VariablesCommand,
};
pub use dispatch::DispatchTable;
pub use error::{Error, Result};
pub use interpreter::Interpreter;
pub use runtime::Runtime;
