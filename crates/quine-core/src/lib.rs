//! Truth tables and boolean functions.
//!
//! A [`BooleanFunction`] is a complete truth table over named variables,
//! with combinators for the unary and binary boolean operators. [`parse`]
//! turns an expression string such as `!a & (b | c)` into the function it
//! denotes.
//!
//! Row indices encode variable assignments bit by bit, first variable in
//! the least significant position, which keeps combination and
//! minterm/maxterm extraction simple index arithmetic.

mod error;
mod function;
mod lexer;
mod ops;
mod parser;
mod span;
mod table;

pub use error::{Error, Result};
pub use function::BooleanFunction;
pub use lexer::{is_valid_variable, tokenize, Token};
pub use ops::{BinOp, UnaryOp};
pub use parser::{parse, FunctionAccumulator};
pub use span::{Span, Spanned};
pub use table::{TruthTable, VariableCount, MAX_VARIABLES};
