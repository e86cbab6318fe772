//! Expression parsing: shunting-yard conversion to postfix, then
//! evaluation over a function stack.

use smol_str::SmolStr;

use crate::error::{Error, Result};
use crate::function::BooleanFunction;
use crate::lexer::{tokenize, Token};
use crate::ops::{BinOp, UnaryOp};
use crate::span::Spanned;

/// Parse an expression into the boolean function it denotes.
///
/// All binary operators share one precedence level and group to the right,
/// so `a | b & c` reads as `a | (b & c)`. `!` applies to the operand
/// immediately following it, and parentheses override both rules.
pub fn parse(expr: &str) -> Result<BooleanFunction> {
    let tokens = tokenize(expr)?;
    let postfix = to_postfix(expr, tokens)?;
    evaluate(expr, postfix)
}

/// Postfix form of an expression: parentheses are already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Postfix {
    Operand(SmolStr),
    Unary(UnaryOp),
    Binary(BinOp),
}

/// What the operator stack can hold during conversion.
#[derive(Debug, Clone, Copy)]
enum StackOp {
    Unary(UnaryOp),
    Binary(BinOp),
    OpenParen,
}

fn to_postfix(expr: &str, tokens: Vec<Spanned<Token>>) -> Result<Vec<Spanned<Postfix>>> {
    let mut output: Vec<Spanned<Postfix>> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Spanned<StackOp>> = Vec::new();

    for token in tokens {
        let span = token.span;
        match token.node {
            Token::Variable(name) => output.push(Spanned::new(Postfix::Operand(name), span)),
            Token::Unary(op) => stack.push(Spanned::new(StackOp::Unary(op), span)),
            Token::Binary(op) => {
                // A pending `!` binds to the operand just emitted, so it
                // applies before any binary operator does.
                while let Some(top) = stack.pop() {
                    match top.node {
                        StackOp::Unary(unary) => {
                            output.push(Spanned::new(Postfix::Unary(unary), top.span));
                        }
                        _ => {
                            stack.push(top);
                            break;
                        }
                    }
                }
                stack.push(Spanned::new(StackOp::Binary(op), span));
            }
            Token::OpenParen => stack.push(Spanned::new(StackOp::OpenParen, span)),
            Token::CloseParen => {
                let mut matched = false;
                while let Some(top) = stack.pop() {
                    match top.node {
                        StackOp::OpenParen => {
                            matched = true;
                            break;
                        }
                        StackOp::Unary(op) => {
                            output.push(Spanned::new(Postfix::Unary(op), top.span));
                        }
                        StackOp::Binary(op) => {
                            output.push(Spanned::new(Postfix::Binary(op), top.span));
                        }
                    }
                }
                if !matched {
                    return Err(Error::UnbalancedParenthesis {
                        expr: expr.to_string(),
                        at: span.into(),
                    });
                }
            }
        }
    }

    while let Some(top) = stack.pop() {
        match top.node {
            StackOp::OpenParen => {
                return Err(Error::UnbalancedParenthesis {
                    expr: expr.to_string(),
                    at: top.span.into(),
                });
            }
            StackOp::Unary(op) => output.push(Spanned::new(Postfix::Unary(op), top.span)),
            StackOp::Binary(op) => output.push(Spanned::new(Postfix::Binary(op), top.span)),
        }
    }
    Ok(output)
}

fn evaluate(expr: &str, postfix: Vec<Spanned<Postfix>>) -> Result<BooleanFunction> {
    let mut accumulator = FunctionAccumulator::new();
    for op in postfix {
        let result = match op.node {
            Postfix::Operand(name) => accumulator.push_variable(name),
            Postfix::Unary(unary) => accumulator.apply_unary(unary),
            Postfix::Binary(binary) => accumulator.apply_binary(binary),
        };
        result.map_err(|e| e.with_source(expr, op.span))?;
    }
    accumulator.finish()
}

/// Evaluation stack for postfix expressions.
///
/// Operands push functions; operators pop their operands and push the
/// result. A well-formed expression leaves exactly one function behind.
#[derive(Debug, Default)]
pub struct FunctionAccumulator {
    stack: Vec<BooleanFunction>,
}

impl FunctionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the identity function of a variable.
    pub fn push_variable(&mut self, name: impl Into<SmolStr>) -> Result<()> {
        self.stack.push(BooleanFunction::from_variable(name)?);
        Ok(())
    }

    /// Push an already-built function as an operand.
    pub fn push_function(&mut self, function: BooleanFunction) {
        self.stack.push(function);
    }

    pub fn apply_unary(&mut self, op: UnaryOp) -> Result<()> {
        let operand = self.pop_operand(op.symbol())?;
        self.stack.push(operand.apply_unary(op));
        Ok(())
    }

    /// Pop two operands and push their combination. The earlier operand
    /// takes the low bits of the combined table.
    pub fn apply_binary(&mut self, op: BinOp) -> Result<()> {
        let high = self.pop_operand(op.symbol())?;
        let low = self.pop_operand(op.symbol())?;
        self.stack.push(low.apply_binary(op, &high)?);
        Ok(())
    }

    /// Whether exactly one function remains.
    pub fn can_finish(&self) -> bool {
        self.stack.len() == 1
    }

    /// Take the final function off the stack.
    pub fn finish(mut self) -> Result<BooleanFunction> {
        let Some(function) = self.stack.pop() else {
            return Err(Error::EmptyExpression);
        };
        if self.stack.is_empty() {
            Ok(function)
        } else {
            Err(Error::MissingOperator {
                values: self.stack.len() + 1,
            })
        }
    }

    fn pop_operand(&mut self, symbol: char) -> Result<BooleanFunction> {
        self.stack.pop().ok_or(Error::MissingOperand {
            symbol,
            expr: String::new(),
            at: None,
        })
    }
}
