use smol_str::SmolStr;

use crate::error::{Error, Result};
use crate::ops::{BinOp, UnaryOp};
use crate::span::{Span, Spanned};

/// A lexical unit of a boolean expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Variable(SmolStr),
    Unary(UnaryOp),
    Binary(BinOp),
    OpenParen,
    CloseParen,
}

/// Whether `name` can serve as a variable or workspace entry name: one or
/// more ASCII letters.
pub fn is_valid_variable(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Split an expression into spanned tokens.
///
/// Variables are maximal letter runs; whitespace separates tokens and is
/// otherwise ignored. Any other character is an error.
pub fn tokenize(expr: &str) -> Result<Vec<Spanned<Token>>> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        let mut end = start + c.len_utf8();
        if c.is_ascii_alphabetic() {
            while let Some(&(offset, next)) = chars.peek() {
                if !next.is_ascii_alphabetic() {
                    break;
                }
                end = offset + next.len_utf8();
                chars.next();
            }
            tokens.push(Spanned::new(
                Token::Variable(SmolStr::new(&expr[start..end])),
                Span::new(start as u32, end as u32),
            ));
            continue;
        }
        let span = Span::new(start as u32, end as u32);
        let token = match c {
            '(' => Token::OpenParen,
            ')' => Token::CloseParen,
            _ => {
                if let Some(op) = UnaryOp::from_char(c) {
                    Token::Unary(op)
                } else if let Some(op) = BinOp::from_char(c) {
                    Token::Binary(op)
                } else {
                    return Err(Error::UnknownToken {
                        expr: expr.to_string(),
                        at: span.into(),
                    });
                }
            }
        };
        tokens.push(Spanned::new(token, span));
    }
    Ok(tokens)
}
