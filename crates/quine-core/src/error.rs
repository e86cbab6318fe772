use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::span::Span;
use crate::table::{VariableCount, MAX_VARIABLES};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from truth-table construction and expression parsing.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("a truth table needs at least one variable")]
    EmptyVariables,

    #[error("{count} variables exceed the limit of {max}", max = MAX_VARIABLES)]
    TooManyVariables { count: u64 },

    #[error("a truth table over {variables} variables does not fit in memory")]
    TableTooLarge { variables: VariableCount },

    #[error("expression is empty")]
    EmptyExpression,

    #[error("unrecognized character at offset {}", .at.offset())]
    #[diagnostic(help("variables are letters; operators are !, &, | and ^"))]
    UnknownToken {
        #[source_code]
        expr: String,
        #[label("not a variable or operator")]
        at: SourceSpan,
    },

    #[error("unbalanced parenthesis at offset {}", .at.offset())]
    UnbalancedParenthesis {
        #[source_code]
        expr: String,
        #[label("unmatched")]
        at: SourceSpan,
    },

    #[error("operator `{symbol}` is missing an operand")]
    MissingOperand {
        symbol: char,
        #[source_code]
        expr: String,
        #[label("needs an operand")]
        at: Option<SourceSpan>,
    },

    #[error("expression has {values} unconnected values")]
    #[diagnostic(help("join sub-expressions with a binary operator"))]
    MissingOperator { values: usize },
}

impl Error {
    /// Attach expression text and an offending span to errors raised
    /// outside the parser, where no source context was available.
    pub(crate) fn with_source(self, source: &str, span: Span) -> Error {
        match self {
            Error::MissingOperand { symbol, .. } => Error::MissingOperand {
                symbol,
                expr: source.to_string(),
                at: Some(span.into()),
            },
            other => other,
        }
    }
}
