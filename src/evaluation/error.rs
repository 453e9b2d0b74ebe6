//! Errors that can occur while evaluating reverse polish notation.

use crate::{
    base::source_file::Span,
    lexical::token::{ErrorToken, Operator, Parenthesis},
};

/// Errors that can occur while evaluating reverse polish notation.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The expression was rejected by an earlier stage.
    #[error("cannot evaluate invalid expression: {} `{}`", .0.message, .0.span.str())]
    InvalidExpression(ErrorToken),
    /// An operator was applied with fewer than two values available.
    #[error("not enough arguments for operator {}", .0.kind)]
    ArityError(Operator),
    /// The right operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero(Operator),
    /// The result of an operator does not fit into an `i32`.
    #[error("integer overflow while applying operator {}", .0.kind)]
    Overflow(Operator),
    /// The token stream does not have the shape of reverse polish notation.
    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),
}

/// Ways in which a token stream can fail to be reverse polish notation.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// A parenthesis reached the evaluator.
    #[error("unexpected token {}", .0.span.str())]
    UnexpectedToken(Parenthesis),
    /// More than one value was left when the stream ended.
    #[error("expected operator")]
    ExpectedOperator,
    /// No value was left when the stream ended.
    #[error("empty expression")]
    EmptyExpression,
}

impl EvaluationError {
    /// Returns the span of the token that caused the error, if there is one.
    #[must_use]
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::InvalidExpression(token) => Some(&token.span),
            Self::ArityError(operator) | Self::DivisionByZero(operator) | Self::Overflow(operator) => {
                Some(&operator.span)
            }
            Self::MalformedInput(MalformedInput::UnexpectedToken(parenthesis)) => {
                Some(&parenthesis.span)
            }
            Self::MalformedInput(_) => None,
        }
    }

    /// Returns a hint to display next to the source pointed at by [`EvaluationError::span`].
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::InvalidExpression(_) => Some("the expression is malformed here"),
            Self::ArityError(_) => Some("this operator is missing an operand"),
            Self::DivisionByZero(_) => Some("the right operand of this division is zero"),
            Self::Overflow(_) => Some("the result does not fit into a 32-bit integer"),
            Self::MalformedInput(MalformedInput::UnexpectedToken(_)) => {
                Some("parentheses never reach the evaluator of a correctly parsed expression")
            }
            Self::MalformedInput(_) => None,
        }
    }

    /// Whether the error points at a defect in the stage that produced the tokens rather
    /// than at the expression itself.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput(MalformedInput::UnexpectedToken(_))
        )
    }
}
