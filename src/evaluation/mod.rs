//! This module reduces reverse polish notation to the integer it denotes.

mod error;

#[doc(inline)]
pub use error::{EvaluationError, MalformedInput};

use crate::lexical::token::{Operator, OperatorKind, Token};

/// Result type for evaluation.
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Evaluates the given tokens in reverse polish notation.
///
/// Evaluation stops at the first failing token; the remaining tokens are not pulled.
///
/// # Errors
/// - [`EvaluationError::InvalidExpression`] if an error token is reached.
/// - [`EvaluationError::ArityError`] if an operator lacks an operand.
/// - [`EvaluationError::DivisionByZero`] if a value is divided by zero.
/// - [`EvaluationError::Overflow`] if an intermediate result does not fit into an `i32`.
/// - [`EvaluationError::MalformedInput`] if the tokens are not in reverse polish notation.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(tokens: impl IntoIterator<Item = Token>) -> EvaluationResult<i32> {
    let mut calculator = Calculator::new();
    for token in tokens {
        calculator.accept(&token)?;
    }

    let result = calculator.result();
    tracing::debug!(?result, "Finished evaluation");

    result
}

/// A stack machine evaluating reverse polish notation one token at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    stack: Vec<i32>,
}

impl Calculator {
    /// Creates a calculator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the values currently on the stack, bottom first.
    #[must_use]
    pub fn stack(&self) -> &[i32] {
        &self.stack
    }

    /// Applies a single token to the stack.
    ///
    /// The stack is left untouched when the token fails.
    ///
    /// # Errors
    /// - See [`evaluate`].
    pub fn accept(&mut self, token: &Token) -> EvaluationResult<()> {
        match token {
            Token::Number(number) => self.stack.push(number.value),
            Token::Operator(operator) => {
                let [.., first, second] = self.stack[..] else {
                    return Err(EvaluationError::ArityError(operator.clone()));
                };
                let value = apply(operator, first, second)?;
                self.stack.truncate(self.stack.len() - 2);
                self.stack.push(value);
            }
            Token::Parenthesis(parenthesis) => {
                return Err(MalformedInput::UnexpectedToken(parenthesis.clone()).into());
            }
            Token::Error(error) => return Err(EvaluationError::InvalidExpression(error.clone())),
            Token::EndOfInput => match self.stack.len() {
                1 => {}
                0 => return Err(MalformedInput::EmptyExpression.into()),
                _ => return Err(MalformedInput::ExpectedOperator.into()),
            },
        }

        Ok(())
    }

    /// Reads the value left on top of the stack.
    ///
    /// # Errors
    /// - [`MalformedInput::EmptyExpression`] if the stack is empty.
    pub fn result(&self) -> EvaluationResult<i32> {
        self.stack
            .last()
            .copied()
            .ok_or_else(|| MalformedInput::EmptyExpression.into())
    }
}

/// Computes `first OP second`, dividing with truncation towards zero.
fn apply(operator: &Operator, first: i32, second: i32) -> EvaluationResult<i32> {
    let result = match operator.kind {
        OperatorKind::Plus => first.checked_add(second),
        OperatorKind::Minus => first.checked_sub(second),
        OperatorKind::Multiply => first.checked_mul(second),
        OperatorKind::Divide if second == 0 => {
            return Err(EvaluationError::DivisionByZero(operator.clone()))
        }
        OperatorKind::Divide => first.checked_div(second),
    };

    result.ok_or_else(|| EvaluationError::Overflow(operator.clone()))
}
