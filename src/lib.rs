//! An integer expression calculator.
//!
//! Expressions over integers with `+ - * /` and parentheses are evaluated in three lazy
//! stages: the [`tokenize`]r turns text into tokens, the [`parse`]r reorders them into
//! reverse polish notation, and [`evaluate`] reduces that to a single integer.
//!
//! ```
//! use rpn_calc::{evaluate, parse, tokenize};
//!
//! assert_eq!(evaluate(parse(tokenize("(2 + 3) * 4"))), Ok(20));
//! ```
//!
//! A malformed expression does not abort tokenizing or parsing. It is carried through the
//! pipeline as an error token instead, and turned into an
//! [`EvaluationError::InvalidExpression`](evaluation::EvaluationError::InvalidExpression)
//! once it reaches the evaluator.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod evaluation;
pub mod lexical;
pub mod print;
pub mod syntax;

#[doc(inline)]
pub use evaluation::evaluate;
#[doc(inline)]
pub use lexical::tokenizer::tokenize;
#[doc(inline)]
pub use syntax::parser::parse;

use base::{Handler, Result};

/// Tokenizes, parses and evaluates the given expression.
///
/// The first error is passed to `handler` before it is returned.
///
/// # Errors
/// - [`base::Error::Evaluation`] if the expression is malformed or cannot be evaluated.
#[tracing::instrument(level = "debug", skip(handler))]
pub fn calculate(source: &str, handler: &impl Handler<base::Error>) -> Result<i32> {
    evaluate(parse(tokenize(source))).map_err(|err| {
        let err = base::Error::from(err);
        handler.receive(err.clone());
        err
    })
}
