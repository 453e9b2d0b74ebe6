/// Represents a misuse of the tokenizer by the code driving it.
///
/// Unlike a malformed expression, which travels through the pipeline as an
/// [`Error`](super::token::Token::Error) token, a usage error signals a bug in the caller.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum UsageError {
    #[error("the tokenizer reached its end state and does not accept any further input.")]
    TerminatedTokenizer,
}
