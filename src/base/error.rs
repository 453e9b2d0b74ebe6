use super::source_file::Span;

/// An error that occurred while calculating an expression.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("An error occurred while evaluating the expression: {0}")]
    Evaluation(#[from] crate::evaluation::EvaluationError),
    #[error("The pipeline was driven incorrectly: {0}")]
    Usage(#[from] crate::lexical::UsageError),
}

impl Error {
    /// Returns the span of the source that caused the error, if it points at one.
    #[must_use]
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Evaluation(err) => err.span(),
            Self::Usage(_) => None,
        }
    }

    /// Returns a hint to display next to the source pointed at by [`Error::span`].
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::Evaluation(err) => err.help(),
            Self::Usage(_) => None,
        }
    }
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
