//! The lexical module is responsible for converting raw text into a stream of tokens that the
//! parser can understand.

pub mod token;
pub mod tokenizer;

mod error;
pub use error::UsageError;
