//! The base module contains the shared infrastructure of the calculator: source text,
//! spans, diagnostics and the crate-level error type.

pub mod source_file;

mod error;
#[doc(inline)]
pub use error::{Error, Result};

mod diagnostic;
pub use diagnostic::{Handler, PrintHandler, SilentHandler, VoidHandler};

pub mod log;
