use std::cell::Cell;

use super::{
    log::{ErrorMessage, SourceCodeDisplay},
    Error,
};

/// Represents a trait responsible for handling diagnostics produced while calculating.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive<E: Into<T>>(&self, error: E);
    /// Returns whether any error has been received so far.
    fn has_received(&self) -> bool;
}

/// Prints every received error to stderr, pointing at the offending part of the source.
#[derive(Debug, Default, Clone)]
pub struct PrintHandler {
    printed: Cell<bool>,
}

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler<Error> for PrintHandler {
    fn receive<E: Into<Error>>(&self, error: E) {
        let error = error.into();

        eprintln!("{}", ErrorMessage::new(&error));
        if let Some(span) = error.span() {
            let help = error.help();
            eprintln!("{}", SourceCodeDisplay::new(span, help));
        }

        self.printed.set(true);
    }

    fn has_received(&self) -> bool {
        self.printed.get()
    }
}

/// Records that an error was received without printing it.
#[derive(Debug, Default, Clone)]
pub struct SilentHandler {
    received: Cell<bool>,
}

impl SilentHandler {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Handler<T> for SilentHandler {
    fn receive<E: Into<T>>(&self, _error: E) {
        self.received.set(true);
    }

    fn has_received(&self) -> bool {
        self.received.get()
    }
}

/// Discards every received error.
#[derive(Debug, Default, Clone, Copy)]
pub struct VoidHandler;

impl<T> Handler<T> for VoidHandler {
    fn receive<E: Into<T>>(&self, _error: E) {}

    fn has_received(&self) -> bool {
        false
    }
}
