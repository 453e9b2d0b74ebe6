//! Module containing structures and implementations for logging messages to the user.

use colored::Colorize;
use std::fmt::Display;

use super::source_file::Span;

/// Struct implementing [`Display`] that prints a diagnostic under an `[error]:` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorMessage<T> {
    /// The diagnostic to be displayed.
    pub display: T,
}

impl<T> ErrorMessage<T> {
    /// Wraps the given diagnostic.
    pub fn new(display: T) -> Self {
        Self { display }
    }
}

impl<T: Display> Display for ErrorMessage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            "[error]:".red().bold(),
            self.display.to_string().bold()
        )
    }
}

/// Structure implementing [`Display`] that prints the line containing a span and
/// underlines the span itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    /// Create a new source code display with the given span and help message to be displayed.
    pub fn new(span: &'a Span, help_display: Option<T>) -> Self {
        Self { span, help_display }
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();

        let Some(location) = self.span.start_location() else {
            return write!(f, "{}", self.span.str());
        };
        let line = source_file
            .get_line(location.line)
            .unwrap_or_default()
            .trim_end_matches(['\n', '\r']);

        let gutter = " ".repeat(location.line.to_string().len());
        let marker = "^".repeat(self.span.str().chars().count().max(1));

        writeln!(
            f,
            "{gutter}{} {}:{}:{}",
            "-->".blue().bold(),
            source_file.identifier(),
            location.line,
            location.column
        )?;
        writeln!(f, "{gutter} {}", "|".blue().bold())?;
        writeln!(f, "{} {} {line}", location.line.to_string().blue().bold(), "|".blue().bold())?;
        write!(
            f,
            "{gutter} {} {}{}",
            "|".blue().bold(),
            " ".repeat(location.column - 1),
            marker.red().bold()
        )?;

        if let Some(help_display) = &self.help_display {
            write!(f, " {help_display}")?;
        }

        Ok(())
    }
}
