//! Renders token streams back into text.
//!
//! Rendering only borrows the tokens, so a stream can be collected once, printed, and then
//! handed on to the evaluator.

use std::fmt::Display;

use itertools::Itertools;

use crate::lexical::token::Token;

/// Renders the given tokens.
///
/// Every token except errors and the end marker is written as a space followed by its
/// source text. An error token is written as a message on its own lines and the end
/// marker as a line break.
#[must_use]
pub fn render<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens.into_iter().map(Printer::new).join("")
}

/// Renders the given tokens like [`render`], without the space in front of the first token.
#[must_use]
pub fn render_trace<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    let rendered = render(tokens);

    match rendered.strip_prefix(' ') {
        Some(trace) => trace.to_string(),
        None => rendered,
    }
}

/// Struct implementing [`Display`] for a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer<'a> {
    token: &'a Token,
}

impl<'a> Printer<'a> {
    /// Creates a printer for the given token.
    #[must_use]
    pub fn new(token: &'a Token) -> Self {
        Self { token }
    }
}

impl Display for Printer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token {
            Token::Number(_) | Token::Operator(_) | Token::Parenthesis(_) => {
                write!(f, " {}", self.token.str())
            }
            Token::Error(error) => write!(
                f,
                "\nError happened at {}.\nMessage: {}",
                error.span.str(),
                error.message
            ),
            Token::EndOfInput => writeln!(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexical::tokenizer::tokenize, syntax::parser::parse};

    #[test]
    fn test_render_rpn() {
        let tokens = parse(tokenize("(2 + 3) * 4")).collect::<Vec<_>>();

        assert_eq!(render(&tokens), " 2 3 + 4 *\n");
        assert_eq!(render_trace(&tokens), "2 3 + 4 *\n");
    }

    #[test]
    fn test_render_error() {
        let tokens = parse(tokenize("1 + 2)")).collect::<Vec<_>>();

        assert_eq!(
            render(&tokens),
            " 1 2 +\nError happened at ).\nMessage: Expected ( for"
        );
    }

    #[test]
    fn test_render_unexpected_char() {
        let tokens = tokenize("#").collect::<Vec<_>>();

        assert_eq!(
            render_trace(&tokens),
            "\nError happened at #.\nMessage: Unexpected char #"
        );
    }

    #[test]
    fn test_render_does_not_consume() {
        let tokens = tokenize("1 + 1").collect::<Vec<_>>();
        let first = render(&tokens);

        assert_eq!(render(&tokens), first);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_render_nothing() {
        assert_eq!(render(&[]), "");
        assert_eq!(render_trace(&[]), "");
    }
}
