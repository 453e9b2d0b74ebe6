//! Contains the [`Parser`], which reorders infix tokens into reverse polish notation.

use std::collections::VecDeque;

use crate::lexical::token::{ErrorToken, Operator, Parenthesis, Token};

/// Reorders the given infix tokens into reverse polish notation.
///
/// The resulting stream is lazy: each pull on it pulls only as many tokens from `tokens`
/// as are needed to produce the next output token.
#[must_use]
pub fn parse<I>(tokens: I) -> Parser<I::IntoIter>
where
    I: IntoIterator<Item = Token>,
{
    Parser::new(tokens)
}

/// An entry of the operator stack that has not been emitted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    Open(Parenthesis),
}

/// A lazy stream of tokens in reverse polish notation, produced with the shunting-yard
/// algorithm from a stream of tokens in infix order.
///
/// The first [`Token::Error`] that passes through the parser, or that the parser produces
/// itself for unbalanced parentheses, ends the stream.
#[derive(Debug, Clone)]
pub struct Parser<I> {
    tokens: I,
    stack: Vec<Pending>,
    output: VecDeque<Token>,
    is_correct: bool,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Token>,
{
    /// Creates a parser reading infix tokens from `tokens`.
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            stack: Vec::new(),
            output: VecDeque::new(),
            is_correct: true,
        }
    }

    /// Whether no error has been seen or produced so far.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Handles a single infix token, queueing whatever it releases.
    #[tracing::instrument(level = "trace", skip_all, fields(token = token.str()))]
    fn accept(&mut self, token: Token) {
        match token {
            Token::Number(_) => self.emit(token),
            Token::Operator(operator) => {
                while let Some(Pending::Operator(top)) = self.stack.last() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }
                    if let Some(Pending::Operator(top)) = self.stack.pop() {
                        self.emit(top.into());
                    }
                }
                self.stack.push(Pending::Operator(operator));
            }
            Token::Parenthesis(parenthesis) if parenthesis.is_open => {
                self.stack.push(Pending::Open(parenthesis));
            }
            Token::Parenthesis(parenthesis) => self.close_parenthesis(parenthesis),
            Token::Error(_) => {
                tracing::debug!("Passing on error token from the tokenizer");
                self.is_correct = false;
                self.emit(token);
            }
            Token::EndOfInput => self.finish(),
        }
    }

    fn close_parenthesis(&mut self, close: Parenthesis) {
        loop {
            match self.stack.pop() {
                Some(Pending::Operator(operator)) => self.emit(operator.into()),
                Some(Pending::Open(_)) => return,
                None => {
                    self.fail(ErrorToken {
                        span: close.span,
                        message: "Expected ( for".to_string(),
                    });
                    return;
                }
            }
        }
    }

    /// Flushes the operator stack, then marks the end of the stream.
    fn finish(&mut self) {
        while let Some(pending) = self.stack.pop() {
            match pending {
                Pending::Operator(operator) => self.emit(operator.into()),
                Pending::Open(open) => {
                    self.stack.clear();
                    self.fail(ErrorToken {
                        span: open.span,
                        message: "Expected ) for".to_string(),
                    });
                    return;
                }
            }
        }

        self.emit(Token::EndOfInput);
    }

    fn fail(&mut self, error: ErrorToken) {
        tracing::debug!(at = error.span.str(), message = %error.message, "Unbalanced parentheses");
        self.is_correct = false;
        self.emit(error.into());
    }

    fn emit(&mut self, token: Token) {
        tracing::trace!(token = token.str(), "emitting");
        self.output.push_back(token);
    }
}

impl<I> Iterator for Parser<I>
where
    I: Iterator<Item = Token>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.output.pop_front() {
                return Some(token);
            }
            // input after the first error is discarded
            if !self.is_correct {
                return None;
            }

            let token = self.tokens.next()?;
            self.accept(token);
        }
    }
}

impl<I> std::iter::FusedIterator for Parser<I> where I: std::iter::FusedIterator<Item = Token> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::tokenizer::tokenize;

    fn rpn(input: &str) -> Vec<String> {
        parse(tokenize(input))
            .map(|token| token.str().to_string())
            .collect()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(rpn("2 + 3 * 4"), ["2", "3", "4", "*", "+", "#eof"]);
        assert_eq!(rpn("2 * 3 + 4"), ["2", "3", "*", "4", "+", "#eof"]);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(rpn("(2 + 3) * 4"), ["2", "3", "+", "4", "*", "#eof"]);
        assert_eq!(rpn("((1))"), ["1", "#eof"]);
        assert_eq!(
            rpn("2 * (3 + (4 - 1) / 5)"),
            ["2", "3", "4", "1", "-", "5", "/", "+", "*", "#eof"]
        );
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(rpn("9 - 4 - 3"), ["9", "4", "-", "3", "-", "#eof"]);
        assert_eq!(rpn("8 / 4 * 2"), ["8", "4", "/", "2", "*", "#eof"]);
    }

    #[test]
    fn test_operator_stops_at_open_parenthesis() {
        assert_eq!(rpn("(1 - 2) * 3"), ["1", "2", "-", "3", "*", "#eof"]);
        assert_eq!(rpn("4 * (1 - 2 * 3)"), ["4", "1", "2", "3", "*", "-", "*", "#eof"]);
        assert!(!parse(tokenize("2 * (1 + (3 - 4) / 5) - 6")).any(|token| token.is_parenthesis()));
    }

    #[test]
    fn test_single_number() {
        assert_eq!(rpn("12"), ["12", "#eof"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rpn("").is_empty());
    }

    #[test]
    fn test_unmatched_close_parenthesis() {
        let mut parser = parse(tokenize("2 + 3) * 4"));
        let tokens = parser.by_ref().collect::<Vec<_>>();

        assert!(!parser.is_correct());
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].str(), "2");
        assert_eq!(tokens[1].str(), "3");
        assert_eq!(tokens[2].str(), "+");
        let Token::Error(error) = &tokens[3] else {
            panic!("expected error token, found {:?}", tokens[3]);
        };
        assert_eq!(error.span.str(), ")");
        assert_eq!(error.message, "Expected ( for");
    }

    #[test]
    fn test_unmatched_open_parenthesis_is_reported_by_parser() {
        let tokens = parse(tokenize("(2 + 3")).collect::<Vec<_>>();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].str(), "+");
        assert!(matches!(
            &tokens[3],
            Token::Error(error) if error.span.str() == "(" && error.message == "Expected ) for"
        ));
        assert!(!tokens.iter().any(Token::is_end_of_input));
        assert!(!tokens.iter().any(Token::is_parenthesis));
    }

    #[test]
    fn test_tokenizer_error_is_passed_on() {
        let tokens = parse(tokenize("1 + 2 $ 3")).collect::<Vec<_>>();

        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[2], Token::Error(error) if error.span.str() == "$"));
    }

    #[test]
    fn test_input_after_error_is_discarded() {
        let upstream = tokenize("1 ) 2 + 3 (").collect::<Vec<_>>();
        let mut parser = parse(upstream);

        assert_eq!(parser.next().map(|token| token.str().to_string()), Some("1".to_string()));
        assert!(parser.next().is_some_and(|token| token.is_error()));
        assert_eq!(parser.next(), None);
        assert_eq!(parser.next(), None);
    }

    #[test]
    fn test_pulls_lazily() {
        let mut pulled = 0;
        let upstream = tokenize("1 + 2 * 3").inspect(|_| pulled += 1);
        let mut parser = parse(upstream);

        assert_eq!(parser.next().map(|token| token.str().to_string()), Some("1".to_string()));
        drop(parser);
        assert_eq!(pulled, 1);
    }
}
