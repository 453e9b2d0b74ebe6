//! Contains the [`Tokenizer`], a finite-state machine turning characters into [`Token`]s.

use std::{iter::FusedIterator, sync::Arc};

use crate::base::source_file::{SourceFile, Span};

use super::{
    token::{ErrorToken, Number, Operator, OperatorKind, Parenthesis, Token},
    UsageError,
};

/// Identifier given to sources created by [`tokenize`].
pub const DEFAULT_SOURCE_IDENTIFIER: &str = "<input>";

/// Converts the given text into a lazy stream of tokens.
///
/// The stream ends with [`Token::EndOfInput`], unless the text contains a character that
/// is not part of an expression, in which case it ends with a single [`Token::Error`].
/// Empty text produces no tokens at all.
#[must_use]
pub fn tokenize(input: &str) -> Tokenizer {
    Tokenizer::new(SourceFile::new(DEFAULT_SOURCE_IDENTIFIER, input))
}

/// Is an enumeration of the states of the [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// No token is in progress.
    #[default]
    Start,
    /// Digits of a number are being collected.
    InNumber {
        /// Byte index of the first digit.
        start: usize,
        /// Byte index just past the last digit read so far.
        end: usize,
    },
    /// The tokenizer has finished and accepts no further input.
    End,
}

/// Input offered to a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A character at the given byte index.
    Char(usize, char),
    /// The source has no more characters.
    EndOfInput,
}

/// The outcome of offering an [`Input`] to a [`State`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state to move to.
    pub state: State,
    /// Whether the input was used up. An unconsumed character is offered again.
    pub consumed: bool,
    /// The token produced by the transition, if any.
    pub token: Option<Token>,
}

impl Transition {
    fn consume(state: State, token: Option<Token>) -> Self {
        Self {
            state,
            consumed: true,
            token,
        }
    }

    fn keep(state: State, token: Token) -> Self {
        Self {
            state,
            consumed: false,
            token: Some(token),
        }
    }
}

impl State {
    /// Whether this is the terminal state.
    #[must_use]
    pub fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    /// Offers `input` to the state and returns the resulting [`Transition`].
    ///
    /// # Errors
    /// - [`UsageError::TerminatedTokenizer`] if the state is [`State::End`].
    pub fn accept(
        self,
        input: Input,
        source_file: &Arc<SourceFile>,
    ) -> Result<Transition, UsageError> {
        match (self, input) {
            (Self::Start, Input::Char(_, character)) if character.is_whitespace() => {
                Ok(Transition::consume(Self::Start, None))
            }
            (Self::Start, Input::Char(index, character)) if character.is_ascii_digit() => {
                let end = index + character.len_utf8();
                Ok(Transition::consume(Self::InNumber { start: index, end }, None))
            }
            (Self::Start, Input::Char(index, character)) => {
                let span = Span::character(source_file, index, character);
                let token = match character {
                    '(' | ')' => Parenthesis {
                        span,
                        is_open: character == '(',
                    }
                    .into(),
                    _ => {
                        if let Some(kind) = OperatorKind::from_char(character) {
                            Operator { span, kind }.into()
                        } else {
                            let token = ErrorToken {
                                span,
                                message: format!("Unexpected char {character}"),
                            };
                            return Ok(Transition::consume(Self::End, Some(token.into())));
                        }
                    }
                };

                Ok(Transition::consume(Self::Start, Some(token)))
            }
            (Self::Start, Input::EndOfInput) => {
                Ok(Transition::consume(Self::End, Some(Token::EndOfInput)))
            }
            (Self::InNumber { start, .. }, Input::Char(index, character))
                if character.is_ascii_digit() =>
            {
                let end = index + character.len_utf8();
                Ok(Transition::consume(Self::InNumber { start, end }, None))
            }
            (Self::InNumber { start, end }, Input::Char(..)) => {
                Ok(Self::finish_number(source_file, start, end, false))
            }
            (Self::InNumber { start, end }, Input::EndOfInput) => {
                Ok(Self::finish_number(source_file, start, end, true))
            }
            (Self::End, _) => Err(UsageError::TerminatedTokenizer),
        }
    }

    /// Emits the collected digits and returns to [`State::Start`], which sees the
    /// current input again.
    fn finish_number(
        source_file: &Arc<SourceFile>,
        start: usize,
        end: usize,
        at_end_of_input: bool,
    ) -> Transition {
        let span = Span::covering(source_file, start, end);

        match Number::from_digits(span.clone()) {
            Some(number) if at_end_of_input => {
                Transition::consume(Self::Start, Some(number.into()))
            }
            Some(number) => Transition::keep(Self::Start, number.into()),
            None => {
                let token = ErrorToken {
                    span,
                    message: "Number is out of range".to_string(),
                };
                Transition::consume(Self::End, Some(token.into()))
            }
        }
    }
}

/// A lazy, non-restartable stream of [`Token`]s read from a [`SourceFile`].
#[derive(Debug, Clone)]
pub struct Tokenizer {
    source_file: Arc<SourceFile>,
    /// Byte index of the next character that has not been read.
    position: usize,
    /// A character that was read but not consumed by the last transition.
    pending: Option<(usize, char)>,
    state: State,
}

impl Tokenizer {
    /// Creates a tokenizer reading the given source from its start.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>) -> Self {
        let state = if source_file.content().is_empty() {
            State::End
        } else {
            State::Start
        };

        Self {
            source_file,
            position: 0,
            pending: None,
            state,
        }
    }

    /// Gets the source the tokenizer reads from.
    #[must_use]
    pub fn source_file(&self) -> &Arc<SourceFile> {
        &self.source_file
    }

    /// Gets the current state of the machine.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Drives the machine until it produces a token.
    ///
    /// Characters that do not complete a token, like whitespace or the digits of a number,
    /// are consumed silently along the way.
    ///
    /// # Errors
    /// - [`UsageError::TerminatedTokenizer`] if the tokenizer already reached its end state.
    pub fn step(&mut self) -> Result<Option<Token>, UsageError> {
        loop {
            let input = self
                .pending
                .take()
                .or_else(|| self.read_char())
                .map_or(Input::EndOfInput, |(index, character)| {
                    Input::Char(index, character)
                });

            let transition = self.state.accept(input, &self.source_file)?;
            tracing::trace!(from = ?self.state, to = ?transition.state, ?input, "tokenizer transition");

            if let (false, Input::Char(index, character)) = (transition.consumed, input) {
                self.pending = Some((index, character));
            }
            self.state = transition.state;

            if transition.token.is_some() || self.state.is_end() {
                return Ok(transition.token);
            }
        }
    }

    fn read_char(&mut self) -> Option<(usize, char)> {
        let index = self.position;
        let character = self.source_file.char_at(index)?;
        self.position += character.len_utf8();

        Some((index, character))
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_end() {
            return None;
        }

        match self.step() {
            Ok(token) => token,
            Err(err) => {
                tracing::error!(%err, "tokenizer was driven past its end state");
                None
            }
        }
    }
}

impl FusedIterator for Tokenizer {}
