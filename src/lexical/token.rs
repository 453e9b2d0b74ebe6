//! Contains the [`Token`] enum and its related types.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::base::source_file::Span;

/// The source text carried by [`Token::EndOfInput`].
pub const END_OF_INPUT_STR: &str = "#eof";

/// Precedence level of a parenthesis, lower than that of any operator.
pub const PARENTHESIS_PRECEDENCE: i8 = -1;

/// Is an enumeration representing the binary operators of an expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum OperatorKind {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl OperatorKind {
    /// Gets the character the operator is written as.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Gets the operator written as the given character, if there is one.
    #[must_use]
    pub fn from_char(character: char) -> Option<Self> {
        Self::iter().find(|kind| kind.as_char() == character)
    }

    /// The precedence level of the operator. Operators with a higher level bind tighter.
    #[must_use]
    pub fn precedence(self) -> i8 {
        match self {
            Self::Plus | Self::Minus => 0,
            Self::Multiply | Self::Divide => 1,
        }
    }
}

/// Is an enumeration containing all kinds of tokens of an arithmetic expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, EnumAsInner)]
#[allow(missing_docs)]
pub enum Token {
    Number(Number),
    Operator(Operator),
    Parenthesis(Parenthesis),
    Error(ErrorToken),
    EndOfInput,
}

impl Token {
    /// Returns the source text the token was read from.
    ///
    /// The end-of-input marker does not come from the source and is written as
    /// [`END_OF_INPUT_STR`].
    #[must_use]
    pub fn str(&self) -> &str {
        match self {
            Self::Number(token) => token.span.str(),
            Self::Operator(token) => token.span.str(),
            Self::Parenthesis(token) => token.span.str(),
            Self::Error(token) => token.span.str(),
            Self::EndOfInput => END_OF_INPUT_STR,
        }
    }

    /// Returns the span of the token, or [`None`] for the end-of-input marker.
    #[must_use]
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::Number(token) => Some(&token.span),
            Self::Operator(token) => Some(&token.span),
            Self::Parenthesis(token) => Some(&token.span),
            Self::Error(token) => Some(&token.span),
            Self::EndOfInput => None,
        }
    }
}

/// Represents a contiguous sequence of decimal digits and the value it denotes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the value of the digits.
    pub value: i32,
}

impl Number {
    /// Reads the number spelled by the given span of digits.
    ///
    /// Returns [`None`] if the digits do not fit into an `i32`.
    #[must_use]
    pub fn from_digits(span: Span) -> Option<Self> {
        let value = span.str().parse().ok()?;
        Some(Self { span, value })
    }
}

/// Represents a single binary operator character.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the [`OperatorKind`] that the token represents.
    pub kind: OperatorKind,
}

impl Operator {
    /// The precedence level of the operator.
    #[must_use]
    pub fn precedence(&self) -> i8 {
        self.kind.precedence()
    }
}

/// Represents an opening or closing parenthesis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parenthesis {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Whether this is an opening parenthesis.
    pub is_open: bool,
}

impl Parenthesis {
    /// The precedence level of a parenthesis, see [`PARENTHESIS_PRECEDENCE`].
    #[must_use]
    pub fn precedence(&self) -> i8 {
        PARENTHESIS_PRECEDENCE
    }
}

/// Represents a malformed part of the expression.
///
/// Error tokens flow through the pipeline like any other token. Once one is produced, no
/// stage does any further work on the expression.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorToken {
    /// Is the span of the offending source text.
    pub span: Span,

    /// Describes what is wrong.
    pub message: String,
}
