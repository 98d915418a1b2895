//! Lexical errors.

use slc_util::Span;
use thiserror::Error;

/// Everything that can go wrong while turning source lines into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal at {span}")]
    UnterminatedString { span: Span },

    #[error("unterminated multiline string literal starting at {span}")]
    UnterminatedMultilineString { span: Span },

    #[error("unrecognized character {byte:?} at {span}")]
    UnrecognizedCharacter { byte: u8, span: Span },

    #[error("invalid escape sequence '\\{escape}' at {span}")]
    InvalidEscape { escape: char, span: Span },

    #[error("invalid number literal \"{text}\" at {span}")]
    InvalidNumber { text: String, span: Span },

    #[error("mixed tabs and spaces in indentation at {span}")]
    MixedIndentation { span: Span },

    #[error("indentation increased by more than one level at {span}")]
    InconsistentIndentStep { span: Span },

    #[error("unindent does not match any outer indentation level at {span}")]
    InconsistentDedent { span: Span },

    #[error("indentation nested past the maximum depth of {max} at {span}")]
    IndentTooDeep { max: u32, span: Span },

    #[error("I/O error reading source: {0}")]
    Io(String),
}

impl LexError {
    /// The span every diagnostic carries, for the CLI's
    /// `<message> at line L:C (<token-kind>)` formatting.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::UnterminatedMultilineString { span }
            | LexError::UnrecognizedCharacter { span, .. }
            | LexError::InvalidEscape { span, .. }
            | LexError::InvalidNumber { span, .. }
            | LexError::MixedIndentation { span }
            | LexError::InconsistentIndentStep { span }
            | LexError::InconsistentDedent { span }
            | LexError::IndentTooDeep { span, .. } => *span,
            LexError::Io(_) => Span::DUMMY,
        }
    }
}
