//! Parser errors.
//!
//! `ParseError` is the taxonomy from the error-handling design: structural
//! violations (nested `fn`, missing `main`) and syntactic ones (unexpected
//! token, string-operand misuse). `ParseDiagnostic` is what the parser
//! actually accumulates — today that's just an error plus its span, but
//! keeping the two separate leaves room for a future warning severity
//! without reshaping `ParseError` itself.

use slc_lex::TokenKind;
use slc_util::Span;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected token {found:?} at {span}")]
    UnexpectedToken { found: TokenKind, span: Span },

    #[error("expected {expected:?}, found {found:?} at {span}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },

    #[error("nested function definitions are not allowed at {span}")]
    NestedFunction { span: Span },

    #[error("no function named \"main\" was defined")]
    MissingMain,

    #[error("string operands only support +, ==, and != at {span}")]
    StringOperandMisuse { span: Span },

    #[error("for-loop step direction is undecidable without 'by' at {span}")]
    UndecidableForStep { span: Span },

    #[error("'{keyword}' is reserved but not yet implemented at {span}")]
    NotYetImplemented { keyword: &'static str, span: Span },

    #[error("too many errors ({count}); parsing aborted")]
    TooManyErrors { count: usize },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedToken { span, .. }
            | ParseError::NestedFunction { span }
            | ParseError::StringOperandMisuse { span }
            | ParseError::UndecidableForStep { span }
            | ParseError::NotYetImplemented { span, .. } => *span,
            ParseError::MissingMain | ParseError::TooManyErrors { .. } => Span::DUMMY,
        }
    }
}

/// A single recorded failure. The parser never stops at the first one
/// (per the "emit immediately, increment a counter, abort above 10"
/// policy); instead it collects a `Vec<ParseDiagnostic>` across the whole
/// parse and the caller decides what to do with a non-empty one.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseDiagnostic {
    pub error: ParseError,
}

impl ParseDiagnostic {
    pub fn new(error: ParseError) -> Self {
        Self { error }
    }

    pub fn span(&self) -> Span {
        self.error.span()
    }
}

impl std::fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}
