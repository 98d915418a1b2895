//! Integer and floating-point literal lexing.

use slc_util::Span;

use super::core::Lexer;
use crate::cursor::LineCursor;
use crate::error::LexError;
use crate::token::TokenKind;

impl Lexer {
    /// Scans a run of `[0-9.]`. A single `.` makes the literal a `Float`;
    /// a second one is a fatal malformed-number error. Both kinds keep
    /// their original source text so downstream code can parse to `f64`
    /// while still knowing whether the literal looked like an integer.
    pub(crate) fn lex_number(
        &mut self,
        cursor: &mut LineCursor<'_>,
        span: Span,
    ) -> Result<(), LexError> {
        let start = cursor.column() as usize;
        let mut dots = 0u32;
        while matches!(cursor.peek(), Some(b) if b.is_ascii_digit() || b == b'.') {
            if cursor.peek() == Some(b'.') {
                dots += 1;
            }
            cursor.bump();
        }
        let end = cursor.column() as usize;
        let text = String::from_utf8_lossy(cursor.slice(start, end)).into_owned();

        if dots > 1 {
            return Err(LexError::InvalidNumber { text, span });
        }
        if text.parse::<f64>().is_err() {
            return Err(LexError::InvalidNumber { text, span });
        }

        let kind = if dots == 1 {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.push_literal(kind, &text, span);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literal() {
        let result = crate::lex_str("42").unwrap();
        let tok = result.tokens[0];
        assert_eq!(tok.kind, TokenKind::Integer);
        assert_eq!(result.interner.resolve(tok.text.unwrap()), "42");
    }

    #[test]
    fn float_literal() {
        let result = crate::lex_str("3.14").unwrap();
        let tok = result.tokens[0];
        assert_eq!(tok.kind, TokenKind::Float);
        assert_eq!(result.interner.resolve(tok.text.unwrap()), "3.14");
    }

    #[test]
    fn trailing_dot_is_a_float() {
        let result = crate::lex_str("1.").unwrap();
        assert_eq!(result.tokens[0].kind, TokenKind::Float);
    }

    #[test]
    fn two_dots_is_malformed() {
        let err = crate::lex_str("1.2.3").unwrap_err();
        assert!(matches!(err, LexError::InvalidNumber { .. }));
    }

    #[test]
    fn arbitrary_digit_strings_lex_to_one_integer_token() {
        use proptest::prelude::*;

        proptest!(|(digits in "[0-9]{1,18}")| {
            let result = crate::lex_str(&digits).unwrap();
            prop_assert_eq!(result.tokens[0].kind, TokenKind::Integer);
            prop_assert_eq!(result.interner.resolve(result.tokens[0].text.unwrap()), digits.as_str());
        });
    }

    #[test]
    fn single_dot_makes_any_digit_string_a_float() {
        use proptest::prelude::*;

        proptest!(|(whole in "[0-9]{1,9}", frac in "[0-9]{1,9}")| {
            let text = format!("{whole}.{frac}");
            let result = crate::lex_str(&text).unwrap();
            prop_assert_eq!(result.tokens[0].kind, TokenKind::Float);
        });
    }
}
