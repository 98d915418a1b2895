//! Operator and punctuation lexing via the longest-match trie.

use slc_util::Span;

use super::core::Lexer;
use crate::cursor::LineCursor;
use crate::error::LexError;

impl Lexer {
    pub(crate) fn lex_operator(
        &mut self,
        cursor: &mut LineCursor<'_>,
        span: Span,
    ) -> Result<(), LexError> {
        let bytes = cursor.rest();
        match self.trie.longest_match(bytes) {
            Some((kind, len)) => {
                cursor.advance(len);
                self.push_bare(kind, span);
                Ok(())
            }
            None => Err(LexError::UnrecognizedCharacter {
                byte: bytes[0],
                span,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn compound_assign_out_matches_plain() {
        let result = crate::lex_str("+=").unwrap();
        assert_eq!(result.tokens[0].kind, TokenKind::AddEq);
    }

    #[test]
    fn int_div_out_matches_div() {
        let result = crate::lex_str("//").unwrap();
        assert_eq!(result.tokens[0].kind, TokenKind::IntDiv);
    }

    #[test]
    fn punctuation() {
        let result = crate::lex_str("(x, y)").unwrap();
        let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::Newline,
                TokenKind::End,
            ]
        );
    }
}
