//! Identifier and keyword lexing.

use slc_util::Span;

use super::core::Lexer;
use crate::cursor::LineCursor;
use crate::error::LexError;
use crate::token::TokenKind;

/// Maps reserved-word spellings to their keyword kind. Identifiers that
/// don't match any of these fall through to `TokenKind::Identifier`.
fn keyword_kind(text: &str) -> Option<TokenKind> {
    Some(match text {
        "fn" => TokenKind::Fn,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "elif" => TokenKind::Elif,
        "return" => TokenKind::Return,
        "by" => TokenKind::By,
        "from" => TokenKind::From,
        "import" => TokenKind::Import,
        "to" => TokenKind::To,
        "print" => TokenKind::Print,
        "match" => TokenKind::Match,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        _ => return None,
    })
}

impl Lexer {
    pub(crate) fn lex_identifier(
        &mut self,
        cursor: &mut LineCursor<'_>,
        span: Span,
    ) -> Result<(), LexError> {
        let start = cursor.column() as usize;
        while matches!(cursor.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            cursor.bump();
        }
        let end = cursor.column() as usize;
        let word = String::from_utf8_lossy(cursor.slice(start, end)).into_owned();

        let kind = keyword_kind(&word).unwrap_or(TokenKind::Identifier);
        self.push_literal(kind, &word, span);
        Ok(())
    }
}
