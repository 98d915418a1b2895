//! String literal lexing, including triple-quoted multiline strings.

use slc_util::Span;

use super::core::{Lexer, MultilineState};
use crate::cursor::LineCursor;
use crate::error::LexError;
use crate::token::TokenKind;

fn unescape(raw: &[u8], span: Span) -> Result<String, LexError> {
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'\\' && i + 1 < raw.len() {
            let escaped = match raw[i + 1] {
                b'n' => '\n',
                b't' => '\t',
                b'\\' => '\\',
                b'"' => '"',
                b'\'' => '\'',
                other => {
                    return Err(LexError::InvalidEscape {
                        escape: other as char,
                        span,
                    })
                }
            };
            out.push(escaped);
            i += 2;
        } else {
            // Non-ASCII bytes pass through as part of the UTF-8 sequence
            // they belong to; we only ever special-case `\` above.
            let start = i;
            while i < raw.len() && raw[i] != b'\\' {
                i += 1;
            }
            out.push_str(&String::from_utf8_lossy(&raw[start..i]));
        }
    }
    Ok(out)
}

impl Lexer {
    /// Entry point when a `"` is seen mid-line. Distinguishes a plain
    /// string (`"..."`) from the start of a triple-quoted multiline string
    /// (`"""`) by looking two bytes ahead before consuming anything.
    pub(crate) fn lex_string(
        &mut self,
        cursor: &mut LineCursor<'_>,
        span: Span,
    ) -> Result<(), LexError> {
        if cursor.peek_at(1) == Some(b'"') && cursor.peek_at(2) == Some(b'"') {
            cursor.advance(3);
            return self.start_multiline_string(cursor, span);
        }

        cursor.bump(); // opening quote
        let start = cursor.column() as usize;
        loop {
            match cursor.peek() {
                None => return Err(LexError::UnterminatedString { span }),
                Some(b'"') => break,
                Some(b'\\') => {
                    cursor.bump();
                    cursor.bump();
                }
                Some(_) => {
                    cursor.bump();
                }
            }
        }
        let end = cursor.column() as usize;
        cursor.bump(); // closing quote

        let raw = cursor.slice(start, end);
        let text = unescape(raw, span)?;
        self.push_literal(TokenKind::String, &text, span);
        Ok(())
    }

    /// After the opening `"""` has been consumed, scan the rest of the
    /// current physical line looking for the closing `"""` on the same
    /// line. If it isn't found, the string carries over to following
    /// lines via `self.multiline` until a line supplies the close.
    fn start_multiline_string(
        &mut self,
        cursor: &mut LineCursor<'_>,
        span: Span,
    ) -> Result<(), LexError> {
        let rest = cursor.rest();
        if let Some(close) = find_triple_quote(rest) {
            let text = String::from_utf8_lossy(&rest[..close]).into_owned();
            cursor.advance(close + 3);
            self.push_literal(TokenKind::MultilineString, &text, span);
            return Ok(());
        }

        let mut buffer = String::from_utf8_lossy(rest).into_owned();
        buffer.push('\n');
        self.multiline = Some(MultilineState {
            start_span: span,
            buffer,
        });
        cursor.advance(rest.len());
        Ok(())
    }

    /// Continues a multiline string across a following physical line.
    /// Called directly from the outer loop in `core.rs`, bypassing normal
    /// token dispatch entirely: nothing on a line inside a multiline string
    /// is lexed as anything but string content.
    pub(crate) fn continue_multiline_string(
        &mut self,
        mut state: MultilineState,
        line: &[u8],
    ) -> Result<(), LexError> {
        if let Some(close) = find_triple_quote(line) {
            state.buffer.push_str(&String::from_utf8_lossy(&line[..close]));
            let span = state.start_span;
            self.push_literal(TokenKind::MultilineString, &state.buffer, span);
        } else {
            state.buffer.push_str(&String::from_utf8_lossy(line));
            state.buffer.push('\n');
            self.multiline = Some(state);
        }
        Ok(())
    }
}

fn find_triple_quote(bytes: &[u8]) -> Option<usize> {
    bytes.windows(3).position(|w| w == b"\"\"\"")
}
