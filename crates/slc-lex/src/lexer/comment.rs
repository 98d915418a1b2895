//! Comment and blank-line recognition.
//!
//! `;` starts a line comment that runs to the end of the physical line.
//! There is no block-comment syntax. A line that is empty, all
//! whitespace, or whitespace followed by `;` contributes no tokens and is
//! invisible to the indentation algorithm.

use crate::cursor::LineCursor;

pub(crate) fn skip_inline_whitespace(cursor: &mut LineCursor<'_>) {
    while matches!(cursor.peek(), Some(b' ') | Some(b'\t')) {
        cursor.bump();
    }
}

pub(crate) fn is_blank_or_comment_only(body: &[u8]) -> bool {
    let mut cursor = LineCursor::new(body);
    loop {
        match cursor.peek() {
            Some(b' ') | Some(b'\t') => {
                cursor.bump();
            }
            Some(b';') | None => return true,
            _ => return false,
        }
    }
}
