//! The line-streamer contract the lexer's outer loop consumes.
//!
//! The reference design keeps file I/O out of the lexer entirely: something
//! external hands over one physical line at a time, and the lexer never
//! opens, seeks, or buffers a file itself. `slc`'s CLI driver owns the real,
//! disk-backed implementation; this crate only depends on the trait.

/// Supplies physical lines, one at a time, to the lexer's outer loop.
pub trait LineSource {
    /// Fills `buf` with the next line's bytes, with any trailing `\n` or
    /// `\r\n` stripped. Returns the number of bytes placed into `buf`, or
    /// `0` at end of input. `buf` is cleared before every call. A genuinely
    /// blank line still counts as a line: implementations report at least
    /// `1` for it so the lexer's loop can tell "blank line" from "no more
    /// input" using the same return value.
    fn stream_line(&mut self, buf: &mut Vec<u8>) -> std::io::Result<usize>;
}

/// An in-memory [`LineSource`] that splits a string on line boundaries.
///
/// Used by tests and by anything that already has the whole source in
/// memory; the CLI driver uses its own buffered-reader-backed streamer
/// instead so it never materializes a whole file as one `String`.
pub struct SliceLineSource<'a> {
    lines: std::str::Split<'a, char>,
}

impl<'a> SliceLineSource<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.split('\n'),
        }
    }
}

impl<'a> LineSource for SliceLineSource<'a> {
    fn stream_line(&mut self, buf: &mut Vec<u8>) -> std::io::Result<usize> {
        buf.clear();
        match self.lines.next() {
            Some(line) => {
                let line = line.strip_suffix('\r').unwrap_or(line);
                buf.extend_from_slice(line.as_bytes());
                Ok(buf.len().max(1))
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newlines() {
        let mut src = SliceLineSource::new("a\nb\n");
        let mut buf = Vec::new();
        assert!(src.stream_line(&mut buf).unwrap() > 0);
        assert_eq!(buf, b"a");
        assert!(src.stream_line(&mut buf).unwrap() > 0);
        assert_eq!(buf, b"b");
        assert_eq!(src.stream_line(&mut buf).unwrap(), 1);
        assert_eq!(buf, b"");
        assert_eq!(src.stream_line(&mut buf).unwrap(), 0);
    }

    #[test]
    fn strips_carriage_return() {
        let mut src = SliceLineSource::new("a\r\n");
        let mut buf = Vec::new();
        src.stream_line(&mut buf).unwrap();
        assert_eq!(buf, b"a");
    }
}
