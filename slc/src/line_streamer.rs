//! Buffered file-backed implementation of `slc_lex::LineSource`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use slc_lex::LineSource;

/// Matches the line-streamer contract: lines no longer than 256 bytes.
const MAX_LINE_LEN: usize = 256;

pub struct LineStreamer {
    reader: BufReader<File>,
}

impl LineStreamer {
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self {
            reader: BufReader::new(File::open(path)?),
        })
    }
}

impl LineSource for LineStreamer {
    fn stream_line(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        buf.clear();
        let read = self.reader.read_until(b'\n', buf)?;
        if read == 0 {
            return Ok(0);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if buf.len() > MAX_LINE_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line exceeds {MAX_LINE_LEN} bytes"),
            ));
        }
        Ok(read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn streams_lines_with_terminators_stripped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fn main()\r\n    print 1\n").unwrap();
        let mut streamer = LineStreamer::open(file.path()).unwrap();

        let mut buf = Vec::new();
        assert_eq!(streamer.stream_line(&mut buf).unwrap(), 11);
        assert_eq!(buf, b"fn main()");

        buf.clear();
        assert_eq!(streamer.stream_line(&mut buf).unwrap(), 14);
        assert_eq!(buf, b"    print 1");

        buf.clear();
        assert_eq!(streamer.stream_line(&mut buf).unwrap(), 0);
    }

    #[test]
    fn overlong_line_is_an_io_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", "x".repeat(300)).unwrap();
        let mut streamer = LineStreamer::open(file.path()).unwrap();
        let mut buf = Vec::new();
        assert!(streamer.stream_line(&mut buf).is_err());
    }
}
