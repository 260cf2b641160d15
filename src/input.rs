//! Single-character reading from a line-oriented input stream

use std::io::{self, BufRead, ErrorKind};
use tracing::{instrument, trace};

/// Result of one attempt to read a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// First non-whitespace character; the rest of the line stays buffered
    Char(char),
    /// Bytes at the cursor are not valid UTF-8
    Malformed,
    /// Stream ended before any non-whitespace character
    Eof,
}

/// Reads one non-whitespace character per call, like `scanf(" %c")`.
///
/// Leftover characters on the line are not consumed: `"ed\n"` yields `e` and then `d`.
/// Call [`ChoiceReader::discard_line`] to drop the rest of a line after a bad read.
pub struct ChoiceReader<R> {
    inner: R,
}

impl<R: BufRead> ChoiceReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn read_choice(&mut self) -> io::Result<ReadOutcome> {
        loop {
            let first = match self.next_byte()? {
                Some(byte) => byte,
                None => return Ok(ReadOutcome::Eof),
            };

            if first.is_ascii() {
                // C isspace also covers vertical tab, which is_ascii_whitespace leaves out
                if first.is_ascii_whitespace() || first == b'\x0b' {
                    continue;
                }
                return Ok(ReadOutcome::Char(char::from(first)));
            }

            let outcome = self.read_multibyte(first)?;
            match outcome {
                ReadOutcome::Char(c) if c.is_whitespace() => continue,
                other => return Ok(other),
            }
        }
    }

    /// Drops input up to and including the next newline, or to end of stream.
    ///
    /// Returns the number of bytes dropped.
    #[instrument(level = "trace", skip(self))]
    pub fn discard_line(&mut self) -> io::Result<usize> {
        let mut discarded = Vec::new();
        loop {
            match self.inner.read_until(b'\n', &mut discarded) {
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        trace!("discarded {} bytes", discarded.len());
        Ok(discarded.len())
    }

    fn read_multibyte(&mut self, first: u8) -> io::Result<ReadOutcome> {
        let width = match first {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(ReadOutcome::Malformed),
        };

        let mut bytes = [first, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek_byte()? {
                Some(byte) if byte & 0xC0 == 0x80 => {
                    *slot = byte;
                    self.inner.consume(1);
                }
                _ => return Ok(ReadOutcome::Malformed),
            }
        }

        match std::str::from_utf8(&bytes[..width]) {
            Ok(s) => Ok(s.chars().next().map_or(ReadOutcome::Malformed, ReadOutcome::Char)),
            Err(_) => Ok(ReadOutcome::Malformed),
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.peek_byte()?;
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
