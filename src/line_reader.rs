//! Newline delimited input with a line length limit.

use std::io::{self, BufRead};

/// Lines longer than this are dropped. A 64 KiB read buffer has to hold the
/// line plus its newline.
pub const MAX_LINE_LEN: usize = 64 * 1024 - 1;

/// Reads newline delimited lines, skipping overlong ones.
///
/// Unlike [`BufRead::read_until`], a line longer than the limit is never held
/// in memory as a whole: once the limit is exceeded, the remaining bytes up to
/// the next newline are consumed and thrown away.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    max_len: usize,
    /// Number of lines dropped for being too long.
    skipped: usize,
}

impl<R: BufRead> LineReader<R> {
    /// Wraps `reader` with the default [`MAX_LINE_LEN`].
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self::with_max_len(reader, MAX_LINE_LEN)
    }

    /// Wraps `reader` with a custom line length limit.
    #[must_use]
    pub const fn with_max_len(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len,
            skipped: 0,
        }
    }

    /// Number of lines dropped so far for exceeding the limit.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Reads the next line into `buf`, without its `\n` or `\r\n`.
    ///
    /// `buf` is cleared first. Returns `Ok(false)` once the input is exhausted.
    pub fn read_line(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        loop {
            buf.clear();
            let mut seen_any = false;
            let mut too_long = false;

            loop {
                let available = match self.reader.fill_buf() {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    if !seen_any {
                        return Ok(false);
                    }
                    // last line without trailing newline
                    break;
                }
                seen_any = true;

                let (end, consumed) = match memchr::memchr(b'\n', available) {
                    Some(i) => (i, i + 1),
                    None => (available.len(), available.len()),
                };
                if !too_long {
                    if buf.len() + end > self.max_len {
                        too_long = true;
                        buf.clear();
                    } else {
                        buf.extend_from_slice(&available[..end]);
                    }
                }
                let found_newline = consumed > end;
                self.reader.consume(consumed);
                if found_newline {
                    break;
                }
            }

            if too_long {
                self.skipped += 1;
                continue;
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            return Ok(true);
        }
    }
}
