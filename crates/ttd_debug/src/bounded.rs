use std::fmt;

/// Write cursor over a fixed-capacity byte buffer.
///
/// Writes that do not fit are cut at the last UTF-8 boundary that still fits
/// and everything after that is dropped. The buffer is never written past its
/// end; a zero-length buffer accepts nothing.
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    truncated: bool,
}

impl<'a> BoundedWriter<'a> {
    /// Starts writing at the beginning of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            truncated: false,
        }
    }

    /// Appends as much of `text` as fits. Returns `false` if anything was cut.
    pub fn push_str(&mut self, text: &str) -> bool {
        if self.truncated {
            return false;
        }
        let remaining = self.remaining();
        let take = if text.len() <= remaining {
            text.len()
        } else {
            self.truncated = true;
            floor_char_boundary(text, remaining)
        };
        self.buf[self.pos..self.pos + take].copy_from_slice(&text.as_bytes()[..take]);
        self.pos += take;
        !self.truncated
    }

    /// Number of bytes written so far; the next write starts here.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Size of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes still free.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether some output was dropped because the buffer was full.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        // Only whole characters are ever copied in.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

fn floor_char_boundary(text: &str, limit: usize) -> usize {
    let mut end = limit.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}
