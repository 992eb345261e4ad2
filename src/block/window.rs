//! Rolling 64 KiB history window shared by the streaming compressor and the
//! streaming decoder.
//!
//! The window always holds the most recent `len() <= WINDOW_SIZE` bytes of
//! uncompressed data, oldest first.  A match offset never exceeds
//! [`LZ4_DISTANCE_MAX`](super::types::LZ4_DISTANCE_MAX), so anything older
//! than the window is unreachable.

use super::types::WINDOW_SIZE;

#[derive(Debug, Clone, Default)]
pub struct Window {
    buf: Vec<u8>,
}

impl Window {
    pub fn new() -> Self {
        Window { buf: Vec::with_capacity(WINDOW_SIZE) }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Slide `data` into the window.
    ///
    /// Input of at least `WINDOW_SIZE` bytes replaces the window with its own
    /// tail.  Shorter input evicts just enough of the oldest bytes to fit.
    pub fn append(&mut self, data: &[u8]) {
        if data.len() >= WINDOW_SIZE {
            self.buf.clear();
            self.buf.extend_from_slice(&data[data.len() - WINDOW_SIZE..]);
            return;
        }
        let overflow = (self.buf.len() + data.len()).saturating_sub(WINDOW_SIZE);
        if overflow > 0 {
            self.buf.drain(..overflow);
        }
        self.buf.extend_from_slice(data);
    }

    /// Discard the current history and start over from `data`'s tail.
    pub fn replace(&mut self, data: &[u8]) {
        self.buf.clear();
        self.append(data);
    }
}
