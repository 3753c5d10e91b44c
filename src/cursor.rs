use zerocopy::byteorder::{BE, LE, U16, U32};

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Result type for cursor operations.
pub type Result<T> = core::result::Result<T, OutOfRange>;

/// A cursor over a fixed-length byte buffer.
///
/// The cursor owns its backing storage `T` for its lifetime and keeps a
/// single position shared between reads and writes. Reads require
/// `T: AsRef<[u8]>`, writes require `T: AsMut<[u8]>`; the usual choices are
/// `&[u8]` for parsing, `&mut [u8]` or `Vec<u8>` for assembling, and
/// `[u8; N]` for either.
///
/// Multi-byte integers are available in both byte orders as separate
/// methods, e.g. [`read_u16_le`](Self::read_u16_le) and
/// [`read_u16_be`](Self::read_u16_be). There is no runtime width or
/// endianness parameter, so the size of every access is known at the call
/// site.
///
/// The buffer length is fixed at construction. An access that would run
/// past the end fails with [`OutOfRange`] before touching anything, so a
/// failed call leaves both the position and the buffer exactly as they
/// were. There is no seek: the position only moves forward, by exactly the
/// number of bytes each successful call transfers.
pub struct BufferCursor<T> {
    buf: T,
    pos: usize,
}

impl<T> BufferCursor<T> {
    /// Creates a cursor positioned at the start of `buf`. The storage is
    /// moved in, not copied.
    pub fn new(buf: T) -> Self {
        Self { buf, pos: 0 }
    }

    /// The current offset: the next byte index a read or write will touch.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Consumes the cursor and returns the backing storage.
    pub fn into_inner(self) -> T {
        self.buf
    }
}

impl BufferCursor<Vec<u8>> {
    /// Creates a cursor over a freshly allocated, zero-filled buffer of
    /// `len` bytes. This is the usual starting point for a write pass.
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![0u8; len])
    }
}

impl<T: AsRef<[u8]>> BufferCursor<T> {
    /// Total length of the backing buffer. Fixed for the cursor's lifetime.
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    /// True if the backing buffer has length zero.
    pub fn is_empty(&self) -> bool {
        self.buf.as_ref().is_empty()
    }

    /// Number of bytes between the current position and the end.
    pub fn remaining(&self) -> usize {
        self.len() - self.pos
    }

    /// True iff the position has reached the end of the buffer.
    pub fn eof(&self) -> bool {
        self.pos == self.len()
    }

    /// A view of the entire backing buffer, independent of the position.
    pub fn buffer(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Checks that `n` bytes remain, then consumes and returns them.
    fn take(&mut self, n: usize) -> Result<&[u8]> {
        let start = self.pos;
        let len = self.buf.as_ref().len();
        if len - start < n {
            return Err(OutOfRange {
                position: start,
                requested: n,
                length: len,
            });
        }
        self.pos = start + n;
        Ok(&self.buf.as_ref()[start..start + n])
    }

    /// Consumes a fixed-size run of bytes as an array.
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.take(N)?;
        // This unwrap() call will get optimized out.
        Ok(*<&[u8; N]>::try_from(bytes).unwrap())
    }

    /// Reads a single `u8` and advances by 1.
    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    /// Reads a `u16` in little-endian byte order and advances by 2.
    #[inline(always)]
    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(U16::<LE>::from_bytes(self.take_array()?).get())
    }

    /// Reads a `u16` in big-endian byte order and advances by 2.
    #[inline(always)]
    pub fn read_u16_be(&mut self) -> Result<u16> {
        Ok(U16::<BE>::from_bytes(self.take_array()?).get())
    }

    /// Reads a `u32` in little-endian byte order and advances by 4.
    #[inline(always)]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(U32::<LE>::from_bytes(self.take_array()?).get())
    }

    /// Reads a `u32` in big-endian byte order and advances by 4.
    #[inline(always)]
    pub fn read_u32_be(&mut self) -> Result<u32> {
        Ok(U32::<BE>::from_bytes(self.take_array()?).get())
    }

    /// Reads `n` bytes and advances by `n`.
    ///
    /// The bytes are returned as an independent copy: later writes through
    /// this cursor never show up in a previously returned range. `n == 0`
    /// always succeeds with an empty vec, even at eof.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        Ok(self.take(n)?.to_vec())
    }

    /// Reads everything from the current position to the end of the
    /// buffer, advancing the position to the end.
    ///
    /// This is the "rest of the buffer" read; at eof it returns an empty
    /// vec rather than failing, so a final drain is always safe.
    pub fn read_remaining(&mut self) -> Vec<u8> {
        let rest = self.buf.as_ref()[self.pos..].to_vec();
        self.pos = self.buf.as_ref().len();
        rest
    }
}

impl<T: AsMut<[u8]>> BufferCursor<T> {
    /// Checks that `bytes` fits, then copies it in and advances past it.
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        let start = self.pos;
        let buf = self.buf.as_mut();
        if buf.len() - start < bytes.len() {
            return Err(OutOfRange {
                position: start,
                requested: bytes.len(),
                length: buf.len(),
            });
        }
        buf[start..start + bytes.len()].copy_from_slice(bytes);
        self.pos = start + bytes.len();
        Ok(())
    }

    /// Writes `bytes` at the current position and advances by its length.
    ///
    /// An empty source always succeeds without moving the position.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.put(bytes)
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn write_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<()> {
        self.put(&value)
    }

    /// Writes a single `u8` and advances by 1.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_cbytes([value])
    }

    /// Writes a `u16` in little-endian byte order and advances by 2.
    pub fn write_u16_le(&mut self, value: u16) -> Result<()> {
        self.write_cbytes(U16::<LE>::new(value).to_bytes())
    }

    /// Writes a `u16` in big-endian byte order and advances by 2.
    pub fn write_u16_be(&mut self, value: u16) -> Result<()> {
        self.write_cbytes(U16::<BE>::new(value).to_bytes())
    }

    /// Writes a `u32` in little-endian byte order and advances by 4.
    pub fn write_u32_le(&mut self, value: u32) -> Result<()> {
        self.write_cbytes(U32::<LE>::new(value).to_bytes())
    }

    /// Writes a `u32` in big-endian byte order and advances by 4.
    pub fn write_u32_be(&mut self, value: u32) -> Result<()> {
        self.write_cbytes(U32::<BE>::new(value).to_bytes())
    }
}

/// Error type for `BufferCursor`.
///
/// The single failure mode: an access would run past the end of the
/// buffer. The failed operation has no effect; the fields describe the
/// rejected request so the caller can tell how short the buffer was.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct OutOfRange {
    /// Position the access would have started at.
    pub position: usize,
    /// Number of bytes the access needed.
    pub requested: usize,
    /// Total length of the buffer.
    pub length: usize,
}

impl core::error::Error for OutOfRange {}

impl core::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "index out of range: {} bytes at position {} exceed buffer length {}",
            self.requested, self.position, self.length
        )
    }
}
