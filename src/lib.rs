//! A sequential cursor over a fixed-length byte buffer.
//!
//! [`BufferCursor`] tracks a position within a buffer it owns for its
//! lifetime and provides bounds-checked reads and writes of fixed-width
//! unsigned integers (in either byte order) and of raw byte ranges. Every
//! operation either fully succeeds and advances the position by the number
//! of bytes moved, or fails with [`OutOfRange`] and changes nothing.
//!
//! The buffer never grows: this is the primitive that wire-format encoders
//! and decoders build on, not a stream.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod cursor;


pub use cursor::{BufferCursor, OutOfRange, Result};
