//! Recovers framed messages from audio encoded with two-tone interval timing
//!
//! Each bit is the interval between two zero crossings: a short interval is a `1`,
//! a long interval (at least twice the unit) is a `0`. Bits are grouped into
//! 11-bit UART-style frames, and the resulting bytes into 30-byte messages
//! followed by a wrapping-sum checksum.

pub mod assembler;
pub mod audio;
pub mod bits;
pub mod encoder;
pub mod error;
pub mod extractor;
pub mod message;
pub mod observer;
pub mod uart;
pub mod zero_crossing;

pub use audio::{AudioBuffer, AudioLoader, LoadResult};
pub use encoder::{StreamEncoder, ToneEncoder};
pub use error::{ExtractError, Result};
pub use extractor::Extractor;
pub use message::Message;
pub use observer::{DecodeObserver, LogObserver, NullObserver, Stage};

// Timing configuration
pub const UNIT_MICROSECONDS: u64 = 320;

// Frame configuration
pub const FRAME_BITS: usize = 11; // start bit + 8 data bits + 2 stop bits
pub const DATA_BITS: usize = 8;

// Message configuration
pub const MESSAGE_SIZE: usize = 30;
pub const START_MARKER: [u8; 2] = [0x42, 0x03];
pub const START_MARKER_XOR: u8 = START_MARKER[0] ^ START_MARKER[1]; // 0x41
pub const END_MARKER: u8 = 0x00;
