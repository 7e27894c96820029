use crate::{DATA_BITS, FRAME_BITS};

/// One 11-bit asynchronous serial frame
///
/// Layout: bit 0 is the start bit (`false`), bits 1..=8 are data (LSB first),
/// bits 9 and 10 are the stop bits (`true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteFrame {
    bits: [bool; FRAME_BITS],
}

impl ByteFrame {
    /// Build a frame from exactly [`FRAME_BITS`] bits, `None` for any other length
    pub fn from_bits(bits: &[bool]) -> Option<Self> {
        let bits: [bool; FRAME_BITS] = bits.try_into().ok()?;
        Some(Self { bits })
    }

    /// Frame a data byte with start and stop bits
    pub fn from_byte(byte: u8) -> Self {
        let mut bits = [true; FRAME_BITS];
        bits[0] = false;
        for k in 0..DATA_BITS {
            bits[k + 1] = (byte >> k) & 1 == 1;
        }
        Self { bits }
    }

    pub fn bits(&self) -> &[bool; FRAME_BITS] {
        &self.bits
    }

    pub fn is_valid(&self) -> bool {
        !self.bits[0] && self.bits[FRAME_BITS - 2] && self.bits[FRAME_BITS - 1]
    }

    /// Data byte carried by bits 1..=8, regardless of frame validity
    pub fn data(&self) -> u8 {
        self.bits[1..=DATA_BITS]
            .iter()
            .enumerate()
            .fold(0u8, |byte, (k, &bit)| byte | ((bit as u8) << k))
    }

    /// Data byte if the start and stop bits are in place
    pub fn byte(&self) -> Option<u8> {
        self.is_valid().then(|| self.data())
    }
}

/// Split a bitstream into consecutive 11-bit frames and keep the bytes of valid ones
///
/// Trailing bits that do not fill a frame are dropped, as are frames with a bad
/// start or stop bit.
pub fn extract_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(FRAME_BITS)
        .filter_map(ByteFrame::from_bits)
        .filter_map(|frame| frame.byte())
        .collect()
}

/// Frame every byte of `bytes` back to back
pub fn frame_bytes(bytes: &[u8]) -> Vec<bool> {
    bytes
        .iter()
        .flat_map(|&byte| ByteFrame::from_byte(byte).bits)
        .collect()
}
