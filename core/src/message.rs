use crate::MESSAGE_SIZE;

/// 8-bit wrapping sum of the data bytes
pub fn checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |sum, &byte| sum.wrapping_add(byte))
}

/// A fixed-size message as recovered from the bytestream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub data: [u8; MESSAGE_SIZE],
    pub checksum: u8,
}

impl Message {
    /// Message carrying `data` with its correct checksum
    pub fn new(data: [u8; MESSAGE_SIZE]) -> Self {
        Self {
            data,
            checksum: checksum(&data),
        }
    }

    pub fn with_checksum(data: [u8; MESSAGE_SIZE], checksum: u8) -> Self {
        Self { data, checksum }
    }

    /// Checksum the data bytes actually add up to
    pub fn computed_checksum(&self) -> u8 {
        checksum(&self.data)
    }

    pub fn is_valid(&self) -> bool {
        self.computed_checksum() == self.checksum
    }
}
