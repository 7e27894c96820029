use crate::error::{ExtractError, Result};
use crate::message::Message;
use crate::observer::DecodeObserver;
use crate::{END_MARKER, MESSAGE_SIZE, START_MARKER_XOR};

/// Index of the first message byte, just past the first pair of bytes whose XOR is 0x41
pub fn find_start(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(2)
        .position(|pair| pair[0] ^ pair[1] == START_MARKER_XOR)
        .map(|i| i + 2)
}

/// Index of the last zero byte at or after `start`
pub fn find_end_marker(bytes: &[u8], start: usize) -> Option<usize> {
    bytes
        .get(start..)?
        .iter()
        .rposition(|&byte| byte == END_MARKER)
        .map(|offset| start + offset)
}

/// Group the bytes between the start and end markers into messages
///
/// Every complete message is returned, including those whose checksum does not
/// match; mismatches are reported to `observer`.
pub fn assemble_messages<O: DecodeObserver>(
    bytes: &[u8],
    observer: &mut O,
) -> Result<Vec<Message>> {
    if bytes.is_empty() || bytes.len() + 2 <= START_MARKER_XOR as usize {
        return Err(ExtractError::EmptyOrTooShortStream);
    }

    let start = find_start(bytes).ok_or(ExtractError::StartMarkerNotFound)?;
    let end_marker = find_end_marker(bytes, start).ok_or(ExtractError::EndMarkerNotFound)?;

    // message region is start..end_marker; checksum bytes are interleaved after each 30 data bytes
    let region = &bytes[start..end_marker];
    log::debug!(
        "Message region spans bytes {}..{} ({} bytes)",
        start,
        end_marker,
        region.len()
    );

    let mut messages = Vec::new();
    let mut cursor = 0;

    while cursor + MESSAGE_SIZE <= region.len() {
        let mut data = [0u8; MESSAGE_SIZE];
        data.copy_from_slice(&region[cursor..cursor + MESSAGE_SIZE]);

        // the checksum may land on the terminating zero itself
        let checksum = bytes[start + cursor + MESSAGE_SIZE];
        let message = Message::with_checksum(data, checksum);

        if !message.is_valid() {
            observer.on_invalid_checksum(messages.len() + 1, message.computed_checksum(), checksum);
        }

        messages.push(message);
        cursor += MESSAGE_SIZE + 1;
    }

    if cursor < region.len() {
        log::debug!(
            "Discarding {} trailing bytes that do not fill a message",
            region.len() - cursor
        );
    }

    Ok(messages)
}
