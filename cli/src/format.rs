use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};
use wavemsg_core::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Message data as raw characters
    Ascii,
    /// Per-message hex dump with checksum
    Hex,
    /// JSON array of messages
    Json,
    /// ASCII section followed by the hex section
    Both,
}

/// Concatenate all message data bytes, no separators
pub fn write_ascii<W: Write>(out: &mut W, messages: &[Message]) -> io::Result<()> {
    for message in messages {
        out.write_all(&message.data)?;
    }
    Ok(())
}

pub fn write_hex<W: Write>(out: &mut W, messages: &[Message]) -> io::Result<()> {
    for (index, message) in messages.iter().enumerate() {
        writeln!(out, "Message #{}", index + 1)?;
        for byte in message.data {
            write!(out, "0x{:02x} ", byte)?;
        }
        writeln!(out)?;
        writeln!(out, "CHECKSUM: 0x{:02x}", message.checksum)?;
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonMessage<'a> {
    index: usize,
    data: &'a [u8],
    text: String,
    checksum: u8,
    valid: bool,
}

pub fn write_json<W: Write>(out: &mut W, messages: &[Message]) -> io::Result<()> {
    let records: Vec<JsonMessage> = messages
        .iter()
        .enumerate()
        .map(|(index, message)| JsonMessage {
            index: index + 1,
            data: &message.data,
            text: String::from_utf8_lossy(&message.data).into_owned(),
            checksum: message.checksum,
            valid: message.is_valid(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

/// Render `messages` in `format`; `Both` mirrors the two-section report of the decoder
///
/// `Ascii` emits the data bytes and nothing else, so the output can be piped
/// back into `encode` unchanged.
pub fn write_messages<W: Write>(
    out: &mut W,
    messages: &[Message],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Ascii => write_ascii(out, messages),
        OutputFormat::Hex => write_hex(out, messages),
        OutputFormat::Json => write_json(out, messages),
        OutputFormat::Both => {
            writeln!(out, "ASCII representation")?;
            writeln!(out, "=========")?;
            write_ascii(out, messages)?;
            writeln!(out)?;
            writeln!(out)?;
            writeln!(out, "Message representation")?;
            writeln!(out, "=========")?;
            write_hex(out, messages)
        }
    }
}
