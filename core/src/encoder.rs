use crate::bits::unit_samples;
use crate::error::{ExtractError, Result};
use crate::message::Message;
use crate::uart::frame_bytes;
use crate::{END_MARKER, MESSAGE_SIZE, START_MARKER, START_MARKER_XOR};
use std::f32::consts::PI;

/// Byte used to fill the lead-in before the start marker
///
/// Neither `0xff ^ 0xff` nor `0xff ^ 0x42` equals the marker XOR.
const LEAD_IN_BYTE: u8 = 0xff;

/// Lead-in bytes always emitted, even when the stream is already long enough
const MIN_LEAD_IN: usize = 4;

/// Shortest stream the assembler accepts
const MIN_STREAM_LEN: usize = START_MARKER_XOR as usize - 1;

/// Padding for the last message of a payload that is not a multiple of the message size
const PAD_BYTE: u8 = b' ';

/// Builds the bytestream layout the assembler expects
///
/// `lead-in | 0x42 0x03 | (30 data bytes, checksum)* | 0x00`
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamEncoder;

impl StreamEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Split a payload into messages, padding the last one with spaces
    pub fn messages(&self, payload: &[u8]) -> Vec<Message> {
        payload
            .chunks(MESSAGE_SIZE)
            .map(|chunk| {
                let mut data = [PAD_BYTE; MESSAGE_SIZE];
                data[..chunk.len()].copy_from_slice(chunk);
                Message::new(data)
            })
            .collect()
    }

    /// Lay out messages (with whatever checksum they carry) between the markers
    pub fn encode_messages(&self, messages: &[Message]) -> Vec<u8> {
        let body_len = START_MARKER.len() + messages.len() * (MESSAGE_SIZE + 1) + 1;
        let lead_in = MIN_STREAM_LEN.saturating_sub(body_len).max(MIN_LEAD_IN);

        let mut bytes = Vec::with_capacity(lead_in + body_len);
        bytes.resize(lead_in, LEAD_IN_BYTE);
        bytes.extend_from_slice(&START_MARKER);
        for message in messages {
            bytes.extend_from_slice(&message.data);
            bytes.push(message.checksum);
        }
        bytes.push(END_MARKER);
        bytes
    }

    pub fn encode_stream(&self, payload: &[u8]) -> Vec<u8> {
        self.encode_messages(&self.messages(payload))
    }
}

/// Synthesizes the two-tone interval signal for a bitstream
///
/// Each bit is one half-sine lobe of alternating polarity: `unit` samples long
/// for a `1`, twice that for a `0`. A lead-in lobe and a tail lobe bracket the
/// bits so that every bit interval sits between two zero crossings.
pub struct ToneEncoder {
    sample_rate: u32,
    unit: usize,
    amplitude: f32,
    stream: StreamEncoder,
}

impl ToneEncoder {
    pub fn new(sample_rate: u32) -> Result<Self> {
        let unit = unit_samples(sample_rate);
        if unit == 0 {
            return Err(ExtractError::InvalidConfig(format!(
                "sample rate {} Hz is too low for a 320 µs unit interval",
                sample_rate
            )));
        }

        Ok(Self {
            sample_rate,
            unit,
            amplitude: 0.8,
            stream: StreamEncoder::new(),
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Set the peak amplitude, clamped to (0, 1]
    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.amplitude = amplitude.clamp(f32::EPSILON, 1.0);
    }

    /// Samples spanned by the interval carrying `bit`
    pub fn interval_samples(&self, bit: bool) -> usize {
        if bit {
            self.unit
        } else {
            2 * self.unit
        }
    }

    pub fn synthesize(&self, bits: &[bool]) -> Vec<f32> {
        let guard = 2 * self.unit;
        let body: usize = bits.iter().map(|&bit| self.interval_samples(bit)).sum();
        let total = 2 * guard + body;

        let mut samples = Vec::with_capacity(total);
        let lobes = std::iter::once(guard)
            .chain(bits.iter().map(|&bit| self.interval_samples(bit)))
            .chain(std::iter::once(guard));

        for (index, length) in lobes.enumerate() {
            let polarity = if index % 2 == 0 { 1.0 } else { -1.0 };
            push_lobe(&mut samples, length, polarity * self.amplitude);
        }

        samples
    }

    /// Encode a payload into audio samples
    /// Returns: lead-in lobe + framed stream + tail lobe
    pub fn encode(&self, payload: &[u8]) -> Vec<f32> {
        let bytes = self.stream.encode_stream(payload);
        self.synthesize(&frame_bytes(&bytes))
    }

    /// Encode pre-built messages, keeping their checksums as given
    pub fn encode_messages(&self, messages: &[Message]) -> Vec<f32> {
        let bytes = self.stream.encode_messages(messages);
        self.synthesize(&frame_bytes(&bytes))
    }
}

/// Half-sine of `length` samples; never touches zero so the crossing lands on the lobe edge
fn push_lobe(samples: &mut Vec<f32>, length: usize, peak: f32) {
    samples.extend((0..length).map(|j| peak * (PI * (j as f32 + 0.5) / length as f32).sin()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble_messages;
    use crate::bits::recover_bits;
    use crate::observer::NullObserver;
    use crate::uart::extract_bytes;
    use crate::zero_crossing::zero_crossings;

    #[test]
    fn test_messages_padded_with_spaces() {
        let messages = StreamEncoder::new().messages(b"hello");
        assert_eq!(messages.len(), 1);
        assert_eq!(&messages[0].data[..5], b"hello");
        assert!(messages[0].data[5..].iter().all(|&b| b == b' '));
        assert!(messages[0].is_valid());
    }

    #[test]
    fn test_message_count() {
        let encoder = StreamEncoder::new();
        assert!(encoder.messages(b"").is_empty());
        assert_eq!(encoder.messages(&[b'x'; MESSAGE_SIZE]).len(), 1);
        assert_eq!(encoder.messages(&[b'x'; MESSAGE_SIZE + 1]).len(), 2);
    }

    #[test]
    fn test_stream_meets_minimum_length() {
        let bytes = StreamEncoder::new().encode_stream(b"");
        assert_eq!(bytes.len(), MIN_STREAM_LEN);
        assert_eq!(bytes.last(), Some(&END_MARKER));
    }

    #[test]
    fn test_stream_layout() {
        let payload = [b'z'; MESSAGE_SIZE * 3];
        let bytes = StreamEncoder::new().encode_stream(&payload);
        assert_eq!(bytes.len(), MIN_LEAD_IN + 2 + 3 * (MESSAGE_SIZE + 1) + 1);
        assert_eq!(&bytes[MIN_LEAD_IN..MIN_LEAD_IN + 2], &START_MARKER);
    }

    #[test]
    fn test_stream_assembles_back() {
        let encoder = StreamEncoder::new();
        let payload = b"Two-tone interval timing carries this text across more than one message.";
        let bytes = encoder.encode_stream(payload);
        let messages = assemble_messages(&bytes, &mut NullObserver).unwrap();
        assert_eq!(messages, encoder.messages(payload));
    }

    #[test]
    fn test_rejects_low_sample_rate() {
        match ToneEncoder::new(3000) {
            Err(ExtractError::InvalidConfig(_)) => {} // Expected
            _ => panic!("Expected InvalidConfig error"),
        }
        assert!(ToneEncoder::new(3125).is_ok());
    }

    #[test]
    fn test_interval_lengths() {
        let encoder = ToneEncoder::new(44100).unwrap();
        assert_eq!(encoder.interval_samples(true), 14);
        assert_eq!(encoder.interval_samples(false), 28);
    }

    #[test]
    fn test_synthesized_intervals() {
        let encoder = ToneEncoder::new(44100).unwrap();
        let bits = [true, false, false, true, true, false];
        let samples = encoder.synthesize(&bits);

        let crossings = zero_crossings(&samples);
        assert_eq!(crossings.len(), bits.len() + 1);
        assert_eq!(recover_bits(&crossings, 44100), bits.to_vec());
        assert!(samples.iter().all(|&s| s != 0.0 && s.abs() <= encoder.amplitude()));
    }

    #[test]
    fn test_synthesize_empty() {
        let encoder = ToneEncoder::new(48000).unwrap();
        let samples = encoder.synthesize(&[]);
        assert_eq!(samples.len(), 4 * 15);
        assert_eq!(zero_crossings(&samples).len(), 1);
    }

    #[test]
    fn test_encode_recovers_bytes() {
        let encoder = ToneEncoder::new(44100).unwrap();
        let payload = b"Hello";
        let samples = encoder.encode(payload);

        let bits = recover_bits(&zero_crossings(&samples), 44100);
        assert_eq!(extract_bytes(&bits), StreamEncoder::new().encode_stream(payload));
    }

    #[test]
    fn test_encode_through_shared_reference() {
        let encoder = ToneEncoder::new(22050).unwrap();
        let shared: &ToneEncoder = &encoder;

        let first = shared.encode(b"same payload");
        let second = shared.encode(b"same payload");
        assert_eq!(first, second);

        let messages = StreamEncoder::new().messages(b"same payload");
        assert_eq!(first, shared.encode_messages(&messages));
    }

    #[test]
    fn test_amplitude_clamped() {
        let mut encoder = ToneEncoder::new(44100).unwrap();
        encoder.set_amplitude(3.0);
        assert_eq!(encoder.amplitude(), 1.0);
        encoder.set_amplitude(0.25);
        let peak = encoder
            .synthesize(&[false; 8])
            .iter()
            .fold(0.0f32, |max, &s| max.max(s.abs()));
        assert!(peak <= 0.25 && peak > 0.24);
    }
}
