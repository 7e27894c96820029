use crate::audio::AudioBuffer;
use crate::error::{ExtractError, Result};

/// Find zero crossings on the first channel of `audio`
///
/// Only channel 0 is read; the transmitter writes the same signal to every channel.
pub fn find_zero_crossings(audio: &AudioBuffer) -> Result<Vec<usize>> {
    let samples = audio.channel(0).ok_or(ExtractError::NoChannelData)?;
    Ok(zero_crossings(samples))
}

/// Indices `i` where the signal changes sign or leaves zero between
/// `samples[i]` and `samples[i + 1]`
pub fn zero_crossings(samples: &[f32]) -> Vec<usize> {
    samples
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| is_crossing(pair[0], pair[1]))
        .map(|(i, _)| i)
        .collect()
}

fn is_crossing(current: f32, next: f32) -> bool {
    (current > 0.0 && next <= 0.0)
        || (current < 0.0 && next >= 0.0)
        || (current == 0.0 && next != 0.0)
}
