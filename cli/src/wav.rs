use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;
use thiserror::Error;
use wavemsg_core::{AudioBuffer, AudioLoader, LoadResult};

#[derive(Debug, Error)]
pub enum WavError {
    #[error(transparent)]
    Hound(#[from] hound::Error),

    #[error("Unsupported sample format: {bits}-bit {format:?}")]
    UnsupportedFormat { bits: u16, format: SampleFormat },

    #[error("WAV file declares zero channels")]
    NoChannels,
}

/// Loads WAV files with hound, normalising every sample format to f32 in [-1.0, 1.0]
#[derive(Debug, Default, Clone, Copy)]
pub struct WavLoader;

impl WavLoader {
    pub fn read(path: &Path) -> Result<AudioBuffer, WavError> {
        let mut reader = WavReader::open(path)?;
        let spec = reader.spec();
        log::debug!(
            "Read WAV: {} Hz, {} channels, {} bits",
            spec.sample_rate,
            spec.channels,
            spec.bits_per_sample
        );

        let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Float, 32) => reader.samples::<f32>().collect::<Result<_, _>>()?,
            (SampleFormat::Int, bits @ 8..=32) => {
                let scale = (1i64 << (bits - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|s| s as f32 / scale))
                    .collect::<Result<_, _>>()?
            }
            (format, bits) => return Err(WavError::UnsupportedFormat { bits, format }),
        };

        let channels = deinterleave(&interleaved, spec.channels as usize)?;
        Ok(AudioBuffer::new(spec.sample_rate, channels))
    }
}

impl AudioLoader for WavLoader {
    fn load(&self, path: &Path) -> LoadResult {
        Ok(Self::read(path)?)
    }
}

fn deinterleave(samples: &[f32], channel_count: usize) -> Result<Vec<Vec<f32>>, WavError> {
    if channel_count == 0 {
        return Err(WavError::NoChannels);
    }

    let mut channels = vec![Vec::with_capacity(samples.len() / channel_count); channel_count];
    for frame in samples.chunks_exact(channel_count) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }
    Ok(channels)
}

/// Write mono samples as 16-bit PCM
pub fn write_mono_pcm16(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), WavError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        // Clamp to [-1.0, 1.0] range to avoid overflow, then scale to i16
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * 32767.0) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}
