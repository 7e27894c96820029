use std::path::Path;

/// Decoded audio: one sample sequence per channel plus the sample rate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioBuffer {
    pub sample_rate: u32,
    pub channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Single-channel buffer
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self::new(sample_rate, vec![samples])
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }
}

pub type LoadResult = std::result::Result<AudioBuffer, Box<dyn std::error::Error + Send + Sync>>;

/// Reads an audio container from disk into an [`AudioBuffer`]
///
/// Container parsing lives outside the core; the CLI provides a WAV
/// implementation.
pub trait AudioLoader {
    fn load(&self, path: &Path) -> LoadResult;
}

impl<F> AudioLoader for F
where
    F: Fn(&Path) -> LoadResult,
{
    fn load(&self, path: &Path) -> LoadResult {
        self(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_access() {
        let audio = AudioBuffer::new(44100, vec![vec![0.1, 0.2], vec![0.3]]);
        assert_eq!(audio.channel_count(), 2);
        assert_eq!(audio.channel(0), Some(&[0.1, 0.2][..]));
        assert_eq!(audio.channel(1), Some(&[0.3][..]));
        assert!(audio.channel(2).is_none());
    }

    #[test]
    fn test_closure_loader() {
        let loader = |_: &Path| -> LoadResult { Ok(AudioBuffer::mono(8000, vec![0.0; 4])) };
        let audio = loader.load(Path::new("ignored.wav")).unwrap();
        assert_eq!(audio.sample_rate, 8000);
        assert_eq!(audio.channel_count(), 1);
    }
}
