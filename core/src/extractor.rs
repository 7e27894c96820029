use crate::assembler::assemble_messages;
use crate::audio::{AudioBuffer, AudioLoader};
use crate::bits::recover_bits;
use crate::error::{ExtractError, Result};
use crate::message::Message;
use crate::observer::{DecodeObserver, LogObserver, Stage};
use crate::uart::extract_bytes;
use crate::zero_crossing::find_zero_crossings;
use std::path::Path;

/// Decoding session
///
/// Owns the bitstream, bytestream and message list of the most recent run.
/// Every run starts from empty buffers, so running twice on the same input
/// yields the same messages.
pub struct Extractor<O: DecodeObserver = LogObserver> {
    observer: O,
    bitstream: Vec<bool>,
    bytestream: Vec<u8>,
    messages: Vec<Message>,
    has_run: bool,
}

impl Extractor<LogObserver> {
    pub fn new() -> Self {
        Self::with_observer(LogObserver)
    }
}

impl Default for Extractor<LogObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: DecodeObserver> Extractor<O> {
    pub fn with_observer(observer: O) -> Self {
        Self {
            observer,
            bitstream: Vec::new(),
            bytestream: Vec::new(),
            messages: Vec::new(),
            has_run: false,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Load `path` through `loader` and decode it
    pub fn run_file<L: AudioLoader + ?Sized>(
        &mut self,
        path: &Path,
        loader: &L,
    ) -> Result<&[Message]> {
        self.clear();
        self.observer.on_stage(Stage::ReadingAudio);

        let audio = loader.load(path).map_err(|source| ExtractError::LoadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        self.decode(&audio)
    }

    /// Decode already-loaded audio
    pub fn run(&mut self, audio: &AudioBuffer) -> Result<&[Message]> {
        self.clear();
        self.decode(audio)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn bitstream(&self) -> &[bool] {
        &self.bitstream
    }

    pub fn bytestream(&self) -> &[u8] {
        &self.bytestream
    }

    /// Whether the last run completed successfully
    pub fn has_run(&self) -> bool {
        self.has_run
    }

    fn clear(&mut self) {
        if self.has_run {
            self.observer.on_stage(Stage::ClearingPrevious);
        }

        self.bitstream.clear();
        self.bytestream.clear();
        self.messages.clear();
        self.has_run = false;
    }

    fn decode(&mut self, audio: &AudioBuffer) -> Result<&[Message]> {
        self.observer.on_stage(Stage::GeneratingBitstream);
        let crossings = find_zero_crossings(audio)?;
        self.bitstream = recover_bits(&crossings, audio.sample_rate);
        self.observer.on_stage_output(Stage::GeneratingBitstream, self.bitstream.len());

        self.observer.on_stage(Stage::GeneratingBytestream);
        self.bytestream = extract_bytes(&self.bitstream);
        self.observer.on_stage_output(Stage::GeneratingBytestream, self.bytestream.len());

        self.observer.on_stage(Stage::AssemblingMessages);
        self.messages = assemble_messages(&self.bytestream, &mut self.observer)?;
        self.observer.on_stage_output(Stage::AssemblingMessages, self.messages.len());

        self.observer.on_stage(Stage::Done);
        self.has_run = true;

        Ok(&self.messages)
    }
}
