use std::fmt;

/// Pipeline stage reported to a [`DecodeObserver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ClearingPrevious,
    ReadingAudio,
    GeneratingBitstream,
    GeneratingBytestream,
    AssemblingMessages,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Stage::ClearingPrevious => "Clearing previous data",
            Stage::ReadingAudio => "Reading audio file",
            Stage::GeneratingBitstream => "Generating bitstream",
            Stage::GeneratingBytestream => "Generating bytestream",
            Stage::AssemblingMessages => "Generating message list",
            Stage::Done => "Done",
        };
        f.write_str(text)
    }
}

/// Receives progress notifications from a decoding session
///
/// All methods default to doing nothing.
pub trait DecodeObserver {
    fn on_stage(&mut self, _stage: Stage) {}

    /// Number of items (crossings, bits, bytes, messages) a stage produced
    fn on_stage_output(&mut self, _stage: Stage, _count: usize) {}

    /// `message_number` is 1-based
    fn on_invalid_checksum(&mut self, _message_number: usize, _expected: u8, _actual: u8) {}
}

impl<O: DecodeObserver + ?Sized> DecodeObserver for &mut O {
    fn on_stage(&mut self, stage: Stage) {
        (**self).on_stage(stage)
    }

    fn on_stage_output(&mut self, stage: Stage, count: usize) {
        (**self).on_stage_output(stage, count)
    }

    fn on_invalid_checksum(&mut self, message_number: usize, expected: u8, actual: u8) {
        (**self).on_invalid_checksum(message_number, expected, actual)
    }
}

/// Forwards notifications to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl DecodeObserver for LogObserver {
    fn on_stage(&mut self, stage: Stage) {
        log::info!("{}...", stage);
    }

    fn on_stage_output(&mut self, stage: Stage, count: usize) {
        log::debug!("{}: {} items", stage, count);
    }

    fn on_invalid_checksum(&mut self, message_number: usize, expected: u8, actual: u8) {
        log::warn!(
            "Invalid checksum for message #{} (expected {:#04x}, got {:#04x})",
            message_number,
            expected,
            actual
        );
    }
}

/// Discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl DecodeObserver for NullObserver {}
