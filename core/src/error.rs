use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not load file {}: {source}", path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("No channels found")]
    NoChannelData,

    #[error("Bytestream is empty or too short to contain messages")]
    EmptyOrTooShortStream,

    #[error("Start marker 0x42 0x03 not found in bytestream")]
    StartMarkerNotFound,

    #[error("End marker 0x00 not found after start marker")]
    EndMarkerNotFound,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
