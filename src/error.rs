// Error types for Ogg Vorbis duration probing

use std::fmt;

/// Result alias for duration operations
pub type Result<T> = std::result::Result<T, VorbisError>;

/// Errors that can occur while probing an Ogg Vorbis stream
///
/// Every variant is recoverable at the call site: a batch caller is expected
/// to log the file and the error kind, skip the file, and continue.
#[derive(Debug)]
pub enum VorbisError {
    /// The first 4 bytes of the stream are not the "OggS" capture pattern
    NotAnOggStream,
    /// No Vorbis identification header marker within the first 8192 bytes
    VorbisHeaderNotFound,
    /// The identification header declares a version other than 0
    UnsupportedVorbisVersion(u32),
    /// The declared sample rate falls outside the 8000..=192000 sanity range
    ImplausibleSampleRate(u32),
    /// No "OggS" capture pattern within the trailing search window
    NoOggPageFound,
    /// Fewer bytes available than a parse step requires
    TruncatedInput,
    /// The underlying seek or read failed
    Io(std::io::Error),
}

impl fmt::Display for VorbisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VorbisError::NotAnOggStream => write!(f, "Not a valid OGG file"),
            VorbisError::VorbisHeaderNotFound => {
                write!(f, "Could not find Vorbis identification header")
            }
            VorbisError::UnsupportedVorbisVersion(version) => {
                write!(f, "Unsupported Vorbis version: {}", version)
            }
            VorbisError::ImplausibleSampleRate(rate) => {
                write!(f, "Invalid sample rate: {}", rate)
            }
            VorbisError::NoOggPageFound => {
                write!(f, "No OGG page found near the end of the stream")
            }
            VorbisError::TruncatedInput => write!(f, "Stream ends before the expected field"),
            VorbisError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for VorbisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VorbisError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VorbisError {
    fn from(e: std::io::Error) -> Self {
        VorbisError::Io(e)
    }
}
