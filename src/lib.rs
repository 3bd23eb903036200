// oggdur - OGG Vorbis duration probing without a decoder
//
// Computes the playback duration of OGG Vorbis files by reading the
// container and codec headers directly: the sample rate comes from the
// Vorbis identification header near the start of the stream, the total
// sample count from the granule position of the last OGG page near the end.
// No audio is decoded and no decoding library is used.
//
// The crate also renders CfgSounds description.ext documents for folders of
// OGG tracks; see the `cfg` module and the `oggdur` binary.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub mod cfg;
pub mod error;
pub mod ogg;
#[cfg(test)]
mod testutil;
mod utils;

pub use error::{Result, VorbisError};
pub use ogg::{compute_duration, probe, probe_traced, StreamInfo, TraceEvent};

/// OGG Vorbis file handle
///
/// Opens the file per call and releases it when the call returns, on both
/// success and error paths. Holds no state across calls, so independent
/// handles are safe to use from independent threads.
pub struct OggVorbisFile {
    pub path: PathBuf,
}

impl OggVorbisFile {
    /// Create a new OGG Vorbis file handle
    pub fn new(path: impl Into<PathBuf>) -> Self {
        OggVorbisFile { path: path.into() }
    }

    /// Playback duration of the file in seconds
    pub fn duration(&self) -> Result<f64> {
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        ogg::compute_duration(&mut reader)
    }

    /// Probe the file for channels, sample rate and final granule position
    pub fn probe(&self) -> Result<StreamInfo> {
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        ogg::probe(&mut reader)
    }

    /// Like [`OggVorbisFile::probe`], reporting scan findings to a sink
    pub fn probe_traced(
        &self,
        trace: Option<&mut dyn FnMut(TraceEvent)>,
    ) -> Result<StreamInfo> {
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        ogg::probe_traced(&mut reader, trace)
    }
}

/// Detect if a file starts with the OGG capture pattern
pub fn is_ogg_file(path: &Path) -> bool {
    if let Ok(mut file) = File::open(path) {
        let mut signature = [0u8; 4];
        if file.read_exact(&mut signature).is_ok() {
            return &signature == ogg::OGG_SIGNATURE;
        }
    }
    false
}
