// OGG Vorbis duration support
//
// OGG File Structure:
// - OGG Page Header (27 bytes)
//   - Capture Pattern: "OggS" (4 bytes)
//   - Version: 0 (1 byte)
//   - Header Type: 1=continuation, 2=bos, 4=eos (1 byte)
//   - Granule Position (8 bytes, little-endian)
//   - Bitstream Serial Number (4 bytes)
//   - Page Sequence Number (4 bytes)
//   - CRC Checksum (4 bytes)
//   - Number of Page Segments (1 byte)
//   - Segment Table (variable)
//
// Vorbis Identification Header (first header packet):
// - Packet type: 0x01 (1 byte)
// - Signature: "vorbis" (6 bytes)
// - Version: 0 (4 bytes, little-endian)
// - Channels (1 byte)
// - Sample Rate (4 bytes, little-endian)
// - Bitrate maximum/nominal/minimum (12 bytes, unused here)
// - Blocksize flags + framing bit (2 bytes, unused here)
//
// For Vorbis, the granule position of the final page equals the total number
// of sample frames in the stream, so duration = granule / sample_rate without
// decoding any audio.

pub mod duration;

pub use duration::{compute_duration, probe, probe_traced, StreamInfo, TraceEvent};

// OGG signature
pub const OGG_SIGNATURE: &[u8; 4] = b"OggS";

// Vorbis identification header marker: packet type byte followed by signature
pub(crate) const VORBIS_IDENT_PACKET_TYPE: u8 = 0x01;
pub(crate) const VORBIS_SIGNATURE: &[u8; 6] = b"vorbis";

// Byte offset of the granule position field within a page header
// (past the capture pattern, version byte and header type byte)
pub(crate) const GRANULE_POSITION_OFFSET: usize = 6;

// How far into the stream the identification header is searched for
pub(crate) const HEADER_SCAN_WINDOW: usize = 8192;

// How far back from the end of the stream the final page is searched for
pub(crate) const TAIL_SCAN_WINDOW: u64 = 65536;

// Sanity bounds for the declared sample rate; a parsing-confidence check,
// not a codec limit
pub(crate) const MIN_SAMPLE_RATE: u32 = 8000;
pub(crate) const MAX_SAMPLE_RATE: u32 = 192_000;
