// Duration probing for OGG Vorbis streams
//
// Two bounded scans and a division: find the Vorbis identification header
// near the start of the stream to get the sample rate, find the last OGG
// page near the end to get the final granule position, then
// duration = granule / sample_rate.
//
// The identification header is located by a raw substring search, not by
// walking page boundaries. A payload byte sequence that happens to match the
// marker would be mistaken for the header; in practice the identification
// header sits in the first page and is found long before any payload.

use std::io::{Read, Seek, SeekFrom};

use crate::error::{Result, VorbisError};
use crate::ogg::{
    GRANULE_POSITION_OFFSET, HEADER_SCAN_WINDOW, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE, OGG_SIGNATURE,
    TAIL_SCAN_WINDOW, VORBIS_IDENT_PACKET_TYPE, VORBIS_SIGNATURE,
};
use crate::utils::io::{le_u32, le_u64};

// Smallest possible OGG page header; anything shorter cannot hold one page
const MIN_PAGE_HEADER_SIZE: u64 = 27;

/// Facts extracted from an OGG Vorbis stream, enough to compute its duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamInfo {
    /// Channel count from the identification header (recorded, not validated)
    pub channels: u8,
    /// Sample rate in Hz from the identification header
    pub sample_rate: u32,
    /// Granule position of the last page: total sample frames in the stream
    pub granule_position: u64,
    /// Total stream length in bytes
    pub stream_length: u64,
}

impl StreamInfo {
    /// Playback duration in seconds, accurate to one sample frame
    ///
    /// No compensation is applied for encoder pre-skip or chained streams;
    /// the final granule position is taken as the total sample count.
    pub fn duration_seconds(&self) -> f64 {
        self.granule_position as f64 / f64::from(self.sample_rate)
    }
}

/// Findings reported while probing, for callers that want scan visibility
///
/// Passed explicitly as a sink to [`probe_traced`]; there is no ambient
/// debug flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Identification header located within the head window
    IdentHeaderFound {
        offset: usize,
        channels: u8,
        sample_rate: u32,
    },
    /// Total stream length determined
    StreamLength { bytes: u64 },
    /// Last page located within the tail window
    FinalPageFound { offset: u64, granule_position: u64 },
}

/// Compute the playback duration of an OGG Vorbis stream in seconds
///
/// `reader` must be positioned anywhere (the probe seeks absolutely) and is
/// left at an unspecified position. The operation is a pure function of the
/// byte content: probing the same unchanged stream twice yields the same
/// result.
pub fn compute_duration<R: Read + Seek>(reader: &mut R) -> Result<f64> {
    probe(reader).map(|info| info.duration_seconds())
}

/// Probe an OGG Vorbis stream for channels, sample rate and final granule
pub fn probe<R: Read + Seek>(reader: &mut R) -> Result<StreamInfo> {
    probe_traced(reader, None)
}

/// Like [`probe`], reporting intermediate findings to an optional sink
pub fn probe_traced<R: Read + Seek>(
    reader: &mut R,
    mut trace: Option<&mut dyn FnMut(TraceEvent)>,
) -> Result<StreamInfo> {
    // Verify the capture pattern before anything else
    reader.seek(SeekFrom::Start(0))?;
    let mut signature = [0u8; 4];
    read_exact_or_truncated(reader, &mut signature)?;
    if &signature != OGG_SIGNATURE {
        return Err(VorbisError::NotAnOggStream);
    }

    // Scan the head of the stream for the identification header
    reader.seek(SeekFrom::Start(0))?;
    let mut header_data = Vec::with_capacity(HEADER_SCAN_WINDOW);
    reader
        .by_ref()
        .take(HEADER_SCAN_WINDOW as u64)
        .read_to_end(&mut header_data)?;

    let marker_pos =
        find_ident_marker(&header_data).ok_or(VorbisError::VorbisHeaderNotFound)?;

    // Skip the packet type byte and the 6-byte "vorbis" signature
    let body = marker_pos + 7;
    let version = le_u32(&header_data, body)?;
    if version != 0 {
        return Err(VorbisError::UnsupportedVorbisVersion(version));
    }

    let channels = *header_data
        .get(body + 4)
        .ok_or(VorbisError::TruncatedInput)?;
    let sample_rate = le_u32(&header_data, body + 5)?;
    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        return Err(VorbisError::ImplausibleSampleRate(sample_rate));
    }

    if let Some(sink) = trace.as_mut() {
        sink(TraceEvent::IdentHeaderFound {
            offset: marker_pos,
            channels,
            sample_rate,
        });
    }

    // Total stream length via seek-to-end
    let stream_length = reader.seek(SeekFrom::End(0))?;
    if let Some(sink) = trace.as_mut() {
        sink(TraceEvent::StreamLength {
            bytes: stream_length,
        });
    }

    if stream_length < MIN_PAGE_HEADER_SIZE {
        return Err(VorbisError::TruncatedInput);
    }

    // Search the trailing window for the last page
    let search_size = stream_length.min(TAIL_SCAN_WINDOW);
    reader.seek(SeekFrom::End(-(search_size as i64)))?;
    let mut tail = vec![0u8; search_size as usize];
    read_exact_or_truncated(reader, &mut tail)?;

    let last_page_pos = tail
        .windows(OGG_SIGNATURE.len())
        .rposition(|window| window == OGG_SIGNATURE)
        .ok_or(VorbisError::NoOggPageFound)?;

    let granule_position = le_u64(&tail, last_page_pos + GRANULE_POSITION_OFFSET)?;

    if let Some(sink) = trace.as_mut() {
        sink(TraceEvent::FinalPageFound {
            offset: stream_length - search_size + last_page_pos as u64,
            granule_position,
        });
    }

    Ok(StreamInfo {
        channels,
        sample_rate,
        granule_position,
        stream_length,
    })
}

/// Find the first identification header marker: 0x01 followed by "vorbis"
fn find_ident_marker(data: &[u8]) -> Option<usize> {
    data.windows(7).position(|window| {
        window[0] == VORBIS_IDENT_PACKET_TYPE && &window[1..7] == VORBIS_SIGNATURE
    })
}

fn read_exact_or_truncated<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => VorbisError::TruncatedInput,
        _ => VorbisError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{page, synthetic_stream};
    use std::io::Cursor;

    #[test]
    fn duration_is_granule_over_rate() {
        let stream = synthetic_stream(0, 2, 48000, 96000);
        let duration = compute_duration(&mut Cursor::new(stream)).unwrap();
        assert_eq!(duration, 96000.0 / 48000.0);
    }

    #[test]
    fn two_channel_44100_hz_fifty_seconds() {
        let stream = synthetic_stream(0, 2, 44100, 2_205_000);
        let duration = compute_duration(&mut Cursor::new(stream)).unwrap();
        assert_eq!(duration, 50.0);
    }

    #[test]
    fn probe_reports_stream_facts() {
        let stream = synthetic_stream(0, 6, 44100, 44100);
        let len = stream.len() as u64;
        let info = probe(&mut Cursor::new(stream)).unwrap();
        assert_eq!(info.channels, 6);
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.granule_position, 44100);
        assert_eq!(info.stream_length, len);
    }

    #[test]
    fn rejects_non_ogg_signature() {
        let mut stream = synthetic_stream(0, 2, 44100, 44100);
        stream[0] = b'X';
        let err = compute_duration(&mut Cursor::new(stream)).unwrap_err();
        assert!(matches!(err, VorbisError::NotAnOggStream));
    }

    #[test]
    fn rejects_riff_header() {
        let err = compute_duration(&mut Cursor::new(b"RIFF\x24\x00\x00\x00WAVE".to_vec()))
            .unwrap_err();
        assert!(matches!(err, VorbisError::NotAnOggStream));
    }

    #[test]
    fn rejects_nonzero_version() {
        let stream = synthetic_stream(1, 2, 44100, 44100);
        let err = compute_duration(&mut Cursor::new(stream)).unwrap_err();
        assert!(matches!(err, VorbisError::UnsupportedVorbisVersion(1)));

        let stream = synthetic_stream(0xDEAD_BEEF, 2, 44100, 44100);
        let err = compute_duration(&mut Cursor::new(stream)).unwrap_err();
        assert!(matches!(
            err,
            VorbisError::UnsupportedVorbisVersion(0xDEAD_BEEF)
        ));
    }

    #[test]
    fn sample_rate_bounds_are_inclusive() {
        for rate in [8000, 192_000] {
            let stream = synthetic_stream(0, 2, rate, rate as u64);
            assert_eq!(compute_duration(&mut Cursor::new(stream)).unwrap(), 1.0);
        }
        for rate in [7999, 192_001] {
            let stream = synthetic_stream(0, 2, rate, rate as u64);
            let err = compute_duration(&mut Cursor::new(stream)).unwrap_err();
            match err {
                VorbisError::ImplausibleSampleRate(r) => assert_eq!(r, rate),
                other => panic!("expected ImplausibleSampleRate, got {:?}", other),
            }
        }
    }

    #[test]
    fn missing_ident_header_in_window() {
        // A valid-looking page that never carries a Vorbis ident packet
        let stream = page(0x02, 0, 0, &[0u8; 32]);
        let err = compute_duration(&mut Cursor::new(stream)).unwrap_err();
        assert!(matches!(err, VorbisError::VorbisHeaderNotFound));
    }

    #[test]
    fn ident_header_beyond_window_is_not_found() {
        // Push the ident packet past the 8192-byte scan window
        let mut stream = page(0x02, 0, 0, &[0u8; 255]);
        while stream.len() <= HEADER_SCAN_WINDOW {
            stream.extend_from_slice(&page(0x00, 0, 1, &[0u8; 255]));
        }
        let mut ident = vec![0x01];
        ident.extend_from_slice(b"vorbis");
        ident.extend_from_slice(&0u32.to_le_bytes());
        ident.push(2);
        ident.extend_from_slice(&44100u32.to_le_bytes());
        stream.extend_from_slice(&page(0x00, 0, 2, &ident));

        let err = compute_duration(&mut Cursor::new(stream)).unwrap_err();
        assert!(matches!(err, VorbisError::VorbisHeaderNotFound));
    }

    #[test]
    fn short_input_never_panics() {
        for len in 0..MIN_PAGE_HEADER_SIZE as usize {
            let mut data = vec![0u8; len];
            if len >= 4 {
                data[..4].copy_from_slice(b"OggS");
            }
            let err = compute_duration(&mut Cursor::new(data)).unwrap_err();
            assert!(
                matches!(
                    err,
                    VorbisError::TruncatedInput
                        | VorbisError::NotAnOggStream
                        | VorbisError::VorbisHeaderNotFound
                ),
                "unexpected error for {}-byte input: {:?}",
                len,
                err
            );
        }
    }

    #[test]
    fn truncated_ident_header() {
        // Marker present but the stream ends inside the version field
        let mut data = b"OggS".to_vec();
        data.push(0x01);
        data.extend_from_slice(b"vorbis");
        data.extend_from_slice(&[0, 0]);
        let err = compute_duration(&mut Cursor::new(data)).unwrap_err();
        assert!(matches!(err, VorbisError::TruncatedInput));
    }

    #[test]
    fn granule_field_running_past_end_is_truncated() {
        // Rightmost marker sits too close to the end to hold a granule field
        let mut stream = synthetic_stream(0, 2, 44100, 44100);
        stream.extend_from_slice(b"OggS\x00\x04");
        let err = compute_duration(&mut Cursor::new(stream)).unwrap_err();
        assert!(matches!(err, VorbisError::TruncatedInput));
    }

    #[test]
    fn marker_free_tail_is_no_ogg_page_found() {
        // Valid head, then enough marker-free padding that the trailing
        // window holds no capture pattern at all
        let mut stream = synthetic_stream(0, 2, 44100, 44100);
        stream.resize(stream.len() + TAIL_SCAN_WINDOW as usize + 4096, 0xAA);
        let err = compute_duration(&mut Cursor::new(stream)).unwrap_err();
        assert!(matches!(err, VorbisError::NoOggPageFound));
    }

    #[test]
    fn picks_rightmost_page_in_tail() {
        // Three audio pages; only the last granule position counts
        let mut stream = synthetic_stream(0, 2, 44100, 44100);
        stream.extend_from_slice(&page(0x00, 88200, 3, &[0u8; 16]));
        stream.extend_from_slice(&page(0x04, 132_300, 4, &[0u8; 16]));
        let duration = compute_duration(&mut Cursor::new(stream)).unwrap();
        assert_eq!(duration, 3.0);
    }

    #[test]
    fn probing_twice_is_idempotent() {
        let stream = synthetic_stream(0, 2, 44100, 2_205_000);
        let mut cursor = Cursor::new(stream);
        let first = compute_duration(&mut cursor).unwrap();
        let second = compute_duration(&mut cursor).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn trace_sink_sees_scan_findings_in_order() {
        let stream = synthetic_stream(0, 2, 44100, 44100);
        let len = stream.len() as u64;
        let mut events = Vec::new();
        let info = probe_traced(&mut Cursor::new(stream), Some(&mut |e| events.push(e))).unwrap();

        assert_eq!(events.len(), 3);
        assert!(matches!(
            events[0],
            TraceEvent::IdentHeaderFound {
                channels: 2,
                sample_rate: 44100,
                ..
            }
        ));
        assert_eq!(events[1], TraceEvent::StreamLength { bytes: len });
        assert!(matches!(
            events[2],
            TraceEvent::FinalPageFound {
                granule_position: 44100,
                ..
            }
        ));
        assert_eq!(info.duration_seconds(), 1.0);
    }

    #[test]
    fn zero_granule_is_zero_seconds() {
        let stream = synthetic_stream(0, 1, 8000, 0);
        let duration = compute_duration(&mut Cursor::new(stream)).unwrap();
        assert_eq!(duration, 0.0);
        assert!(duration >= 0.0 && duration.is_finite());
    }
}
