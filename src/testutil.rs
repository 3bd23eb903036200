// Synthetic OGG Vorbis streams for tests
//
// Declared from both the library and binary crate roots under cfg(test) so
// every test module builds its fixtures from the same bytes.

/// Build a minimal OGG Vorbis stream: one header page carrying the
/// identification packet, one final audio page carrying `granule`.
pub fn synthetic_stream(version: u32, channels: u8, sample_rate: u32, granule: u64) -> Vec<u8> {
    let mut ident_packet = vec![0x01];
    ident_packet.extend_from_slice(b"vorbis");
    ident_packet.extend_from_slice(&version.to_le_bytes());
    ident_packet.push(channels);
    ident_packet.extend_from_slice(&sample_rate.to_le_bytes());
    ident_packet.extend_from_slice(&[0u8; 12]); // bitrate fields
    ident_packet.push(0xB8); // blocksize flags
    ident_packet.push(0x01); // framing bit

    let mut stream = page(0x02, 0, 0, &ident_packet);
    stream.extend_from_slice(&page(0x04, granule, 2, &[0u8; 64]));
    stream
}

/// Build a single OGG page with a one-segment payload
pub fn page(header_type: u8, granule: u64, sequence: u32, payload: &[u8]) -> Vec<u8> {
    assert!(payload.len() <= 255);
    let mut page = Vec::new();
    page.extend_from_slice(b"OggS");
    page.push(0); // stream structure version
    page.push(header_type);
    page.extend_from_slice(&granule.to_le_bytes());
    page.extend_from_slice(&1234u32.to_le_bytes()); // serial
    page.extend_from_slice(&sequence.to_le_bytes());
    page.extend_from_slice(&0u32.to_le_bytes()); // crc, unchecked
    page.push(1); // segment count
    page.push(payload.len() as u8);
    page.extend_from_slice(payload);
    page
}
