use pretty_assertions::assert_eq;
use smf_fixtures::{file::chunk, prelude::*};

/// Builds a reference file by hand, the way a fixture would be checked against a hex dump.
fn reference(format: u16, tracks: &[&[u8]]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x06]);
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&(tracks.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&[0x01, 0xE0]); // 480 ticks per quarter note
    for track in tracks {
        bytes.extend_from_slice(b"MTrk");
        bytes.extend_from_slice(&(track.len() as u32).to_be_bytes());
        bytes.extend_from_slice(track);
    }
    bytes
}

/// Returns the (tag, payload) pairs of a file.
fn chunks(mut bytes: &[u8]) -> Vec<([u8; 4], &[u8])> {
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let tag: [u8; 4] = bytes[..4].try_into().unwrap();
        let len = u32::from_be_bytes(bytes[4..8].try_into().unwrap()) as usize;
        out.push((tag, &bytes[8..8 + len]));
        bytes = &bytes[8 + len..];
    }
    out
}

#[test]
fn chunk_length_matches_payload() {
    for len in [0usize, 1, 6, 127, 128, 4096, 70_000] {
        let payload = vec![0x5A; len];
        let chunk = chunk::build("MTrk", &payload).unwrap();
        assert_eq!(chunk.len(), 8 + len);
        assert_eq!(&chunk[..4], b"MTrk");
        assert_eq!(u32::from_be_bytes(chunk[4..8].try_into().unwrap()) as usize, len);
        assert_eq!(&chunk[8..], payload.as_slice());
    }
}

#[test]
fn header_is_always_six_bytes() {
    let eot = [MidiEvent::end_of_track(0)];
    for count in [0usize, 1, 2, 17, 300] {
        let tracks = vec![eot; count];
        let bytes = assemble(Format::Simultaneous, 480, &tracks).unwrap();
        let chunks = chunks(&bytes);
        assert_eq!(chunks[0].0, *b"MThd");
        assert_eq!(chunks[0].1.len(), 6);
        assert_eq!(chunks.len(), count + 1);
        assert_eq!(u16::from_be_bytes([chunks[0].1[2], chunks[0].1[3]]) as usize, count);
    }
}

#[test]
fn simple_melody() {
    let track: &[u8] = &[
        0x00, 0x90, 60, 100, //
        0x83, 0x60, 0x80, 60, 0, //
        0x00, 0x90, 62, 90, //
        0x83, 0x60, 0x80, 62, 0, //
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let bytes = Fixture::SimpleMelody.encode().unwrap();
    assert_eq!(bytes, reference(0, &[track]));

    let chunks = chunks(&bytes);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1].0, *b"MTrk");
    // four note events with 1 or 2 delta bytes, then End of Track
    assert_eq!(chunks[1].1.len(), 22);
}

#[test]
fn tempo_change() {
    let track: &[u8] = &[
        0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, //
        0x00, 0x90, 60, 100, //
        0x83, 0x60, 0x80, 60, 0, //
        0x00, 0xFF, 0x51, 0x03, 0x06, 0x8A, 0x1B, //
        0x00, 0x90, 62, 90, //
        0x83, 0x60, 0x80, 62, 0, //
        0x00, 0xFF, 0x2F, 0x00,
    ];
    assert_eq!(Fixture::TempoChange.encode().unwrap(), reference(0, &[track]));

    for micros in [500_000, 428_571] {
        let event = MidiEvent::tempo(0, Tempo::new(micros).unwrap());
        let encoded = event.encode().unwrap();
        // one delta byte, then the 6-byte meta event
        assert_eq!(encoded.len(), 1 + 6);
        assert_eq!(&encoded[1..4], [0xFF, 0x51, 0x03]);
        assert_eq!(encoded[4..], micros.to_be_bytes()[1..]);
    }
}

#[test]
fn multi_track() {
    let tempo_track: &[u8] = &[
        0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20, //
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let note_track: &[u8] = &[
        0x00, 0x90, 60, 100, //
        0x83, 0x60, 0x80, 60, 0, //
        0x00, 0x90, 64, 100, //
        0x83, 0x60, 0x80, 64, 0, //
        0x00, 0xFF, 0x2F, 0x00,
    ];
    let bytes = Fixture::MultiTrack.encode().unwrap();
    assert_eq!(bytes, reference(1, &[tempo_track, note_track]));

    let chunks = chunks(&bytes);
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].1, [0x00, 0x01, 0x00, 0x02, 0x01, 0xE0]);
    assert!(chunks[1..].iter().all(|(tag, _)| tag == b"MTrk"));
}

#[test]
fn track_count_ignores_track_content() {
    let empty: &[MidiEvent] = &[];
    let busy: &[MidiEvent] = &[
        MidiEvent::note_on(0, 3, 40, 1),
        MidiEvent::note_on(10, 4, 41, 2),
        MidiEvent::end_of_track(0),
    ];
    let bytes = assemble(Format::Simultaneous, 480, &[empty, busy]).unwrap();
    assert_eq!(&bytes[10..12], [0x00, 0x02]);
    assert_eq!(chunks(&bytes)[1].1, &[] as &[u8]);
}

#[test]
fn errors_propagate_from_any_track() {
    let good: &[MidiEvent] = &[MidiEvent::end_of_track(0)];
    let bad: &[MidiEvent] = &[MidiEvent::note_off(0, 0, 130), MidiEvent::end_of_track(0)];
    assert_eq!(
        assemble(Format::Simultaneous, 480, &[good, bad]),
        Err(EncodeError::Range(RangeError::Note(130)))
    );
}
