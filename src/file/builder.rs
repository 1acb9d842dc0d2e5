use alloc::vec::Vec;

use super::chunk::write_chunk;
use crate::prelude::*;

/// How much the builder checks the structure of each track.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Validation {
    /// Tracks are written as given. A track without End of Track still
    /// produces a well-formed chunk.
    #[default]
    Lenient,
    /// Every track must end with exactly one End of Track, and a format 0
    /// file must hold exactly one track.
    Strict,
}

#[doc = r#"
A builder used to create the bytes of a Standard MIDI File.

# Example
```rust
# use smf_fixtures::prelude::*;
let bytes = SmfBuilder::new(Format::SingleMultiChannel, 480)
    .track([
        MidiEvent::note_on(0, 0, 60, 100),
        MidiEvent::note_off(480, 0, 60),
        MidiEvent::end_of_track(0),
    ])
    .strict()
    .build()
    .unwrap();

assert_eq!(&bytes[..4], b"MThd");
assert_eq!(&bytes[14..18], b"MTrk");
```
"#]
#[derive(Clone, Debug)]
pub struct SmfBuilder {
    format: Format,
    division: u16,
    tracks: Vec<Vec<MidiEvent>>,
    validation: Validation,
}

impl SmfBuilder {
    /// Start a file with the given format and ticks per quarter note.
    pub fn new(format: Format, division: u16) -> Self {
        Self {
            format,
            division,
            tracks: Vec::new(),
            validation: Validation::default(),
        }
    }

    /// Appends a track. Tracks are written in the order they are added.
    pub fn track<I>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = MidiEvent>,
    {
        self.tracks.push(events.into_iter().collect());
        self
    }

    /// Sets the validation mode.
    pub fn validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Shorthand for `validation(Validation::Strict)`
    pub fn strict(self) -> Self {
        self.validation(Validation::Strict)
    }

    /// The tracks added so far
    pub fn tracks(&self) -> &[Vec<MidiEvent>] {
        &self.tracks
    }

    /// Encodes the header chunk followed by every track chunk.
    pub fn build(&self) -> EncodeResult<Vec<u8>> {
        encode_file(self.format, self.division, &self.tracks, self.validation)
    }
}

/// Assembles a complete file without structural validation.
///
/// The header track count is the number of `tracks`. Each track is written
/// exactly as given; callers are expected to end every track with
/// [`MidiEvent::EndOfTrack`].
pub fn assemble<T>(format: Format, division: u16, tracks: &[T]) -> EncodeResult<Vec<u8>>
where
    T: AsRef<[MidiEvent]>,
{
    encode_file(format, division, tracks, Validation::Lenient)
}

/// Concatenates the encoded events of one track, without the chunk wrapper.
pub fn encode_track(events: &[MidiEvent]) -> EncodeResult<Vec<u8>> {
    let mut payload = Vec::new();
    for event in events {
        event.encode_into(&mut payload)?;
    }
    Ok(payload)
}

fn encode_file<T>(
    format: Format,
    division: u16,
    tracks: &[T],
    validation: Validation,
) -> EncodeResult<Vec<u8>>
where
    T: AsRef<[MidiEvent]>,
{
    let division = TicksPerQuarterNote::new(division)?;
    let track_count =
        u16::try_from(tracks.len()).map_err(|_| EncodingError::TooManyTracks(tracks.len()))?;

    if validation == Validation::Strict {
        validate(format, tracks)?;
    }

    let header = SmfHeader::new(format, track_count, division);
    let mut out = Vec::new();
    write_chunk(&mut out, ChunkTag::HEADER, &header.encode())?;
    for track in tracks {
        let payload = encode_track(track.as_ref())?;
        write_chunk(&mut out, ChunkTag::TRACK, &payload)?;
    }
    Ok(out)
}

fn validate<T>(format: Format, tracks: &[T]) -> Result<(), EncodingError>
where
    T: AsRef<[MidiEvent]>,
{
    if format == Format::SingleMultiChannel && tracks.len() != 1 {
        return Err(EncodingError::SingleTrackFormat(tracks.len()));
    }
    for (track, events) in tracks.iter().enumerate() {
        let events = events.as_ref();
        let Some((last, rest)) = events.split_last() else {
            return Err(EncodingError::MissingEndOfTrack { track });
        };
        if let Some(index) = rest.iter().position(MidiEvent::is_end_of_track) {
            return Err(EncodingError::EventAfterEndOfTrack { track, index });
        }
        if !last.is_end_of_track() {
            return Err(EncodingError::MissingEndOfTrack { track });
        }
    }
    Ok(())
}

#[test]
fn header_counts_tracks() {
    use pretty_assertions::assert_eq;
    let eot = [MidiEvent::end_of_track(0)];
    let bytes = assemble(Format::Simultaneous, 96, &[eot, eot, eot]).unwrap();
    assert_eq!(&bytes[..14], b"MThd\0\0\0\x06\0\x01\0\x03\0\x60");
    assert_eq!(bytes.len(), 14 + 3 * 12);
}

#[test]
fn lenient_allows_missing_end_of_track() {
    use pretty_assertions::assert_eq;
    let bytes = SmfBuilder::new(Format::SingleMultiChannel, 480)
        .track([MidiEvent::note_on(0, 0, 60, 100)])
        .build()
        .unwrap();
    assert_eq!(&bytes[14..], b"MTrk\0\0\0\x04\x00\x90\x3C\x64");
}

#[test]
fn strict_checks_end_of_track() {
    use pretty_assertions::assert_eq;
    let err = SmfBuilder::new(Format::SingleMultiChannel, 480)
        .track([MidiEvent::note_on(0, 0, 60, 100)])
        .strict()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        EncodeError::Encoding(EncodingError::MissingEndOfTrack { track: 0 })
    );

    let err = SmfBuilder::new(Format::Simultaneous, 480)
        .track([MidiEvent::end_of_track(0)])
        .track([
            MidiEvent::end_of_track(0),
            MidiEvent::note_on(0, 0, 60, 100),
            MidiEvent::end_of_track(0),
        ])
        .strict()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        EncodeError::Encoding(EncodingError::EventAfterEndOfTrack { track: 1, index: 0 })
    );

    let err = SmfBuilder::new(Format::Simultaneous, 480)
        .track(core::iter::empty::<MidiEvent>())
        .strict()
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        EncodeError::Encoding(EncodingError::MissingEndOfTrack { track: 0 })
    );
}

#[test]
fn strict_checks_format_zero_track_count() {
    use pretty_assertions::assert_eq;
    let err = SmfBuilder::new(Format::SingleMultiChannel, 480)
        .track([MidiEvent::end_of_track(0)])
        .track([MidiEvent::end_of_track(0)])
        .strict()
        .build()
        .unwrap_err();
    assert_eq!(err, EncodeError::Encoding(EncodingError::SingleTrackFormat(2)));
}

#[test]
fn reject_smpte_division() {
    use pretty_assertions::assert_eq;
    let tracks: [&[MidiEvent]; 0] = [];
    assert_eq!(
        assemble(Format::Simultaneous, 0xE728, &tracks),
        Err(EncodeError::Range(RangeError::Division(0xE728)))
    );
}
