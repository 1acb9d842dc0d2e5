#![doc = r#"
Preset fixture layouts

Each preset is a small, hand-checkable file at 480 ticks per quarter note.

| Preset         | Format | Tracks | Contents                                  |
|----------------|--------|--------|-------------------------------------------|
| `simple_melody`| 0      | 1      | C4 then D4, one beat each                 |
| `tempo_change` | 0      | 1      | 120 BPM C4, then 140 BPM D4               |
| `multi_track`  | 1      | 2      | tempo track, then a C4/E4 note track      |
"#]
use alloc::vec::Vec;
use core::fmt;

use crate::prelude::*;

/// Ticks per quarter note shared by every preset.
pub const DIVISION: u16 = 480;

const MIDDLE_C: u8 = 60;
const D4: u8 = 62;
const E4: u8 = 64;

const TEMPO_140_BPM: Tempo = match Tempo::from_bpm(140) {
    Ok(tempo) => tempo,
    Err(_) => panic!("140 BPM fits in 24 bits"),
};

/// One of the preset files.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Fixture {
    /// Two notes on one track
    SimpleMelody,
    /// Two notes separated by a tempo change
    TempoChange,
    /// A tempo track and a note track, format 1
    MultiTrack,
}

impl Fixture {
    /// Every preset, in generation order.
    pub const ALL: [Fixture; 3] = [Self::SimpleMelody, Self::TempoChange, Self::MultiTrack];

    /// The preset name, as accepted by [`Fixture::from_name`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::SimpleMelody => "simple_melody",
            Self::TempoChange => "tempo_change",
            Self::MultiTrack => "multi_track",
        }
    }

    /// The file name the preset is written to
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::SimpleMelody => "simple_melody.mid",
            Self::TempoChange => "tempo_change.mid",
            Self::MultiTrack => "multi_track.mid",
        }
    }

    /// Looks up a preset by name. A trailing `.mid` is accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_suffix(".mid").unwrap_or(name);
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The preset's layout, ready to build.
    pub fn builder(self) -> SmfBuilder {
        match self {
            Self::SimpleMelody => SmfBuilder::new(Format::SingleMultiChannel, DIVISION).track([
                MidiEvent::note_on(0, 0, MIDDLE_C, 100),
                MidiEvent::note_off(480, 0, MIDDLE_C),
                MidiEvent::note_on(0, 0, D4, 90),
                MidiEvent::note_off(480, 0, D4),
                MidiEvent::end_of_track(0),
            ]),
            Self::TempoChange => SmfBuilder::new(Format::SingleMultiChannel, DIVISION).track([
                MidiEvent::tempo(0, Tempo::DEFAULT),
                MidiEvent::note_on(0, 0, MIDDLE_C, 100),
                MidiEvent::note_off(480, 0, MIDDLE_C),
                MidiEvent::tempo(0, TEMPO_140_BPM),
                MidiEvent::note_on(0, 0, D4, 90),
                MidiEvent::note_off(480, 0, D4),
                MidiEvent::end_of_track(0),
            ]),
            Self::MultiTrack => SmfBuilder::new(Format::Simultaneous, DIVISION)
                .track([
                    MidiEvent::tempo(0, Tempo::DEFAULT),
                    MidiEvent::end_of_track(0),
                ])
                .track([
                    MidiEvent::note_on(0, 0, MIDDLE_C, 100),
                    MidiEvent::note_off(480, 0, MIDDLE_C),
                    MidiEvent::note_on(0, 0, E4, 100),
                    MidiEvent::note_off(480, 0, E4),
                    MidiEvent::end_of_track(0),
                ]),
        }
    }

    /// Encodes the preset.
    pub fn encode(self) -> EncodeResult<Vec<u8>> {
        self.builder().build()
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn lookup_by_name() {
    assert_eq!(Fixture::from_name("tempo_change"), Some(Fixture::TempoChange));
    assert_eq!(Fixture::from_name("multi_track.mid"), Some(Fixture::MultiTrack));
    assert_eq!(Fixture::from_name("polyphony"), None);
    for fixture in Fixture::ALL {
        assert_eq!(Fixture::from_name(fixture.file_name()), Some(fixture));
    }
}

#[test]
fn tempo_change_switches_to_140_bpm() {
    let builder = Fixture::TempoChange.builder();
    let tempos: Vec<_> = builder.tracks()[0]
        .iter()
        .filter_map(|e| match e {
            MidiEvent::SetTempo {
                micros_per_quarter_note,
                ..
            } => Some(*micros_per_quarter_note),
            _ => None,
        })
        .collect();
    assert_eq!(tempos, [500_000, 428_571]);
}

#[test]
fn presets_pass_strict_validation() {
    for fixture in Fixture::ALL {
        let lenient = fixture.encode().unwrap();
        let strict = fixture.builder().strict().build().unwrap();
        assert_eq!(lenient, strict, "{fixture}");
    }
}
