use alloc::vec::Vec;

use crate::prelude::*;

const NOTE_OFF: u8 = 0x80;
const NOTE_ON: u8 = 0x90;
const META: u8 = 0xFF;
const META_SET_TEMPO: u8 = 0x51;
const META_END_OF_TRACK: u8 = 0x2F;

#[doc = r#"
A delta-timed track event.

Fields hold raw integers; they are checked when the event is encoded, so an
out-of-range channel, note or velocity surfaces as a [`RangeError`] from
[`MidiEvent::encode`].

# Example
```rust
# use smf_fixtures::prelude::*;
let on = MidiEvent::note_on(0, 0, 60, 100);
assert_eq!(on.encode().unwrap(), [0x00, 0x90, 60, 100]);

let off = MidiEvent::note_off(480, 0, 60);
assert_eq!(off.encode().unwrap(), [0x83, 0x60, 0x80, 60, 0]);

assert!(MidiEvent::note_on(0, 16, 60, 100).encode().is_err());
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MidiEvent {
    /// `0x9n`
    NoteOn {
        /// Ticks since the previous event
        delta: u32,
        /// Channel, `0..=15`
        channel: u8,
        /// Note number, `0..=127`
        note: u8,
        /// Velocity, `0..=127`
        velocity: u8,
    },
    /// `0x8n`
    NoteOff {
        /// Ticks since the previous event
        delta: u32,
        /// Channel, `0..=15`
        channel: u8,
        /// Note number, `0..=127`
        note: u8,
        /// Release velocity, `0..=127`
        velocity: u8,
    },
    /// `FF 51 03 tt tt tt`
    SetTempo {
        /// Ticks since the previous event
        delta: u32,
        /// Microseconds per quarter note, 24 bits
        micros_per_quarter_note: u32,
    },
    /// `FF 2F 00`
    EndOfTrack {
        /// Ticks since the previous event
        delta: u32,
    },
}

impl MidiEvent {
    /// Note On
    pub const fn note_on(delta: u32, channel: u8, note: u8, velocity: u8) -> Self {
        Self::NoteOn {
            delta,
            channel,
            note,
            velocity,
        }
    }

    /// Note Off with the conventional release velocity of 0.
    pub const fn note_off(delta: u32, channel: u8, note: u8) -> Self {
        Self::NoteOff {
            delta,
            channel,
            note,
            velocity: 0,
        }
    }

    /// Set Tempo
    pub const fn tempo(delta: u32, tempo: Tempo) -> Self {
        Self::SetTempo {
            delta,
            micros_per_quarter_note: tempo.micros_per_quarter_note(),
        }
    }

    /// End of Track
    pub const fn end_of_track(delta: u32) -> Self {
        Self::EndOfTrack { delta }
    }

    /// Ticks since the previous event in the same track.
    pub const fn delta(&self) -> u32 {
        match self {
            Self::NoteOn { delta, .. }
            | Self::NoteOff { delta, .. }
            | Self::SetTempo { delta, .. }
            | Self::EndOfTrack { delta } => *delta,
        }
    }

    /// True for [`MidiEvent::EndOfTrack`]
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self, Self::EndOfTrack { .. })
    }

    /// Encodes the event, delta-time first.
    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode_into(&mut bytes)?;
        Ok(bytes)
    }

    /// Appends the encoded event to `buf`.
    ///
    /// Nothing is written if the event is rejected.
    pub fn encode_into(&self, buf: &mut Vec<u8>) -> EncodeResult<()> {
        let delta = VariableLengthQuantity::new(self.delta())?.encode();
        let body = self.body()?;
        buf.reserve(delta.len() + body.len);
        buf.extend_from_slice(&delta);
        buf.extend_from_slice(&body.bytes[..body.len]);
        Ok(())
    }

    fn body(&self) -> Result<EventBody, RangeError> {
        use MidiEvent::*;
        Ok(match *self {
            NoteOn {
                channel,
                note,
                velocity,
                ..
            } => EventBody::channel_voice(NOTE_ON, channel, note, velocity)?,
            NoteOff {
                channel,
                note,
                velocity,
                ..
            } => EventBody::channel_voice(NOTE_OFF, channel, note, velocity)?,
            SetTempo {
                micros_per_quarter_note,
                ..
            } => {
                let [a, b, c] = Tempo::new(micros_per_quarter_note)?.to_be_bytes();
                EventBody::new(&[META, META_SET_TEMPO, 0x03, a, b, c])
            }
            EndOfTrack { .. } => EventBody::new(&[META, META_END_OF_TRACK, 0x00]),
        })
    }
}

struct EventBody {
    bytes: [u8; 6],
    len: usize,
}

impl EventBody {
    fn new(src: &[u8]) -> Self {
        let mut bytes = [0; 6];
        bytes[..src.len()].copy_from_slice(src);
        Self {
            bytes,
            len: src.len(),
        }
    }

    fn channel_voice(status: u8, channel: u8, note: u8, velocity: u8) -> Result<Self, RangeError> {
        let channel = Channel::from_index(channel)?;
        let note = DataByte::note(note)?;
        let velocity = DataByte::velocity(velocity)?;
        Ok(Self::new(&[
            status | channel.index(),
            note.value(),
            velocity.value(),
        ]))
    }
}

#[test]
fn encode_channel_voice() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        MidiEvent::note_on(0, 9, 36, 127).encode().unwrap(),
        [0x00, 0x99, 36, 127]
    );
    assert_eq!(
        MidiEvent::note_off(480, 15, 62).encode().unwrap(),
        [0x83, 0x60, 0x8F, 62, 0]
    );
}

#[test]
fn encode_meta() {
    use pretty_assertions::assert_eq;
    let tempo = MidiEvent::tempo(0, Tempo::new(428_571).unwrap());
    assert_eq!(
        tempo.encode().unwrap(),
        [0x00, 0xFF, 0x51, 0x03, 0x06, 0x8A, 0x1B]
    );
    assert_eq!(
        MidiEvent::end_of_track(0).encode().unwrap(),
        [0x00, 0xFF, 0x2F, 0x00]
    );
}

#[test]
fn reject_out_of_range_fields() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        MidiEvent::note_on(0, 16, 60, 100).encode(),
        Err(EncodeError::Range(RangeError::Channel(16)))
    );
    assert_eq!(
        MidiEvent::note_on(0, 0, 128, 100).encode(),
        Err(EncodeError::Range(RangeError::Note(128)))
    );
    assert_eq!(
        MidiEvent::note_on(0, 0, 60, 200).encode(),
        Err(EncodeError::Range(RangeError::Velocity(200)))
    );
    let too_slow = MidiEvent::SetTempo {
        delta: 0,
        micros_per_quarter_note: 0x0100_0000,
    };
    assert_eq!(
        too_slow.encode(),
        Err(EncodeError::Range(RangeError::Tempo(0x0100_0000)))
    );
    assert_eq!(
        MidiEvent::end_of_track(0x1000_0000).encode(),
        Err(EncodeError::Domain(DomainError::DeltaTimeOutOfRange(0x1000_0000)))
    );
}

#[test]
fn rejected_event_leaves_buffer_untouched() {
    let mut buf = alloc::vec![0xAA];
    assert!(MidiEvent::note_on(0, 0, 60, 128).encode_into(&mut buf).is_err());
    assert_eq!(buf, [0xAA]);
}
