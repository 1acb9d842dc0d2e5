use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::RangeError;

#[doc = r#"
The SMF format word of the header chunk.

Format 2 (sequentially independent tracks) is not produced by this crate.
"#]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Format {
    /// Format 0, one track carrying every channel
    SingleMultiChannel = 0,
    /// Format 1, tracks played simultaneously
    Simultaneous = 1,
}

impl Format {
    /// The value written to the header
    pub fn word(self) -> u16 {
        self.into()
    }
}

/// The header division word, in ticks per quarter note.
///
/// The leading bit of the word selects SMPTE timing, so valid values are `1..=32767`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct TicksPerQuarterNote(u16);

impl TicksPerQuarterNote {
    /// Checks the division is a nonzero tick rate without the SMPTE bit.
    pub const fn new(tpqn: u16) -> Result<Self, RangeError> {
        if tpqn == 0 || tpqn & 0x8000 != 0 {
            return Err(RangeError::Division(tpqn));
        }
        Ok(Self(tpqn))
    }

    /// Returns the ticks per quarter note.
    pub const fn ticks_per_quarter_note(&self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for TicksPerQuarterNote {
    type Error = RangeError;
    fn try_from(tpqn: u16) -> Result<Self, Self::Error> {
        Self::new(tpqn)
    }
}

impl From<TicksPerQuarterNote> for u16 {
    fn from(value: TicksPerQuarterNote) -> Self {
        value.0
    }
}

#[test]
fn format_words() {
    assert_eq!(Format::SingleMultiChannel.word(), 0);
    assert_eq!(Format::Simultaneous.word(), 1);
    assert_eq!(Format::try_from(1u16).unwrap(), Format::Simultaneous);
    assert!(Format::try_from(2u16).is_err());
}

#[test]
fn division_bounds() {
    assert_eq!(TicksPerQuarterNote::new(480).unwrap().ticks_per_quarter_note(), 480);
    assert_eq!(TicksPerQuarterNote::new(0x7FFF).unwrap().ticks_per_quarter_note(), 0x7FFF);
    assert_eq!(TicksPerQuarterNote::new(0), Err(RangeError::Division(0)));
    assert_eq!(TicksPerQuarterNote::new(0xE250), Err(RangeError::Division(0xE250)));
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_rejects_smpte_division() {
    let division: TicksPerQuarterNote = serde_json::from_str("480").unwrap();
    assert_eq!(division.ticks_per_quarter_note(), 480);
    assert!(serde_json::from_str::<TicksPerQuarterNote>("59176").is_err());
    assert!(serde_json::from_str::<TicksPerQuarterNote>("0").is_err());
}
