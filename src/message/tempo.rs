use crate::RangeError;

#[doc = r#"
Microseconds per quarter note, as carried by a Set Tempo meta event.

The value is written as three big-endian bytes, so it must fit in 24 bits.

# Example
```rust
# use smf_fixtures::prelude::*;
let tempo = Tempo::from_bpm(140).unwrap();
assert_eq!(tempo.micros_per_quarter_note(), 428_571);
assert_eq!(tempo.to_be_bytes(), [0x06, 0x8A, 0x1B]);
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Tempo(u32);

impl Tempo {
    /// The largest tempo value a Set Tempo event can hold.
    pub const MAX_MICROS: u32 = 0x00FF_FFFF;

    /// 120 BPM, the SMF default when a file has no tempo event.
    pub const DEFAULT: Self = Self(500_000);

    /// Checks the value fits in 24 bits.
    pub const fn new(micros_per_quarter_note: u32) -> Result<Self, RangeError> {
        if micros_per_quarter_note > Self::MAX_MICROS {
            return Err(RangeError::Tempo(micros_per_quarter_note));
        }
        Ok(Self(micros_per_quarter_note))
    }

    /// Tempo from beats per minute, truncating to whole microseconds.
    ///
    /// Tempos slower than about 3.6 BPM overflow 24 bits and are rejected.
    pub const fn from_bpm(bpm: u32) -> Result<Self, RangeError> {
        if bpm == 0 {
            return Err(RangeError::ZeroBpm);
        }
        Self::new(60_000_000 / bpm)
    }

    /// Returns the microseconds per quarter note
    #[inline]
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Beats per minute
    pub fn bpm(&self) -> f64 {
        60_000_000. / self.0 as f64
    }

    /// The three low-order bytes, big-endian.
    pub const fn to_be_bytes(&self) -> [u8; 3] {
        let [_, a, b, c] = self.0.to_be_bytes();
        [a, b, c]
    }
}

impl TryFrom<u32> for Tempo {
    type Error = RangeError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tempo> for u32 {
    fn from(value: Tempo) -> Self {
        value.0
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn tempo_bytes() {
    use pretty_assertions::assert_eq;
    assert_eq!(Tempo::new(500_000).unwrap().to_be_bytes(), [0x07, 0xA1, 0x20]);
    assert_eq!(Tempo::new(428_571).unwrap().to_be_bytes(), [0x06, 0x8A, 0x1B]);
    assert_eq!(Tempo::from_bpm(120).unwrap(), Tempo::DEFAULT);
}

#[test]
fn tempo_limits() {
    assert!(Tempo::new(Tempo::MAX_MICROS).is_ok());
    assert_eq!(Tempo::new(0x0100_0000), Err(RangeError::Tempo(0x0100_0000)));
    assert_eq!(Tempo::from_bpm(0), Err(RangeError::ZeroBpm));
    assert!(Tempo::from_bpm(3).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_checks_24_bits() {
    let tempo: Tempo = serde_json::from_str("428571").unwrap();
    assert_eq!(tempo.to_be_bytes(), [0x06, 0x8A, 0x1B]);
    assert_eq!(serde_json::to_string(&tempo).unwrap(), "428571");
    assert!(serde_json::from_str::<Tempo>("16777216").is_err());
}
