#![doc = r#"
MIDI variable-length quantities

Delta-times and meta-event lengths are written as big-endian base-128 integers.
Every byte but the last has its high bit set, and the encoding is always the
shortest one, so each value has exactly one byte sequence.

```text
        0  -> 00
      127  -> 7F
      128  -> 81 00
      480  -> 83 60
0x0FFFFFFF -> FF FF FF 7F
```
"#]
use core::ops::Deref;

use crate::DomainError;

/// A non-negative integer in `0..=0x0FFF_FFFF`, the range of a 4-byte VLQ.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct VariableLengthQuantity(u32);

impl VariableLengthQuantity {
    /// Zero.
    pub const ZERO: Self = Self(0);
    /// The largest value MIDI can carry in four bytes.
    pub const MAX: Self = Self(0x0FFF_FFFF);

    /// Checks the value fits in four encoded bytes.
    pub const fn new(value: u32) -> Result<Self, DomainError> {
        if value > Self::MAX.0 {
            return Err(DomainError::DeltaTimeOutOfRange(value as u64));
        }
        Ok(Self(value))
    }

    /// Returns the underlying integer
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Number of bytes [`encode`](Self::encode) produces.
    pub const fn encoded_len(&self) -> usize {
        match self.0 {
            0..=0x7F => 1,
            0x80..=0x3FFF => 2,
            0x4000..=0x1F_FFFF => 3,
            _ => 4,
        }
    }

    /// Encodes the value, most significant group first.
    pub fn encode(&self) -> VlqBytes {
        let mut groups = [0u8; 4];
        let mut len = 0;
        let mut rest = self.0;
        loop {
            groups[len] = (rest & 0x7F) as u8;
            len += 1;
            rest >>= 7;
            if rest == 0 {
                break;
            }
        }

        let mut bytes = [0u8; 4];
        for (i, group) in groups[..len].iter().rev().enumerate() {
            bytes[i] = if i + 1 < len { group | 0x80 } else { *group };
        }
        VlqBytes { bytes, len }
    }
}

impl TryFrom<u32> for VariableLengthQuantity {
    type Error = DomainError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u64> for VariableLengthQuantity {
    type Error = DomainError;
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map_err(|_| DomainError::DeltaTimeOutOfRange(value))
            .and_then(Self::new)
    }
}

impl TryFrom<i64> for VariableLengthQuantity {
    type Error = DomainError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DomainError::NegativeDeltaTime(value));
        }
        Self::try_from(value as u64)
    }
}

impl From<VariableLengthQuantity> for u32 {
    fn from(value: VariableLengthQuantity) -> Self {
        value.0
    }
}

impl From<u16> for VariableLengthQuantity {
    fn from(value: u16) -> Self {
        Self(value as u32)
    }
}

impl From<u8> for VariableLengthQuantity {
    fn from(value: u8) -> Self {
        Self(value as u32)
    }
}

/// The encoded form of a [`VariableLengthQuantity`], one to four bytes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct VlqBytes {
    bytes: [u8; 4],
    len: usize,
}

impl VlqBytes {
    /// The encoded bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Deref for VlqBytes {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl AsRef<[u8]> for VlqBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

/// Encodes `value` as a variable-length quantity.
///
/// # Errors
/// [`DomainError::DeltaTimeOutOfRange`] if the value needs more than four bytes.
pub fn encode(value: u32) -> Result<VlqBytes, DomainError> {
    VariableLengthQuantity::new(value).map(|v| v.encode())
}

#[test]
fn encode_boundaries() {
    use pretty_assertions::assert_eq;
    let cases: [(u32, &[u8]); 9] = [
        (0, &[0x00]),
        (0x40, &[0x40]),
        (0x7F, &[0x7F]),
        (0x80, &[0x81, 0x00]),
        (480, &[0x83, 0x60]),
        (0x3FFF, &[0xFF, 0x7F]),
        (0x4000, &[0x81, 0x80, 0x00]),
        (0x20_0000, &[0x81, 0x80, 0x80, 0x00]),
        (0x0FFF_FFFF, &[0xFF, 0xFF, 0xFF, 0x7F]),
    ];
    for (value, expected) in cases {
        assert_eq!(encode(value).unwrap().as_slice(), expected, "value {value:#X}");
    }
}

#[test]
fn encoded_len_matches_encoding() {
    for value in [0, 0x7F, 0x80, 0x3FFF, 0x4000, 0x1F_FFFF, 0x20_0000, 0x0FFF_FFFF] {
        let vlq = VariableLengthQuantity::new(value).unwrap();
        assert_eq!(vlq.encoded_len(), vlq.encode().len());
    }
}

#[test]
fn reject_out_of_domain() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        encode(0x1000_0000).unwrap_err(),
        DomainError::DeltaTimeOutOfRange(0x1000_0000)
    );
    assert_eq!(
        VariableLengthQuantity::try_from(-1i64).unwrap_err(),
        DomainError::NegativeDeltaTime(-1)
    );
    assert_eq!(
        VariableLengthQuantity::try_from(u64::MAX).unwrap_err(),
        DomainError::DeltaTimeOutOfRange(u64::MAX)
    );
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_checks_range() {
    use pretty_assertions::assert_eq;
    let vlq: VariableLengthQuantity = serde_json::from_str("480").unwrap();
    assert_eq!(vlq.encode().as_slice(), [0x83, 0x60]);
    assert_eq!(serde_json::to_string(&vlq).unwrap(), "480");
    assert!(serde_json::from_str::<VariableLengthQuantity>("268435456").is_err());
    assert!(serde_json::from_str::<VariableLengthQuantity>("4294967295").is_err());
}
