use crate::RangeError;

/// A 7-bit data byte. The high bit is reserved for status bytes.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// Returns `None` if the leading bit is set.
    pub const fn new(byte: u8) -> Option<Self> {
        if byte > 0x7F {
            return None;
        }
        Some(Self(byte))
    }

    /// Checks a note number.
    pub const fn note(byte: u8) -> Result<Self, RangeError> {
        match Self::new(byte) {
            Some(b) => Ok(b),
            None => Err(RangeError::Note(byte)),
        }
    }

    /// Checks a velocity.
    pub const fn velocity(byte: u8) -> Result<Self, RangeError> {
        match Self::new(byte) {
            Some(b) => Ok(b),
            None => Err(RangeError::Velocity(byte)),
        }
    }

    /// The byte value
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = RangeError;
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::new(byte).ok_or(RangeError::DataByte(byte))
    }
}

impl From<DataByte> for u8 {
    fn from(value: DataByte) -> Self {
        value.0
    }
}

#[test]
fn data_byte_rejects_status_bit() {
    assert_eq!(DataByte::new(127).map(|b| b.value()), Some(127));
    assert!(DataByte::new(128).is_none());
    assert_eq!(DataByte::note(200), Err(RangeError::Note(200)));
    assert_eq!(DataByte::velocity(128), Err(RangeError::Velocity(128)));
    assert_eq!(DataByte::try_from(0x90), Err(RangeError::DataByte(0x90)));
}

#[cfg(feature = "serde")]
#[test]
fn deserialize_checks_status_bit() {
    let byte: DataByte = serde_json::from_str("100").unwrap();
    assert_eq!(byte.value(), 100);
    assert!(serde_json::from_str::<DataByte>("128").is_err());
}
