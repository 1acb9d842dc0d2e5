use crate::prelude::*;

#[doc = r#"
The contents of the `MThd` chunk.

The payload is always six bytes: format, track count and division, each a
big-endian `u16`.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmfHeader {
    format: Format,
    track_count: u16,
    division: TicksPerQuarterNote,
}

impl SmfHeader {
    /// Size of the header payload in bytes
    pub const LEN: usize = 6;

    /// Create a new header
    pub const fn new(format: Format, track_count: u16, division: TicksPerQuarterNote) -> Self {
        Self {
            format,
            track_count,
            division,
        }
    }

    /// Get the format
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get the track count
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// Get the division
    pub const fn division(&self) -> TicksPerQuarterNote {
        self.division
    }

    /// The six payload bytes
    pub fn encode(&self) -> [u8; Self::LEN] {
        let mut bytes = [0; Self::LEN];
        bytes[0..2].copy_from_slice(&self.format.word().to_be_bytes());
        bytes[2..4].copy_from_slice(&self.track_count.to_be_bytes());
        bytes[4..6].copy_from_slice(&self.division.ticks_per_quarter_note().to_be_bytes());
        bytes
    }
}

#[test]
fn header_payload() {
    use pretty_assertions::assert_eq;
    let division = TicksPerQuarterNote::new(480).unwrap();
    let header = SmfHeader::new(Format::Simultaneous, 2, division);
    assert_eq!(header.encode(), [0x00, 0x01, 0x00, 0x02, 0x01, 0xE0]);

    let header = SmfHeader::new(Format::SingleMultiChannel, u16::MAX, division);
    assert_eq!(header.encode(), [0x00, 0x00, 0xFF, 0xFF, 0x01, 0xE0]);
}
