#![doc = r#"
Length-prefixed chunks

An SMF file is a sequence of chunks, each identified by a 4-character ASCII tag
followed by a 32-bit big-endian length and exactly that many payload bytes.

```text
[tag: 4 bytes][length: u32 BE][payload: length bytes]
```

The header chunk is tagged `MThd` and the track chunks `MTrk`. No padding is
inserted between or inside chunks.
"#]
use alloc::vec::Vec;

use crate::EncodingError;

/// A 4-byte chunk identifier.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct ChunkTag([u8; 4]);

impl ChunkTag {
    /// `MThd`
    pub const HEADER: Self = Self(*b"MThd");
    /// `MTrk`
    pub const TRACK: Self = Self(*b"MTrk");

    /// Checks the tag is exactly four ASCII bytes.
    pub fn new(tag: &[u8]) -> Result<Self, EncodingError> {
        let tag: [u8; 4] = tag
            .try_into()
            .map_err(|_| EncodingError::TagLength(tag.len()))?;
        if !tag.is_ascii() {
            return Err(EncodingError::TagNotAscii(tag));
        }
        Ok(Self(tag))
    }

    /// The raw tag bytes
    pub const fn bytes(&self) -> [u8; 4] {
        self.0
    }
}

/// Wraps `payload` in a chunk tagged `tag`.
///
/// # Errors
/// - [`EncodingError::TagLength`] if `tag` is not 4 bytes
/// - [`EncodingError::TagNotAscii`] if `tag` holds a non-ASCII byte
/// - [`EncodingError::PayloadTooLarge`] if the length does not fit in 32 bits
pub fn build(tag: impl AsRef<[u8]>, payload: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let tag = ChunkTag::new(tag.as_ref())?;
    let mut out = Vec::new();
    write_chunk(&mut out, tag, payload)?;
    Ok(out)
}

/// Appends a chunk to `out`. Nothing is written on failure.
pub fn write_chunk(out: &mut Vec<u8>, tag: ChunkTag, payload: &[u8]) -> Result<(), EncodingError> {
    let len =
        u32::try_from(payload.len()).map_err(|_| EncodingError::PayloadTooLarge(payload.len()))?;
    out.reserve(8 + payload.len());
    out.extend_from_slice(&tag.bytes());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(payload);
    Ok(())
}

#[test]
fn chunk_layout() {
    use pretty_assertions::assert_eq;
    let chunk = build("MTrk", &[0x00, 0xFF, 0x2F, 0x00]).unwrap();
    assert_eq!(
        chunk,
        [b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00]
    );
    assert_eq!(build(b"MThd", &[]).unwrap(), *b"MThd\0\0\0\0");
}

#[test]
fn reject_bad_tags() {
    use pretty_assertions::assert_eq;
    assert_eq!(build("MTr", &[]), Err(EncodingError::TagLength(3)));
    assert_eq!(build("MTrks", &[]), Err(EncodingError::TagLength(5)));
    assert_eq!(build("", &[]), Err(EncodingError::TagLength(0)));
    assert_eq!(
        build([b'M', b'T', 0xF2, b'k'], &[]),
        Err(EncodingError::TagNotAscii([b'M', b'T', 0xF2, b'k']))
    );
    // four bytes, but "é" is two of them
    assert_eq!(
        build("MTé", &[]),
        Err(EncodingError::TagNotAscii([b'M', b'T', 0xC3, 0xA9]))
    );
}
