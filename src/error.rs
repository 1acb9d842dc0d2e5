#![doc = r#"
Error types produced while encoding a Standard MIDI File

Every failure here is an input-validation failure: encoding is a pure function
of its input, so a rejected input is rejected identically on every attempt.

# Hierarchy
```text
                 |-------------|
                 | EncodeError |
                 |-------------|
               /        |        \
|-------------|  |------------|  |---------------|
| DomainError |  | RangeError |  | EncodingError |
|-------------|  |------------|  |---------------|
```
"#]
use thiserror::Error;

/// A value falls outside the domain a variable-length quantity can represent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// Delta-times are tick counts and can never be negative.
    #[error("Delta-time cannot be negative: {0}")]
    NegativeDeltaTime(i64),
    /// Values above `0x0FFF_FFFF` need more than four VLQ bytes.
    #[error("Value {0} does not fit in a 4-byte variable-length quantity")]
    DeltaTimeOutOfRange(u64),
}

/// A field exceeds its bit width on the wire.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Channels are a 4-bit nibble of the status byte.
    #[error("Channel {0} is out of range (0-15)")]
    Channel(u8),
    /// Note numbers are data bytes.
    #[error("Note number {0} is out of range (0-127)")]
    Note(u8),
    /// Velocities are data bytes.
    #[error("Velocity {0} is out of range (0-127)")]
    Velocity(u8),
    /// Any other data byte with its status bit set.
    #[error("Data byte {0} is out of range (0-127)")]
    DataByte(u8),
    /// Set Tempo carries exactly three bytes.
    #[error("Tempo of {0} microseconds per quarter note does not fit in 24 bits")]
    Tempo(u32),
    /// A tempo of zero beats per minute has no duration per beat.
    #[error("Tempo must be at least 1 BPM")]
    ZeroBpm,
    /// A set high bit would switch the header into SMPTE timing.
    #[error("Division {0} is out of range (1-32767 ticks per quarter note)")]
    Division(u16),
}

/// A chunk or file cannot be laid out as requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// Chunk tags are exactly four ASCII bytes.
    #[error("Chunk tag must be 4 bytes long, got {0}")]
    TagLength(usize),
    /// Chunk tags are ASCII.
    #[error("Chunk tag {0:02X?} is not ASCII")]
    TagNotAscii([u8; 4]),
    /// The chunk length field is 32 bits wide.
    #[error("Chunk payload of {0} bytes exceeds the 32-bit length field")]
    PayloadTooLarge(usize),
    /// The header track count is 16 bits wide.
    #[error("{0} tracks do not fit in the 16-bit header track count")]
    TooManyTracks(usize),
    /// Strict validation: the track does not end with End of Track.
    #[error("Track {track} does not end with an End of Track event")]
    MissingEndOfTrack {
        /// Index of the offending track
        track: usize,
    },
    /// Strict validation: End of Track appears before the last event.
    #[error("Track {track} has an End of Track event at {index} before its last event")]
    EventAfterEndOfTrack {
        /// Index of the offending track
        track: usize,
        /// Position of the early End of Track within the track
        index: usize,
    },
    /// Strict validation: format 0 holds exactly one track.
    #[error("Format 0 files hold exactly one track, got {0}")]
    SingleTrackFormat(usize),
}

/// Any failure that can occur while encoding events, chunks or files.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// See [`DomainError`]
    #[error("Domain: {0}")]
    Domain(#[from] DomainError),
    /// See [`RangeError`]
    #[error("Range: {0}")]
    Range(#[from] RangeError),
    /// See [`EncodingError`]
    #[error("Encoding: {0}")]
    Encoding(#[from] EncodingError),
}

/// The Encode Result type (see [`EncodeError`])
pub type EncodeResult<T> = Result<T, EncodeError>;
