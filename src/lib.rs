#![doc = r#"
Synthetic Standard MIDI File encoder for test fixtures

Builds byte-exact SMF files from a small event vocabulary: Note On, Note Off,
Set Tempo and End of Track. Encoding is a pure function of its input; the
[`writer`] module, available with the `std` feature, persists the result.

```text
VariableLengthQuantity -> MidiEvent -> chunk -> SmfBuilder / assemble
```

# Example
```rust
use smf_fixtures::prelude::*;

let bytes = assemble(
    Format::SingleMultiChannel,
    480,
    &[[
        MidiEvent::note_on(0, 0, 60, 100),
        MidiEvent::note_off(480, 0, 60),
        MidiEvent::end_of_track(0),
    ]],
)
.unwrap();

assert_eq!(&bytes[..14], b"MThd\0\0\0\x06\0\0\0\x01\x01\xE0");
assert_eq!(bytes.len(), 14 + 8 + 13);
```
"#]
#![warn(missing_docs)]
#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
pub use error::*;

pub mod file;
pub mod fixtures;
pub mod message;
pub mod vlq;

#[cfg(feature = "std")]
pub mod writer;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        DomainError, EncodeError, EncodeResult, EncodingError, RangeError,
        file::{
            ChunkTag, Format, SmfBuilder, SmfHeader, TicksPerQuarterNote, Validation, assemble,
            encode_track,
        },
        fixtures::Fixture,
        message::{Channel, DataByte, MidiEvent, Tempo},
        vlq::{VariableLengthQuantity, VlqBytes},
    };

    #[cfg(feature = "std")]
    pub use crate::writer::{WriteError, write_all, write_fixture, write_fixtures};
}
