#![doc = r#"
Contains the event vocabulary written into track chunks

# Hierarchy
```text
                  |-----------|
                  | MidiEvent |
                  |-----------|
                 /             \
|-----------------------|   |------------|
| Channel Voice Message |   | Meta Event |
|-----------------------|   |------------|
   NoteOn, NoteOff            SetTempo, EndOfTrack
```

Every event starts with its delta-time encoded as a
[`VariableLengthQuantity`](crate::vlq::VariableLengthQuantity).
"#]
mod channel;
pub use channel::*;

mod data_byte;
pub use data_byte::*;

mod tempo;
pub use tempo::*;

mod event;
pub use event::*;
