#![doc = r#"
Assembly of complete Standard MIDI Files

```text
[Header Chunk: "MThd", 6 bytes]
[Track Chunk 1: "MTrk"]
...
[Track Chunk N: "MTrk"]
```

The header declares the format, the number of track chunks that follow and
the division. Track chunks are written in input order with no separators.
"#]

pub mod chunk;
pub use chunk::ChunkTag;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod builder;
pub use builder::*;
