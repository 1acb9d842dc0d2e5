use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::RangeError;

#[doc = r#"
One of the sixteen MIDI channels.

The channel occupies the low nibble of a channel voice status byte, so
[`Channel::One`] is wire value `0` and [`Channel::Sixteen`] is `15`.

# Example
```rust
# use smf_fixtures::prelude::*;
let channel = Channel::from_index(9).unwrap();
assert_eq!(channel, Channel::Ten);
assert_eq!(channel.index(), 9);
assert!(Channel::from_index(16).is_err());
```
"#]
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// Identify a channel from its zero-based wire value.
    pub fn from_index(index: u8) -> Result<Self, RangeError> {
        Self::try_from(index).map_err(|_| RangeError::Channel(index))
    }

    /// The zero-based wire value, `0..=15`
    #[inline]
    pub fn index(self) -> u8 {
        self.into()
    }
}

#[test]
fn every_channel_round_trips() {
    for index in 0..16 {
        assert_eq!(Channel::from_index(index).unwrap().index(), index);
    }
    assert_eq!(Channel::from_index(16), Err(RangeError::Channel(16)));
}
