use smf_fixtures::prelude::*;

/// Decodes one variable-length quantity, returning the value and bytes consumed.
fn decode(bytes: &[u8]) -> (u32, usize) {
    let mut value = 0u32;
    for (i, byte) in bytes.iter().enumerate() {
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return (value, i + 1);
        }
    }
    panic!("unterminated quantity {bytes:02X?}");
}

fn minimal_len(value: u32) -> usize {
    let bits = 32 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

fn check(value: u32) {
    let vlq = VariableLengthQuantity::new(value).unwrap();
    let bytes = vlq.encode();
    let (decoded, consumed) = decode(&bytes);
    assert_eq!(decoded, value);
    assert_eq!(consumed, bytes.len(), "trailing bytes for {value:#X}");
    assert_eq!(
        bytes.len(),
        minimal_len(value),
        "non-minimal encoding of {value:#X}"
    );
    assert_ne!(bytes[0], 0x80, "leading empty group for {value:#X}");
}

#[test]
fn round_trip_group_boundaries() {
    for shift in [0, 7, 14, 21] {
        let edge = 1u32 << shift;
        for value in [edge.saturating_sub(1), edge, edge + 1] {
            check(value);
        }
    }
    check(VariableLengthQuantity::MAX.value());
    check(VariableLengthQuantity::MAX.value() - 1);
}

#[test]
fn round_trip_sweep() {
    // every value below 2^16, then a prime stride over the rest
    (0..=0xFFFF).for_each(check);
    (0x1_0000..=VariableLengthQuantity::MAX.value())
        .step_by(9_973)
        .for_each(check);
}

#[test]
fn reference_encodings() {
    use pretty_assertions::assert_eq;
    use smf_fixtures::vlq::encode;
    assert_eq!(encode(0).unwrap().as_slice(), [0x00]);
    assert_eq!(encode(127).unwrap().as_slice(), [0x7F]);
    assert_eq!(encode(128).unwrap().as_slice(), [0x81, 0x00]);
    assert_eq!(encode(480).unwrap().as_slice(), [0x83, 0x60]);
}

#[test]
fn out_of_range_is_rejected() {
    assert!(matches!(
        VariableLengthQuantity::new(1 << 28),
        Err(DomainError::DeltaTimeOutOfRange(0x1000_0000))
    ));
    assert!(matches!(
        VariableLengthQuantity::try_from(-480i64),
        Err(DomainError::NegativeDeltaTime(-480))
    ));
    assert!(matches!(
        MidiEvent::note_on(u32::MAX, 0, 60, 100).encode(),
        Err(EncodeError::Domain(DomainError::DeltaTimeOutOfRange(_)))
    ));
}
