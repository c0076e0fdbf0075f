use annexb::{NalUnitScanner, ScanError};
use common::{NalUnit, NalUnitHeader, StartCode};
use proptest::prelude::*;

fn scan(data: &[u8]) -> Result<Vec<NalUnit>, ScanError> {
    NalUnitScanner::new(data).collect()
}

/// Units whose payloads hold no zero bytes, so no start code can be emulated inside them.
fn well_formed_units() -> impl Strategy<Value = Vec<(StartCode, Vec<u8>)>> {
    let start_code = prop_oneof![Just(StartCode::ThreeByte), Just(StartCode::FourByte)];
    let payload = prop::collection::vec(1u8..=u8::MAX, 1..48);

    prop::collection::vec((start_code, payload), 1..24)
}

fn build_stream(units: &[(StartCode, Vec<u8>)]) -> Vec<u8> {
    units
        .iter()
        .flat_map(|(sc, payload)| sc.bytes().iter().chain(payload).copied())
        .collect()
}

proptest! {
    #[test]
    fn proptest_well_formed_stream_splits_exactly(units in well_formed_units()) {
        let stream = build_stream(&units);
        let scanned = scan(&stream).unwrap();

        prop_assert_eq!(scanned.len(), units.len());

        let mut expected_offset = 0u64;
        for (unit, (start_code, payload)) in scanned.iter().zip(&units) {
            prop_assert_eq!(unit.start_code, *start_code);
            prop_assert_eq!(unit.offset, expected_offset);
            prop_assert_eq!(unit.payload(), payload.as_slice());
            prop_assert_eq!(unit.header, NalUnitHeader::from_byte(payload[0]));
            expected_offset += unit.byte_len() as u64;
        }

        prop_assert!(scanned.windows(2).all(|w| w[0].offset < w[1].offset));

        let consumed: usize = scanned.iter().map(NalUnit::byte_len).sum();
        prop_assert_eq!(consumed, stream.len());
    }

    #[test]
    fn proptest_arbitrary_tail_is_deterministic(
        four_byte in any::<bool>(),
        tail in prop::collection::vec(prop_oneof![Just(0u8), Just(1u8), any::<u8>()], 0..256),
    ) {
        let start_code = if four_byte { StartCode::FourByte } else { StartCode::ThreeByte };
        let stream: Vec<u8> = start_code.bytes().iter().chain(&tail).copied().collect();

        let first = scan(&stream).unwrap();
        let second = scan(&stream).unwrap();
        prop_assert_eq!(&first, &second);

        // empty units are skipped, so bytes may go unreported but never appear twice
        let consumed: usize = first.iter().map(NalUnit::byte_len).sum();
        prop_assert!(consumed <= stream.len());

        for unit in &first {
            prop_assert!(!unit.is_empty());
            prop_assert_eq!(unit.payload()[0], unit.header.to_byte());
            prop_assert!(unit.offset < stream.len() as u64);
            prop_assert_eq!(&stream[unit.offset as usize..][..unit.start_code.len()], unit.start_code.bytes());
        }
    }

    #[test]
    fn proptest_streams_without_leading_start_code_fail(
        head in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        prop_assume!(!head.starts_with(&StartCode::THREE_BYTE_PREFIX));
        prop_assume!(!head.starts_with(&StartCode::FOUR_BYTE_PREFIX));

        let rejected = matches!(
            scan(&head),
            Err(ScanError::TruncatedStream { .. } | ScanError::MalformedStream { .. })
        );
        prop_assert!(rejected);
    }
}

#[test]
fn test_stops_early_without_draining() -> Result<(), ScanError> {
    let units: Vec<_> = (0..100u8)
        .map(|i| (StartCode::FourByte, vec![0x41, i | 0x80]))
        .collect();
    let stream = build_stream(&units);

    let mut scanner = NalUnitScanner::new(stream.as_slice());
    let first_two = scanner.by_ref().take(2).collect::<Result<Vec<_>, _>>()?;

    assert_eq!(first_two.len(), 2);
    // two units plus the start code that ended the second one
    assert_eq!(scanner.position(), 6 * 2 + 4);

    let remaining = scanner.into_inner();
    assert_eq!(remaining.len(), stream.len() - 16);

    Ok(())
}
