//! # Screening Scenarios
//!
//! Guard and classifier applied together to single transfers, the way the
//! commit worker and the explorer see them.

#[cfg(test)]
mod tests {
    use primitive_types::U256;
    use shared_types::{TransferAmount, TransferRecord};
    use std::sync::Arc;
    use ti_01_amount_guard::{
        is_amount_supported, AmountGuard, AmountGuardApi, AmountRejection, NUMERIC_PRECISION,
    };
    use ti_02_direction_classifier::{
        classify_direction, DirectionClassifier, DirectionClassifierApi, DirectionTag,
    };

    const ALICE: [u8; 20] = [0xAA; 20];
    const BOB: [u8; 20] = [0xBB; 20];

    fn transfer(amount: &str, to: Option<[u8; 20]>) -> TransferRecord {
        TransferRecord {
            tx_hash: [0x01; 32],
            log_index: 0,
            block_number: 1,
            token_address: [0x22; 20],
            from_address: ALICE,
            to_address: to,
            amount: amount.parse().unwrap(),
        }
    }

    #[test]
    fn test_self_transfer_of_supported_amount() {
        let record = transfer("123", Some(ALICE));

        assert_eq!(record.amount.digit_count(), 3);
        assert!(AmountGuard::new().is_amount_supported(&record.amount));
        assert_eq!(
            DirectionClassifier::new().classify_transfer(&record),
            DirectionTag::SelfTransfer
        );
    }

    #[test]
    fn test_seventy_nine_digit_amount_rejected() {
        let record = transfer(&"9".repeat(79), Some(BOB));

        assert!(!AmountGuard::new().is_amount_supported(&record.amount));
        assert_eq!(
            AmountGuard::new().check_amount(&record.amount),
            Err(AmountRejection::PrecisionExceeded {
                digits: 79,
                max: NUMERIC_PRECISION
            })
        );
    }

    #[test]
    fn test_distinct_recipient_is_out() {
        let record = transfer("1", Some(BOB));
        assert_eq!(
            DirectionClassifier::new().classify_transfer(&record),
            DirectionTag::Out
        );
    }

    #[test]
    fn test_absent_recipient_is_out() {
        let record = transfer("1", None);
        assert_eq!(
            DirectionClassifier::new().classify_transfer(&record),
            DirectionTag::Out
        );
        assert_eq!(classify_direction(&ALICE, None), DirectionTag::Out);
    }

    #[test]
    fn test_decoder_widths_agree_on_u256_max() {
        // 2^256 - 1 has 78 digits, the widest a uint256 event can carry.
        let amount = TransferAmount::from(U256::MAX);
        assert_eq!(amount.digit_count(), 78);
        assert!(is_amount_supported(&amount));
        assert!(is_amount_supported(&U256::MAX));
    }

    #[test]
    fn test_guard_and_classifier_shared_across_threads() {
        let guard: Arc<dyn AmountGuardApi> = Arc::new(AmountGuard::new());
        let classifier: Arc<dyn DirectionClassifierApi> = Arc::new(DirectionClassifier::new());

        let inputs: Vec<TransferRecord> = (0..64u64)
            .map(|i| {
                let amount = if i % 2 == 0 { "5".to_string() } else { "1".repeat(80) };
                let to = if i % 3 == 0 { Some(ALICE) } else { Some(BOB) };
                transfer(&amount, to)
            })
            .collect();

        let expected: Vec<(bool, DirectionTag)> = inputs
            .iter()
            .map(|r| (guard.is_amount_supported(&r.amount), classifier.classify_transfer(r)))
            .collect();

        let results: Vec<Vec<(bool, DirectionTag)>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let guard = Arc::clone(&guard);
                    let classifier = Arc::clone(&classifier);
                    let inputs = &inputs;
                    scope.spawn(move || {
                        inputs
                            .iter()
                            .map(|r| {
                                (guard.is_amount_supported(&r.amount), classifier.classify_transfer(r))
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for result in results {
            assert_eq!(result, expected);
        }
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use shared_types::TransferAmount;
    use ti_01_amount_guard::{is_amount_supported, NUMERIC_PRECISION};
    use ti_02_direction_classifier::{classify_direction, DirectionTag};

    proptest! {
        #[test]
        fn guard_accepts_exactly_non_negative_numerals_within_precision(
            negative in any::<bool>(),
            digits in "[1-9][0-9]{0,90}",
        ) {
            let raw = if negative { format!("-{digits}") } else { digits.clone() };
            let amount: TransferAmount = raw.parse().unwrap();
            let expected = !negative && digits.len() <= NUMERIC_PRECISION;
            prop_assert_eq!(is_amount_supported(&amount), expected);
        }

        #[test]
        fn self_tag_only_for_identical_addresses(
            from in any::<[u8; 20]>(),
            to in proptest::option::of(any::<[u8; 20]>()),
        ) {
            let tag = classify_direction(&from, to.as_ref());
            prop_assert_eq!(tag == DirectionTag::SelfTransfer, to == Some(from));
        }
    }
}
