//! Property-based tests for normalization and the cross-field checks.
//!
//! Covers three guarantees: budget-only rows return no value for non-budget
//! payments whatever the input, normalization is idempotent, and corrupting
//! the control digit of an INN, UIN or account key is always detected.
#![allow(clippy::expect_used)]

use payord_core::checks::{
    check_cbc, check_document_date, check_document_number, check_oktmo, check_payer_kpp,
    check_payer_status, check_payer_status_for_third_face, check_purpose_code, check_reason,
    check_tax_period, check_uin,
};
use payord_core::codes::PAYER_STATUSES;
use payord_core::{
    Field, PayerStatus, PaymentType, Value, ViolationKind, account_key_check, inn_check,
    normalize, uin_check, validate_inn, validate_uin,
};
use proptest::prelude::*;

const INN10_WEIGHTS: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];
const INN11_WEIGHTS: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];
const INN12_WEIGHTS: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

fn control(digits: &str, weights: &[u32]) -> char {
    let sum: u32 = digits
        .chars()
        .zip(weights)
        .map(|(c, w)| c.to_digit(10).expect("digit") * w)
        .sum();
    char::from_digit(sum % 11 % 10, 10).expect("single digit")
}

/// Replaces the last digit of `s` with a different one.
fn corrupt_last(s: &str, delta: u32) -> String {
    let (body, last) = s.split_at(s.len() - 1);
    let last = last.chars().next().and_then(|c| c.to_digit(10)).expect("digit");
    let changed = char::from_digit((last + delta) % 10, 10).expect("single digit");
    format!("{body}{changed}")
}

fn non_budget_type() -> impl Strategy<Value = PaymentType> {
    prop::sample::select(vec![PaymentType::Ip, PaymentType::Fl, PaymentType::Le])
}

fn payer_status() -> impl Strategy<Value = Option<PayerStatus>> {
    prop::option::of(
        prop::sample::select(PAYER_STATUSES.to_vec())
            .prop_map(|code| PayerStatus::parse(code).expect("listed status")),
    )
}

fn raw_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[ 0-9A-Za-zА-Яа-я;.-]{0,25}")
}

fn raw_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        (-3i64..30).prop_map(Value::Int),
        "[0-9]{0,26}".prop_map(Value::Text),
        "[ 0-9A-Z\\-]{0,22}".prop_map(Value::Text),
        "[ а-яА-Я0-9,.]{0,40}".prop_map(Value::Text),
        prop::sample::select(vec!["FNS", "le", "ПК", "0", " 01 ", "3"])
            .prop_map(|s| Value::Text(s.to_owned())),
    ]
}

proptest! {
    #[test]
    fn budget_rows_return_nothing_for_non_budget_payments(
        pt in non_budget_type(),
        value in raw_text(),
        other in raw_text(),
        status in payer_status(),
        flag in any::<bool>(),
    ) {
        let value = value.as_deref();
        let other = other.as_deref();
        prop_assert_eq!(check_payer_status(value, pt), Ok(None));
        prop_assert_eq!(check_payer_status_for_third_face(value, pt, flag), Ok(None));
        prop_assert_eq!(check_payer_kpp(value, other, pt), Ok(None));
        prop_assert_eq!(check_uin(value, pt, status, other), Ok(None));
        prop_assert_eq!(check_cbc(value, pt), Ok(None));
        prop_assert_eq!(check_oktmo(value, pt, status), Ok(None));
        prop_assert_eq!(check_reason(value, pt), Ok(None));
        prop_assert_eq!(check_tax_period(value, pt, status), Ok(None));
        prop_assert_eq!(
            check_document_number(value, pt, other, status, other, other, other),
            Ok(None)
        );
        prop_assert_eq!(check_document_date(value, pt), Ok(None));
    }

    #[test]
    fn purpose_code_only_kept_for_individuals(
        pt in prop::sample::select(PaymentType::ALL.to_vec()),
        value in raw_text(),
    ) {
        prop_assume!(pt != PaymentType::Fl);
        prop_assert_eq!(check_purpose_code(value.as_deref(), pt), Ok(None));
    }

    #[test]
    fn normalization_is_idempotent(
        field in prop::sample::select(Field::ALL.to_vec()),
        raw in raw_value(),
    ) {
        if let Ok(Some(once)) = normalize(field, Some(&raw)) {
            let twice = normalize(field, Some(&once));
            prop_assert_eq!(twice, Ok(Some(once)));
        }
    }

    #[test]
    fn corrupted_inn10_fails(body in "[1-9][0-9]{8}", delta in 1u32..10) {
        let inn = format!("{body}{}", control(&body, &INN10_WEIGHTS));
        prop_assert!(inn_check(&inn));
        prop_assert_eq!(validate_inn(&inn), Ok(Some(inn.clone())));

        let bad = corrupt_last(&inn, delta);
        prop_assert!(!inn_check(&bad));
        prop_assert_eq!(validate_inn(&bad), Err(ViolationKind::Checksum));
    }

    #[test]
    fn corrupted_inn12_fails(body in "[1-9][0-9]{9}", delta in 1u32..10) {
        let eleven = format!("{body}{}", control(&body, &INN11_WEIGHTS));
        let inn = format!("{eleven}{}", control(&eleven, &INN12_WEIGHTS));
        prop_assert!(inn_check(&inn));

        let bad = corrupt_last(&inn, delta);
        prop_assert!(!inn_check(&bad));
        prop_assert_eq!(validate_inn(&bad), Err(ViolationKind::Checksum));
    }

    #[test]
    fn uin_has_exactly_one_control_digit(body in "[1-9][0-9]{18}", delta in 1u32..10) {
        let valid: Vec<String> = (0..10)
            .map(|d| format!("{body}{d}"))
            .filter(|uin| uin_check(uin))
            .collect();
        prop_assert_eq!(valid.len(), 1);

        let bad = corrupt_last(&valid[0], delta);
        prop_assert_eq!(validate_uin(&bad), Err(ViolationKind::Checksum));
    }

    #[test]
    fn account_has_exactly_one_control_key(
        head in "[1-9][0-9]{7}",
        tail in "[0-9]{11}",
        bic in "04[0-9]{7}",
    ) {
        let passing = (0..10)
            .filter(|key| account_key_check(&format!("{head}{key}{tail}"), &bic))
            .count();
        prop_assert_eq!(passing, 1);
    }
}
