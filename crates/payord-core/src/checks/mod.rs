/// Cross-field rule functions: the legality matrix of a payment order.
///
/// Every function takes the (already normalized) value of its target field
/// plus the dependent values and returns either the value to keep, `Ok(None)`
/// when the field does not apply, or the [`ViolationKind`] raised.
///
/// For rows that only exist for payments to the budget system, every
/// non-budget [`PaymentType`](crate::enums::PaymentType) yields `Ok(None)`
/// whatever the input.
pub mod accounts;
pub mod budget;
pub mod parties;
pub mod purpose;

pub use accounts::{check_account_bic, check_operation_kind, check_payee_account};
pub use budget::{
    check_cbc, check_document_date, check_document_number, check_oktmo, check_reason,
    check_tax_period, check_uin,
};
pub use parties::{
    check_payee_inn, check_payee_kpp, check_payer_inn, check_payer_inn_for_third_face,
    check_payer_kpp, check_payer_status, check_payer_status_for_third_face,
};
pub use purpose::{check_purpose, check_purpose_code};

use crate::violation::ViolationKind;

/// Outcome of a single cross-field check.
pub type CheckResult = Result<Option<String>, ViolationKind>;

/// Keeps `value` unchanged.
fn pass(value: Option<&str>) -> CheckResult {
    Ok(value.map(str::to_owned))
}

/// The field does not apply; drop whatever was supplied.
fn not_applicable() -> CheckResult {
    Ok(None)
}

fn required(value: Option<&str>) -> Result<&str, ViolationKind> {
    value.ok_or(ViolationKind::Required)
}

fn forbidden(value: Option<&str>) -> CheckResult {
    match value {
        Some(_) => Err(ViolationKind::Forbidden),
        None => Ok(None),
    }
}

fn exact_len(value: &str, allowed: &'static [usize]) -> Result<(), ViolationKind> {
    let actual = value.chars().count();
    if allowed.contains(&actual) {
        Ok(())
    } else {
        Err(ViolationKind::InvalidLength { allowed, actual })
    }
}

fn max_len(value: &str, max: usize) -> Result<(), ViolationKind> {
    let actual = value.chars().count();
    if actual > max {
        Err(ViolationKind::TooLong { max, actual })
    } else {
        Ok(())
    }
}
