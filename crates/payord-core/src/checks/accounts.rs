/// Account, BIC and operation-kind rows.
use crate::check_digits::account_key_check;
use crate::codes::{BUDGET_OPERATION_KINDS, FNS_ACCOUNT};
use crate::enums::PaymentType;
use crate::violation::ViolationKind;

use super::{CheckResult, pass, required};

/// Verifies the account control key against the bank BIC.
///
/// Applies to every payment type and to both the payer and payee pair.  Only
/// checked when both values are present.
///
/// # Examples
///
/// ```
/// use payord_core::checks::check_account_bic;
///
/// assert!(check_account_bic(Some("40702810700000000001"), Some("044525901")).is_ok());
/// assert!(check_account_bic(Some("40702810000000000001"), Some("044525901")).is_err());
/// assert!(check_account_bic(Some("40702810000000000001"), None).is_ok());
/// ```
pub fn check_account_bic(account: Option<&str>, bic: Option<&str>) -> CheckResult {
    if let (Some(account), Some(bic)) = (account, bic) {
        if !account_key_check(account, bic) {
            return Err(ViolationKind::AccountBicMismatch {
                bic: bic.to_owned(),
            });
        }
    }
    pass(account)
}

/// Tax payments go to the single treasury account of the tax service; every
/// other payee account passes through.
pub fn check_payee_account(account: Option<&str>, payment_type: PaymentType) -> CheckResult {
    match payment_type {
        PaymentType::Fns => {
            if required(account)? != FNS_ACCOUNT {
                return Err(ViolationKind::FixedAccount {
                    expected: FNS_ACCOUNT,
                });
            }
            pass(account)
        }
        PaymentType::Customs
        | PaymentType::BudgetOther
        | PaymentType::Ip
        | PaymentType::Fl
        | PaymentType::Le => pass(account),
    }
}

/// Budget payments are restricted to operation kinds `01`, `02` and `06`.
pub fn check_operation_kind(kind: Option<&str>, payment_type: PaymentType) -> CheckResult {
    if !payment_type.is_budget() {
        return pass(kind);
    }
    let code = required(kind)?;
    if !BUDGET_OPERATION_KINDS.contains(&code) {
        return Err(ViolationKind::NotAllowed {
            allowed: BUDGET_OPERATION_KINDS,
        });
    }
    pass(kind)
}
