/// Payer and payee identity rows: INN, KPP and payer status.
use crate::enums::{PayerStatus, PaymentType};
use crate::violation::ViolationKind;

use super::{CheckResult, exact_len, forbidden, not_applicable, pass, required};

const ORGANISATION_INN: &[usize] = &[10];
const INDIVIDUAL_INN: &[usize] = &[12];

fn status_is(status: Option<PayerStatus>, code: &str) -> bool {
    status.is_some_and(|s| s.is(code))
}

fn status_is_any(status: Option<PayerStatus>, codes: &[&str]) -> bool {
    status.is_some_and(|s| s.is_any(codes))
}

/// Payer INN requirements of budget payments.
///
/// | Type | Rule |
/// |---|---|
/// | FNS | required unless status `13` |
/// | CUSTOMS | required unless status `30`; 12 digits for statuses `16`, `17` |
/// | BUDGET_OTHER | required, no leading `00` |
/// | other | unrestricted |
pub fn check_payer_inn(
    inn: Option<&str>,
    payment_type: PaymentType,
    status: Option<PayerStatus>,
) -> CheckResult {
    match payment_type {
        PaymentType::Fns => {
            if inn.is_none() && !status_is(status, "13") {
                return Err(ViolationKind::Required);
            }
        }
        PaymentType::Customs => {
            if inn.is_none() && !status_is(status, "30") {
                return Err(ViolationKind::Required);
            }
            if let Some(inn) = inn {
                if status_is_any(status, &["16", "17"]) {
                    exact_len(inn, INDIVIDUAL_INN)?;
                }
            }
        }
        PaymentType::BudgetOther => {
            if required(inn)?.starts_with("00") {
                return Err(ViolationKind::LeadingZeros);
            }
        }
        PaymentType::Ip | PaymentType::Fl | PaymentType::Le => {}
    }
    pass(inn)
}

/// A customs payment made for a third person under status `06` must carry
/// the third person's organisation INN.
pub fn check_payer_inn_for_third_face(
    inn: Option<&str>,
    payment_type: PaymentType,
    status: Option<PayerStatus>,
    for_third_face: bool,
) -> CheckResult {
    if payment_type == PaymentType::Customs && for_third_face && status_is(status, "06") {
        if let Some(inn) = inn {
            exact_len(inn, ORGANISATION_INN)?;
        }
    }
    pass(inn)
}

/// Payee INN: 12 digits for individuals (required for IP), 10 digits and
/// required for everybody else.
pub fn check_payee_inn(inn: Option<&str>, payment_type: PaymentType) -> CheckResult {
    match payment_type {
        PaymentType::Ip => exact_len(required(inn)?, INDIVIDUAL_INN)?,
        PaymentType::Fl => {
            if let Some(inn) = inn {
                exact_len(inn, INDIVIDUAL_INN)?;
            }
        }
        PaymentType::Le | PaymentType::Fns | PaymentType::Customs | PaymentType::BudgetOther => {
            exact_len(required(inn)?, ORGANISATION_INN)?;
        }
    }
    pass(inn)
}

/// Budget payments must state the payer status.
pub fn check_payer_status(status: Option<&str>, payment_type: PaymentType) -> CheckResult {
    if !payment_type.is_budget() {
        return not_applicable();
    }
    required(status)?;
    pass(status)
}

/// Status `06` cannot be used for a customs payment made for a third person.
pub fn check_payer_status_for_third_face(
    status: Option<&str>,
    payment_type: PaymentType,
    for_third_face: bool,
) -> CheckResult {
    if !payment_type.is_budget() {
        return not_applicable();
    }
    if payment_type == PaymentType::Customs && for_third_face && status == Some("06") {
        return Err(ViolationKind::NotPermitted);
    }
    pass(status)
}

/// Payer KPP of budget payments follows the payer INN: organisations (10
/// digits) must give it, individuals (12 digits) must not.
pub fn check_payer_kpp(
    kpp: Option<&str>,
    inn: Option<&str>,
    payment_type: PaymentType,
) -> CheckResult {
    if !payment_type.is_budget() {
        return not_applicable();
    }
    match inn.map(str::len) {
        Some(10) => {
            required(kpp)?;
            pass(kpp)
        }
        Some(12) => forbidden(kpp),
        Some(_) | None => pass(kpp),
    }
}

/// Payee KPP: individuals have none, every organisation payee needs one.
pub fn check_payee_kpp(kpp: Option<&str>, payment_type: PaymentType) -> CheckResult {
    match payment_type {
        PaymentType::Ip | PaymentType::Fl => forbidden(kpp),
        PaymentType::Fns | PaymentType::Customs | PaymentType::BudgetOther | PaymentType::Le => {
            if required(kpp)?.starts_with("00") {
                return Err(ViolationKind::LeadingZeros);
            }
            pass(kpp)
        }
    }
}
