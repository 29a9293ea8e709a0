/// Rows that only exist for payments to the budget system: UIN and the tax
/// fields 104–109.
use std::sync::LazyLock;

use regex::Regex;

use crate::codes::{
    CUSTOMS_LONG_DOCUMENT_REASONS, CUSTOMS_REASONS, CUSTOMS_SHORT_DOCUMENT_REASONS,
    IDENTITY_DOCUMENT_CODES, UIN_ONLY_ACCOUNT_PREFIX,
};
use crate::enums::{PayerStatus, PaymentType};
use crate::violation::ViolationKind;

use super::{CheckResult, exact_len, forbidden, max_len, not_applicable, pass, required};

/// Identity document reference: two-digit document code, `;`, number.
static IDENTITY_DOCUMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2});(.+)$")
        .unwrap_or_else(|_| Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

const CUSTOMS_SHORT_DOCUMENT_MAX: usize = 7;
const DOCUMENT_NUMBER_MAX: usize = 15;
const TAX_PERIOD_MAX: usize = 10;
const DOCUMENT_DATE_MAX: usize = 10;

fn status_is(status: Option<PayerStatus>, code: &str) -> bool {
    status.is_some_and(|s| s.is(code))
}

/// UIN requirements.
///
/// FNS: required when status `13` pays without an INN; forbidden for status
/// `02`.  CUSTOMS and BUDGET_OTHER: required for status `31`.
pub fn check_uin(
    uin: Option<&str>,
    payment_type: PaymentType,
    status: Option<PayerStatus>,
    payer_inn: Option<&str>,
) -> CheckResult {
    match payment_type {
        PaymentType::Fns => {
            if status_is(status, "13") && payer_inn.is_none() {
                required(uin)?;
            }
            if status_is(status, "02") && uin.is_some() {
                return Err(ViolationKind::Forbidden);
            }
            pass(uin)
        }
        PaymentType::Customs | PaymentType::BudgetOther => {
            if status_is(status, "31") {
                required(uin)?;
            }
            pass(uin)
        }
        PaymentType::Ip | PaymentType::Fl | PaymentType::Le => not_applicable(),
    }
}

/// The budget classification code is required for tax and customs payments.
pub fn check_cbc(cbc: Option<&str>, payment_type: PaymentType) -> CheckResult {
    match payment_type {
        PaymentType::Fns | PaymentType::Customs => {
            required(cbc)?;
            pass(cbc)
        }
        PaymentType::BudgetOther => pass(cbc),
        PaymentType::Ip | PaymentType::Fl | PaymentType::Le => not_applicable(),
    }
}

/// OKTMO is required for tax payments, except statuses `01` and `13`.
pub fn check_oktmo(
    oktmo: Option<&str>,
    payment_type: PaymentType,
    status: Option<PayerStatus>,
) -> CheckResult {
    match payment_type {
        PaymentType::Fns => {
            let exempt = status.is_some_and(|s| s.is_any(&["01", "13"]));
            if !exempt {
                required(oktmo)?;
            }
            if oktmo.is_some_and(|code| code.bytes().all(|b| b == b'0')) {
                return Err(ViolationKind::AllZeros);
            }
            pass(oktmo)
        }
        PaymentType::Customs | PaymentType::BudgetOther => pass(oktmo),
        PaymentType::Ip | PaymentType::Fl | PaymentType::Le => not_applicable(),
    }
}

/// Payment reason (field 106): never given for tax payments, one of the
/// customs codes for customs payments.
pub fn check_reason(reason: Option<&str>, payment_type: PaymentType) -> CheckResult {
    match payment_type {
        PaymentType::Fns => forbidden(reason),
        PaymentType::Customs => {
            if !CUSTOMS_REASONS.contains(&required(reason)?) {
                return Err(ViolationKind::NotAllowed {
                    allowed: CUSTOMS_REASONS,
                });
            }
            pass(reason)
        }
        PaymentType::BudgetOther => pass(reason),
        PaymentType::Ip | PaymentType::Fl | PaymentType::Le => not_applicable(),
    }
}

/// Tax period (field 107).
///
/// | Type | Rule |
/// |---|---|
/// | FNS, status `02` | required |
/// | FNS, status `01`/`13` | must be empty |
/// | FNS, other | required, 10 characters |
/// | CUSTOMS | required, 8 characters (customs authority code) |
/// | BUDGET_OTHER | at most 10 characters |
pub fn check_tax_period(
    period: Option<&str>,
    payment_type: PaymentType,
    status: Option<PayerStatus>,
) -> CheckResult {
    match payment_type {
        PaymentType::Fns => {
            if status_is(status, "02") {
                required(period)?;
                return pass(period);
            }
            if status.is_some_and(|s| s.is_any(&["01", "13"])) {
                return forbidden(period);
            }
            exact_len(required(period)?, &[10])?;
            pass(period)
        }
        PaymentType::Customs => {
            exact_len(required(period)?, &[8])?;
            pass(period)
        }
        PaymentType::BudgetOther => {
            if let Some(period) = period {
                max_len(period, TAX_PERIOD_MAX)?;
            }
            pass(period)
        }
        PaymentType::Ip | PaymentType::Fl | PaymentType::Le => not_applicable(),
    }
}

/// Document number (field 108).
///
/// FNS: must be empty.  CUSTOMS: the length limit depends on `reason`; reason
/// `00` fixes the value to `00`.  BUDGET_OTHER: an individual paying without
/// INN or UIN under status `24` identifies themselves by an identity document
/// reference `NN;number`; payments to a UIN-only treasury account under
/// status `31` with a UIN must leave it empty.
pub fn check_document_number(
    number: Option<&str>,
    payment_type: PaymentType,
    reason: Option<&str>,
    status: Option<PayerStatus>,
    payer_inn: Option<&str>,
    uin: Option<&str>,
    payee_account: Option<&str>,
) -> CheckResult {
    match payment_type {
        PaymentType::Fns => forbidden(number),
        PaymentType::Customs => customs_document_number(number, reason),
        PaymentType::BudgetOther => {
            let uin_only_account =
                payee_account.is_some_and(|a| a.starts_with(UIN_ONLY_ACCOUNT_PREFIX));
            if uin_only_account && status_is(status, "31") && uin.is_some() {
                return forbidden(number);
            }
            if status_is(status, "24") && payer_inn.is_none() && uin.is_none() {
                identity_document(required(number)?)?;
            }
            pass(number)
        }
        PaymentType::Ip | PaymentType::Fl | PaymentType::Le => not_applicable(),
    }
}

fn customs_document_number(number: Option<&str>, reason: Option<&str>) -> CheckResult {
    let Some(reason) = reason else {
        return pass(number);
    };
    if reason == "00" {
        if number != Some("00") {
            return Err(ViolationKind::NotAllowed { allowed: &["00"] });
        }
    } else if CUSTOMS_SHORT_DOCUMENT_REASONS.contains(&reason) {
        if let Some(number) = number {
            max_len(number, CUSTOMS_SHORT_DOCUMENT_MAX)?;
        }
    } else if CUSTOMS_LONG_DOCUMENT_REASONS.contains(&reason) {
        max_len(required(number)?, DOCUMENT_NUMBER_MAX)?;
    }
    pass(number)
}

fn identity_document(number: &str) -> Result<(), ViolationKind> {
    let code_known = IDENTITY_DOCUMENT_RE
        .captures(number)
        .and_then(|caps| caps.get(1))
        .is_some_and(|code| IDENTITY_DOCUMENT_CODES.contains(&code.as_str()));
    if !code_known {
        return Err(ViolationKind::InvalidFormat {
            pattern: "NN;number",
        });
    }
    max_len(number, DOCUMENT_NUMBER_MAX)
}

/// Document date (field 109): never given for tax payments, exactly 10
/// characters for customs payments.
pub fn check_document_date(date: Option<&str>, payment_type: PaymentType) -> CheckResult {
    match payment_type {
        PaymentType::Fns => forbidden(date),
        PaymentType::Customs => {
            if let Some(date) = date {
                exact_len(date, &[10])?;
            }
            pass(date)
        }
        PaymentType::BudgetOther => {
            if let Some(date) = date {
                max_len(date, DOCUMENT_DATE_MAX)?;
            }
            pass(date)
        }
        PaymentType::Ip | PaymentType::Fl | PaymentType::Le => not_applicable(),
    }
}
