/// Per-field normalization independent of payment context.
///
/// [`normalize`] coerces a raw [`Value`] to the field's canonical form:
/// strings are trimmed, integers given for text fields are rendered in
/// decimal, blank optional values collapse to `None` and the payment priority
/// defaults to 5.  Identifier fields delegate to [`crate::identifiers`].
///
/// Normalization is idempotent: feeding a normalized value back in returns it
/// unchanged.
use std::sync::LazyLock;

use regex::Regex;

use crate::codes::{DEFAULT_PRIORITY, PAYER_STATUSES, PURPOSE_CODES};
use crate::enums::PaymentType;
use crate::identifiers::{
    validate_account, validate_bic, validate_inn, validate_kpp, validate_oktmo, validate_uin,
};
use crate::value::{Field, Value};
use crate::violation::ViolationKind;

/// CBC: twenty uppercase alphanumerics.
static CBC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Z]{20}$")
        .unwrap_or_else(|_| Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

const NAME_MAX: usize = 160;
const PURPOSE_MAX: usize = 210;
const REASON_MAX: usize = 2;
const TAX_PERIOD_MAX: usize = 10;
const DOCUMENT_NUMBER_MAX: usize = 15;
const DOCUMENT_DATE_MAX: usize = 10;
const CBC_LENGTHS: &[usize] = &[20];

/// Normalizes the raw value of `field`.
///
/// `raw` is `None` when the field is unset.  The result is `Ok(None)` when the
/// field is legitimately blank.
///
/// # Errors
///
/// Returns the [`ViolationKind`] describing why the value is unusable in
/// isolation.  Context-dependent checks belong to [`crate::checks`].
pub fn normalize(field: Field, raw: Option<&Value>) -> Result<Option<Value>, ViolationKind> {
    match field {
        Field::PaymentType => payment_type(raw).map(Some),
        Field::ForThirdFace => flag(raw).map(Some),
        Field::Priority => priority(raw).map(Some),
        Field::PayerStatus => text(raw)?.map(payer_status).transpose(),
        Field::PayerName | Field::PayeeName => bounded(raw, NAME_MAX),
        Field::Purpose => bounded(raw, PURPOSE_MAX),
        Field::PayerInn | Field::PayeeInn => identifier(raw, validate_inn),
        Field::PayerKpp | Field::PayeeKpp => identifier(raw, validate_kpp),
        Field::PayerAccount | Field::PayeeAccount => identifier(raw, validate_account),
        Field::PayerBic | Field::PayeeBic => identifier(raw, validate_bic),
        Field::Uin => identifier(raw, validate_uin),
        Field::Oktmo => identifier(raw, validate_oktmo),
        Field::OperationKind => text(raw)?.map(operation_kind).transpose(),
        Field::PurposeCode => text(raw)?.map(purpose_code).transpose(),
        Field::Cbc => sentinel_text(raw)?.map(cbc).transpose(),
        Field::Reason => match sentinel_text(raw)? {
            Some(reason) => max_chars(reason.to_uppercase(), REASON_MAX).map(Some),
            None => Ok(None),
        },
        Field::TaxPeriod => sentinel_bounded(raw, TAX_PERIOD_MAX),
        Field::DocumentNumber => sentinel_bounded(raw, DOCUMENT_NUMBER_MAX),
        Field::DocumentDate => sentinel_bounded(raw, DOCUMENT_DATE_MAX),
    }
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

/// Coerces a raw value to trimmed text; blank text is `None`.
fn text(raw: Option<&Value>) -> Result<Option<String>, ViolationKind> {
    match raw {
        None => Ok(None),
        Some(Value::Text(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_owned()))
        }
        Some(Value::Int(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(_)) => Err(ViolationKind::WrongType { expected: "string" }),
    }
}

/// Like [`text`], but `"0"` also reads as blank.
fn sentinel_text(raw: Option<&Value>) -> Result<Option<String>, ViolationKind> {
    Ok(text(raw)?.filter(|s| s != "0"))
}

fn max_chars(value: String, max: usize) -> Result<Value, ViolationKind> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ViolationKind::TooLong { max, actual });
    }
    Ok(Value::Text(value))
}

fn bounded(raw: Option<&Value>, max: usize) -> Result<Option<Value>, ViolationKind> {
    text(raw)?.map(|s| max_chars(s, max)).transpose()
}

fn sentinel_bounded(raw: Option<&Value>, max: usize) -> Result<Option<Value>, ViolationKind> {
    sentinel_text(raw)?.map(|s| max_chars(s, max)).transpose()
}

fn identifier(
    raw: Option<&Value>,
    validate: fn(&str) -> Result<Option<String>, ViolationKind>,
) -> Result<Option<Value>, ViolationKind> {
    match text(raw)? {
        Some(s) => Ok(validate(&s)?.map(Value::Text)),
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Field-specific forms
// ---------------------------------------------------------------------------

fn payment_type(raw: Option<&Value>) -> Result<Value, ViolationKind> {
    let code = text(raw)?.ok_or(ViolationKind::Required)?;
    code.parse::<PaymentType>()
        .map(Value::from)
        .map_err(|_| ViolationKind::NotAllowed {
            allowed: PaymentType::CODES,
        })
}

fn flag(raw: Option<&Value>) -> Result<Value, ViolationKind> {
    match raw {
        None => Ok(Value::Bool(false)),
        Some(Value::Bool(b)) => Ok(Value::Bool(*b)),
        Some(Value::Int(_) | Value::Text(_)) => {
            Err(ViolationKind::WrongType { expected: "boolean" })
        }
    }
}

fn priority(raw: Option<&Value>) -> Result<Value, ViolationKind> {
    let n = match raw {
        None => DEFAULT_PRIORITY,
        Some(Value::Int(n)) => *n,
        Some(Value::Text(s)) if s.trim().is_empty() => DEFAULT_PRIORITY,
        Some(Value::Text(s)) => s.trim().parse().map_err(|_| ViolationKind::NotDigits)?,
        Some(Value::Bool(_)) => return Err(ViolationKind::WrongType { expected: "integer" }),
    };
    if !(1..=5).contains(&n) {
        return Err(ViolationKind::OutOfRange { min: 1, max: 5 });
    }
    Ok(Value::Int(n))
}

fn payer_status(code: String) -> Result<Value, ViolationKind> {
    if PAYER_STATUSES.contains(&code.as_str()) {
        Ok(Value::Text(code))
    } else {
        Err(ViolationKind::NotAllowed {
            allowed: PAYER_STATUSES,
        })
    }
}

fn operation_kind(code: String) -> Result<Value, ViolationKind> {
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(Value::Text(code))
    } else {
        Err(ViolationKind::InvalidFormat {
            pattern: "two digits",
        })
    }
}

fn purpose_code(code: String) -> Result<Value, ViolationKind> {
    if PURPOSE_CODES.contains(&code.as_str()) {
        Ok(Value::Text(code))
    } else {
        Err(ViolationKind::NotAllowed {
            allowed: PURPOSE_CODES,
        })
    }
}

fn cbc(code: String) -> Result<Value, ViolationKind> {
    let actual = code.chars().count();
    if !CBC_LENGTHS.contains(&actual) {
        return Err(ViolationKind::InvalidLength {
            allowed: CBC_LENGTHS,
            actual,
        });
    }
    if !CBC_RE.is_match(&code) {
        return Err(ViolationKind::InvalidFormat {
            pattern: "[0-9A-Z]{20}",
        });
    }
    if code.bytes().all(|b| b == b'0') {
        return Err(ViolationKind::AllZeros);
    }
    Ok(Value::Text(code))
}
