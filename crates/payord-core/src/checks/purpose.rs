/// Purpose text and income-type code rows.
use std::sync::LazyLock;

use regex::Regex;

use crate::enums::PaymentType;
use crate::violation::ViolationKind;

use super::{CheckResult, not_applicable, pass, required};

/// `НДС` (VAT) as a whole word, any case.
static VAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bндс\b")
        .unwrap_or_else(|_| Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

/// Transfers to individual entrepreneurs must state VAT in the purpose text.
///
/// # Examples
///
/// ```
/// use payord_core::checks::check_purpose;
/// use payord_core::enums::PaymentType;
///
/// assert!(check_purpose(Some("Оплата по счету 12, НДС не облагается"), PaymentType::Ip).is_ok());
/// assert!(check_purpose(Some("Оплата по счету 12"), PaymentType::Ip).is_err());
/// assert!(check_purpose(Some("Оплата по счету 12"), PaymentType::Le).is_ok());
/// ```
pub fn check_purpose(purpose: Option<&str>, payment_type: PaymentType) -> CheckResult {
    match payment_type {
        PaymentType::Ip => {
            if !VAT_RE.is_match(required(purpose)?) {
                return Err(ViolationKind::MissingVat);
            }
            pass(purpose)
        }
        PaymentType::Fns
        | PaymentType::Customs
        | PaymentType::BudgetOther
        | PaymentType::Fl
        | PaymentType::Le => pass(purpose),
    }
}

/// The income-type code only applies to transfers to individuals.
pub fn check_purpose_code(code: Option<&str>, payment_type: PaymentType) -> CheckResult {
    match payment_type {
        PaymentType::Fl => pass(code),
        PaymentType::Fns
        | PaymentType::Customs
        | PaymentType::BudgetOther
        | PaymentType::Ip
        | PaymentType::Le => not_applicable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vat_matches_whole_word_in_any_case() {
        for text in ["НДС 20%", "в т.ч. ндс 1000 руб.", "Без НДС", "(Ндс)"] {
            assert!(check_purpose(Some(text), PaymentType::Ip).is_ok(), "{text}");
        }
    }

    #[test]
    fn vat_inside_a_word_does_not_count() {
        assert_eq!(
            check_purpose(Some("ИНДСТРОЙ оплата"), PaymentType::Ip),
            Err(ViolationKind::MissingVat)
        );
    }

    #[test]
    fn ip_purpose_required() {
        assert_eq!(
            check_purpose(None, PaymentType::Ip),
            Err(ViolationKind::Required)
        );
        assert_eq!(check_purpose(None, PaymentType::Fl), Ok(None));
    }

    #[test]
    fn purpose_code_only_for_individuals() {
        assert_eq!(
            check_purpose_code(Some("1"), PaymentType::Fl),
            Ok(Some("1".to_owned()))
        );
        for pt in [PaymentType::Ip, PaymentType::Le, PaymentType::Fns] {
            assert_eq!(check_purpose_code(Some("1"), pt), Ok(None));
        }
    }
}
