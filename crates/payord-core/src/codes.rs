//! Fixed code tables from the Ministry of Finance rules for filling in
//! payment orders to the budget system (order N 107н) and the Bank of Russia
//! payment-order format (regulation N 762-П).

/// Single treasury account of the Federal Tax Service for unified tax payments.
pub const FNS_ACCOUNT: &str = "03100643000000018500";

/// Payee account prefix of treasury accounts administered for UIN-only payments.
pub const UIN_ONLY_ACCOUNT_PREFIX: &str = "03212";

/// Allowed payer status codes (field 101).
pub const PAYER_STATUSES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31", "32",
    "33", "34", "35", "36",
];

/// Operation kinds (field 18) permitted for payments to the budget system.
pub const BUDGET_OPERATION_KINDS: &[&str] = &["01", "02", "06"];

/// Payment reason codes (field 106) accepted for customs payments.
pub const CUSTOMS_REASONS: &[&str] = &[
    "ПК", "КЭ", "УВ", "ИЛ", "ПБ", "ТГ", "ТБ", "ТД", "ПВ", "ИН", "00",
];

/// Customs reasons whose document number (field 108) is at most 7 characters.
pub const CUSTOMS_SHORT_DOCUMENT_REASONS: &[&str] = &["ПК", "УВ", "ТГ", "ТБ", "ТД", "ПВ"];

/// Customs reasons whose document number (field 108) is required, at most 15
/// characters.
pub const CUSTOMS_LONG_DOCUMENT_REASONS: &[&str] = &["КЭ", "ИЛ", "ПБ", "ИН"];

/// Identity document type codes used as the `NN;` prefix of field 108 when an
/// individual is identified by document instead of INN or UIN.
pub const IDENTITY_DOCUMENT_CODES: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "22",
    "24", "25", "26", "27", "28",
];

/// Income type codes (field 20) for transfers to individuals.
pub const PURPOSE_CODES: &[&str] = &["1", "2", "3", "4", "5"];

/// Priority assigned to a payment order when the field is left blank.
pub const DEFAULT_PRIORITY: i64 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_document_codes_has_twenty_one_entries() {
        assert_eq!(IDENTITY_DOCUMENT_CODES.len(), 21);
    }

    #[test]
    fn customs_document_subsets_partition_reasons() {
        for reason in CUSTOMS_REASONS.iter().filter(|r| **r != "00") {
            let short = CUSTOMS_SHORT_DOCUMENT_REASONS.contains(reason);
            let long = CUSTOMS_LONG_DOCUMENT_REASONS.contains(reason);
            assert!(short ^ long, "{reason} must be in exactly one subset");
        }
    }

    #[test]
    fn fns_account_is_treasury_account() {
        assert_eq!(FNS_ACCOUNT.len(), 20);
        assert!(FNS_ACCOUNT.starts_with("03"));
    }
}
