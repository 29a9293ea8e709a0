/// Payment record model: [`Field`] identifiers, raw [`Value`]s and the
/// [`PaymentRecord`] map that carries them through validation.
///
/// A record only contains the fields its caller supplied.  A field mapped to
/// `None` is declared but unset (JSON `null`); a field missing from the map is
/// absent altogether.  The same type carries both the raw input and the
/// normalized output of [`crate::validation::Schema::validate`].
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::enums::{PayerStatus, PaymentType, UnknownCode};

/// Identifier of a payment-order attribute.
///
/// The declaration order is the canonical order of normalized records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Payment classification discriminator.
    PaymentType,
    /// The payer pays on behalf of a third person.
    ForThirdFace,
    /// Payer status (field 101).
    PayerStatus,
    /// Payer name (field 8).
    PayerName,
    /// Payer INN (field 60).
    PayerInn,
    /// Payer KPP (field 102).
    PayerKpp,
    /// Payer account number (field 9).
    PayerAccount,
    /// Payer bank BIC (field 11).
    PayerBic,
    /// Payee name (field 16).
    PayeeName,
    /// Payee INN (field 61).
    PayeeInn,
    /// Payee KPP (field 103).
    PayeeKpp,
    /// Payee account number (field 17).
    PayeeAccount,
    /// Payee bank BIC (field 14).
    PayeeBic,
    /// Operation kind (field 18).
    OperationKind,
    /// Payment priority (field 21).
    Priority,
    /// Payment purpose text (field 24).
    Purpose,
    /// Income type code (field 20).
    PurposeCode,
    /// Unique accrual identifier (field 22).
    Uin,
    /// Budget classification code (field 104).
    Cbc,
    /// Municipal territory code (field 105).
    Oktmo,
    /// Payment reason (field 106).
    Reason,
    /// Tax period or customs authority code (field 107).
    TaxPeriod,
    /// Document number (field 108).
    DocumentNumber,
    /// Document date (field 109).
    DocumentDate,
}

impl Field {
    /// Every field in canonical order.
    pub const ALL: [Field; 24] = [
        Self::PaymentType,
        Self::ForThirdFace,
        Self::PayerStatus,
        Self::PayerName,
        Self::PayerInn,
        Self::PayerKpp,
        Self::PayerAccount,
        Self::PayerBic,
        Self::PayeeName,
        Self::PayeeInn,
        Self::PayeeKpp,
        Self::PayeeAccount,
        Self::PayeeBic,
        Self::OperationKind,
        Self::Priority,
        Self::Purpose,
        Self::PurposeCode,
        Self::Uin,
        Self::Cbc,
        Self::Oktmo,
        Self::Reason,
        Self::TaxPeriod,
        Self::DocumentNumber,
        Self::DocumentDate,
    ];

    /// Returns the `snake_case` name used in serialized records.
    pub fn name(self) -> &'static str {
        match self {
            Self::PaymentType => "payment_type",
            Self::ForThirdFace => "for_third_face",
            Self::PayerStatus => "payer_status",
            Self::PayerName => "payer_name",
            Self::PayerInn => "payer_inn",
            Self::PayerKpp => "payer_kpp",
            Self::PayerAccount => "payer_account",
            Self::PayerBic => "payer_bic",
            Self::PayeeName => "payee_name",
            Self::PayeeInn => "payee_inn",
            Self::PayeeKpp => "payee_kpp",
            Self::PayeeAccount => "payee_account",
            Self::PayeeBic => "payee_bic",
            Self::OperationKind => "operation_kind",
            Self::Priority => "priority",
            Self::Purpose => "purpose",
            Self::PurposeCode => "purpose_code",
            Self::Uin => "uin",
            Self::Cbc => "cbc",
            Self::Oktmo => "oktmo",
            Self::Reason => "reason",
            Self::TaxPeriod => "tax_period",
            Self::DocumentNumber => "document_number",
            Self::DocumentDate => "document_date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownCode {
                what: "field",
                got: s.to_owned(),
            })
    }
}

/// A raw or normalized field value.
///
/// Deserializes untagged from JSON booleans, integers and strings; floats,
/// arrays and objects are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A string.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<PaymentType> for Value {
    fn from(pt: PaymentType) -> Self {
        Self::Text(pt.code().to_owned())
    }
}

/// Field name → value map of one payment order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentRecord {
    values: BTreeMap<Field, Option<Value>>,
}

impl PaymentRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a present value.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.values.insert(field, Some(value.into()));
        self
    }

    /// Builder-style setter for a declared-but-unset (`null`) field.
    #[must_use]
    pub fn with_null(mut self, field: Field) -> Self {
        self.values.insert(field, None);
        self
    }

    /// Inserts or replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: Option<Value>) {
        self.values.insert(field, value);
    }

    /// Removes `field` from the record, returning its previous value.
    pub fn remove(&mut self, field: Field) -> Option<Option<Value>> {
        self.values.remove(&field)
    }

    /// Returns the value of `field`; `None` when absent or `null`.
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.values.get(&field).and_then(Option::as_ref)
    }

    /// Returns `true` if `field` is present, even with a `null` value.
    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    /// Iterates over the present fields in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.keys().copied()
    }

    /// Iterates over `(field, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&Value>)> {
        self.values.iter().map(|(field, value)| (*field, value.as_ref()))
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the text of `field` when it holds a non-empty string.
    pub fn text(&self, field: Field) -> Option<&str> {
        match self.get(field) {
            Some(Value::Text(s)) if !s.is_empty() => Some(s.as_str()),
            Some(Value::Text(_) | Value::Bool(_) | Value::Int(_)) | None => None,
        }
    }

    /// Returns the boolean value of `field`; anything else reads as `false`.
    pub fn flag(&self, field: Field) -> bool {
        matches!(self.get(field), Some(Value::Bool(true)))
    }

    /// Parses the `payment_type` field.
    pub fn payment_type(&self) -> Option<PaymentType> {
        self.text(Field::PaymentType)
            .and_then(|code| code.parse().ok())
    }

    /// Parses the `payer_status` field.
    pub fn payer_status(&self) -> Option<PayerStatus> {
        self.text(Field::PayerStatus).and_then(PayerStatus::parse)
    }
}

impl FromIterator<(Field, Option<Value>)> for PaymentRecord {
    fn from_iter<I: IntoIterator<Item = (Field, Option<Value>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().expect("parse"), field);
        }
    }

    #[test]
    fn field_serde_name_matches_name() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).expect("serialize");
            assert_eq!(json, format!("\"{}\"", field.name()));
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        assert!("payer_iban".parse::<Field>().is_err());
    }

    #[test]
    fn null_and_absent_are_distinguished() {
        let record = PaymentRecord::new().with_null(Field::Uin);
        assert!(record.contains(Field::Uin));
        assert!(record.get(Field::Uin).is_none());
        assert!(!record.contains(Field::Cbc));
    }

    #[test]
    fn text_ignores_empty_and_non_text_values() {
        let record = PaymentRecord::new()
            .with(Field::Purpose, "")
            .with(Field::Priority, 5)
            .with(Field::PayerInn, "3664069397");
        assert_eq!(record.text(Field::Purpose), None);
        assert_eq!(record.text(Field::Priority), None);
        assert_eq!(record.text(Field::PayerInn), Some("3664069397"));
    }

    #[test]
    fn typed_accessors() {
        let record = PaymentRecord::new()
            .with(Field::PaymentType, PaymentType::Customs)
            .with(Field::PayerStatus, "06")
            .with(Field::ForThirdFace, true);
        assert_eq!(record.payment_type(), Some(PaymentType::Customs));
        assert_eq!(record.payer_status().map(PayerStatus::code), Some("06"));
        assert!(record.flag(Field::ForThirdFace));
    }

    #[test]
    fn record_deserializes_from_json_object() {
        let record: PaymentRecord = serde_json::from_str(
            r#"{"payment_type": "fns", "priority": 5, "for_third_face": false, "uin": null}"#,
        )
        .expect("deserialize");
        assert_eq!(record.len(), 4);
        assert_eq!(record.get(Field::Priority), Some(&Value::Int(5)));
        assert_eq!(record.get(Field::ForThirdFace), Some(&Value::Bool(false)));
        assert!(record.contains(Field::Uin));
    }

    #[test]
    fn record_rejects_unknown_keys_and_floats() {
        assert!(serde_json::from_str::<PaymentRecord>(r#"{"iban": "x"}"#).is_err());
        assert!(serde_json::from_str::<PaymentRecord>(r#"{"priority": 1.5}"#).is_err());
    }

    #[test]
    fn record_serializes_in_canonical_order() {
        let record = PaymentRecord::new()
            .with(Field::Purpose, "Оплата")
            .with(Field::PaymentType, PaymentType::Le);
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"payment_type":"le","purpose":"Оплата"}"#);
    }
}
