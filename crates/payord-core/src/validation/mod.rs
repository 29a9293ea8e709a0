/// Rule registry and validation runner for payment records.
///
/// This module defines [`RuleId`] and the [`ValidationRule`] trait, the
/// ordered registry of built-in rules ([`builtin_rules`]), and re-exports the
/// [`SchemaBuilder`] / [`Schema`] pair that wires rules to a record shape and
/// runs them.
///
/// A rule is wired into a schema only when every field it consumes is
/// declared by that schema.  Wiring happens once, when the schema is built;
/// validation then runs every wired rule and reports every violation.
pub mod plan;
pub mod rules;

use std::fmt;

use crate::checks::CheckResult;
use crate::value::{Field, PaymentRecord, Value};
use crate::violation::Violation;

pub use plan::{ExtensionRule, RulePlan, Schema, SchemaBuilder};


/// Machine-readable identifier of a validation rule.
///
/// [`RuleId::code`] returns the stable kebab-case form used in reports and
/// exclusion lists (e.g. `"payer-inn"`).  Caller-defined rules use
/// [`RuleId::Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RuleId {
    /// Payer account control key agrees with the payer bank BIC.
    PayerAccountBic,
    /// Payee account control key agrees with the payee bank BIC.
    PayeeAccountBic,
    /// Tax payments go to the fixed tax service account.
    PayeeAccount,
    /// Budget payments use operation kind `01`, `02` or `06`.
    OperationKind,
    /// Budget payments state a payer status.
    PayerStatus,
    /// Customs status `06` is not used for third-person payments.
    PayerStatusThirdFace,
    /// Payer INN requirements by payment type and status.
    PayerInn,
    /// Third-person customs payments under status `06` carry an organisation INN.
    PayerInnThirdFace,
    /// Payer KPP follows the payer INN on budget payments.
    PayerKpp,
    /// Payee INN presence and length by payment type.
    PayeeInn,
    /// Payee KPP presence by payment type.
    PayeeKpp,
    /// UIN requirements by payment type and status.
    Uin,
    /// Transfers to individual entrepreneurs mention VAT.
    Purpose,
    /// Income-type code only applies to transfers to individuals.
    PurposeCode,
    /// Budget classification code presence.
    Cbc,
    /// OKTMO presence on tax payments.
    Oktmo,
    /// Payment reason by payment type.
    Reason,
    /// Tax period presence and length.
    TaxPeriod,
    /// Document number presence and format.
    DocumentNumber,
    /// Document date presence and length.
    DocumentDate,
    /// A caller-defined rule.
    Extension(String),
}

impl RuleId {
    /// Returns the stable kebab-case rule code.
    pub fn code(&self) -> &str {
        match self {
            Self::PayerAccountBic => "payer-account-bic",
            Self::PayeeAccountBic => "payee-account-bic",
            Self::PayeeAccount => "payee-account",
            Self::OperationKind => "operation-kind",
            Self::PayerStatus => "payer-status",
            Self::PayerStatusThirdFace => "payer-status-third-face",
            Self::PayerInn => "payer-inn",
            Self::PayerInnThirdFace => "payer-inn-third-face",
            Self::PayerKpp => "payer-kpp",
            Self::PayeeInn => "payee-inn",
            Self::PayeeKpp => "payee-kpp",
            Self::Uin => "uin",
            Self::Purpose => "purpose",
            Self::PurposeCode => "purpose-code",
            Self::Cbc => "cbc",
            Self::Oktmo => "oktmo",
            Self::Reason => "reason",
            Self::TaxPeriod => "tax-period",
            Self::DocumentNumber => "document-number",
            Self::DocumentDate => "document-date",
            Self::Extension(code) => code.as_str(),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single cross-field rule.
///
/// Rules hold no state between invocations.  [`check`][ValidationRule::check]
/// may rewrite the value of its target field (for example dropping a field
/// that does not apply to the payment type) and pushes one [`Violation`] per
/// problem found.  The runner stamps each pushed violation with
/// [`id`][ValidationRule::id].
///
/// # Object safety
///
/// The trait is object-safe; plans store rules as `Box<dyn ValidationRule>`.
/// The `Send + Sync` bound lets one [`Schema`] serve many threads.
pub trait ValidationRule: Send + Sync {
    /// Returns the identifier of this rule.
    fn id(&self) -> RuleId;

    /// Fields this rule reads or writes.  The rule is wired only into schemas
    /// that declare all of them.
    fn fields(&self) -> &[Field];

    /// Checks `record`, appending violations to `violations`.
    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>);
}

/// Returns the built-in rules in execution order.
pub fn builtin_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(rules::PayerAccountBic),
        Box::new(rules::PayeeAccountBic),
        Box::new(rules::PayeeAccount),
        Box::new(rules::OperationKind),
        Box::new(rules::PayerStatus),
        Box::new(rules::PayerStatusThirdFace),
        Box::new(rules::PayerInn),
        Box::new(rules::PayerInnThirdFace),
        Box::new(rules::PayerKpp),
        Box::new(rules::PayeeInn),
        Box::new(rules::PayeeKpp),
        Box::new(rules::Uin),
        Box::new(rules::Purpose),
        Box::new(rules::PurposeCode),
        Box::new(rules::Cbc),
        Box::new(rules::Oktmo),
        Box::new(rules::Reason),
        Box::new(rules::TaxPeriod),
        Box::new(rules::DocumentNumber),
        Box::new(rules::DocumentDate),
    ]
}

/// Applies the outcome of a check to `field`: the returned value replaces the
/// current one, a violation is recorded with the current value.
pub(crate) fn settle(
    record: &mut PaymentRecord,
    field: Field,
    outcome: CheckResult,
    violations: &mut Vec<Violation>,
) {
    match outcome {
        Ok(value) => record.set(field, value.map(Value::Text)),
        Err(kind) => violations.push(Violation::new(field, kind).with_value(record.get(field))),
    }
}
