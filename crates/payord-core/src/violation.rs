/// Violation types produced by field normalization and cross-field rules.
///
/// [`ViolationKind`] is the machine kind of a single failure, carrying the
/// thresholds a renderer needs.  [`Violation`] binds a kind to the field, the
/// offending value and the rule that raised it.  [`ValidationError`] is the
/// aggregate returned by [`crate::validation::Schema::validate`]; it always
/// holds every violation found in one pass.
///
/// [`SchemaError`] is the separate, static failure raised while a
/// [`crate::validation::Schema`] is being built.
use std::fmt;

use serde::{Serialize, Serializer};

use crate::validation::RuleId;
use crate::value::{Field, Value};

/// Coarse classification of a [`ViolationKind`], compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationFamily {
    /// The value has the wrong host type.
    Type,
    /// The value has the wrong length.
    Length,
    /// A value is required but empty, or consists only of zeros.
    EmptyNotAllowed,
    /// The value is malformed or not allowed in this context.
    Content,
    /// Digits are well-formed but the control digit does not match.
    Checksum,
    /// The account does not agree with its BIC or a fixed account.
    AccountMismatch,
}

impl fmt::Display for ViolationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Type => "type",
            Self::Length => "length",
            Self::EmptyNotAllowed => "empty_not_allowed",
            Self::Content => "content",
            Self::Checksum => "checksum",
            Self::AccountMismatch => "account_mismatch",
        };
        f.write_str(name)
    }
}

/// Stable, machine-distinguishable kind of a single violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// The raw value has the wrong type, e.g. a boolean for a text field.
    #[error("expected {expected}")]
    WrongType {
        /// Human-readable name of the expected type.
        expected: &'static str,
    },
    /// The value length is not one of the allowed lengths.
    #[error("length {actual} is not one of {allowed:?}")]
    InvalidLength {
        /// Allowed lengths in characters.
        allowed: &'static [usize],
        /// Actual length in characters.
        actual: usize,
    },
    /// The value exceeds its maximum length.
    #[error("length {actual} exceeds the maximum of {max}")]
    TooLong {
        /// Maximum length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },
    /// The value does not match its expected pattern.
    #[error("does not match {pattern}")]
    InvalidFormat {
        /// Description of the expected pattern.
        pattern: &'static str,
    },
    /// The value must consist of digits only.
    #[error("must contain digits only")]
    NotDigits,
    /// The value must not start with `00`.
    #[error("must not start with \"00\"")]
    LeadingZeros,
    /// The value must not consist of zeros only.
    #[error("must not consist of zeros only")]
    AllZeros,
    /// The numeric value lies outside its range.
    #[error("must be between {min} and {max}")]
    OutOfRange {
        /// Lower bound, inclusive.
        min: u64,
        /// Upper bound, inclusive.
        max: u64,
    },
    /// The value is not a member of its code table.
    #[error("must be one of {allowed:?}")]
    NotAllowed {
        /// The permitted codes.
        allowed: &'static [&'static str],
    },
    /// The control digit does not match.
    #[error("control digit mismatch")]
    Checksum,
    /// The account control key does not match the bank BIC.
    #[error("account does not match BIC {bic}")]
    AccountBicMismatch {
        /// BIC the account was checked against.
        bic: String,
    },
    /// The account must equal a fixed treasury account.
    #[error("account must be {expected}")]
    FixedAccount {
        /// The required account number.
        expected: &'static str,
    },
    /// The value is required in this context.
    #[error("value is required")]
    Required,
    /// The value must be empty in this context.
    #[error("value must be empty")]
    Forbidden,
    /// The combination with other fields is not permitted.
    #[error("combination is not permitted")]
    NotPermitted,
    /// The purpose text lacks a whole-word `НДС` mention.
    #[error("purpose must mention НДС")]
    MissingVat,
    /// The field is not declared by the schema.
    #[error("field is not declared by the schema")]
    Undeclared,
}

impl ViolationKind {
    /// Returns the family this kind belongs to.
    pub fn family(&self) -> ViolationFamily {
        match self {
            Self::WrongType { .. } => ViolationFamily::Type,
            Self::InvalidLength { .. } | Self::TooLong { .. } => ViolationFamily::Length,
            Self::Required | Self::AllZeros => ViolationFamily::EmptyNotAllowed,
            Self::InvalidFormat { .. }
            | Self::NotDigits
            | Self::LeadingZeros
            | Self::OutOfRange { .. }
            | Self::NotAllowed { .. }
            | Self::Forbidden
            | Self::NotPermitted
            | Self::MissingVat
            | Self::Undeclared => ViolationFamily::Content,
            Self::Checksum => ViolationFamily::Checksum,
            Self::AccountBicMismatch { .. } | Self::FixedAccount { .. } => {
                ViolationFamily::AccountMismatch
            }
        }
    }

    /// Returns the `snake_case` kind name used as the serialized tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::WrongType { .. } => "wrong_type",
            Self::InvalidLength { .. } => "invalid_length",
            Self::TooLong { .. } => "too_long",
            Self::InvalidFormat { .. } => "invalid_format",
            Self::NotDigits => "not_digits",
            Self::LeadingZeros => "leading_zeros",
            Self::AllZeros => "all_zeros",
            Self::OutOfRange { .. } => "out_of_range",
            Self::NotAllowed { .. } => "not_allowed",
            Self::Checksum => "checksum",
            Self::AccountBicMismatch { .. } => "account_bic_mismatch",
            Self::FixedAccount { .. } => "fixed_account",
            Self::Required => "required",
            Self::Forbidden => "forbidden",
            Self::NotPermitted => "not_permitted",
            Self::MissingVat => "missing_vat",
            Self::Undeclared => "undeclared",
        }
    }
}

/// One violation raised against one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The offending field.
    pub field: Field,
    /// What went wrong.
    #[serde(flatten)]
    pub kind: ViolationKind,
    /// The offending value, rendered as text, if one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// The rule that raised this violation; set by the runner.
    #[serde(serialize_with = "serialize_rule", skip_serializing_if = "Option::is_none")]
    pub rule: Option<RuleId>,
}

fn serialize_rule<S: Serializer>(rule: &Option<RuleId>, s: S) -> Result<S::Ok, S::Error> {
    match rule {
        Some(rule) => s.serialize_str(rule.code()),
        None => s.serialize_none(),
    }
}

impl Violation {
    /// Creates a violation with no recorded value or rule.
    pub fn new(field: Field, kind: ViolationKind) -> Self {
        Self {
            field,
            kind,
            value: None,
            rule: None,
        }
    }

    /// Attaches the offending value.
    #[must_use]
    pub fn with_value(mut self, value: Option<&Value>) -> Self {
        self.value = value.map(ToString::to_string);
        self
    }

    /// Attaches the producing rule.
    #[must_use]
    pub fn with_rule(mut self, rule: RuleId) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Shorthand for `self.kind.family()`.
    pub fn family(&self) -> ViolationFamily {
        self.kind.family()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "{rule} ")?;
        }
        write!(f, "{}: {}", self.field, self.kind)?;
        if let Some(value) = &self.value {
            write!(f, " (got {value:?})")?;
        }
        Ok(())
    }
}

/// Aggregate failure of one validation call.
///
/// Never empty; the violations are ordered as the rules that raised them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("payment order has {} violation(s)", .violations.len())]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Wraps a non-empty violation list; returns `None` for an empty one.
    pub fn from_violations(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// All violations in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the error, returning the violation list.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations raised against `field`.
    pub fn by_field(&self, field: Field) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Violations raised by `rule`.
    pub fn by_rule<'a>(&'a self, rule: &'a RuleId) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.rule.as_ref() == Some(rule))
    }

    /// Violations whose kind belongs to `family`.
    pub fn by_family(&self, family: ViolationFamily) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.family() == family)
    }
}

/// A schema definition that cannot be built.
///
/// These are programming errors in the schema declaration, raised by
/// [`crate::validation::SchemaBuilder::build`] and never at validation time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A field was declared twice.
    #[error("field {0} is declared more than once")]
    DuplicateField(Field),
    /// A rule consumes a field the schema does not declare.
    #[error("rule {rule} uses undeclared field {field}")]
    UndeclaredField {
        /// Code of the offending rule.
        rule: String,
        /// The missing field.
        field: Field,
    },
    /// Two rules share the same code.
    #[error("rule {0} is registered more than once")]
    DuplicateRule(String),
    /// An exclusion names a rule that does not exist.
    #[error("excluded rule {0} is not a built-in rule")]
    UnknownExclusion(String),
}

/// Turns a violation into user-facing text.
///
/// The core only ships [`PlainRenderer`]; localized templating lives with the
/// caller.
pub trait ViolationRenderer {
    /// Renders one violation.
    fn render(&self, violation: &Violation) -> String;

    /// Renders every violation of an aggregate, one line each.
    fn render_all(&self, error: &ValidationError) -> Vec<String> {
        error.violations().iter().map(|v| self.render(v)).collect()
    }
}

/// Renders violations as `field: message`, without rule or value context.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl ViolationRenderer for PlainRenderer {
    fn render(&self, violation: &Violation) -> String {
        format!("{}: {}", violation.field, violation.kind)
    }
}
