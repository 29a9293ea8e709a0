/// Payment classification enums: [`PaymentType`] and [`PayerStatus`].
///
/// `PaymentType` serializes to/from `snake_case` JSON strings. `PayerStatus`
/// is a two-character code restricted to [`crate::codes::PAYER_STATUSES`].
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::codes::PAYER_STATUSES;

/// A code string that is not part of a closed code table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {what} code {got:?}")]
pub struct UnknownCode {
    /// Which code table rejected the input.
    pub what: &'static str,
    /// The rejected input.
    pub got: String,
}

/// Classification of a payment order that selects its legality rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Tax payment to the Federal Tax Service.
    Fns,
    /// Payment administered by the customs authority.
    Customs,
    /// Any other payment to the budget system.
    BudgetOther,
    /// Transfer to an individual entrepreneur.
    Ip,
    /// Transfer to an individual.
    Fl,
    /// Transfer to a legal entity.
    Le,
}

impl PaymentType {
    /// Every payment type, budget types first.
    pub const ALL: [PaymentType; 6] = [
        Self::Fns,
        Self::Customs,
        Self::BudgetOther,
        Self::Ip,
        Self::Fl,
        Self::Le,
    ];

    /// The `snake_case` codes of [`PaymentType::ALL`], in the same order.
    pub const CODES: &'static [&'static str] =
        &["fns", "customs", "budget_other", "ip", "fl", "le"];

    /// Returns `true` for payments to the budget system (FNS, customs, other).
    pub fn is_budget(self) -> bool {
        match self {
            Self::Fns | Self::Customs | Self::BudgetOther => true,
            Self::Ip | Self::Fl | Self::Le => false,
        }
    }

    /// Returns the `snake_case` code used in serialized records.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fns => "fns",
            Self::Customs => "customs",
            Self::BudgetOther => "budget_other",
            Self::Ip => "ip",
            Self::Fl => "fl",
            Self::Le => "le",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PaymentType {
    type Err = UnknownCode;

    /// Parses a payment type code case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|pt| pt.code() == lowered)
            .ok_or_else(|| UnknownCode {
                what: "payment type",
                got: s.to_owned(),
            })
    }
}

/// Payer status code (field 101) of a budget payment.
///
/// Only codes listed in [`PAYER_STATUSES`] can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PayerStatus(&'static str);

impl PayerStatus {
    /// Looks `code` up in the allowed status table.
    pub fn parse(code: &str) -> Option<Self> {
        PAYER_STATUSES
            .iter()
            .copied()
            .find(|allowed| *allowed == code)
            .map(Self)
    }

    /// Returns the two-character code.
    pub fn code(self) -> &'static str {
        self.0
    }

    /// Returns `true` if this status equals `code`.
    pub fn is(self, code: &str) -> bool {
        self.0 == code
    }

    /// Returns `true` if this status is one of `codes`.
    pub fn is_any(self, codes: &[&str]) -> bool {
        codes.contains(&self.0)
    }
}

impl fmt::Display for PayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl FromStr for PayerStatus {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| UnknownCode {
            what: "payer status",
            got: s.to_owned(),
        })
    }
}

impl Serialize for PayerStatus {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn budget_predicate() {
        assert!(PaymentType::Fns.is_budget());
        assert!(PaymentType::Customs.is_budget());
        assert!(PaymentType::BudgetOther.is_budget());
        assert!(!PaymentType::Ip.is_budget());
        assert!(!PaymentType::Fl.is_budget());
        assert!(!PaymentType::Le.is_budget());
    }

    #[test]
    fn payment_type_codes_match_all() {
        let codes: Vec<&str> = PaymentType::ALL.iter().map(|pt| pt.code()).collect();
        assert_eq!(codes, PaymentType::CODES);
    }

    #[test]
    fn payment_type_parses_case_insensitively() {
        assert_eq!(
            "FNS".parse::<PaymentType>().expect("parse"),
            PaymentType::Fns
        );
        assert_eq!(
            " budget_other ".parse::<PaymentType>().expect("parse"),
            PaymentType::BudgetOther
        );
    }

    #[test]
    fn payment_type_rejects_unknown() {
        let err = "bank".parse::<PaymentType>().expect_err("unknown");
        assert_eq!(err.what, "payment type");
        assert!(err.to_string().contains("bank"));
    }

    #[test]
    fn payment_type_serde_is_snake_case() {
        let json = serde_json::to_string(&PaymentType::BudgetOther).expect("serialize");
        assert_eq!(json, "\"budget_other\"");
        let back: PaymentType = serde_json::from_str("\"customs\"").expect("deserialize");
        assert_eq!(back, PaymentType::Customs);
    }

    #[test]
    fn payer_status_accepts_known_codes() {
        let status = PayerStatus::parse("13").expect("known");
        assert_eq!(status.code(), "13");
        assert!(status.is("13"));
        assert!(status.is_any(&["01", "13"]));
        assert!(!status.is_any(&["02"]));
    }

    #[test]
    fn payer_status_rejects_unknown_codes() {
        assert!(PayerStatus::parse("00").is_none());
        assert!(PayerStatus::parse("1").is_none());
        assert!(PayerStatus::parse("99").is_none());
        assert!("XX".parse::<PayerStatus>().is_err());
    }
}
