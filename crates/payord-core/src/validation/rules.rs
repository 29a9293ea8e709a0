//! Built-in rules binding the [`crate::checks`] functions to record fields.
//!
//! Each rule is a zero-sized struct implementing [`ValidationRule`].  The first
//! entry of [`ValidationRule::fields`] is the field the rule checks and may
//! rewrite; the rest are the fields it depends on.
use crate::checks::{
    check_account_bic, check_cbc, check_document_date, check_document_number,
    check_operation_kind, check_oktmo, check_payee_account, check_payee_inn, check_payee_kpp,
    check_payer_inn, check_payer_inn_for_third_face, check_payer_kpp, check_payer_status,
    check_payer_status_for_third_face, check_purpose, check_purpose_code, check_reason,
    check_tax_period, check_uin,
};
use crate::value::{Field, PaymentRecord};
use crate::violation::Violation;

use super::{RuleId, ValidationRule, settle};

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Payer account against payer bank BIC.
pub struct PayerAccountBic;

impl ValidationRule for PayerAccountBic {
    fn id(&self) -> RuleId {
        RuleId::PayerAccountBic
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayerAccount, Field::PayerBic]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let outcome = check_account_bic(
            record.text(Field::PayerAccount),
            record.text(Field::PayerBic),
        );
        settle(record, Field::PayerAccount, outcome, violations);
    }
}

/// Payee account against payee bank BIC.
pub struct PayeeAccountBic;

impl ValidationRule for PayeeAccountBic {
    fn id(&self) -> RuleId {
        RuleId::PayeeAccountBic
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayeeAccount, Field::PayeeBic]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let outcome = check_account_bic(
            record.text(Field::PayeeAccount),
            record.text(Field::PayeeBic),
        );
        settle(record, Field::PayeeAccount, outcome, violations);
    }
}

/// Fixed tax service account.
pub struct PayeeAccount;

impl ValidationRule for PayeeAccount {
    fn id(&self) -> RuleId {
        RuleId::PayeeAccount
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayeeAccount, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_payee_account(record.text(Field::PayeeAccount), pt);
        settle(record, Field::PayeeAccount, outcome, violations);
    }
}

/// Budget operation kinds.
pub struct OperationKind;

impl ValidationRule for OperationKind {
    fn id(&self) -> RuleId {
        RuleId::OperationKind
    }

    fn fields(&self) -> &[Field] {
        &[Field::OperationKind, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_operation_kind(record.text(Field::OperationKind), pt);
        settle(record, Field::OperationKind, outcome, violations);
    }
}

// ---------------------------------------------------------------------------
// Parties
// ---------------------------------------------------------------------------

/// Payer status per payment type.
pub struct PayerStatus;

impl ValidationRule for PayerStatus {
    fn id(&self) -> RuleId {
        RuleId::PayerStatus
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayerStatus, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_payer_status(record.text(Field::PayerStatus), pt);
        settle(record, Field::PayerStatus, outcome, violations);
    }
}

/// Payer status when paying for a third party.
pub struct PayerStatusThirdFace;

impl ValidationRule for PayerStatusThirdFace {
    fn id(&self) -> RuleId {
        RuleId::PayerStatusThirdFace
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayerStatus, Field::PaymentType, Field::ForThirdFace]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_payer_status_for_third_face(
            record.text(Field::PayerStatus),
            pt,
            record.flag(Field::ForThirdFace),
        );
        settle(record, Field::PayerStatus, outcome, violations);
    }
}

/// Payer INN against the payment type and payer status.
pub struct PayerInn;

impl ValidationRule for PayerInn {
    fn id(&self) -> RuleId {
        RuleId::PayerInn
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayerInn, Field::PaymentType, Field::PayerStatus]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_payer_inn(record.text(Field::PayerInn), pt, record.payer_status());
        settle(record, Field::PayerInn, outcome, violations);
    }
}

/// Payer INN when paying for a third party.
pub struct PayerInnThirdFace;

impl ValidationRule for PayerInnThirdFace {
    fn id(&self) -> RuleId {
        RuleId::PayerInnThirdFace
    }

    fn fields(&self) -> &[Field] {
        &[
            Field::PayerInn,
            Field::PaymentType,
            Field::PayerStatus,
            Field::ForThirdFace,
        ]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_payer_inn_for_third_face(
            record.text(Field::PayerInn),
            pt,
            record.payer_status(),
            record.flag(Field::ForThirdFace),
        );
        settle(record, Field::PayerInn, outcome, violations);
    }
}

/// Payer KPP, required or forbidden by the payer INN length.
pub struct PayerKpp;

impl ValidationRule for PayerKpp {
    fn id(&self) -> RuleId {
        RuleId::PayerKpp
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayerKpp, Field::PayerInn, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_payer_kpp(
            record.text(Field::PayerKpp),
            record.text(Field::PayerInn),
            pt,
        );
        settle(record, Field::PayerKpp, outcome, violations);
    }
}

/// Payee INN per payment type.
pub struct PayeeInn;

impl ValidationRule for PayeeInn {
    fn id(&self) -> RuleId {
        RuleId::PayeeInn
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayeeInn, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_payee_inn(record.text(Field::PayeeInn), pt);
        settle(record, Field::PayeeInn, outcome, violations);
    }
}

/// Payee KPP per payment type.
pub struct PayeeKpp;

impl ValidationRule for PayeeKpp {
    fn id(&self) -> RuleId {
        RuleId::PayeeKpp
    }

    fn fields(&self) -> &[Field] {
        &[Field::PayeeKpp, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_payee_kpp(record.text(Field::PayeeKpp), pt);
        settle(record, Field::PayeeKpp, outcome, violations);
    }
}

// ---------------------------------------------------------------------------
// Purpose
// ---------------------------------------------------------------------------

/// Payment purpose text.
pub struct Purpose;

impl ValidationRule for Purpose {
    fn id(&self) -> RuleId {
        RuleId::Purpose
    }

    fn fields(&self) -> &[Field] {
        &[Field::Purpose, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_purpose(record.text(Field::Purpose), pt);
        settle(record, Field::Purpose, outcome, violations);
    }
}

/// Purpose code for transfers to individuals.
pub struct PurposeCode;

impl ValidationRule for PurposeCode {
    fn id(&self) -> RuleId {
        RuleId::PurposeCode
    }

    fn fields(&self) -> &[Field] {
        &[Field::PurposeCode, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_purpose_code(record.text(Field::PurposeCode), pt);
        settle(record, Field::PurposeCode, outcome, violations);
    }
}

// ---------------------------------------------------------------------------
// Budget fields
// ---------------------------------------------------------------------------

/// UIN against the payer status and payer INN.
pub struct Uin;

impl ValidationRule for Uin {
    fn id(&self) -> RuleId {
        RuleId::Uin
    }

    fn fields(&self) -> &[Field] {
        &[
            Field::Uin,
            Field::PaymentType,
            Field::PayerStatus,
            Field::PayerInn,
        ]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_uin(
            record.text(Field::Uin),
            pt,
            record.payer_status(),
            record.text(Field::PayerInn),
        );
        settle(record, Field::Uin, outcome, violations);
    }
}

/// Budget classification code.
pub struct Cbc;

impl ValidationRule for Cbc {
    fn id(&self) -> RuleId {
        RuleId::Cbc
    }

    fn fields(&self) -> &[Field] {
        &[Field::Cbc, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_cbc(record.text(Field::Cbc), pt);
        settle(record, Field::Cbc, outcome, violations);
    }
}

/// OKTMO territory code.
pub struct Oktmo;

impl ValidationRule for Oktmo {
    fn id(&self) -> RuleId {
        RuleId::Oktmo
    }

    fn fields(&self) -> &[Field] {
        &[Field::Oktmo, Field::PaymentType, Field::PayerStatus]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_oktmo(record.text(Field::Oktmo), pt, record.payer_status());
        settle(record, Field::Oktmo, outcome, violations);
    }
}

/// Payment reason code.
pub struct Reason;

impl ValidationRule for Reason {
    fn id(&self) -> RuleId {
        RuleId::Reason
    }

    fn fields(&self) -> &[Field] {
        &[Field::Reason, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_reason(record.text(Field::Reason), pt);
        settle(record, Field::Reason, outcome, violations);
    }
}

/// Tax period indicator.
pub struct TaxPeriod;

impl ValidationRule for TaxPeriod {
    fn id(&self) -> RuleId {
        RuleId::TaxPeriod
    }

    fn fields(&self) -> &[Field] {
        &[Field::TaxPeriod, Field::PaymentType, Field::PayerStatus]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_tax_period(record.text(Field::TaxPeriod), pt, record.payer_status());
        settle(record, Field::TaxPeriod, outcome, violations);
    }
}

/// Basis document number.
pub struct DocumentNumber;

impl ValidationRule for DocumentNumber {
    fn id(&self) -> RuleId {
        RuleId::DocumentNumber
    }

    fn fields(&self) -> &[Field] {
        &[
            Field::DocumentNumber,
            Field::PaymentType,
            Field::Reason,
            Field::PayerStatus,
            Field::PayerInn,
            Field::Uin,
            Field::PayeeAccount,
        ]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_document_number(
            record.text(Field::DocumentNumber),
            pt,
            record.text(Field::Reason),
            record.payer_status(),
            record.text(Field::PayerInn),
            record.text(Field::Uin),
            record.text(Field::PayeeAccount),
        );
        settle(record, Field::DocumentNumber, outcome, violations);
    }
}

/// Basis document date.
pub struct DocumentDate;

impl ValidationRule for DocumentDate {
    fn id(&self) -> RuleId {
        RuleId::DocumentDate
    }

    fn fields(&self) -> &[Field] {
        &[Field::DocumentDate, Field::PaymentType]
    }

    fn check(&self, record: &mut PaymentRecord, violations: &mut Vec<Violation>) {
        let Some(pt) = record.payment_type() else {
            return;
        };
        let outcome = check_document_date(record.text(Field::DocumentDate), pt);
        settle(record, Field::DocumentDate, outcome, violations);
    }
}
