//! Standard payment-order shapes, built once per process.

use std::sync::LazyLock;

use crate::enums::PaymentType;
use crate::validation::{RuleId, Schema, SchemaBuilder};
use crate::value::Field;

/// Fields 101–110 of the payment order, filled only for budget payments.
const BUDGET_ONLY_FIELDS: [Field; 7] = [
    Field::PayerStatus,
    Field::Cbc,
    Field::Oktmo,
    Field::Reason,
    Field::TaxPeriod,
    Field::DocumentNumber,
    Field::DocumentDate,
];

static BUDGET_PAYMENT: LazyLock<Schema> = LazyLock::new(|| {
    SchemaBuilder::new("budget_payment")
        .fields(Field::ALL)
        .build()
        .unwrap_or_else(|e| unreachable!("budget payment schema is inconsistent: {e}"))
});

static COMMERCIAL_PAYMENT: LazyLock<Schema> = LazyLock::new(|| {
    SchemaBuilder::new("commercial_payment")
        .fields(
            Field::ALL
                .into_iter()
                .filter(|field| !BUDGET_ONLY_FIELDS.contains(field)),
        )
        // Payer KPP is free-form outside budget payments.
        .exclude(RuleId::PayerKpp.code())
        .build()
        .unwrap_or_else(|e| unreachable!("commercial payment schema is inconsistent: {e}"))
});

/// Schema declaring every field of a payment order.
pub fn budget_payment() -> &'static Schema {
    &BUDGET_PAYMENT
}

/// Schema of a payment order without the budget fields 101–110.
pub fn commercial_payment() -> &'static Schema {
    &COMMERCIAL_PAYMENT
}

/// Picks the standard schema for `payment_type`.
pub fn for_payment_type(payment_type: PaymentType) -> &'static Schema {
    if payment_type.is_budget() {
        budget_payment()
    } else {
        commercial_payment()
    }
}
