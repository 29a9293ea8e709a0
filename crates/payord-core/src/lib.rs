#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod check_digits;
pub mod checks;
pub mod codes;
pub mod enums;
pub mod identifiers;
pub mod normalize;
pub mod schemas;
pub mod validation;
pub mod value;
pub mod violation;

#[cfg(test)]
mod test_helpers;

pub use check_digits::{account_key_check, inn_check, ogrn_check, snils_check, uin_check};
pub use enums::{PayerStatus, PaymentType, UnknownCode};
pub use identifiers::{
    validate_account, validate_bic, validate_inn, validate_kpp, validate_ogrn, validate_oktmo,
    validate_snils, validate_uin,
};
pub use normalize::normalize;
pub use schemas::{budget_payment, commercial_payment, for_payment_type};
pub use validation::{
    ExtensionRule, RuleId, RulePlan, Schema, SchemaBuilder, ValidationRule, builtin_rules,
};
pub use value::{Field, PaymentRecord, Value};
pub use violation::{
    PlainRenderer, SchemaError, ValidationError, Violation, ViolationFamily, ViolationKind,
    ViolationRenderer,
};

/// Returns the current version of the payord-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
