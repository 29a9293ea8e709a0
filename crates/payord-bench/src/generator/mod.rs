//! Payment order generator.
//!
//! Produces batches of valid [`PaymentRecord`]s across all six payment types,
//! optionally with a share of orders carrying one checksum error.

pub mod identifiers;
pub mod orders;

use payord_core::{Field, PaymentRecord, PaymentType, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BUDGET_TYPES: [PaymentType; 3] = [
    PaymentType::Fns,
    PaymentType::Customs,
    PaymentType::BudgetOther,
];
const COMMERCIAL_TYPES: [PaymentType; 3] = [PaymentType::Le, PaymentType::Ip, PaymentType::Fl];

/// Configuration for the payment order generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of orders.
    pub count: usize,
    /// Fraction of budget orders (0.0-1.0).
    pub budget_share: f64,
    /// Fraction of orders with a corrupted payer INN (0.0-1.0).
    pub error_rate: f64,
}

/// Predefined batch sizes for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSize {
    /// 100 orders
    Small,
    /// 1 000 orders
    Medium,
    /// 10 000 orders
    Large,
}

impl BatchSize {
    /// Returns the default `GeneratorConfig` for this batch size: one third
    /// budget orders, no errors.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let count = match self {
            BatchSize::Small => 100,
            BatchSize::Medium => 1_000,
            BatchSize::Large => 10_000,
        };
        GeneratorConfig {
            seed,
            count,
            budget_share: 1.0 / 3.0,
            error_rate: 0.0,
        }
    }
}

/// Generates one valid order of `payment_type`.
pub fn generate_payment(rng: &mut StdRng, payment_type: PaymentType) -> PaymentRecord {
    orders::build(rng, payment_type)
}

/// Generates a batch of orders according to `config`.
///
/// Every order is valid except the corrupted ones, each of which fails the
/// payer INN checksum and nothing else.
pub fn generate_payments(config: &GeneratorConfig) -> Vec<PaymentRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.count)
        .map(|_| {
            let types = if rng.gen_bool(config.budget_share) {
                &BUDGET_TYPES
            } else {
                &COMMERCIAL_TYPES
            };
            let payment_type = types[rng.gen_range(0..types.len())];
            let mut record = generate_payment(&mut rng, payment_type);
            if rng.gen_bool(config.error_rate) {
                corrupt_payer_inn(&mut record);
            }
            record
        })
        .collect()
}

/// Bumps the last digit of the payer INN, breaking its control digit.
fn corrupt_payer_inn(record: &mut PaymentRecord) {
    let Some(inn) = record.text(Field::PayerInn) else {
        return;
    };
    let mut corrupted = inn.to_owned();
    if let Some(last) = corrupted.pop() {
        let bumped = last.to_digit(10).map_or(0, |d| (d + 1) % 10);
        corrupted.push_str(&bumped.to_string());
    }
    record.set(Field::PayerInn, Some(Value::Text(corrupted)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_batch() {
        let config = BatchSize::Small.config(42);
        assert_eq!(generate_payments(&config), generate_payments(&config));
    }

    #[test]
    fn batch_has_requested_size() {
        let config = BatchSize::Small.config(1);
        assert_eq!(generate_payments(&config).len(), 100);
    }

    #[test]
    fn budget_share_zero_yields_commercial_orders() {
        let config = GeneratorConfig {
            budget_share: 0.0,
            ..BatchSize::Small.config(3)
        };
        for record in generate_payments(&config) {
            let payment_type = record.payment_type().map(PaymentType::is_budget);
            assert_eq!(payment_type, Some(false));
        }
    }

    #[test]
    fn corruption_changes_only_the_last_digit() {
        let mut record = PaymentRecord::new().with(Field::PayerInn, "7707083893");
        corrupt_payer_inn(&mut record);
        assert_eq!(record.text(Field::PayerInn), Some("7707083894"));
    }
}
