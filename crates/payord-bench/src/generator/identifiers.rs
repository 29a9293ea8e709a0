//! Identifier generators with valid check digits.
//!
//! Produces INN (10 and 12 digits), KPP, BIC, UIN and bank account numbers
//! whose control key agrees with the bank BIC.

use rand::Rng;
use rand::rngs::StdRng;

const INN10_WEIGHTS: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];
const INN11_WEIGHTS: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];
const INN12_WEIGHTS: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];
const UIN_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
const ACCOUNT_KEY_WEIGHTS: [u32; 3] = [7, 1, 3];

/// Balance account prefixes (first eight digits, currency `810`).
pub const LEGAL_ENTITY_BALANCE: &str = "40702810";
/// Individual entrepreneur settlement account prefix.
pub const ENTREPRENEUR_BALANCE: &str = "40802810";
/// Personal account prefix.
pub const INDIVIDUAL_BALANCE: &str = "40817810";

fn digits(rng: &mut StdRng, n: usize) -> String {
    (0..n)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn value(byte: u8) -> u32 {
    u32::from(byte - b'0')
}

fn control(body: &str, weights: &[u32]) -> u32 {
    let sum: u32 = body
        .bytes()
        .zip(weights)
        .map(|(byte, weight)| value(byte) * weight)
        .sum();
    sum % 11 % 10
}

/// Two-digit region code `01`–`99`, so the result never starts with `00`.
fn region(rng: &mut StdRng) -> String {
    format!("{:02}", rng.gen_range(1..100u32))
}

/// Generates an organisation INN (10 digits).
pub fn gen_inn10(rng: &mut StdRng) -> String {
    let body = format!("{}{}", region(rng), digits(rng, 7));
    let check = control(&body, &INN10_WEIGHTS);
    format!("{body}{check}")
}

/// Generates an individual INN (12 digits, two control digits).
pub fn gen_inn12(rng: &mut StdRng) -> String {
    let mut inn = format!("{}{}", region(rng), digits(rng, 8));
    let first = control(&inn, &INN11_WEIGHTS);
    inn.push_str(&first.to_string());
    let second = control(&inn, &INN12_WEIGHTS);
    inn.push_str(&second.to_string());
    inn
}

/// Generates a KPP registered at the tax office of `inn`.
pub fn gen_kpp(inn: &str) -> String {
    format!("{}01001", &inn[..4])
}

/// Generates a commercial bank BIC (`04` prefix, branch suffix `100`–`999`).
pub fn gen_bic(rng: &mut StdRng) -> String {
    format!("04{}{}", digits(rng, 4), rng.gen_range(100..1000u32))
}

/// Generates a 20-digit account at `bic` with the given balance prefix.
///
/// The control key sits at index 8.  `bic` must be a commercial bank BIC
/// from [`gen_bic`], whose last three digits enter the key sum.
pub fn gen_account(rng: &mut StdRng, balance: &str, bic: &str) -> String {
    let tail = digits(rng, 11);
    let draft = format!("{balance}0{tail}");
    let sum: u32 = bic[6..9]
        .bytes()
        .chain(draft.bytes())
        .zip(ACCOUNT_KEY_WEIGHTS.iter().cycle())
        .map(|(byte, weight)| value(byte) * weight)
        .sum();
    // The key has weight 3; 7 is its inverse modulo 10.
    let key = (10 - sum % 10) % 10 * 7 % 10;
    format!("{balance}{key}{tail}")
}

fn uin_remainder(body: &str, offset: usize) -> u32 {
    let sum: u32 = body
        .bytes()
        .enumerate()
        .map(|(i, byte)| value(byte) * UIN_WEIGHTS[(i + offset) % UIN_WEIGHTS.len()])
        .sum();
    sum % 11
}

/// Generates a 20-digit UIN of the tax service (`182` prefix).
pub fn gen_uin(rng: &mut StdRng) -> String {
    let body = format!("182{}", digits(rng, 16));
    let mut check = uin_remainder(&body, 0);
    if check == 10 {
        check = uin_remainder(&body, 2);
        if check == 10 {
            check = 0;
        }
    }
    format!("{body}{check}")
}
