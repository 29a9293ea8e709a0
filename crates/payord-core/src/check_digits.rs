//! Pure check-digit verification functions for Russian identifier schemes.
//!
//! These functions are called by the identifier validators in
//! [`crate::identifiers`] after the input has been trimmed and its length and
//! charset confirmed.  All of them are zero-allocation: they operate directly
//! on the byte slice of the input without any heap allocation, and they
//! return `false` instead of panicking when handed a string of the wrong
//! shape.
//!
//! # References
//!
//! - INN control digits: FNS order of 29.06.2012 N ММВ-7-6/435@
//! - OGRN / OGRNIP: Government decree N 438 (mod 11 / mod 13)
//! - SNILS: Pension Fund control number scheme
//! - UIN: Federal Treasury order N 1н, control digit algorithm
//! - Account control key: Bank of Russia regulation N 579-П, Appendix

/// Weights for the single control digit of a 10-digit INN.
const INN10_WEIGHTS: [u32; 9] = [2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Weights for the first (11th position) control digit of a 12-digit INN.
const INN11_WEIGHTS: [u32; 10] = [7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

/// Weights for the second (12th position) control digit of a 12-digit INN.
const INN12_WEIGHTS: [u32; 11] = [3, 7, 2, 4, 10, 3, 5, 9, 4, 6, 8];

/// SNILS body weights, position 1 through 9.
const SNILS_WEIGHTS: [u32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];

/// UIN weights, reused cyclically over the body.
const UIN_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Account control key weights, reused cyclically over the 23-digit string.
const ACCOUNT_KEY_WEIGHTS: [u32; 3] = [7, 1, 3];

fn digit(byte: u8) -> u32 {
    u32::from(byte.wrapping_sub(b'0'))
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

/// Computes `Σ digit·weight mod 11 mod 10` over `body`.
fn inn_control(body: &[u8], weights: &[u32]) -> u32 {
    let sum: u32 = body
        .iter()
        .zip(weights)
        .map(|(&byte, &weight)| digit(byte) * weight)
        .sum();
    sum % 11 % 10
}

/// Verifies the control digit(s) of a 10- or 12-digit INN.
///
/// A 10-digit INN (organisation) has one control digit in the last position.
/// A 12-digit INN (individual) has two: position 11 is computed over the first
/// ten digits, position 12 over the first eleven.  Any other length, or any
/// non-digit byte, returns `false`.
///
/// # Examples
///
/// ```
/// use payord_core::check_digits::inn_check;
///
/// assert!(inn_check("3664069397"));
/// assert!(!inn_check("3664069398"));
/// assert!(inn_check("302502032671"));
/// ```
pub fn inn_check(inn: &str) -> bool {
    let bytes = inn.as_bytes();
    if !all_digits(bytes) {
        return false;
    }
    match bytes.len() {
        10 => inn_control(&bytes[..9], &INN10_WEIGHTS) == digit(bytes[9]),
        12 => {
            inn_control(&bytes[..10], &INN11_WEIGHTS) == digit(bytes[10])
                && inn_control(&bytes[..11], &INN12_WEIGHTS) == digit(bytes[11])
        }
        _ => false,
    }
}

/// Verifies the control digit of a 13-digit OGRN or a 15-digit OGRNIP.
///
/// The body (all digits but the last) is read as an integer; the control digit
/// is `body mod 11 mod 10` for OGRN and `body mod 13 mod 10` for OGRNIP.
///
/// # Examples
///
/// ```
/// use payord_core::check_digits::ogrn_check;
///
/// assert!(ogrn_check("1027700132195"));
/// assert!(ogrn_check("304500123000018"));
/// assert!(!ogrn_check("1027700132196"));
/// ```
pub fn ogrn_check(ogrn: &str) -> bool {
    let bytes = ogrn.as_bytes();
    if !all_digits(bytes) {
        return false;
    }
    let modulus: u64 = match bytes.len() {
        13 => 11,
        15 => 13,
        _ => return false,
    };
    let (body, check) = bytes.split_at(bytes.len() - 1);
    let value = body
        .iter()
        .fold(0u64, |acc, &byte| acc * 10 + u64::from(digit(byte)));
    value % modulus % 10 == u64::from(digit(check[0]))
}

/// Verifies the two-digit control number of an 11-digit SNILS.
///
/// The control number is `Σ digit[i]·(10 − i)` for positions 1–9, reduced
/// modulo 101; a remainder of 100 is written as `00`.
///
/// The caller is responsible for stripping `-` and space separators and for
/// the lower bound on the body (`001-001-998`).
///
/// # Examples
///
/// ```
/// use payord_core::check_digits::snils_check;
///
/// assert!(snils_check("11223344595"));
/// assert!(!snils_check("11223344596"));
/// ```
pub fn snils_check(snils: &str) -> bool {
    let bytes = snils.as_bytes();
    if bytes.len() != 11 || !all_digits(bytes) {
        return false;
    }
    let sum: u32 = bytes[..9]
        .iter()
        .zip(SNILS_WEIGHTS)
        .map(|(&byte, weight)| digit(byte) * weight)
        .sum();
    let expected = match sum % 101 {
        100 => 0,
        remainder => remainder,
    };
    let actual = digit(bytes[9]) * 10 + digit(bytes[10]);
    expected == actual
}

/// Weighted mod-11 remainder over `body`, starting the weight cycle at
/// `UIN_WEIGHTS[offset]`.
fn uin_remainder(body: &[u8], offset: usize) -> u32 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, &byte)| digit(byte) * UIN_WEIGHTS[(i + offset) % UIN_WEIGHTS.len()])
        .sum();
    sum % 11
}

/// Verifies the control digit of a 20- or 25-digit UIN.
///
/// # Algorithm
///
/// The body (all digits but the last) is weighted with `1, 2, …, 10`
/// repeated and summed modulo 11.  A remainder below 10 is the control digit.
/// A remainder of exactly 10 triggers a second pass with the weight cycle
/// shifted to start at 3 (`3, 4, …, 10, 1, 2, …`); if that second remainder
/// is 10 again the control digit is 0.
///
/// # Examples
///
/// ```
/// use payord_core::check_digits::uin_check;
///
/// assert!(uin_check("18200000000000001237"));
/// assert!(!uin_check("18200000000000001238"));
/// ```
pub fn uin_check(uin: &str) -> bool {
    let bytes = uin.as_bytes();
    if !matches!(bytes.len(), 20 | 25) || !all_digits(bytes) {
        return false;
    }
    let (body, check) = bytes.split_at(bytes.len() - 1);
    let mut remainder = uin_remainder(body, 0);
    if remainder == 10 {
        remainder = uin_remainder(body, 2);
        if remainder == 10 {
            remainder = 0;
        }
    }
    remainder == digit(check[0])
}

/// Verifies the control key of a 20-digit bank account against its BIC.
///
/// # Algorithm
///
/// A 23-digit string is formed from a three-digit BIC-derived prefix followed
/// by the account number.  Each digit is multiplied by `7, 1, 3` repeated; the
/// account is consistent with the BIC when the sum is divisible by 10.
///
/// The prefix is `"0"` followed by BIC digits 5–6 for Federal Treasury
/// divisions (BIC starting with `01`) and for Bank of Russia settlement
/// centres (BIC digits 7–9 equal to `000`, `001` or `002`).  For every other
/// credit institution it is BIC digits 7–9.
///
/// Treasury accounts (first two digits `03`) carry no control key and always
/// pass.
///
/// # Examples
///
/// ```
/// use payord_core::check_digits::account_key_check;
///
/// assert!(account_key_check("40702810700000000001", "044525901"));
/// assert!(!account_key_check("40702810000000000001", "044525901"));
/// ```
pub fn account_key_check(account: &str, bic: &str) -> bool {
    let account = account.as_bytes();
    let bic = bic.as_bytes();
    if account.len() != 20 || bic.len() != 9 || !all_digits(account) || !all_digits(bic) {
        return false;
    }
    if account.starts_with(b"03") {
        return true;
    }
    let prefix: [u8; 3] =
        if bic.starts_with(b"01") || matches!(&bic[6..9], b"000" | b"001" | b"002") {
            [b'0', bic[4], bic[5]]
        } else {
            [bic[6], bic[7], bic[8]]
        };
    let sum: u32 = prefix
        .iter()
        .chain(account)
        .enumerate()
        .map(|(i, &byte)| digit(byte) * ACCOUNT_KEY_WEIGHTS[i % ACCOUNT_KEY_WEIGHTS.len()])
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn inn_check_valid_ten_digit() {
        assert!(inn_check("3664069397"));
        assert!(inn_check("7707083893"));
    }

    #[test]
    fn inn_check_invalid_ten_digit_control() {
        assert!(!inn_check("3664069398"));
    }

    #[test]
    fn inn_check_valid_twelve_digit() {
        assert!(inn_check("302502032671"));
        assert!(inn_check("500100732259"));
    }

    /// Only the last digit differs, so the 11th-position digit still matches
    /// and the second control digit must catch it.
    #[test]
    fn inn_check_invalid_twelve_digit_second_control() {
        assert!(!inn_check("302502032672"));
    }

    #[test]
    fn inn_check_invalid_twelve_digit_first_control() {
        assert!(!inn_check("302502032661"));
    }

    #[test]
    fn inn_check_rejects_other_lengths() {
        assert!(!inn_check("12345"));
        assert!(!inn_check("36640693970"));
        assert!(!inn_check(""));
    }

    #[test]
    fn inn_check_rejects_non_digits() {
        assert!(!inn_check("366406939X"));
    }

    #[test]
    fn ogrn_check_valid_thirteen_digit() {
        assert!(ogrn_check("1027700132195"));
    }

    #[test]
    fn ogrn_check_invalid_thirteen_digit() {
        assert!(!ogrn_check("1027700132196"));
    }

    #[test]
    fn ogrn_check_valid_fifteen_digit() {
        assert!(ogrn_check("304500123000018"));
    }

    #[test]
    fn ogrn_check_invalid_fifteen_digit() {
        assert!(!ogrn_check("304500123000017"));
    }

    #[test]
    fn ogrn_check_rejects_wrong_length() {
        assert!(!ogrn_check("10277001321"));
    }

    #[test]
    fn snils_check_valid() {
        assert!(snils_check("11223344595"));
    }

    #[test]
    fn snils_check_invalid_control() {
        assert!(!snils_check("11223344596"));
    }

    /// A body whose weighted sum reduces to 100 carries control number `00`.
    #[test]
    fn snils_check_remainder_hundred_maps_to_zero() {
        assert!(snils_check("08765430300"));
        assert!(!snils_check("08765430310"));
    }

    #[test]
    fn snils_check_rejects_separators() {
        assert!(!snils_check("112-233-445 95"));
    }

    #[test]
    fn uin_check_valid_twenty_digit() {
        assert!(uin_check("18200000000000001237"));
    }

    #[test]
    fn uin_check_invalid_twenty_digit() {
        assert!(!uin_check("18200000000000001238"));
    }

    /// `1822000000000000005` gives a first-pass remainder of 10, so the
    /// control digit comes from the shifted weights.
    #[test]
    fn uin_check_fallback_weights() {
        assert!(uin_check("18220000000000000057"));
        assert!(!uin_check("18220000000000000050"));
    }

    #[test]
    fn uin_check_valid_twenty_five_digit() {
        assert!(uin_check("1820996523410000004523415"));
    }

    #[test]
    fn uin_check_rejects_four_digit_form() {
        // Four-digit UINs have no control digit; the validator handles them.
        assert!(!uin_check("1234"));
    }

    #[test]
    fn account_key_check_commercial_bank() {
        assert!(account_key_check("40702810700000000001", "044525901"));
        assert!(account_key_check("40702810938000000001", "044525225"));
    }

    #[test]
    fn account_key_check_detects_mismatch() {
        assert!(!account_key_check("40702810000000000001", "044525901"));
        assert!(!account_key_check("40702810038000000001", "044525225"));
    }

    #[test]
    fn account_key_check_treasury_division_bic() {
        assert!(account_key_check("40102810445370000059", "017003983"));
    }

    #[test]
    fn account_key_check_treasury_account_has_no_key() {
        assert!(account_key_check("03100643000000018500", "017003983"));
    }

    #[test]
    fn account_key_check_rejects_bad_shape() {
        assert!(!account_key_check("4070281070000000000", "044525901"));
        assert!(!account_key_check("40702810700000000001", "04452590"));
        assert!(!account_key_check("4070281070000000000A", "044525901"));
    }
}
