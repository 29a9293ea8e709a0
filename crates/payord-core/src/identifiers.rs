/// Single-identifier validators for INN, KPP, BIC, OGRN, SNILS, OKTMO, UIN and
/// bank account numbers.
///
/// Each validator trims its input and returns:
/// - `Ok(None)` for an empty sentinel (`""`, and `"0"` where the identifier
///   is optional at the type level),
/// - `Ok(Some(normalized))` for a well-formed value,
/// - `Err(kind)` describing the first shape, charset or checksum failure.
///
/// The digit arithmetic lives in [`crate::check_digits`].
use std::sync::LazyLock;

use regex::Regex;

use crate::check_digits::{inn_check, ogrn_check, snils_check, uin_check};
use crate::violation::ViolationKind;


// ---------------------------------------------------------------------------
// Patterns and length tables
// ---------------------------------------------------------------------------

/// KPP: four digits (tax office), two alphanumerics (reason), three digits.
static KPP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}[0-9A-Z]{2}[0-9]{3}$")
        .unwrap_or_else(|_| Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

const INN_LENGTHS: &[usize] = &[5, 10, 12];
const KPP_LENGTHS: &[usize] = &[9];
const BIC_LENGTHS: &[usize] = &[9];
const OGRN_LENGTHS: &[usize] = &[13, 15];
const SNILS_LENGTHS: &[usize] = &[11];
const OKTMO_LENGTHS: &[usize] = &[8, 11];
const UIN_LENGTHS: &[usize] = &[4, 20, 25];
const ACCOUNT_LENGTHS: &[usize] = &[20];

/// Smallest SNILS body (first nine digits) subject to control-number checks.
const SNILS_MIN_BODY: u64 = 1_001_998;
const SNILS_MAX_BODY: u64 = 999_999_999;

// ---------------------------------------------------------------------------
// Shared shape checks
// ---------------------------------------------------------------------------

/// `""` or `"0"`: the identifier is explicitly left blank.
fn is_blank_sentinel(value: &str) -> bool {
    value.is_empty() || value == "0"
}

fn is_all_digits(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_digit())
}

fn is_all_zeros(value: &str) -> bool {
    value.bytes().all(|b| b == b'0')
}

/// Rejects non-digit input, then input whose length is not in `allowed`.
fn digits_of_length(value: &str, allowed: &'static [usize]) -> Result<(), ViolationKind> {
    if !is_all_digits(value) {
        return Err(ViolationKind::NotDigits);
    }
    if !allowed.contains(&value.len()) {
        return Err(ViolationKind::InvalidLength {
            allowed,
            actual: value.len(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validates a taxpayer identification number.
///
/// Accepts 10-digit (organisation) and 12-digit (individual) INNs with valid
/// control digits, plus 5-digit foreign-organisation codes, which carry no
/// control digit.  A leading `00` is never a valid region code.
///
/// # Examples
///
/// ```
/// use payord_core::identifiers::validate_inn;
/// use payord_core::violation::ViolationKind;
///
/// assert_eq!(validate_inn(" 3664069397 "), Ok(Some("3664069397".to_owned())));
/// assert_eq!(validate_inn("0"), Ok(None));
/// assert_eq!(validate_inn("3664069398"), Err(ViolationKind::Checksum));
/// ```
pub fn validate_inn(raw: &str) -> Result<Option<String>, ViolationKind> {
    let inn = raw.trim();
    if is_blank_sentinel(inn) {
        return Ok(None);
    }
    digits_of_length(inn, INN_LENGTHS)?;
    if inn.starts_with("00") {
        return Err(ViolationKind::LeadingZeros);
    }
    if inn.len() != 5 && !inn_check(inn) {
        return Err(ViolationKind::Checksum);
    }
    Ok(Some(inn.to_owned()))
}

/// Validates a tax registration reason code: nine characters, the fifth and
/// sixth of which may be uppercase letters.
pub fn validate_kpp(raw: &str) -> Result<Option<String>, ViolationKind> {
    let kpp = raw.trim();
    if is_blank_sentinel(kpp) {
        return Ok(None);
    }
    let actual = kpp.chars().count();
    if !KPP_LENGTHS.contains(&actual) {
        return Err(ViolationKind::InvalidLength {
            allowed: KPP_LENGTHS,
            actual,
        });
    }
    if !KPP_RE.is_match(kpp) {
        return Err(ViolationKind::InvalidFormat {
            pattern: "NNNNPPNNN",
        });
    }
    Ok(Some(kpp.to_owned()))
}

/// Validates a nine-digit bank identifier code.
pub fn validate_bic(raw: &str) -> Result<Option<String>, ViolationKind> {
    let bic = raw.trim();
    if bic.is_empty() {
        return Ok(None);
    }
    digits_of_length(bic, BIC_LENGTHS)?;
    Ok(Some(bic.to_owned()))
}

/// Validates a 13-digit OGRN or a 15-digit OGRNIP.
pub fn validate_ogrn(raw: &str) -> Result<Option<String>, ViolationKind> {
    let ogrn = raw.trim();
    if is_blank_sentinel(ogrn) {
        return Ok(None);
    }
    digits_of_length(ogrn, OGRN_LENGTHS)?;
    if ogrn.starts_with('0') {
        return Err(ViolationKind::InvalidFormat {
            pattern: "first digit 1-9",
        });
    }
    if !ogrn_check(ogrn) {
        return Err(ViolationKind::Checksum);
    }
    Ok(Some(ogrn.to_owned()))
}

/// Validates an individual insurance account number.
///
/// `-` and space separators are removed, so `112-233-445 95` normalizes to
/// `11223344595`.
pub fn validate_snils(raw: &str) -> Result<Option<String>, ViolationKind> {
    let snils: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect();
    if snils.is_empty() {
        return Ok(None);
    }
    digits_of_length(&snils, SNILS_LENGTHS)?;
    let body: u64 = snils[..9]
        .bytes()
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'));
    if body < SNILS_MIN_BODY {
        return Err(ViolationKind::OutOfRange {
            min: SNILS_MIN_BODY,
            max: SNILS_MAX_BODY,
        });
    }
    if !snils_check(&snils) {
        return Err(ViolationKind::Checksum);
    }
    Ok(Some(snils))
}

/// Validates a municipal territory code.
///
/// Eleven-digit codes name a settlement inside a municipality; one whose
/// settlement part is `000` must be written in the eight-digit form instead.
///
/// # Examples
///
/// ```
/// use payord_core::identifiers::validate_oktmo;
///
/// assert!(validate_oktmo("69654000").is_ok());
/// assert!(validate_oktmo("69701000000").is_err());
/// assert!(validate_oktmo("00000000").is_err());
/// ```
pub fn validate_oktmo(raw: &str) -> Result<Option<String>, ViolationKind> {
    let oktmo = raw.trim();
    if is_blank_sentinel(oktmo) {
        return Ok(None);
    }
    digits_of_length(oktmo, OKTMO_LENGTHS)?;
    if is_all_zeros(oktmo) {
        return Err(ViolationKind::AllZeros);
    }
    if oktmo.len() == 11 && oktmo.ends_with("000") {
        return Err(ViolationKind::InvalidFormat {
            pattern: "8 digits, or 11 digits not ending in 000",
        });
    }
    Ok(Some(oktmo.to_owned()))
}

/// Validates a unique accrual identifier.
///
/// Four-digit identifiers are accepted as-is; 20- and 25-digit identifiers
/// must carry a valid control digit.
pub fn validate_uin(raw: &str) -> Result<Option<String>, ViolationKind> {
    let uin = raw.trim();
    if is_blank_sentinel(uin) {
        return Ok(None);
    }
    digits_of_length(uin, UIN_LENGTHS)?;
    if is_all_zeros(uin) {
        return Err(ViolationKind::AllZeros);
    }
    if uin.len() != 4 && !uin_check(uin) {
        return Err(ViolationKind::Checksum);
    }
    Ok(Some(uin.to_owned()))
}

/// Validates a 20-digit bank account number.
///
/// Agreement with the bank BIC is a cross-field matter handled by
/// [`crate::checks::accounts::check_account_bic`].
pub fn validate_account(raw: &str) -> Result<Option<String>, ViolationKind> {
    let account = raw.trim();
    if account.is_empty() {
        return Ok(None);
    }
    digits_of_length(account, ACCOUNT_LENGTHS)?;
    Ok(Some(account.to_owned()))
}
