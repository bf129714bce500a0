//! Auxiliary form-field validation.
//!
//! The widget itself never validates host fields; this module carries the
//! one pure helper hosts consume alongside the combobox when validating the
//! redirection form.

use chrono::{Datelike, Utc};

/// Control-digit weights for the first twelve CNP digits.
const CNP_WEIGHTS: [u32; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

/// Validate a Romanian personal numeric code (CNP), for birth years
/// 1800-2099.
///
/// A CNP is thirteen decimal digits: a sex/century digit, a two-digit birth
/// year, month, day, county, a serial, and a control digit. The control
/// digit must equal the weighted sum of the first twelve digits mod 11
/// (with 10 mapping to 1), and the century digit must yield a birth year in
/// range. Codes starting with 7, 8 or 9 (resident foreigners) are read as
/// 2000s births only when that would not make the holder younger than 14.
///
/// Total over all inputs: wrong length, non-digits or an impossible century
/// digit simply yield `false`.
///
/// # Example
///
/// ```
/// use alege::validate::valid_cnp;
///
/// assert!(valid_cnp("1900101221140"));
/// assert!(!valid_cnp("1900101221141"));
/// ```
pub fn valid_cnp(cnp: &str) -> bool {
    let digits: Vec<u32> = cnp.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 13 || cnp.chars().count() != 13 {
        return false;
    }

    let mut hash: u32 = digits[..12]
        .iter()
        .zip(CNP_WEIGHTS)
        .map(|(digit, weight)| digit * weight)
        .sum();
    hash %= 11;
    if hash == 10 {
        hash = 1;
    }

    let mut year = digits[1] * 10 + digits[2];
    match digits[0] {
        1 | 2 => year += 1900,
        3 | 4 => year += 1800,
        5 | 6 => year += 2000,
        7 | 8 | 9 => {
            year += 2000;
            if year > Utc::now().year() as u32 - 14 {
                year -= 100;
            }
        }
        _ => return false,
    }

    (1800..=2099).contains(&year) && digits[12] == hash
}
