//! Search-text normalization.
//!
//! Search input and option titles are folded to a common shape before
//! matching, so that a diacritic-bearing title like "Asociația Alfa" is found
//! by the ASCII-typed query "asociatia".

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for substring search.
///
/// The input is NFKD-decomposed, characters outside the set {letters, digits,
/// whitespace, `.`, `-`, `_`, `/`} are stripped (this is what removes
/// combining diacritical marks), and the result is lowercased.
///
/// Pure and total: empty input yields an empty string, and the function never
/// panics. Normalization is idempotent - `normalize(normalize(s))` equals
/// `normalize(s)`.
///
/// # Example
///
/// ```
/// use alege::normalize;
///
/// assert_eq!(normalize("Asociația Alfa"), "asociatia alfa");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .nfkd()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '-' | '_' | '/'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize("Beta Ong"), "beta ong");
    }

    #[test]
    fn test_strips_romanian_diacritics() {
        assert_eq!(normalize("Asociația Alfa"), "asociatia alfa");
        assert_eq!(normalize("țară"), "tara");
        // Legacy cedilla forms (U+015F, U+0163) normalize the same way
        assert_eq!(normalize("şţ"), "st");
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        assert_eq!(normalize("a.b-c_d/e"), "a.b-c_d/e");
    }

    #[test]
    fn test_strips_other_punctuation() {
        assert_eq!(normalize("Alfa & Omega, S.R.L.!"), "alfa  omega s.r.l.");
    }

    #[test]
    fn test_idempotent() {
        for s in ["Asociația Alfa", "Beta Ong", "a.b-c_d/e", "ÎÂĂȘȚ", "", "  "] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_digits_survive() {
        assert_eq!(normalize("Sector 3"), "sector 3");
    }
}
