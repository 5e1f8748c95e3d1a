//! CPF (Cadastro de Pessoas Físicas) validation.
//!
//! A CPF has 11 digits; the last two are check digits computed from the first
//! nine with a weighted mod-11 sum. Operators may type the usual formatting
//! (`529.982.247-25`), so dots and hyphens are ignored. Anything else, spaces
//! included, makes the input invalid.

const CPF_LEN: usize = 11;

/// Strips every non-digit character.
///
/// ```
/// use clientesapp::validation::normalize_identifier;
///
/// assert_eq!(normalize_identifier("529.982.247-25"), "52998224725");
/// assert_eq!(normalize_identifier(" 123 "), "123");
/// ```
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Checks a CPF as entered, formatting included.
///
/// Returns `false` for malformed input, repeated-digit sequences such as
/// `111.111.111-11`, and check-digit mismatches.
///
/// ```
/// use clientesapp::validation::is_valid_identifier;
///
/// assert!(is_valid_identifier("529.982.247-25"));
/// assert!(is_valid_identifier("52998224725"));
///
/// assert!(!is_valid_identifier("529.982.247-26"));
/// assert!(!is_valid_identifier("111.111.111-11"));
/// assert!(!is_valid_identifier("52998224725a"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(raw: &str) -> bool {
    if raw
        .chars()
        .any(|c| !(c.is_ascii_digit() || matches!(c, '.' | '-')))
    {
        return false;
    }

    let digits: Vec<u32> = raw.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_LEN {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Weighted mod-11 check digit over `body`; weights run from `len + 1` down to 2.
fn check_digit(body: &[u32]) -> u32 {
    let weight_start = body.len() as u32 + 1;
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r,
    }
}
