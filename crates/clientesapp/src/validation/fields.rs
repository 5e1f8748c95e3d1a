//! Generic field predicates.
//!
//! All predicates are pure and never fail; an unacceptable value is simply `false`.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Basic `local@domain.tld` shape check.
///
/// ```
/// use clientesapp::validation::has_email_shape;
///
/// assert!(has_email_shape("a@b.co"));
/// assert!(has_email_shape("a.b@c.org"));
/// assert!(!has_email_shape("a@b"));
/// ```
pub fn has_email_shape(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

/// True if `s` contains at least `n` ASCII digits, wherever they are.
pub fn min_digits(s: &str, n: usize) -> bool {
    s.chars().filter(char::is_ascii_digit).count() >= n
}

/// True if `s` has something besides whitespace.
pub fn is_present(s: &str) -> bool {
    !s.trim().is_empty()
}
