//! Cell-level parsing for postal codes and ratings.

use std::sync::LazyLock;

use regex::Regex;

static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{5}|2[AB]\d{3})$").expect("valid regex"));

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").expect("valid regex"));

/// Validates a French postal code.
///
/// Accepts five digits, the Corsican `2A`/`2B` form, and four-digit codes
/// whose leading zero was dropped by a spreadsheet (`6000` → `06000`).
/// Inner spaces are ignored (`75 001`). Returns `None` for anything else.
#[must_use]
pub fn normalize_postal_code(raw: &str) -> Option<String> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if compact.len() == 4 && compact.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("0{compact}"));
    }
    POSTAL_CODE.is_match(&compact).then_some(compact)
}

/// Parses a rating cell.
///
/// A comma is accepted as the decimal separator and only the leading number
/// is read, so `"4,5/5"` and `"4.5 étoiles"` both give `4.5`. Non-numeric
/// and non-finite values give `None`.
#[must_use]
pub fn parse_rating(raw: &str) -> Option<f64> {
    let text = raw.trim().replace(',', ".");
    let number = LEADING_NUMBER.find(&text)?;
    number
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
