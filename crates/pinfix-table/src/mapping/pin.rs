//! Pin number validation and pin name suffixing

use regex::Regex;
use std::sync::LazyLock;

/// Package ball locations like "R11", "AA25"
static PIN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,2}[0-9]{1,2}$").unwrap());

/// Check whether a token is a package pin number
pub fn is_pin_number(token: &str) -> bool {
    PIN_NUMBER.is_match(token)
}

/// Append `_<PIN>` to the pin name column of a row.
///
/// Rows with fewer than two columns, or whose first column is not a pin number, are
/// left alone. Names already ending in the suffix are not touched again.
///
/// Returns `true` if the pin name changed.
pub fn append_pin_suffix(columns: &mut [String]) -> bool {
    let [pin, name, ..] = columns else {
        return false;
    };
    if !is_pin_number(pin) {
        return false;
    }

    let suffix = format!("_{pin}");
    if name.ends_with(&suffix) {
        return false;
    }

    log::trace!("{pin}: {name} -> {name}{suffix}");
    name.push_str(&suffix);
    true
}
