//! Country-code normalization.

/// Maximum country code length, sign included (e.g. `+9999`).
pub const COUNTRY_CODE_MAX_LEN: usize = 5;

/// Normalize a raw country-code edit.
///
/// Keeps only ASCII digits and `+`. A value not starting with `+` has its
/// stray `+` characters removed and a single `+` prepended, so an empty
/// edit becomes `"+"`. Returns `None` when the result is longer than
/// [`COUNTRY_CODE_MAX_LEN`]; the caller ignores such an edit.
pub fn normalize_country_code(raw: &str) -> Option<String> {
    let mut clean: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if !clean.starts_with('+') {
        clean.retain(|c| c != '+');
        clean.insert(0, '+');
    }

    // Only ASCII remains, so byte length is char length.
    if clean.len() > COUNTRY_CODE_MAX_LEN {
        return None;
    }

    Some(clean)
}
