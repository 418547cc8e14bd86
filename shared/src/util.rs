/// Parse an integer the way a browser's `parseInt(value, 10)` does.
///
/// Leading whitespace is skipped, an optional sign is accepted and the
/// longest run of ASCII digits is taken. Anything after the digits is
/// ignored. Returns `None` where JavaScript would yield `NaN`. A digit run
/// too long for `i64` saturates instead of losing precision as a float.
pub fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    // only overflow can fail here: `digits` is non-empty ASCII digits
    let magnitude: i64 = digits.parse().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
