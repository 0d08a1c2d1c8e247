//! Lenient numeric parsing for hand-entered vital sign strings.
//!
//! Both parsers accept the longest numeric prefix and ignore whatever follows,
//! so `"98.6F"` reads as `98.6` and `"45 years"` as `45`. A string with no
//! leading digits yields `None`.

/// Parse the leading integer of `s`, e.g. `"42abc"` -> 42, `"45.9"` -> 45.
pub fn parse_int_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);
    let digits = leading_digits(rest);
    if digits == 0 {
        return None;
    }
    let value: f64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse the leading decimal number of `s`, including an optional fraction
/// and exponent, e.g. `"1e2x"` -> 100.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (negative, rest) = split_sign(s);
    let sign = if negative { -1.0 } else { 1.0 };

    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let bytes = rest.as_bytes();
    let int_digits = leading_digits(rest);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&rest[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = leading_digits(&rest[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let value: f64 = rest[..end].parse().ok()?;
    Some(sign * value)
}

/// Case-insensitive match of an already-trimmed value against placeholder
/// strings such as `"N/A"`. The empty string always matches.
pub fn matches_sentinel(trimmed: &str, sentinels: &[&str]) -> bool {
    trimmed.is_empty() || sentinels.iter().any(|s| trimmed.eq_ignore_ascii_case(s))
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
