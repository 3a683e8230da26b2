//! Cell-level parsing for market tracker extracts.
//!
//! Malformed numbers never fail a run; they surface as `None` and stay `None`
//! through every downstream computation.

const MISSING_MARKER: &str = "NA";

/// Removes one matching pair of surrounding double quotes.
pub fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Header names are referenced unquoted and lower-cased.
pub fn normalize_header(value: &str) -> String {
    let cleaned = value.trim().trim_start_matches('\u{feff}');
    strip_quotes(cleaned).to_ascii_lowercase()
}

/// Reads the longest leading decimal number, so `"3.5%"` is `3.5` and `"12abc"` is `12`.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == MISSING_MARKER {
        return None;
    }

    trimmed[..numeric_prefix_len(trimmed)]
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

/// Byte length of `[sign] digits [. digits] [e [sign] digits]`; zero when no digit leads.
fn numeric_prefix_len(value: &str) -> usize {
    let bytes = value.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    end
}

/// Source extracts store fractions; output uses percentage points.
pub fn parse_percent(value: &str) -> Option<f64> {
    parse_number(value).map(|fraction| fraction * 100.0)
}
