//! Operand parsing from free text.
//!
//! Mirrors lenient float parsing: leading whitespace is skipped and the
//! longest numeric prefix wins, so `"12abc"` reads as 12. Text with no
//! numeric prefix is rejected.

use crate::calculator::types::CalcError;

/// Parse an operand typed by the user.
pub fn parse_operand(input: &str) -> Result<f64, CalcError> {
    let trimmed = input.trim_start();

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len() - unsigned.len();
    if sign_len <= 1 && unsigned.starts_with("Infinity") {
        return Ok(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    numeric_prefix(trimmed)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .ok_or_else(|| CalcError::InvalidOperand(input.to_string()))
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digit_count += frac_end - (end + 1);
        if digit_count > 0 {
            end = frac_end;
        }
    }

    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Some(&s[..end])
}
