//! Strict numeric parsing of node text
//!
//! Numbers use C-locale syntax regardless of the process locale:
//! optional leading whitespace, optional sign, then the literal. Anything
//! after the literal rejects the whole value.
//!
//! Doubles accept decimal (`12.5`, `.5`, `1e-3`), hexadecimal (`0x1.8p3`)
//! and `inf` / `infinity` / `nan`. Integers are base 10 and must fit `i32`.

use crate::dom::{Document, NodeId};
use crate::error::{DomError, Result};

/// Value historically returned for a double that failed to parse
pub const INVALID_DOUBLE: f64 = f64::MAX;

/// Value historically returned for an integer that failed to parse
pub const INVALID_INT: i32 = i32::MAX;

impl Document {
    /// Node text as a double
    pub fn node_data_as_double(&self, id: NodeId) -> Result<f64> {
        parse_double(self.scalar_text(id)?)
    }

    /// Node text as a 32-bit signed integer
    pub fn node_data_as_int(&self, id: NodeId) -> Result<i32> {
        parse_int(self.scalar_text(id)?)
    }

    fn scalar_text(&self, id: NodeId) -> Result<&str> {
        self.node(id).ok_or(DomError::NodeNotFound(id))?;
        Ok(self.node_data(id).unwrap_or_default())
    }
}

/// Collapse a double result into the sentinel convention
pub fn double_or_sentinel(value: Result<f64>) -> f64 {
    value.unwrap_or(INVALID_DOUBLE)
}

/// Collapse an integer result into the sentinel convention
pub fn int_or_sentinel(value: Result<i32>) -> i32 {
    value.unwrap_or(INVALID_INT)
}

/// Parse a complete C-locale floating point literal
pub fn parse_double(text: &str) -> Result<f64> {
    let invalid = || DomError::InvalidNumber {
        text: text.to_owned(),
    };

    let (negative, body) = split_sign(text.trim_start_matches(is_c_space));
    let value = if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        parse_hex_float(hex)
    } else if let Some(special) = parse_special(body) {
        Some(special)
    } else if is_decimal_literal(body) {
        body.parse::<f64>().ok()
    } else {
        None
    };

    let value = value.ok_or_else(invalid)?;
    Ok(if negative { -value } else { value })
}

/// Parse a complete base-10 integer literal within `i32` range
pub fn parse_int(text: &str) -> Result<i32> {
    let invalid = || DomError::InvalidNumber {
        text: text.to_owned(),
    };

    let literal = text.trim_start_matches(is_c_space);
    let (_, digits) = split_sign(literal);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let wide: i64 = literal.parse().map_err(|_| invalid())?;
    i32::try_from(wide).map_err(|_| invalid())
}

#[inline]
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else {
        (false, s.strip_prefix('+').unwrap_or(s))
    }
}

fn count_digits(bytes: &[u8], radix: u32) -> usize {
    bytes
        .iter()
        .take_while(|&&b| (b as char).is_digit(radix))
        .count()
}

/// `digits[.digits][(e|E)[sign]digits]` with at least one mantissa digit
fn is_decimal_literal(s: &str) -> bool {
    let b = s.as_bytes();
    let int_digits = count_digits(b, 10);
    let mut i = int_digits;
    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&b[i..], 10);
        i += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(b.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&b[i..], 10);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }
    i == b.len()
}

fn parse_special(s: &str) -> Option<f64> {
    if s.eq_ignore_ascii_case("inf") || s.eq_ignore_ascii_case("infinity") {
        return Some(f64::INFINITY);
    }
    if s.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    // nan(n-char-sequence)
    let prefix = s.get(..4)?;
    let payload = s[4..].strip_suffix(')')?;
    if prefix.eq_ignore_ascii_case("nan(")
        && payload.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return Some(f64::NAN);
    }
    None
}

/// Significant hex digits kept in the mantissa; 15 digits fill 60 bits
const MAX_HEX_DIGITS: u32 = 15;

/// Hex mantissa with optional `.` and optional binary exponent, `0x` already stripped
fn parse_hex_float(s: &str) -> Option<f64> {
    let b = s.as_bytes();
    let mut mantissa = 0u64;
    let mut significant = 0u32;
    let mut digits = 0usize;
    // Binary exponent adjustment for fraction digits kept and integer digits dropped
    let mut shift = 0i64;
    let mut i = 0;

    let mut seen_point = false;
    while let Some(&c) = b.get(i) {
        if let Some(d) = (c as char).to_digit(16) {
            digits += 1;
            if significant < MAX_HEX_DIGITS {
                mantissa = mantissa * 16 + u64::from(d);
                if mantissa != 0 {
                    significant += 1;
                }
                if seen_point {
                    shift -= 4;
                }
            } else if !seen_point {
                shift += 4;
            }
        } else if c == b'.' && !seen_point {
            seen_point = true;
        } else {
            break;
        }
        i += 1;
    }
    if digits == 0 {
        return None;
    }

    let mut exponent = 0i64;
    if matches!(b.get(i), Some(b'p' | b'P')) {
        i += 1;
        let (negative, rest) = split_sign(&s[i..]);
        i = b.len() - rest.len();
        let exp_digits = count_digits(rest.as_bytes(), 10);
        if exp_digits == 0 {
            return None;
        }
        for d in rest.bytes().take(exp_digits) {
            exponent = exponent
                .saturating_mul(10)
                .saturating_add(i64::from(d - b'0'));
        }
        if negative {
            exponent = -exponent;
        }
        i += exp_digits;
    }
    if i != b.len() {
        return None;
    }
    if mantissa == 0 {
        return Some(0.0);
    }

    // Anything past +-4000 already saturates to inf or 0
    let scale = exponent.saturating_add(shift).clamp(-4000, 4000) as i32;
    // Two steps so a subnormal result is not flushed by 2^scale underflowing
    let half = scale / 2;
    Some(mantissa as f64 * 2f64.powi(half) * 2f64.powi(scale - half))
}
