//! Binary/hexadecimal rendering for the conversion tool.
//!
//! Digits are produced by repeated division rather than the formatter
//! machinery so the negative-number policy stays explicit: negatives are
//! rendered as a 10-bit two's-complement pattern, and the hex form is
//! derived from that same pattern, `F`-extended to 10 digits.

use crate::classify::{classify_integer, LineClass, RejectReason};

/// Width of the two's-complement pattern used for negative inputs.
pub const NEG_BIN_BITS: u32 = 10;
/// Total hex digits for negative inputs after sign extension.
pub const NEG_HEX_DIGITS: usize = 10;

/// Smallest negative value representable in [`NEG_BIN_BITS`] two's
/// complement. Inputs below this are rejected.
pub const MIN_NEGATIVE: i64 = -(1 << (NEG_BIN_BITS - 1));

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// One accepted input line: the original value and both renderings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRow {
    pub value: i64,
    pub binary: String,
    pub hex: String,
}

/// Convert `n` per the tool's policy. `None` when `n` is a negative value
/// the fixed 10-bit pattern cannot represent.
pub fn convert(n: i64) -> Option<ConversionRow> {
    if n >= 0 {
        return Some(ConversionRow {
            value: n,
            binary: to_binary(n as u64),
            hex: to_hex(n as u64),
        });
    }

    if n < MIN_NEGATIVE {
        return None;
    }

    // Two's complement: 2^bits + n, guaranteed non-negative in range.
    let pattern = ((1i64 << NEG_BIN_BITS) + n) as u64;

    let mut binary = to_binary(pattern);
    if binary.len() < NEG_BIN_BITS as usize {
        binary = format!("{}{binary}", "0".repeat(NEG_BIN_BITS as usize - binary.len()));
    }

    // Hex comes from the same 10-bit pattern: pad to at least two digits
    // with '0', then sign-extend with 'F'.
    let mut hex = to_hex(pattern);
    if hex.len() < 2 {
        hex = format!("{}{hex}", "0".repeat(2 - hex.len()));
    }
    if hex.len() < NEG_HEX_DIGITS {
        hex = format!("{}{hex}", "F".repeat(NEG_HEX_DIGITS - hex.len()));
    }

    Some(ConversionRow {
        value: n,
        binary,
        hex,
    })
}

/// Classifier for the conversion tool: parse a signed integer, then convert
/// it. Unrepresentable negatives reject like any other bad line.
pub fn classify_conversion(raw: &str) -> LineClass<ConversionRow> {
    match classify_integer(raw) {
        LineClass::Value(n) => match convert(n) {
            Some(row) => LineClass::Value(row),
            None => LineClass::Reject(RejectReason::OutOfRange),
        },
        LineClass::Skip => LineClass::Skip,
        LineClass::Reject(reason) => LineClass::Reject(reason),
    }
}

fn to_binary(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut bits = Vec::new();
    while n > 0 {
        bits.push(if n % 2 == 1 { b'1' } else { b'0' });
        n /= 2;
    }
    bits.reverse();
    String::from_utf8(bits).unwrap_or_default()
}

fn to_hex(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(HEX_DIGITS[(n % 16) as usize]);
        n /= 16;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}
