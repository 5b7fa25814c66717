//! Per-line classification for the three tools.
//!
//! Each classifier is a pure function from one raw input line to a
//! [`LineClass`]. Rejections never abort a run; the read loop records them
//! and moves on.

/// Outcome of classifying a single raw line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass<T> {
    /// The line parsed into a usable value.
    Value(T),
    /// Blank line; dropped without a diagnostic.
    Skip,
    /// Malformed line; reported and dropped.
    Reject(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Text that does not parse as the tool's input type.
    Malformed,
    /// Integer that overflows `i64` or falls outside the representable
    /// negative range of the conversion tool.
    OutOfRange,
    /// Empty line where the word-count tool requires content.
    EmptyLine,
    /// Line that tokenized to zero words.
    NoWords,
}

/// Classifier for the statistics tool: one float per line, with `,`
/// accepted as a decimal separator.
pub fn classify_number(raw: &str) -> LineClass<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return LineClass::Skip;
    }

    let normalized = text.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) => LineClass::Value(value),
        Err(_) => LineClass::Reject(RejectReason::Malformed),
    }
}

/// Classifier for the conversion tool: one signed decimal integer per line.
///
/// The value is accumulated digit by digit rather than via `str::parse` so
/// the accepted grammar stays exactly "optional sign, ASCII digits".
/// Overflowing `i64` is a rejection, not a wrap.
pub fn classify_integer(raw: &str) -> LineClass<i64> {
    let text = raw.trim();
    if text.is_empty() {
        return LineClass::Skip;
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return LineClass::Reject(RejectReason::Malformed);
    }

    let mut value: i64 = 0;
    for b in digits.bytes() {
        let digit = i64::from(b - b'0');
        value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => return LineClass::Reject(RejectReason::OutOfRange),
        };
    }

    LineClass::Value(if negative { -value } else { value })
}

/// Classifier for the word-count tool: a line is a sequence of
/// whitespace-separated tokens. Unlike the numeric tools, an empty line is
/// an explicit rejection here.
pub fn classify_words(raw: &str) -> LineClass<Vec<String>> {
    if raw.trim().is_empty() {
        return LineClass::Reject(RejectReason::EmptyLine);
    }

    let words: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return LineClass::Reject(RejectReason::NoWords);
    }

    LineClass::Value(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_accepts_plain_and_comma_decimals() {
        assert_eq!(classify_number("3.5"), LineClass::Value(3.5));
        assert_eq!(classify_number("23,45"), LineClass::Value(23.45));
        assert_eq!(classify_number("  -2  "), LineClass::Value(-2.0));
        assert_eq!(classify_number("1e3"), LineClass::Value(1000.0));
    }

    #[test]
    fn number_skips_blank_rejects_garbage() {
        assert_eq!(classify_number(""), LineClass::Skip);
        assert_eq!(classify_number("   "), LineClass::Skip);
        assert_eq!(
            classify_number("abc"),
            LineClass::Reject(RejectReason::Malformed)
        );
        assert_eq!(
            classify_number("12x"),
            LineClass::Reject(RejectReason::Malformed)
        );
    }

    #[test]
    fn integer_accepts_signed_decimal() {
        assert_eq!(classify_integer("42"), LineClass::Value(42));
        assert_eq!(classify_integer("+7"), LineClass::Value(7));
        assert_eq!(classify_integer("-39"), LineClass::Value(-39));
        assert_eq!(classify_integer(" 0 "), LineClass::Value(0));
    }

    #[test]
    fn integer_rejects_non_digits_and_bare_signs() {
        assert_eq!(classify_integer(""), LineClass::Skip);
        assert_eq!(
            classify_integer("-"),
            LineClass::Reject(RejectReason::Malformed)
        );
        assert_eq!(
            classify_integer("3.5"),
            LineClass::Reject(RejectReason::Malformed)
        );
        assert_eq!(
            classify_integer("0x1F"),
            LineClass::Reject(RejectReason::Malformed)
        );
    }

    #[test]
    fn integer_rejects_overflow_instead_of_wrapping() {
        assert_eq!(
            classify_integer("9223372036854775807"),
            LineClass::Value(i64::MAX)
        );
        assert_eq!(
            classify_integer("9223372036854775808"),
            LineClass::Reject(RejectReason::OutOfRange)
        );
    }

    #[test]
    fn words_tokenizes_in_order() {
        assert_eq!(
            classify_words("b a b\tc"),
            LineClass::Value(vec![
                "b".to_string(),
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ])
        );
    }

    #[test]
    fn words_keeps_case_and_punctuation() {
        assert_eq!(
            classify_words("Hello hello, world!"),
            LineClass::Value(vec![
                "Hello".to_string(),
                "hello,".to_string(),
                "world!".to_string()
            ])
        );
    }

    #[test]
    fn words_rejects_blank_lines() {
        assert_eq!(
            classify_words(""),
            LineClass::Reject(RejectReason::EmptyLine)
        );
        assert_eq!(
            classify_words(" \t "),
            LineClass::Reject(RejectReason::EmptyLine)
        );
    }
}
