use super::Scalar;

/// Coerce a value to a float for aggregation.
///
/// Numbers convert directly, booleans count as `1.0`/`0.0`, and text is
/// parsed after trimming surrounding whitespace. `Null` and text that is not
/// a number yield `None`.
pub fn try_parse_number(value: &Scalar) -> Option<f64> {
    match value {
        Scalar::Null => None,
        Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Scalar::Int(n) => Some(*n as f64),
        Scalar::Float(n) => Some(*n),
        Scalar::Text(s) => parse_number_text(s),
    }
}

/// Parse a numeric literal: optional sign, digits with an optional fraction
/// and exponent, or `inf`/`infinity`/`nan` in any case. Single underscores
/// are accepted between digits.
pub(crate) fn parse_number_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !trimmed.contains('_') {
        return trimmed.parse::<f64>().ok();
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let mut cleaned = String::with_capacity(trimmed.len());
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '_' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            let after = chars.get(i + 1);
            if !before.is_some_and(char::is_ascii_digit) || !after.is_some_and(char::is_ascii_digit)
            {
                return None;
            }
        } else {
            cleaned.push(ch);
        }
    }
    cleaned.parse::<f64>().ok()
}

/// Whether text starts like a numeric literal (rather than a word such as `nan`).
pub(crate) fn looks_numeric(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
}
