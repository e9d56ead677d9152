// ABOUTME: Numeric parsing for form input accepting comma or period decimal separators
// ABOUTME: Returns NaN for anything unparseable instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Raw value handed over by an input collaborator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput<'a> {
    /// Already numeric
    Number(f64),
    /// Free text, e.g. `"72,5"` or `" 1.75 "`
    Text(&'a str),
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

/// Parse a number written with either a comma or a period as decimal separator
///
/// Numbers pass through untouched. Text is trimmed and its first comma is
/// replaced by a period before conversion. Empty or unparseable text yields
/// `f64::NAN`; callers decide whether a non-finite result skips a mutation.
///
/// # Examples
///
/// ```rust
/// use physio_intelligence::parsing::parse_num;
///
/// assert!((parse_num("72,5") - 72.5).abs() < f64::EPSILON);
/// assert!((parse_num(1.75) - 1.75).abs() < f64::EPSILON);
/// assert!(parse_num("abc").is_nan());
/// ```
#[must_use]
pub fn parse_num<'a>(input: impl Into<NumericInput<'a>>) -> f64 {
    match input.into() {
        NumericInput::Number(value) => value,
        NumericInput::Text(text) => {
            let normalized = text.trim().replacen(',', ".", 1);
            if normalized.is_empty() {
                return f64::NAN;
            }
            normalized.parse::<f64>().unwrap_or(f64::NAN)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_and_period_separators() {
        assert!((parse_num("85,3") - 85.3).abs() < 1e-12);
        assert!((parse_num("85.3") - 85.3).abs() < 1e-12);
        assert!((parse_num("  118 ") - 118.0).abs() < 1e-12);
    }

    #[test]
    fn test_only_first_comma_is_normalized() {
        assert!(parse_num("1,234,5").is_nan());
    }

    #[test]
    fn test_unparseable_text_is_nan() {
        assert!(parse_num("").is_nan());
        assert!(parse_num("   ").is_nan());
        assert!(parse_num("zwölf").is_nan());
    }

    #[test]
    fn test_numbers_pass_through() {
        assert!(parse_num(f64::INFINITY).is_infinite());
        assert!((parse_num(-3.0) + 3.0).abs() < f64::EPSILON);
    }
}
