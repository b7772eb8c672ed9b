//! Single parse policy for applicant-supplied numbers.
//!
//! Malformed or missing values never abort scoring: they read as `None`, and scorers that need a
//! number take `0.0`, which lands the applicant on the worst outcome for that factor.

use super::domain::RawNumber;

pub fn parse_number(raw: Option<&RawNumber>) -> Option<f64> {
    let value = match raw? {
        RawNumber::Number(value) => *value,
        RawNumber::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.replace(',', ".").parse::<f64>().ok()?
        }
        RawNumber::Malformed(_) => return None,
    };

    value.is_finite().then_some(value)
}

pub fn parse_or_zero(raw: Option<&RawNumber>) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}
