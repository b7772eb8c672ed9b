use super::domain::{GradingScheme, RawNumber};
use super::numeric::parse_or_zero;

pub const GPA_SCALE: f64 = 4.0;

/// Convert a reported average to the 4.0 scale. Unparseable input normalizes to 0.
pub fn normalize(raw: Option<&RawNumber>, scheme: GradingScheme) -> f64 {
    let value = parse_or_zero(raw);
    let normalized = match scheme {
        GradingScheme::FivePoint => value / 5.0 * GPA_SCALE,
        GradingScheme::FourPoint => value,
        GradingScheme::Percentage => value / 100.0 * GPA_SCALE,
    };
    normalized.clamp(0.0, GPA_SCALE)
}
