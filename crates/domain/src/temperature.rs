//! Temperature scale conversion and display formatting.
//!
//! Every function here is pure and stateless. Sensor values are always
//! stored celsius-equivalent; these helpers exist solely for presentation
//! and for interpreting the TEMP_SCALE limit.

use std::fmt;

/// A temperature display scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scale {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// Interpret the numeric value of a TEMP_SCALE limit. Unrecognized
    /// codes are "not applicable" for the caller to handle.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Celsius),
            1 => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// The numeric value stored in a TEMP_SCALE limit.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Celsius => 0,
            Self::Fahrenheit => 1,
        }
    }

    /// The single-letter display suffix ("C" or "F").
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Celsius => f.write_str("celsius"),
            Self::Fahrenheit => f.write_str("fahrenheit"),
        }
    }
}

/// Convert a value read in `from` scale to celsius. NaN passes through
/// unchanged rather than becoming a conversion artifact.
#[must_use]
pub fn to_celsius(value: f64, from: Scale) -> f64 {
    match from {
        Scale::Celsius => value,
        Scale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

/// Convert a celsius value to the `to` scale. NaN passes through unchanged.
#[must_use]
pub fn from_celsius(value: f64, to: Scale) -> f64 {
    match to {
        Scale::Celsius => value,
        Scale::Fahrenheit => value * 9.0 / 5.0 + 32.0,
    }
}

/// Render a value already in `scale` to one decimal place followed by the
/// degree mark and scale suffix, e.g. `"21.4ºC"`.
///
/// Rounding is done by scaling: multiply by 10, `f64::round` (half away
/// from zero), divide by 10 — then format. This matches the historical
/// display behavior exactly, which plain format-string rounding does not.
#[must_use]
pub fn format(value: f64, scale: Scale) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    std::format!("{rounded:.1}º{}", scale.suffix())
}

/// Convert a stored celsius value to `scale`, then [`format`] it.
#[must_use]
pub fn format_from_celsius(value: f64, scale: Scale) -> String {
    format(from_celsius(value, scale), scale)
}

/// Snap a value to the nearest 0.5, for coarse threshold display.
/// Independent of scale.
#[must_use]
pub fn nearest_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_freezing_point_between_scales() {
        assert_eq!(to_celsius(32.0, Scale::Fahrenheit), 0.0);
        assert_eq!(from_celsius(0.0, Scale::Fahrenheit), 32.0);
    }

    #[test]
    fn should_leave_celsius_values_untouched() {
        for value in [-40.0, 0.0, 21.35, 100.0] {
            assert_eq!(to_celsius(value, Scale::Celsius), value);
            assert_eq!(from_celsius(value, Scale::Celsius), value);
        }
    }

    #[test]
    fn should_pass_nan_through_conversions() {
        assert!(to_celsius(f64::NAN, Scale::Fahrenheit).is_nan());
        assert!(from_celsius(f64::NAN, Scale::Fahrenheit).is_nan());
    }

    #[test]
    fn should_format_with_degree_mark_and_suffix() {
        assert_eq!(format(21.35, Scale::Celsius), "21.4ºC");
        assert!(format_from_celsius(37.0, Scale::Fahrenheit).ends_with("ºF"));
    }

    #[test]
    fn should_format_body_temperature_from_celsius() {
        // 37ºC is 98.6ºF exactly.
        assert_eq!(format_from_celsius(37.0, Scale::Fahrenheit), "98.6ºF");
    }

    #[test]
    fn should_round_half_away_from_zero_when_formatting() {
        assert_eq!(format(21.25, Scale::Celsius), "21.3ºC");
        assert_eq!(format(-21.25, Scale::Celsius), "-21.3ºC");
    }

    #[test]
    fn should_snap_to_nearest_half() {
        assert_eq!(nearest_half(2.2), 2.0);
        assert_eq!(nearest_half(2.3), 2.5);
        assert_eq!(nearest_half(-1.7), -1.5);
    }

    #[test]
    fn should_snap_quarter_boundary_away_from_zero() {
        // 2.25 * 2 = 4.5; f64::round rounds half away from zero.
        assert_eq!(nearest_half(2.25), 2.5);
    }

    #[test]
    fn should_map_scale_codes_both_ways() {
        assert_eq!(Scale::from_code(0), Some(Scale::Celsius));
        assert_eq!(Scale::from_code(1), Some(Scale::Fahrenheit));
        assert_eq!(Scale::from_code(7), None);
        assert_eq!(Scale::Fahrenheit.code(), 1);
    }
}
