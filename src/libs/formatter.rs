//! Rounding and duration formatting helpers.
//!
//! These are the leaves of the timesheet calculator: every hour figure the
//! calculator produces passes through [`round_to_decimal`], and every
//! human-readable duration is rendered by [`format_duration`] or
//! [`format_clock`].
//!
//! ## Rounding
//!
//! Hour figures are rounded on their *decimal* representation rather than
//! on the binary value. Multiplying `7.005` by `100.0` yields
//! `700.4999999999999` in binary floating point, which would round down to
//! `7.00`. Instead the value is shifted through its shortest decimal string
//! (`"7.005e2"` parses to exactly `700.5`), rounded, and shifted back.
//!
//! ## Formats
//!
//! - `format_duration`: `"8h 30m"`, hours and minutes both floored
//! - `format_clock`: `"08:30:05"`, the live timer format
//! - `format_hours`: `"8.50"`, fixed precision for tables

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Rounds `value` to `decimals` places, ties away from zero.
///
/// NaN and infinities are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use punchclock::libs::formatter::round_to_decimal;
///
/// assert_eq!(round_to_decimal(7.005, 2), 7.01);
/// assert_eq!(round_to_decimal(1.875, 2), 1.88);
/// assert_eq!(round_to_decimal(8.0, 2), 8.0);
/// ```
pub fn round_to_decimal(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let shifted = format!("{}e{}", value, decimals).parse::<f64>();
    match shifted {
        Ok(scaled) if scaled.is_finite() => format!("{}e-{}", scaled.round(), decimals)
            .parse::<f64>()
            .unwrap_or_else(|_| naive_round(value, decimals)),
        _ => naive_round(value, decimals),
    }
}

// Fallback for magnitudes whose decimal shift overflows. Past the range of
// `f64` there is nothing left to round, so the value comes back as is.
fn naive_round(value: f64, decimals: u32) -> f64 {
    let factor = i32::try_from(decimals).map_or(f64::INFINITY, |exp| 10f64.powi(exp));
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Converts milliseconds to fractional hours.
pub fn ms_to_hours(duration_ms: i64) -> f64 {
    duration_ms as f64 / MS_PER_HOUR as f64
}

/// Formats a millisecond duration as `"{H}h {M}m"`.
///
/// Both components are floored: 8h 59m 59s renders as `"8h 59m"`.
/// The caller guarantees a non-negative input.
///
/// ```rust
/// use punchclock::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(30_600_000), "8h 30m");
/// assert_eq!(format_duration(0), "0h 0m");
/// ```
pub fn format_duration(duration_ms: i64) -> String {
    let hours = duration_ms / MS_PER_HOUR;
    let minutes = (duration_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    format!("{}h {}m", hours, minutes)
}

/// Formats a millisecond duration as a zero-padded `"HH:MM:SS"` timer.
///
/// Negative durations (e.g. breaks longer than the elapsed day) render as
/// `"00:00:00"`.
pub fn format_clock(duration_ms: i64) -> String {
    let duration_ms = duration_ms.max(0);
    let hours = duration_ms / MS_PER_HOUR;
    let minutes = (duration_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (duration_ms % MS_PER_MINUTE) / MS_PER_SECOND;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Formats an hour figure with two decimals, as shown in tables.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_on_decimal_representation() {
        assert_eq!(round_to_decimal(7.005, 2), 7.01);
        assert_eq!(round_to_decimal(7.335, 2), 7.34);
        assert_eq!(round_to_decimal(1.005, 2), 1.01);
        assert_eq!(round_to_decimal(1.875, 2), 1.88);
    }

    #[test]
    fn rounds_below_half_down() {
        assert_eq!(round_to_decimal(7.004, 2), 7.0);
        assert_eq!(round_to_decimal(8.333333, 2), 8.33);
    }

    #[test]
    fn rounds_ties_away_from_zero_for_negatives() {
        assert_eq!(round_to_decimal(-2.5, 0), -3.0);
        assert_eq!(round_to_decimal(-0.125, 2), -0.13);
    }

    #[test]
    fn rounding_zero_decimals() {
        assert_eq!(round_to_decimal(2.5, 0), 3.0);
        assert_eq!(round_to_decimal(2.4, 0), 2.0);
    }

    #[test]
    fn rounding_propagates_nan() {
        assert!(round_to_decimal(f64::NAN, 2).is_nan());
        assert_eq!(round_to_decimal(f64::INFINITY, 2), f64::INFINITY);
    }

    #[test]
    fn rounding_to_absurd_precision_keeps_value() {
        assert_eq!(round_to_decimal(9.5, 400), 9.5);
        assert_eq!(round_to_decimal(9.5, u32::MAX), 9.5);
    }

    #[test]
    fn rounding_tiny_values() {
        assert_eq!(round_to_decimal(0.0000001, 2), 0.0);
        assert_eq!(round_to_decimal(0.005, 2), 0.01);
    }

    #[test]
    fn duration_is_floored() {
        assert_eq!(format_duration(MS_PER_HOUR * 8 + MS_PER_MINUTE * 59 + 59_999), "8h 59m");
        assert_eq!(format_duration(MS_PER_MINUTE * 5), "0h 5m");
        assert_eq!(format_duration(MS_PER_HOUR * 27), "27h 0m");
    }

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(MS_PER_HOUR + MS_PER_MINUTE * 2 + 3_000), "01:02:03");
        assert_eq!(format_clock(-5), "00:00:00");
    }

    #[test]
    fn hours_conversion() {
        assert_eq!(ms_to_hours(MS_PER_HOUR * 9 + MS_PER_MINUTE * 30), 9.5);
        assert_eq!(format_hours(1.5), "1.50");
    }
}
