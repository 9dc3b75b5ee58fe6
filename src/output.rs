//! Output Formatting Module
//!
//! Clock-time text rendering and the terminal report. This module is a
//! consumer of the solar core: interpreting the polar sentinel as "sun up
//! all day" versus "down all day" happens here, not in the calculator.

use crate::calendar::CalendarDate;
use crate::solar::{ClockTime, SolarTimes, SunEvent, TimeReference};

// ===================== TIME FORMATTING =====================

/// Text precision for a clock time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimePrecision {
    /// "HH:MM", seconds rounded into the minute
    Minutes,
    /// "HH:MM:SS"
    Seconds,
}

/// Render minutes-of-day as zero-padded clock text.
///
/// Seconds round half-up, and the carry cascades: an overflowing second bumps
/// the minute, an overflowing minute bumps the hour, and 1440 minutes wraps
/// to "00:00" (the next-day sense of midnight).
///
/// # Arguments
/// * `minutes` - Minutes of day, expected in [0, 1440)
/// * `precision` - Whether to include the seconds field
pub fn format_time_txt(minutes: f64, precision: TimePrecision) -> String {
    let float_hour = minutes / 60.0;
    let mut hour = float_hour.floor();
    let float_minute = 60.0 * (float_hour - float_hour.floor());
    let mut minute = float_minute.floor();
    let float_sec = 60.0 * (float_minute - float_minute.floor());
    let mut second = (float_sec + 0.5).floor();

    if second > 59.0 {
        second = 0.0;
        minute += 1.0;
    }
    if precision == TimePrecision::Minutes && second >= 30.0 {
        minute += 1.0;
    }
    if minute > 59.0 {
        minute = 0.0;
        hour += 1.0;
    }
    if hour >= 24.0 {
        hour -= 24.0;
    }

    // Casts saturate: a non-finite input renders as "00:00" rather than
    // panicking, matching the never-fails contract of the core.
    let (hour, minute, second) = (hour as u32, minute as u32, second as u32);
    match precision {
        TimePrecision::Minutes => format!("{:02}:{:02}", hour, minute),
        TimePrecision::Seconds => format!("{:02}:{:02}:{:02}", hour, minute, second),
    }
}

/// Rise/set text: a bare "HH:MM", or "HH:MM DD Mon" when the event falls on
/// an adjacent calendar day. `None` for the polar sentinel.
pub fn format_sun_event(event: &SunEvent) -> Option<String> {
    match event {
        SunEvent::At(t) => Some(format_time_txt(t.minutes(), TimePrecision::Minutes)),
        SunEvent::OnAdjacentDay { time, date } => Some(format!(
            "{} {}",
            format_time_txt(time.minutes(), TimePrecision::Minutes),
            date.short_label()
        )),
        SunEvent::Polar => None,
    }
}

/// Clock text for a [`ClockTime`].
pub fn format_clock_time(t: ClockTime, precision: TimePrecision) -> String {
    format_time_txt(t.minutes(), precision)
}

/// Format a duration given in fractional minutes as "Xh Ym Zs" style text,
/// zero components omitted ("12h 7m 30s", "45m", "0s").
pub fn format_day_length(minutes: f64) -> String {
    let total_seconds = (minutes * 60.0).round() as i64;
    if total_seconds == 0 {
        return "0s".to_string();
    }

    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;

    let mut parts = Vec::new();
    if h > 0 {
        parts.push(format!("{}h", h));
    }
    if m > 0 {
        parts.push(format!("{}m", m));
    }
    if s > 0 {
        parts.push(format!("{}s", s));
    }
    parts.join(" ")
}

// ===================== POLAR INTERPRETATION =====================

/// Decide what a polar sentinel means for display. Hemisphere plus month is
/// a rough proxy for the bright half of the year (April through September in
/// the north) and is unreliable near the equinoxes.
pub fn polar_condition(lat_deg: f64, month: u32) -> &'static str {
    let northern_bright_half = (4..=9).contains(&month);
    if (lat_deg >= 0.0) == northern_bright_half {
        "Polar Day (Midnight Sun)."
    } else {
        "Polar Night."
    }
}

// ===================== TERMINAL REPORT =====================

/// Print the full report for one locality and date.
pub fn print_report(
    lat: f64,
    lon: f64,
    date: CalendarDate,
    time_ref: TimeReference,
    times: &SolarTimes,
) {
    println!("Location  : lat={:.6}, lon={:.6}", lat, lon);
    println!("Date      : {} ({})", date, date.long_label());
    println!(
        "UTC offset: {:+.2} h{}",
        time_ref.utc_offset_hours,
        if time_ref.dst_active { " (DST)" } else { "" }
    );
    println!();

    match (format_sun_event(&times.sunrise), format_sun_event(&times.sunset)) {
        (Some(rise_txt), Some(set_txt)) => {
            println!("Sunrise   : {}", rise_txt);
            println!("Solar noon: {}", format_clock_time(times.solar_noon, TimePrecision::Seconds));
            println!("Sunset    : {}", set_txt);

            if let (SunEvent::At(rise), SunEvent::At(set)) = (&times.sunrise, &times.sunset) {
                let len = set.minutes() - rise.minutes();
                if len > 0.0 {
                    println!("Daylight  : {}", format_day_length(len));
                }
            }
        }
        _ => {
            println!("{}", polar_condition(lat, date.month));
            println!("Solar noon: {}", format_clock_time(times.solar_noon, TimePrecision::Seconds));
        }
    }
}

// ===================== TESTS =====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::{calculate, SunEvent};

    #[test]
    fn test_format_time_txt_basic() {
        assert_eq!(format_time_txt(0.0, TimePrecision::Minutes), "00:00");
        assert_eq!(format_time_txt(0.0, TimePrecision::Seconds), "00:00:00");
        assert_eq!(format_time_txt(725.5, TimePrecision::Seconds), "12:05:30");
        assert_eq!(format_time_txt(725.5, TimePrecision::Minutes), "12:06");
        assert_eq!(format_time_txt(1439.0, TimePrecision::Minutes), "23:59");
    }

    #[test]
    fn test_format_time_txt_rounding_carry() {
        // 59.6 s rounds up and carries into the minute
        assert_eq!(format_time_txt(10.0 + 59.6 / 60.0, TimePrecision::Seconds), "00:11:00");
        // ...and cascades through the minute into the hour
        assert_eq!(format_time_txt(719.0 + 59.7 / 60.0, TimePrecision::Seconds), "12:00:00");
        // Minutes precision rounds 30 s up
        assert_eq!(format_time_txt(725.49, TimePrecision::Minutes), "12:05");
        assert_eq!(format_time_txt(725.51, TimePrecision::Minutes), "12:06");
    }

    #[test]
    fn test_format_time_txt_midnight_wrap() {
        // The carry past 23:59:59.5 lands on midnight of the next day
        assert_eq!(format_time_txt(1439.999, TimePrecision::Minutes), "00:00");
        assert_eq!(format_time_txt(1439.999, TimePrecision::Seconds), "00:00:00");
    }

    #[test]
    fn test_format_time_txt_never_panics_on_degenerate_input() {
        let _ = format_time_txt(f64::NAN, TimePrecision::Seconds);
        let _ = format_time_txt(f64::INFINITY, TimePrecision::Minutes);
    }

    #[test]
    fn test_format_day_length() {
        assert_eq!(format_day_length(727.0), "12h 7m");
        assert_eq!(format_day_length(60.0), "1h");
        assert_eq!(format_day_length(45.0), "45m");
        assert_eq!(format_day_length(0.0), "0s");
    }

    #[test]
    fn test_format_day_length_carries_seconds() {
        // Rise/set minutes are fractional; the seconds survive into the text
        assert_eq!(format_day_length(727.5), "12h 7m 30s");
        assert_eq!(format_day_length(45.25), "45m 15s");
        assert_eq!(format_day_length(0.75), "45s");
    }

    #[test]
    fn test_polar_condition_heuristic() {
        assert_eq!(polar_condition(75.0, 6), "Polar Day (Midnight Sun).");
        assert_eq!(polar_condition(75.0, 12), "Polar Night.");
        assert_eq!(polar_condition(-75.0, 6), "Polar Night.");
        assert_eq!(polar_condition(-75.0, 12), "Polar Day (Midnight Sun).");
    }

    #[test]
    fn test_sun_event_text_shapes() {
        use crate::calendar::CalendarDate;
        use crate::solar::TimeReference;

        // Plain same-day event: bare HH:MM
        let plain = calculate(
            0.0,
            0.0,
            Some(CalendarDate::new(2024, 8, 15)),
            TimeReference::default(),
        );
        let rise_txt = format_sun_event(&plain.sunrise).unwrap();
        assert_eq!(rise_txt.len(), 5, "unexpected shape: {}", rise_txt);

        // Day-boundary event carries the "DD Mon" suffix
        let shifted = calculate(
            0.0,
            0.0,
            Some(CalendarDate::new(2024, 8, 15)),
            TimeReference { utc_offset_hours: 13.0, dst_active: false },
        );
        let set_txt = format_sun_event(&shifted.sunset).unwrap();
        assert!(set_txt.ends_with("16 Aug"), "unexpected suffix: {}", set_txt);

        // Polar sentinel has no text
        let polar = calculate(
            75.0,
            0.0,
            Some(CalendarDate::new(2024, 6, 21)),
            TimeReference::default(),
        );
        assert_eq!(polar.sunrise, SunEvent::Polar);
        assert!(format_sun_event(&polar.sunrise).is_none());
    }
}
