//! Solar Position Calculation Module
//!
//! The computational core: given a latitude, longitude, calendar date and UTC
//! offset, solve for local solar noon and apparent sunrise/sunset using the
//! NOAA solar calculator method (equation of time from the orbital series,
//! solar declination, hour-angle solution at the 90.833° apparent zenith).
//!
//! Everything here is a pure function over floats. Degenerate inputs (extreme
//! latitudes, out-of-range longitudes) degrade to the polar sentinel or to
//! degenerate numeric output; nothing panics and nothing is validated.

use crate::calendar::{CalendarDate, JDC_JAN_1_2000, JULIAN_CENTURY_DAYS};

// ===================== CONSTANTS =====================

/// Minutes in a day
pub const DAY_MINS: f64 = 1440.0;

/// Zenith angle of apparent sunrise/sunset: 90° plus standard atmospheric
/// refraction (34') plus the solar disk semi-diameter (16')
const SUNRISE_ZENITH_DEG: f64 = 90.833;

// ===================== TYPES =====================

/// Conversion from universal solar time to local clock time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeReference {
    /// Signed UTC offset in hours; fractional offsets are valid (5.5 = India)
    pub utc_offset_hours: f64,
    /// Daylight saving time shifts the clock one more hour
    pub dst_active: bool,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self { utc_offset_hours: 0.0, dst_active: false }
    }
}

impl TimeReference {
    fn offset_mins(&self) -> f64 {
        self.utc_offset_hours * 60.0 + if self.dst_active { 60.0 } else { 0.0 }
    }
}

/// A local clock time held as minutes of day. Values are in [0, 1440) on
/// every finite computation path; text rendering lives in the output module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockTime {
    minutes: f64,
}

impl ClockTime {
    pub(crate) fn new(minutes: f64) -> Self {
        Self { minutes }
    }

    /// Minutes of day, fractional.
    pub fn minutes(&self) -> f64 {
        self.minutes
    }
}

/// A sunrise or sunset result for one locality and date.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SunEvent {
    /// The event occurs on the requested local calendar day.
    At(ClockTime),
    /// The UTC offset pushed the event onto an adjacent calendar day;
    /// `date` is the day the event actually falls on.
    OnAdjacentDay { time: ClockTime, date: CalendarDate },
    /// No rise/set solution exists: polar day or polar night. Whether the
    /// sun is up or down all day is for the caller to decide from
    /// hemisphere and season.
    Polar,
}

impl SunEvent {
    /// Minutes of day regardless of which calendar day the event falls on.
    pub fn minutes(&self) -> Option<f64> {
        match self {
            SunEvent::At(t) => Some(t.minutes()),
            SunEvent::OnAdjacentDay { time, .. } => Some(time.minutes()),
            SunEvent::Polar => None,
        }
    }
}

/// Output of [`calculate`]: the three solar times for one locality and date.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolarTimes {
    pub solar_noon: ClockTime,
    pub sunrise: SunEvent,
    pub sunset: SunEvent,
}

#[derive(Clone, Copy, PartialEq)]
enum RiseSet {
    Sunrise,
    Sunset,
}

// ===================== PUBLIC ENTRY POINT =====================

/// Compute local solar noon, sunrise and sunset.
///
/// # Arguments
/// * `lat_deg` - Observer latitude in degrees, north positive
/// * `lon_deg` - Observer longitude in degrees, east positive
/// * `date` - Calendar date; `None` means the current UTC date. Out-of-range
///   days are clamped to the month's last valid day.
/// * `time_ref` - UTC offset and DST flag for the local clock
///
/// Never fails: polar day/night yields [`SunEvent::Polar`] for the rise/set
/// fields, and non-finite coordinate input flows through as degenerate
/// output rather than an error.
pub fn calculate(
    lat_deg: f64,
    lon_deg: f64,
    date: Option<CalendarDate>,
    time_ref: TimeReference,
) -> SolarTimes {
    let date = date.unwrap_or_else(CalendarDate::today_utc).clamped();
    let jdc = date.julian_day_count();

    SolarTimes {
        solar_noon: solar_noon(jdc, lon_deg, time_ref),
        sunrise: apparent_rise_set(RiseSet::Sunrise, jdc, lat_deg, lon_deg, time_ref),
        sunset: apparent_rise_set(RiseSet::Sunset, jdc, lat_deg, lon_deg, time_ref),
    }
}

// ===================== SOLAR NOON =====================

/// Local solar noon in clock minutes, wrapped into [0, 1440).
///
/// Evaluates the equation of time at the longitude-shifted day count for a
/// first estimate, then once more at the estimated noon itself.
fn solar_noon(jdc: f64, lon_deg: f64, time_ref: TimeReference) -> ClockTime {
    let t_noon = julian_centuries(jdc - lon_deg / 360.0);
    let noon_offset = 720.0 - 4.0 * lon_deg - equation_of_time(t_noon);
    let t_refined = julian_centuries(jdc + noon_offset / DAY_MINS);
    let mut local = 720.0 - 4.0 * lon_deg - equation_of_time(t_refined) + time_ref.offset_mins();

    while local < 0.0 {
        local += DAY_MINS;
    }
    while local >= DAY_MINS {
        local -= DAY_MINS;
    }
    ClockTime::new(local)
}

// ===================== SUNRISE / SUNSET =====================

/// Solve one apparent rise/set event, refining the hour-angle solution once
/// with the first estimate's day fraction, then converting to local time.
fn apparent_rise_set(
    kind: RiseSet,
    jdc: f64,
    lat_deg: f64,
    lon_deg: f64,
    time_ref: TimeReference,
) -> SunEvent {
    let first_pass = rise_set_utc(kind, jdc, lat_deg, lon_deg);
    let utc_mins = rise_set_utc(kind, jdc + first_pass / DAY_MINS, lat_deg, lon_deg);

    // The hour-angle acos goes NaN when the sun never crosses the horizon
    // on this date (polar day/night), and the NaN propagates to here.
    if !utc_mins.is_finite() {
        return SunEvent::Polar;
    }

    let mut local = utc_mins + time_ref.offset_mins();
    if (0.0..DAY_MINS).contains(&local) {
        return SunEvent::At(ClockTime::new(local));
    }

    // The UTC offset pushed the local time onto a different calendar day
    // than the requested one. Shift by whole days and report the day the
    // event actually falls on.
    let mut day_cnt = jdc;
    let step = if local < 0.0 { 1.0 } else { -1.0 };
    while local < 0.0 || local >= DAY_MINS {
        local += step * DAY_MINS;
        day_cnt -= step;
    }
    SunEvent::OnAdjacentDay {
        time: ClockTime::new(local),
        date: CalendarDate::from_julian_day_count(day_cnt),
    }
}

/// UTC minutes of the rise/set event for the given day count, from
/// `720 - 4 (longitude + hourAngle) - equationOfTime`. NaN when no solution
/// exists at this latitude and declination.
fn rise_set_utc(kind: RiseSet, jdc: f64, lat_deg: f64, lon_deg: f64) -> f64 {
    let t = julian_centuries(jdc);
    let eq_time = equation_of_time(t);
    let declination = sun_declination(t);
    let mut hour_angle = hour_angle_sunrise(lat_deg, declination);
    if kind == RiseSet::Sunset {
        hour_angle = -hour_angle;
    }
    let delta = lon_deg + hour_angle.to_degrees();
    720.0 - 4.0 * delta - eq_time
}

/// Hour angle of apparent sunrise in radians (negate for sunset).
/// The acos argument leaves [-1, 1] in polar day/night, yielding NaN.
fn hour_angle_sunrise(lat_deg: f64, declination_deg: f64) -> f64 {
    let lat = lat_deg.to_radians();
    let decl = declination_deg.to_radians();
    let cos_ha =
        SUNRISE_ZENITH_DEG.to_radians().cos() / (lat.cos() * decl.cos()) - lat.tan() * decl.tan();
    cos_ha.acos()
}

// ===================== ORBITAL SERIES =====================
// NOAA low-precision series for the sun, evaluated at Julian centuries since
// J2000.0. Angles in degrees unless noted.

fn julian_centuries(jdc: f64) -> f64 {
    (jdc - JDC_JAN_1_2000) / JULIAN_CENTURY_DAYS
}

/// Geometric mean longitude of the sun, wrapped into [0, 360].
fn geom_mean_long_sun(t: f64) -> f64 {
    let mut l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    while l0 > 360.0 {
        l0 -= 360.0;
    }
    while l0 < 0.0 {
        l0 += 360.0;
    }
    l0
}

/// Geometric mean anomaly of the sun.
fn geom_mean_anomaly_sun(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit, unitless.
fn eccentricity_earth_orbit(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of center for the sun.
fn sun_eq_of_center(t: f64) -> f64 {
    let m = geom_mean_anomaly_sun(t).to_radians();
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

fn sun_true_long(t: f64) -> f64 {
    geom_mean_long_sun(t) + sun_eq_of_center(t)
}

/// Apparent longitude of the sun, corrected for nutation and aberration.
fn sun_apparent_long(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    sun_true_long(t) - 0.00569 - 0.00478 * omega.to_radians().sin()
}

/// Mean obliquity of the ecliptic.
fn mean_obliquity_of_ecliptic(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity corrected for the nutation term.
fn obliquity_correction(t: f64) -> f64 {
    let omega = 125.04 - 1934.136 * t;
    mean_obliquity_of_ecliptic(t) + 0.00256 * omega.to_radians().cos()
}

/// Declination of the sun in degrees.
fn sun_declination(t: f64) -> f64 {
    let e = obliquity_correction(t).to_radians();
    let lambda = sun_apparent_long(t).to_radians();
    (e.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time: apparent minus mean solar time, in minutes.
fn equation_of_time(t: f64) -> f64 {
    let epsilon = obliquity_correction(t);
    let l0 = geom_mean_long_sun(t).to_radians();
    let e = eccentricity_earth_orbit(t);
    let m = geom_mean_anomaly_sun(t).to_radians();

    let y = (epsilon.to_radians() / 2.0).tan().powi(2);

    let e_time = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    e_time.to_degrees() * 4.0
}

// ===================== TESTS =====================
