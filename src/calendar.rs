//! Calendar and Julian Day Module
//!
//! Gregorian calendar handling for the solar calculator: the month-length
//! table, leap-year rule, silent day clamping, and conversion between
//! Gregorian dates and the Julian Day Count used by the astronomical series.

use chrono::{Datelike, Utc};

// ===================== CONSTANTS =====================

/// Days per Julian year
pub const JULIAN_YEAR_DAYS: f64 = 365.25;

/// Mean month length used by the Gregorian/Julian conversion formulas
pub const JULIAN_MONTH_DAYS: f64 = 30.6001;

/// Year offset of the Julian epoch (4716 BCE)
pub const JULIAN_FIRST_YEAR_BCE: f64 = 4716.0;

/// Days per Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36525.0;

/// Julian Day Count of the J2000.0 epoch (2000-01-01 12:00 UTC)
pub const JDC_JAN_1_2000: f64 = 2451545.0;

/// Month metadata: name, length in a common year, three-letter abbreviation
pub struct Month {
    pub name: &'static str,
    pub num_days: u32,
    pub abbr: &'static str,
}

/// Fixed month-length table. February holds its common-year length;
/// [`CalendarDate::clamped`] applies the leap-year exception.
pub static MONTHS: [Month; 12] = [
    Month { name: "January", num_days: 31, abbr: "Jan" },
    Month { name: "February", num_days: 28, abbr: "Feb" },
    Month { name: "March", num_days: 31, abbr: "Mar" },
    Month { name: "April", num_days: 30, abbr: "Apr" },
    Month { name: "May", num_days: 31, abbr: "May" },
    Month { name: "June", num_days: 30, abbr: "Jun" },
    Month { name: "July", num_days: 31, abbr: "Jul" },
    Month { name: "August", num_days: 31, abbr: "Aug" },
    Month { name: "September", num_days: 30, abbr: "Sep" },
    Month { name: "October", num_days: 31, abbr: "Oct" },
    Month { name: "November", num_days: 30, abbr: "Nov" },
    Month { name: "December", num_days: 31, abbr: "Dec" },
];

// ===================== CALENDAR DATE =====================

/// A Gregorian calendar date. Plain value type; construction never fails,
/// out-of-range days are clamped silently when the date is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The current date on the UTC calendar.
    pub fn today_utc() -> Self {
        let now = Utc::now();
        Self { year: now.year(), month: now.month(), day: now.day() }
    }

    /// Clamp the date into the valid Gregorian range: month into 1-12, day
    /// down to the last day of the (leap-year-aware) month. Never an error;
    /// callers rely on this being silent.
    pub fn clamped(self) -> Self {
        let month = self.month.clamp(1, 12);
        let max_day = if month == 2 && is_leap_year(self.year) {
            29
        } else {
            MONTHS[(month - 1) as usize].num_days
        };
        Self { year: self.year, month, day: self.day.min(max_day) }
    }

    /// Convert to a Julian Day Count via the standard Gregorian formula:
    /// January and February are shifted into the preceding year, then
    /// `JDC = floor(365.25 (y + 4716)) + floor(30.6001 (m + 1)) + d + B - 1524.5`
    /// with the century correction `B = 2 - A + floor(A / 4)`, `A = floor(y / 100)`.
    ///
    /// The result lands on midnight UTC, i.e. a half-integer day count.
    pub fn julian_day_count(&self) -> f64 {
        let d = self.clamped();
        let (mut year, mut month) = (d.year as f64, d.month as f64);
        if month <= 2.0 {
            year -= 1.0;
            month += 12.0;
        }
        let a = (year / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        (JULIAN_YEAR_DAYS * (year + JULIAN_FIRST_YEAR_BCE)).floor()
            + (JULIAN_MONTH_DAYS * (month + 1.0)).floor()
            + d.day as f64
            + b
            - 1524.5
    }

    /// Inverse conversion, Julian Day Count back to a Gregorian date.
    /// Needed when a UTC offset pushes a sunrise/sunset onto an adjacent
    /// calendar day and the shifted day must be reported.
    pub fn from_julian_day_count(jdc: f64) -> Self {
        let z = (jdc + 0.5).floor();
        let f = (jdc + 0.5) - z;
        let a = if z < 2_299_161.0 {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / JULIAN_YEAR_DAYS).floor();
        let d = (JULIAN_YEAR_DAYS * c).floor();
        let e = ((b - d) / JULIAN_MONTH_DAYS).floor();
        let day = b - d - (JULIAN_MONTH_DAYS * e).floor() + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - JULIAN_FIRST_YEAR_BCE } else { c - 4715.0 };
        Self { year: year as i32, month: month as u32, day: day as u32 }
    }

    /// Short "DD Mon" label, used to annotate day-boundary-crossing times.
    pub fn short_label(&self) -> String {
        let abbr = MONTHS
            .get((self.month as usize).wrapping_sub(1))
            .map(|m| m.abbr)
            .unwrap_or("???");
        format!("{:02} {}", self.day, abbr)
    }

    /// Long "June 21, 2024" label for report headers.
    pub fn long_label(&self) -> String {
        let name = MONTHS
            .get((self.month as usize).wrapping_sub(1))
            .map(|m| m.name)
            .unwrap_or("???");
        format!("{} {}, {}", name, self.day, self.year)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ===================== TESTS =====================
