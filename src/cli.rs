//! Command-Line Interface Module
//!
//! Handles argument parsing and validation for the solarclock binary.
//! Range checks live here, at the edge; the solar core itself accepts any
//! numeric input.

use clap::Parser;
use serde::Deserialize;

// ===================== CLI =====================

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Observer latitude in decimal degrees (-90 to 90)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_latitude,
          env = "SOLARCLOCK_LATITUDE", required_unless_present = "show_build_info")]
    pub latitude: Option<f64>,

    /// Observer longitude in decimal degrees (-180 to 180)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_longitude,
          env = "SOLARCLOCK_LONGITUDE", required_unless_present = "show_build_info")]
    pub longitude: Option<f64>,

    /// Date for calculations (e.g., "2024-12-25" or "today"); defaults to the
    /// current UTC date
    #[arg(long, conflicts_with_all = ["year", "month", "day"])]
    pub date: Option<String>,

    /// Calendar year (1 to 3000); defaults to the current UTC year
    #[arg(long, value_parser = parse_year)]
    pub year: Option<i32>,

    /// Calendar month (1 to 12); defaults to the current UTC month
    #[arg(long, value_parser = parse_month)]
    pub month: Option<u32>,

    /// Day of month (1 to 31, silently clamped to the month's last valid
    /// day); defaults to the current UTC day
    #[arg(long, value_parser = parse_day)]
    pub day: Option<u32>,

    /// UTC offset of the local clock in hours; fractional offsets are valid
    /// (e.g., 5.5 for India, -9.5 for the Marquesas)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true,
          value_parser = parse_utc_offset, env = "SOLARCLOCK_UTC_OFFSET")]
    pub utc_offset: f64,

    /// Daylight saving time is in effect (shifts the clock one hour)
    #[arg(long, env = "SOLARCLOCK_DST")]
    pub dst: bool,

    /// Show build info from Cargo.lock at time of building
    #[arg(long)]
    pub show_build_info: bool,
}

// Matches the structure serialized by build.rs
#[derive(Debug, Deserialize)]
pub struct DepInfo {
    pub name: String,
    pub version: String,
    pub checksum: Option<String>,
    pub source: Option<String>,
}

// ===================== CLI VALUE PARSERS =====================

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-90.0..=90.0).contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !(-180.0..=180.0).contains(&v) {
        return Err(format!("Longitude must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn parse_year(s: &str) -> Result<i32, String> {
    let v: i32 = s.parse().map_err(|_| format!("Invalid integer: {}", s))?;
    if !(1..=3000).contains(&v) {
        return Err(format!("Year must be between 1 and 3000, got {}", v));
    }
    Ok(v)
}

fn parse_month(s: &str) -> Result<u32, String> {
    let v: u32 = s.parse().map_err(|_| format!("Invalid integer: {}", s))?;
    if !(1..=12).contains(&v) {
        return Err(format!("Month must be between 1 and 12, got {}", v));
    }
    Ok(v)
}

fn parse_day(s: &str) -> Result<u32, String> {
    let v: u32 = s.parse().map_err(|_| format!("Invalid integer: {}", s))?;
    if !(1..=31).contains(&v) {
        return Err(format!("Day must be between 1 and 31, got {}", v));
    }
    Ok(v)
}

fn parse_utc_offset(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    // Real-world zones span -12 to +14; leave margin for exotic clocks
    if !(-18.0..=18.0).contains(&v) {
        return Err(format!("UTC offset must be between -18 and 18 hours, got {}", v));
    }
    Ok(v)
}
