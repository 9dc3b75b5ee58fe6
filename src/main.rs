use chrono::{Datelike, Utc};
use chrono_english::{parse_date_string, Dialect};
use clap::Parser;

mod calendar;
mod cli;
mod output;
mod solar;

use calendar::CalendarDate;
use cli::{Args, DepInfo};
use solar::{calculate, TimeReference};

// ===================== MAIN =====================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.show_build_info {
        println!("Built from Git commit: {}\n", env!("BUILD_GIT_HASH"));
        const DEP_INFO_RAW: &str = include_str!(env!("BUILD_DEPS_PATH"));
        let deps: Vec<DepInfo> = serde_json::from_str(DEP_INFO_RAW)?;

        println!("Found {} dependencies.", deps.len());
        for dep in deps {
            println!("- {} v{}", dep.name, dep.version);
            if let Some(sum) = dep.checksum {
                println!("    Checksum: {}", sum);
            }
            if let Some(src) = dep.source {
                println!("    Source:   {}", src);
            }
        }
        return Ok(());
    }

    let latitude = args.latitude.ok_or("latitude is required")?;
    let longitude = args.longitude.ok_or("longitude is required")?;

    let date = resolve_date(&args)?;
    let time_ref = TimeReference { utc_offset_hours: args.utc_offset, dst_active: args.dst };

    let times = calculate(latitude, longitude, Some(date), time_ref);
    output::print_report(latitude, longitude, date, time_ref, &times);

    Ok(())
}

/// Resolve the calendar date from the CLI: a free-form --date string, or the
/// --year/--month/--day fields with any omitted field taken from the current
/// UTC date. The result is already clamped, so the printed date is the date
/// actually used.
fn resolve_date(args: &Args) -> Result<CalendarDate, Box<dyn std::error::Error>> {
    if let Some(s) = &args.date {
        let dt = parse_date_string(s, Utc::now(), Dialect::Us)?;
        return Ok(CalendarDate::new(dt.year(), dt.month(), dt.day()));
    }

    let today = CalendarDate::today_utc();
    Ok(CalendarDate::new(
        args.year.unwrap_or(today.year),
        args.month.unwrap_or(today.month),
        args.day.unwrap_or(today.day),
    )
    .clamped())
}
