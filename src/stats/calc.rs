use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::{Configuration, Mode};

/// Years shown in LIFE mode.
pub const LIFE_YEARS: i64 = 80;
/// Weeks per row in LIFE mode.
pub const WEEKS_PER_YEAR: i64 = 52;
/// Total marks in LIFE mode.
pub const LIFE_WEEKS: i64 = LIFE_YEARS * WEEKS_PER_YEAR;
/// Days in YEAR mode; leap years are not special-cased.
pub const YEAR_DAYS: i64 = 365;

/// Derived counters for one render. Never cached: recomputed from "now" every time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeStats {
    pub total: i64,
    pub passed: i64,
    /// `total - passed`; not clamped, so it goes negative past the LIFE horizon.
    pub remaining: i64,
    pub unit: &'static str,
}

impl TimeStats {
    /// Fraction of the horizon that has passed. Values above 1 are kept.
    pub fn progress(&self) -> f64 {
        self.passed as f64 / self.total.max(1) as f64
    }
}

/// Compute statistics for `config.mode` as of the local wall-clock instant `now`.
pub fn compute_stats(config: &Configuration, now: NaiveDateTime) -> TimeStats {
    match config.mode {
        Mode::Life => life_stats(config.birth_date(), now),
        Mode::Year => year_stats(now),
        // Challenge start tracking does not exist yet; these are the historical fixed values.
        Mode::Hard75 => TimeStats {
            total: 75,
            passed: 12,
            remaining: 63,
            unit: "Day",
        },
    }
}

/// Whole weeks between local midnight of `birth` and `now`.
///
/// Both ends are wall-clock local time. A birth date anchored at UTC midnight instead would
/// move each week boundary by the zone offset, so near a boundary the count can differ by
/// one outside UTC.
fn life_stats(birth: NaiveDate, now: NaiveDateTime) -> TimeStats {
    let born = birth.and_time(NaiveTime::MIN);
    let elapsed = (now - born).abs();
    let passed = elapsed.num_weeks();
    TimeStats {
        total: LIFE_WEEKS,
        passed,
        remaining: LIFE_WEEKS - passed,
        unit: "Weeks",
    }
}

fn year_stats(now: NaiveDateTime) -> TimeStats {
    // Day 0 is December 31st of the previous year, so January 1st is day 1.
    let day_zero = NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.and_time(NaiveTime::MIN));
    let passed = match day_zero {
        Some(start) => (now - start).num_days(),
        None => i64::from(now.ordinal()),
    };
    TimeStats {
        total: YEAR_DAYS,
        passed,
        remaining: YEAR_DAYS - passed,
        unit: "Days",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stats/calc.rs"]
mod tests;
