//! Time statistics: how many units of the chosen horizon have passed at a given instant.

pub(crate) mod calc;

pub use calc::{LIFE_WEEKS, LIFE_YEARS, TimeStats, WEEKS_PER_YEAR, YEAR_DAYS, compute_stats};
