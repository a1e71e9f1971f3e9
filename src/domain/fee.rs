//! Fee computation for a closed stay.

use chrono::NaiveDateTime;

use super::entities::SizeClass;
use super::tariff::{HOURS_PER_DAY, Tariff};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Whole hours billed for a stay, rounded to the nearest hour (half up).
///
/// Spans that are zero or negative bill as zero hours.
pub fn billable_hours(start: NaiveDateTime, end: NaiveDateTime) -> u64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    ((millis + MILLIS_PER_HOUR / 2) / MILLIS_PER_HOUR) as u64
}

/// Turns a stay into a payment using a [`Tariff`].
#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    tariff: Tariff,
}

impl FeeCalculator {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Computes the payment for a stay from `start` to `end` in a `size` slot.
    ///
    /// - up to the flat window: the base fee;
    /// - under a day: base fee plus the hourly rate for each hour past the
    ///   flat window;
    /// - a day or more: the daily rate per full day plus the hourly rate for
    ///   the remaining hours. The base fee is added and then taken back out,
    ///   so a 24h stay costs exactly one daily rate.
    pub fn compute_fee(&self, start: NaiveDateTime, end: NaiveDateTime, size: SizeClass) -> u64 {
        let hours = billable_hours(start, end);
        let rate = self.tariff.hourly_rate(size);
        let base = self.tariff.base_fee;

        if hours >= HOURS_PER_DAY {
            base + (hours / HOURS_PER_DAY) * self.tariff.daily_rate + (hours % HOURS_PER_DAY) * rate
                - base
        } else if hours > self.tariff.flat_hours {
            base + (hours - self.tariff.flat_hours) * rate
        } else {
            base
        }
    }
}
