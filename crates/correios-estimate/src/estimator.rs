//! Delivery date arithmetic.

use chrono::{Datelike, Days, Local, NaiveDate};
use correios_types::QuoteResult;

/// Last weekday (Monday = 0) on which post offices accept packages.
///
/// Post offices open on Saturdays, so only a Sunday ship date is pushed
/// to Monday.
const LAST_SHIPPING_WEEKDAY: u32 = 5;

const SATURDAY: u32 = 5;
const SUNDAY: u32 = 6;

/// Estimates the delivery date of a package shipped from today.
///
/// `ship_offset_days` is the lead time before the package is posted and
/// `transit_days` the carrier's delivery time. Deliveries falling on a
/// Sunday, or on a Saturday unless `include_saturday_delivery` is set, are
/// moved to the following Monday.
///
/// Uses the local calendar date.
#[must_use]
pub fn estimate_delivery_date(
    ship_offset_days: u32,
    transit_days: u32,
    include_saturday_delivery: bool,
) -> NaiveDate {
    estimate_delivery_date_from(
        Local::now().date_naive(),
        ship_offset_days,
        transit_days,
        include_saturday_delivery,
    )
}

/// Estimates the delivery date of a package shipped from `today`.
///
/// See [`estimate_delivery_date`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use correios_estimate::estimate_delivery_date_from;
///
/// // Friday, one day in transit, no Saturday delivery: next Monday.
/// let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(estimate_delivery_date_from(friday, 0, 1, false), monday);
/// ```
#[must_use]
pub fn estimate_delivery_date_from(
    today: NaiveDate,
    ship_offset_days: u32,
    transit_days: u32,
    include_saturday_delivery: bool,
) -> NaiveDate {
    let mut ship_date = add_days(today, ship_offset_days);
    if weekday_index(ship_date) > LAST_SHIPPING_WEEKDAY {
        ship_date = add_days(ship_date, 1);
    }

    let delivery_date = add_days(ship_date, transit_days);
    let weekday = weekday_index(delivery_date);

    if include_saturday_delivery {
        if weekday == SUNDAY {
            return add_days(delivery_date, 1);
        }
    } else if weekday >= SATURDAY {
        return add_days(delivery_date, SUNDAY - weekday + 1);
    }

    delivery_date
}

/// Weekday index with Monday = 0 and Sunday = 6.
fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Saturates at [`NaiveDate::MAX`] instead of overflowing.
fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Delivery estimate parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Estimator {
    /// Days until the package is posted.
    pub ship_offset_days: u32,
    /// Days in transit.
    pub transit_days: u32,
    /// Whether the service delivers on Saturdays.
    pub include_saturday_delivery: bool,
}

impl Estimator {
    /// Creates an estimator.
    #[must_use]
    pub const fn new(
        ship_offset_days: u32,
        transit_days: u32,
        include_saturday_delivery: bool,
    ) -> Self {
        Self {
            ship_offset_days,
            transit_days,
            include_saturday_delivery,
        }
    }

    /// Creates an estimator from a parsed quote.
    ///
    /// Transit time and Saturday delivery come from the quote; the package is
    /// assumed to be posted today.
    #[must_use]
    pub const fn for_quote(quote: &QuoteResult) -> Self {
        Self::new(0, quote.delivery_time, quote.saturday_delivery)
    }

    /// Returns a copy with the given posting lead time.
    #[must_use]
    pub const fn with_ship_offset(mut self, days: u32) -> Self {
        self.ship_offset_days = days;
        self
    }

    /// Estimates the delivery date from today's local date.
    #[must_use]
    pub fn estimate(&self) -> NaiveDate {
        self.estimate_from(Local::now().date_naive())
    }

    /// Estimates the delivery date from the given start date.
    #[must_use]
    pub fn estimate_from(&self, today: NaiveDate) -> NaiveDate {
        estimate_delivery_date_from(
            today,
            self.ship_offset_days,
            self.transit_days,
            self.include_saturday_delivery,
        )
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(0, 1, false)
    }
}
