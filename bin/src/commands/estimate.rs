//! Estimate command implementation.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use correios_lib::prelude::*;

/// Print the estimated delivery date for the given lead and transit times.
pub(crate) fn estimate(
    ship_offset: u32,
    transit_days: u32,
    saturday: bool,
    from_date: Option<&str>,
) -> Result<()> {
    let estimator = Estimator::new(ship_offset, transit_days, saturday);

    let delivery = match from_date {
        Some(s) => {
            let start = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid start date: {s}"))?;
            estimator.estimate_from(start)
        }
        None => estimator.estimate(),
    };

    println!("{} ({})", delivery.format("%Y-%m-%d"), delivery.format("%A"));
    Ok(())
}
