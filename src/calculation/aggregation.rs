//! Tripsheet aggregation.
//!
//! Recomputes every entry's derived fields from its raw readings and folds
//! the entries into a [`TripsheetSummary`]. The input is never mutated: a
//! fresh entry list is returned alongside the summary, so stale derived values
//! cannot survive a change to the raw readings.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::models::{
    AggregatedTripsheet, AuditWarning, EntryStatus, TripEntry, TripsheetPeriod, TripsheetSummary,
};

use super::day_detection::{day_name, get_day_type};
use super::time_arithmetic::{driver_extra_hours, elapsed_hours, extra_hours};

/// Warning code for entries dated outside the tripsheet's month.
pub const ENTRY_OUTSIDE_PERIOD: &str = "ENTRY_OUTSIDE_PERIOD";

fn round_km(km: Decimal) -> Decimal {
    km.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Recomputes the derived fields of a single entry.
///
/// Day name and type always follow the date. Kilometre and hour figures are
/// only filled for working-status entries that carry both readings; off and
/// pending days keep them unset.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::{recompute_entry, DEFAULT_EXTRA_HOURS_THRESHOLD};
/// use fleet_billing::models::{EntryStatus, TripEntry};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let entry = TripEntry::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), EntryStatus::Working)
///     .with_km(Decimal::new(1000, 0), Decimal::new(1180, 0))
///     .with_times(
///         NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
///         NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
///     );
///
/// let entry = recompute_entry(&entry, DEFAULT_EXTRA_HOURS_THRESHOLD);
/// assert_eq!(entry.day_of_week.as_deref(), Some("Monday"));
/// assert_eq!(entry.total_km, Some(Decimal::new(180, 0)));
/// assert_eq!(entry.total_hours, Some(Decimal::new(135, 1)));
/// assert_eq!(entry.extra_hours, Some(Decimal::new(35, 1)));
/// assert_eq!(entry.driver_extra_hours, Some(Decimal::new(15, 1)));
/// ```
pub fn recompute_entry(entry: &TripEntry, extra_hours_threshold: Decimal) -> TripEntry {
    let mut entry = entry.clone();
    entry.clear_derived();

    entry.day_of_week = Some(day_name(entry.date).to_string());
    entry.day_type = Some(get_day_type(entry.date));

    if !entry.is_working() {
        return entry;
    }

    if let (Some(starting), Some(closing)) = (entry.starting_km, entry.closing_km) {
        let starting = round_km(starting);
        let closing = round_km(closing);
        entry.starting_km = Some(starting);
        entry.closing_km = Some(closing);
        entry.total_km = Some(closing - starting);
    }

    if let (Some(start), Some(end)) = (entry.starting_time, entry.closing_time) {
        let hours = elapsed_hours(start, end);
        entry.total_hours = Some(hours);
        entry.extra_hours = Some(extra_hours(hours, extra_hours_threshold));
        entry.driver_extra_hours = Some(driver_extra_hours(hours));
    }

    entry
}

/// Folds recomputed entries into month totals.
///
/// Every entry lands in exactly one status bucket. Kilometres and hours are
/// summed over working-status entries regardless of day type; fuel is summed
/// over all entries.
pub fn summarize_entries(entries: &[TripEntry]) -> TripsheetSummary {
    let mut summary = TripsheetSummary::default();

    for entry in entries {
        match entry.status {
            EntryStatus::Working => {
                summary.total_working_days += 1;
                summary.total_kms += entry.total_km.unwrap_or_default();
                summary.total_hours += entry.total_hours.unwrap_or_default();
                summary.total_extra_hours += entry.extra_hours.unwrap_or_default();
                summary.total_driver_extra_hours += entry.driver_extra_hours.unwrap_or_default();
            }
            EntryStatus::Off => summary.total_off_days += 1,
            EntryStatus::Pending => summary.total_pending_days += 1,
        }

        summary.total_fuel_litres += entry.fuel_litres.unwrap_or_default();
        summary.total_fuel_amount += entry.fuel_amount.unwrap_or_default();
    }

    summary
}

/// Aggregates a month of trip entries.
///
/// # Arguments
///
/// * `period` - The month the tripsheet covers
/// * `entries` - The raw entries, in any order
/// * `extra_hours_threshold` - The vehicle type's billing threshold per day
///
/// # Returns
///
/// An [`AggregatedTripsheet`] with entries recomputed and sorted by date, the
/// summary over them, and a warning for each entry dated outside `period`.
/// Such entries are still counted.
///
/// Entries are expected to have passed [`TripEntry::validate`], whose caps
/// keep the month totals well inside `Decimal` range.
///
/// # Example
///
/// ```
/// use fleet_billing::calculation::{aggregate_tripsheet, DEFAULT_EXTRA_HOURS_THRESHOLD};
/// use fleet_billing::models::{TripsheetPeriod, TripsheetSummary};
///
/// let period = TripsheetPeriod { month: 3, year: 2025 };
/// let result = aggregate_tripsheet(period, &[], DEFAULT_EXTRA_HOURS_THRESHOLD);
/// assert_eq!(result.summary, TripsheetSummary::default());
/// ```
pub fn aggregate_tripsheet(
    period: TripsheetPeriod,
    entries: &[TripEntry],
    extra_hours_threshold: Decimal,
) -> AggregatedTripsheet {
    let mut recomputed: Vec<TripEntry> = entries
        .iter()
        .map(|entry| recompute_entry(entry, extra_hours_threshold))
        .collect();
    recomputed.sort_by_key(|entry| entry.date);

    let warnings: Vec<AuditWarning> = recomputed
        .iter()
        .filter(|entry| !period.contains(entry.date))
        .map(|entry| AuditWarning {
            code: ENTRY_OUTSIDE_PERIOD.to_string(),
            message: format!("Entry dated {} falls outside tripsheet month {}", entry.date, period),
            severity: "medium".to_string(),
        })
        .collect();

    let summary = summarize_entries(&recomputed);

    debug!(
        period = %period,
        entries = recomputed.len(),
        working_days = summary.total_working_days,
        total_kms = %summary.total_kms,
        total_hours = %summary.total_hours,
        warnings = warnings.len(),
        "Aggregated tripsheet"
    );

    AggregatedTripsheet {
        period,
        entries: recomputed,
        summary,
        warnings,
    }
}
