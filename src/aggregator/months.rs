//! Calendar-month keys and month extraction.

use chrono::{Datelike, NaiveDate};
use log::{debug, warn};
use serde::{Serialize, Serializer};
use std::fmt;

/// A calendar year-month, displayed as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// True if `date` falls inside this calendar month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How distinct months are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthOrder {
    /// First occurrence in the ledger, then reversed.
    /// Chronological only when the ledger is sorted newest-first.
    #[default]
    SourceReversed,

    /// Ascending calendar order
    Chronological,
}

/// Extract distinct months from transaction dates
///
/// **Public** - first stage of the aggregation pipeline
///
/// With `MonthOrder::SourceReversed` the months keep their first-occurrence
/// order and the list is reversed at the end; no sorting happens. A warning
/// is logged when that order is not chronological.
pub fn extract_months<I>(dates: I, order: MonthOrder) -> Vec<MonthKey>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut months: Vec<MonthKey> = Vec::new();

    for date in dates {
        let key = MonthKey::of(date);
        if !months.contains(&key) {
            months.push(key);
        }
    }

    match order {
        MonthOrder::SourceReversed => {
            months.reverse();
            if !is_chronological(&months) {
                warn!(
                    "Month order follows ledger order and is not chronological ({}); \
                     sort the ledger newest-first or use chronological month order",
                    join_months(&months)
                );
            }
        }
        MonthOrder::Chronological => months.sort(),
    }

    debug!("Extracted {} months: {}", months.len(), join_months(&months));

    months
}

/// True if months are strictly ascending
pub fn is_chronological(months: &[MonthKey]) -> bool {
    months.windows(2).all(|pair| pair[0] < pair[1])
}

fn join_months(months: &[MonthKey]) -> String {
    months
        .iter()
        .map(MonthKey::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn keys(months: &[MonthKey]) -> Vec<String> {
        months.iter().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_first_occurrence_then_reversed() {
        let dates = ["2024-01-05", "2024-02-01", "2024-01-20"].map(d);
        let months = extract_months(dates, MonthOrder::SourceReversed);
        assert_eq!(keys(&months), vec!["2024-02", "2024-01"]);
    }

    #[test]
    fn test_descending_ledger_becomes_ascending() {
        let dates = ["2024-03-01", "2024-03-15", "2024-02-10", "2024-01-31"].map(d);
        let months = extract_months(dates, MonthOrder::SourceReversed);
        assert_eq!(keys(&months), vec!["2024-01", "2024-02", "2024-03"]);
        assert!(is_chronological(&months));
    }

    #[test]
    fn test_reversal_is_not_a_sort() {
        let dates = ["2024-03-01", "2024-01-01", "2024-02-01"].map(d);
        let months = extract_months(dates, MonthOrder::SourceReversed);
        assert_eq!(keys(&months), vec!["2024-02", "2024-01", "2024-03"]);
        assert!(!is_chronological(&months));
    }

    #[test]
    fn test_chronological_order() {
        let dates = ["2024-03-01", "2023-12-24", "2024-02-01"].map(d);
        let months = extract_months(dates, MonthOrder::Chronological);
        assert_eq!(keys(&months), vec!["2023-12", "2024-02", "2024-03"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_months(Vec::new(), MonthOrder::SourceReversed).is_empty());
    }

    #[test]
    fn test_same_month_different_years() {
        let dates = ["2024-01-10", "2023-01-10"].map(d);
        let months = extract_months(dates, MonthOrder::SourceReversed);
        assert_eq!(keys(&months), vec!["2023-01", "2024-01"]);
    }

    #[test]
    fn test_contains() {
        let key = MonthKey::new(2024, 2);
        assert!(key.contains(d("2024-02-29")));
        assert!(!key.contains(d("2023-02-28")));
        assert!(!key.contains(d("2024-03-01")));
    }
}
