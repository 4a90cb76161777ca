//! Spend Analytics
//!
//! Client-side aggregation over flat payment lists: period-over-period
//! comparison, calendar-day bucketing, and per-key breakdowns. Every helper
//! is a single linear pass and does not depend on input order.

use std::collections::BTreeMap;

use crate::models::Payment;
use crate::state::global::TimeRange;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Result of comparing the selected window against the preceding one
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodComparison {
    pub current_total: f64,
    pub previous_total: f64,
    /// Percentage change of current vs previous
    pub delta_percent: f64,
    /// Set when the previous window had no spend but the current one does
    pub new_spend: bool,
}

/// Compare total spend in `range` against the equal-length window
/// immediately preceding it.
///
/// A zero previous total with a non-zero current total is reported as a
/// flagged 100% increase rather than a division by zero; two empty windows
/// compare as a 0% change.
pub fn period_comparison(payments: &[Payment], range: &TimeRange) -> PeriodComparison {
    let previous = range.previous_window();

    let mut current_total = 0.0;
    let mut previous_total = 0.0;

    for payment in payments {
        let ts = payment.effective_date();
        if range.contains(ts) {
            current_total += payment.amount;
        } else if previous.contains(ts) {
            previous_total += payment.amount;
        }
    }

    let (delta_percent, new_spend) = if previous_total == 0.0 {
        if current_total == 0.0 {
            (0.0, false)
        } else {
            (100.0, true)
        }
    } else {
        ((current_total - previous_total) / previous_total * 100.0, false)
    };

    PeriodComparison {
        current_total,
        previous_total,
        delta_percent,
        new_spend,
    }
}

/// Start of the UTC calendar day containing `timestamp`
pub fn day_start(timestamp: i64) -> i64 {
    timestamp - timestamp.rem_euclid(DAY_MS)
}

/// Sum spend per UTC calendar day across the window, zero-filled so charts
/// get a point for every day even without payments. Ascending by day.
pub fn daily_totals(payments: &[Payment], range: &TimeRange) -> Vec<(i64, f64)> {
    let mut buckets: BTreeMap<i64, f64> = BTreeMap::new();

    let mut day = day_start(range.start);
    while day < range.end {
        buckets.insert(day, 0.0);
        day += DAY_MS;
    }

    for payment in payments {
        let ts = payment.effective_date();
        if range.contains(ts) {
            *buckets.entry(day_start(ts)).or_insert(0.0) += payment.amount;
        }
    }

    buckets.into_iter().collect()
}

/// Sum spend in the window grouped by a foreign-key id (service, category),
/// descending by total. Ties order by key for a stable result.
pub fn totals_by_key<F>(payments: &[Payment], range: &TimeRange, key: F) -> Vec<(u32, f64)>
where
    F: Fn(&Payment) -> u32,
{
    let mut buckets: BTreeMap<u32, f64> = BTreeMap::new();

    for payment in payments {
        if range.contains(payment.effective_date()) {
            *buckets.entry(key(payment)).or_insert(0.0) += payment.amount;
        }
    }

    let mut totals: Vec<(u32, f64)> = buckets.into_iter().collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0)));
    totals
}

/// Sum spend per calendar month of `year` (UTC), for year-over-year widgets
pub fn monthly_totals(payments: &[Payment], year: i32) -> [f64; 12] {
    use chrono::Datelike;

    let mut totals = [0.0; 12];

    for payment in payments {
        if let Some(date) = chrono::DateTime::from_timestamp_millis(payment.effective_date()) {
            if date.year() == year {
                totals[date.month0() as usize] += payment.amount;
            }
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentStatus;

    fn payment(id: u32, amount: f64, due_date: i64) -> Payment {
        Payment {
            id,
            amount,
            status: PaymentStatus::Approved,
            description: String::new(),
            due_date,
            paid_date: None,
            category_id: 1,
            category_name: None,
            service_id: 1,
            service_name: None,
            contractor_id: 1,
            contractor_name: None,
            legal_entity_id: 1,
            legal_entity_name: None,
            department_id: 1,
            department_name: None,
            custom_values: Default::default(),
            created_at: due_date,
        }
    }

    fn range(start: i64, end: i64) -> TimeRange {
        TimeRange {
            start,
            end,
            label: "test".to_string(),
        }
    }

    #[test]
    fn test_period_comparison_basic_delta() {
        // Window [100, 200), previous [0, 100)
        let payments = vec![
            payment(1, 150.0, 120),
            payment(2, 50.0, 180),
            payment(3, 100.0, 40),
        ];

        let cmp = period_comparison(&payments, &range(100, 200));
        assert_eq!(cmp.current_total, 200.0);
        assert_eq!(cmp.previous_total, 100.0);
        assert_eq!(cmp.delta_percent, 100.0);
        assert!(!cmp.new_spend);
    }

    #[test]
    fn test_period_comparison_both_windows_empty() {
        let cmp = period_comparison(&[], &range(100, 200));
        assert_eq!(cmp.delta_percent, 0.0);
        assert!(!cmp.new_spend);
    }

    #[test]
    fn test_period_comparison_flags_new_spend() {
        let payments = vec![payment(1, 75.0, 150)];

        let cmp = period_comparison(&payments, &range(100, 200));
        assert_eq!(cmp.current_total, 75.0);
        assert_eq!(cmp.previous_total, 0.0);
        assert_eq!(cmp.delta_percent, 100.0);
        assert!(cmp.new_spend);
    }

    #[test]
    fn test_period_comparison_decrease() {
        let payments = vec![payment(1, 50.0, 150), payment(2, 200.0, 50)];

        let cmp = period_comparison(&payments, &range(100, 200));
        assert_eq!(cmp.delta_percent, -75.0);
    }

    #[test]
    fn test_period_comparison_uses_paid_date_when_present() {
        let mut p = payment(1, 60.0, 50);
        p.paid_date = Some(150);

        let cmp = period_comparison(&[p], &range(100, 200));
        assert_eq!(cmp.current_total, 60.0);
        assert_eq!(cmp.previous_total, 0.0);
    }

    #[test]
    fn test_period_comparison_ignores_out_of_window_payments() {
        let payments = vec![payment(1, 999.0, 500), payment(2, 999.0, -200)];

        let cmp = period_comparison(&payments, &range(100, 200));
        assert_eq!(cmp.current_total, 0.0);
        assert_eq!(cmp.previous_total, 0.0);
    }

    #[test]
    fn test_daily_totals_zero_fills_window() {
        let window = range(0, 3 * DAY_MS);
        let payments = vec![
            payment(1, 10.0, DAY_MS + 100),
            payment(2, 5.0, DAY_MS + 200),
        ];

        let totals = daily_totals(&payments, &window);
        assert_eq!(
            totals,
            vec![(0, 0.0), (DAY_MS, 15.0), (2 * DAY_MS, 0.0)]
        );
    }

    #[test]
    fn test_daily_totals_independent_of_input_order() {
        let window = range(0, 2 * DAY_MS);
        let a = vec![payment(1, 10.0, 100), payment(2, 5.0, DAY_MS + 100)];
        let b = vec![payment(2, 5.0, DAY_MS + 100), payment(1, 10.0, 100)];

        assert_eq!(daily_totals(&a, &window), daily_totals(&b, &window));
    }

    #[test]
    fn test_totals_by_key_sorted_descending() {
        let window = range(0, 1000);
        let mut payments = vec![
            payment(1, 10.0, 100),
            payment(2, 40.0, 200),
            payment(3, 30.0, 300),
        ];
        payments[0].service_id = 7;
        payments[1].service_id = 3;
        payments[2].service_id = 7;

        let totals = totals_by_key(&payments, &window, |p| p.service_id);
        assert_eq!(totals, vec![(3, 40.0), (7, 40.0)]);
    }

    #[test]
    fn test_totals_by_key_excludes_out_of_window() {
        let window = range(0, 1000);
        let payments = vec![payment(1, 10.0, 100), payment(2, 99.0, 5000)];

        let totals = totals_by_key(&payments, &window, |p| p.category_id);
        assert_eq!(totals, vec![(1, 10.0)]);
    }

    #[test]
    fn test_monthly_totals_buckets_by_month() {
        let jan = 1736899200000; // 2025-01-15T00:00:00Z
        let mar = 1740787200000; // 2025-03-01T00:00:00Z
        let prev_year = 1705276800000; // 2024-01-15T00:00:00Z
        let payments = vec![
            payment(1, 100.0, jan),
            payment(2, 50.0, mar),
            payment(3, 999.0, prev_year),
        ];

        let totals = monthly_totals(&payments, 2025);
        assert_eq!(totals[0], 100.0);
        assert_eq!(totals[2], 50.0);
        assert_eq!(totals.iter().sum::<f64>(), 150.0);
    }
}
