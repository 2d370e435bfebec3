//! # Dashboard Metrics
//!
//! Figures for the home screen, recomputed from the current state on every
//! read.
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬──────────────────────────┐
//! │  Low stock   │ Today's sales│   Pending    │  Goal: revenue / target  │
//! │    count     │ count & sum  │ prescriptions│  (0..=100 %)             │
//! └──────────────┴──────────────┴──────────────┴──────────────────────────┘
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │  Last 7 days: [today-6, ..., today-1, today]  revenue per day         │
//! └───────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Days are calendar days in UTC, the same zone sales are stamped in.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Medicine, PharmacySettings, Prescription, PrescriptionStatus, Sale};

/// Number of buckets in the revenue series.
pub const SERIES_DAYS: i64 = 7;

/// Short French weekday name, as on the chart axis.
pub const fn weekday_short_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lun.",
        Weekday::Tue => "mar.",
        Weekday::Wed => "mer.",
        Weekday::Thu => "jeu.",
        Weekday::Fri => "ven.",
        Weekday::Sat => "sam.",
        Weekday::Sun => "dim.",
    }
}

/// Revenue for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub label: String,
    pub sales: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub low_stock_count: usize,
    pub todays_sales_count: usize,
    pub daily_revenue: Money,
    pub daily_revenue_target: Money,
    pub pending_prescriptions: usize,
    /// Percent of the daily target reached, capped at 100.
    pub progress_percentage: u8,
    /// Oldest first, today last.
    pub last_7_days: Vec<DailyRevenue>,
}

impl DashboardMetrics {
    pub fn compute(
        medicines: &[Medicine],
        sales: &[Sale],
        prescriptions: &[Prescription],
        settings: &PharmacySettings,
        now: DateTime<Utc>,
    ) -> Self {
        let today = now.date_naive();

        let todays_sales: Vec<&Sale> = sales.iter().filter(|s| s.is_on(today)).collect();
        let daily_revenue: Money = todays_sales.iter().map(|s| s.total).sum();

        DashboardMetrics {
            low_stock_count: medicines.iter().filter(|m| m.is_low_stock()).count(),
            todays_sales_count: todays_sales.len(),
            daily_revenue,
            daily_revenue_target: settings.daily_revenue_target,
            pending_prescriptions: prescriptions
                .iter()
                .filter(|p| p.status == PrescriptionStatus::Pending)
                .count(),
            progress_percentage: daily_revenue.progress_towards(settings.daily_revenue_target),
            last_7_days: revenue_series(sales, today),
        }
    }
}

/// Revenue per day for the [`SERIES_DAYS`] days ending on `today`.
pub fn revenue_series(sales: &[Sale], today: NaiveDate) -> Vec<DailyRevenue> {
    (0..SERIES_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            DailyRevenue {
                date,
                label: weekday_short_label(date.weekday()).to_string(),
                sales: sales.iter().filter(|s| s.is_on(date)).map(|s| s.total).sum(),
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaymentMethod;
    use chrono::TimeZone;

    fn sale(total: i64, date: DateTime<Utc>) -> Sale {
        Sale {
            id: format!("s-{}", total),
            date,
            items: vec![],
            total: Money::from_units(total),
            tax: Money::zero(),
            discount: Money::zero(),
            payment_method: PaymentMethod::Cash,
            cashier_id: "user1".to_string(),
        }
    }

    fn settings(target: i64) -> PharmacySettings {
        PharmacySettings {
            name: "Pharmacie".to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            nif: String::new(),
            daily_revenue_target: Money::from_units(target),
            tax_rate: 0.0,
            currency: "FCFA".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        // Wednesday
        Utc.with_ymd_and_hms(2024, 5, 22, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_today_revenue_and_progress() {
        let sales = vec![
            sale(4_500, now()),
            sale(12_500, now() - Duration::days(1)),
            sale(70_500, now() - Duration::hours(2)),
        ];

        let metrics = DashboardMetrics::compute(&[], &sales, &[], &settings(150_000), now());
        assert_eq!(metrics.todays_sales_count, 2);
        assert_eq!(metrics.daily_revenue.units(), 75_000);
        assert_eq!(metrics.progress_percentage, 50);
    }

    #[test]
    fn test_progress_is_capped_and_zero_target_is_zero() {
        let sales = vec![sale(500_000, now())];
        let capped = DashboardMetrics::compute(&[], &sales, &[], &settings(150_000), now());
        assert_eq!(capped.progress_percentage, 100);

        let no_goal = DashboardMetrics::compute(&[], &sales, &[], &settings(0), now());
        assert_eq!(no_goal.progress_percentage, 0);
    }

    #[test]
    fn test_series_is_seven_days_oldest_first() {
        let sales = vec![
            sale(4_500, now()),
            sale(12_500, now() - Duration::days(1)),
            sale(9_999, now() - Duration::days(7)),
        ];

        let series = revenue_series(&sales, now().date_naive());
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 5, 16).unwrap());
        assert_eq!(series[6].date, now().date_naive());
        assert_eq!(series[6].label, "mer.");
        assert_eq!(series[5].label, "mar.");
        assert_eq!(series[6].sales.units(), 4_500);
        assert_eq!(series[5].sales.units(), 12_500);

        // The sale 7 days ago is outside the window
        let total: Money = series.iter().map(|d| d.sales).sum();
        assert_eq!(total.units(), 17_000);
    }
}
