//! Dashboard summaries with period-over-period comparison.
//!
//! Periods follow the Jalali calendar: the current Jalali month, season
//! (three months), or year containing the reference date is compared with
//! the period of the same kind immediately before it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{JalaliDate, add_days, days_in_month};
use crate::models::{Transaction, TransactionKind};

/// Number of transactions shown in the dashboard's recent list.
pub const RECENT_LIMIT: usize = 8;

/// Months per Jalali season.
const MONTHS_PER_QUARTER: u32 = 3;

/// Reporting period toggled on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Jalali month.
    #[default]
    Month,
    /// Jalali season of three months.
    Quarter,
    /// Jalali year.
    Year,
}

impl Period {
    /// The period the toggle switches to next: month → quarter → year →
    /// month.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Month => Self::Quarter,
            Self::Quarter => Self::Year,
            Self::Year => Self::Month,
        }
    }

    /// Persian label shown on the toggle.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Month => "ماه",
            Self::Quarter => "فصل",
            Self::Year => "سال",
        }
    }

    /// The window of this kind containing `reference`.
    #[inline]
    #[must_use]
    pub fn window(self, reference: NaiveDate) -> PeriodWindow {
        let jalali = JalaliDate::from_gregorian(reference);
        let (first_month, last_month) = match self {
            Self::Month => (jalali.month(), jalali.month()),
            Self::Quarter => {
                let season = (jalali.month() - 1).div_euclid(MONTHS_PER_QUARTER);
                let first = season * MONTHS_PER_QUARTER + 1;
                (first, first + MONTHS_PER_QUARTER - 1)
            }
            Self::Year => (1, 12),
        };
        let year = jalali.year();
        let start = JalaliDate::new(year, first_month, 1).and_then(JalaliDate::to_gregorian);
        let end = JalaliDate::new(year, last_month, days_in_month(year, last_month))
            .and_then(JalaliDate::to_gregorian);
        PeriodWindow {
            start: start.unwrap_or(reference),
            end: end.unwrap_or(reference),
        }
    }

    /// The window of this kind immediately before `current`.
    #[inline]
    #[must_use]
    pub fn previous_window(self, current: PeriodWindow) -> PeriodWindow {
        self.window(add_days(current.start, -1))
    }
}

/// An inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Returns `true` if `date` falls within the window.
    #[inline]
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A headline figure compared with the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    /// Total in the current period.
    pub value: u64,
    /// Total in the previous period.
    pub previous: u64,
}

impl Kpi {
    /// Relative change `(value - previous) / previous`, or `0.0` when
    /// there is nothing to compare against.
    #[inline]
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "display ratio; amounts beyond 2^53 Toman lose only insignificant digits"
    )]
    pub fn delta(&self) -> f64 {
        if self.previous == 0 {
            return 0.0;
        }
        let value = self.value as f64;
        let previous = self.previous as f64;
        (value - previous) / previous
    }

    /// Returns `true` when the change is zero or positive.
    #[inline]
    #[must_use]
    pub const fn is_up(&self) -> bool {
        self.previous == 0 || self.value >= self.previous
    }

    /// Trend arrow: `↗` when up, `↘` when down.
    #[inline]
    #[must_use]
    pub const fn arrow(&self) -> &'static str {
        if self.is_up() { "\u{2197}" } else { "\u{2198}" }
    }

    /// Returns `true` when the trend is favourable: up for income, down
    /// for expense.
    #[inline]
    #[must_use]
    pub const fn is_good(&self, up_good: bool) -> bool {
        if up_good { self.is_up() } else { !self.is_up() }
    }

    /// Magnitude of the change in percent.
    #[inline]
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.delta().abs() * 100.0
    }

    /// Percent change with one decimal, e.g. `8.7%`.
    #[inline]
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent())
    }
}

/// Everything the dashboard screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Selected period kind.
    pub period: Period,
    /// Current window.
    pub window: PeriodWindow,
    /// Comparison window.
    pub previous_window: PeriodWindow,
    /// Income in the current window against the previous one.
    pub income: Kpi,
    /// Expense in the current window against the previous one.
    pub expense: Kpi,
    /// Most recent transactions, newest first.
    pub recent: Vec<Transaction>,
}

/// Sums the amounts of one kind within a window.
fn total(transactions: &[Transaction], kind: TransactionKind, window: PeriodWindow) -> u64 {
    transactions
        .iter()
        .filter(|tx| tx.kind == kind && window.contains(tx.date))
        .fold(0_u64, |acc, tx| acc.saturating_add(tx.amount_toman))
}

/// Builds a dashboard summary from newest-first transactions.
#[inline]
#[must_use]
pub fn summarize(
    transactions: &[Transaction],
    period: Period,
    today: NaiveDate,
    recent_limit: usize,
) -> DashboardSummary {
    let window = period.window(today);
    let previous_window = period.previous_window(window);
    let kpi = |kind| Kpi {
        value: total(transactions, kind, window),
        previous: total(transactions, kind, previous_window),
    };
    DashboardSummary {
        period,
        window,
        previous_window,
        income: kpi(TransactionKind::Income),
        expense: kpi(TransactionKind::Expense),
        recent: transactions.iter().take(recent_limit).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_transactions;
    use crate::models::{CategoryId, NewTransaction, TransactionId};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(id: &str, kind: TransactionKind, amount: u64, date: NaiveDate) -> Transaction {
        NewTransaction::categorized(kind, amount, date, CategoryId::from("c"))
            .into_transaction(TransactionId::from(id))
    }

    #[test]
    fn period_cycles() {
        assert_eq!(Period::Month.next(), Period::Quarter);
        assert_eq!(Period::Quarter.next(), Period::Year);
        assert_eq!(Period::Year.next(), Period::Month);
        assert_eq!(Period::default(), Period::Month);
    }

    #[test]
    fn period_labels() {
        assert_eq!(Period::Month.label(), "ماه");
        assert_eq!(Period::Quarter.label(), "فصل");
        assert_eq!(Period::Year.label(), "سال");
    }

    #[test]
    fn month_window_is_jalali_month() {
        // 2026-02-19 is 30 Bahman 1404; Bahman runs 2026-01-21..2026-02-19.
        let window = Period::Month.window(ymd(2026, 2, 19));
        assert_eq!(window.start, ymd(2026, 1, 21));
        assert_eq!(window.end, ymd(2026, 2, 19));
        let previous = Period::Month.previous_window(window);
        assert_eq!(previous.start, ymd(2025, 12, 22));
        assert_eq!(previous.end, ymd(2026, 1, 20));
    }

    #[test]
    fn quarter_window_is_jalali_season() {
        // Winter 1404: Dey 1 (2025-12-22) to Esfand 29 (2026-03-20).
        let window = Period::Quarter.window(ymd(2026, 2, 19));
        assert_eq!(window.start, ymd(2025, 12, 22));
        assert_eq!(window.end, ymd(2026, 3, 20));
        let previous = Period::Quarter.previous_window(window);
        assert_eq!(previous.start, ymd(2025, 9, 23));
        assert_eq!(previous.end, ymd(2025, 12, 21));
    }

    #[test]
    fn year_window_wraps_to_previous_year() {
        let window = Period::Year.window(ymd(2026, 2, 19));
        assert_eq!(window.start, ymd(2025, 3, 21));
        assert_eq!(window.end, ymd(2026, 3, 20));
        let previous = Period::Year.previous_window(window);
        assert_eq!(previous.start, ymd(2024, 3, 20));
        assert_eq!(previous.end, ymd(2025, 3, 20));
    }

    #[test]
    fn kpi_delta_and_trend() {
        let up = Kpi {
            value: 1_100,
            previous: 1_000,
        };
        assert!((up.delta() - 0.1).abs() < 1e-9);
        assert!(up.is_up());
        assert_eq!(up.arrow(), "↗");
        assert!(up.is_good(true));
        assert!(!up.is_good(false));
        assert_eq!(up.percent_label(), "10.0%");

        let down = Kpi {
            value: 750,
            previous: 1_000,
        };
        assert!((down.delta() + 0.25).abs() < 1e-9);
        assert_eq!(down.arrow(), "↘");
        assert!(down.is_good(false));
        assert_eq!(down.percent_label(), "25.0%");
    }

    #[test]
    fn kpi_without_previous_is_flat() {
        let kpi = Kpi {
            value: 500,
            previous: 0,
        };
        assert!(kpi.delta().abs() < f64::EPSILON);
        assert!(kpi.is_up());
        assert_eq!(kpi.percent_label(), "0.0%");
    }

    #[test]
    fn summarize_splits_current_and_previous() {
        let txs = vec![
            tx("t1", TransactionKind::Expense, 45_000, ymd(2026, 2, 19)),
            tx("t2", TransactionKind::Income, 1_000_000, ymd(2026, 2, 1)),
            tx("t3", TransactionKind::Expense, 30_000, ymd(2026, 1, 10)),
            tx("t4", TransactionKind::Income, 800_000, ymd(2026, 1, 5)),
            tx("t5", TransactionKind::Income, 5, ymd(2025, 6, 1)),
        ];
        let summary = summarize(&txs, Period::Month, ymd(2026, 2, 19), RECENT_LIMIT);
        assert_eq!(summary.income.value, 1_000_000);
        assert_eq!(summary.income.previous, 800_000);
        assert_eq!(summary.expense.value, 45_000);
        assert_eq!(summary.expense.previous, 30_000);
        assert_eq!(summary.recent.len(), 5);
    }

    #[test]
    fn summarize_ignores_transfers_and_limits_recent() {
        let txs = sample_transactions();
        let summary = summarize(&txs, Period::Month, ymd(2026, 2, 19), 2);
        // t1 and t2 are expenses (45,000 + 120,000), t3 is income, t4 a transfer.
        assert_eq!(summary.expense.value, 165_000);
        assert_eq!(summary.income.value, 1_890_000);
        assert_eq!(summary.recent.len(), 2);
        assert_eq!(summary.recent[0].id, TransactionId::from("t1"));
    }
}
