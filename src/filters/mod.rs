//! The shared filtering and aggregation core. Both the dashboard and the
//! transactions page call into this module so the two screens can never
//! disagree about which records are visible or what the totals are.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::model::{Transaction, TransactionKind};

#[cfg(test)]
mod tests;

/// Named recency buckets, evaluated against a reference instant captured
/// once per filter pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TimeWindow {
    #[default]
    All,
    Year,
    Month,
    Week,
    Day,
}

impl TimeWindow {
    /// An unmapped name falls back to match-all instead of silently
    /// excluding everything.
    pub fn parse(value: &str) -> Self {
        match value {
            "year" => Self::Year,
            "month" => Self::Month,
            "week" => Self::Week,
            "day" => Self::Day,
            _ => Self::All,
        }
    }

    fn matches(self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let day = date.date_naive();
        let today = now.date_naive();
        match self {
            Self::All => true,
            Self::Year => day.year() == today.year(),
            Self::Month => day.month() == today.month() && day.year() == today.year(),
            Self::Week => {
                // Week runs Sunday through Saturday, both ends inclusive.
                let start =
                    today - Duration::days(today.weekday().num_days_from_sunday() as i64);
                day >= start && day <= start + Duration::days(6)
            }
            Self::Day => day == today,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "income" => Self::Income,
            "expense" => Self::Expense,
            _ => Self::All,
        }
    }

    fn matches(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }
}

/// Everything the filter bar controls.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterState {
    pub window: TimeWindow,
    pub kind: KindFilter,
    pub search: String,
}

fn matches_search(title: &str, search: &str) -> bool {
    title.to_lowercase().contains(&search.to_lowercase())
}

/// Stable filter over the cached collection: the result is the ordered
/// subsequence satisfying all three predicates. Always recomputed in full
/// from the unfiltered source; an empty result is a normal outcome.
pub fn apply_filters(transactions: &[Transaction], filter: &FilterState) -> Vec<Transaction> {
    apply_filters_at(transactions, filter, Utc::now())
}

/// Same as [`apply_filters`] with an explicit reference instant, so the time
/// windows are reproducible under test.
pub fn apply_filters_at(
    transactions: &[Transaction],
    filter: &FilterState,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.window.matches(t.date, now))
        .filter(|t| filter.kind.matches(t.kind))
        .filter(|t| matches_search(&t.title, &filter.search))
        .cloned()
        .collect()
}

/// Income / expense / balance totals over a (filtered) set.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Reduces the post-filter set; summary figures always reflect whatever
/// filters are active.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();
    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}
