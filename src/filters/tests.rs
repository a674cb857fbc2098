use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::model::{replace_by_id, Transaction, TransactionKind};

// Reference instant for every window test: Wednesday 2024-05-15, so the
// surrounding week runs Sunday 2024-05-12 through Saturday 2024-05-18.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 14, 30, 0).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
}

fn tx(id: &str, title: &str, amount: f64, kind: TransactionKind, date: DateTime<Utc>) -> Transaction {
    Transaction {
        id: id.into(),
        title: title.into(),
        amount,
        kind,
        date,
        category: "General".into(),
    }
}

fn sample() -> Vec<Transaction> {
    vec![
        tx("1", "Salary", 3000.0, TransactionKind::Income, at(2024, 5, 15)),
        tx("2", "Rent", 900.0, TransactionKind::Expense, at(2024, 5, 12)),
        tx("3", "Groceries", 120.0, TransactionKind::Expense, at(2024, 5, 1)),
        tx("4", "Freelance", 450.0, TransactionKind::Income, at(2024, 1, 20)),
        tx("5", "Old laptop sale", 200.0, TransactionKind::Income, at(2023, 11, 3)),
    ]
}

fn filter(window: TimeWindow, kind: KindFilter, search: &str) -> FilterState {
    FilterState {
        window,
        kind,
        search: search.into(),
    }
}

// ── pipeline contract ─────────────────────────────────────────

#[test]
fn empty_filter_is_identity() {
    let all = sample();
    let out = apply_filters_at(&all, &FilterState::default(), now());
    assert_eq!(out, all);
}

#[test]
fn result_is_order_preserving_subsequence() {
    let all = sample();
    let out = apply_filters_at(&all, &filter(TimeWindow::Year, KindFilter::All, ""), now());
    let mut cursor = all.iter();
    for kept in &out {
        assert!(cursor.any(|t| t == kept), "result reorders or invents records");
    }
}

#[test]
fn predicates_compose() {
    let all = sample();
    let combined = apply_filters_at(
        &all,
        &filter(TimeWindow::Month, KindFilter::Expense, "r"),
        now(),
    );
    let staged = apply_filters_at(
        &apply_filters_at(
            &apply_filters_at(&all, &filter(TimeWindow::Month, KindFilter::All, ""), now()),
            &filter(TimeWindow::All, KindFilter::Expense, ""),
            now(),
        ),
        &filter(TimeWindow::All, KindFilter::All, "r"),
        now(),
    );
    assert_eq!(combined, staged);
}

#[test]
fn empty_result_is_valid() {
    let all = sample();
    let out = apply_filters_at(&all, &filter(TimeWindow::All, KindFilter::All, "no such title"), now());
    assert!(out.is_empty());
}

// ── time windows ──────────────────────────────────────────────

#[test]
fn year_window_keeps_current_calendar_year() {
    let all = sample();
    let out = apply_filters_at(&all, &filter(TimeWindow::Year, KindFilter::All, ""), now());
    let ids: Vec<_> = out.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[test]
fn month_window_requires_matching_year() {
    let list = vec![
        tx("a", "This month", 10.0, TransactionKind::Expense, at(2024, 5, 2)),
        tx("b", "Same month last year", 10.0, TransactionKind::Expense, at(2023, 5, 2)),
    ];
    let out = apply_filters_at(&list, &filter(TimeWindow::Month, KindFilter::All, ""), now());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "a");
}

#[test]
fn week_window_is_inclusive_at_both_ends() {
    let list = vec![
        tx("start", "Week start", 1.0, TransactionKind::Expense, at(2024, 5, 12)),
        tx("end", "Week end", 1.0, TransactionKind::Expense, at(2024, 5, 18)),
        tx("before", "Day before", 1.0, TransactionKind::Expense, at(2024, 5, 11)),
        tx("after", "Day after", 1.0, TransactionKind::Expense, at(2024, 5, 19)),
    ];
    let out = apply_filters_at(&list, &filter(TimeWindow::Week, KindFilter::All, ""), now());
    let ids: Vec<_> = out.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["start", "end"]);
}

#[test]
fn day_window_matches_calendar_day_only() {
    let list = vec![
        tx("today", "Lunch", 12.0, TransactionKind::Expense, at(2024, 5, 15)),
        tx("yesterday", "Lunch", 12.0, TransactionKind::Expense, at(2024, 5, 14)),
    ];
    let out = apply_filters_at(&list, &filter(TimeWindow::Day, KindFilter::All, ""), now());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "today");
}

#[test]
fn unknown_window_name_falls_back_to_all() {
    assert_eq!(TimeWindow::parse("fortnight"), TimeWindow::All);
    assert_eq!(TimeWindow::parse(""), TimeWindow::All);
    assert_eq!(TimeWindow::parse("week"), TimeWindow::Week);
}

// ── kind and search predicates ────────────────────────────────

#[test]
fn kind_filter_narrows_to_one_variant() {
    let all = sample();
    let out = apply_filters_at(&all, &filter(TimeWindow::All, KindFilter::Income, ""), now());
    assert!(out.iter().all(|t| t.kind == TransactionKind::Income));
    assert_eq!(out.len(), 3);
}

#[test]
fn search_is_case_insensitive_substring() {
    let list = vec![
        tx("1", "Rent", 900.0, TransactionKind::Expense, at(2024, 5, 1)),
        tx("2", "Salary", 3000.0, TransactionKind::Income, at(2024, 5, 1)),
    ];
    let out = apply_filters_at(&list, &filter(TimeWindow::All, KindFilter::All, "RENT"), now());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Rent");
}

#[test]
fn empty_search_matches_everything() {
    let all = sample();
    let out = apply_filters_at(&all, &filter(TimeWindow::All, KindFilter::All, ""), now());
    assert_eq!(out.len(), all.len());
}

// ── aggregation ───────────────────────────────────────────────

#[test]
fn balance_is_income_minus_expenses() {
    let summary = summarize(&sample());
    assert_eq!(summary.income, 3650.0);
    assert_eq!(summary.expenses, 1020.0);
    assert_eq!(summary.balance, summary.income - summary.expenses);
}

#[test]
fn totals_split_the_whole_magnitude() {
    let set = sample();
    let summary = summarize(&set);
    let magnitude: f64 = set.iter().map(|t| t.amount).sum();
    assert_eq!(summary.income + summary.expenses, magnitude);
}

#[test]
fn summary_of_empty_set_is_zero() {
    assert_eq!(summarize(&[]), Summary::default());
}

// ── end-to-end scenarios ──────────────────────────────────────

#[test]
fn unfiltered_totals_over_todays_records() {
    let list = vec![
        tx("1", "Paycheck", 1000.0, TransactionKind::Income, now()),
        tx("2", "Utilities", 300.0, TransactionKind::Expense, now()),
    ];
    let out = apply_filters_at(&list, &FilterState::default(), now());
    assert_eq!(out.len(), 2);
    let summary = summarize(&out);
    assert_eq!(summary.income, 1000.0);
    assert_eq!(summary.expenses, 300.0);
    assert_eq!(summary.balance, 700.0);
}

#[test]
fn expense_filter_flips_balance_negative() {
    let list = vec![
        tx("1", "Paycheck", 1000.0, TransactionKind::Income, now()),
        tx("2", "Utilities", 300.0, TransactionKind::Expense, now()),
    ];
    let out = apply_filters_at(&list, &filter(TimeWindow::All, KindFilter::Expense, ""), now());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "2");
    let summary = summarize(&out);
    assert_eq!(summary.income, 0.0);
    assert_eq!(summary.expenses, 300.0);
    assert_eq!(summary.balance, -300.0);
}

#[test]
fn search_scenario_over_titles() {
    let list = vec![
        tx("1", "Rent", 900.0, TransactionKind::Expense, now()),
        tx("2", "Salary", 3000.0, TransactionKind::Income, now()),
    ];
    let out = apply_filters_at(&list, &filter(TimeWindow::All, KindFilter::All, "rent"), now());
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Rent");
}

#[test]
fn edited_record_feeds_straight_into_the_pipeline() {
    let list = vec![
        tx("1", "Paycheck", 1000.0, TransactionKind::Income, now()),
        tx("2", "Utilities", 300.0, TransactionKind::Expense, now()),
    ];
    let edited = tx("2", "Utilities (corrected)", 350.0, TransactionKind::Expense, now());
    let next = replace_by_id(&list, &edited);
    assert_eq!(next.len(), list.len());

    let out = apply_filters_at(&next, &FilterState::default(), now());
    let summary = summarize(&out);
    assert_eq!(summary.expenses, 350.0);
    assert_eq!(summary.balance, 650.0);
    assert_eq!(out[1].title, "Utilities (corrected)");
}
