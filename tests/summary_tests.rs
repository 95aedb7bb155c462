// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use tripclip::models::Expense;
use tripclip::summary::{by_category, by_day, total};

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn expense(id: i64, amount: &str, category: &str, at: &str) -> Expense {
    Expense {
        id,
        trip_id: 1,
        amount_thb: amount.parse().unwrap(),
        category: category.into(),
        note: None,
        created_at: dt(at),
        original_amount: None,
        original_currency: None,
        fx_rate_used: None,
        attachment_path: None,
    }
}

#[test]
fn by_day_buckets_on_calendar_day_ascending() {
    let expenses = vec![
        expense(3, "50", "Transport", "2025-11-03 08:00:00"),
        expense(1, "100", "Food", "2025-11-02 09:00:00"),
        expense(2, "200", "Food", "2025-11-02 21:30:00"),
    ];

    let days = by_day(&expenses);
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].day, NaiveDate::parse_from_str("2025-11-02", "%Y-%m-%d").unwrap());
    assert_eq!(days[0].total, Decimal::new(300, 0));
    assert_eq!(days[1].day, NaiveDate::parse_from_str("2025-11-03", "%Y-%m-%d").unwrap());
    assert_eq!(days[1].total, Decimal::new(50, 0));

    assert_eq!(total(&expenses), Decimal::new(350, 0));
}

#[test]
fn by_category_sorts_largest_first() {
    let expenses = vec![
        expense(1, "40", "Transport", "2025-11-02 09:00:00"),
        expense(2, "100", "Food", "2025-11-02 12:00:00"),
        expense(3, "200", "Food", "2025-11-02 19:00:00"),
        expense(4, "15", "Snacks", "2025-11-02 16:00:00"),
    ];

    let cats = by_category(&expenses);
    let names: Vec<&str> = cats.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["Food", "Transport", "Snacks"]);
    assert_eq!(cats[0].total, Decimal::new(300, 0));
}

#[test]
fn equal_totals_break_ties_on_name() {
    let expenses = vec![
        expense(1, "50", "Shopping", "2025-11-02 09:00:00"),
        expense(2, "50", "Food", "2025-11-02 12:00:00"),
    ];

    let cats = by_category(&expenses);
    assert_eq!(cats[0].category, "Food");
    assert_eq!(cats[1].category, "Shopping");
}

#[test]
fn decimal_sums_are_exact() {
    // 0.1 + 0.2 is exactly 0.3 in fixed point, no float drift
    let expenses = vec![
        expense(1, "0.1", "Food", "2025-11-02 09:00:00"),
        expense(2, "0.2", "Food", "2025-11-02 10:00:00"),
    ];
    assert_eq!(total(&expenses), "0.3".parse::<Decimal>().unwrap());
}

#[test]
fn empty_input_yields_empty_summaries() {
    assert_eq!(total(&[]), Decimal::ZERO);
    assert!(by_day(&[]).is_empty());
    assert!(by_category(&[]).is_empty());
}
