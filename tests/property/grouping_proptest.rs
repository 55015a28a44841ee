//! Property-based tests for day grouping
//!
//! Uses proptest to generate random message dates and verify the
//! grouping invariants: no message lost or duplicated, exactly one
//! bucket per label, labels correct relative to "today".

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use agrichat::client::{day_label, ChatView};
use agrichat::shared::Message;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// A message backdated by `days_ago` whole days from a fixed "today"
fn backdated(days_ago: i64, content: String) -> Message {
    let mut message = Message::new("alice".to_string(), content, None);
    let base = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    message.created_at = base - Duration::days(days_ago);
    message
}

proptest! {
    #[test]
    fn test_grouping_preserves_every_message(offsets in prop::collection::vec(0i64..30, 0..40)) {
        // Chronological input, as the store guarantees
        let mut sorted = offsets.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut view = ChatView::new();
        view.set_messages(
            sorted
                .iter()
                .enumerate()
                .map(|(i, &days)| backdated(days, format!("m{i}")))
                .collect(),
        );

        let grouped = view.grouped(today());
        let total: usize = grouped.iter().map(|(_, bucket)| bucket.len()).sum();
        prop_assert_eq!(total, sorted.len());
    }

    #[test]
    fn test_one_bucket_per_label(offsets in prop::collection::vec(0i64..30, 0..40)) {
        let mut sorted = offsets.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut view = ChatView::new();
        view.set_messages(
            sorted
                .iter()
                .map(|&days| backdated(days, "x".to_string()))
                .collect(),
        );

        let grouped = view.grouped(today());
        let mut labels: Vec<&String> = grouped.iter().map(|(label, _)| label).collect();
        let before = labels.len();
        labels.dedup();
        // Chronological input means each day's messages are contiguous,
        // so every label appears as exactly one bucket
        prop_assert_eq!(labels.len(), before);
    }

    #[test]
    fn test_day_label_relative_names(days_ago in 0i64..365) {
        let date = today() - Duration::days(days_ago);
        let label = day_label(date, today());
        match days_ago {
            0 => prop_assert_eq!(label, "Today"),
            1 => prop_assert_eq!(label, "Yesterday"),
            _ => prop_assert_eq!(label, date.format("%Y-%m-%d").to_string()),
        }
    }
}
