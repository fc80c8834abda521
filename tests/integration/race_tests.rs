//! Integration tests for the first-match racer

use refscan::race::first_match;
use std::time::Duration;
use tokio::time::{sleep, Instant};

async fn after(delay_ms: u64, value: i32) -> i32 {
    sleep(Duration::from_millis(delay_ms)).await;
    value
}

#[tokio::test(start_paused = true)]
async fn returns_a_satisfying_value_never_a_rejected_one() {
    // 1 completes first but fails the predicate; the result must be one of
    // the satisfying values, whichever finishes first.
    let operations = vec![after(1, 1), after(10, 2), after(20, 3)];
    let result = first_match(operations, |x| *x > 1).await;

    assert!(matches!(result, Some(2) | Some(3)), "got {result:?}");
}

#[tokio::test(start_paused = true)]
async fn returns_without_waiting_for_slow_operations() {
    let start = Instant::now();
    let operations = vec![after(1, 1), after(10, 2), after(60_000, 3)];
    let result = first_match(operations, |x| *x > 1).await;

    assert_eq!(result, Some(2));
    assert!(
        start.elapsed() < Duration::from_secs(60),
        "race waited for the slow operation"
    );
}

#[tokio::test(start_paused = true)]
async fn no_satisfying_value_yields_none_after_all_complete() {
    let start = Instant::now();
    let operations = vec![after(1, 1), after(10, 2), after(20, 3)];
    let result = first_match(operations, |x| *x > 10).await;

    assert_eq!(result, None);
    // The verdict requires every completion.
    assert!(start.elapsed() >= Duration::from_millis(20));
}

#[tokio::test]
async fn empty_operation_set_is_immediately_none() {
    let operations: Vec<std::future::Ready<i32>> = Vec::new();
    assert_eq!(first_match(operations, |x| *x > 0).await, None);
}

#[tokio::test(start_paused = true)]
async fn completion_order_beats_submission_order() {
    // Submitted as 2-then-3, but 3 finishes first and wins.
    let operations = vec![after(50, 2), after(1, 3)];
    let result = first_match(operations, |x| *x > 1).await;

    assert_eq!(result, Some(3));
}

#[tokio::test(start_paused = true)]
async fn non_matching_completions_are_discarded_and_race_continues() {
    let operations = vec![after(1, -5), after(5, -2), after(10, 7)];
    let result = first_match(operations, |x| *x > 0).await;

    assert_eq!(result, Some(7));
}
