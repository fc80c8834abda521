//! First-match racing over concurrent operations

use futures_util::stream::{FuturesUnordered, StreamExt};
use std::future::Future;

/// Return the first completed value satisfying `predicate`
///
/// All operations run concurrently; completions are inspected in true finish
/// order. The first satisfying value is returned immediately and the
/// remaining operations are abandoned: futures still owned here are dropped
/// un-polled, while work already spawned elsewhere keeps running detached.
/// Non-matching completions are discarded and the race continues over the
/// rest. `None` means the set drained without a match - including the empty
/// set, which resolves immediately.
///
/// When several operations can satisfy the predicate, which value wins
/// depends on real completion timing. That race is intentional; callers must
/// accept any satisfying value.
pub async fn first_match<T, F, P>(operations: impl IntoIterator<Item = F>, predicate: P) -> Option<T>
where
    F: Future<Output = T>,
    P: Fn(&T) -> bool,
{
    let mut pending: FuturesUnordered<F> = operations.into_iter().collect();
    while let Some(value) = pending.next().await {
        if predicate(&value) {
            return Some(value);
        }
    }
    None
}
