#![cfg(feature = "memo")]

use fnwrap::memo::{Memoize1, Memoize2, Memoize3};
use rstest::rstest;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

// =============================================================================
// Basic Memoization
// =============================================================================

#[rstest]
fn memoized_square_computes_once_per_key() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let square = (move |x: i32| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        x * x
    })
    .memoized();

    assert_eq!(square.call(3), 9);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    assert_eq!(square.call(3), 9);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    assert_eq!(square.call(4), 16);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[rstest]
fn memoized_returns_equal_results_for_equal_keys() {
    let describe = (|x: u8| format!("value is {x}")).memoized();

    let first = describe.call(7);
    let second = describe.call(7);

    assert_eq!(first, "value is 7");
    assert_eq!(first, second);
}

#[rstest]
fn memoized_works_with_owned_keys() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let length = (move |text: String| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        text.len()
    })
    .memoized();

    assert_eq!(length.call("hello".to_string()), 5);
    assert_eq!(length.call("hello".to_string()), 5);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Idempotent Wrapping
// =============================================================================

#[rstest]
fn rewrapping_does_not_add_a_cache_layer() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let square = (move |x: i32| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        x * x
    })
    .memoized()
    .memoized()
    .memoized();

    assert_eq!(square.call(5), 25);
    assert_eq!(square.call(5), 25);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(square.cached_count(), 1);
}

// =============================================================================
// Composite Keys (arity 2 and 3)
// =============================================================================

#[rstest]
fn pair_keys_compare_structurally() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let join = (move |left: String, right: String| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        format!("{left}-{right}")
    })
    .memoized();

    // Equal pairs built from fresh allocations share one cache entry.
    assert_eq!(join.call("a".to_string(), "b".to_string()), "a-b");
    assert_eq!(join.call("a".to_string(), "b".to_string()), "a-b");
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    // Swapped components form a distinct key.
    assert_eq!(join.call("b".to_string(), "a".to_string()), "b-a");
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[rstest]
fn triple_keys_require_all_components_equal() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let weighted = (move |a: i32, b: i32, weight: i32| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        (a + b) * weight
    })
    .memoized();

    assert_eq!(weighted.call(1, 2, 10), 30);
    assert_eq!(weighted.call(1, 2, 10), 30);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    assert_eq!(weighted.call(1, 2, 11), 33);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

// =============================================================================
// Unbounded Retention
// =============================================================================

// The cache never evicts: every distinct key computed stays for the lifetime
// of the wrapper. This pins the documented behavior; a bounded cache would
// change observable invocation counts.
#[rstest]
fn cache_retains_every_distinct_key() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let identity = (move |x: u32| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        x
    })
    .memoized();

    for key in 0..256u32 {
        let _ = identity.call(key);
    }
    assert_eq!(identity.cached_count(), 256);

    // Replaying the whole key range costs zero further invocations.
    for key in 0..256u32 {
        let _ = identity.call(key);
    }
    assert_eq!(counter.load(Ordering::SeqCst), 256);
}

// =============================================================================
// Concurrency
// =============================================================================

#[rstest]
fn concurrent_callers_on_one_key_observe_one_invocation() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let square = Arc::new(
        (move |x: i64| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
            thread::yield_now();
            x * x
        })
        .memoized(),
    );

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let square = Arc::clone(&square);
            thread::spawn(move || square.call(9))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 81);
    }

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[rstest]
fn concurrent_callers_on_distinct_keys_each_get_their_result() {
    let square = Arc::new((|x: i64| x * x).memoized());

    let handles: Vec<_> = (0..16)
        .map(|key| {
            let square = Arc::clone(&square);
            thread::spawn(move || (key, square.call(key)))
        })
        .collect();

    for handle in handles {
        let (key, value) = handle.join().unwrap();
        assert_eq!(value, key * key);
    }

    assert_eq!(square.cached_count(), 16);
}

// =============================================================================
// Failure Handling
// =============================================================================

#[rstest]
fn panicking_computation_leaves_no_cache_entry() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let attempts_clone = Arc::clone(&attempts);
    let flaky = (move |x: i32| {
        if attempts_clone.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("transient failure");
        }
        x + 1
    })
    .memoized();

    let outcome = catch_unwind(AssertUnwindSafe(|| flaky.call(1)));
    assert!(outcome.is_err());
    assert_eq!(flaky.cached_count(), 0);
    assert!(!flaky.is_cached(&1));

    assert_eq!(flaky.call(1), 2);
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
    assert!(flaky.is_cached(&1));
}
