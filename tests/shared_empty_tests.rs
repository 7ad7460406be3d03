//! Tests for the shared empty instance accessor.

use std::sync::LazyLock;
use std::thread;

use ergoset::ErgoSet;
use rstest::rstest;

// =============================================================================
// Idempotence
// =============================================================================

#[rstest]
fn test_shared_empty_is_empty() {
    let empty = ErgoSet::<i32>::shared_empty();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert!(!empty.contains(&5));
}

#[rstest]
fn test_shared_empty_returns_same_storage_across_calls() {
    let first = ErgoSet::<i32>::shared_empty();
    let second = ErgoSet::<i32>::shared_empty();
    assert!(std::ptr::eq(first, second));
}

#[rstest]
fn test_shared_empty_per_element_type() {
    let numbers = ErgoSet::<i64>::shared_empty();
    let strings = ErgoSet::<String>::shared_empty();

    assert!(numbers.is_empty());
    assert!(strings.is_empty());
    assert_ne!(
        std::ptr::from_ref(numbers).cast::<()>(),
        std::ptr::from_ref(strings).cast::<()>()
    );
}

#[rstest]
fn test_shared_empty_never_observes_mutation() {
    // The accessor hands out shared references only, so the instance can
    // never be mutated; a reader sees an empty set no matter how often or
    // when it looks.
    for _ in 0..3 {
        assert!(ErgoSet::<u8>::shared_empty().is_empty());
    }
}

// =============================================================================
// Static-context usage
// =============================================================================

static DEFAULT_TAGS: LazyLock<&'static ErgoSet<u64>> =
    LazyLock::new(ErgoSet::shared_empty);

#[rstest]
fn test_shared_empty_usable_from_static_initializer() {
    assert!(DEFAULT_TAGS.is_empty());
    assert!(std::ptr::eq(*DEFAULT_TAGS, ErgoSet::<u64>::shared_empty()));
}

// =============================================================================
// Concurrent first access
// =============================================================================

#[rstest]
fn test_shared_empty_race_yields_one_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                std::ptr::from_ref(ErgoSet::<(u32, u32)>::shared_empty()) as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("reader thread panicked"))
        .collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}
