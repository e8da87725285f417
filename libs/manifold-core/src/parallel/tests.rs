//! Tests for the execution policy layer and the bulk primitives.
//!
//! Every primitive is exercised under both policies with inputs large enough
//! to actually split across the pool.

use super::*;
use config::constants::{COPY_SEQ_THRESHOLD, INDEXED_SEQ_THRESHOLD, SEQ_THRESHOLD};

const POLICIES: [ExecutionPolicy; 2] = [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel];

/// Deterministic, well-mixed permutation of `0..n` for odd multipliers
/// coprime with `n`.
fn permutation(n: usize) -> Vec<u32> {
    (0..n).map(|i| ((i * 7919 + 13) % n) as u32).collect()
}

// =============================================================================
// POLICY TESTS
// =============================================================================

#[test]
fn test_policy_boundary_is_strict() {
    assert_eq!(auto_policy(SEQ_THRESHOLD), ExecutionPolicy::Sequential);
    assert_eq!(auto_policy(SEQ_THRESHOLD + 1), ExecutionPolicy::Parallel);
    assert_eq!(auto_policy(0), ExecutionPolicy::Sequential);
}

#[test]
fn test_policy_with_custom_threshold() {
    assert_eq!(auto_policy_with(64, 64), ExecutionPolicy::Sequential);
    assert_eq!(auto_policy_with(65, 64), ExecutionPolicy::Parallel);
    assert_eq!(auto_policy_with(0, 0), ExecutionPolicy::Sequential);
    assert_eq!(auto_policy_with(1, 0), ExecutionPolicy::Parallel);
}

#[test]
fn test_policy_from_range_uses_distance() {
    let seq = 5..(5 + SEQ_THRESHOLD);
    let par = 5..(6 + SEQ_THRESHOLD);
    assert_eq!(auto_policy_range(&seq), ExecutionPolicy::Sequential);
    assert_eq!(auto_policy_range(&par), ExecutionPolicy::Parallel);
    assert_eq!(auto_policy_range_with(&(10..20), 10), ExecutionPolicy::Sequential);
    assert_eq!(auto_policy_range_with(&(10..21), 10), ExecutionPolicy::Parallel);
}

#[test]
fn test_indexed_and_copy_thresholds_exceed_default() {
    assert!(PolicyThresholds::DEFAULT.indexed == INDEXED_SEQ_THRESHOLD);
    assert!(PolicyThresholds::DEFAULT.copy == COPY_SEQ_THRESHOLD);
}

// =============================================================================
// FOR EACH TESTS
// =============================================================================

#[test]
fn test_for_each_visits_every_element_once() {
    for policy in POLICIES {
        let mut data = vec![1u64; 50_000];
        for_each(policy, &mut data, |x| *x += 1);
        assert!(data.iter().all(|&x| x == 2), "{policy:?}");
    }
}

#[test]
fn test_for_each_indexed_passes_position() {
    for policy in POLICIES {
        let mut data = vec![0usize; 20_001];
        for_each_indexed(policy, &mut data, |i, x| *x = i * 2);
        assert!(data.iter().enumerate().all(|(i, &x)| x == i * 2), "{policy:?}");
    }
}

#[test]
fn test_for_each_auto_on_empty_slice() {
    let mut data: Vec<i32> = Vec::new();
    for_each_auto(&mut data, |x| *x += 1);
    assert!(data.is_empty());
}

// =============================================================================
// TRANSFORM REDUCE TESTS
// =============================================================================

#[test]
fn test_transform_reduce_matches_across_policies() {
    let data: Vec<u64> = (0..100_000).collect();
    let expected: u64 = data.iter().map(|x| x * 3).sum::<u64>() + 5;
    for policy in POLICIES {
        let total = transform_reduce(policy, &data, 5, |a, b| a + b, |x| x * 3);
        assert_eq!(total, expected, "{policy:?}");
    }
}

#[test]
fn test_transform_reduce_folds_init_once() {
    // max is idempotent, so use a sum to detect repeated use of init
    let data = vec![1u32; 30_000];
    let total = transform_reduce(ExecutionPolicy::Parallel, &data, 100, |a, b| a + b, |&x| x);
    assert_eq!(total, 30_100);
}

#[test]
fn test_transform_reduce_empty_returns_init() {
    let data: Vec<f64> = Vec::new();
    for policy in POLICIES {
        let total = transform_reduce(policy, &data, 7.5, |a, b| a + b, |&x| x);
        assert_eq!(total, 7.5);
    }
    let total = transform_reduce_index(ExecutionPolicy::Parallel, 3..3, 9, |a, b| a + b, |i| i);
    assert_eq!(total, 9);
}

#[test]
fn test_transform_reduce_index_counts() {
    for policy in POLICIES {
        let evens = transform_reduce_index(policy, 0..40_000, 0usize, |a, b| a + b, |i| {
            usize::from(i % 2 == 0)
        });
        assert_eq!(evens, 20_000, "{policy:?}");
    }
    let all = transform_reduce_index_auto(0..10, true, |a, b| a && b, |i| i < 10);
    assert!(all);
}

#[test]
fn test_transform_reduce_non_associative_is_deterministic_sequentially() {
    let data: Vec<i64> = (1..=1_000).collect();
    let run = || transform_reduce(ExecutionPolicy::Sequential, &data, 0, |a, b| a - b, |&x| x);
    let first = run();
    assert_eq!(first, run());
    // left fold: 0 - 1 - 2 - ... - 1000
    assert_eq!(first, -500_500);
}

// =============================================================================
// COPY TESTS
// =============================================================================

#[test]
fn test_copy_into_longer_destination() {
    for policy in POLICIES {
        let src: Vec<u32> = (0..25_000).collect();
        let mut dest = vec![u32::MAX; 25_010];
        copy(policy, &src, &mut dest);
        assert_eq!(&dest[..25_000], &src[..]);
        assert!(dest[25_000..].iter().all(|&x| x == u32::MAX));
    }
}

#[test]
fn test_copy_n_copies_prefix() {
    let src = vec![String::from("a"), String::from("b"), String::from("c")];
    let mut dest = vec![String::new(); 3];
    copy_n(ExecutionPolicy::Parallel, &src, 2, &mut dest);
    assert_eq!(dest, vec!["a".to_string(), "b".to_string(), String::new()]);

    let mut dest = vec![String::new(); 2];
    copy_n_auto(&src, 1, &mut dest);
    assert_eq!(dest[0], "a");
}

#[test]
#[should_panic]
fn test_copy_rejects_short_destination() {
    let mut dest = [0u8; 2];
    copy_auto(&[1u8, 2, 3], &mut dest);
}

// =============================================================================
// SCATTER / GATHER TESTS
// =============================================================================

#[test]
fn test_gather_scatter_round_trip() {
    let n = 120_000;
    let perm = permutation(n);
    let data: Vec<f64> = (0..n).map(|i| i as f64 * 0.5).collect();
    for policy in POLICIES {
        let mut scattered = vec![0.0; n];
        // SAFETY: `perm` is a permutation of 0..n.
        unsafe { scatter(policy, &data, &perm, &mut scattered) };
        let mut restored = vec![0.0; n];
        gather(policy, &perm, &scattered, &mut restored);
        assert_eq!(restored, data, "{policy:?}");
    }
}

#[test]
fn test_scatter_builds_inverse_permutation() {
    let old_of_new = [4u32, 0, 3];
    let mut ids = [0u32; 3];
    sequence_auto(&mut ids);
    let mut new_of_old = [u32::MAX; 5];
    // SAFETY: entries of `old_of_new` are distinct.
    unsafe { scatter_auto(&ids, &old_of_new, &mut new_of_old) };
    assert_eq!(new_of_old, [1, u32::MAX, u32::MAX, 2, 0]);
}

#[test]
fn test_gather_auto_subset() {
    let src = ["a", "b", "c", "d"];
    let mut dest = [""; 3];
    gather_auto(&[3usize, 3, 0], &src, &mut dest);
    assert_eq!(dest, ["d", "d", "a"]);
}

#[test]
#[should_panic]
fn test_gather_out_of_range_panics() {
    let mut dest = [0; 1];
    gather(ExecutionPolicy::Sequential, &[9u32], &[1, 2, 3], &mut dest);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "injective")]
fn test_scatter_duplicate_target_caught_in_debug() {
    let mut dest = [0; 4];
    // SAFETY: deliberately violated; the debug assertion fires before any write.
    unsafe { scatter(ExecutionPolicy::Sequential, &[1, 2], &[1u32, 1], &mut dest) };
}

#[test]
fn test_injectivity_check() {
    assert!(is_injective(&[2u32, 0, 1], 3));
    assert!(!is_injective(&[0u32, 0], 3));
    assert!(!is_injective(&[3u32], 3));
    assert!(is_injective::<u32>(&[], 0));
}

// =============================================================================
// SEQUENCE TESTS
// =============================================================================

#[test]
fn test_sequence_writes_identity() {
    for policy in POLICIES {
        let mut ids = vec![0u64; 150_000];
        sequence(policy, &mut ids);
        assert!(ids.iter().enumerate().all(|(i, &v)| v == i as u64), "{policy:?}");
    }
}
