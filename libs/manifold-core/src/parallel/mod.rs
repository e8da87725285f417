//! # Parallel Primitives
//!
//! Bulk array operations that run either on the calling thread or across the
//! rayon pool, chosen once per call by an [`ExecutionPolicy`].
//!
//! ## Overview
//!
//! Every primitive takes slices (or an index `Range`), so constant-time
//! random access is guaranteed by the type system. Each call blocks until all
//! spawned work has joined; there is no suspension point and no cancellation.
//!
//! ## Caller obligations
//!
//! - `for_each` closures must not depend on element order.
//! - `transform_reduce` combiners must be associative and commutative,
//!   otherwise the parallel result is implementation-defined.
//! - `scatter` maps must be injective. This is not checked in release builds.
//!
//! Source and destination of `copy`, `gather` and `scatter` can never overlap:
//! a `&[T]` and a `&mut [T]` cannot alias.
//!
//! ## Example
//!
//! ```rust
//! use manifold_core::parallel::{gather, sequence, ExecutionPolicy};
//!
//! let mut order = vec![0u32; 4];
//! sequence(ExecutionPolicy::Sequential, &mut order);
//! assert_eq!(order, vec![0, 1, 2, 3]);
//!
//! let src = [10, 20, 30, 40];
//! let mut dest = [0; 2];
//! gather(ExecutionPolicy::Parallel, &[3u32, 1], &src, &mut dest);
//! assert_eq!(dest, [40, 20]);
//! ```

use crate::config::PolicyThresholds;
use rayon::prelude::*;
use std::marker::PhantomData;
use std::ops::Range;

// =============================================================================
// EXECUTION POLICY
// =============================================================================

/// Whether a bulk operation runs on the calling thread or across the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionPolicy {
    /// Run on the calling thread, in index order.
    Sequential,
    /// Fork across the rayon pool and join before returning.
    Parallel,
}

/// Picks a policy for `size` elements using the default element-wise
/// threshold.
///
/// # Examples
/// ```
/// use manifold_core::parallel::{auto_policy, ExecutionPolicy};
/// use config::constants::SEQ_THRESHOLD;
/// assert_eq!(auto_policy(SEQ_THRESHOLD), ExecutionPolicy::Sequential);
/// assert_eq!(auto_policy(SEQ_THRESHOLD + 1), ExecutionPolicy::Parallel);
/// ```
#[must_use]
pub fn auto_policy(size: usize) -> ExecutionPolicy {
    auto_policy_with(size, PolicyThresholds::DEFAULT.elementwise)
}

/// Picks a policy for `size` elements: `Sequential` when
/// `size <= threshold`, `Parallel` otherwise.
#[must_use]
pub fn auto_policy_with(size: usize, threshold: usize) -> ExecutionPolicy {
    if size <= threshold {
        ExecutionPolicy::Sequential
    } else {
        ExecutionPolicy::Parallel
    }
}

/// Range overload of [`auto_policy`]; the size is the distance between the
/// range bounds.
#[must_use]
pub fn auto_policy_range(range: &Range<usize>) -> ExecutionPolicy {
    auto_policy(range.len())
}

/// Range overload of [`auto_policy_with`].
#[must_use]
pub fn auto_policy_range_with(range: &Range<usize>, threshold: usize) -> ExecutionPolicy {
    auto_policy_with(range.len(), threshold)
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// Integer types usable as entries of a scatter/gather map or as the output
/// of [`sequence`].
pub trait ArrayIndex: Copy + Send + Sync {
    /// Converts the index to a slice offset.
    fn to_usize(self) -> usize;
    /// Converts a slice offset to the index type.
    fn from_usize(value: usize) -> Self;
}

macro_rules! impl_array_index {
    ($($t:ty),*) => {
        $(
            impl ArrayIndex for $t {
                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(value: usize) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_array_index!(u32, u64, usize);

// =============================================================================
// FOR EACH
// =============================================================================

/// Applies `f` once to every element of `data`.
pub fn for_each<T, F>(policy: ExecutionPolicy, data: &mut [T], f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    match policy {
        ExecutionPolicy::Sequential => data.iter_mut().for_each(f),
        ExecutionPolicy::Parallel => data.par_iter_mut().for_each(f),
    }
}

/// Applies `f(index, element)` once to every element of `data`.
pub fn for_each_indexed<T, F>(policy: ExecutionPolicy, data: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync + Send,
{
    match policy {
        ExecutionPolicy::Sequential => data.iter_mut().enumerate().for_each(|(i, x)| f(i, x)),
        ExecutionPolicy::Parallel => data
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, x)| f(i, x)),
    }
}

/// [`for_each`] with the policy chosen from `data.len()`.
pub fn for_each_auto<T, F>(data: &mut [T], f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync + Send,
{
    let policy = auto_policy_with(data.len(), PolicyThresholds::DEFAULT.elementwise);
    for_each(policy, data, f);
}

/// [`for_each_indexed`] with the policy chosen from `data.len()`.
pub fn for_each_indexed_auto<T, F>(data: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync + Send,
{
    let policy = auto_policy_with(data.len(), PolicyThresholds::DEFAULT.elementwise);
    for_each_indexed(policy, data, f);
}

// =============================================================================
// TRANSFORM REDUCE
// =============================================================================

/// Folds `map(x)` over `data` with `combine`, starting from `init`.
///
/// `init` is combined exactly once. Under `Parallel` the grouping of
/// `combine` calls is unspecified, so `combine` must be associative and
/// commutative for the result to match the sequential one.
///
/// # Examples
/// ```
/// use manifold_core::parallel::{transform_reduce, ExecutionPolicy};
/// let sum = transform_reduce(ExecutionPolicy::Parallel, &[1, 2, 3], 10, |a, b| a + b, |x| x * x);
/// assert_eq!(sum, 24);
/// ```
pub fn transform_reduce<T, R, C, M>(
    policy: ExecutionPolicy,
    data: &[T],
    init: R,
    combine: C,
    map: M,
) -> R
where
    T: Sync,
    R: Send,
    C: Fn(R, R) -> R + Sync + Send,
    M: Fn(&T) -> R + Sync + Send,
{
    match policy {
        ExecutionPolicy::Sequential => data.iter().map(map).fold(init, &combine),
        ExecutionPolicy::Parallel => match data.par_iter().map(map).reduce_with(&combine) {
            Some(total) => combine(init, total),
            None => init,
        },
    }
}

/// Index-range form of [`transform_reduce`]: folds `map(i)` for every `i` in
/// `range`.
pub fn transform_reduce_index<R, C, M>(
    policy: ExecutionPolicy,
    range: Range<usize>,
    init: R,
    combine: C,
    map: M,
) -> R
where
    R: Send,
    C: Fn(R, R) -> R + Sync + Send,
    M: Fn(usize) -> R + Sync + Send,
{
    match policy {
        ExecutionPolicy::Sequential => range.map(map).fold(init, &combine),
        ExecutionPolicy::Parallel => match range.into_par_iter().map(map).reduce_with(&combine) {
            Some(total) => combine(init, total),
            None => init,
        },
    }
}

/// [`transform_reduce`] with the policy chosen from `data.len()`.
pub fn transform_reduce_auto<T, R, C, M>(data: &[T], init: R, combine: C, map: M) -> R
where
    T: Sync,
    R: Send,
    C: Fn(R, R) -> R + Sync + Send,
    M: Fn(&T) -> R + Sync + Send,
{
    let policy = auto_policy_with(data.len(), PolicyThresholds::DEFAULT.elementwise);
    transform_reduce(policy, data, init, combine, map)
}

/// [`transform_reduce_index`] with the policy chosen from `range.len()`.
pub fn transform_reduce_index_auto<R, C, M>(range: Range<usize>, init: R, combine: C, map: M) -> R
where
    R: Send,
    C: Fn(R, R) -> R + Sync + Send,
    M: Fn(usize) -> R + Sync + Send,
{
    let policy = auto_policy_range_with(&range, PolicyThresholds::DEFAULT.elementwise);
    transform_reduce_index(policy, range, init, combine, map)
}

// =============================================================================
// COPY
// =============================================================================

/// Clones `src` into the front of `dest`.
///
/// Panics if `dest` is shorter than `src`.
pub fn copy<T>(policy: ExecutionPolicy, src: &[T], dest: &mut [T])
where
    T: Clone + Send + Sync,
{
    let dest = &mut dest[..src.len()];
    match policy {
        ExecutionPolicy::Sequential => dest.clone_from_slice(src),
        ExecutionPolicy::Parallel => dest
            .par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(d, s)| d.clone_from(s)),
    }
}

/// Clones the first `n` elements of `src` into the front of `dest`.
pub fn copy_n<T>(policy: ExecutionPolicy, src: &[T], n: usize, dest: &mut [T])
where
    T: Clone + Send + Sync,
{
    copy(policy, &src[..n], dest);
}

/// [`copy`] with the policy chosen from `src.len()`.
pub fn copy_auto<T>(src: &[T], dest: &mut [T])
where
    T: Clone + Send + Sync,
{
    let policy = auto_policy_with(src.len(), PolicyThresholds::DEFAULT.copy);
    copy(policy, src, dest);
}

/// [`copy_n`] with the policy chosen from `n`.
pub fn copy_n_auto<T>(src: &[T], n: usize, dest: &mut [T])
where
    T: Clone + Send + Sync,
{
    let policy = auto_policy_with(n, PolicyThresholds::DEFAULT.copy);
    copy_n(policy, src, n, dest);
}

// =============================================================================
// SCATTER / GATHER
// =============================================================================

/// Writes `dest[map[i]] = src[i]` for every `i` in `0..src.len()`.
///
/// Panics if `map` is shorter than `src` or if a target lies outside `dest`.
///
/// # Safety
///
/// `map[..src.len()]` must be injective. Duplicate targets are a data race
/// under `Parallel` and leave the slot unspecified under `Sequential`.
/// Debug builds assert injectivity; release builds do not check it.
///
/// # Examples
/// ```
/// use manifold_core::parallel::{scatter, ExecutionPolicy};
/// let mut dest = [0; 3];
/// // SAFETY: [2, 0, 1] is a permutation.
/// unsafe { scatter(ExecutionPolicy::Sequential, &[7, 8, 9], &[2u32, 0, 1], &mut dest) };
/// assert_eq!(dest, [8, 9, 7]);
/// ```
pub unsafe fn scatter<I, T>(policy: ExecutionPolicy, src: &[T], map: &[I], dest: &mut [T])
where
    I: ArrayIndex,
    T: Clone + Send + Sync,
{
    let map = &map[..src.len()];
    debug_assert!(
        is_injective(map, dest.len()),
        "scatter map must be injective and within the destination"
    );
    match policy {
        ExecutionPolicy::Sequential => {
            for (value, &target) in src.iter().zip(map) {
                dest[target.to_usize()] = value.clone();
            }
        }
        ExecutionPolicy::Parallel => {
            let out = SharedSlice::new(dest);
            src.par_iter().zip(map.par_iter()).for_each(|(value, &target)| {
                // SAFETY: the caller guarantees `map` is injective, so no two
                // tasks write the same slot.
                unsafe { out.write(target.to_usize(), value.clone()) }
            });
        }
    }
}

/// [`scatter`] with the policy chosen from `src.len()`.
///
/// # Safety
///
/// Same contract as [`scatter`].
pub unsafe fn scatter_auto<I, T>(src: &[T], map: &[I], dest: &mut [T])
where
    I: ArrayIndex,
    T: Clone + Send + Sync,
{
    let policy = auto_policy_with(src.len(), PolicyThresholds::DEFAULT.indexed);
    // SAFETY: forwarded caller contract.
    unsafe { scatter(policy, src, map, dest) }
}

/// Writes `dest[i] = src[map[i]]` for every `i` in `0..map.len()`.
///
/// Panics if `dest` is shorter than `map` or a map entry lies outside `src`.
pub fn gather<I, T>(policy: ExecutionPolicy, map: &[I], src: &[T], dest: &mut [T])
where
    I: ArrayIndex,
    T: Clone + Send + Sync,
{
    let dest = &mut dest[..map.len()];
    match policy {
        ExecutionPolicy::Sequential => {
            for (slot, &source) in dest.iter_mut().zip(map) {
                *slot = src[source.to_usize()].clone();
            }
        }
        ExecutionPolicy::Parallel => dest
            .par_iter_mut()
            .zip(map.par_iter())
            .for_each(|(slot, &source)| *slot = src[source.to_usize()].clone()),
    }
}

/// [`gather`] with the policy chosen from `map.len()`.
pub fn gather_auto<I, T>(map: &[I], src: &[T], dest: &mut [T])
where
    I: ArrayIndex,
    T: Clone + Send + Sync,
{
    let policy = auto_policy_with(map.len(), PolicyThresholds::DEFAULT.indexed);
    gather(policy, map, src, dest);
}

// =============================================================================
// SEQUENCE
// =============================================================================

/// Writes `dest[i] = i` for every slot.
pub fn sequence<I: ArrayIndex>(policy: ExecutionPolicy, dest: &mut [I]) {
    for_each_indexed(policy, dest, |i, slot| *slot = I::from_usize(i));
}

/// [`sequence`] with the policy chosen from `dest.len()`.
pub fn sequence_auto<I: ArrayIndex>(dest: &mut [I]) {
    let policy = auto_policy_with(dest.len(), PolicyThresholds::DEFAULT.indexed);
    sequence(policy, dest);
}

// =============================================================================
// INTERNALS
// =============================================================================

/// Checks that every map entry is in bounds and appears at most once.
fn is_injective<I: ArrayIndex>(map: &[I], bound: usize) -> bool {
    let mut seen = vec![false; bound];
    map.iter().all(|&target| {
        let target = target.to_usize();
        target < bound && !std::mem::replace(&mut seen[target], true)
    })
}

/// Mutable slice shared across rayon tasks for index-disjoint writes.
struct SharedSlice<'a, T> {
    ptr: *mut T,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

// SAFETY: the wrapper only hands out writes through `write`, whose caller
// guarantees disjoint indices; `T: Send` lets values move to other threads.
unsafe impl<T: Send> Send for SharedSlice<'_, T> {}
// SAFETY: see above.
unsafe impl<T: Send> Sync for SharedSlice<'_, T> {}

impl<'a, T> SharedSlice<'a, T> {
    fn new(slice: &'a mut [T]) -> Self {
        Self {
            ptr: slice.as_mut_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Replaces the element at `index`, dropping the old value.
    ///
    /// # Safety
    ///
    /// No other thread may access `index` concurrently.
    unsafe fn write(&self, index: usize, value: T) {
        assert!(
            index < self.len,
            "scatter target {index} out of bounds for length {}",
            self.len
        );
        // SAFETY: `index` is in bounds and the caller rules out concurrent
        // access to this slot.
        unsafe { *self.ptr.add(index) = value };
    }
}

#[cfg(test)]
mod tests;
