#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
static PARALLEL_ENABLED: AtomicBool = AtomicBool::new(true);

const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Below this many items work always runs sequentially.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Chunk size used when splitting `total_items` across workers.
pub fn preferred_chunk_size(total_items: usize) -> usize {
    DEFAULT_CHUNK_SIZE.min(total_items.max(1))
}

/// Returns whether rayon-backed parallelism is currently active.
#[cfg(feature = "parallel")]
pub fn parallelism_enabled() -> bool {
    PARALLEL_ENABLED.load(Ordering::SeqCst)
}

/// Returns whether rayon-backed parallelism is currently active.
#[cfg(not(feature = "parallel"))]
pub fn parallelism_enabled() -> bool {
    false
}

/// Toggles parallelism until the returned guard is dropped.
#[cfg(feature = "parallel")]
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    let previous = PARALLEL_ENABLED.swap(enabled, Ordering::SeqCst);
    ParallelismGuard { previous }
}

/// Toggles parallelism until the returned guard is dropped.
#[cfg(not(feature = "parallel"))]
pub fn set_parallelism(_enabled: bool) -> ParallelismGuard {
    ParallelismGuard {}
}

/// Restores the previous parallelism setting on drop.
#[must_use = "parallelism is restored as soon as the guard is dropped"]
pub struct ParallelismGuard {
    #[cfg(feature = "parallel")]
    previous: bool,
}

#[cfg(feature = "parallel")]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        PARALLEL_ENABLED.store(self.previous, Ordering::SeqCst);
    }
}

#[cfg(not(feature = "parallel"))]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {}
}

/// Computes `f(0), f(1), .., f(len - 1)` in order.
///
/// Runs on rayon when the feature is compiled in, enabled, and `len` exceeds
/// [`PARALLEL_THRESHOLD`]; the output is identical either way.
pub fn parallel_map<T, F>(len: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    if parallelism_enabled() && len > PARALLEL_THRESHOLD {
        return (0..len)
            .into_par_iter()
            .with_min_len(preferred_chunk_size(len))
            .map(f)
            .collect();
    }
    (0..len).map(f).collect()
}

/// Fallible variant of [`parallel_map`]; returns the first error by index.
pub fn try_parallel_map<T, E, F>(len: usize, f: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(usize) -> Result<T, E> + Sync + Send,
{
    parallel_map(len, f).into_iter().collect()
}
