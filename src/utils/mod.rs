//! Utility helpers shared by the prover and verifier.
//! Currently only the rayon toggles used by the optional `parallel` feature.

pub mod parallel;

pub use parallel::{
    parallel_map, parallelism_enabled, preferred_chunk_size, set_parallelism, try_parallel_map,
    ParallelismGuard,
};
