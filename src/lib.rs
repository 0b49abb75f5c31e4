//! FibonacciSq STARK over `F_p`, `p = 3 · 2^30 + 1`.
//!
//! The prover commits to a low-degree extension of a FibonacciSq trace,
//! combines the boundary and transition constraints into a composition
//! polynomial, and proves its degree with a binary FRI. A Fiat–Shamir
//! [`Channel`](channel::Channel) records every exchanged value in a flat
//! [`Proof`] log which the verifier replays.
//!
//! ```no_run
//! use fibsq_stark::{prove_fibonacci_square, verify, StarkConfig};
//!
//! let config = StarkConfig::default();
//! let (proof, public_inputs, _state) = prove_fibonacci_square(&config)?;
//! verify(&config, &public_inputs, &proof)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod air;
pub mod channel;
pub mod config;
pub mod fft;
pub mod field;
pub mod fri;
pub mod hash;
pub mod merkle;
pub mod proof;
pub mod ser;
pub mod utils;

pub use air::PublicInputs;
pub use config::{ConfigError, StarkConfig, StarkConfigBuilder};
pub use field::FieldElement;
pub use proof::{
    prove, prove_fibonacci_square, verify, verify_bytes, verify_with_state, Proof, ProverError,
    VerifyError,
};
