//! # Proof module overview
//!
//! ```text
//! proof
//! ├── labels    - entry labels of the proof log
//! ├── types     - [`Proof`], the ordered entry log
//! ├── ser       - byte encoding of [`Proof`]
//! ├── prover    - [`prove`] and [`prove_fibonacci_square`]
//! ├── verifier  - [`verify`], [`verify_bytes`], [`verify_with_state`]
//! └── errors    - [`ProverError`], [`VerifyError`] and the rejection taxonomy
//! ```

pub mod errors;
pub mod labels;
pub mod prover;
pub mod ser;
pub mod types;
pub mod verifier;

pub use crate::air::PublicInputs;
pub use errors::{InvalidCheck, ProverError, RejectReason, VerifierStep, VerifyError};
pub use prover::{prove, prove_fibonacci_square};
pub use types::{Proof, PROOF_MAGIC, PROOF_VERSION};
pub use verifier::{verify, verify_bytes, verify_with_state};
