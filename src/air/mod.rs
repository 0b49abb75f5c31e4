//! Algebraic description of the FibonacciSq computation.
//!
//! * [`trace`] generates and validates the witness `a_0 .. a_{N-2}`.
//! * [`inputs`] holds the public boundary values.
//! * [`constraints`] turns trace evaluations into the three constraint
//!   quotients and their random linear combination.

pub mod constraints;
pub mod inputs;
pub mod trace;

pub use constraints::{FibonacciSqAir, Neighbourhood, Quotient};
pub use inputs::PublicInputs;
pub use trace::{pad_trace, validate_trace, FibonacciSq, TraceError};
