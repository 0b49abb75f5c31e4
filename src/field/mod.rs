//! Field arithmetic primitives for the FibonacciSq STARK.
//! Contains the prime field, evaluation domains and dense polynomials.

pub mod domain;
pub mod polynomial;
pub mod prime_field;

pub use domain::{Domain, DomainError};
pub use polynomial::Polynomial;
pub use prime_field::{batch_inverse, CanonicalSerialize, FieldElement, FieldError};
