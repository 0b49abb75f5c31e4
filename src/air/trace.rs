//! FibonacciSq witness generation and trace validation.

use serde::{Deserialize, Serialize};

use crate::field::{Domain, FieldElement};

/// Default second element of the sequence.
pub const DEFAULT_SECOND: u64 = 3_141_592;

/// Errors raised while validating a supplied trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// The trace does not have `domain_size - 1` rows.
    #[error("trace has {got} rows, expected {expected}")]
    Length {
        /// Required number of rows.
        expected: usize,
        /// Supplied number of rows.
        got: usize,
    },
    /// `a[row] != a[row - 1]^2 + a[row - 2]^2`.
    #[error("FibonacciSq recurrence violated at row {row}")]
    Recurrence {
        /// First row that breaks the recurrence.
        row: usize,
    },
}

/// Generator for `a_{n+2} = a_{n+1}^2 + a_n^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FibonacciSq {
    /// `a_0`.
    pub first: FieldElement,
    /// `a_1`.
    pub second: FieldElement,
}

impl Default for FibonacciSq {
    fn default() -> Self {
        Self {
            first: FieldElement::ONE,
            second: FieldElement::new(DEFAULT_SECOND),
        }
    }
}

impl FibonacciSq {
    /// Creates a generator with custom seeds.
    pub fn new(first: FieldElement, second: FieldElement) -> Self {
        Self { first, second }
    }

    /// Returns the first `length` terms.
    pub fn generate(&self, length: usize) -> Vec<FieldElement> {
        let mut trace = Vec::with_capacity(length);
        trace.extend([self.first, self.second].into_iter().take(length));
        while trace.len() < length {
            let n = trace.len();
            trace.push(trace[n - 1].square() + trace[n - 2].square());
        }
        trace
    }
}

/// Checks the trace length and the recurrence on every row.
pub fn validate_trace(trace: &[FieldElement], expected_len: usize) -> Result<(), TraceError> {
    if trace.len() != expected_len {
        return Err(TraceError::Length {
            expected: expected_len,
            got: trace.len(),
        });
    }
    match trace
        .windows(3)
        .position(|w| w[2] != w[1].square() + w[0].square())
    {
        Some(offset) => Err(TraceError::Recurrence { row: offset + 2 }),
        None => Ok(()),
    }
}

/// Extends a trace of `N - 1` values to `N` values such that the interpolant
/// over the `N`-element subgroup has degree at most `N - 2`.
///
/// The top coefficient is `N^{-1} · Σ v_i ω^i`, so the missing value is
/// `v_{N-1} = -ω · Σ_{i<N-1} v_i ω^i`.
pub fn pad_trace(trace: &[FieldElement], domain: &Domain) -> Vec<FieldElement> {
    let omega = domain.generator();
    let mut power = FieldElement::ONE;
    let mut acc = FieldElement::ZERO;
    for value in trace {
        acc += *value * power;
        power *= omega;
    }
    let mut padded = Vec::with_capacity(trace.len() + 1);
    padded.extend_from_slice(trace);
    padded.push(-(omega * acc));
    padded
}
