//! Public boundary values the verifier needs to rebuild `p0` and `p1`.

use serde::{Deserialize, Serialize};

use super::trace::TraceError;
use crate::field::FieldElement;

/// Boundary values of a FibonacciSq trace: `a_0` and `a_{N-2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicInputs {
    /// First trace value, constrained at `x = 1`.
    pub initial: FieldElement,
    /// Last trace value, constrained at `x = g^{N-2}`.
    pub result: FieldElement,
}

impl PublicInputs {
    /// Creates public inputs from explicit values.
    pub fn new(initial: FieldElement, result: FieldElement) -> Self {
        Self { initial, result }
    }

    /// Reads the boundary values off a trace.
    pub fn from_trace(trace: &[FieldElement]) -> Result<Self, TraceError> {
        match (trace.first(), trace.last()) {
            (Some(initial), Some(result)) => Ok(Self::new(*initial, *result)),
            _ => Err(TraceError::Length {
                expected: 1,
                got: 0,
            }),
        }
    }
}
