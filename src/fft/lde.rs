//! Low-degree extension from the trace subgroup to a disjoint coset.

use tracing::trace;

use super::{evaluate, interpolate};
use crate::field::{Domain, DomainError, FieldElement, Polynomial};

/// Pair of domains describing a low-degree extension.
///
/// The trace domain is the subgroup of order `N`; the extended domain is the
/// coset `offset · ⟨h⟩` of order `N · blowup_factor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowDegreeExtension {
    trace: Domain,
    extended: Domain,
}

impl LowDegreeExtension {
    /// Builds the domain pair; both sizes must be supported powers of two.
    pub fn new(
        trace_size: usize,
        blowup_factor: usize,
        offset: FieldElement,
    ) -> Result<Self, DomainError> {
        let extended_size = trace_size
            .checked_mul(blowup_factor)
            .ok_or(DomainError::UnsupportedSize { size: usize::MAX })?;
        Ok(Self {
            trace: Domain::subgroup(trace_size)?,
            extended: Domain::coset(offset, extended_size)?,
        })
    }

    /// The trace subgroup.
    pub fn trace_domain(&self) -> &Domain {
        &self.trace
    }

    /// The extended coset.
    pub fn extended_domain(&self) -> &Domain {
        &self.extended
    }

    /// `|extended| / |trace|`.
    pub fn blowup_factor(&self) -> usize {
        self.extended.size() / self.trace.size()
    }

    /// Interpolates `evaluations` over the trace domain and evaluates the
    /// result over the extended domain.
    pub fn extend(
        &self,
        evaluations: &[FieldElement],
    ) -> Result<(Polynomial, Vec<FieldElement>), DomainError> {
        let poly = interpolate(&self.trace, evaluations)?;
        let extended = evaluate(&self.extended, &poly)?;
        trace!(
            trace_size = self.trace.size(),
            extended_size = self.extended.size(),
            "low-degree extension computed"
        );
        Ok((poly, extended))
    }
}
