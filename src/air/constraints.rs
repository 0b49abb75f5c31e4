//! FibonacciSq constraint quotients as numerator/denominator pairs.
//!
//! With `g` the generator of the `N`-element trace subgroup:
//!
//! * `p0 = (f(x) - a_0) / (x - 1)`
//! * `p1 = (f(x) - a_{N-2}) / (x - g^{N-2})`
//! * `p2 = (f(g²x) - f(gx)² - f(x)²) · (x - g^{N-3})(x - g^{N-2})(x - g^{N-1}) / (x^N - 1)`
//!
//! The composition is `α0·p0 + α1·p1 + α2·p2`.

use super::inputs::PublicInputs;
use crate::field::{batch_inverse, Domain, DomainError, FieldElement, FieldError};
use crate::utils::parallel_map;

/// Unevaluated quotient at a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotient {
    /// Constraint numerator.
    pub numerator: FieldElement,
    /// Vanishing denominator.
    pub denominator: FieldElement,
}

impl Quotient {
    /// Divides, failing on a zero denominator.
    pub fn value(&self) -> Result<FieldElement, FieldError> {
        self.numerator.try_div(self.denominator)
    }
}

/// Trace values needed to evaluate every constraint at a point `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbourhood {
    /// `x`.
    pub x: FieldElement,
    /// `f(x)`.
    pub fx: FieldElement,
    /// `f(g·x)`.
    pub fgx: FieldElement,
    /// `f(g²·x)`.
    pub fggx: FieldElement,
}

/// The FibonacciSq AIR bound to a trace domain and public inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciSqAir {
    trace_size: usize,
    public_inputs: PublicInputs,
    result_point: FieldElement,
    excluded: [FieldElement; 3],
}

impl FibonacciSqAir {
    /// Binds the constraint system to a trace subgroup of size `N >= 4`.
    pub fn new(trace_domain: &Domain, public_inputs: PublicInputs) -> Result<Self, DomainError> {
        let size = trace_domain.size();
        if size < 4 {
            return Err(DomainError::UnsupportedSize { size });
        }
        let g = trace_domain.generator();
        let point = |exponent: usize| g.pow(exponent as u64);
        Ok(Self {
            trace_size: size,
            public_inputs,
            result_point: point(size - 2),
            excluded: [point(size - 3), point(size - 2), point(size - 1)],
        })
    }

    /// Public inputs this AIR enforces.
    pub fn public_inputs(&self) -> &PublicInputs {
        &self.public_inputs
    }

    /// `p0`: the first value equals `a_0`.
    pub fn p0(&self, at: &Neighbourhood) -> Quotient {
        Quotient {
            numerator: at.fx - self.public_inputs.initial,
            denominator: at.x - FieldElement::ONE,
        }
    }

    /// `p1`: the value at `g^{N-2}` equals the claimed result.
    pub fn p1(&self, at: &Neighbourhood) -> Quotient {
        Quotient {
            numerator: at.fx - self.public_inputs.result,
            denominator: at.x - self.result_point,
        }
    }

    /// `p2`: the recurrence holds on every row that has two successors.
    pub fn p2(&self, at: &Neighbourhood) -> Quotient {
        let transition = at.fggx - at.fgx.square() - at.fx.square();
        let excluded: FieldElement = self.excluded.iter().map(|point| at.x - *point).product();
        Quotient {
            numerator: transition * excluded,
            denominator: at.x.pow(self.trace_size as u64) - FieldElement::ONE,
        }
    }

    /// All three quotients in order.
    pub fn quotients(&self, at: &Neighbourhood) -> [Quotient; 3] {
        [self.p0(at), self.p1(at), self.p2(at)]
    }

    /// `Σ α_k · p_k(x)` at a single point.
    pub fn composition_value(
        &self,
        at: &Neighbourhood,
        alphas: &[FieldElement; 3],
    ) -> Result<FieldElement, FieldError> {
        let mut acc = FieldElement::ZERO;
        for (quotient, alpha) in self.quotients(at).iter().zip(alphas) {
            acc += *alpha * quotient.value()?;
        }
        Ok(acc)
    }

    /// Evaluates the composition over the whole extended domain.
    ///
    /// `trace_lde[j]` is `f` at `domain.element(j)`; since `g = h^B`,
    /// `f(g·x_j)` sits at `(j + B) mod |domain|`.
    pub fn composition_evaluations(
        &self,
        domain: &Domain,
        trace_lde: &[FieldElement],
        alphas: &[FieldElement; 3],
    ) -> Result<Vec<FieldElement>, DomainError> {
        let size = domain.size();
        if trace_lde.len() != size {
            return Err(DomainError::LengthMismatch {
                expected: size,
                got: trace_lde.len(),
            });
        }
        let blowup = size / self.trace_size;
        let points = domain.elements();
        let neighbourhood = |j: usize| Neighbourhood {
            x: points[j],
            fx: trace_lde[j],
            fgx: trace_lde[(j + blowup) % size],
            fggx: trace_lde[(j + 2 * blowup) % size],
        };

        let quotients = parallel_map(size, |j| self.quotients(&neighbourhood(j)));
        let denominators: Vec<FieldElement> = quotients
            .iter()
            .flat_map(|row| row.iter().map(|q| q.denominator))
            .collect();
        let inverses = batch_inverse(&denominators)?;

        Ok(quotients
            .iter()
            .zip(inverses.chunks_exact(3))
            .map(|(row, inv)| {
                row.iter()
                    .zip(inv)
                    .zip(alphas)
                    .map(|((q, d), alpha)| *alpha * q.numerator * *d)
                    .sum::<FieldElement>()
            })
            .collect())
    }
}
