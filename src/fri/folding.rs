//! The binary FRI folding step.
//!
//! Writing `f(x) = g(x²) + x·h(x²)`, one fold with challenge `β` produces
//! `g(y) + β·h(y)` on the squared domain. Pointwise, for the pair `x, -x`:
//!
//! ```text
//! next(x²) = (f(x) + f(-x)) / 2 + β · (f(x) - f(-x)) / (2x)
//! ```
//!
//! The expression is symmetric in the pair, so verifiers need not know
//! which of the two openings is the "lower" one.

use super::types::FriError;
use crate::field::{batch_inverse, Domain, FieldElement, FieldError};
use crate::utils::parallel_map;

fn two_inverse() -> FieldElement {
    // (p + 1) / 2
    FieldElement::new((FieldElement::MODULUS.value + 1) / 2)
}

/// Folds a single pair `(f(x), f(-x))` at `x`.
pub fn fold_pair(
    value: FieldElement,
    sibling: FieldElement,
    x: FieldElement,
    beta: FieldElement,
) -> Result<FieldElement, FieldError> {
    let half = two_inverse();
    let even = (value + sibling) * half;
    let odd = (value - sibling) * half;
    Ok(even + beta * odd.try_div(x)?)
}

/// Folds a whole layer evaluated over `domain`, returning the next layer and
/// its (squared) domain.
pub fn fold_layer(
    evaluations: &[FieldElement],
    domain: &Domain,
    beta: FieldElement,
) -> Result<(Vec<FieldElement>, Domain), FriError> {
    let size = evaluations.len();
    if size != domain.size() {
        return Err(FriError::Domain(crate::field::DomainError::LengthMismatch {
            expected: domain.size(),
            got: size,
        }));
    }
    if size < 2 || size % 2 != 0 {
        return Err(FriError::OddLayer { size });
    }
    let half = size / 2;
    let next_domain = domain.squared()?;

    let points = domain.elements();
    let x_inverses = batch_inverse(&points[..half])?;
    let half_inv = two_inverse();

    let folded = parallel_map(half, |j| {
        let value = evaluations[j];
        let sibling = evaluations[j + half];
        let even = (value + sibling) * half_inv;
        let odd = (value - sibling) * half_inv;
        even + beta * odd * x_inverses[j]
    });
    Ok((folded, next_domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fft::evaluate;
    use crate::field::Polynomial;

    #[test]
    fn fold_matches_even_odd_split() {
        // f = 1 + 2x + 3x^2 + 4x^3  ⇒  g = 1 + 3y, h = 2 + 4y
        let poly = Polynomial::new(vec![1u64.into(), 2u64.into(), 3u64.into(), 4u64.into()]);
        let domain = Domain::coset(FieldElement::GENERATOR, 8).unwrap();
        let evals = evaluate(&domain, &poly).unwrap();
        let beta = FieldElement::from(10u64);
        let (folded, next) = fold_layer(&evals, &domain, beta).unwrap();

        let expected = Polynomial::new(vec![21u64.into(), 43u64.into()]);
        assert_eq!(folded, evaluate(&next, &expected).unwrap());
    }

    #[test]
    fn pair_fold_is_symmetric() {
        let x = FieldElement::from(12345u64);
        let (a, b, beta) = (7u64.into(), 99u64.into(), 5u64.into());
        assert_eq!(
            fold_pair(a, b, x, beta).unwrap(),
            fold_pair(b, a, -x, beta).unwrap()
        );
    }

    #[test]
    fn single_value_cannot_fold() {
        let domain = Domain::subgroup(1).unwrap();
        assert_eq!(
            fold_layer(&[FieldElement::ONE], &domain, FieldElement::ONE),
            Err(FriError::OddLayer { size: 1 })
        );
    }
}
