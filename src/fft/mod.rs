//! Radix-2 number-theoretic transforms over the two-adic subgroups of `F_p`.
//!
//! Forward transforms take coefficients to evaluations in natural order,
//! inverse transforms go back. Coset variants fold the offset into the
//! coefficients so that a single subgroup transform suffices.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::field::{Domain, DomainError, FieldElement, Polynomial};
#[cfg(feature = "parallel")]
use crate::utils::{parallel::PARALLEL_THRESHOLD, parallelism_enabled};

pub mod lde;

pub use lde::LowDegreeExtension;

fn bit_reverse_permute(values: &mut [FieldElement]) {
    let n = values.len();
    if n <= 1 {
        return;
    }
    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if i < j {
            values.swap(i, j);
        }
    }
}

fn butterfly_block(block: &mut [FieldElement], twiddles: &[FieldElement]) {
    let half = twiddles.len();
    for (j, twiddle) in twiddles.iter().enumerate() {
        let u = block[j];
        let v = block[j + half] * *twiddle;
        block[j] = u + v;
        block[j + half] = u - v;
    }
}

/// In-place forward transform; `root` must have multiplicative order `values.len()`.
///
/// Input coefficients in natural order, output evaluations
/// `values[i] = Σ c_j · root^{ij}` in natural order.
pub fn ntt(values: &mut [FieldElement], root: FieldElement) {
    let n = values.len();
    debug_assert!(n.is_power_of_two() || n == 0);
    bit_reverse_permute(values);

    let mut len = 2;
    while len <= n {
        let step = root.pow((n / len) as u64);
        let mut twiddles = Vec::with_capacity(len / 2);
        let mut w = FieldElement::ONE;
        for _ in 0..len / 2 {
            twiddles.push(w);
            w *= step;
        }

        #[cfg(feature = "parallel")]
        if parallelism_enabled() && n >= PARALLEL_THRESHOLD && n / len > 1 {
            values
                .par_chunks_mut(len)
                .for_each(|block| butterfly_block(block, &twiddles));
            len <<= 1;
            continue;
        }
        for block in values.chunks_mut(len) {
            butterfly_block(block, &twiddles);
        }
        len <<= 1;
    }
}

/// In-place inverse of [`ntt`] for the same `root`.
pub fn intt(values: &mut [FieldElement], root: FieldElement) -> Result<(), DomainError> {
    if values.is_empty() {
        return Ok(());
    }
    ntt(values, root.inv()?);
    let scale = FieldElement::from(values.len() as u64).inv()?;
    for value in values.iter_mut() {
        *value *= scale;
    }
    Ok(())
}

/// Interpolates the unique polynomial of degree `< size` through
/// `(domain.element(i), evaluations[i])`.
pub fn interpolate(domain: &Domain, evaluations: &[FieldElement]) -> Result<Polynomial, DomainError> {
    if evaluations.len() != domain.size() {
        return Err(DomainError::LengthMismatch {
            expected: domain.size(),
            got: evaluations.len(),
        });
    }
    let mut coefficients = evaluations.to_vec();
    intt(&mut coefficients, domain.generator())?;

    // p(offset · y) = q(y)  ⇒  p_j = q_j · offset^{-j}
    if domain.offset() != FieldElement::ONE {
        let offset_inv = domain.offset().inv()?;
        let mut factor = FieldElement::ONE;
        for coefficient in coefficients.iter_mut() {
            *coefficient *= factor;
            factor *= offset_inv;
        }
    }
    Ok(Polynomial::new(coefficients))
}

/// Evaluates `poly` over every point of `domain`, in natural order.
///
/// Fails if the polynomial has more coefficients than the domain has points.
pub fn evaluate(domain: &Domain, poly: &Polynomial) -> Result<Vec<FieldElement>, DomainError> {
    let size = domain.size();
    if poly.coefficients.len() > size {
        return Err(DomainError::LengthMismatch {
            expected: size,
            got: poly.coefficients.len(),
        });
    }
    let mut values = Vec::with_capacity(size);
    let mut factor = FieldElement::ONE;
    for coefficient in &poly.coefficients {
        values.push(*coefficient * factor);
        factor *= domain.offset();
    }
    values.resize(size, FieldElement::ZERO);
    ntt(&mut values, domain.generator());
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<FieldElement> {
        (0..n as u64).map(|i| FieldElement::from(i * i + 7)).collect()
    }

    #[test]
    fn ntt_matches_naive_evaluation() {
        let domain = Domain::subgroup(8).unwrap();
        let poly = Polynomial::new(sample(8));
        let fast = evaluate(&domain, &poly).unwrap();
        let naive: Vec<_> = domain.elements().into_iter().map(|x| poly.evaluate(x)).collect();
        assert_eq!(fast, naive);
    }

    #[test]
    fn coset_roundtrip() {
        let domain = Domain::coset(FieldElement::GENERATOR, 32).unwrap();
        let evaluations = sample(32);
        let poly = interpolate(&domain, &evaluations).unwrap();
        assert_eq!(evaluate(&domain, &poly).unwrap(), evaluations);
        for (x, y) in domain.elements().into_iter().zip(&evaluations) {
            assert_eq!(poly.evaluate(x), *y);
        }
    }

    #[test]
    fn size_one_is_identity() {
        let mut values = vec![FieldElement::from(9u64)];
        ntt(&mut values, FieldElement::ONE);
        assert_eq!(values, vec![FieldElement::from(9u64)]);
    }

    #[test]
    fn length_mismatch() {
        let domain = Domain::subgroup(4).unwrap();
        assert_eq!(
            interpolate(&domain, &sample(3)),
            Err(DomainError::LengthMismatch { expected: 4, got: 3 })
        );
        assert!(evaluate(&domain, &Polynomial::new(sample(5))).is_err());
    }
}
