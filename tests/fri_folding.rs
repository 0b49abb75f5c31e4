use fibsq_stark::channel::Channel;
use fibsq_stark::fft::{evaluate, interpolate};
use fibsq_stark::field::{Domain, FieldElement, Polynomial};
use fibsq_stark::fri::{
    check_folding_chain, fold_layer, fold_pair, fri_commit, fri_decommit, receive_layer_opening,
    FriError,
};
use fibsq_stark::proof::labels;

fn codeword(degree_bound: usize, size: usize) -> (Polynomial, Vec<FieldElement>, Domain) {
    let coefficients = (0..degree_bound as u64)
        .map(|i| FieldElement::from(i * i + 5))
        .collect();
    let poly = Polynomial::new(coefficients);
    let domain = Domain::coset(FieldElement::GENERATOR, size).expect("supported size");
    let evaluations = evaluate(&domain, &poly).expect("evaluation");
    (poly, evaluations, domain)
}

#[test]
fn folding_halves_the_degree() {
    let (poly, evaluations, domain) = codeword(16, 128);
    let beta = FieldElement::from(1234u64);
    let (folded, next_domain) = fold_layer(&evaluations, &domain, beta).unwrap();
    assert_eq!(folded.len(), 64);
    assert_eq!(next_domain, domain.squared().unwrap());

    // g(y) = even(y) + β·odd(y) where f(x) = even(x²) + x·odd(x²).
    let coefficients = &poly.coefficients;
    let expected = Polynomial::new(
        coefficients
            .chunks(2)
            .map(|pair| pair[0] + beta * pair[1])
            .collect(),
    );
    for (y, value) in next_domain.elements().into_iter().zip(&folded) {
        assert_eq!(expected.evaluate(y), *value);
    }
    let recovered = interpolate(&next_domain, &folded).unwrap();
    assert!(recovered.degree().map_or(true, |d| d < 8));
}

#[test]
fn fold_pair_is_symmetric() {
    let x = FieldElement::from(77u64);
    let beta = FieldElement::from(9u64);
    let (a, b) = (FieldElement::from(10u64), FieldElement::from(20u64));
    assert_eq!(fold_pair(a, b, x, beta).unwrap(), fold_pair(b, a, -x, beta).unwrap());
}

#[test]
fn full_chain_on_a_synthetic_polynomial() {
    let (_, evaluations, domain) = codeword(32, 256);
    let folds = 5;
    let mut prover = Channel::prover();
    let commitment = fri_commit(evaluations, domain, folds, &mut prover).unwrap();
    assert_eq!(commitment.layers().len(), folds);
    assert_eq!(commitment.last_layer().len(), 8);
    let index = 201;
    fri_decommit(&commitment, index, &mut prover).unwrap();

    let mut verifier = Channel::verifier(prover.into_entries());
    let mut roots = Vec::new();
    let mut betas = Vec::new();
    for layer in 0..folds {
        roots.push(verifier.receive_digest(&labels::fri_root(layer), true).unwrap());
        betas.push(verifier.receive_random_field_element(&labels::fri_beta(layer)));
    }
    let last = verifier
        .receive_field_element(labels::LAST_FRI_LAYER, true)
        .unwrap();
    assert_eq!(last, commitment.last_value());

    let openings: Vec<_> = roots
        .iter()
        .enumerate()
        .map(|(layer, root)| {
            receive_layer_opening(&mut verifier, layer, 256 >> layer, root, index).unwrap()
        })
        .collect();
    assert_eq!(openings[0].position, 201);
    assert_eq!(openings[0].sibling_position, 73);
    assert_eq!(openings[3].position, 201 % 32);

    let x = domain.element(index).unwrap();
    check_folding_chain(x, &openings, &betas, last).unwrap();
    assert_eq!(
        check_folding_chain(x, &openings, &betas, last + FieldElement::ONE),
        Err(FriError::FoldingMismatch { layer: folds - 1 })
    );
    let mut wrong_beta = betas.clone();
    wrong_beta[1] += FieldElement::ONE;
    assert_eq!(
        check_folding_chain(x, &openings, &wrong_beta, last),
        Err(FriError::FoldingMismatch { layer: 1 })
    );

    assert_eq!(
        verifier.receive_field_element(labels::LAST_FRI_LAYER, false).unwrap(),
        last
    );
    assert!(verifier.is_exhausted());
}

#[test]
fn high_degree_input_is_caught_by_the_prover() {
    let (_, evaluations, domain) = codeword(64, 128);
    let mut prover = Channel::prover();
    assert_eq!(
        fri_commit(evaluations, domain, 3, &mut prover).unwrap_err(),
        FriError::NonConstantLastLayer { size: 16 }
    );
}
