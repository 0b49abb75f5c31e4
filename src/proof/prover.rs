//! FibonacciSq prover pipeline.
//!
//! 1. Validate the configuration and the trace.
//! 2. Pad, interpolate and extend the trace; commit and send `trace_root`.
//! 3. Draw `cp_alpha_0..2` and evaluate the composition over the coset.
//! 4. Run the FRI commit phase down to a constant layer.
//! 5. Draw the query index and decommit the trace and every FRI layer.

use tracing::{debug, instrument};

use crate::air::{pad_trace, validate_trace, FibonacciSq, FibonacciSqAir, PublicInputs};
use crate::channel::{Channel, ChannelState};
use crate::config::StarkConfig;
use crate::field::FieldElement;
use crate::fri::{fri_commit, fri_decommit};
use crate::merkle::MerkleTree;
use crate::proof::errors::ProverError;
use crate::proof::labels;
use crate::proof::types::Proof;

/// Labels of the three trace openings and their offsets in multiples of the
/// blowup factor.
pub(crate) const TRACE_OPENINGS: [(&str, usize); 3] =
    [(labels::F_X, 0), (labels::F_GX, 1), (labels::F_GGX, 2)];

/// Produces a proof that `trace` is a FibonacciSq sequence of
/// `config.trace_length()` values.
///
/// Returns the proof log together with the final channel state, which the
/// verifier reproduces on acceptance.
#[instrument(
    level = "info",
    skip_all,
    fields(domain_size = config.domain_size(), blowup = config.domain_ex_mult())
)]
pub fn prove(
    config: &StarkConfig,
    trace: &[FieldElement],
) -> Result<(Proof, ChannelState), ProverError> {
    config.validate()?;
    validate_trace(trace, config.trace_length())?;
    let public_inputs = PublicInputs::from_trace(trace)?;
    let lde = config.lde()?;
    let extended_size = config.extended_size();
    let mut channel = Channel::prover();

    let padded = pad_trace(trace, lde.trace_domain());
    let (_, trace_lde) = lde.extend(&padded)?;
    let trace_tree = MerkleTree::new(trace_lde)?;
    channel.send_digest(labels::TRACE_ROOT, &trace_tree.root(), true)?;
    debug!(root = %trace_tree.root().to_hex(), "trace committed");

    let alphas = [0, 1, 2].map(|k| channel.send_random_field_element(&labels::cp_alpha(k)));
    let air = FibonacciSqAir::new(lde.trace_domain(), public_inputs)?;
    let composition =
        air.composition_evaluations(lde.extended_domain(), trace_tree.values(), &alphas)?;
    debug!(size = composition.len(), "composition evaluated");

    let fri = fri_commit(
        composition,
        *lde.extended_domain(),
        config.fri_folds(),
        &mut channel,
    )?;
    debug!(layers = fri.layers().len(), last = %fri.last_value(), "fri committed");

    let index = channel.send_random_int(0, (extended_size - 1) as u64, labels::QUERY)? as usize;
    debug!(index, "query drawn");

    for (label, shift) in TRACE_OPENINGS {
        let position = (index + shift * config.domain_ex_mult()) % extended_size;
        let (value, decommitment) = trace_tree.open(position)?;
        channel.send_field_element(label, value, false)?;
        channel.send_decommitment(&labels::auth(label), &decommitment, false)?;
    }
    fri_decommit(&fri, index, &mut channel)?;
    debug!(entries = channel.entries().len(), "decommitment complete");

    let state = channel.state();
    Ok((Proof::from(channel), state))
}

/// Generates the default FibonacciSq trace (`a_0 = 1`, `a_1 = 3141592`) of
/// the configured length and proves it.
pub fn prove_fibonacci_square(
    config: &StarkConfig,
) -> Result<(Proof, PublicInputs, ChannelState), ProverError> {
    config.validate()?;
    let trace = FibonacciSq::default().generate(config.trace_length());
    let public_inputs = PublicInputs::from_trace(&trace)?;
    let (proof, state) = prove(config, &trace)?;
    Ok((proof, public_inputs, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::air::TraceError;

    fn small() -> StarkConfig {
        StarkConfig::builder()
            .domain_size(16)
            .domain_ex_mult(4)
            .build()
            .unwrap()
    }

    #[test]
    fn proof_follows_protocol_order() {
        let (proof, _, _) = prove_fibonacci_square(&small()).unwrap();
        let labels: Vec<&str> = proof
            .entries()
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        // root, 4 layer roots, last layer, 6 trace entries, 4 × 4 layer
        // entries, last layer again.
        assert_eq!(labels.len(), 1 + 4 + 1 + 6 + 16 + 1);
        assert_eq!(labels[0], "trace_root");
        assert_eq!(&labels[1..5], &["cp_0_root", "cp_1_root", "cp_2_root", "cp_3_root"]);
        assert_eq!(labels[5], "last_fri_layer");
        assert_eq!(labels[6], "f(x)");
        assert_eq!(labels[7], "f(x) auth");
        assert_eq!(labels[12], "cp_0");
        assert_eq!(labels[15], "cp_0 sibling auth");
        assert_eq!(labels.last(), Some(&"last_fri_layer"));
    }

    #[test]
    fn rejects_invalid_traces() {
        let config = small();
        let mut trace = FibonacciSq::default().generate(config.trace_length());
        trace[7] += FieldElement::ONE;
        assert_eq!(
            prove(&config, &trace),
            Err(ProverError::InvalidTrace(TraceError::Recurrence { row: 7 }))
        );
        assert_eq!(
            prove(&config, &trace[..5]),
            Err(ProverError::InvalidTrace(TraceError::Length { expected: 15, got: 5 }))
        );
    }
}
