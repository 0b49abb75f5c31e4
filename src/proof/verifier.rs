//! FibonacciSq verifier.
//!
//! The verifier replays the prover's channel calls against the proof log in
//! a fixed order, authenticating every opening against its commitment, and
//! only then runs the algebraic checks:
//!
//! ```text
//! ReceiveTraceRoot → DeriveAlphas → [ReceiveFriRoot(i) → DeriveBeta(i)]*
//!   → ReceiveLastLayer → DeriveQueryIndex → VerifyTraceOpenings
//!   → VerifyFriOpenings(i)* → ConsumeProof → CheckCompositionIdentity
//!   → CheckFriFoldingChain(i)* → accept
//! ```

use tracing::{debug, instrument, trace};

use crate::air::{FibonacciSqAir, Neighbourhood, PublicInputs};
use crate::channel::{Channel, ChannelState};
use crate::config::StarkConfig;
use crate::field::FieldElement;
use crate::fri::{check_folding_chain, receive_layer_opening, FriError};
use crate::merkle::MerkleTree;
use crate::proof::errors::{AtStep, InvalidCheck, VerifierStep, VerifyError};
use crate::proof::labels;
use crate::proof::prover::TRACE_OPENINGS;
use crate::proof::types::Proof;

/// Verifies `proof` for `public_inputs` under `config`.
pub fn verify(
    config: &StarkConfig,
    public_inputs: &PublicInputs,
    proof: &Proof,
) -> Result<(), VerifyError> {
    verify_with_state(config, public_inputs, proof).map(|_| ())
}

/// Decodes `bytes` with [`Proof::from_bytes`] and verifies the result.
pub fn verify_bytes(
    config: &StarkConfig,
    public_inputs: &PublicInputs,
    bytes: &[u8],
) -> Result<(), VerifyError> {
    let proof = Proof::from_bytes(bytes).at(VerifierStep::DecodeProof)?;
    verify(config, public_inputs, &proof)
}

/// Verifies `proof` and returns the final channel state, which equals the
/// state the prover reported.
#[instrument(
    level = "info",
    skip_all,
    fields(domain_size = config.domain_size(), blowup = config.domain_ex_mult())
)]
pub fn verify_with_state(
    config: &StarkConfig,
    public_inputs: &PublicInputs,
    proof: &Proof,
) -> Result<ChannelState, VerifyError> {
    use VerifierStep::*;

    config.validate().at(Configure)?;
    let lde = config.lde().at(Configure)?;
    let air = FibonacciSqAir::new(lde.trace_domain(), *public_inputs).at(Configure)?;
    let extended_size = config.extended_size();
    let folds = config.fri_folds();
    let mut channel = Channel::verifier(proof.entries().to_vec());

    let trace_root = channel
        .receive_digest(labels::TRACE_ROOT, true)
        .at(ReceiveTraceRoot)?;
    trace!(step = %ReceiveTraceRoot, root = %trace_root.to_hex());

    let alphas = [0, 1, 2].map(|k| channel.receive_random_field_element(&labels::cp_alpha(k)));
    trace!(step = %DeriveAlphas);

    let mut roots = Vec::with_capacity(folds);
    let mut betas = Vec::with_capacity(folds);
    for layer in 0..folds {
        let root = channel
            .receive_digest(&labels::fri_root(layer), true)
            .at(ReceiveFriRoot(layer))?;
        roots.push(root);
        betas.push(channel.receive_random_field_element(&labels::fri_beta(layer)));
        trace!(step = %DeriveBeta(layer));
    }

    let last_value = channel
        .receive_field_element(labels::LAST_FRI_LAYER, true)
        .at(ReceiveLastLayer)?;

    let index = channel
        .receive_random_int(0, (extended_size - 1) as u64, labels::QUERY)
        .at(DeriveQueryIndex)? as usize;
    debug!(index, "query index derived");

    let mut trace_values = [FieldElement::ZERO; 3];
    for (slot, (label, shift)) in trace_values.iter_mut().zip(TRACE_OPENINGS) {
        let position = (index + shift * config.domain_ex_mult()) % extended_size;
        let value = channel
            .receive_field_element(label, false)
            .at(VerifyTraceOpenings)?;
        let decommitment = channel
            .receive_decommitment(&labels::auth(label), false)
            .at(VerifyTraceOpenings)?;
        MerkleTree::verify_with_leaf_count(position, value, &decommitment, &trace_root, extended_size)
            .at(VerifyTraceOpenings)?;
        *slot = value;
    }
    debug!("trace openings authenticated");

    let mut openings = Vec::with_capacity(folds);
    for (layer, root) in roots.iter().enumerate() {
        let opening = receive_layer_opening(&mut channel, layer, extended_size >> layer, root, index)
            .at(VerifyFriOpenings(layer))?;
        openings.push(opening);
    }
    debug!(layers = openings.len(), "fri openings authenticated");

    let repeated = channel
        .receive_field_element(labels::LAST_FRI_LAYER, false)
        .at(ConsumeProof)?;
    if repeated != last_value {
        return Err(VerifyError::new(
            ConsumeProof,
            InvalidCheck::LastLayerMismatch {
                committed: last_value,
                decommitted: repeated,
            },
        ));
    }
    let state = channel.finish().at(ConsumeProof)?;

    let x = lde
        .extended_domain()
        .element(index)
        .at(CheckCompositionIdentity)?;
    let [fx, fgx, fggx] = trace_values;
    let expected = air
        .composition_value(&Neighbourhood { x, fx, fgx, fggx }, &alphas)
        .at(CheckCompositionIdentity)?;
    let first = openings
        .first()
        .map(|opening| opening.value)
        .unwrap_or(last_value);
    if expected != first {
        return Err(VerifyError::new(
            CheckCompositionIdentity,
            InvalidCheck::CompositionIdentity,
        ));
    }

    check_folding_chain(x, &openings, &betas, last_value).map_err(|err| {
        let layer = match err {
            FriError::FoldingMismatch { layer } => layer,
            _ => 0,
        };
        VerifyError::new(CheckFriFoldingChain(layer), err)
    })?;

    debug!("proof accepted");
    Ok(state)
}
