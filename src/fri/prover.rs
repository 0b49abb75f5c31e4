use tracing::debug;

use super::folding::fold_layer;
use super::layer::FriLayer;
use super::types::FriError;
use crate::channel::Channel;
use crate::field::{Domain, FieldElement};
use crate::proof::labels;

/// Output of the FRI commit phase.
#[derive(Debug, Clone)]
pub struct FriCommitment {
    layers: Vec<FriLayer>,
    betas: Vec<FieldElement>,
    last_layer: Vec<FieldElement>,
}

impl FriCommitment {
    /// Committed layers, largest first.
    pub fn layers(&self) -> &[FriLayer] {
        &self.layers
    }

    /// Folding challenges, one per committed layer.
    pub fn betas(&self) -> &[FieldElement] {
        &self.betas
    }

    /// Uncommitted evaluations after the last fold.
    pub fn last_layer(&self) -> &[FieldElement] {
        &self.last_layer
    }

    /// The constant value of the last layer.
    pub fn last_value(&self) -> FieldElement {
        self.last_layer.first().copied().unwrap_or_default()
    }
}

/// Commits `evaluations` over `domain` and folds `folds` times.
///
/// For every layer `i` the root is sent as `cp_{i}_root` and `β_i` is drawn
/// as `cp_{i+1}_beta`. The last layer must be constant; its value is sent
/// as `last_fri_layer`.
pub fn fri_commit(
    evaluations: Vec<FieldElement>,
    domain: Domain,
    folds: usize,
    channel: &mut Channel,
) -> Result<FriCommitment, FriError> {
    let mut layers = Vec::with_capacity(folds);
    let mut betas = Vec::with_capacity(folds);
    let mut current = evaluations;
    let mut current_domain = domain;

    for index in 0..folds {
        let layer = FriLayer::new(index, current_domain, current)?;
        channel.send_digest(&labels::fri_root(index), &layer.root(), true)?;
        let beta = channel.send_random_field_element(&labels::fri_beta(index));
        let (next, next_domain) = fold_layer(layer.evaluations(), layer.domain(), beta)?;
        debug!(layer = index, size = layer.size(), "fri layer committed");
        layers.push(layer);
        betas.push(beta);
        current = next;
        current_domain = next_domain;
    }

    let last_value = *current.first().ok_or(FriError::EmptyLayer)?;
    if current.iter().any(|value| *value != last_value) {
        return Err(FriError::NonConstantLastLayer {
            size: current.len(),
        });
    }
    channel.send_field_element(labels::LAST_FRI_LAYER, last_value, true)?;

    Ok(FriCommitment {
        layers,
        betas,
        last_layer: current,
    })
}

/// Sends the openings of every layer at `index` and its sibling, then the
/// last-layer value again. Nothing here is mixed into the channel state.
pub fn fri_decommit(
    commitment: &FriCommitment,
    index: usize,
    channel: &mut Channel,
) -> Result<(), FriError> {
    for layer in commitment.layers() {
        let opening = layer.open(index)?;
        let value_label = labels::fri_value(layer.index());
        let sibling_label = labels::fri_sibling(layer.index());
        channel.send_field_element(&value_label, opening.value, false)?;
        channel.send_decommitment(&labels::auth(&value_label), &opening.decommitment, false)?;
        channel.send_field_element(&sibling_label, opening.sibling_value, false)?;
        channel.send_decommitment(
            &labels::auth(&sibling_label),
            &opening.sibling_decommitment,
            false,
        )?;
    }
    channel.send_field_element(labels::LAST_FRI_LAYER, commitment.last_value(), false)?;
    Ok(())
}
