use super::folding::fold_pair;
use super::types::{query_positions, FriError, LayerOpening};
use crate::channel::Channel;
use crate::field::FieldElement;
use crate::hash::Hash;
use crate::merkle::MerkleTree;
use crate::proof::labels;

/// Receives and authenticates the opening of layer `layer` (size
/// `layer_size`, root `root`) at query `index` and its sibling.
pub fn receive_layer_opening(
    channel: &mut Channel,
    layer: usize,
    layer_size: usize,
    root: &Hash,
    index: usize,
) -> Result<LayerOpening, FriError> {
    let (position, sibling_position) = query_positions(index, layer_size);
    let value_label = labels::fri_value(layer);
    let sibling_label = labels::fri_sibling(layer);

    let value = channel.receive_field_element(&value_label, false)?;
    let decommitment = channel.receive_decommitment(&labels::auth(&value_label), false)?;
    let sibling_value = channel.receive_field_element(&sibling_label, false)?;
    let sibling_decommitment = channel.receive_decommitment(&labels::auth(&sibling_label), false)?;

    MerkleTree::verify_with_leaf_count(position, value, &decommitment, root, layer_size)?;
    MerkleTree::verify_with_leaf_count(
        sibling_position,
        sibling_value,
        &sibling_decommitment,
        root,
        layer_size,
    )?;

    Ok(LayerOpening {
        position,
        value,
        decommitment,
        sibling_position,
        sibling_value,
        sibling_decommitment,
    })
}

/// Checks that folding each opened pair with its `β` yields the next layer's
/// opened value, and the last fold yields `last_value`.
///
/// `x` is the query point in the first layer; it is squared per layer.
pub fn check_folding_chain(
    x: FieldElement,
    openings: &[LayerOpening],
    betas: &[FieldElement],
    last_value: FieldElement,
) -> Result<(), FriError> {
    let mut x = x;
    for (layer, (opening, beta)) in openings.iter().zip(betas).enumerate() {
        let folded = fold_pair(opening.value, opening.sibling_value, x, *beta)?;
        let expected = openings
            .get(layer + 1)
            .map(|next| next.value)
            .unwrap_or(last_value);
        if folded != expected {
            return Err(FriError::FoldingMismatch { layer });
        }
        x = x.square();
    }
    Ok(())
}
