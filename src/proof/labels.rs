//! Entry labels of the proof log, in protocol order.

/// Trace commitment.
pub const TRACE_ROOT: &str = "trace_root";
/// Constant value of the last FRI layer; sent twice (mixed, then unmixed).
pub const LAST_FRI_LAYER: &str = "last_fri_layer";
/// Query index draw.
pub const QUERY: &str = "query";
/// `f(x)` opening.
pub const F_X: &str = "f(x)";
/// `f(gx)` opening.
pub const F_GX: &str = "f(gx)";
/// `f(g²x)` opening.
pub const F_GGX: &str = "f(ggx)";

/// Composition coefficient `k` (0, 1 or 2).
pub fn cp_alpha(k: usize) -> String {
    format!("cp_alpha_{k}")
}

/// Root of FRI layer `i`.
pub fn fri_root(layer: usize) -> String {
    format!("cp_{layer}_root")
}

/// Folding challenge drawn after committing layer `i`; named after the layer
/// it produces.
pub fn fri_beta(layer: usize) -> String {
    format!("cp_{}_beta", layer + 1)
}

/// Query opening of FRI layer `i`.
pub fn fri_value(layer: usize) -> String {
    format!("cp_{layer}")
}

/// Sibling opening of FRI layer `i`.
pub fn fri_sibling(layer: usize) -> String {
    format!("cp_{layer} sibling")
}

/// Authentication path label accompanying a value label.
pub fn auth(label: &str) -> String {
    format!("{label} auth")
}
