//! Fiat–Shamir channel shared by the prover and the verifier.
//!
//! | Operation | Log | State update |
//! |-----------|-----|--------------|
//! | `send(label, v, mix=true)` / `receive(label, true)` | entry appended / popped | `digest := H("mix" ‖ digest ‖ counter ‖ len ‖ v)` |
//! | `send(label, v, mix=false)` / `receive(label, false)` | entry appended / popped | none |
//! | `send_random_*` / `receive_random_*` | nothing | `digest := H("draw" ‖ digest ‖ counter)` |
//!
//! Every operation increments `counter`. Counters and lengths are absorbed as
//! little-endian `u64`.

mod core;
mod ser;
mod types;

pub use self::core::Channel;
pub use types::{ChannelError, ChannelRole, ChannelState, ProofEntry, CHANNEL_SEED};
