//! Rule-based insight generation.
//!
//! Everything human-readable that ReelDeck derives from state lives here:
//! the global summary of the asset collection and the per-asset notes
//! written when a metadata probe resolves. No rule consults anything
//! beyond the current collection, so output is deterministic.

mod notes;
mod summary;

pub use notes::probe_notes;
pub use summary::Summarizer;
