//! Constraint tracking and candidate pruning
//!
//! The engine: what a round of feedback teaches us, which words survive it,
//! and which survivor to suggest next.

mod constraints;
mod pruner;
mod scoring;
mod session;

pub use constraints::ConstraintState;
pub use pruner::{PARALLEL_THRESHOLD, prune, prune_candidates};
pub use scoring::{FrequencyTable, Scorer, recommend};
pub use session::{RoundOutcome, Session};
