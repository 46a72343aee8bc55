//! Profiling Module - Pure scoring of quiz answers into AI thinking profiles.
//!
//! # Components
//!
//! - `Signal` - The closed set of six behavioral tags
//! - `SignalScorer` - Answers to per-signal counts
//! - `ProfileAssigner` - Counts to one of six profiles (declaration-order tie-break)
//! - `RevealCatalog` - Fixed post-answer text keyed by an option's first signal
//!
//! Everything here is pure and stateless. No ports or adapters are involved.

mod answer;
mod profile;
mod profile_assigner;
mod reveal;
mod score_map;
mod signal;
mod signal_scorer;

pub use answer::Answer;
pub use profile::Profile;
pub use profile_assigner::{ClusterScore, ProfileAssigner, ProfileAssignment};
pub use reveal::{Reveal, RevealCatalog, RevealKey};
pub use score_map::SignalScoreMap;
pub use signal::Signal;
pub use signal_scorer::SignalScorer;
