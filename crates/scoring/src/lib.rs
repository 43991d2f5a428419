//! Candidate scoring and selection.
//!
//! This crate is the decision core of the tool. It reconciles several weak
//! signals about a search result (channel trust, channel reach, duration
//! fit, licensing keywords in the title) into a single verdict, and picks
//! the best accepted candidate out of a result sequence.
//!
//! ## Architecture
//! Scoring is a pure function: [`Scorer::evaluate`] maps one candidate plus
//! one request to a [`Verdict`], with no I/O and no retained state. Checks
//! run in a fixed order and a rejecting check ends evaluation immediately;
//! points accumulated before a rejection never leak into the result.
//! Selection ([`select_best`]) scans candidates in source order and keeps
//! the first best-scoring one.
//!
//! ## Example Usage
//! ```ignore
//! use manifest::{ScoreWeights, TrustList};
//! use scoring::{select_best, Scorer, SelectionOutcome};
//!
//! let scorer = Scorer::new(trust_list, ScoreWeights::default());
//! match select_best(&scorer, &candidates, &request) {
//!     SelectionOutcome::Selected { candidate, score } => { /* acquire it */ }
//!     SelectionOutcome::NoneFound => { /* skip this request */ }
//! }
//! ```

pub mod scorer;
pub mod selector;
pub mod verdict;

// Re-export main types
pub use scorer::Scorer;
pub use selector::select_best;
pub use verdict::{SelectionOutcome, Verdict};
