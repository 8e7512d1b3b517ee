//! prospect-ranker — Lead propensity scoring engine.
//! Pipeline: normalise → merge → score → rank.

pub mod merge;
pub mod normalise;
pub mod pipeline;
pub mod scorer;
pub mod weights;
