//! Core audit pipeline stages.
//!
//! Data flows strictly one way: preprocess → master join → rules →
//! roll-up. Every stage takes immutable references (the preprocessor
//! mutates the freshly loaded dataset in place before anything else reads
//! it) and no stage reads back from a downstream one.

pub mod master;
pub mod preprocess;
pub mod rollup;
pub mod rules;
pub mod statistics;

pub use master::build_master;
pub use preprocess::preprocess;
pub use rollup::{FlagSummary, Rollup, RollupRow, RuleTally, aggregate};
pub use rules::{FlagSet, FlaggedRow, Rule, apply_rules};
pub use statistics::{ExplorationReport, FrequencyTable, NumericSummary, explore};
