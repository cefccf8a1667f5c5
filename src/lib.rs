//! Per-sample genotype-call extraction from Axiom array exports and pairwise
//! concordance between samples.

pub mod cli;
pub mod concordance;
pub mod error;
pub mod extract;
pub mod model;
pub mod output;
pub mod reader;
