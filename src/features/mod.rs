//! Stages of the summary pipeline

pub mod audit;
pub mod collect;
pub mod deliver;
pub mod summarize;
