//! Application runtime
//!
//! - `orchestrator`: single and batch lookups (fetch → merge → render)
//! - `modes`: command-line dispatch

pub mod modes;
pub mod orchestrator;

pub use orchestrator::{BatchSummary, LookupOutcome, QueryOptions, QueryOrchestrator};
