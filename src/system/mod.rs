//! System-level modules
//!
//! - Logging initialization
//! - Self-update

pub mod logging;
pub mod update;
