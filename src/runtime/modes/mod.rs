//! Mode routing
//!
//! Only one execution mode exists: answering queries from the command line.

pub mod query;

pub use query::{run_query, version_line};
