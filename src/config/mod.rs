mod r#impl;
mod structs;

pub use r#impl::{DEFAULT_CONFIG_BASENAME, ENV_PREFIX};
pub use structs::*;
