//! User-facing output

pub mod display;
