//! IPQuery - IP geolocation lookup across two providers
//!
//! Asks two independent geolocation services about an address, merges their
//! answers with primary-wins precedence, and prints the result in one of five
//! languages.
//!
//! # Architecture
//! - `services::geoip`: provider clients (ipgeolocation.io, ip-api.com)
//! - `services::merge`: left-biased, gap-filling merge
//! - `interfaces::display`: locale-table driven rendering
//! - `runtime`: query orchestration and command dispatch
//! - `config`: configuration file + environment loading
//! - `system`: logging and self-update

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod structs;
pub mod system;
pub mod utils;
