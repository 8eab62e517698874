//! Service layer
//!
//! Provider clients and the merge engine, independent of how results are shown.

pub mod geoip;
pub mod merge;

pub use geoip::{GeoSource, LookupRequest, ProviderRecord};
pub use merge::{Field, FieldValues, UnifiedRecord, merge};
