//! Resin API client helpers
//!
//! Support layer for a fleet management API client: Pine/OData query option
//! merging, OS version ordering with revision and development metadata, and
//! adapters that re-type "not found" request failures.

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod util;
pub mod version;

pub use config::Capabilities;
pub use config::SdkConfig;
pub use error::SdkError;
pub use query::QueryOptions;
