//! Error types

mod mapper;
mod query;
mod request;
mod sdk;
mod version;

pub use mapper::*;
pub use query::*;
pub use request::*;
pub use sdk::*;
pub use version::*;
