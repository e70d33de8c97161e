//! Pine/OData query options.
//!
//! This module provides the option tree handed to the Pine query executor,
//! the rules for merging a method's default options with caller supplied
//! extras, and conversion to and from the loose JSON form.
//!
//! # Types
//!
//! - [`QueryOptions`] - `select`/`filter`/`orderby`/`top`/`skip`/`expand`
//! - [`Filter`] - Opaque Pine filter objects, combinable with `And`
//! - [`OrderBy`] - Ordering specification for query results
//! - [`Expand`] - Related entities to fetch, in sugared or map form
//!
//! # Example
//!
//! ```
//! use resin_lib::query::merge;
//! use resin_lib::query::Filter;
//! use resin_lib::query::QueryOptions;
//! use serde_json::json;
//!
//! let defaults = QueryOptions::new()
//!     .filter(Filter::eq("is_online", true))
//!     .expand("belongs_to__application");
//! let extras = QueryOptions::new().select(["uuid", "device_name"]).top(10);
//!
//! let options = merge(&defaults, Some(&extras));
//! assert_eq!(
//!     options.to_json(),
//!     json!({
//!         "select": ["uuid", "device_name"],
//!         "filter": { "is_online": true },
//!         "top": 10,
//!         "expand": "belongs_to__application"
//!     })
//! );
//! ```

mod expand;
mod filter;
mod json;
mod merge;
mod options;
mod order;

pub use expand::Expand;
pub use expand::ExpandMap;
pub use expand::ExpandOptions;
pub use filter::Filter;
pub use json::merge_json;
pub use merge::merge;
pub use merge::merge_expand;
pub use options::QueryOptions;
pub use order::Direction;
pub use order::OrderBy;
