//! The query option tree.

use super::Expand;
use super::Filter;
use super::OrderBy;

/// Options for a Pine query: `select`, `filter`, `orderby`, `top`, `skip`
/// and `expand`.
///
/// # Example
///
/// ```
/// use resin_lib::query::Filter;
/// use resin_lib::query::OrderBy;
/// use resin_lib::query::QueryOptions;
///
/// let options = QueryOptions::new()
///     .select(["id", "uuid", "device_name"])
///     .filter(Filter::eq("is_online", true))
///     .order_by(OrderBy::asc("device_name"))
///     .top(50)
///     .skip(100);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// Fields to return.
    pub select: Option<Vec<String>>,
    /// Filter condition.
    pub filter: Option<Filter>,
    /// Result ordering.
    pub orderby: Option<OrderBy>,
    /// Maximum number of records.
    pub top: Option<u64>,
    /// Number of records to skip.
    pub skip: Option<u64>,
    /// Related entities to fetch.
    pub expand: Option<Expand>,
}

impl QueryOptions {
    /// Creates empty query options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies which fields to return.
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the filter condition.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the result ordering.
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.orderby = Some(order);
        self
    }

    /// Limits the number of records returned.
    pub fn top(mut self, n: u64) -> Self {
        self.top = Some(n);
        self
    }

    /// Skips the first `n` records.
    pub fn skip(mut self, n: u64) -> Self {
        self.skip = Some(n);
        self
    }

    /// Sets the related entities to fetch.
    pub fn expand(mut self, expand: impl Into<Expand>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Returns `true` if no option is set.
    pub fn is_empty(&self) -> bool {
        self.select.is_none()
            && self.filter.is_none()
            && self.orderby.is_none()
            && self.top.is_none()
            && self.skip.is_none()
            && self.expand.is_none()
    }
}
