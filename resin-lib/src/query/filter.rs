//! Filter expressions for Pine queries.

use serde_json::Value as Json;
use serde_json::json;

/// A filter condition for querying records.
///
/// The predicate itself is opaque: it is whatever Pine filter object the
/// caller wrote, including navigation filters and operators such as `$in`
/// or `$any`, and reaches the query executor untouched. The only structure
/// the SDK adds is `And`, used when merging default and extra filters.
///
/// # Example
///
/// ```
/// use resin_lib::query::Filter;
/// use serde_json::json;
///
/// let by_app = Filter::new(json!({ "belongs_to__application": { "app_name": "myapp" } }));
/// let online = Filter::eq("is_online", true);
///
/// assert_eq!(
///     by_app.and_also(online).to_json(),
///     json!({ "$and": [
///         { "belongs_to__application": { "app_name": "myapp" } },
///         { "is_online": true }
///     ] })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// A Pine filter object, kept as written.
    Predicate(Json),
    /// Logical AND of multiple filters: `{"$and": [...]}`.
    And(Vec<Filter>),
}

impl Filter {
    /// Wraps a Pine filter object.
    pub fn new(predicate: impl Into<Json>) -> Self {
        Filter::Predicate(predicate.into())
    }

    /// Creates an equality filter: `{field: value}`.
    pub fn eq(field: impl Into<String>, value: impl Into<Json>) -> Self {
        let mut object = serde_json::Map::new();
        object.insert(field.into(), value.into());
        Filter::Predicate(Json::Object(object))
    }

    /// Creates a logical AND of multiple filters.
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And(filters.into_iter().collect())
    }

    /// Combines this filter with another using logical AND.
    ///
    /// Extends an existing `And` instead of nesting it.
    pub fn and_also(self, other: Filter) -> Self {
        match self {
            Filter::And(mut filters) => {
                filters.push(other);
                Filter::And(filters)
            }
            _ => Filter::And(vec![self, other]),
        }
    }

    /// Converts this filter to Pine JSON form.
    pub fn to_json(&self) -> Json {
        match self {
            Filter::Predicate(predicate) => predicate.clone(),
            Filter::And(filters) => {
                json!({ "$and": filters.iter().map(Filter::to_json).collect::<Vec<_>>() })
            }
        }
    }
}

impl From<Json> for Filter {
    fn from(predicate: Json) -> Self {
        Filter::Predicate(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_also_extends_existing_and() {
        let filter = Filter::and([Filter::eq("a", 1), Filter::eq("b", 2)]).and_also(Filter::eq("c", 3));
        assert_eq!(
            filter,
            Filter::And(vec![Filter::eq("a", 1), Filter::eq("b", 2), Filter::eq("c", 3)])
        );
    }

    #[test]
    fn test_predicate_kept_verbatim() {
        let predicate = json!({
            "id": { "$in": [1, 2, 3] },
            "device_tag": { "$any": { "$alias": "t", "$expr": { "t": { "tag_key": "env" } } } }
        });
        assert_eq!(Filter::new(predicate.clone()).to_json(), predicate);
    }

    #[test]
    fn test_nested_and_to_json() {
        let filter = Filter::and([Filter::and([Filter::eq("a", 1)]), Filter::eq("b", json!(null))]);
        assert_eq!(
            filter.to_json(),
            json!({ "$and": [{ "$and": [{ "a": 1 }] }, { "b": null }] })
        );
    }
}
