//! Conversion between [`QueryOptions`] and the loose Pine JSON form.
//!
//! This is where unknown option keys are rejected: the typed tree cannot
//! hold them. Filters are carried through as written.

use serde_json::Map;
use serde_json::Value as Json;
use serde_json::json;

use super::Expand;
use super::ExpandMap;
use super::ExpandOptions;
use super::Filter;
use super::OrderBy;
use super::QueryOptions;
use super::merge;
use crate::error::QueryError;

const SELECT: &str = "$select";
const EXPAND: &str = "$expand";

/// Merges two option trees given in Pine JSON form.
///
/// A missing or `null` `extras` returns `defaults` unchanged. Otherwise both
/// trees are validated, merged with [`merge`](fn@super::merge), and returned in
/// canonical JSON form.
///
/// # Example
///
/// ```
/// use resin_lib::query::merge_json;
/// use serde_json::json;
///
/// let merged = merge_json(
///     &json!({ "filter": { "is_online": true }, "expand": "application" }),
///     Some(&json!({ "filter": { "device_name": "edge" }, "top": 5 })),
/// )
/// .unwrap();
///
/// assert_eq!(
///     merged,
///     json!({
///         "filter": { "$and": [{ "is_online": true }, { "device_name": "edge" }] },
///         "top": 5,
///         "expand": "application"
///     })
/// );
/// ```
pub fn merge_json(defaults: &Json, extras: Option<&Json>) -> Result<Json, QueryError> {
    let extras = match extras {
        None | Some(Json::Null) => return Ok(defaults.clone()),
        Some(extras) => extras,
    };
    let defaults = QueryOptions::from_json(defaults)?;
    let extras = QueryOptions::from_json(extras)?;
    Ok(merge(&defaults, Some(&extras)).to_json())
}

impl QueryOptions {
    /// Parses options from Pine JSON form.
    ///
    /// Fails with [`QueryError::UnknownOption`] on keys outside
    /// `select`/`filter`/`orderby`/`top`/`skip`/`expand` and with
    /// [`QueryError::UnknownExpandOption`] on expand entries carrying keys
    /// other than `$select`/`$expand`.
    pub fn from_json(json: &Json) -> Result<Self, QueryError> {
        let Json::Object(object) = json else {
            return Err(QueryError::invalid("options", "expected an object"));
        };

        let mut options = QueryOptions::new();
        for (key, value) in object {
            match key.as_str() {
                "select" => options.select = Some(parse_fields("select", value)?),
                "filter" => options.filter = parse_filter(value),
                "orderby" => options.orderby = Some(parse_order(value)?),
                "top" => options.top = Some(parse_count("top", value)?),
                "skip" => options.skip = Some(parse_count("skip", value)?),
                "expand" => options.expand = Some(parse_expand(value)?),
                _ => return Err(QueryError::UnknownOption(key.clone())),
            }
        }
        Ok(options)
    }

    /// Converts these options to Pine JSON form.
    pub fn to_json(&self) -> Json {
        let mut object = Map::new();
        if let Some(select) = &self.select {
            object.insert("select".into(), json!(select));
        }
        if let Some(filter) = &self.filter {
            object.insert("filter".into(), filter.to_json());
        }
        if let Some(order) = &self.orderby {
            object.insert("orderby".into(), order_to_json(order));
        }
        if let Some(top) = self.top {
            object.insert("top".into(), json!(top));
        }
        if let Some(skip) = self.skip {
            object.insert("skip".into(), json!(skip));
        }
        if let Some(expand) = &self.expand {
            object.insert("expand".into(), expand_to_json(expand));
        }
        Json::Object(object)
    }
}

fn parse_fields(option: &str, value: &Json) -> Result<Vec<String>, QueryError> {
    match value {
        Json::String(field) => Ok(vec![field.clone()]),
        Json::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| QueryError::invalid(option, "expected field names"))
            })
            .collect(),
        _ => Err(QueryError::invalid(
            option,
            "expected a field name or a list of field names",
        )),
    }
}

fn parse_count(option: &str, value: &Json) -> Result<u64, QueryError> {
    value
        .as_u64()
        .ok_or_else(|| QueryError::invalid(option, "expected a non-negative integer"))
}

fn parse_order(value: &Json) -> Result<OrderBy, QueryError> {
    let mut order = OrderBy::empty();
    match value {
        Json::String(clauses) => return clauses.parse(),
        Json::Array(items) => {
            for item in items {
                let parsed = match item {
                    Json::String(clauses) => clauses.parse()?,
                    other => parse_order(other)?,
                };
                order.fields.extend(parsed.fields);
            }
        }
        Json::Object(object) => {
            for (field, direction) in object {
                let Some(direction) = direction.as_str() else {
                    return Err(QueryError::invalid("orderby", "expected `asc` or `desc`"));
                };
                order.push(field.clone(), direction.parse()?);
            }
        }
        _ => {
            return Err(QueryError::invalid(
                "orderby",
                "expected a string, list or object",
            ));
        }
    }
    if order.fields.is_empty() {
        return Err(QueryError::invalid("orderby", "empty ordering"));
    }
    Ok(order)
}

fn parse_expand(value: &Json) -> Result<Expand, QueryError> {
    match value {
        Json::String(entity) => Ok(Expand::One(entity.clone())),
        Json::Array(_) => parse_fields("expand", value).map(Expand::Many),
        Json::Object(object) => {
            let mut map = ExpandMap::new();
            for (entity, options) in object {
                map.insert(entity.clone(), parse_expand_options(entity, options)?);
            }
            Ok(Expand::Map(map))
        }
        _ => Err(QueryError::invalid(
            "expand",
            "expected an entity name, a list or an object",
        )),
    }
}

fn parse_expand_options(entity: &str, value: &Json) -> Result<ExpandOptions, QueryError> {
    let Json::Object(object) = value else {
        return Err(QueryError::invalid(
            "expand",
            format!("options for `{}` must be an object", entity),
        ));
    };

    let invalid: Vec<String> = object
        .keys()
        .filter(|key| *key != SELECT && *key != EXPAND)
        .cloned()
        .collect();
    if !invalid.is_empty() {
        return Err(QueryError::UnknownExpandOption(invalid));
    }

    Ok(ExpandOptions {
        select: object
            .get(SELECT)
            .map(|select| parse_fields(SELECT, select))
            .transpose()?,
        expand: object.get(EXPAND).map(parse_expand).transpose()?,
    })
}

/// Filters are opaque predicates; only `null` is read as "no filter".
fn parse_filter(value: &Json) -> Option<Filter> {
    match value {
        Json::Null => None,
        predicate => Some(Filter::Predicate(predicate.clone())),
    }
}

fn order_to_json(order: &OrderBy) -> Json {
    order
        .fields()
        .iter()
        .map(|(field, direction)| Json::String(format!("{} {}", field, direction.as_str())))
        .collect()
}

fn expand_to_json(expand: &Expand) -> Json {
    match expand {
        Expand::One(entity) => json!(entity),
        Expand::Many(entities) => json!(entities),
        Expand::Map(map) => {
            let mut object = Map::new();
            for (entity, options) in map {
                let mut sub = Map::new();
                if let Some(select) = &options.select {
                    sub.insert(SELECT.into(), json!(select));
                }
                if let Some(expand) = &options.expand {
                    sub.insert(EXPAND.into(), expand_to_json(expand));
                }
                object.insert(entity.clone(), Json::Object(sub));
            }
            Json::Object(object)
        }
    }
}
