//! `$expand` options for related entities.

use std::collections::BTreeMap;

/// Canonical expand form: related entity name to its nested options.
pub type ExpandMap = BTreeMap<String, ExpandOptions>;

/// Related entities to fetch alongside the primary one.
///
/// Callers may name a single entity, a list of entities, or give a full map
/// with nested options. [`Expand::normalize`] turns every form into an
/// [`ExpandMap`].
///
/// # Example
///
/// ```
/// use resin_lib::query::Expand;
/// use resin_lib::query::ExpandOptions;
///
/// let single = Expand::from("device");
/// let many = Expand::from(["device", "application"]);
/// let nested: Expand = [(
///     "device",
///     ExpandOptions::new()
///         .select(["uuid"])
///         .expand("belongs_to__application"),
/// )]
/// .into_iter()
/// .collect();
///
/// assert_eq!(single.normalize().len(), 1);
/// assert_eq!(many.normalize().len(), 2);
/// assert!(nested.normalize()["device"].select.is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expand {
    /// A single entity with no nested options.
    One(String),
    /// Several entities with no nested options.
    Many(Vec<String>),
    /// Entities with their nested options.
    Map(ExpandMap),
}

/// Options applied to an expanded entity.
///
/// Only `$select` and `$expand` are allowed here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpandOptions {
    /// Fields to select from the expanded entity (`$select`).
    pub select: Option<Vec<String>>,
    /// Nested expands within this entity (`$expand`).
    pub expand: Option<Expand>,
}

impl Expand {
    /// Converts any expand form into the canonical map.
    ///
    /// Always returns a fresh map; `self` is left untouched.
    pub fn normalize(&self) -> ExpandMap {
        match self {
            Expand::One(entity) => ExpandMap::from([(entity.clone(), ExpandOptions::default())]),
            Expand::Many(entities) => entities
                .iter()
                .map(|entity| (entity.clone(), ExpandOptions::default()))
                .collect(),
            Expand::Map(map) => map.clone(),
        }
    }

    /// Converts into the canonical map, reusing the allocation for map input.
    pub fn into_map(self) -> ExpandMap {
        match self {
            Expand::Map(map) => map,
            other => other.normalize(),
        }
    }

    /// Returns the names of the expanded entities.
    pub fn entities(&self) -> Vec<&str> {
        match self {
            Expand::One(entity) => vec![entity.as_str()],
            Expand::Many(entities) => entities.iter().map(String::as_str).collect(),
            Expand::Map(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

impl ExpandOptions {
    /// Creates empty expand options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifies which fields to select from the expanded entity.
    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a nested expand within this entity.
    pub fn expand(mut self, expand: impl Into<Expand>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Returns `true` if neither `$select` nor `$expand` is set.
    pub fn is_empty(&self) -> bool {
        self.select.is_none() && self.expand.is_none()
    }
}

impl From<&str> for Expand {
    fn from(entity: &str) -> Self {
        Expand::One(entity.to_string())
    }
}

impl From<String> for Expand {
    fn from(entity: String) -> Self {
        Expand::One(entity)
    }
}

impl From<Vec<String>> for Expand {
    fn from(entities: Vec<String>) -> Self {
        Expand::Many(entities)
    }
}

impl<const N: usize> From<[&str; N]> for Expand {
    fn from(entities: [&str; N]) -> Self {
        Expand::Many(entities.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<ExpandMap> for Expand {
    fn from(map: ExpandMap) -> Self {
        Expand::Map(map)
    }
}

impl<K: Into<String>> FromIterator<(K, ExpandOptions)> for Expand {
    fn from_iter<I: IntoIterator<Item = (K, ExpandOptions)>>(iter: I) -> Self {
        Expand::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sugar_forms_normalize_alike() {
        let expected = ExpandMap::from([("foo".to_string(), ExpandOptions::default())]);
        assert_eq!(Expand::from("foo").normalize(), expected);
        assert_eq!(Expand::from(["foo"]).normalize(), expected);
        assert_eq!(Expand::Map(expected.clone()).normalize(), expected);
    }

    #[test]
    fn test_many_duplicates_collapse() {
        let map = Expand::from(["a", "b", "a"]).normalize();
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_normalize_does_not_alias_input() {
        let expand: Expand = [("a", ExpandOptions::new().select(["x"]))].into_iter().collect();
        let mut map = expand.normalize();
        map.get_mut("a").unwrap().select = None;

        assert_eq!(expand.normalize()["a"].select, Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_options_is_empty() {
        assert!(ExpandOptions::new().is_empty());
        assert!(!ExpandOptions::new().select(["id"]).is_empty());
        assert!(!ExpandOptions::new().expand("owner").is_empty());
    }

    #[test]
    fn test_entities() {
        assert_eq!(Expand::from(["a", "b"]).entities(), ["a", "b"]);
        assert_eq!(Expand::from("c").entities(), ["c"]);
    }
}
