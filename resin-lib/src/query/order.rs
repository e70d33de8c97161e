//! Ordering of query results.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the OData keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Specifies the ordering of query results.
///
/// Multiple fields can be chained together for secondary, tertiary, etc. sorting.
///
/// # Example
///
/// ```
/// use resin_lib::query::OrderBy;
///
/// let order = OrderBy::desc("created_at").then_asc("device_name");
/// assert_eq!(order.to_string(), "created_at desc,device_name asc");
///
/// let parsed: OrderBy = "created_at desc, device_name".parse().unwrap();
/// assert_eq!(parsed, order);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub(crate) fields: Vec<(String, Direction)>,
}

impl OrderBy {
    /// Creates an ascending order on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), Direction::Asc)],
        }
    }

    /// Creates a descending order on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), Direction::Desc)],
        }
    }

    /// Adds a secondary ascending order on a field.
    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), Direction::Asc));
        self
    }

    /// Adds a secondary descending order on a field.
    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), Direction::Desc));
        self
    }

    /// Returns the ordered fields with their directions.
    pub fn fields(&self) -> &[(String, Direction)] {
        &self.fields
    }

    pub(crate) fn push(&mut self, field: String, direction: Direction) {
        self.fields.push((field, direction));
    }

    pub(crate) fn empty() -> Self {
        Self { fields: Vec::new() }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, direction)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{} {}", field, direction.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for Direction {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(QueryError::invalid(
                "orderby",
                format!("unknown direction `{}`", other),
            )),
        }
    }
}

/// Parses `field [asc|desc]` clauses separated by commas.
///
/// A clause without a direction sorts ascending.
impl FromStr for OrderBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut order = OrderBy::empty();
        for clause in s.split(',') {
            let mut words = clause.split_whitespace();
            let Some(field) = words.next() else {
                return Err(QueryError::invalid("orderby", "empty ordering clause"));
            };
            let direction = match words.next() {
                Some(direction) => direction.parse()?,
                None => Direction::Asc,
            };
            if words.next().is_some() {
                return Err(QueryError::invalid(
                    "orderby",
                    format!("unexpected tokens in `{}`", clause.trim()),
                ));
            }
            order.push(field.to_string(), direction);
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        let order: OrderBy = "device_name".parse().unwrap();
        assert_eq!(order, OrderBy::asc("device_name"));
    }

    #[test]
    fn test_parse_case_insensitive_direction() {
        let order: OrderBy = "created_at DESC".parse().unwrap();
        assert_eq!(order, OrderBy::desc("created_at"));
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<OrderBy>().is_err());
        assert!("name,".parse::<OrderBy>().is_err());
        assert!("name sideways".parse::<OrderBy>().is_err());
        assert!("name asc extra".parse::<OrderBy>().is_err());
    }
}
