//! Merging of default and caller supplied query options.

use std::borrow::Cow;

use log::debug;
use log::trace;

use super::Expand;
use super::ExpandMap;
use super::ExpandOptions;
use super::Filter;
use super::QueryOptions;

/// Merges caller supplied `extras` into a method's `defaults`.
///
/// - `select`, `orderby`, `top` and `skip` from `extras` replace the defaults.
/// - `filter`s are combined as `And([defaults, extras])`.
/// - `expand` trees are merged with [`merge_expand`].
///
/// When `extras` is absent or empty the defaults are returned borrowed.
/// Neither input is modified.
pub fn merge<'a>(defaults: &'a QueryOptions, extras: Option<&QueryOptions>) -> Cow<'a, QueryOptions> {
    let Some(extras) = extras.filter(|extras| !extras.is_empty()) else {
        return Cow::Borrowed(defaults);
    };
    debug!("Merging query options");

    let filter = match (&defaults.filter, &extras.filter) {
        (Some(default_filter), Some(extra_filter)) => {
            trace!("Combining default and extra filters");
            Some(Filter::And(vec![default_filter.clone(), extra_filter.clone()]))
        }
        (None, Some(extra_filter)) => Some(extra_filter.clone()),
        (default_filter, None) => default_filter.clone(),
    };

    let expand = match &extras.expand {
        Some(extra_expand) => Some(Expand::Map(merge_expand(
            defaults.expand.as_ref(),
            extra_expand,
        ))),
        None => defaults.expand.clone(),
    };

    Cow::Owned(QueryOptions {
        select: extras.select.clone().or_else(|| defaults.select.clone()),
        filter,
        orderby: extras.orderby.clone().or_else(|| defaults.orderby.clone()),
        top: extras.top.or(defaults.top),
        skip: extras.skip.or(defaults.skip),
        expand,
    })
}

/// Merges two expand trees into a canonical [`ExpandMap`].
///
/// Both sides are normalized first. For every entity in `extra`, its
/// `$select` replaces the default one and its `$expand` is merged
/// recursively into the default `$expand`. Entities only present in
/// `default` are kept as they are.
pub fn merge_expand(default: Option<&Expand>, extra: &Expand) -> ExpandMap {
    let extra = extra.normalize();
    let Some(default) = default else {
        return extra;
    };

    let mut merged = default.normalize();
    for (entity, extra_options) in extra {
        trace!("Merging expand options for {}", entity);
        let default_options = merged.remove(&entity).unwrap_or_default();
        merged.insert(entity, merge_expand_options(default_options, extra_options));
    }
    merged
}

fn merge_expand_options(default: ExpandOptions, extra: ExpandOptions) -> ExpandOptions {
    let expand = match extra.expand {
        Some(extra_expand) => Some(Expand::Map(merge_expand(
            default.expand.as_ref(),
            &extra_expand,
        ))),
        None => default.expand,
    };
    ExpandOptions {
        select: extra.select.or(default.select),
        expand,
    }
}
