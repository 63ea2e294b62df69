//! Level cascade: which level record applies to a list level

use doc_model::{ListLevelProperties, ListPropertiesMap};

/// A level record found by the cascade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadedLevel<'a> {
    /// Level the record is defined at (at most the requested level)
    pub level: u32,
    pub properties: &'a ListLevelProperties,
}

/// Find the record for `level`, falling back to the nearest lower defined level
///
/// Deeper levels are never consulted. Returns `None` if no level between
/// `level` and 0 is defined.
pub fn resolve_level(level: u32, map: &ListPropertiesMap) -> Option<CascadedLevel<'_>> {
    map.range(..=level)
        .next_back()
        .map(|(&found, properties)| CascadedLevel { level: found, properties })
}
