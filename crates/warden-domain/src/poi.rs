//! POI module - named locations that can be exclusively claimed

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identifier of a POI
///
/// Stable and unique within a catalog. Every component other than the
/// catalog refers to POIs by this identifier only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoiId(String);

impl PoiId {
    /// Create a new identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_domain::PoiId;
    ///
    /// let id = PoiId::new("tisy-t4");
    /// assert_eq!(id.as_str(), "tisy-t4");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PoiId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A point of interest
///
/// Immutable after catalog load. The first alias is the primary display
/// form used in every user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poi {
    /// Canonical identifier
    pub id: PoiId,

    /// Display aliases, primary first
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Hidden from "list available" output but still claimable
    #[serde(default)]
    pub excluded: bool,
}

impl Poi {
    /// Create a POI that is listed when available
    pub fn new(id: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            id: PoiId::new(id),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            excluded: false,
        }
    }

    /// Mark this POI as excluded from availability listings
    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    /// Primary display form (first alias, or the id when no alias is set)
    pub fn display_name(&self) -> &str {
        self.aliases
            .iter()
            .map(|a| a.trim())
            .find(|a| !a.is_empty())
            .unwrap_or_else(|| self.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_uses_first_alias() {
        let poi = Poi::new("tisy-t4", &["Tisy Power Plant T4", "Tisy"]);
        assert_eq!(poi.display_name(), "Tisy Power Plant T4");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let poi = Poi::new("airfield", &[]);
        assert_eq!(poi.display_name(), "airfield");

        let blank = Poi::new("airfield", &["  "]);
        assert_eq!(blank.display_name(), "airfield");
    }

    #[test]
    fn test_excluded_builder() {
        let poi = Poi::new("trader", &["Trader"]).excluded();
        assert!(poi.excluded);
    }

    #[test]
    fn test_deserialize_defaults() {
        #[derive(Deserialize)]
        struct Wrapper {
            pois: Vec<Poi>,
        }

        let json = r#"{"pois": [{"id": "bunker"}]}"#;
        let wrapper: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(wrapper.pois[0].id, PoiId::new("bunker"));
        assert!(wrapper.pois[0].aliases.is_empty());
        assert!(!wrapper.pois[0].excluded);
    }
}
