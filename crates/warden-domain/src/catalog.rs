//! POI catalog - the static, ordered set of claimable locations

use crate::poi::{Poi, PoiId};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No POIs were supplied
    #[error("Catalog is empty")]
    Empty,

    /// A POI has a blank identifier
    #[error("POI at position {0} has an empty id")]
    EmptyId(usize),

    /// Two POIs share an identifier (compared case-insensitively)
    #[error("Duplicate POI id: {0}")]
    DuplicateId(String),
}

/// Immutable catalog of POIs in declaration order
///
/// Built once at startup and shared read-only for the lifetime of the
/// process, so it needs no locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    pois: Vec<Poi>,
    index: HashMap<PoiId, usize>,
}

impl Catalog {
    /// Build a catalog, validating ids
    ///
    /// # Examples
    ///
    /// ```
    /// use warden_domain::{Catalog, Poi};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Poi::new("tisy-t4", &["Tisy Power Plant T4", "Tisy"]),
    ///     Poi::new("airfield", &["Northwest Airfield", "NWAF"]),
    /// ]).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn new(pois: Vec<Poi>) -> Result<Self, CatalogError> {
        if pois.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(pois.len());
        let mut seen = HashMap::with_capacity(pois.len());
        for (position, poi) in pois.iter().enumerate() {
            let id = poi.id.as_str().trim();
            if id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if seen.insert(id.to_lowercase(), position).is_some() {
                return Err(CatalogError::DuplicateId(id.to_string()));
            }
            index.insert(poi.id.clone(), position);
        }

        Ok(Self { pois, index })
    }

    /// All POIs in declaration order
    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    /// Look up a POI by canonical id
    pub fn get(&self, id: &PoiId) -> Option<&Poi> {
        self.index.get(id).map(|&i| &self.pois[i])
    }

    /// Display name for an id, falling back to the raw id for unknown POIs
    pub fn display_name<'a>(&'a self, id: &'a PoiId) -> &'a str {
        self.get(id).map(Poi::display_name).unwrap_or(id.as_str())
    }

    /// Canonical ids in declaration order
    pub fn ids(&self) -> Vec<PoiId> {
        self.pois.iter().map(|p| p.id.clone()).collect()
    }

    /// Ids flagged as excluded from availability listings
    pub fn excluded_ids(&self) -> Vec<PoiId> {
        self.pois
            .iter()
            .filter(|p| p.excluded)
            .map(|p| p.id.clone())
            .collect()
    }

    /// Number of POIs
    pub fn len(&self) -> usize {
        self.pois.len()
    }

    /// Whether the catalog has no POIs (never true for a validated catalog)
    pub fn is_empty(&self) -> bool {
        self.pois.is_empty()
    }
}
