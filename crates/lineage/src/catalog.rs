//! Asset lookup.
//!
//! The engine never fetches assets itself; callers hand it an
//! [`AssetProvider`] over records they already hold.

use std::collections::HashMap;

use crate::domain::{AssetId, AssetRef};

/// Synchronous asset lookup by ID.
pub trait AssetProvider {
    /// Get the asset with the given ID, if loaded.
    fn asset(&self, id: &str) -> Option<&AssetRef>;
}

impl AssetProvider for HashMap<AssetId, AssetRef> {
    fn asset(&self, id: &str) -> Option<&AssetRef> {
        self.get(id)
    }
}

/// Assets indexed by ID for O(1) lookups.
///
/// When the input contains duplicate IDs the last record wins.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: HashMap<AssetId, AssetRef>,
}

impl AssetCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an asset
    pub fn insert(&mut self, asset: AssetRef) {
        self.assets.insert(asset.id.clone(), asset);
    }

    /// Number of assets
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl FromIterator<AssetRef> for AssetCatalog {
    fn from_iter<I: IntoIterator<Item = AssetRef>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for asset in iter {
            catalog.insert(asset);
        }
        catalog
    }
}

impl From<Vec<AssetRef>> for AssetCatalog {
    fn from(assets: Vec<AssetRef>) -> Self {
        assets.into_iter().collect()
    }
}

impl AssetProvider for AssetCatalog {
    fn asset(&self, id: &str) -> Option<&AssetRef> {
        self.assets.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_looks_up_by_str() {
        let catalog = AssetCatalog::from(vec![
            AssetRef::new("orders", "Orders", "table"),
            AssetRef::new("revenue", "Revenue", "view"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.asset("revenue").map(|a| a.name.as_str()), Some("Revenue"));
        assert!(catalog.asset("missing").is_none());
    }

    #[test]
    fn duplicate_ids_keep_last_record() {
        let catalog = AssetCatalog::from(vec![
            AssetRef::new("orders", "Old", "table"),
            AssetRef::new("orders", "New", "table"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.asset("orders").map(|a| a.name.as_str()), Some("New"));
    }

    #[test]
    fn hash_map_is_a_provider() {
        let mut map = HashMap::new();
        map.insert(AssetId::from("a"), AssetRef::new("a", "A", "file"));
        assert!(map.asset("a").is_some());
    }
}
