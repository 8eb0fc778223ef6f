use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::models::ProductCard;

/// Per-session bookmark toggles layered over the catalog's saved list.
/// Lives only as long as the session.
#[derive(Debug, Default, Clone)]
pub struct SavedSet {
    overrides: HashMap<String, bool>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_saved(&self, catalog: &dyn Catalog, id: &str) -> bool {
        match self.overrides.get(id) {
            Some(saved) => *saved,
            None => catalog.saved_products().iter().any(|p| p.id == id),
        }
    }

    /// Flip the saved flag and return the new value.
    pub fn toggle(&mut self, catalog: &dyn Catalog, id: &str) -> bool {
        let now = !self.is_saved(catalog, id);
        self.overrides.insert(id.to_string(), now);
        now
    }

    pub fn saved_products(&self, catalog: &dyn Catalog) -> Vec<ProductCard> {
        catalog
            .all_products()
            .into_iter()
            .filter(|p| self.is_saved(catalog, &p.id))
            .collect()
    }
}
