//! Data sources behind the dashboard and the chat side panel.

pub mod demo;
pub mod saved;

pub use demo::DemoCatalog;
pub use saved::SavedSet;

use crate::models::ProductCard;

/// Where the presentational lists come from. The web handlers only see this
/// trait, so a real service can replace the demo data without touching them.
pub trait Catalog: Send + Sync {
    fn recent_searches(&self) -> Vec<String>;
    fn recent_products(&self) -> Vec<ProductCard>;
    fn trending_products(&self) -> Vec<ProductCard>;
    /// Products saved before this session started.
    fn saved_products(&self) -> Vec<ProductCard>;
    fn chat_suggestions(&self) -> Vec<String>;

    /// Every known product once, in first-seen order.
    fn all_products(&self) -> Vec<ProductCard> {
        let mut out: Vec<ProductCard> = Vec::new();
        let lists = [self.recent_products(), self.trending_products(), self.saved_products()];
        for product in lists.into_iter().flatten() {
            if !out.iter().any(|p| p.id == product.id) {
                out.push(product);
            }
        }
        out
    }

    fn product(&self, id: &str) -> Option<ProductCard> {
        self.all_products().into_iter().find(|p| p.id == id)
    }
}
