//! Category and asset lists that populate the transaction form's pickers.

use std::sync::Arc;

use shared::{Asset, Category};
use tracing::{info, warn};

use crate::storage::{AssetRepository, CategoryRepository};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    pub categories: Vec<Category>,
    pub assets: Vec<Asset>,
}

/// Repositories the reference lists are fetched from
#[derive(Clone)]
pub struct ReferenceSources {
    categories: Arc<CategoryRepository>,
    assets: Arc<AssetRepository>,
}

impl ReferenceSources {
    pub fn new(categories: Arc<CategoryRepository>, assets: Arc<AssetRepository>) -> Self {
        Self { categories, assets }
    }

    /// Fetch both lists concurrently.
    ///
    /// A list that fails to load is logged and left empty so the form stays
    /// usable.
    pub async fn load(&self) -> ReferenceData {
        let (categories, assets) = tokio::join!(self.categories.list(), self.assets.list());

        let categories = categories.unwrap_or_else(|e| {
            warn!("Failed to load categories: {:?}", e);
            Vec::new()
        });
        let assets = assets.unwrap_or_else(|e| {
            warn!("Failed to load assets: {:?}", e);
            Vec::new()
        });

        info!(
            "Loaded {} categories and {} assets",
            categories.len(),
            assets.len()
        );
        ReferenceData { categories, assets }
    }
}
