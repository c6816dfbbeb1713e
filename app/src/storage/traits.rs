//! # Storage Traits
//!
//! One generic trait covers every entity the insert screens deal with
//! (categories, assets, income and expense transactions).

use anyhow::Result;
use async_trait::async_trait;
use shared::{Asset, Category, Transaction};

/// Remote create/list operations for one entity type.
///
/// Implementations report transport or server failures as errors; callers
/// decide how to surface them.
#[async_trait]
pub trait EntityRepository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Short name used in diagnostics, e.g. "income"
    fn entity_name(&self) -> &str;

    /// Fetch every stored record
    async fn list(&self) -> Result<Vec<T>>;

    /// Store a new record
    async fn create(&self, record: &T) -> Result<()>;
}

pub type CategoryRepository = dyn EntityRepository<Category>;
pub type AssetRepository = dyn EntityRepository<Asset>;
pub type TransactionRepository = dyn EntityRepository<Transaction>;
