//! In-process repository, used for local runs and by the domain tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::traits::EntityRepository;
use crate::error::RepositoryError;

pub struct InMemoryRepository<T> {
    entity: String,
    records: RwLock<Vec<T>>,
    offline: AtomicBool,
    create_calls: AtomicUsize,
}

impl<T: Clone + Send + Sync + 'static> InMemoryRepository<T> {
    pub fn new(entity: impl Into<String>) -> Self {
        Self::with_records(entity, Vec::new())
    }

    pub fn with_records(entity: impl Into<String>, records: Vec<T>) -> Self {
        Self {
            entity: entity.into(),
            records: RwLock::new(records),
            offline: AtomicBool::new(false),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// While offline every call fails with [`RepositoryError::Unavailable`]
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Snapshot of the stored records, oldest first
    pub fn records(&self) -> Vec<T> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of `create` calls received, including failed ones
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable {
                entity: self.entity.clone(),
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> EntityRepository<T> for InMemoryRepository<T> {
    fn entity_name(&self) -> &str {
        &self.entity
    }

    async fn list(&self) -> Result<Vec<T>> {
        self.check_online()?;
        Ok(self.records())
    }

    async fn create(&self, record: &T) -> Result<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;

        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.push(record.clone());
        debug!("Stored {} record #{}", self.entity, records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    fn food() -> Category {
        Category { id: None, name: "Food".to_string() }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = InMemoryRepository::new("category");

        repo.create(&food()).await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec![food()]);
        assert_eq!(repo.create_calls(), 1);
    }

    #[tokio::test]
    async fn test_offline_rejects_calls() {
        let repo = InMemoryRepository::with_records("category", vec![food()]);
        repo.set_offline(true);

        let error = repo.create(&food()).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<RepositoryError>(),
            Some(RepositoryError::Unavailable { .. })
        ));
        assert!(repo.list().await.is_err());

        // The failed call still counts, but nothing was stored
        assert_eq!(repo.create_calls(), 1);
        assert_eq!(repo.records().len(), 1);

        repo.set_offline(false);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[test]
    fn test_entity_name() {
        let repo: InMemoryRepository<Category> = InMemoryRepository::new("category");
        assert_eq!(repo.entity_name(), "category");
    }
}
