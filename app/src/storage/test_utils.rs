/// Test doubles for exercising in-flight submissions.
///
/// `GatedRepository` holds every `create` call open until the test lets it
/// through, which makes overlapping submits and mid-flight cancellation
/// deterministic.
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{Notify, Semaphore};

use super::traits::EntityRepository;
use crate::error::RepositoryError;

pub struct GatedRepository<T> {
    gate: Semaphore,
    started: Notify,
    fail: AtomicBool,
    create_calls: AtomicUsize,
    created: Mutex<Vec<T>>,
}

impl<T: Clone + Send + Sync + 'static> GatedRepository<T> {
    pub fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
            started: Notify::new(),
            fail: AtomicBool::new(false),
            create_calls: AtomicUsize::new(0),
            created: Mutex::new(Vec::new()),
        }
    }

    /// Make released calls fail with a network error
    pub fn fail_on_release(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Let `count` pending (or future) create calls finish
    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }

    /// Wait until a create call has reached the gate
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<T> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> EntityRepository<T> for GatedRepository<T> {
    fn entity_name(&self) -> &str {
        "gated"
    }

    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.created())
    }

    async fn create(&self, record: &T) -> Result<()> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();

        self.gate.acquire().await?.forget();

        if self.fail.load(Ordering::SeqCst) {
            return Err(RepositoryError::Network("connection reset".to_string()).into());
        }
        self.created.lock().unwrap().push(record.clone());
        Ok(())
    }
}
