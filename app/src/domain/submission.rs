//! # Insert controller
//!
//! State holder behind every insert screen. The view reads snapshots of
//! [`InsertUiState`] (or subscribes to changes), pushes edited forms through
//! [`InsertController::update_form`] and calls [`InsertController::submit`]
//! when the user saves.
//!
//! ## Submit flow
//!
//! ```text
//! editing --submit(invalid)--------> editing, field errors, "invalid" notification
//! editing --submit(valid, saved)---> empty form, "saved" notification
//! editing --submit(valid, failed)--> editing, "failed" notification
//! ```
//!
//! Only one submission runs at a time per controller. A submit issued while
//! another is in flight is ignored.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::forms::{AssetForm, CategoryForm, EntryForm, TransactionForm};
use super::notification::Notification;
use super::reference_data::{ReferenceData, ReferenceSources};
use super::validation::{validate, ValidationResult};
use crate::config::{AppConfig, NotificationMessages, ValidationConfig};
use crate::error::SubmissionError;
use crate::storage::EntityRepository;

pub type CategoryInsertController = InsertController<CategoryForm>;
pub type AssetInsertController = InsertController<AssetForm>;
/// Used by both the income and the expense screen
pub type TransactionInsertController = InsertController<TransactionForm>;

/// Everything an insert screen renders
#[derive(Debug, Clone, Default)]
pub struct InsertUiState<F: EntryForm> {
    pub form: F,
    /// Result of the last submit attempt
    pub validation: ValidationResult,
    pub notification: Option<Notification>,
    /// True while a create call is in flight
    pub is_submitting: bool,
    pub reference: ReferenceData,
}

impl<F: EntryForm> InsertUiState<F> {
    pub fn notification_message(&self) -> Option<&str> {
        self.notification.as_ref().map(|n| n.message.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was created and the form cleared
    Saved,
    /// A required field was empty; nothing was sent
    Invalid,
    /// Conversion or the repository call failed; the form was kept
    Failed,
    /// Another submission was still in flight
    AlreadySubmitting,
}

pub struct InsertController<F: EntryForm> {
    inner: Arc<Inner<F>>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

struct Inner<F: EntryForm> {
    state: watch::Sender<InsertUiState<F>>,
    repository: Arc<dyn EntityRepository<F::Record>>,
    references: Option<ReferenceSources>,
    messages: NotificationMessages,
    validation: ValidationConfig,
}

impl<F: EntryForm> InsertController<F> {
    /// Create a controller for a screen without picker lists
    pub fn new(repository: Arc<dyn EntityRepository<F::Record>>, config: &AppConfig) -> Self {
        Self::build(repository, None, config)
    }

    /// Create a controller and start loading the category and asset lists.
    ///
    /// The load runs in the background when a Tokio runtime is available;
    /// otherwise call [`load_reference_data`](Self::load_reference_data).
    pub fn with_reference_data(
        repository: Arc<dyn EntityRepository<F::Record>>,
        references: ReferenceSources,
        config: &AppConfig,
    ) -> Self {
        let controller = Self::build(repository, Some(references), config);

        if tokio::runtime::Handle::try_current().is_ok() {
            let inner = Arc::downgrade(&controller.inner);
            controller.spawn(async move {
                if let Some(inner) = inner.upgrade() {
                    inner.load_reference_data().await;
                }
            });
        } else {
            warn!("No async runtime; reference data must be loaded explicitly");
        }
        controller
    }

    fn build(
        repository: Arc<dyn EntityRepository<F::Record>>,
        references: Option<ReferenceSources>,
        config: &AppConfig,
    ) -> Self {
        let (state, _) = watch::channel(InsertUiState::default());
        Self {
            inner: Arc::new(Inner {
                state,
                repository,
                references,
                messages: config.messages.clone(),
                validation: config.validation.clone(),
            }),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> InsertUiState<F> {
        self.inner.state.borrow().clone()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<InsertUiState<F>> {
        self.inner.state.subscribe()
    }

    /// Replace the form with an edited copy. Validation waits for submit.
    pub fn update_form(&self, form: F) {
        self.inner.state.send_modify(|state| state.form = form);
    }

    /// Validate the form and, when valid, send it to the repository
    pub async fn submit(&self) -> SubmitOutcome {
        self.inner.submit().await
    }

    /// Start a submission in the background, tied to this controller's
    /// lifetime. Results arrive through [`subscribe`](Self::subscribe).
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn launch_submit(&self) {
        let inner = Arc::downgrade(&self.inner);
        self.spawn(async move {
            if let Some(inner) = inner.upgrade() {
                inner.submit().await;
            }
        });
    }

    /// Clear the notification once the view has shown it
    pub fn reset_notification(&self) {
        self.inner
            .state
            .send_if_modified(|state| state.notification.take().is_some());
    }

    /// Return the pending notification and clear it
    pub fn take_notification(&self) -> Option<Notification> {
        let mut taken = None;
        self.inner.state.send_if_modified(|state| {
            taken = state.notification.take();
            taken.is_some()
        });
        taken
    }

    /// Fetch the category and asset lists into the state
    pub async fn load_reference_data(&self) {
        self.inner.load_reference_data().await;
    }

    fn spawn<T>(&self, task: T)
    where
        T: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        let mut tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        tasks.retain(|t| !t.is_finished());
        tasks.push(handle);
    }
}

impl<F: EntryForm> Drop for InsertController<F> {
    fn drop(&mut self) {
        let tasks = self.tasks.get_mut().unwrap_or_else(PoisonError::into_inner);
        for task in tasks.drain(..) {
            task.abort();
        }
    }
}

impl<F: EntryForm> Inner<F> {
    async fn submit(&self) -> SubmitOutcome {
        let entity = self.repository.entity_name();

        let mut claimed = None;
        let mut outcome = SubmitOutcome::AlreadySubmitting;
        self.state.send_if_modified(|state| {
            if state.is_submitting {
                return false;
            }
            let validation = validate(&state.form, &self.validation);
            if validation.is_valid() {
                state.is_submitting = true;
                claimed = Some(state.form.clone());
            } else {
                state.notification = Some(Notification::invalid(&self.messages));
                outcome = SubmitOutcome::Invalid;
            }
            state.validation = validation;
            true
        });

        let Some(form) = claimed else {
            if outcome == SubmitOutcome::Invalid {
                info!("Rejected {} form with empty fields", entity);
            } else {
                debug!("Ignoring {} submit while another is in flight", entity);
            }
            return outcome;
        };

        let in_flight = InFlight {
            state: &self.state,
            armed: true,
        };

        match self.persist(&form).await {
            Ok(()) => {
                info!("Saved {} data", entity);
                in_flight.complete(|state| {
                    state.form = F::default();
                    state.validation = ValidationResult::default();
                    state.notification = Some(Notification::saved(&self.messages));
                });
                SubmitOutcome::Saved
            }
            Err(e) => {
                error!("Error saving {} data: {:?}", entity, e);
                in_flight.complete(|state| {
                    state.notification = Some(Notification::failed(&self.messages));
                });
                SubmitOutcome::Failed
            }
        }
    }

    async fn persist(&self, form: &F) -> Result<(), SubmissionError> {
        let record = form.to_record()?;
        self.repository.create(&record).await?;
        Ok(())
    }

    async fn load_reference_data(&self) {
        let Some(references) = &self.references else {
            debug!("No reference data configured for {} form", self.repository.entity_name());
            return;
        };

        let reference = references.load().await;
        self.state.send_modify(|state| state.reference = reference);
    }
}

/// Clears `is_submitting` even when the submit future is dropped mid-call
struct InFlight<'a, F: EntryForm> {
    state: &'a watch::Sender<InsertUiState<F>>,
    armed: bool,
}

impl<F: EntryForm> InFlight<'_, F> {
    fn complete(mut self, update: impl FnOnce(&mut InsertUiState<F>)) {
        self.armed = false;
        self.state.send_modify(|state| {
            state.is_submitting = false;
            update(state);
        });
    }
}

impl<F: EntryForm> Drop for InFlight<'_, F> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|state| state.is_submitting = false);
        }
    }
}
