//! # GloyCash
//!
//! View-model layer for the GloyCash insert screens (category, income,
//! expense and asset entry forms).
//!
//! ## Architecture
//!
//! ```text
//! View (any UI toolkit)
//!     ↓ update_form / submit / reset_notification
//! Domain (forms, validation, InsertController)
//!     ↓ EntityRepository::create / list
//! Storage (remote API client, in-memory repository)
//! ```
//!
//! The view observes an [`InsertUiState`] through a `watch` channel and never
//! mutates it directly.

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod storage;

pub use config::AppConfig;
pub use domain::*;
pub use error::*;
pub use storage::*;
