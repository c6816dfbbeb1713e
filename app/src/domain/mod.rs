//! # Domain Module
//!
//! Business logic of the insert screens, independent of any UI toolkit or
//! transport.
//!
//! ## Module Organization
//!
//! - **forms**: Text form states and their conversion into records
//! - **validation**: Required-field checks producing a `ValidationResult`
//! - **notification**: One-shot status messages shown after a submit
//! - **reference_data**: Category and asset lists for the pickers
//! - **submission**: `InsertController`, the submit state machine
//!
//! ## Business Rules
//!
//! - Forms are validated on save, never on keystroke
//! - Every required field must be non-empty
//! - Non-numeric category and asset ids are sent as `0`
//! - An amount that is not a number fails the save without reaching the server
//! - A successful save clears the form; a failed one keeps it for retry

pub mod forms;
pub mod notification;
pub mod reference_data;
pub mod submission;
pub mod validation;

pub use forms::*;
pub use notification::*;
pub use reference_data::*;
pub use submission::*;
pub use validation::*;
