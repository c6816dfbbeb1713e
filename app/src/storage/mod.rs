//! # Storage Module
//!
//! Repository abstraction the insert screens submit through.
//!
//! The domain layer only sees [`EntityRepository`]; the remote API client and
//! the in-memory store are interchangeable behind it.

pub mod memory;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use memory::InMemoryRepository;
pub use traits::*;
