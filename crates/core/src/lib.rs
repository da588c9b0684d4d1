//! Pure domain logic for the carpool backend.
//!
//! Everything in this crate is synchronous and free of I/O so it can be
//! exercised by unit tests and reused from the repository and API layers.

pub mod cars;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod members;
pub mod slug;
pub mod types;
