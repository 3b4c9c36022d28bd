//! Domain rules for the cinedex catalog.
//!
//! This crate has no internal dependencies so the persistence and API layers
//! can share the same argument handling and messages.

pub mod error;
pub mod messages;
pub mod search;
pub mod truthy;
pub mod types;
