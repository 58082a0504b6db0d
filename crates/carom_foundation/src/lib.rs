//! Core types and errors for Carom.
//!
//! This crate provides:
//! - [`Entity`] - Opaque entity handles
//! - [`Error`] - Error types with categorized kinds
//! - [`Result`] - Crate-wide result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod entity;
mod error;

pub use entity::Entity;
pub use error::{Error, ErrorKind, Result};
