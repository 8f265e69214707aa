//! JSEL Core - Selection primitives for JSON lists
//!
//! This crate provides the fundamental validation and extraction routines for
//! JSEL with no I/O dependencies. It includes:
//!
//! - The index specification (single position or list of positions)
//! - Value kind classification for diagnostics
//! - Error types
//! - The selection operation itself

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod indices;
pub mod kind;
pub mod select;

// Re-export commonly used types
pub use error::{Result, SelectError};
pub use indices::IndexSpec;
pub use kind::ValueKind;
pub use select::{select, select_value};
