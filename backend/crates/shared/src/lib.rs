//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of the client's vocabulary:
//! - Common error types and result aliases
//! - Typed identifiers for entities received from the backend
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all layers.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;
