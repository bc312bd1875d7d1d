//! Infrastructure Layer
//!
//! Token storage and the REST identity backend.

pub mod http;
pub mod storage;

pub use http::HttpIdentityResolver;
pub use storage::StorageSessionStore;
