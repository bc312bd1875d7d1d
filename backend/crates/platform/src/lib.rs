//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the client's technical foundations:
//! - Durable key-value storage (file and in-memory backends)
//! - JSON REST client over `reqwest`
//! - Password handling (zeroized clear text, strength policy)
//! - Cryptographic helpers (SHA-256, log-safe fingerprints)

pub mod crypto;
pub mod http;
pub mod password;
pub mod storage;
