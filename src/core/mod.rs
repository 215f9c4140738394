//! Core library components.
//!
//! Everything needed to answer a credentials request independent of the
//! command line: Vault configuration, token resolution, secret retrieval,
//! and hostname handling.

pub mod auth;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod hostname;
pub mod vault;
pub mod version;
