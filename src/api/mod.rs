//! Coub API module.
//!
//! This module provides:
//! - HTTP client for the liked-timeline endpoint and media files
//! - OAuth authorization-code flow with a local callback listener
//! - API response types

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{authorize, OAuthConfig};
pub use client::{CoubApi, PAGE_SIZE};
pub use types::*;
