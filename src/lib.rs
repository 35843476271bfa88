//! # geoquery
//!
//! A single-purpose IP geolocation lookup service:
//! - One text command (`geoip <ip-address>`) over a message-oriented channel
//! - Tab-separated location replies, `NOT_FOUND` and `ERROR` tokens
//! - Bounded request/reply payloads with a configurable cap
//! - Strictly serial request handling, one reply per request
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │            (serial accept, framed messages)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   LookupService                              │
//! │          (validate → parse → lookup → format)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌──────────────┐
//!               │ GeoProvider  │
//!               │ (City .mmdb) │
//!               └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod geo;
pub mod protocol;
pub mod service;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GeoQueryError, Result};
pub use config::Config;
pub use geo::{GeoProvider, GeoRecord};
pub use service::LookupService;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of geoquery
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
