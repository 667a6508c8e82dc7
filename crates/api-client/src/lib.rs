//! Rielbank API Client Crate
//!
//! Typed fetch-and-decode layer for the demo banking endpoints.
//!
//! # Overview
//!
//! The crate provides:
//! - A closed [`Endpoint`] registry (no free-form URLs)
//! - The [`ApiEnvelope`] response wrapper and its error-payload twin
//! - An [`ApiError`] taxonomy with one variant per failure class
//! - [`ApiClient`], a reqwest-backed [`Transport`] with injected
//!   configuration and no global state
//!
//! # Data flow
//!
//! ```text
//! +-----------+     +------------+     +-----------------+
//! | Endpoint  | --> | Transport  | --> | decode_envelope |
//! | (closed)  |     | (HTTP GET/ |     | (sentinel check |
//! |           |     |  POST)     |     |  + fallbacks)   |
//! +-----------+     +------------+     +-----------------+
//! ```
//!
//! The only success path is transport success plus an envelope carrying the
//! sentinel code [`envelope::SUCCESS_CODE`]. Everything else is one of the
//! [`ApiError`] variants; this layer never retries.

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod errors;

pub use client::{
    decode_envelope, fetch_envelope, ApiClient, ClientConfig, HttpMethod, JsonMap, Transport,
    DEFAULT_BASE_URL,
};
pub use endpoints::{AccountCategory, Currency, DataSet, Endpoint};
pub use envelope::{ApiEnvelope, ApiErrorBody, SUCCESS_CODE};
pub use errors::{ApiError, ConnectionReason, HttpBucket};
