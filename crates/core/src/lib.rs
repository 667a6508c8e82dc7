//! Rielbank Core Crate
//!
//! Domain services behind the demo app's home dashboard: per-currency
//! balance aggregation, favorites, banners, and the notification inbox.
//!
//! Every service takes an `Arc<dyn Transport>` at construction, so the UI
//! layer wires one [`rielbank_api_client::ApiClient`] and shares it; tests
//! substitute canned transports. Services own no other state.
//!
//! The one place partial failure is tolerated is
//! [`accounts::BalanceService::aggregate_totals`]: a failed balance fetch
//! contributes zero and is counted for an advisory instead of aborting the
//! dashboard. Every other fetch surfaces its error to the caller.

pub mod accounts;
pub mod banners;
pub mod errors;
pub mod favorites;
pub mod notifications;

pub use accounts::{AccountItem, AccountListResult, AggregateTotals, BalanceService};
pub use banners::{Banner, BannerService};
pub use errors::{Error, Result};
pub use favorites::{FavoriteDisplayItem, FavoriteItem, FavoriteService, TransactionType};
pub use notifications::{NotificationMessage, NotificationService};

#[cfg(test)]
pub(crate) mod test_support;
