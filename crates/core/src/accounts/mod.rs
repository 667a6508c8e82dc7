//! Accounts module - balance models and the aggregation service.

mod accounts_model;
mod accounts_service;

// Re-export the public interface
pub use accounts_model::{AccountItem, AccountListResult, AggregateTotals};
pub use accounts_service::{sum_by_currency, BalanceService};
