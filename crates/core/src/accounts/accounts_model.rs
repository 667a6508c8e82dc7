//! Account balance domain models.
//!
//! Balances are carried as [`Decimal`] end to end. The wire format puts
//! plain JSON numbers in `balance`, so the field goes through serde_json's
//! arbitrary-precision path instead of `f64`; summing currency amounts
//! through binary floats is exactly the drift this layer exists to avoid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rielbank_api_client::{AccountCategory, Currency};

/// One account row from a balance endpoint:
/// `{ "account": "...", "curr": "USD"|"KHR", "balance": 123.45 }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountItem {
    pub account: String,
    /// Wire currency code, matched case-insensitively against USD/KHR.
    pub curr: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl AccountItem {
    /// The parsed currency, or `None` for codes outside the supported set.
    pub fn currency(&self) -> Option<Currency> {
        Currency::from_code(&self.curr)
    }
}

/// Grouped account lists as a balance endpoint returns them. Absent lists
/// are treated as empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountListResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_list: Option<Vec<AccountItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_deposit_list: Option<Vec<AccountItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digital_list: Option<Vec<AccountItem>>,
}

impl AccountListResult {
    /// The list for the requested category, empty when absent.
    pub fn list(&self, category: AccountCategory) -> &[AccountItem] {
        let list = match category {
            AccountCategory::Savings => &self.savings_list,
            AccountCategory::Fixed => &self.fixed_deposit_list,
            AccountCategory::Digital => &self.digital_list,
        };
        list.as_deref().unwrap_or_default()
    }
}

/// Per-currency totals for one aggregation run.
///
/// Created fresh by [`super::BalanceService::aggregate_totals`]; the caller
/// replaces the previous value on refresh. `failed_fetches` counts the
/// endpoints that contributed zero because their fetch failed, so the UI
/// can show a degraded-data advisory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateTotals {
    pub total_usd: Decimal,
    pub total_khr: Decimal,
    pub failed_fetches: usize,
}

impl AggregateTotals {
    pub fn by_currency(&self, currency: Currency) -> Decimal {
        match currency {
            Currency::Usd => self.total_usd,
            Currency::Khr => self.total_khr,
        }
    }

    /// Whether at least one endpoint failed and the totals are partial.
    pub fn is_degraded(&self) -> bool {
        self.failed_fetches > 0
    }
}
