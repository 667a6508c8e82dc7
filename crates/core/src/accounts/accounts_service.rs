//! Balance aggregation across the six per-currency, per-category endpoints.

use std::sync::Arc;

use futures::future::join_all;
use log::warn;
use rust_decimal::Decimal;

use rielbank_api_client::{
    fetch_envelope, AccountCategory, Currency, DataSet, Endpoint, HttpMethod, Transport,
};

use super::accounts_model::{AccountItem, AccountListResult, AggregateTotals};

/// The fixed fetch plan: three categories in each of the two currencies.
const BALANCE_PAIRS: [(Currency, AccountCategory); 6] = [
    (Currency::Khr, AccountCategory::Savings),
    (Currency::Usd, AccountCategory::Savings),
    (Currency::Khr, AccountCategory::Fixed),
    (Currency::Usd, AccountCategory::Fixed),
    (Currency::Khr, AccountCategory::Digital),
    (Currency::Usd, AccountCategory::Digital),
];

/// Sums a list's balances per currency with exact decimal arithmetic.
///
/// Currency codes are matched case-insensitively; entries in currencies
/// outside the supported set contribute to neither total.
pub fn sum_by_currency(items: &[AccountItem]) -> (Decimal, Decimal) {
    let mut usd = Decimal::ZERO;
    let mut khr = Decimal::ZERO;
    for item in items {
        match item.currency() {
            Some(Currency::Usd) => usd += item.balance,
            Some(Currency::Khr) => khr += item.balance,
            None => {}
        }
    }
    (usd, khr)
}

/// Service computing the dashboard's total balance per currency.
pub struct BalanceService {
    client: Arc<dyn Transport>,
}

impl BalanceService {
    /// Creates a new BalanceService instance backed by the given transport.
    pub fn new(client: Arc<dyn Transport>) -> Self {
        Self { client }
    }

    /// Fetches all six balance lists concurrently and reduces them into
    /// per-currency totals.
    ///
    /// A failed fetch contributes zero to both currencies instead of
    /// aborting the run; each failure is logged and counted in
    /// [`AggregateTotals::failed_fetches`] so the caller can surface an
    /// advisory. The result is only produced once every fetch has settled;
    /// no partial totals are ever emitted. Each in-flight fetch accumulates
    /// into its own local pair, so the final reduction is the only step
    /// that touches shared state, after the join.
    pub async fn aggregate_totals(&self, data_set: DataSet) -> AggregateTotals {
        let fetches = BALANCE_PAIRS.iter().map(|&(currency, category)| {
            let client = Arc::clone(&self.client);
            async move {
                let endpoint = Endpoint::balance(currency, category, data_set);
                let outcome = fetch_envelope::<_, AccountListResult>(
                    client.as_ref(),
                    endpoint,
                    HttpMethod::Get,
                    None,
                )
                .await;
                match outcome {
                    Ok(envelope) => Ok(sum_by_currency(envelope.result.list(category))),
                    Err(err) => {
                        warn!(
                            "balance fetch {} failed, contributing zero: {}",
                            endpoint.api_id(),
                            err
                        );
                        Err(())
                    }
                }
            }
        });

        let mut totals = AggregateTotals::default();
        for partial in join_all(fetches).await {
            match partial {
                Ok((usd, khr)) => {
                    totals.total_usd += usd;
                    totals.total_khr += khr;
                }
                Err(()) => totals.failed_fetches += 1,
            }
        }
        totals
    }
}
