//! Endpoint registry for the demo banking API.
//!
//! Every resource the app talks to is a static JSON fixture addressed as
//! `<base>/<api_id>.json`. The registry is a closed enum so an unregistered
//! endpoint cannot be expressed at all; balance endpoints are keyed by
//! `(currency, category, data set)` and resolved with [`Endpoint::balance`].

use std::fmt;

/// Which fixture generation an endpoint should serve.
///
/// The demo backend publishes two variants of every list endpoint: the one
/// served on first load and the one served after a user-triggered refresh
/// (`khrSavings1` vs `khrSavings2`, the empty vs populated favorite list).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataSet {
    FirstLoad,
    Refresh,
}

/// Account currency. The API only ever serves these two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Khr,
}

impl Currency {
    /// The wire representation used in account entries.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Khr => "KHR",
        }
    }

    /// Parses a wire currency code, case-insensitively.
    ///
    /// Unknown codes yield `None`; callers decide whether that is an error
    /// or something to skip (the balance summer skips them).
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("USD") {
            Some(Currency::Usd)
        } else if code.eq_ignore_ascii_case("KHR") {
            Some(Currency::Khr)
        } else {
            None
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Account grouping used by the balance endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountCategory {
    Savings,
    Fixed,
    Digital,
}

impl AccountCategory {
    /// Camel-cased fragment used in balance endpoint ids.
    const fn api_fragment(self) -> &'static str {
        match self {
            AccountCategory::Savings => "Savings",
            AccountCategory::Fixed => "Fixed",
            AccountCategory::Digital => "Digital",
        }
    }
}

/// A registered API resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Home screen ad banners.
    Banners,
    /// Favorite transfer targets. First load serves the empty fixture.
    FavoriteList(DataSet),
    /// Push notification inbox. First load serves the empty fixture.
    NotificationList(DataSet),
    /// One of the twelve per-currency, per-category balance lists.
    AccountBalance {
        currency: Currency,
        category: AccountCategory,
        data_set: DataSet,
    },
}

impl Endpoint {
    /// Resolves the balance endpoint for a `(currency, category)` pair.
    pub fn balance(currency: Currency, category: AccountCategory, data_set: DataSet) -> Self {
        Endpoint::AccountBalance {
            currency,
            category,
            data_set,
        }
    }

    /// The fixture id, without base URL or `.json` suffix.
    pub fn api_id(self) -> String {
        match self {
            Endpoint::Banners => "banner".to_string(),
            Endpoint::FavoriteList(DataSet::FirstLoad) => "emptyFavoriteList".to_string(),
            Endpoint::FavoriteList(DataSet::Refresh) => "favoriteList".to_string(),
            Endpoint::NotificationList(DataSet::FirstLoad) => "emptyNotificationList".to_string(),
            Endpoint::NotificationList(DataSet::Refresh) => "notificationList".to_string(),
            Endpoint::AccountBalance {
                currency,
                category,
                data_set,
            } => {
                let prefix = match currency {
                    Currency::Khr => "khr",
                    Currency::Usd => "usd",
                };
                let generation = match data_set {
                    DataSet::FirstLoad => 1,
                    DataSet::Refresh => 2,
                };
                format!("{}{}{}", prefix, category.api_fragment(), generation)
            }
        }
    }

    /// The full resource URL under the given base.
    pub fn url(self, base_url: &str) -> String {
        format!("{}/{}.json", base_url.trim_end_matches('/'), self.api_id())
    }
}
