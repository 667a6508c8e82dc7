//! Favorite list fetching.

use std::sync::Arc;

use rielbank_api_client::{fetch_envelope, DataSet, Endpoint, HttpMethod, Transport};

use super::favorites_model::{display_items, FavoriteDisplayItem, FavoriteItem, FavoriteListResult};
use crate::errors::Result;

/// Service for the home screen's favorite transfer targets.
pub struct FavoriteService {
    client: Arc<dyn Transport>,
}

impl FavoriteService {
    /// Creates a new FavoriteService instance backed by the given transport.
    pub fn new(client: Arc<dyn Transport>) -> Self {
        Self { client }
    }

    /// Fetches the favorite list for the given data set.
    pub async fn fetch_favorites(&self, data_set: DataSet) -> Result<Vec<FavoriteItem>> {
        let envelope = fetch_envelope::<_, FavoriteListResult>(
            self.client.as_ref(),
            Endpoint::FavoriteList(data_set),
            HttpMethod::Get,
            None,
        )
        .await?;
        Ok(envelope.result.favorite_list)
    }

    /// Fetches favorites and maps them straight to display items.
    pub async fn fetch_display_items(&self, data_set: DataSet) -> Result<Vec<FavoriteDisplayItem>> {
        let favorites = self.fetch_favorites(data_set).await?;
        Ok(display_items(&favorites))
    }
}
