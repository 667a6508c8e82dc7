//! Banner fetching.

use std::sync::Arc;

use rielbank_api_client::{fetch_envelope, Endpoint, HttpMethod, Transport};

use super::banners_model::{Banner, BannerListResult};
use crate::errors::Result;

/// Service for the home screen's image slider banners.
pub struct BannerService {
    client: Arc<dyn Transport>,
}

impl BannerService {
    /// Creates a new BannerService instance backed by the given transport.
    pub fn new(client: Arc<dyn Transport>) -> Self {
        Self { client }
    }

    /// Fetches the banner list. There is a single fixture for banners; no
    /// first-load/refresh split.
    pub async fn fetch_banners(&self) -> Result<Vec<Banner>> {
        let envelope = fetch_envelope::<_, BannerListResult>(
            self.client.as_ref(),
            Endpoint::Banners,
            HttpMethod::Get,
            None,
        )
        .await?;
        Ok(envelope.result.banner_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubTransport;

    #[tokio::test]
    async fn banners_come_back_in_fixture_order() {
        let stub = StubTransport::new().with_success(
            Endpoint::Banners,
            r#"{"bannerList":[{"adSeqNo":1,"linkUrl":"https://example.test/1.jpg"},{"adSeqNo":2,"linkUrl":"https://example.test/2.jpg"}]}"#,
        );
        let service = BannerService::new(Arc::new(stub));

        let banners = service.fetch_banners().await.unwrap();
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].ad_seq_no, 1);
        assert_eq!(banners[1].ad_seq_no, 2);
    }
}
