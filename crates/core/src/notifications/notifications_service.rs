//! Notification inbox fetching.

use std::sync::Arc;

use rielbank_api_client::{fetch_envelope, DataSet, Endpoint, HttpMethod, Transport};

use super::notifications_model::{NotificationListResult, NotificationMessage};
use crate::errors::Result;

/// Service for the notification inbox.
pub struct NotificationService {
    client: Arc<dyn Transport>,
}

impl NotificationService {
    /// Creates a new NotificationService instance backed by the given transport.
    pub fn new(client: Arc<dyn Transport>) -> Self {
        Self { client }
    }

    /// Fetches the inbox for the given data set.
    pub async fn fetch_notifications(&self, data_set: DataSet) -> Result<Vec<NotificationMessage>> {
        let envelope = fetch_envelope::<_, NotificationListResult>(
            self.client.as_ref(),
            Endpoint::NotificationList(data_set),
            HttpMethod::Get,
            None,
        )
        .await?;
        Ok(envelope.result.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubTransport;

    #[tokio::test]
    async fn the_data_set_selects_the_inbox_fixture() {
        let stub = StubTransport::new()
            .with_success(Endpoint::NotificationList(DataSet::FirstLoad), r#"{"messages":[]}"#)
            .with_success(
                Endpoint::NotificationList(DataSet::Refresh),
                r#"{"messages":[{"status":true,"updateDateTime":"2025/08/01 10:00:00","title":"Account Created","message":"Welcome"}]}"#,
            );
        let service = NotificationService::new(Arc::new(stub));

        let first_load = service.fetch_notifications(DataSet::FirstLoad).await.unwrap();
        assert!(first_load.is_empty());

        let refreshed = service.fetch_notifications(DataSet::Refresh).await.unwrap();
        assert_eq!(refreshed.len(), 1);
        assert!(refreshed[0].status);
    }
}
