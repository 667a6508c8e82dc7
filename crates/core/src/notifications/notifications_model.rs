//! Push notification inbox models.

use serde::{Deserialize, Serialize};

/// Payload of the notification list endpoints. A missing `messages` key is
/// an empty inbox.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationListResult {
    #[serde(default)]
    pub messages: Vec<NotificationMessage>,
}

/// One inbox entry. `status` is the read flag; `update_date_time` is kept
/// as the server's display string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationMessage {
    pub status: bool,
    pub update_date_time: String,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_decode_and_default_to_empty() {
        let populated: NotificationListResult = serde_json::from_str(
            r#"{"messages":[{"status":false,"updateDateTime":"2025/08/01 10:00:00","title":"Account transaction","message":"You received $5.00"}]}"#,
        )
        .unwrap();
        assert_eq!(populated.messages.len(), 1);
        assert!(!populated.messages[0].status);
        assert_eq!(populated.messages[0].title, "Account transaction");

        let empty: NotificationListResult = serde_json::from_str("{}").unwrap();
        assert!(empty.messages.is_empty());
    }
}
