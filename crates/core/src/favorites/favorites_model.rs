//! Favorite transfer target models.

use serde::{Deserialize, Serialize};

/// Payload of the favorite list endpoints. A missing `favoriteList` key is
/// an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteListResult {
    #[serde(default)]
    pub favorite_list: Vec<FavoriteItem>,
}

/// One favorite as the API returns it; `trans_type` is the raw wire tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    pub nickname: String,
    pub trans_type: String,
}

/// Transaction kinds the app can render. The wire tags are a closed set;
/// anything else is dropped at display-mapping time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionType {
    Cubc,
    Mobile,
    Pmf,
    CreditCard,
}

impl TransactionType {
    pub fn from_wire(tag: &str) -> Option<Self> {
        match tag {
            "CUBC" => Some(TransactionType::Cubc),
            "Mobile" => Some(TransactionType::Mobile),
            "PMF" => Some(TransactionType::Pmf),
            "CreditCard" => Some(TransactionType::CreditCard),
            _ => None,
        }
    }
}

/// A favorite ready for the UI: parsed kind plus nickname.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteDisplayItem {
    pub kind: TransactionType,
    pub nickname: String,
}

/// Maps raw favorites to display items, dropping unknown transaction types.
pub fn display_items(items: &[FavoriteItem]) -> Vec<FavoriteDisplayItem> {
    items
        .iter()
        .filter_map(|item| {
            TransactionType::from_wire(&item.trans_type).map(|kind| FavoriteDisplayItem {
                kind,
                nickname: item.nickname.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_list_decodes_wire_keys_and_defaults_to_empty() {
        let populated: FavoriteListResult = serde_json::from_str(
            r#"{"favoriteList":[{"nickname":"Mom","transType":"CUBC"}]}"#,
        )
        .unwrap();
        assert_eq!(populated.favorite_list.len(), 1);
        assert_eq!(populated.favorite_list[0].nickname, "Mom");

        let empty: FavoriteListResult = serde_json::from_str("{}").unwrap();
        assert!(empty.favorite_list.is_empty());
    }

    #[test]
    fn display_mapping_drops_unknown_transaction_types() {
        let items = vec![
            FavoriteItem {
                nickname: "Mom".to_string(),
                trans_type: "CUBC".to_string(),
            },
            FavoriteItem {
                nickname: "Landlord".to_string(),
                trans_type: "Mystery".to_string(),
            },
            FavoriteItem {
                nickname: "Phone".to_string(),
                trans_type: "Mobile".to_string(),
            },
        ];

        let display = display_items(&items);
        assert_eq!(display.len(), 2);
        assert_eq!(display[0].kind, TransactionType::Cubc);
        assert_eq!(display[1].kind, TransactionType::Mobile);
        assert_eq!(display[1].nickname, "Phone");
    }

    #[test]
    fn wire_tags_are_case_sensitive() {
        assert_eq!(TransactionType::from_wire("PMF"), Some(TransactionType::Pmf));
        assert_eq!(TransactionType::from_wire("pmf"), None);
        assert_eq!(
            TransactionType::from_wire("CreditCard"),
            Some(TransactionType::CreditCard)
        );
    }
}
