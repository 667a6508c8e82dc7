//! Ad banner models.

use serde::{Deserialize, Serialize};

/// Payload of the banner endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerListResult {
    #[serde(default)]
    pub banner_list: Vec<Banner>,
}

/// One slider banner: an ordering number and the image link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub ad_seq_no: i64,
    pub link_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_decodes_wire_keys() {
        let result: BannerListResult = serde_json::from_str(
            r#"{"bannerList":[{"adSeqNo":3,"linkUrl":"https://example.test/ad3.jpg"}]}"#,
        )
        .unwrap();
        assert_eq!(result.banner_list.len(), 1);
        assert_eq!(result.banner_list[0].ad_seq_no, 3);
        assert_eq!(result.banner_list[0].link_url, "https://example.test/ad3.jpg");
    }
}
