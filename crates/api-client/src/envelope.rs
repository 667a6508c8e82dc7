//! The response envelope every endpoint wraps its payload in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Message code marking a usable response. Anything else is a logical error.
pub const SUCCESS_CODE: &str = "0000";

/// The backend is in a maintenance window.
pub const SYSTEM_MAINTENANCE_CODE: &str = "M-9299";

/// The session is no longer valid and the user must sign in again.
pub const INVALID_SESSION_CODE: &str = "M-9103";

/// Request failed field validation; `validateError` carries the details.
pub const VALIDATION_CODE: &str = "M-9908";

/// The client version is below the enforced minimum.
pub const FORCE_UPDATE_CODE: &str = "M-1105";

/// Outer JSON object carried by every response:
/// `{ "msgCode": "...", "msgContent": "...", "result": ... }`.
///
/// `result` is only meaningful when [`is_success`](Self::is_success) holds;
/// the fetch client enforces that before handing an envelope out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub msg_code: String,
    pub msg_content: String,
    pub result: T,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.msg_code == SUCCESS_CODE
    }
}

/// Error payload parsed from a non-success response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_title: Option<String>,
    pub msg_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg_content: Option<String>,
    /// Consecutive credential failures, when the backend counts them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<u32>,
    /// Per-field validation messages, keyed by field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_error: Option<HashMap<String, String>>,
}

impl ApiErrorBody {
    /// Display-ready message in the `<content>(<code>)` form the app shows.
    pub fn display_message(&self) -> String {
        format!("{}({})", self.msg_content.as_deref().unwrap_or(""), self.msg_code)
    }

    /// Field validation errors, present only for the validation code.
    pub fn validation_errors(&self) -> Option<&HashMap<String, String>> {
        if self.msg_code == VALIDATION_CODE {
            self.validate_error.as_ref()
        } else {
            None
        }
    }
}
