//! Error Body - the JSON shape every failure is rendered with
//!
//! `{"error": "<message>"}`, plus an optional `action` hint.

use serde::Serialize;

/// JSON error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_error_only() {
        let json = serde_json::to_value(ErrorBody::new("user not found")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "user not found" }));
    }

    #[test]
    fn test_serializes_action_when_present() {
        let body = ErrorBody::new("username is required").with_action("Provide a username");
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["action"], "Provide a username");
    }
}
