//! JSON wire types for the HTTP API.

use serde::{Deserialize, Serialize};

/// Body of `POST /remove-bg`. Exactly one of the two fields must be set and
/// non-empty; the input resolver enforces that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBgRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

/// Body of every `POST /remove-bg` response. `imageUrl` + `message` are
/// populated on success, `error` on failure, driven by `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBgResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RemoveBgResponse {
    /// Success payload carrying the processed image as a PNG data URI.
    pub fn removed(data_uri: String) -> Self {
        Self {
            success: true,
            image_url: Some(data_uri),
            message: Some("background removed successfully".to_string()),
            error: None,
        }
    }

    /// Failure payload with a descriptive error string.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            image_url: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fields_use_camel_case() {
        let req: RemoveBgRequest =
            serde_json::from_str(r#"{"imageUrl":"http://x/y.png"}"#).unwrap();
        assert_eq!(req.image_url.as_deref(), Some("http://x/y.png"));
        assert!(req.image_base64.is_none());

        let req: RemoveBgRequest = serde_json::from_str(r#"{"imageBase64":"AAAA"}"#).unwrap();
        assert_eq!(req.image_base64.as_deref(), Some("AAAA"));
    }

    #[test]
    fn empty_body_deserializes_to_unset_fields() {
        let req: RemoveBgRequest = serde_json::from_str("{}").unwrap();
        assert!(req.image_url.is_none());
        assert!(req.image_base64.is_none());
    }

    #[test]
    fn success_response_omits_the_error_field() {
        let json =
            serde_json::to_value(RemoveBgResponse::removed("data:image/png;base64,AA".into()))
                .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["imageUrl"], "data:image/png;base64,AA");
        assert!(json.get("error").is_none());
        assert!(json["message"].as_str().unwrap().contains("removed"));
    }

    #[test]
    fn failure_response_omits_the_success_fields() {
        let json = serde_json::to_value(RemoveBgResponse::failure("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("imageUrl").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn health_shape() {
        let json = serde_json::to_value(HealthResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}
