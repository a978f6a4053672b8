//! API Gateway proxy events in front of [`handle_form_submission`].

use crate::contact::form::handle_form_submission;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// The parts of a proxy event the form handler reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

pub fn handle_proxy_event(request: ProxyRequest) -> ProxyResponse {
    tracing::info!("Form handler invoked with {}", request.http_method);

    if request.is_base64_encoded {
        // the site always posts plain URL-encoded text
        tracing::warn!("Rejecting base64-encoded body");
        return ProxyResponse {
            status_code: 400,
            headers: content_type_header("application/json"),
            body: json!({ "error": "Unsupported body encoding" }).to_string(),
        };
    }

    let body = request.body.unwrap_or_default();
    let response = handle_form_submission(&request.http_method, body.as_bytes());

    ProxyResponse {
        status_code: response.status,
        headers: content_type_header(response.content_type),
        body: response.body,
    }
}

fn content_type_header(value: &str) -> HashMap<String, String> {
    HashMap::from([("Content-Type".to_string(), value.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BODY: &str =
        "firstName=Ana&lastName=Silva&email=ana%40example.com&message=Ol%C3%A1";

    fn post(body: &str, is_base64_encoded: bool) -> ProxyRequest {
        ProxyRequest {
            http_method: "POST".to_string(),
            body: Some(body.to_string()),
            is_base64_encoded,
        }
    }

    #[test]
    fn test_base64_body_is_rejected() {
        let response = handle_proxy_event(post(VALID_BODY, true));
        assert_eq!(response.status_code, 400);
        assert_eq!(response.headers["Content-Type"], "application/json");
        assert_eq!(response.body, r#"{"error":"Unsupported body encoding"}"#);
    }

    #[test]
    fn test_valid_post_maps_json_content_type() {
        let response = handle_proxy_event(post(VALID_BODY, false));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers.len(), 1);
        assert_eq!(response.headers["Content-Type"], "application/json");
        assert_eq!(response.body, r#"{"success":true}"#);
    }

    #[test]
    fn test_wrong_method_maps_plain_text_content_type() {
        let response = handle_proxy_event(ProxyRequest {
            http_method: "GET".to_string(),
            ..Default::default()
        });
        assert_eq!(response.status_code, 405);
        assert_eq!(response.headers["Content-Type"], "text/plain");
        assert_eq!(response.body, "Method not allowed");
    }

    #[test]
    fn test_missing_body_counts_as_empty() {
        let response = handle_proxy_event(ProxyRequest {
            http_method: "POST".to_string(),
            body: None,
            is_base64_encoded: false,
        });
        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn test_event_deserializes_from_camel_case() {
        let request: ProxyRequest = serde_json::from_str(
            r#"{"httpMethod":"POST","body":"a=b","isBase64Encoded":true,"path":"/submit"}"#,
        )
        .unwrap();
        assert_eq!(request.http_method, "POST");
        assert_eq!(request.body.as_deref(), Some("a=b"));
        assert!(request.is_base64_encoded);

        let response = serde_json::to_value(handle_proxy_event(request)).unwrap();
        assert_eq!(response["statusCode"], 400);
    }
}
