//! Contact form payload and the serverless handler that receives it.

use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{is_valid_email, validate_email};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const FORM_NAME: &str = "contact-form";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Reads the fields out of an `application/x-www-form-urlencoded` body.
    /// Missing fields come back empty; [`FormResponse`] decides what that means.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut first_name = None;
        let mut last_name = None;
        let mut email = None;
        let mut phone = None;
        let mut message = None;

        for (key, value) in url::form_urlencoded::parse(body) {
            let slot = match &*key {
                "firstName" => &mut first_name,
                "lastName" => &mut last_name,
                "email" => &mut email,
                "phone" => &mut phone,
                "message" => &mut message,
                _ => continue,
            };
            // first occurrence wins, even when it is empty
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        ContactSubmission {
            first_name: first_name.unwrap_or_default(),
            last_name: last_name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone: phone.filter(|p: &String| !p.is_empty()),
            message: message.unwrap_or_default(),
        }
    }

    pub fn to_urlencoded(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair("form-name", FORM_NAME)
            .append_pair("firstName", &self.first_name)
            .append_pair("lastName", &self.last_name)
            .append_pair("email", &self.email);
        if let Some(phone) = &self.phone {
            serializer.append_pair("phone", phone);
        }
        serializer.append_pair("message", &self.message);
        serializer.finish()
    }

    pub fn has_required_fields(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email, &self.message]
            .iter()
            .all(|field| !field.is_empty())
    }

    /// Check run in the browser before sending: only the e-mail shape.
    pub fn validate_before_send(&self) -> Result<()> {
        validate_email("email", &self.email)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl FormResponse {
    fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Pulls the `error` message out of a JSON body, if there is one.
    pub fn error_message(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("error")?
            .as_str()
            .map(str::to_string)
    }
}

/// Server side of the contact form. Validates, logs, acknowledges; nothing
/// is stored.
pub fn handle_form_submission(method: &str, body: &[u8]) -> FormResponse {
    if method != "POST" {
        return FormResponse {
            status: 405,
            content_type: "text/plain",
            body: "Method not allowed".to_string(),
        };
    }

    match accept(body) {
        Ok(submission) => {
            tracing::info!(
                first_name = %submission.first_name,
                last_name = %submission.last_name,
                email = %submission.email,
                phone = submission.phone.as_deref().unwrap_or("not provided"),
                message = %submission.message,
                timestamp = %chrono::Utc::now().to_rfc3339(),
                "Form submission"
            );
            FormResponse::json(200, json!({ "success": true }))
        }
        Err(CalcError::ValidationError { message }) => FormResponse::error(400, &message),
        Err(e) => {
            tracing::error!("Form error: {}", e);
            FormResponse::error(500, "Submission failed")
        }
    }
}

fn accept(body: &[u8]) -> Result<ContactSubmission> {
    std::str::from_utf8(body)
        .map_err(|e| CalcError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    let submission = ContactSubmission::from_urlencoded(body);

    if !submission.has_required_fields() {
        return Err(CalcError::ValidationError {
            message: "Missing required fields".to_string(),
        });
    }
    if !is_valid_email(&submission.email) {
        return Err(CalcError::ValidationError {
            message: "Invalid email format".to_string(),
        });
    }
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(pairs: &[(&str, &str)]) -> Vec<u8> {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
            .into_bytes()
    }

    #[test]
    fn test_rejects_non_post() {
        let response = handle_form_submission("GET", b"");
        assert_eq!(response.status, 405);
        assert_eq!(response.body, "Method not allowed");

        // method names are case-sensitive
        assert_eq!(handle_form_submission("post", b"").status, 405);
    }

    #[test]
    fn test_first_value_wins_even_when_empty() {
        let response = handle_form_submission(
            "POST",
            b"firstName=&firstName=Ana&lastName=S&email=a%40b.co&message=m",
        );
        assert_eq!(response.status, 400);
        assert_eq!(
            FormResponse::error_message(&response.body).as_deref(),
            Some("Missing required fields")
        );

        let submission = ContactSubmission::from_urlencoded(
            b"firstName=Ana&firstName=Bea&phone=&phone=912&lastName=S&email=a%40b.co&message=m",
        );
        assert_eq!(submission.first_name, "Ana");
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn test_missing_fields() {
        let response = handle_form_submission(
            "POST",
            &body(&[("firstName", "Ana"), ("email", "ana@example.com"), ("message", "hi")]),
        );
        assert_eq!(response.status, 400);
        assert_eq!(
            FormResponse::error_message(&response.body).as_deref(),
            Some("Missing required fields")
        );
    }

    #[test]
    fn test_invalid_email() {
        let response = handle_form_submission(
            "POST",
            &body(&[
                ("firstName", "Ana"),
                ("lastName", "Silva"),
                ("email", "ana@example"),
                ("message", "hi"),
            ]),
        );
        assert_eq!(response.status, 400);
        assert_eq!(
            FormResponse::error_message(&response.body).as_deref(),
            Some("Invalid email format")
        );
    }

    #[test]
    fn test_accepts_valid_submission() {
        let response = handle_form_submission(
            "POST",
            &body(&[
                ("form-name", FORM_NAME),
                ("firstName", "Ana"),
                ("lastName", "Silva"),
                ("email", "ana@example.com"),
                ("message", "Do you ship to Porto?"),
            ]),
        );
        assert!(response.is_success());
        assert_eq!(response.content_type, "application/json");
        assert_eq!(response.body, r#"{"success":true}"#);
    }

    #[test]
    fn test_non_utf8_body_fails() {
        let response = handle_form_submission("POST", &[0xff, 0xfe, 0x3d]);
        assert_eq!(response.status, 500);
        assert_eq!(
            FormResponse::error_message(&response.body).as_deref(),
            Some("Submission failed")
        );
    }

    #[test]
    fn test_urlencoded_roundtrip_keeps_phone_optional() {
        let submission = ContactSubmission {
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: "ana@example.com".to_string(),
            phone: None,
            message: "Olá & bem-vindo".to_string(),
        };
        let encoded = submission.to_urlencoded();
        assert!(encoded.starts_with("form-name=contact-form&"));
        assert!(!encoded.contains("phone="));
        assert_eq!(ContactSubmission::from_urlencoded(encoded.as_bytes()), submission);
    }
}
