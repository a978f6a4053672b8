use crate::contact::form::{ContactSubmission, FormResponse};
use crate::domain::ports::{SubmissionGateway, SubmissionReceipt};
use crate::utils::error::{CalcError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Posts contact submissions to the form handler endpoint.
pub struct HttpSubmissionGateway {
    client: Client,
    endpoint: String,
}

impl HttpSubmissionGateway {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionGateway for HttpSubmissionGateway {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt> {
        submission.validate_before_send()?;

        tracing::debug!("Posting contact form to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(submission.to_urlencoded())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Form endpoint response status: {}", status);

        if status.is_success() {
            return Ok(SubmissionReceipt {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(CalcError::SubmissionError {
            status: status.as_u16(),
            message: FormResponse::error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            }),
        })
    }
}
