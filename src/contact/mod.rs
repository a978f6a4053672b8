pub mod client;
pub mod form;
pub mod proxy;

pub use client::HttpSubmissionGateway;
pub use form::{handle_form_submission, ContactSubmission, FormResponse};
pub use proxy::{handle_proxy_event, ProxyRequest, ProxyResponse};
