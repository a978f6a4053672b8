use crate::contact::form::ContactSubmission;
use crate::domain::model::PlanCatalog;
use crate::utils::error::Result;
use crate::utils::money::MoneyFormat;
use async_trait::async_trait;
use std::sync::Arc;

pub trait ConfigProvider: Send + Sync {
    fn catalog(&self) -> Arc<PlanCatalog>;
    fn money_format(&self) -> &MoneyFormat;
    fn contact_endpoint(&self) -> &str;
}

/// Acknowledgement from the form endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
}

#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<SubmissionReceipt>;
}
