pub mod calculator;
pub mod disclosure;
pub mod parse;
pub mod report;
pub mod session;
pub mod stepper;

pub use crate::domain::model::{Calculation, CalculationInput, CalculationResult, InputIssue, Plan, PlanCatalog};
pub use crate::domain::ports::{ConfigProvider, SubmissionGateway};
pub use crate::utils::error::Result;
