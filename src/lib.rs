pub mod config;
pub mod contact;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use core::{calculator::Calculator, session::CalculatorSession};
pub use domain::model::{Calculation, CalculationInput, CalculationResult, InputIssue, Plan, PlanCatalog};
pub use utils::error::{CalcError, Result};
