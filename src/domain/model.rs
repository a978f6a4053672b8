use crate::utils::error::Result;
use crate::utils::validation::{validate_min, validate_non_empty_string, validate_positive_number, validate_unique};
use serde::{Deserialize, Serialize};

/// A subscription tier: a flat monthly fee covering `included_volume` cans,
/// with every can beyond that billed at `overage_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub included_volume: u64,
    pub base_fee: f64,
    pub overage_rate: f64,
}

impl Plan {
    pub fn new(included_volume: u64, base_fee: f64, overage_rate: f64) -> Self {
        Self {
            included_volume,
            base_fee,
            overage_rate,
        }
    }

    /// Cans billed at the overage rate for a given monthly volume.
    pub fn extra_cans(&self, monthly_volume: f64) -> f64 {
        (monthly_volume - self.included_volume as f64).max(0.0)
    }

    /// Base fee plus overage for a given monthly volume.
    pub fn total_cost(&self, monthly_volume: f64) -> f64 {
        self.base_fee + self.extra_cans(monthly_volume) * self.overage_rate
    }

    fn validate(&self, id: &str) -> Result<()> {
        validate_positive_number(&format!("plans.{}.included_volume", id), self.included_volume, 1)?;
        validate_min(&format!("plans.{}.base_fee", id), self.base_fee, 0.0)?;
        validate_min(&format!("plans.{}.overage_rate", id), self.overage_rate, 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub plan: Plan,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, plan: Plan) -> Self {
        Self {
            id: id.into(),
            name: None,
            plan,
        }
    }

    /// Configured name, or the id with its first letter upper-cased.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let mut chars = self.id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Ordered, validated, read-only set of plans. Enumeration order is
/// declaration order and drives the order of recommendations.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCatalog {
    entries: Vec<CatalogEntry>,
}

impl PlanCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(crate::utils::error::CalcError::MissingConfigError {
                field: "plans".to_string(),
            });
        }
        validate_unique("plans.id", entries.iter().map(|e| e.id.as_str()))?;
        for entry in &entries {
            validate_non_empty_string("plans.id", &entry.id)?;
            entry.plan.validate(&entry.id)?;
        }
        Ok(Self { entries })
    }

    /// The small / medium / large table shown on the pricing calculator.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new("small", Plan::new(500, 500.0, 0.6)),
                CatalogEntry::new("medium", Plan::new(1500, 1000.0, 0.55)),
                CatalogEntry::new("large", Plan::new(4000, 2000.0, 0.5)),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Raw form state, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationInput {
    pub selected_plan_id: Option<String>,
    pub markup_per_can: String,
    pub monthly_volume: String,
}

impl CalculationInput {
    pub fn new(plan: Option<&str>, markup_per_can: &str, monthly_volume: &str) -> Self {
        Self {
            selected_plan_id: plan.map(str::to_string),
            markup_per_can: markup_per_can.to_string(),
            monthly_volume: monthly_volume.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub extra_revenue: f64,
    pub subscription_cost: f64,
    pub extra_cans: f64,
    pub extra_cans_cost: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub profit_per_can: f64,
    pub yearly_profit: f64,
    pub is_positive: bool,
    pub recommendations: Vec<String>,
}

/// Why no result could be produced yet. Expected while the user is typing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", content = "plan", rename_all = "snake_case")]
pub enum InputIssue {
    NoPlanSelected,
    UnknownPlan(String),
    InvalidMarkup,
    InvalidVolume,
}

impl std::fmt::Display for InputIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputIssue::NoPlanSelected => write!(f, "no plan selected"),
            InputIssue::UnknownPlan(id) => write!(f, "unknown plan '{}'", id),
            InputIssue::InvalidMarkup => write!(f, "markup per can must be a number of at least 0"),
            InputIssue::InvalidVolume => write!(f, "monthly volume must be a number greater than 0"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Calculation {
    Ready(CalculationResult),
    Incomplete { issue: InputIssue },
}

impl Calculation {
    pub fn result(&self) -> Option<&CalculationResult> {
        match self {
            Calculation::Ready(result) => Some(result),
            Calculation::Incomplete { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Calculation::Ready(_))
    }
}
