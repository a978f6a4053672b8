use crate::core::parse::parse_number;
use crate::domain::model::{
    Calculation, CalculationInput, CalculationResult, CatalogEntry, InputIssue, PlanCatalog,
};
use crate::utils::money::MoneyFormat;
use std::sync::Arc;

/// Turns form input into a [`Calculation`] against an injected catalog.
///
/// Stateless: the same input always yields the same output, and the catalog
/// is only ever read.
#[derive(Debug, Clone)]
pub struct Calculator {
    catalog: Arc<PlanCatalog>,
    money: MoneyFormat,
}

/// Input that passed the validity gate.
#[derive(Debug, Clone, Copy)]
struct ValidInput<'a> {
    entry: &'a CatalogEntry,
    markup_per_can: f64,
    monthly_volume: f64,
}

impl Calculator {
    pub fn new(catalog: Arc<PlanCatalog>, money: MoneyFormat) -> Self {
        Self { catalog, money }
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    pub fn money(&self) -> &MoneyFormat {
        &self.money
    }

    pub fn calculate(&self, input: &CalculationInput) -> Calculation {
        match self.validate(input) {
            Ok(valid) => Calculation::Ready(self.compute(valid)),
            Err(issue) => {
                tracing::debug!("calculation incomplete: {}", issue);
                Calculation::Incomplete { issue }
            }
        }
    }

    fn validate<'a>(&'a self, input: &CalculationInput) -> Result<ValidInput<'a>, InputIssue> {
        let plan_id = input
            .selected_plan_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(InputIssue::NoPlanSelected)?;
        let entry = self
            .catalog
            .get(plan_id)
            .ok_or_else(|| InputIssue::UnknownPlan(plan_id.to_string()))?;

        let markup_per_can = parse_number(&input.markup_per_can)
            .filter(|m| *m >= 0.0)
            .ok_or(InputIssue::InvalidMarkup)?;
        let monthly_volume = parse_number(&input.monthly_volume)
            .filter(|v| *v > 0.0)
            .ok_or(InputIssue::InvalidVolume)?;

        Ok(ValidInput {
            entry,
            markup_per_can,
            monthly_volume,
        })
    }

    fn compute(&self, input: ValidInput<'_>) -> CalculationResult {
        let plan = &input.entry.plan;
        let volume = input.monthly_volume;

        let extra_cans = plan.extra_cans(volume);
        let subscription_cost = plan.base_fee;
        let extra_cans_cost = extra_cans * plan.overage_rate;
        let total_cost = subscription_cost + extra_cans_cost;
        let extra_revenue = input.markup_per_can * volume;
        let profit = extra_revenue - total_cost;

        CalculationResult {
            extra_revenue,
            subscription_cost,
            extra_cans,
            extra_cans_cost,
            total_cost,
            profit,
            profit_per_can: profit / volume,
            yearly_profit: profit * 12.0,
            is_positive: profit >= 0.0,
            recommendations: self.recommendations(&input.entry.id, total_cost, volume),
        }
    }

    /// One line per other plan that is strictly cheaper at `volume`, in catalog order.
    fn recommendations(&self, selected_id: &str, total_cost: f64, volume: f64) -> Vec<String> {
        self.catalog
            .iter()
            .filter(|other| other.id != selected_id)
            .filter_map(|other| {
                let savings = total_cost - other.plan.total_cost(volume);
                (savings > 0.0).then(|| {
                    format!(
                        "Switching to {} saves {}/month",
                        other.display_name(),
                        self.money.format(savings)
                    )
                })
            })
            .collect()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Arc::new(PlanCatalog::builtin()), MoneyFormat::default())
    }
}
