use crate::core::calculator::Calculator;
use crate::domain::model::{Calculation, CalculationInput};
use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Largest number of rows a single sweep may produce.
pub const MAX_SWEEP_ROWS: u64 = 10_000;

/// Profit for one plan and markup across a range of monthly volumes.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeSweep {
    pub plan_id: String,
    pub markup: String,
    pub from: f64,
    pub to: f64,
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub volume: f64,
    pub plan: String,
    pub extra_revenue: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub profit_per_can: f64,
    pub yearly_profit: f64,
    pub is_positive: bool,
    pub recommendations: String,
}

impl VolumeSweep {
    fn check_bounds(&self) -> Result<()> {
        let valid = self.step.is_finite()
            && self.step > 0.0
            && self.from.is_finite()
            && self.from > 0.0
            && self.to.is_finite()
            && self.to >= self.from;
        if !valid {
            return Err(CalcError::ValidationError {
                message: format!(
                    "Invalid sweep range: from {} to {} step {} (need 0 < from <= to and step > 0)",
                    self.from, self.to, self.step
                ),
            });
        }

        let rows = ((self.to - self.from) / self.step).floor() + 1.0;
        if rows > MAX_SWEEP_ROWS as f64 {
            return Err(CalcError::ValidationError {
                message: format!(
                    "Sweep would produce {} rows (limit {}); use a larger step",
                    rows, MAX_SWEEP_ROWS
                ),
            });
        }
        Ok(())
    }

    pub fn run(&self, calculator: &Calculator) -> Result<Vec<ReportRow>> {
        self.check_bounds()?;

        let mut rows = Vec::new();
        let mut index = 0u64;
        loop {
            // multiply instead of accumulating so long sweeps don't drift
            let volume = self.from + self.step * index as f64;
            if volume > self.to {
                break;
            }

            let input = CalculationInput::new(Some(self.plan_id.as_str()), &self.markup, &volume.to_string());
            match calculator.calculate(&input) {
                Calculation::Ready(result) => rows.push(ReportRow {
                    volume,
                    plan: self.plan_id.clone(),
                    extra_revenue: result.extra_revenue,
                    total_cost: result.total_cost,
                    profit: result.profit,
                    profit_per_can: result.profit_per_can,
                    yearly_profit: result.yearly_profit,
                    is_positive: result.is_positive,
                    recommendations: result.recommendations.join("; "),
                }),
                Calculation::Incomplete { issue } => {
                    return Err(CalcError::ValidationError {
                        message: format!("Cannot build report: {}", issue),
                    });
                }
            }
            index += 1;
        }

        tracing::debug!("volume sweep produced {} rows", rows.len());
        Ok(rows)
    }
}

pub fn write_report<W: Write>(rows: &[ReportRow], format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for row in rows {
                csv_writer.serialize(row)?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
