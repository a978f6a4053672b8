use crate::core::calculator::Calculator;
use crate::core::stepper::{Direction, StepperField};
use crate::domain::model::{Calculation, CalculationInput};

/// One person's calculator form. Owns the raw input and recomputes the
/// whole result after every change.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    calculator: Calculator,
    input: CalculationInput,
}

impl CalculatorSession {
    pub fn new(calculator: Calculator, input: CalculationInput) -> Self {
        Self { calculator, input }
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    pub fn calculation(&self) -> Calculation {
        self.calculator.calculate(&self.input)
    }

    pub fn select_plan(&mut self, plan_id: &str) -> Calculation {
        self.input.selected_plan_id = Some(plan_id.to_string());
        self.calculation()
    }

    pub fn clear_plan(&mut self) -> Calculation {
        self.input.selected_plan_id = None;
        self.calculation()
    }

    pub fn set_markup(&mut self, text: &str) -> Calculation {
        self.input.markup_per_can = text.to_string();
        self.calculation()
    }

    pub fn set_volume(&mut self, text: &str) -> Calculation {
        self.input.monthly_volume = text.to_string();
        self.calculation()
    }

    pub fn step_markup(&mut self, direction: Direction) -> Calculation {
        self.input.markup_per_can = StepperField::MARKUP.step(&self.input.markup_per_can, direction);
        self.calculation()
    }

    pub fn step_volume(&mut self, direction: Direction) -> Calculation {
        self.input.monthly_volume = StepperField::VOLUME.step(&self.input.monthly_volume, direction);
        self.calculation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::InputIssue;

    fn session() -> CalculatorSession {
        CalculatorSession::new(
            Calculator::default(),
            CalculationInput::new(Some("medium"), "0.85", "1500"),
        )
    }

    #[test]
    fn test_every_change_recomputes() {
        let mut session = session();
        assert!(session.calculation().is_ready());

        let after_volume = session.set_volume("2000");
        assert!((after_volume.result().unwrap().profit - 425.0).abs() < 1e-9);

        let after_step = session.step_volume(Direction::Up);
        assert_eq!(session.input().monthly_volume, "2100");
        assert!(after_step.is_ready());
    }

    #[test]
    fn test_invalid_field_drops_result_and_recovers() {
        let mut session = session();
        assert_eq!(
            session.set_markup(""),
            Calculation::Incomplete {
                issue: InputIssue::InvalidMarkup
            }
        );

        // stepping an empty markup starts from 0 and clamps to 0.50
        let recovered = session.step_markup(Direction::Up);
        assert_eq!(session.input().markup_per_can, "0.50");
        assert!(recovered.is_ready());

        assert_eq!(
            session.clear_plan(),
            Calculation::Incomplete {
                issue: InputIssue::NoPlanSelected
            }
        );
        assert!(session.select_plan("large").is_ready());
    }
}
