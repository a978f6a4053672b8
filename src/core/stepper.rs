use crate::core::parse::parse_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// The +/- buttons next to a numeric text field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepperField {
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub decimals: usize,
}

impl StepperField {
    pub const MARKUP: StepperField = StepperField {
        step: 0.05,
        min: 0.5,
        max: 2.5,
        decimals: 2,
    };

    pub const VOLUME: StepperField = StepperField {
        step: 100.0,
        min: 0.0,
        max: f64::INFINITY,
        decimals: 0,
    };

    /// Applies one step to `current` text and returns the new text.
    /// Unreadable text counts as 0 before stepping.
    pub fn step(&self, current: &str, direction: Direction) -> String {
        let value = parse_number(current).unwrap_or(0.0);
        let next = match direction {
            Direction::Up => value + self.step,
            Direction::Down => value - self.step,
        };
        self.format(next.clamp(self.min, self.max))
    }

    /// Ties round up (`0.625` -> `0.63`), not to even.
    fn format(&self, value: f64) -> String {
        if self.decimals > 0 {
            let scale = 10f64.powi(self.decimals as i32);
            format!("{:.*}", self.decimals, (value * scale).round() / scale)
        } else {
            format!("{}", value.round())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_steps_and_clamps() {
        let field = StepperField::MARKUP;
        assert_eq!(field.step("0.85", Direction::Up), "0.90");
        assert_eq!(field.step("0,85", Direction::Down), "0.80");
        assert_eq!(field.step("2.48", Direction::Up), "2.50");
        assert_eq!(field.step("0.52", Direction::Down), "0.50");
        // empty counts as 0, then clamps to the minimum
        assert_eq!(field.step("", Direction::Up), "0.50");
    }

    #[test]
    fn test_markup_ties_round_up() {
        // 0.575 + 0.05 lands exactly on 0.625
        assert_eq!(StepperField::MARKUP.step("0.575", Direction::Up), "0.63");
        assert_eq!(StepperField::MARKUP.step("1.175", Direction::Down), "1.13");
    }

    #[test]
    fn test_volume_rounds_to_whole_cans() {
        let field = StepperField::VOLUME;
        assert_eq!(field.step("1500", Direction::Up), "1600");
        assert_eq!(field.step("1450.6", Direction::Down), "1351");
        assert_eq!(field.step("50", Direction::Down), "0");
        assert_eq!(field.step("", Direction::Up), "100");
    }
}
