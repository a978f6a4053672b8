use serde::{Deserialize, Serialize};

/// How monetary amounts are rendered. Values stay plain `f64` everywhere
/// else; rounding only happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyFormat {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
}

fn default_symbol() -> String {
    "€".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_group_separator() -> String {
    ",".to_string()
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            decimal_separator: default_decimal_separator(),
            group_separator: default_group_separator(),
        }
    }
}

impl MoneyFormat {
    /// Two decimals, half away from zero, grouped thousands: `€1,275.00`, `-€12.50`.
    /// Any negative value keeps its sign, so `-0.001` prints as `-€0.00`.
    pub fn format(&self, value: f64) -> String {
        let cents = (value.abs() * 100.0).round();
        let whole = (cents / 100.0).trunc() as u64;
        let fraction = (cents % 100.0) as u64;
        let sign = if value < 0.0 { "-" } else { "" };

        format!(
            "{}{}{}{}{:02}",
            sign,
            self.symbol,
            group_digits(whole, &self.group_separator),
            self.decimal_separator,
            fraction
        )
    }
}

fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
