//! General presentation settings.

use serde::{Deserialize, Serialize};

fn default_locale() -> String {
    String::from("es")
}

fn default_currency_symbol() -> String {
    String::from("$")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Locale used for placeholder and label text.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Symbol prefixed to prices in human-readable output.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl GeneralConfig {
    /// Format an amount for display, e.g. `$1,199.20`.
    #[must_use]
    pub fn format_price(&self, amount: f64) -> String {
        let cents = (amount.abs() * 100.0).round();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = cents as u64;
        let whole = (cents / 100).to_string();
        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
        format!("{sign}{}{grouped}.{:02}", self.currency_symbol, cents % 100)
    }
}
