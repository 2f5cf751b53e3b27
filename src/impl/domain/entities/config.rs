use fractic_server_error::ServerError;

use crate::errors::{InvalidCurrencyColumn, InvalidRon};

/// Layout settings shared by every printer.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Column at which currencies line up across sibling lines.
    pub target_currency_column: usize,
    /// Whether to add a `; WEIGHT` column to transactions holding a cost or
    /// price.
    pub render_weight: bool,
    /// Indentation of lines nested under a record.
    pub prefix: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            target_currency_column: 66,
            render_weight: false,
            prefix: "  ".to_string(),
        }
    }
}

impl PrinterConfig {
    /// Parses a RON struct, e.g. `(target_currency_column: 80)`. Missing
    /// fields keep their defaults.
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        let config: PrinterConfig =
            ron::from_str(s).map_err(|e| InvalidRon::with_debug("PrinterConfig", &e))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ServerError> {
        if self.target_currency_column == 0 {
            return Err(InvalidCurrencyColumn::new(self.target_currency_column));
        }
        Ok(self)
    }
}
