use rust_decimal::Decimal;

/// Formatting capabilities the printer relies on but does not own: how a
/// number is shown for a given currency, and how free text is escaped
/// inside double quotes.
pub trait DisplayContext {
    fn format_number(&self, number: &Decimal, currency: &str) -> String;

    /// The value `format_number` shows, before any grouping. Zero checks on
    /// displayed numbers use this.
    fn display_value(&self, number: &Decimal, _currency: &str) -> Decimal {
        *number
    }

    fn escape_string(&self, s: &str) -> String {
        s.replace('\\', "\\\\").replace('"', "\\\"")
    }
}

/// Renders numbers with exactly the precision they were stored with.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalDisplayContext;

impl DisplayContext for NaturalDisplayContext {
    fn format_number(&self, number: &Decimal, _currency: &str) -> String {
        number.to_string()
    }
}
