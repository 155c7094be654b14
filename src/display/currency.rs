//! Currency display formatting
//!
//! Formats registry contents for terminal output in table and detail views.

use crate::currency::CurrencyRegistry;
use crate::models::CurrencyDefinition;

/// Format every registered currency as a table
pub fn format_currency_list(registry: &CurrencyRegistry) -> String {
    if registry.is_empty() {
        return "No currencies registered.".to_string();
    }

    // Symbols are often multi-byte, so widths count chars
    let symbol_width = registry
        .iter()
        .map(|c| c.symbol.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let name_width = registry
        .iter()
        .map(|c| c.display_name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<5}  {:<symbol_width$}  {:<name_width$}  {}\n",
        "Code",
        "Symbol",
        "Name",
        "Position",
        symbol_width = symbol_width,
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<5}  {:-<symbol_width$}  {:-<name_width$}  {:-<8}\n",
        "",
        "",
        "",
        "",
        symbol_width = symbol_width,
        name_width = name_width,
    ));

    for currency in registry.iter() {
        output.push_str(&format!(
            "{:<5}  {:<symbol_width$}  {:<name_width$}  {}\n",
            currency.code,
            currency.symbol,
            currency.display_name,
            currency.position,
            symbol_width = symbol_width,
            name_width = name_width,
        ));
    }

    output.push_str(&format!("\n{} currencies\n", registry.len()));
    output
}

/// Format a single currency with a rendered sample amount
pub fn format_currency_details(currency: &CurrencyDefinition, sample: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Currency: {}\n", currency.display_name));
    output.push_str(&format!("  Code:     {}\n", currency.code));
    output.push_str(&format!("  Symbol:   {}\n", currency.symbol));
    output.push_str(&format!("  Position: {}\n", currency.position));
    if !sample.is_empty() {
        output.push_str(&format!("  Sample:   {}\n", sample));
    }

    output
}
