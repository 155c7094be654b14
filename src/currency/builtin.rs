//! Built-in currency dataset

use crate::models::{CurrencyDefinition, SymbolPosition};

use SymbolPosition::{Leading, Trailing};

const CURRENCIES: &[(&str, &str, &str, SymbolPosition)] = &[
    ("USD", "$", "US Dollar", Leading),
    ("EUR", "€", "Euro", Trailing),
    ("GBP", "£", "British Pound", Leading),
    ("JPY", "¥", "Japanese Yen", Leading),
    ("CNY", "¥", "Chinese Yuan", Leading),
    ("CHF", "CHF", "Swiss Franc", Trailing),
    ("CAD", "CA$", "Canadian Dollar", Leading),
    ("AUD", "A$", "Australian Dollar", Leading),
    ("NZD", "NZ$", "New Zealand Dollar", Leading),
    ("HKD", "HK$", "Hong Kong Dollar", Leading),
    ("SGD", "S$", "Singapore Dollar", Leading),
    ("SEK", "kr", "Swedish Krona", Trailing),
    ("NOK", "kr", "Norwegian Krone", Trailing),
    ("DKK", "kr", "Danish Krone", Trailing),
    ("ISK", "kr", "Icelandic Krona", Trailing),
    ("PLN", "zł", "Polish Zloty", Trailing),
    ("CZK", "Kč", "Czech Koruna", Trailing),
    ("HUF", "Ft", "Hungarian Forint", Trailing),
    ("RON", "lei", "Romanian Leu", Trailing),
    ("BGN", "лв", "Bulgarian Lev", Trailing),
    ("UAH", "₴", "Ukrainian Hryvnia", Trailing),
    ("RUB", "₽", "Russian Ruble", Trailing),
    ("TRY", "₺", "Turkish Lira", Leading),
    ("ILS", "₪", "Israeli New Shekel", Leading),
    ("INR", "₹", "Indian Rupee", Leading),
    ("KRW", "₩", "South Korean Won", Leading),
    ("THB", "฿", "Thai Baht", Leading),
    ("IDR", "Rp", "Indonesian Rupiah", Leading),
    ("PHP", "₱", "Philippine Peso", Leading),
    ("VND", "₫", "Vietnamese Dong", Trailing),
    ("BRL", "R$", "Brazilian Real", Leading),
    ("MXN", "MX$", "Mexican Peso", Leading),
    ("ARS", "AR$", "Argentine Peso", Leading),
    ("CLP", "CLP$", "Chilean Peso", Leading),
    ("COP", "COL$", "Colombian Peso", Leading),
    ("ZAR", "R", "South African Rand", Leading),
    ("NGN", "₦", "Nigerian Naira", Leading),
    ("EGP", "E£", "Egyptian Pound", Leading),
    ("AED", "AED", "UAE Dirham", Trailing),
    ("SAR", "SAR", "Saudi Riyal", Trailing),
    ("BTC", "₿", "Bitcoin", Leading),
];

/// All built-in currency definitions
pub fn definitions() -> Vec<CurrencyDefinition> {
    CURRENCIES
        .iter()
        .map(|(code, symbol, name, position)| {
            CurrencyDefinition::new(*code, *symbol, *name, *position)
        })
        .collect()
}
