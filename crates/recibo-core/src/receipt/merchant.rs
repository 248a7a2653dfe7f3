//! Best-effort merchant and currency detection.

use crate::models::receipt::Merchant;

use super::patterns::CURRENCY;

/// Currency reported when the transcript contains no recognizable symbol.
pub const DEFAULT_CURRENCY: &str = "$";

/// Derive merchant information from the non-blank lines of a transcript.
///
/// The merchant name is usually the top line of the receipt; an empty
/// transcript yields "Unknown".
pub fn extract_merchant(lines: &[&str]) -> Merchant {
    match lines.first() {
        Some(first) => Merchant {
            name: first.trim().to_string(),
        },
        None => Merchant::default(),
    }
}

/// Find the first currency symbol or code in the full raw text,
/// falling back to [`DEFAULT_CURRENCY`].
pub fn extract_currency(text: &str) -> String {
    extract_currency_or(text, DEFAULT_CURRENCY)
}

/// Find the first currency symbol or code, falling back to `default`.
pub fn extract_currency_or(text: &str, default: &str) -> String {
    CURRENCY
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merchant_is_first_line() {
        let merchant = extract_merchant(&["  Tienda Don Pepe  ", "Coca Cola 3000"]);
        assert_eq!(merchant.name, "Tienda Don Pepe");
    }

    #[test]
    fn test_merchant_default() {
        assert_eq!(extract_merchant(&[]).name, "Unknown");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(extract_currency("Total: € 12"), "€");
        assert_eq!(extract_currency("Total: £12"), "£");
        assert_eq!(extract_currency("Total 3000 COP"), "COP");
    }

    #[test]
    fn test_currency_first_match_wins() {
        assert_eq!(extract_currency("$ 12 y 3000 COP"), "$");
    }

    #[test]
    fn test_currency_default() {
        assert_eq!(extract_currency("Coca Cola 3000"), "$");
        assert_eq!(extract_currency_or("Coca Cola 3000", "COP"), "COP");
    }
}
