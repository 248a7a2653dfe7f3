//! Regex patterns for receipt line extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A line that is nothing but digits (a bare index, quantity, or price).
    pub static ref BARE_INTEGER: Regex = Regex::new(r"^\d+$").unwrap();

    /// Product name followed by a trailing whitespace-separated price.
    /// Example: "Coca Cola 3000".
    pub static ref NAME_THEN_PRICE: Regex = Regex::new(r"^(.+?)\s+(\d+)$").unwrap();

    /// First currency symbol or code anywhere in the transcript.
    pub static ref CURRENCY: Regex = Regex::new(r"\$|€|£|COP").unwrap();
}
