//! Heuristic item extraction cascade.
//!
//! The cascade trades precision for resilience against inconsistent OCR
//! layouts: it prefers silently skipping an ambiguous line over guessing
//! wrong, and only escalates to the looser triplet heuristic when the
//! stricter per-line pattern found nothing at all. Malformed input never
//! errors; it simply yields fewer items.

use tracing::debug;

use super::classifier::{classify, LineLayout};
use super::patterns::{BARE_INTEGER, NAME_THEN_PRICE};

/// An unnormalized extracted item, pre-subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    /// Product name, trimmed.
    pub product: String,
    /// Quantity purchased.
    pub quantity: u32,
    /// Unit price as a whole number of currency units.
    pub price: i64,
}

/// Extract raw items from the non-blank lines of a transcript.
pub fn extract_items(lines: &[&str]) -> Vec<RawItem> {
    match classify(lines) {
        LineLayout::Tabular => {
            debug!("detected tabular format with column headers");
            extract_tabular(lines)
        }
        LineLayout::Freeform => extract_freeform(lines),
    }
}

/// Tabular branch: fixed groups of three lines after the header block.
///
/// The scan starts one past the first line containing "total" or
/// "precio". When no such line exists it starts at the top of the
/// transcript, matching the behavior of the system this replaces.
fn extract_tabular(lines: &[&str]) -> Vec<RawItem> {
    let start = lines
        .iter()
        .position(|l| {
            let l = l.to_lowercase();
            l.contains("total") || l.contains("precio")
        })
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut items = Vec::new();

    let mut i = start;
    while i + 2 < lines.len() {
        let quantity_str = lines[i].trim();
        let product = lines[i + 1].trim();
        let price_str = lines[i + 2].trim();

        // A group with a non-numeric quantity or price line is dropped,
        // not reinterpreted; the scan continues at the next group boundary.
        if BARE_INTEGER.is_match(quantity_str) && BARE_INTEGER.is_match(price_str) {
            if let (Ok(quantity), Ok(price)) =
                (quantity_str.parse::<u32>(), price_str.parse::<i64>())
            {
                debug!(%product, quantity, price, "extracted from tabular group");
                items.push(RawItem {
                    product: product.to_string(),
                    quantity,
                    price,
                });
            }
        }

        i += 3;
    }

    items
}

/// Free-form branch: per-line "name then trailing price" matching, with a
/// quantity hint taken from an immediately preceding bare-integer line.
fn extract_freeform(lines: &[&str]) -> Vec<RawItem> {
    let mut items = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        // Bare numbers standing alone are indices or quantity hints for
        // the line below, never items themselves.
        if line.chars().count() < 2 || BARE_INTEGER.is_match(line) {
            debug!(%line, "skipping index line");
            continue;
        }

        let Some(caps) = NAME_THEN_PRICE.captures(line) else {
            continue;
        };

        let product = caps[1].trim().to_string();
        let Ok(price) = caps[2].parse::<i64>() else {
            continue;
        };

        let quantity = quantity_hint(lines, i).unwrap_or(1);
        if quantity != 1 {
            debug!(quantity, %product, "found quantity in previous line");
        }

        debug!(%product, quantity, price, "extracted from name/price pattern");
        items.push(RawItem {
            product,
            quantity,
            price,
        });
    }

    if items.is_empty() {
        debug!("no per-line patterns matched, trying triplet fallback");
        items = extract_triplets(lines);
    }

    items
}

/// Quantity hint: the previous line, when it is a bare integer strictly
/// between 0 and 100. The hint line is not consumed; it is skipped by
/// the bare-number filter on its own iteration.
fn quantity_hint(lines: &[&str], index: usize) -> Option<u32> {
    if index == 0 {
        return None;
    }

    let prev = lines[index - 1].trim();
    if !BARE_INTEGER.is_match(prev) {
        return None;
    }

    prev.parse::<u32>().ok().filter(|&q| q > 0 && q < 100)
}

/// Fallback: slide a window of three consecutive lines
/// (quantity, product, price). A triplet is accepted only when the
/// quantity line has one or two digits and the price line parses to a
/// value above 100. Acceptance advances the window past the consumed
/// lines; rejection advances by one.
fn extract_triplets(lines: &[&str]) -> Vec<RawItem> {
    let mut items = Vec::new();

    let mut i = 0;
    while i + 2 < lines.len() {
        let quantity_str = lines[i].trim();

        if BARE_INTEGER.is_match(quantity_str) && quantity_str.len() < 3 {
            let price_str = lines[i + 2].trim();

            if BARE_INTEGER.is_match(price_str) {
                if let (Ok(quantity), Ok(price)) =
                    (quantity_str.parse::<u32>(), price_str.parse::<i64>())
                {
                    if price > 100 {
                        let product = lines[i + 1].trim().to_string();
                        debug!(%product, quantity, price, "extracted from triplet pattern");
                        items.push(RawItem {
                            product,
                            quantity,
                            price,
                        });
                        i += 3;
                        continue;
                    }
                }
            }
        }

        i += 1;
    }

    items
}
