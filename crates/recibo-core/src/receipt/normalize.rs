//! Item normalization: subtotals and the grand total.

use crate::models::receipt::LineItem;

use super::cascade::RawItem;

/// Turn raw extracted items into line items with computed subtotals and
/// return them with the receipt grand total. Order is preserved; an
/// empty input yields an empty list and a total of zero.
pub fn normalize(items: Vec<RawItem>) -> (Vec<LineItem>, i64) {
    let line_items: Vec<LineItem> = items
        .into_iter()
        .map(|item| LineItem {
            name: item.product,
            price: item.price,
            quantity: item.quantity,
            subtotal: item.price * item.quantity as i64,
        })
        .collect();

    let total = line_items.iter().map(|i| i.subtotal).sum();

    (line_items, total)
}
