//! CSV Export

use crate::models::Item;

pub const CSV_FILENAME: &str = "products.csv";
pub const CSV_HEADER: &str = "id,title,price";

/// One `id,title,price` line per item after the header.
///
/// Titles are written as-is: embedded commas or quotes are not escaped.
pub fn items_to_csv(items: &[Item]) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 1 + items.len() * 32);
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for item in items {
        csv.push_str(&format!("{},{},{}\n", item.id, item.title, item.price));
    }
    csv
}
