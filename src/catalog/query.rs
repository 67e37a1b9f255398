//! Query Pipeline
//!
//! filter → sort → paginate over the in-memory item list.

use std::cmp::Ordering;

use crate::models::Item;

/// How a column's values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Text,
    Numeric,
}

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Category,
    Price,
}

impl SortField {
    pub const ALL: [SortField; 4] = [SortField::Id, SortField::Title, SortField::Category, SortField::Price];

    pub fn kind(self) -> SortKind {
        match self {
            SortField::Id | SortField::Price => SortKind::Numeric,
            SortField::Title | SortField::Category => SortKind::Text,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Title => "Title",
            SortField::Category => "Category",
            SortField::Price => "Price",
        }
    }

    fn text<'a>(self, item: &'a Item) -> &'a str {
        match self {
            SortField::Title => &item.title,
            SortField::Category => item.category_name().unwrap_or(""),
            SortField::Id | SortField::Price => "",
        }
    }

    fn number(self, item: &Item) -> f64 {
        match self {
            SortField::Id => f64::from(item.id),
            SortField::Price => item.price,
            SortField::Title | SortField::Category => 0.0,
        }
    }

    /// Ascending comparison of two items on this field
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self.kind() {
            SortKind::Text => locale_compare(self.text(a), self.text(b)),
            SortKind::Numeric => self.number(a).total_cmp(&self.number(b)),
        }
    }
}

/// Locale-aware string ordering (browser `Intl` collation on wasm)
#[cfg(target_arch = "wasm32")]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let ord = js_sys::JsString::from(a).locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new());
    ord.cmp(&0)
}

/// Locale-aware string ordering (case-folded first, then exact)
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// Case-insensitive substring match on title
pub fn filter_items<'a>(items: &'a [Item], term: &str) -> Vec<&'a Item> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || item.title.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort; ties keep their incoming order in both directions
pub fn sort_items(items: &mut [&Item], field: SortField, ascending: bool) {
    if ascending {
        items.sort_by(|a, b| field.compare(a, b));
    } else {
        items.sort_by(|a, b| field.compare(b, a));
    }
}

/// `max(1, ceil(count / page_size))`
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Pull `page` into `[1, total_pages]`
pub fn clamp_page(page: usize, count: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(count, page_size))
}

/// `slice(page_size * (page - 1), page_size * page)`, truncated at the end
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page_size.saturating_mul(page.saturating_sub(1)).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn make_item(id: u32, title: &str, price: f64) -> Item {
        Item {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: None,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_on_title() {
        let items = vec![
            make_item(1, "Blue SHIRT", 10.0),
            make_item(2, "Hat", 5.0),
            make_item(3, "t-shirt", 8.0),
        ];
        let ids: Vec<u32> = filter_items(&items, "Shirt").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(filter_items(&items, "").len(), 3);
        assert!(filter_items(&items, "sock").is_empty());
    }

    #[test]
    fn test_numeric_sort_both_directions() {
        let items = vec![make_item(1, "a", 30.0), make_item(2, "b", 5.5), make_item(3, "c", 12.0)];
        let mut refs: Vec<&Item> = items.iter().collect();
        sort_items(&mut refs, SortField::Price, true);
        assert_eq!(refs.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 3, 1]);
        sort_items(&mut refs, SortField::Price, false);
        assert_eq!(refs.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 3, 2]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let items = vec![make_item(1, "banana", 0.0), make_item(2, "Apple", 0.0), make_item(3, "cherry", 0.0)];
        let mut refs: Vec<&Item> = items.iter().collect();
        sort_items(&mut refs, SortField::Title, true);
        assert_eq!(refs.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let items = vec![
            make_item(1, "x", 10.0),
            make_item(2, "y", 10.0),
            make_item(3, "z", 1.0),
            make_item(4, "w", 10.0),
        ];
        let mut refs: Vec<&Item> = items.iter().collect();
        sort_items(&mut refs, SortField::Price, true);
        assert_eq!(refs.iter().map(|i| i.id).collect::<Vec<_>>(), vec![3, 1, 2, 4]);

        let mut refs: Vec<&Item> = items.iter().collect();
        sort_items(&mut refs, SortField::Price, false);
        assert_eq!(refs.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_category_sort_treats_missing_as_empty() {
        let mut with_cat = make_item(1, "a", 0.0);
        with_cat.category = Some(Category { id: Some(1), name: "Clothes".to_string() });
        let items = vec![with_cat, make_item(2, "b", 0.0)];
        let mut refs: Vec<&Item> = items.iter().collect();
        sort_items(&mut refs, SortField::Category, true);
        assert_eq!(refs[0].id, 2);
    }

    #[test]
    fn test_field_kinds_are_fixed() {
        assert_eq!(SortField::Id.kind(), SortKind::Numeric);
        assert_eq!(SortField::Price.kind(), SortKind::Numeric);
        assert_eq!(SortField::Title.kind(), SortKind::Text);
        assert_eq!(SortField::Category.kind(), SortKind::Text);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 25, 10), 1);
        assert_eq!(clamp_page(3, 25, 10), 3);
        assert_eq!(clamp_page(9, 25, 10), 3);
        assert_eq!(clamp_page(4, 0, 10), 1);
    }

    #[test]
    fn test_page_slice() {
        let data: Vec<u32> = (1..=25).collect();
        assert_eq!(page_slice(&data, 1, 10), &data[0..10]);
        assert_eq!(page_slice(&data, 3, 10), &[21, 22, 23, 24, 25]);
        assert!(page_slice(&data, 4, 10).is_empty());
    }
}
