//! Catalog View-Model
//!
//! Owns the item list and view state for one page session and turns them
//! into row and pagination descriptors for the presentation layer.

pub mod actions;
pub mod csv;
pub mod query;

use std::ops::RangeInclusive;

use crate::error::CatalogError;
use crate::models::{coerce_integer, coerce_number, Item, ItemPatch, NewItem};
use query::{clamp_page, filter_items, page_slice, sort_items, total_pages, SortField};

// ========================
// View State
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub search_term: String,
    pub sort_field: Option<SortField>,
    pub sort_ascending: bool,
    /// 1-based
    pub current_page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_field: None,
            sort_ascending: true,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }
}

// ========================
// Render Output
// ========================

/// One table row, ready to display
#[derive(Debug, Clone, PartialEq)]
pub struct RowDescriptor {
    pub id: u32,
    pub title: String,
    /// Category name or `N/A`
    pub category: String,
    /// `$<price>`
    pub price_label: String,
    pub thumbnail: Option<String>,
    /// Description or `No description`
    pub tooltip: String,
}

impl RowDescriptor {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            category: item.category_name().unwrap_or("N/A").to_string(),
            price_label: format!("${}", item.price),
            thumbnail: item.thumbnail().map(str::to_string),
            tooltip: if item.description.is_empty() {
                "No description".to_string()
            } else {
                item.description.clone()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationDescriptor {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PaginationDescriptor {
    fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    /// Page numbers to show as buttons
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub rows: Vec<RowDescriptor>,
    pub pagination: PaginationDescriptor,
    /// Items matching the search term
    pub matched: usize,
    /// Items loaded
    pub total: usize,
}

// ========================
// Forms & Notices
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Blocking message shown until dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// Edit dialog fields, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub id: u32,
    pub title: String,
    pub price: String,
    pub description: String,
}

impl EditForm {
    fn from_item(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            price: item.price.to_string(),
            description: item.description.clone(),
        }
    }

    pub fn to_patch(&self) -> ItemPatch {
        ItemPatch {
            title: self.title.clone(),
            price: coerce_number(&self.price),
            description: self.description.clone(),
        }
    }
}

/// Create dialog fields, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category_id: String,
    pub image: String,
}

impl CreateForm {
    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            title: self.title.clone(),
            price: coerce_number(&self.price),
            description: self.description.clone(),
            category_id: coerce_integer(&self.category_id),
            images: vec![self.image.clone()],
        }
    }
}

// ========================
// CatalogView
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    items: Vec<Item>,
    pub state: ViewState,
    /// Fetches in flight; a reload can overlap the initial load
    pending_loads: usize,
    /// Open edit dialog, if any
    pub editing: Option<EditForm>,
    pub creating: bool,
    /// Create dialog contents; survives a failed submit
    pub draft: CreateForm,
    pub notice: Option<Notice>,
}

impl CatalogView {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            state: ViewState::new(page_size),
            pending_loads: 0,
            editing: None,
            creating: false,
            draft: CreateForm::default(),
            notice: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Filtered and sorted, before pagination
    fn visible_items(&self) -> Vec<&Item> {
        let mut filtered = filter_items(&self.items, &self.state.search_term);
        if let Some(field) = self.state.sort_field {
            sort_items(&mut filtered, field, self.state.sort_ascending);
        }
        filtered
    }

    fn matched_count(&self) -> usize {
        filter_items(&self.items, &self.state.search_term).len()
    }

    fn clamp_current_page(&mut self) {
        self.state.current_page = clamp_page(self.state.current_page, self.matched_count(), self.state.page_size);
    }

    /// Visible rows plus pagination for the current state
    pub fn render(&self) -> CatalogPage {
        let visible = self.visible_items();
        let page = clamp_page(self.state.current_page, visible.len(), self.state.page_size);
        let rows = page_slice(&visible, page, self.state.page_size)
            .iter()
            .map(|item| RowDescriptor::from_item(item))
            .collect();

        CatalogPage {
            rows,
            pagination: PaginationDescriptor::new(page, total_pages(visible.len(), self.state.page_size)),
            matched: visible.len(),
            total: self.items.len(),
        }
    }

    /// Wholesale replacement after a fetch
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.clamp_current_page();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.state.current_page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.page_size = page_size.max(1);
        self.state.current_page = 1;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.state.current_page = page;
        self.clamp_current_page();
    }

    /// Same field flips direction, a new field starts ascending
    pub fn sort_by(&mut self, field: SortField) {
        self.state.sort_ascending = if self.state.sort_field == Some(field) {
            !self.state.sort_ascending
        } else {
            true
        };
        self.state.sort_field = Some(field);
    }

    /// Entire unfiltered list, regardless of view state
    pub fn export_csv(&self) -> String {
        csv::items_to_csv(&self.items)
    }

    /// Mutate the matching local item; false if it is gone
    pub fn apply_update(&mut self, id: u32, patch: &ItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.apply(patch);
        self.clamp_current_page();
        true
    }

    // ========================
    // Dialogs
    // ========================

    /// Row selected: open the edit dialog pre-filled with the item
    pub fn open_editor(&mut self, id: u32) -> bool {
        self.editing = self.items.iter().find(|item| item.id == id).map(EditForm::from_item);
        self.editing.is_some()
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    pub fn open_creator(&mut self) {
        self.creating = true;
    }

    pub fn close_creator(&mut self) {
        self.creating = false;
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ========================
    // Network outcomes
    // ========================

    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    pub fn begin_load(&mut self) {
        self.pending_loads += 1;
    }

    /// Failure keeps the previous list
    pub fn finish_load(&mut self, result: Result<Vec<Item>, CatalogError>) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        match result {
            Ok(items) => self.replace_items(items),
            Err(err) => self.notify(Notice::error(format!("Failed to load products ({})", err))),
        }
    }

    /// Success patches the local item and closes the dialog; failure changes nothing locally
    pub fn finish_update(&mut self, id: u32, patch: &ItemPatch, result: Result<(), CatalogError>) {
        match result {
            Ok(()) => {
                self.apply_update(id, patch);
                self.close_editor();
                self.notify(Notice::success("Product updated successfully!"));
            }
            Err(err) => self.notify(Notice::error(format!("Failed to update product ({})", err))),
        }
    }

    /// Returns true when the list should be reloaded
    pub fn finish_create(&mut self, result: Result<Item, CatalogError>) -> bool {
        match result {
            Ok(_) => {
                self.draft = CreateForm::default();
                self.close_creator();
                self.notify(Notice::success("Product created successfully!"));
                true
            }
            Err(err) => {
                self.notify(Notice::error(format!("Failed to create product ({})", err)));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::cmp::Ordering;

    fn make_item(id: u32, title: &str, price: f64) -> Item {
        Item {
            id,
            title: title.to_string(),
            price,
            description: format!("About {}", title),
            category: None,
            images: vec![format!("https://img.test/{}.png", id)],
        }
    }

    fn view_with(count: u32, page_size: usize) -> CatalogView {
        let mut view = CatalogView::new(page_size);
        view.replace_items((1..=count).map(|id| make_item(id, &format!("Product {}", id), id as f64)).collect());
        view
    }

    #[test]
    fn test_twenty_five_items_three_pages() {
        let mut view = view_with(25, 10);
        let page = view.render();
        assert_eq!(page.pagination.total_pages, 3);
        assert_eq!(page.rows.len(), 10);
        assert!(!page.pagination.has_prev);
        assert!(page.pagination.has_next);

        view.go_to_page(3);
        let page = view.render();
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.rows[0].id, 21);
        assert!(page.pagination.has_prev);
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn test_search_two_matches_single_page() {
        let mut view = view_with(20, 10);
        view.replace_items({
            let mut items = view.items().to_vec();
            items.push(make_item(21, "Red Shirt", 12.0));
            items.push(make_item(22, "linen SHIRT", 30.0));
            items
        });
        view.set_search_term("shirt");
        let page = view.render();
        assert_eq!(page.matched, 2);
        assert_eq!(page.total, 22);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.pages().collect::<Vec<_>>(), vec![1]);
        assert!(!page.pagination.has_prev && !page.pagination.has_next);
    }

    #[test]
    fn test_visible_titles_contain_term() {
        let mut view = view_with(30, 50);
        for term in ["1", "product 2", "PRODUCT", "zzz", ""] {
            view.set_search_term(term);
            let needle = term.to_lowercase();
            for row in view.render().rows {
                assert!(row.title.to_lowercase().contains(&needle), "{} vs {}", row.title, term);
            }
        }
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let mut view = view_with(25, 10);
        view.go_to_page(3);
        view.set_search_term("Product");
        assert_eq!(view.state.current_page, 1);

        view.go_to_page(2);
        view.set_page_size(5);
        assert_eq!(view.state.current_page, 1);
        assert_eq!(view.render().pagination.total_pages, 5);
    }

    #[test]
    fn test_page_stays_in_range() {
        let mut view = view_with(25, 10);
        view.go_to_page(7);
        assert_eq!(view.state.current_page, 3);
        view.go_to_page(0);
        assert_eq!(view.state.current_page, 1);

        view.go_to_page(3);
        view.replace_items(vec![make_item(1, "only", 1.0)]);
        assert_eq!(view.state.current_page, 1);
        assert_eq!(view.render().pagination.current_page, 1);
    }

    #[test]
    fn test_sort_toggle() {
        let mut view = view_with(3, 10);
        view.sort_by(SortField::Price);
        assert_eq!(view.state.sort_field, Some(SortField::Price));
        assert!(view.state.sort_ascending);
        view.sort_by(SortField::Price);
        assert!(!view.state.sort_ascending);
        view.sort_by(SortField::Title);
        assert_eq!(view.state.sort_field, Some(SortField::Title));
        assert!(view.state.sort_ascending);
    }

    #[test]
    fn test_page_is_slice_of_ordered_sequence() {
        let rows = [
            ("foxtrot shoe", 9.0, Some("Shoes")),
            ("Echo shirt", 3.0, None),
            ("delta Hoodie", 7.0, Some("clothes")),
            ("charlie sock", 3.0, Some("Clothes")),
            ("hat", 1.0, Some("Misc")),
            ("bravo Boot", 8.0, None),
            ("Alpha coat", 2.0, Some("Shoes")),
            ("alpha coat", 5.0, Some("clothes")),
            ("golf scarf", 3.0, Some("Misc")),
            ("Oscar robe", 6.0, None),
        ];
        let items: Vec<Item> = rows
            .iter()
            .enumerate()
            .map(|(i, (title, price, category))| {
                let mut item = make_item(i as u32 + 1, title, *price);
                item.category = category.map(|name| Category { id: None, name: name.to_string() });
                item
            })
            .collect();

        let mut view = CatalogView::new(3);
        view.replace_items(items.clone());
        view.set_search_term("O");

        for field in SortField::ALL {
            for ascending in [true, false] {
                view.state.sort_field = Some(field);
                view.state.sort_ascending = ascending;

                let mut expected = filter_items(&items, "o");
                expected.sort_by(|a, b| if ascending { field.compare(a, b) } else { field.compare(b, a) });
                let expected: Vec<u32> = expected.iter().map(|i| i.id).collect();

                let total = view.render().pagination.total_pages;
                let mut seen = Vec::new();
                for page in 1..=total {
                    view.go_to_page(page);
                    let rendered = view.render();
                    assert_eq!(rendered.pagination.current_page, page);
                    assert!(rendered.rows.len() <= 3);
                    seen.extend(rendered.rows.into_iter().map(|r| r.id));
                }
                assert_eq!(seen, expected, "{:?} ascending={}", field, ascending);

                // adjacent rows are ordered, ties keep original order
                for pair in seen.windows(2) {
                    let a = &items[pair[0] as usize - 1];
                    let b = &items[pair[1] as usize - 1];
                    let ord = if ascending { field.compare(a, b) } else { field.compare(b, a) };
                    assert!(ord != Ordering::Greater, "{:?} ascending={}: {} before {}", field, ascending, a.id, b.id);
                    if ord == Ordering::Equal {
                        assert!(a.id < b.id);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_directions_by_title() {
        let mut view = CatalogView::new(3);
        let titles = ["delta", "Alpha", "foxtrot", "bravo", "Echo", "charlie", "alpha"];
        view.replace_items(titles.iter().enumerate().map(|(i, t)| make_item(i as u32 + 1, t, 1.0)).collect());

        let walk = |view: &mut CatalogView| {
            let mut seen = Vec::new();
            for page in 1..=3 {
                view.go_to_page(page);
                seen.extend(view.render().rows.into_iter().map(|r| r.title));
            }
            seen
        };

        view.sort_by(SortField::Title);
        assert_eq!(walk(&mut view), vec!["alpha", "Alpha", "bravo", "charlie", "delta", "Echo", "foxtrot"]);
        view.sort_by(SortField::Title);
        assert_eq!(walk(&mut view), vec!["foxtrot", "Echo", "delta", "charlie", "bravo", "Alpha", "alpha"]);
    }

    #[test]
    fn test_overlapping_loads_keep_indicator() {
        let mut view = CatalogView::new(10);
        view.begin_load();
        view.begin_load();
        view.finish_load(Ok(vec![make_item(1, "first", 1.0)]));
        assert!(view.is_loading());
        view.finish_load(Ok(vec![make_item(1, "first", 1.0), make_item(2, "second", 2.0)]));
        assert!(!view.is_loading());
        assert_eq!(view.items().len(), 2);
    }

    #[test]
    fn test_export_ignores_view_state() {
        let mut view = view_with(25, 10);
        view.set_search_term("Product 1");
        view.sort_by(SortField::Price);
        let csv = view.export_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,title,price"));
        assert_eq!(lines.count(), 25);
    }

    #[test]
    fn test_row_descriptor_fallbacks() {
        let mut view = CatalogView::new(10);
        let mut bare = make_item(1, "Bare", 20.0);
        bare.description.clear();
        bare.images.clear();
        view.replace_items(vec![bare]);
        let row = &view.render().rows[0];
        assert_eq!(row.category, "N/A");
        assert_eq!(row.tooltip, "No description");
        assert_eq!(row.price_label, "$20");
        assert_eq!(row.thumbnail, None);
    }

    #[test]
    fn test_open_editor_prefills() {
        let mut view = view_with(5, 10);
        assert!(view.open_editor(5));
        let form = view.editing.clone().unwrap();
        assert_eq!(form.title, "Product 5");
        assert_eq!(form.price, "5");
        assert!(!view.open_editor(99));
        assert!(view.editing.is_none());
    }

    #[test]
    fn test_finish_update_success_and_failure() {
        let mut view = view_with(5, 10);
        view.open_editor(5);
        let patch = ItemPatch {
            title: "Product 5".to_string(),
            price: Some(19.99),
            description: "About Product 5".to_string(),
        };

        view.finish_update(5, &patch, Err(CatalogError::network("update", "HTTP 500")));
        assert_eq!(view.items()[4].price, 5.0);
        assert!(view.editing.is_some());
        assert_eq!(view.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));

        view.finish_update(5, &patch, Ok(()));
        assert_eq!(view.items()[4].price, 19.99);
        assert!(view.editing.is_none());
        assert_eq!(view.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
    }

    #[test]
    fn test_finish_create_keeps_draft_on_failure() {
        let mut view = CatalogView::new(10);
        view.open_creator();
        view.draft.price = "12".to_string();

        assert!(!view.finish_create(Err(CatalogError::network("create", "HTTP 400"))));
        assert!(view.creating);
        assert_eq!(view.draft.price, "12");

        assert!(view.finish_create(Ok(make_item(40, "", 12.0))));
        assert!(!view.creating);
        assert_eq!(view.draft, CreateForm::default());
    }

    #[test]
    fn test_failed_load_keeps_list() {
        let mut view = view_with(3, 10);
        view.begin_load();
        view.finish_load(Err(CatalogError::network("load", "offline")));
        assert!(!view.is_loading());
        assert_eq!(view.items().len(), 3);
        assert_eq!(view.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn test_create_form_body() {
        let form = CreateForm {
            title: String::new(),
            price: "9.5".to_string(),
            description: "d".to_string(),
            category_id: "2".to_string(),
            image: "https://img.test/a.png".to_string(),
        };
        let body = form.to_new_item();
        assert_eq!(body.title, "");
        assert_eq!(body.price, Some(9.5));
        assert_eq!(body.category_id, Some(2));
        assert_eq!(body.images, vec!["https://img.test/a.png".to_string()]);
    }
}
