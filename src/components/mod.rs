//! UI Components
//!
//! Presentation layer over the catalog view-model.

mod toolbar;
mod product_table;
mod pagination;
mod edit_dialog;
mod create_dialog;
mod notice_dialog;

pub use toolbar::Toolbar;
pub use product_table::ProductTable;
pub use pagination::Pagination;
pub use edit_dialog::EditDialog;
pub use create_dialog::CreateDialog;
pub use notice_dialog::NoticeDialog;
