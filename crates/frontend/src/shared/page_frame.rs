//! PageFrame — root wrapper for both routed pages.
//!
//! The root element gets `id="{entity}--{category}"` and a matching
//! `data-page-category`, so an id copied from the DOM inspector leads
//! straight to `domain/{entity}/`.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_form_record--list">
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

/// Table with search/pagination
pub const PAGE_CAT_LIST: &str = "list";
/// Data-entry form
pub const PAGE_CAT_FORM: &str = "form";

/// Category part of a page id; ids without `--` fall back to "custom"
pub fn page_category(page_id: &str) -> &str {
    page_id
        .split_once("--")
        .map(|(_, category)| category)
        .filter(|c| !c.is_empty())
        .unwrap_or("custom")
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a001_form_record--list"`
    page_id: &'static str,
    children: Children,
) -> impl IntoView {
    let category = page_category(page_id);
    let class = match category {
        PAGE_CAT_LIST => "page",
        PAGE_CAT_FORM => "page page--form",
        _ => "page page--custom",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_category() {
        assert_eq!(page_category("a001_form_record--list"), "list");
        assert_eq!(page_category("a001_form_record--form"), "form");
        assert_eq!(page_category("landing"), "custom");
        assert_eq!(page_category("landing--"), "custom");
    }
}
