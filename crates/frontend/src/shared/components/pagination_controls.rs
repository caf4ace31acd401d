use crate::shared::icons::icon;
use leptos::prelude::*;

/// Prev/next pager over a client-side list. Pages are 1-based; buttons are
/// disabled at the bounds instead of clamping on click.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    page_size: usize,
    /// Plural noun for the summary line, e.g. "users"
    #[prop(into)]
    item_label: String,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-summary">
                {move || range_summary(current_page.get(), page_size, total_count.get(), &item_label)}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "Page {} of {} ({})",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

/// 1-based first and last row shown on `page`; `None` for an empty list
pub fn row_range(page: usize, page_size: usize, total: usize) -> Option<(usize, usize)> {
    if total == 0 || page_size == 0 {
        return None;
    }
    let start = (page.max(1) - 1) * page_size;
    if start >= total {
        return None;
    }
    Some((start + 1, (start + page_size).min(total)))
}

/// "Showing 11 to 12 of 12 users"
pub fn range_summary(page: usize, page_size: usize, total: usize, item_label: &str) -> String {
    match row_range(page, page_size, total) {
        Some((first, last)) => format!("Showing {} to {} of {} {}", first, last, total, item_label),
        None => format!("Showing 0 of 0 {}", item_label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_range() {
        assert_eq!(row_range(1, 10, 12), Some((1, 10)));
        assert_eq!(row_range(2, 10, 12), Some((11, 12)));
        assert_eq!(row_range(2, 10, 10), None);
        assert_eq!(row_range(1, 10, 0), None);
    }

    #[test]
    fn test_range_summary() {
        assert_eq!(range_summary(2, 10, 12, "users"), "Showing 11 to 12 of 12 users");
        assert_eq!(range_summary(1, 10, 0, "users"), "Showing 0 of 0 users");
    }
}
