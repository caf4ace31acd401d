/// Утилиты для списков: поиск, сортировка, заголовки таблиц
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// `needle` is already lowercased
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable<K> {
    fn compare_by_field(&self, other: &Self, field: K) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Case-insensitive first, raw value as tie-break, so "adams" and "Adams"
/// sit next to each other but still have a stable order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring test
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Сортирует список по указанному полю (stable)
pub fn sort_list<K: Copy, T: Sortable<K>>(items: &mut [T], field: K, direction: SortDirection) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу; пустой запрос возвращает всё.
/// Пробелы в запросе значимы.
pub fn filter_list<'a, T: Searchable>(items: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter.is_empty() {
        return items.iter().collect();
    }
    let needle = filter.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator<K: PartialEq>(
    field: K,
    current: Option<(K, SortDirection)>,
) -> &'static str {
    match current {
        Some((current_field, direction)) if current_field == field => {
            if direction.is_ascending() {
                " ↑"
            } else {
                " ↓"
            }
        }
        _ => "",
    }
}

/// Поле поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || (!value.get().is_empty()).then(|| view! {
                <button
                    class="button button--icon"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}
