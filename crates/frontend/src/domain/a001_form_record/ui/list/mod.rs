pub mod state;

use self::state::{create_state, SortKey, EXPORT_FILE_NAME, PAGE_SIZE};
use crate::domain::a001_form_record::api;
use crate::domain::a001_form_record::ui::details::RecordEditModal;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::date_utils::format_timestamp;
use crate::shared::export::download_json;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_form_record::aggregate::UserId;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Admin table over every submitted record
#[component]
#[allow(non_snake_case)]
pub fn RecordsBrowser() -> impl IntoView {
    let state = create_state();
    let config = StoredValue::new(use_context::<ApiConfig>().unwrap_or_default());

    let load_records = move || {
        let Some(token) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_all_form_data(&config.get_value()).await;
            state.update(|s| {
                s.finish_load(token, result);
            });
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_records();
        }
    });

    let handle_update = Callback::new(move |_: ()| {
        let Some(pending) = state.try_update(|s| s.begin_update()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result =
                api::update_form_data(&config.get_value(), pending.user_id.as_str(), &pending.payload)
                    .await;
            state.update(|s| {
                s.finish_update(pending.token, &pending.user_id, result);
            });
        });
    });

    let handle_delete = move |user_id: UserId| {
        let Some(pending) = state
            .try_update(|s| s.begin_delete(&user_id, &BrowserConfirm))
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            let result = api::delete_form_data(&config.get_value(), pending.user_id.as_str()).await;
            state.update(|s| {
                s.finish_delete(pending.token, &pending.user_id, result);
            });
        });
    };

    let handle_export = move |_: leptos::ev::MouseEvent| {
        let exported = state
            .with_untracked(|s| s.export_json())
            .and_then(|json| download_json(&json, EXPORT_FILE_NAME));
        if let Err(e) = exported {
            log::error!("Export failed: {}", e);
            state.update(|s| s.error = Some(e));
        }
    };

    let loading = Signal::derive(move || state.with(|s| s.loading()));

    view! {
        <PageFrame page_id="a001_form_record--list">
            <div class="page__header">
                <h1 class="page__title">
                    {icon("users")}
                    " VFS Users"
                </h1>
                <div class="page__actions">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.query.clone()))
                        on_change=Callback::new(move |term: String| state.update(|s| s.search(term)))
                        placeholder="Search by User ID, Name, or Passport"
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_records()
                        disabled=loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=handle_export>
                        {icon("download")}
                        " Export"
                    </Button>
                </div>
            </div>

            {move || state.with(|s| s.error.clone()).map(|err| view! {
                <div class="error-message">{err}</div>
            })}

            <div class="page__content">
                {move || {
                    let is_empty = state.with(|s| s.view_len() == 0);
                    if loading.get() && is_empty {
                        return view! {
                            <div class="loading-spinner"><Spinner /></div>
                        }.into_any();
                    }
                    if is_empty {
                        return view! {
                            <div class="empty-state">"No users found"</div>
                        }.into_any();
                    }

                    let rows = state.with(|s| s.page_items());
                    let current_sort = state.with(|s| s.sort);

                    view! {
                        <div class="table-container">
                            <table class="table__data table--striped">
                                <thead>
                                    <tr>
                                        {SortKey::COLUMNS.into_iter().map(|key| view! {
                                            <th
                                                class="table__header-cell table__header-cell--sortable"
                                                on:click=move |_| state.update(|s| s.sort_by(key))
                                            >
                                                {key.label()}
                                                {get_sort_indicator(key, current_sort)}
                                            </th>
                                        }).collect_view()}
                                        <th class="table__header-cell">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|record| {
                                        let f = record.form_fields.clone();
                                        let created = format_timestamp(&record.timestamp);
                                        let user_id = record.user_id.clone();
                                        let record_for_edit = record.clone();

                                        view! {
                                            <tr>
                                                <td class="cell-truncate">{record.user_id.to_string()}</td>
                                                <td class="cell-truncate">{f.first_name}</td>
                                                <td class="cell-truncate">{f.last_name}</td>
                                                <td>{f.gender.as_str()}</td>
                                                <td class="cell-truncate">{f.current_nationality}</td>
                                                <td class="cell-truncate">{f.passport_number}</td>
                                                <td class="cell-truncate">{f.contact_number}</td>
                                                <td style="font-size: 12px;">{created}</td>
                                                <td class="table__actions">
                                                    <button
                                                        class="button button--icon"
                                                        title="Edit"
                                                        on:click=move |_| state.update(|s| s.begin_edit(&record_for_edit))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="button button--icon button--danger"
                                                        title="Delete"
                                                        on:click=move |_| handle_delete(user_id.clone())
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }}

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.view_len()))
                    page_size=PAGE_SIZE
                    item_label="users"
                    on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                />
            </div>

            <RecordEditModal state=state on_save=handle_update />
        </PageFrame>
    }
}
