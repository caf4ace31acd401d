use super::fields::{CommandsInputs, FormFieldsInputs};
use crate::domain::a001_form_record::ui::list::state::RecordsBrowserState;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Edit surface for the record in `state.editing`.
///
/// Inputs write to local copies of the draft; `on_save` runs after the copies
/// have been written back into the browser state.
#[component]
pub fn RecordEditModal(state: RwSignal<RecordsBrowserState>, on_save: Callback<()>) -> impl IntoView {
    let on_close = Callback::new(move |_| state.update(|s| s.cancel_edit()));
    let loading = Signal::derive(move || state.with(|s| s.loading()));

    view! {
        <Show when=move || state.with(|s| s.editing.is_some())>
            {move || {
                let Some(session) = state.with_untracked(|s| s.editing.clone()) else {
                    return ().into_any();
                };
                let fields = RwSignal::new(session.draft.fields.clone());
                let commands = RwSignal::new(session.draft.commands.clone());
                let title = format!("Edit User {}", session.user_id);

                let handle_save = move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    state.update(|s| {
                        s.update_draft(|d| {
                            d.fields = fields.get_untracked();
                            d.commands = commands.get_untracked();
                        })
                    });
                    on_save.run(());
                };

                view! {
                    <Modal title=title on_close=on_close>
                        {move || state.with(|s| s.error.clone()).map(|e| view! {
                            <div class="warning-box text-error">{e}</div>
                        })}

                        <form class="edit-form" on:submit=handle_save>
                            <h3 class="form__section-title">"Form Fields"</h3>
                            <FormFieldsInputs fields=fields id_prefix="edit" />

                            <h3 class="form__section-title">"Commands"</h3>
                            <CommandsInputs commands=commands id_prefix="edit" />

                            <div class="modal-actions">
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    on:click=move |_| on_close.run(())
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    prop:disabled=move || loading.get()
                                >
                                    {icon("save")}
                                    " Save Changes"
                                </button>
                            </div>
                        </form>
                    </Modal>
                }
                .into_any()
            }}
        </Show>
    }
}
