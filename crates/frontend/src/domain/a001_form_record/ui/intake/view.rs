use super::view_model::IntakeFormViewModel;
use crate::domain::a001_form_record::ui::details::{CommandsInputs, FormFieldsInputs};
use crate::shared::api_utils::ApiConfig;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn IntakeForm() -> impl IntoView {
    let vm = IntakeFormViewModel::new(use_context::<ApiConfig>().unwrap_or_default());
    let loading = Signal::derive(move || vm.is_loading());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <PageFrame page_id="a001_form_record--form">
            <div class="page__header">
                <h1 class="page__title">
                    {icon("user")}
                    " VFS Form Data"
                </h1>
            </div>

            <div class="page__content">
                <form class="intake-form" on:submit=on_submit>
                    <h3 class="form__section-title">"Form Fields"</h3>
                    <FormFieldsInputs fields=vm.fields id_prefix="intake" />

                    <h3 class="form__section-title">"Commands"</h3>
                    <CommandsInputs commands=vm.commands id_prefix="intake" />

                    <button
                        type="submit"
                        class="button button--primary button--wide"
                        prop:disabled=move || loading.get()
                    >
                        {move || if loading.get() {
                            view! { <span class="spinner spinner--inline"></span>" Processing..." }.into_any()
                        } else {
                            view! { {icon("send")}" Submit" }.into_any()
                        }}
                    </button>
                </form>

                <div class="lookup">
                    <h3 class="form__section-title">"Fetch User Data"</h3>
                    <div class="lookup__row">
                        <input
                            type="text"
                            class="form__input"
                            placeholder="Enter User ID"
                            prop:value=move || vm.fetch_user_id.get()
                            on:input=move |ev| vm.fetch_user_id.set(event_target_value(&ev))
                        />
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.fetch_command()
                            disabled=loading
                        >
                            {icon("search")}
                            " Fetch"
                        </Button>
                    </div>
                </div>

                {move || vm.state.with(|s| s.error.clone()).map(|err| view! {
                    <div class="error-message">{err}</div>
                })}

                {move || vm.state.with(|s| s.response_text()).map(|text| view! {
                    <div class="response-panel">
                        <h3 class="form__section-title">"Response"</h3>
                        <pre class="response-panel__body">{text}</pre>
                    </div>
                })}
            </div>
        </PageFrame>
    }
}
