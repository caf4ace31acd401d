use leptos::prelude::*;

/// Select with a disabled placeholder entry shown while `value` is empty
#[component]
pub fn Select(
    #[prop(into)]
    label: String,
    #[prop(into)]
    id: String,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// (value, label) pairs
    options: Vec<(String, String)>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>{label}</label>
            <select
                id=id
                class="form__select"
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {move || placeholder.get().unwrap_or_else(|| "Select...".to_string())}
                </option>
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let val_for_selected = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == val_for_selected>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
