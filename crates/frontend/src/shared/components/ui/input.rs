use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn Input(
    #[prop(into)]
    label: String,
    /// ID for the input element, also used by the label
    #[prop(into)]
    id: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (default), "date", "number", ...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Lower bound for number inputs
    #[prop(optional, into)]
    min: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let label_for = id.clone();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>{label}</label>
            <input
                id=id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                min=move || min.get()
                required=required
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
