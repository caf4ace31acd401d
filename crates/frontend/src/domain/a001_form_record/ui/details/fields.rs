use crate::domain::a001_form_record::ui::draft::{CommandsDraft, FormFieldsDraft};
use crate::shared::components::ui::{Checkbox, Input, Select};
use contracts::domain::a001_form_record::aggregate::Gender;
use leptos::prelude::*;

/// Inputs for every person/passport field. `id_prefix` keeps element ids
/// unique when the intake form and the edit modal are both mounted.
#[component]
pub fn FormFieldsInputs(fields: RwSignal<FormFieldsDraft>, id_prefix: &'static str) -> impl IntoView {
    let id = move |name: &str| format!("{}-{}", id_prefix, name);
    let gender_options: Vec<(String, String)> = Gender::ALL
        .iter()
        .map(|g| (g.as_str().to_string(), g.as_str().to_string()))
        .collect();

    view! {
        <div class="detail-form detail-form--grid">
            <Input
                label="First Name"
                id=id("first-name")
                value=Signal::derive(move || fields.with(|f| f.first_name.clone()))
                on_input=Callback::new(move |v| fields.update(|f| f.first_name = v))
                placeholder="Enter First Name"
                required=true
            />
            <Input
                label="Last Name"
                id=id("last-name")
                value=Signal::derive(move || fields.with(|f| f.last_name.clone()))
                on_input=Callback::new(move |v| fields.update(|f| f.last_name = v))
                placeholder="Enter Last Name"
                required=true
            />
            <Select
                label="Gender"
                id=id("gender")
                value=Signal::derive(move || fields.with(|f| f.gender.clone()))
                on_change=Callback::new(move |v| fields.update(|f| f.gender = v))
                options=gender_options
                placeholder="Select Gender"
                required=true
            />
            <Input
                label="Date of Birth"
                id=id("date-of-birth")
                input_type="date"
                value=Signal::derive(move || fields.with(|f| f.date_of_birth.clone()))
                on_input=Callback::new(move |v| fields.update(|f| f.date_of_birth = v))
                required=true
            />
            <Input
                label="Current Nationality"
                id=id("nationality")
                value=Signal::derive(move || fields.with(|f| f.current_nationality.clone()))
                on_input=Callback::new(move |v| fields.update(|f| f.current_nationality = v))
                placeholder="Enter Nationality"
                required=true
            />
            <Input
                label="Passport Number"
                id=id("passport-number")
                value=Signal::derive(move || fields.with(|f| f.passport_number.clone()))
                on_input=Callback::new(move |v| fields.update(|f| f.passport_number = v))
                placeholder="Enter Passport Number"
                required=true
            />
            <Input
                label="Passport Expiry Date"
                id=id("passport-expiry")
                input_type="date"
                value=Signal::derive(move || fields.with(|f| f.passport_expiry_date.clone()))
                on_input=Callback::new(move |v| fields.update(|f| f.passport_expiry_date = v))
                required=true
            />
            <Input
                label="Contact Number"
                id=id("contact-number")
                value=Signal::derive(move || fields.with(|f| f.contact_number.clone()))
                on_input=Callback::new(move |v| fields.update(|f| f.contact_number = v))
                placeholder="Enter Contact Number"
                required=true
            />
        </div>
    }
}

/// Automation directives
#[component]
pub fn CommandsInputs(commands: RwSignal<CommandsDraft>, id_prefix: &'static str) -> impl IntoView {
    let id = move |name: &str| format!("{}-{}", id_prefix, name);

    view! {
        <div class="detail-form detail-form--grid">
            <Checkbox
                label="Auto Click"
                id=id("auto-click")
                checked=Signal::derive(move || commands.with(|c| c.auto_click))
                on_change=Callback::new(move |v| commands.update(|c| c.auto_click = v))
            />
            <Checkbox
                label="Auto Fill"
                id=id("auto-fill")
                checked=Signal::derive(move || commands.with(|c| c.auto_fill))
                on_change=Callback::new(move |v| commands.update(|c| c.auto_fill = v))
            />
            <Checkbox
                label="Submit Form"
                id=id("submit-form")
                checked=Signal::derive(move || commands.with(|c| c.submit_form))
                on_change=Callback::new(move |v| commands.update(|c| c.submit_form = v))
            />
            <Checkbox
                label="Scroll to Element"
                id=id("scroll-to-element")
                checked=Signal::derive(move || commands.with(|c| c.scroll_to_element))
                on_change=Callback::new(move |v| commands.update(|c| c.scroll_to_element = v))
            />
            <Input
                label="Target Form"
                id=id("target-form")
                value=Signal::derive(move || commands.with(|c| c.target_form.clone()))
                on_input=Callback::new(move |v| commands.update(|c| c.target_form = v))
                placeholder="e.g., vfs-global-form"
            />
            <Input
                label="Delay (ms)"
                id=id("delay-ms")
                input_type="number"
                min="0"
                value=Signal::derive(move || commands.with(|c| c.delay_ms.clone()))
                on_input=Callback::new(move |v| commands.update(|c| c.delay_ms = v))
            />
        </div>
    }
}
