use super::state::IntakeState;
use crate::domain::a001_form_record::api;
use crate::domain::a001_form_record::ui::draft::{CommandsDraft, FormFieldsDraft, RecordDraft};
use crate::shared::api_utils::{ApiConfig, ApiOperation};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the intake form
///
/// Inputs write straight into `fields` / `commands`; the two commands read
/// them, run one request each and report back through `state`.
#[derive(Clone, Copy)]
pub struct IntakeFormViewModel {
    pub fields: RwSignal<FormFieldsDraft>,
    pub commands: RwSignal<CommandsDraft>,
    pub fetch_user_id: RwSignal<String>,
    pub state: RwSignal<IntakeState>,
    config: StoredValue<ApiConfig>,
}

impl IntakeFormViewModel {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            fields: RwSignal::new(FormFieldsDraft::default()),
            commands: RwSignal::new(CommandsDraft::default()),
            fetch_user_id: RwSignal::new(String::new()),
            state: RwSignal::new(IntakeState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading())
    }

    /// POST the whole form
    pub fn submit_command(&self) {
        let draft = RecordDraft {
            fields: self.fields.get_untracked(),
            commands: self.commands.get_untracked(),
        };
        let Some((token, payload)) = self.state.try_update(|s| s.begin_save(&draft)).flatten() else {
            return;
        };

        let state = self.state;
        let config = self.config.get_value();
        spawn_local(async move {
            let result = api::save_form_data(&config, &payload).await;
            state.update(|s| {
                s.finish(token, ApiOperation::Save, result);
            });
        });
    }

    /// GET one record by the id typed into the lookup box
    pub fn fetch_command(&self) {
        let user_id = self.fetch_user_id.get_untracked();
        let Some((token, user_id)) = self.state.try_update(|s| s.begin_fetch(&user_id)).flatten() else {
            return;
        };

        let state = self.state;
        let config = self.config.get_value();
        spawn_local(async move {
            let result = api::fetch_form_data(&config, &user_id).await;
            state.update(|s| {
                s.finish(token, ApiOperation::FetchOne, result);
            });
        });
    }
}
