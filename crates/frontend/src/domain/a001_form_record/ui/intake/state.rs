use crate::domain::a001_form_record::ui::draft::RecordDraft;
use crate::shared::api_utils::{ApiError, ApiOperation};
use crate::shared::request_tokens::{RequestLedger, RequestToken};
use contracts::domain::a001_form_record::aggregate::FormRecordPayload;

/// Submit and lookup share one slot: a new request supersedes whatever the
/// form was waiting for.
#[derive(Clone, Debug, Default)]
pub struct IntakeState {
    /// Raw body of the last successful call
    pub response: Option<serde_json::Value>,
    pub error: Option<String>,
    requests: RequestLedger<()>,
}

impl IntakeState {
    pub fn loading(&self) -> bool {
        self.requests.is_busy()
    }

    fn start(&mut self) -> RequestToken {
        self.response = None;
        self.error = None;
        self.requests.issue(())
    }

    /// `None` while another request is running or when the draft does not
    /// convert (the error banner then says why).
    pub fn begin_save(&mut self, draft: &RecordDraft) -> Option<(RequestToken, FormRecordPayload)> {
        if self.loading() {
            return None;
        }
        match draft.to_payload() {
            Ok(payload) => Some((self.start(), payload)),
            Err(message) => {
                self.response = None;
                self.error = Some(message);
                None
            }
        }
    }

    pub fn begin_fetch(&mut self, user_id: &str) -> Option<(RequestToken, String)> {
        if self.loading() {
            return None;
        }
        let user_id = user_id.trim();
        if user_id.is_empty() {
            self.response = None;
            self.error = Some("Enter a User ID to fetch".to_string());
            return None;
        }
        Some((self.start(), user_id.to_string()))
    }

    pub fn finish(
        &mut self,
        token: RequestToken,
        operation: ApiOperation,
        result: Result<serde_json::Value, ApiError>,
    ) -> bool {
        if !self.requests.complete(&(), token) {
            log::warn!("Discarding stale {:?} response", operation);
            return false;
        }
        match result {
            Ok(body) => self.response = Some(body),
            Err(e) => {
                log::error!("{:?} failed: {}", operation, e);
                self.error = Some(e.user_message(operation));
            }
        }
        true
    }

    /// Pretty-printed response for the result panel
    pub fn response_text(&self) -> Option<String> {
        self.response
            .as_ref()
            .map(|v| serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_draft() -> RecordDraft {
        let mut draft = RecordDraft::default();
        draft.fields.first_name = "John".to_string();
        draft.fields.last_name = "Smith".to_string();
        draft.fields.gender = "Male".to_string();
        draft.fields.date_of_birth = "1990-05-01".to_string();
        draft.fields.current_nationality = "Nepali".to_string();
        draft.fields.passport_number = "PA1234567".to_string();
        draft.fields.passport_expiry_date = "2031-12-31".to_string();
        draft.fields.contact_number = "9800000000".to_string();
        draft
    }

    #[test]
    fn test_save_success_shows_raw_body() {
        let mut state = IntakeState::default();
        let (token, payload) = state.begin_save(&valid_draft()).unwrap();
        assert!(state.loading());
        assert_eq!(payload.commands.delay_ms, 1000);
        assert_eq!(payload.commands.target_form, "vfs-global-form");

        let body = json!({"message": "Form data saved", "userId": "abc123"});
        assert!(state.finish(token, ApiOperation::Save, Ok(body.clone())));
        assert!(!state.loading());
        assert_eq!(state.response, Some(body));
        assert_eq!(state.error, None);
        assert!(state.response_text().unwrap().contains("\"userId\": \"abc123\""));
    }

    #[test]
    fn test_save_errors() {
        let mut state = IntakeState::default();
        let (token, _) = state.begin_save(&valid_draft()).unwrap();
        state.finish(
            token,
            ApiOperation::Save,
            Err(ApiError::Server {
                status: 400,
                message: Some("Passport already registered".to_string()),
            }),
        );
        assert_eq!(state.error.as_deref(), Some("Passport already registered"));

        let (token, _) = state.begin_save(&valid_draft()).unwrap();
        assert_eq!(state.error, None);
        state.finish(token, ApiOperation::Save, Err(ApiError::Transport("dns".to_string())));
        assert_eq!(
            state.error.as_deref(),
            Some("Network error: Unable to save data")
        );
        assert_eq!(state.response, None);
    }

    #[test]
    fn test_new_request_clears_previous_result() {
        let mut state = IntakeState::default();
        let (token, _) = state.begin_fetch("abc123").unwrap();
        state.finish(token, ApiOperation::FetchOne, Ok(json!({"userId": "abc123"})));
        assert!(state.response.is_some());

        let (_, user_id) = state.begin_fetch("  xyz  ").unwrap();
        assert_eq!(user_id, "xyz");
        assert_eq!(state.response, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_actions_are_mutually_exclusive() {
        let mut state = IntakeState::default();
        let (token, _) = state.begin_save(&valid_draft()).unwrap();
        assert!(state.begin_fetch("abc123").is_none());
        assert!(state.begin_save(&valid_draft()).is_none());
        state.finish(token, ApiOperation::Save, Ok(json!({})));
        assert!(state.begin_fetch("abc123").is_some());
    }

    #[test]
    fn test_fetch_error_fallback() {
        let mut state = IntakeState::default();
        let (token, _) = state.begin_fetch("missing").unwrap();
        state.finish(
            token,
            ApiOperation::FetchOne,
            Err(ApiError::Server {
                status: 404,
                message: None,
            }),
        );
        assert_eq!(state.error.as_deref(), Some("Failed to fetch data"));
    }

    #[test]
    fn test_empty_fetch_id_is_rejected_locally() {
        let mut state = IntakeState::default();
        assert!(state.begin_fetch("   ").is_none());
        assert!(!state.loading());
        assert!(state.error.is_some());
    }

    #[test]
    fn test_invalid_draft_is_rejected_locally() {
        let mut state = IntakeState::default();
        let mut draft = valid_draft();
        draft.fields.gender.clear();
        assert!(state.begin_save(&draft).is_none());
        assert!(!state.loading());
        assert_eq!(state.error.as_deref(), Some("Gender is required"));
    }

    #[test]
    fn test_double_finish_is_ignored() {
        let mut state = IntakeState::default();
        let (token, _) = state.begin_fetch("abc123").unwrap();
        assert!(state.finish(token, ApiOperation::FetchOne, Ok(json!({"a": 1}))));
        assert!(!state.finish(token, ApiOperation::FetchOne, Ok(json!({"b": 2}))));
        assert_eq!(state.response, Some(json!({"a": 1})));
    }
}
