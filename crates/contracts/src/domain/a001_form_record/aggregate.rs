use super::calendar_date::CalendarDate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Opaque identifier assigned by the API when a record is created.
/// The client never generates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Value objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    /// Stored value outside the known labels (older or hand-edited documents).
    /// Never offered in the form.
    #[serde(other)]
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::Unknown => "",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }
}

/// Person and passport attributes collected by the intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: CalendarDate,
    pub current_nationality: String,
    pub passport_number: String,
    pub passport_expiry_date: CalendarDate,
    pub contact_number: String,
}

pub const DEFAULT_TARGET_FORM: &str = "vfs-global-form";
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Directives for the external browser-automation process.
/// Stored and shown as-is; nothing here interprets them.
/// Missing keys take the form defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Commands {
    pub auto_click: bool,
    pub auto_fill: bool,
    pub target_form: String,
    pub submit_form: bool,
    #[serde(deserialize_with = "delay_or_default")]
    pub delay_ms: u64,
    pub scroll_to_element: bool,
}

/// `null` delay means the default one
fn delay_or_default<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(DEFAULT_DELAY_MS))
}

impl Default for Commands {
    fn default() -> Self {
        Self {
            auto_click: true,
            auto_fill: true,
            target_form: DEFAULT_TARGET_FORM.to_string(),
            submit_form: false,
            delay_ms: DEFAULT_DELAY_MS,
            scroll_to_element: true,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// One submitted person + command bundle as stored by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub user_id: UserId,
    pub form_fields: FormFields,
    #[serde(default)]
    pub commands: Commands,
    pub timestamp: DateTime<Utc>,
    /// Storage id of the backing document
    #[serde(rename = "_id", default)]
    pub storage_id: String,
    /// Document exactly as the API sent it
    #[serde(skip)]
    pub raw: Option<serde_json::Value>,
}

impl Record {
    /// Decodes one API document and keeps the original alongside
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        let mut record: Record = serde_json::from_value(value.clone())?;
        record.raw = Some(value);
        Ok(record)
    }

    /// The document as received when there is one, otherwise the typed form
    pub fn to_export_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        match &self.raw {
            Some(raw) => Ok(raw.clone()),
            None => serde_json::to_value(self),
        }
    }
}

// ============================================================================
// Request / response bodies
// ============================================================================

/// Body of `POST /save-form-data` and `PUT /update-form-data/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecordPayload {
    pub form_fields: FormFields,
    pub commands: Commands,
}

/// Body of a successful `PUT /update-form-data/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateFormRecordResponse {
    pub user: serde_json::Value,
}

impl UpdateFormRecordResponse {
    pub fn into_record(self) -> Result<Record, serde_json::Error> {
        Record::from_value(self.user)
    }
}

/// Error body the API attaches to non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "userId": "abc123",
            "formFields": {
                "firstName": "John",
                "lastName": "Smith",
                "gender": "Male",
                "dateOfBirth": "1990-05-01T00:00:00.000Z",
                "currentNationality": "Nepali",
                "passportNumber": "PA1234567",
                "passportExpiryDate": "2031-12-31T00:00:00.000Z",
                "contactNumber": "+977-9800000000"
            },
            "commands": {
                "autoClick": true,
                "autoFill": false,
                "targetForm": "vfs-global-form",
                "submitForm": false,
                "delayMs": 1500,
                "scrollToElement": true
            },
            "timestamp": "2024-03-15T14:02:26.123Z",
            "_id": "65f4593a1c2b",
            "__v": 0
        })
    }

    #[test]
    fn test_record_from_api_json() {
        let record: Record = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(record.user_id.as_str(), "abc123");
        assert_eq!(record.form_fields.gender, Gender::Male);
        assert_eq!(record.form_fields.date_of_birth.to_string(), "1990-05-01");
        assert_eq!(record.commands.delay_ms, 1500);
        assert!(!record.commands.auto_fill);
        assert_eq!(record.storage_id, "65f4593a1c2b");
    }

    #[test]
    fn test_payload_uses_camel_case_keys() {
        let record: Record = serde_json::from_value(sample_json()).unwrap();
        let payload = FormRecordPayload {
            form_fields: record.form_fields,
            commands: Commands::default(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["formFields"]["passportExpiryDate"], "2031-12-31");
        assert_eq!(value["formFields"]["dateOfBirth"], "1990-05-01");
        assert_eq!(value["commands"]["delayMs"], 1000);
        assert_eq!(value["commands"]["targetForm"], "vfs-global-form");
        assert_eq!(value["commands"]["scrollToElement"], true);
    }

    #[test]
    fn test_missing_storage_id_defaults_to_empty() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("_id");
        let record: Record = serde_json::from_value(value).unwrap();
        assert!(record.storage_id.is_empty());
    }

    #[test]
    fn test_unknown_gender_falls_back() {
        let mut value = sample_json();
        value["formFields"]["gender"] = json!("");
        let record: Record = serde_json::from_value(value).unwrap();
        assert_eq!(record.form_fields.gender, Gender::Unknown);
        assert_eq!(record.form_fields.gender.as_str(), "");
    }

    #[test]
    fn test_missing_or_null_commands_take_defaults() {
        let mut value = sample_json();
        value["commands"]["delayMs"] = serde_json::Value::Null;
        value["commands"].as_object_mut().unwrap().remove("targetForm");
        let record: Record = serde_json::from_value(value).unwrap();
        assert_eq!(record.commands.delay_ms, DEFAULT_DELAY_MS);
        assert_eq!(record.commands.target_form, DEFAULT_TARGET_FORM);
        assert!(!record.commands.auto_fill);

        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("commands");
        let record: Record = serde_json::from_value(value).unwrap();
        assert_eq!(record.commands, Commands::default());
    }

    #[test]
    fn test_export_keeps_document_as_received() {
        let record = Record::from_value(sample_json()).unwrap();
        let exported = record.to_export_value().unwrap();
        assert_eq!(exported, sample_json());
        assert_eq!(exported["formFields"]["dateOfBirth"], "1990-05-01T00:00:00.000Z");
        assert_eq!(exported["__v"], 0);

        let typed: Record = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(typed.to_export_value().unwrap()["formFields"]["dateOfBirth"], "1990-05-01");
    }

    #[test]
    fn test_update_response_keeps_user_document() {
        let body = json!({ "user": sample_json() });
        let response: UpdateFormRecordResponse = serde_json::from_value(body).unwrap();
        let record = response.into_record().unwrap();
        assert_eq!(record.user_id.as_str(), "abc123");
        assert_eq!(record.raw, Some(sample_json()));
    }

    #[test]
    fn test_error_body() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"error":"User not found"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("User not found"));

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();
        assert_eq!(body.error, None);
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from_label("Other"), Some(Gender::Other));
        assert_eq!(Gender::from_label("other"), None);
        assert_eq!(Gender::from_label(""), None);
        assert!(!Gender::ALL.contains(&Gender::Unknown));
    }
}
