//! String-backed form state for the intake form and the edit modal.
//!
//! Inputs bind to plain strings; conversion into the typed payload happens
//! once, on submit.

use contracts::domain::a001_form_record::aggregate::{
    Commands, FormFields, FormRecordPayload, Gender, Record,
};
use contracts::domain::a001_form_record::calendar_date::{date_only, CalendarDate};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFieldsDraft {
    pub first_name: String,
    pub last_name: String,
    /// Empty until a gender is picked
    pub gender: String,
    pub date_of_birth: String,
    pub current_nationality: String,
    pub passport_number: String,
    pub passport_expiry_date: String,
    pub contact_number: String,
}

impl From<&FormFields> for FormFieldsDraft {
    fn from(f: &FormFields) -> Self {
        Self {
            first_name: f.first_name.clone(),
            last_name: f.last_name.clone(),
            gender: f.gender.as_str().to_string(),
            date_of_birth: f.date_of_birth.to_string(),
            current_nationality: f.current_nationality.clone(),
            passport_number: f.passport_number.clone(),
            passport_expiry_date: f.passport_expiry_date.to_string(),
            contact_number: f.contact_number.clone(),
        }
    }
}

impl FormFieldsDraft {
    /// Every field is required, checked in form order
    pub fn to_form_fields(&self) -> Result<FormFields, String> {
        let first_name = required(&self.first_name, "First name")?;
        let last_name = required(&self.last_name, "Last name")?;
        let gender = Gender::from_label(self.gender.trim())
            .ok_or_else(|| "Gender is required".to_string())?;
        let date_of_birth = parse_date(&self.date_of_birth, "Date of birth")?;
        let current_nationality = required(&self.current_nationality, "Current nationality")?;
        let passport_number = required(&self.passport_number, "Passport number")?;
        let passport_expiry_date = parse_date(&self.passport_expiry_date, "Passport expiry date")?;
        let contact_number = required(&self.contact_number, "Contact number")?;

        Ok(FormFields {
            first_name,
            last_name,
            gender,
            date_of_birth,
            current_nationality,
            passport_number,
            passport_expiry_date,
            contact_number,
        })
    }
}

/// Value goes out untouched; only a blank one is refused
fn required(value: &str, label: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(value.to_string())
}

fn parse_date(value: &str, label: &str) -> Result<CalendarDate, String> {
    let value = date_only(value.trim());
    if value.is_empty() {
        return Err(format!("{} is required", label));
    }
    value
        .parse()
        .map_err(|_| format!("{} must be a valid date", label))
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommandsDraft {
    pub auto_click: bool,
    pub auto_fill: bool,
    pub target_form: String,
    pub submit_form: bool,
    pub delay_ms: String,
    pub scroll_to_element: bool,
}

impl Default for CommandsDraft {
    fn default() -> Self {
        Self::from(&Commands::default())
    }
}

impl From<&Commands> for CommandsDraft {
    fn from(c: &Commands) -> Self {
        Self {
            auto_click: c.auto_click,
            auto_fill: c.auto_fill,
            target_form: c.target_form.clone(),
            submit_form: c.submit_form,
            delay_ms: c.delay_ms.to_string(),
            scroll_to_element: c.scroll_to_element,
        }
    }
}

impl CommandsDraft {
    /// Empty delay counts as 0, same as a bare number input
    pub fn to_commands(&self) -> Result<Commands, String> {
        let delay = self.delay_ms.trim();
        let delay_ms = if delay.is_empty() {
            0
        } else {
            delay
                .parse::<u64>()
                .map_err(|_| "Delay must be a non-negative whole number of milliseconds".to_string())?
        };

        Ok(Commands {
            auto_click: self.auto_click,
            auto_fill: self.auto_fill,
            target_form: self.target_form.clone(),
            submit_form: self.submit_form,
            delay_ms,
            scroll_to_element: self.scroll_to_element,
        })
    }
}

/// Both halves of a record as edited in a form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordDraft {
    pub fields: FormFieldsDraft,
    pub commands: CommandsDraft,
}

impl From<&Record> for RecordDraft {
    fn from(record: &Record) -> Self {
        Self {
            fields: FormFieldsDraft::from(&record.form_fields),
            commands: CommandsDraft::from(&record.commands),
        }
    }
}

impl RecordDraft {
    pub fn to_payload(&self) -> Result<FormRecordPayload, String> {
        Ok(FormRecordPayload {
            form_fields: self.fields.to_form_fields()?,
            commands: self.commands.to_commands()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFieldsDraft {
        FormFieldsDraft {
            first_name: "Sita".to_string(),
            last_name: "Sharma".to_string(),
            gender: "Female".to_string(),
            date_of_birth: "1992-07-14".to_string(),
            current_nationality: "Nepali".to_string(),
            passport_number: "PA7654321".to_string(),
            passport_expiry_date: "2030-01-01".to_string(),
            contact_number: "9800000001".to_string(),
        }
    }

    #[test]
    fn test_default_commands_draft() {
        let draft = CommandsDraft::default();
        assert!(draft.auto_click);
        assert!(draft.auto_fill);
        assert!(!draft.submit_form);
        assert!(draft.scroll_to_element);
        assert_eq!(draft.target_form, "vfs-global-form");
        assert_eq!(draft.delay_ms, "1000");
    }

    #[test]
    fn test_delay_is_coerced_to_number() {
        let mut draft = CommandsDraft::default();
        draft.delay_ms = " 250 ".to_string();
        assert_eq!(draft.to_commands().unwrap().delay_ms, 250);

        draft.delay_ms = String::new();
        assert_eq!(draft.to_commands().unwrap().delay_ms, 0);

        draft.delay_ms = "-5".to_string();
        assert!(draft.to_commands().is_err());

        draft.delay_ms = "1.5".to_string();
        assert!(draft.to_commands().is_err());
    }

    #[test]
    fn test_fields_conversion() {
        let fields = filled().to_form_fields().unwrap();
        assert_eq!(fields.gender, Gender::Female);
        assert_eq!(fields.date_of_birth.to_string(), "1992-07-14");
        assert_eq!(fields.passport_number, "PA7654321");
    }

    #[test]
    fn test_missing_gender_and_dates_are_reported() {
        let mut draft = filled();
        draft.gender.clear();
        assert_eq!(draft.to_form_fields().unwrap_err(), "Gender is required");

        let mut draft = filled();
        draft.date_of_birth.clear();
        assert_eq!(draft.to_form_fields().unwrap_err(), "Date of birth is required");

        let mut draft = filled();
        draft.passport_expiry_date = "soon".to_string();
        assert_eq!(
            draft.to_form_fields().unwrap_err(),
            "Passport expiry date must be a valid date"
        );
    }

    #[test]
    fn test_blank_text_fields_are_reported() {
        let blank = |clear: fn(&mut FormFieldsDraft)| {
            let mut draft = filled();
            clear(&mut draft);
            draft.to_form_fields().unwrap_err()
        };
        assert_eq!(blank(|d| d.first_name.clear()), "First name is required");
        assert_eq!(blank(|d| d.last_name = "   ".to_string()), "Last name is required");
        assert_eq!(
            blank(|d| d.current_nationality.clear()),
            "Current nationality is required"
        );
        assert_eq!(blank(|d| d.passport_number.clear()), "Passport number is required");
        assert_eq!(blank(|d| d.contact_number.clear()), "Contact number is required");
    }

    #[test]
    fn test_blank_first_name_blocks_payload() {
        let mut draft = RecordDraft {
            fields: filled(),
            commands: CommandsDraft::default(),
        };
        draft.fields.first_name.clear();
        assert_eq!(draft.to_payload().unwrap_err(), "First name is required");
    }

    #[test]
    fn test_unknown_gender_must_be_picked_again() {
        let mut fields = filled().to_form_fields().unwrap();
        fields.gender = Gender::Unknown;
        let draft = FormFieldsDraft::from(&fields);
        assert_eq!(draft.gender, "");
        assert_eq!(draft.to_form_fields().unwrap_err(), "Gender is required");
    }

    #[test]
    fn test_draft_round_trips_fields() {
        let fields = filled().to_form_fields().unwrap();
        assert_eq!(FormFieldsDraft::from(&fields), filled());
    }
}
