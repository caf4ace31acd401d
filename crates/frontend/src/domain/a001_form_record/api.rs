use crate::shared::api_utils::{read_empty_response, read_response, ApiConfig, ApiError};
use contracts::domain::a001_form_record::aggregate::{
    FormRecordPayload, Record, UpdateFormRecordResponse,
};
use gloo_net::http::Request;

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("Failed to send request: {}", e))
}

/// Create a record. The body is returned raw: the API answers with either
/// the stored record or a plain acknowledgement.
pub async fn save_form_data(
    config: &ApiConfig,
    payload: &FormRecordPayload,
) -> Result<serde_json::Value, ApiError> {
    let url = config.endpoint("/save-form-data");
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport)?;

    read_response(response).await
}

/// Fetch one record by user id, returned raw for display
pub async fn fetch_form_data(
    config: &ApiConfig,
    user_id: &str,
) -> Result<serde_json::Value, ApiError> {
    let url = config.endpoint_for("/get-form-data", user_id);
    log::debug!("GET {}", url);

    let response = Request::get(&url).send().await.map_err(transport)?;
    read_response(response).await
}

/// Fetch the whole collection. Documents that do not decode are skipped,
/// the rest are still shown.
pub async fn fetch_all_form_data(config: &ApiConfig) -> Result<Vec<Record>, ApiError> {
    let url = config.endpoint("/get-all-form-data");
    log::debug!("GET {}", url);

    let response = Request::get(&url).send().await.map_err(transport)?;
    let documents: Vec<serde_json::Value> = read_response(response).await?;
    Ok(decode_records(documents))
}

/// Decodes each document on its own; a broken one is logged and dropped
pub fn decode_records(documents: Vec<serde_json::Value>) -> Vec<Record> {
    let total = documents.len();
    let records: Vec<Record> = documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| match Record::from_value(document) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping record #{} from the list: {}", index, e);
                None
            }
        })
        .collect();
    if records.len() < total {
        log::warn!("Loaded {} of {} records", records.len(), total);
    }
    records
}

/// Replace fields and commands of an existing record
pub async fn update_form_data(
    config: &ApiConfig,
    user_id: &str,
    payload: &FormRecordPayload,
) -> Result<Record, ApiError> {
    let url = config.endpoint_for("/update-form-data", user_id);
    log::debug!("PUT {}", url);

    let response = Request::put(&url)
        .json(payload)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(transport)?;

    let updated: UpdateFormRecordResponse = read_response(response).await?;
    updated
        .into_record()
        .map_err(|e| ApiError::Transport(format!("Failed to parse updated user: {}", e)))
}

pub async fn delete_form_data(config: &ApiConfig, user_id: &str) -> Result<(), ApiError> {
    let url = config.endpoint_for("/delete-form-data", user_id);
    log::debug!("DELETE {}", url);

    let response = Request::delete(&url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(transport)?;

    read_empty_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(user_id: &str, gender: &str, dob: &str) -> serde_json::Value {
        json!({
            "userId": user_id,
            "formFields": {
                "firstName": "Sita",
                "lastName": "Sharma",
                "gender": gender,
                "dateOfBirth": dob,
                "currentNationality": "Nepali",
                "passportNumber": "PA7654321",
                "passportExpiryDate": "2030-01-01",
                "contactNumber": "9800000001"
            },
            "commands": { "delayMs": null },
            "timestamp": "2024-03-15T10:00:00.000Z"
        })
    }

    #[test]
    fn test_odd_documents_are_still_listed() {
        let records = decode_records(vec![
            document("u1", "Female", "1992-07-14"),
            document("u2", "", "1992-07-14"),
        ]);
        let ids: Vec<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
        assert_eq!(records[1].commands.delay_ms, 1000);
        assert!(records[1].raw.is_some());
    }

    #[test]
    fn test_broken_document_does_not_hide_the_rest() {
        let records = decode_records(vec![
            document("u1", "Male", "1992-07-14"),
            document("u2", "Male", ""),
            json!("not a record"),
            document("u3", "Other", "1985-01-20T00:00:00.000Z"),
        ]);
        let ids: Vec<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "u3"]);
    }
}
