use crate::domain::a001_form_record::ui::draft::RecordDraft;
use crate::shared::api_utils::{ApiError, ApiOperation};
use crate::shared::confirm::ConfirmIntent;
use crate::shared::export::to_pretty_json;
use crate::shared::list_utils::{
    contains_ci, filter_list, locale_cmp, sort_list, SortDirection, Searchable, Sortable,
};
use crate::shared::request_tokens::{RequestLedger, RequestToken};
use contracts::domain::a001_form_record::aggregate::{FormRecordPayload, Record, UserId};
use leptos::prelude::*;
use std::cmp::Ordering;

pub const PAGE_SIZE: usize = 10;
pub const EXPORT_FILE_NAME: &str = "vfs-users.json";
pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this user?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    UserId,
    FirstName,
    LastName,
    Gender,
    Nationality,
    Passport,
    Contact,
    Timestamp,
}

impl SortKey {
    /// Sortable columns in table order
    pub const COLUMNS: [SortKey; 8] = [
        SortKey::UserId,
        SortKey::FirstName,
        SortKey::LastName,
        SortKey::Gender,
        SortKey::Nationality,
        SortKey::Passport,
        SortKey::Contact,
        SortKey::Timestamp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::UserId => "User ID",
            SortKey::FirstName => "First Name",
            SortKey::LastName => "Last Name",
            SortKey::Gender => "Gender",
            SortKey::Nationality => "Nationality",
            SortKey::Passport => "Passport",
            SortKey::Contact => "Contact",
            SortKey::Timestamp => "Created",
        }
    }
}

impl Searchable for Record {
    fn matches_filter(&self, needle: &str) -> bool {
        contains_ci(self.user_id.as_str(), needle)
            || contains_ci(&self.form_fields.first_name, needle)
            || contains_ci(&self.form_fields.last_name, needle)
            || contains_ci(&self.form_fields.passport_number, needle)
    }
}

impl Sortable<SortKey> for Record {
    fn compare_by_field(&self, other: &Self, field: SortKey) -> Ordering {
        let (a, b) = (&self.form_fields, &other.form_fields);
        match field {
            SortKey::UserId => locale_cmp(self.user_id.as_str(), other.user_id.as_str()),
            SortKey::FirstName => locale_cmp(&a.first_name, &b.first_name),
            SortKey::LastName => locale_cmp(&a.last_name, &b.last_name),
            SortKey::Gender => locale_cmp(a.gender.as_str(), b.gender.as_str()),
            SortKey::Nationality => locale_cmp(&a.current_nationality, &b.current_nationality),
            SortKey::Passport => locale_cmp(&a.passport_number, &b.passport_number),
            SortKey::Contact => locale_cmp(&a.contact_number, &b.contact_number),
            SortKey::Timestamp => self.timestamp.cmp(&other.timestamp),
        }
    }
}

/// Keys of the request ledger: one slot for the list, one per record for
/// mutations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordsRequest {
    Load,
    Update(UserId),
    Delete(UserId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub user_id: UserId,
    pub draft: RecordDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpdate {
    pub token: RequestToken,
    pub user_id: UserId,
    pub payload: FormRecordPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub token: RequestToken,
    pub user_id: UserId,
}

/// State of the records browser.
///
/// `records` is the only copy of the data; what the table shows is derived
/// from it by [`RecordsBrowserState::view`]. Network calls run outside: each
/// operation is split into `begin_*` (issues a token, returns what to send)
/// and `finish_*` (applies the result unless a newer request superseded it).
#[derive(Clone, Debug)]
pub struct RecordsBrowserState {
    records: Vec<Record>,
    pub query: String,
    pub sort: Option<(SortKey, SortDirection)>,
    /// 1-based
    pub page: usize,
    pub editing: Option<EditSession>,
    pub error: Option<String>,
    pub is_loaded: bool,
    requests: RequestLedger<RecordsRequest>,
}

impl Default for RecordsBrowserState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            query: String::new(),
            sort: None,
            page: 1,
            editing: None,
            error: None,
            is_loaded: false,
            requests: RequestLedger::new(),
        }
    }
}

impl RecordsBrowserState {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn loading(&self) -> bool {
        self.requests.is_busy()
    }

    // ------------------------------------------------------------------
    // Derived view
    // ------------------------------------------------------------------

    /// Filtered by the current query, ordered by the current sort
    pub fn view(&self) -> Vec<Record> {
        let mut view: Vec<Record> = filter_list(&self.records, &self.query)
            .into_iter()
            .cloned()
            .collect();
        if let Some((key, direction)) = self.sort {
            sort_list(&mut view, key, direction);
        }
        view
    }

    pub fn view_len(&self) -> usize {
        filter_list(&self.records, &self.query).len()
    }

    pub fn total_pages(&self) -> usize {
        self.view_len().div_ceil(PAGE_SIZE)
    }

    /// Rows of the current page
    pub fn page_items(&self) -> Vec<Record> {
        self.view()
            .into_iter()
            .skip((self.page.max(1) - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect()
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    fn clamp_page(&mut self) {
        self.go_to_page(self.page);
    }

    // ------------------------------------------------------------------
    // Local operations
    // ------------------------------------------------------------------

    /// Always filters the full collection, never the previous result
    pub fn search(&mut self, term: impl Into<String>) {
        self.query = term.into();
        self.page = 1;
    }

    /// Same key flips the direction, a new key starts ascending
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, direction)) if current == key => Some((key, direction.toggled())),
            _ => Some((key, SortDirection::Asc)),
        };
    }

    pub fn begin_edit(&mut self, record: &Record) {
        self.editing = Some(EditSession {
            user_id: record.user_id.clone(),
            draft: RecordDraft::from(record),
        });
    }

    pub fn update_draft(&mut self, f: impl FnOnce(&mut RecordDraft)) {
        if let Some(session) = self.editing.as_mut() {
            f(&mut session.draft);
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Current view, each record as the API sent it
    pub fn export_json(&self) -> Result<String, String> {
        let documents = self
            .view()
            .iter()
            .map(Record::to_export_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to serialize export: {}", e))?;
        to_pretty_json(&documents)
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) -> RequestToken {
        self.error = None;
        self.requests.issue(RecordsRequest::Load)
    }

    /// Returns `false` when the result was stale and dropped
    pub fn finish_load(&mut self, token: RequestToken, result: Result<Vec<Record>, ApiError>) -> bool {
        if !self.requests.complete(&RecordsRequest::Load, token) {
            log::warn!("Discarding stale list response (token {})", token.value());
            return false;
        }
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
                self.is_loaded = true;
                self.clamp_page();
            }
            Err(e) => {
                log::error!("Loading records failed: {}", e);
                self.error = Some(e.user_message(ApiOperation::FetchAll));
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    /// `None` when nothing is being edited or the draft does not convert;
    /// in the latter case the error banner says why.
    pub fn begin_update(&mut self) -> Option<PendingUpdate> {
        let session = self.editing.as_ref()?;
        let user_id = session.user_id.clone();
        match session.draft.to_payload() {
            Ok(payload) => {
                self.error = None;
                let token = self.requests.issue(RecordsRequest::Update(user_id.clone()));
                Some(PendingUpdate {
                    token,
                    user_id,
                    payload,
                })
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    pub fn finish_update(
        &mut self,
        token: RequestToken,
        user_id: &UserId,
        result: Result<Record, ApiError>,
    ) -> bool {
        let key = RecordsRequest::Update(user_id.clone());
        if !self.requests.complete(&key, token) {
            log::warn!("Discarding stale update response for {}", user_id);
            return false;
        }
        match result {
            Ok(updated) => {
                if let Some(slot) = self.records.iter_mut().find(|r| &r.user_id == user_id) {
                    *slot = updated;
                }
                if self.editing.as_ref().map(|s| &s.user_id) == Some(user_id) {
                    self.editing = None;
                }
                self.clamp_page();
            }
            Err(e) => {
                log::error!("Updating {} failed: {}", user_id, e);
                self.error = Some(e.user_message(ApiOperation::Update));
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    /// `None` when the user declines
    pub fn begin_delete(
        &mut self,
        user_id: &UserId,
        confirm: &dyn ConfirmIntent,
    ) -> Option<PendingDelete> {
        if !confirm.confirm(DELETE_CONFIRM_MESSAGE) {
            return None;
        }
        self.error = None;
        let token = self.requests.issue(RecordsRequest::Delete(user_id.clone()));
        Some(PendingDelete {
            token,
            user_id: user_id.clone(),
        })
    }

    pub fn finish_delete(
        &mut self,
        token: RequestToken,
        user_id: &UserId,
        result: Result<(), ApiError>,
    ) -> bool {
        let key = RecordsRequest::Delete(user_id.clone());
        if !self.requests.complete(&key, token) {
            log::warn!("Discarding stale delete response for {}", user_id);
            return false;
        }
        match result {
            Ok(()) => {
                self.records.retain(|r| &r.user_id != user_id);
                if self.editing.as_ref().map(|s| &s.user_id) == Some(user_id) {
                    self.editing = None;
                }
                self.clamp_page();
            }
            Err(e) => {
                log::error!("Deleting {} failed: {}", user_id, e);
                self.error = Some(e.user_message(ApiOperation::Delete));
            }
        }
        true
    }
}

pub fn create_state() -> RwSignal<RecordsBrowserState> {
    RwSignal::new(RecordsBrowserState::default())
}
