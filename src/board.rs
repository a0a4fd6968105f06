//! Message board workflow.
//!
//! [`BoardState`] holds everything the board page shows: the active tab, the
//! form, the loading/submitting flags and the last fetched record list. It is
//! a plain state machine with synchronous transitions; the async functions at
//! the bottom drive it against a [`RecordStore`] through a [`BoardCell`], so
//! the same code runs behind a Dioxus signal and in tests.
//!
//! Every list fetch takes a [`FetchTicket`]. Only the completion carrying the
//! most recent ticket is applied, so a slow response from an earlier tab
//! switch can never overwrite a newer list.

use crate::store::{RecordStore, StoreError};
use crate::types::{BugType, ChatType, NewRecord, Priority, Record, RecordDetails, RecordKind};
use std::sync::{Arc, Mutex, PoisonError};

/// Editable fields of the submission form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardForm {
    pub name: String,
    pub email: String,
    pub content: String,
    pub bug_type: BugType,
    pub priority: Priority,
    pub chat_type: ChatType,
}

impl BoardForm {
    /// Build the create payload for `kind`, or `None` when name or content is blank.
    pub fn to_new_record(&self, kind: RecordKind) -> Option<NewRecord> {
        if self.name.trim().is_empty() || self.content.trim().is_empty() {
            return None;
        }
        let details = match kind {
            RecordKind::Message => RecordDetails::Message,
            RecordKind::Bug => RecordDetails::Bug {
                bug_type: Some(self.bug_type),
                priority: self.priority,
            },
            RecordKind::Chat => RecordDetails::Chat {
                chat_type: Some(self.chat_type),
            },
        };
        Some(NewRecord {
            name: self.name.clone(),
            email: (!self.email.is_empty()).then(|| self.email.clone()),
            content: self.content.clone(),
            details,
        })
    }

    /// Clear the free-text fields; the tab-specific selections stay.
    fn clear_text(&mut self) {
        self.name.clear();
        self.email.clear();
        self.content.clear();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    pub active_tab: RecordKind,
    pub form: BoardForm,
    pub loading: bool,
    pub submitting: bool,
    pub records: Vec<Record>,
    pub last_error: Option<String>,
    latest_fetch: u64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            active_tab: RecordKind::default(),
            form: BoardForm::default(),
            // the page fetches as soon as it mounts
            loading: true,
            submitting: false,
            records: Vec::new(),
            last_error: None,
            latest_fetch: 0,
        }
    }
}

impl BoardState {
    /// Switch tabs and start a fresh fetch. Form fields are left alone.
    pub fn select_tab(&mut self, tab: RecordKind) -> FetchTicket {
        self.active_tab = tab;
        self.begin_fetch()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.loading = true;
        FetchTicket(self.latest_fetch)
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest_fetch
    }

    /// Apply a fetch result. Returns `false` when a newer fetch has been
    /// issued since `ticket`, in which case nothing changes.
    pub fn finish_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Record>, StoreError>,
    ) -> bool {
        if !self.is_latest(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_fetch,
                "discarding stale board fetch"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(mut records) => {
                records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.records = records;
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch board records");
                self.last_error = Some(format!("加载失败：{err}"));
            }
        }
        true
    }

    /// Validate the form and mark a submission in flight.
    ///
    /// Returns `None` without touching any state when the form is invalid or
    /// another submission is still running.
    pub fn begin_submit(&mut self) -> Option<NewRecord> {
        if self.submitting {
            return None;
        }
        let payload = self.form.to_new_record(self.active_tab)?;
        self.submitting = true;
        Some(payload)
    }

    pub fn complete_submit(&mut self) {
        self.form.clear_text();
        self.submitting = false;
    }

    pub fn fail_submit(&mut self, err: &StoreError) {
        tracing::warn!(error = %err, "failed to create board record");
        self.last_error = Some(format!("发送失败：{err}"));
        self.submitting = false;
    }

    /// Records belonging to the active tab, newest first.
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> {
        let tab = self.active_tab;
        self.records.iter().filter(move |record| record.kind() == tab)
    }
}

/// Shared handle through which the async workflow reads and mutates state.
pub trait BoardCell {
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R;
}

impl BoardCell for Arc<Mutex<BoardState>> {
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> R {
        let mut state = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

/// What a call to [`submit`] ended up doing.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Form invalid or a submission already in flight; no request was sent.
    Skipped,
    Created(Record),
    Failed(StoreError),
}

/// Fetch the full list and apply it if no newer fetch was started meanwhile.
pub async fn fetch_list(store: &dyn RecordStore, cell: &impl BoardCell) -> bool {
    let ticket = cell.update(BoardState::begin_fetch);
    let result = store.list_newest_first().await;
    cell.update(|state| state.finish_fetch(ticket, result))
}

pub async fn select_tab(store: &dyn RecordStore, cell: &impl BoardCell, tab: RecordKind) -> bool {
    let ticket = cell.update(|state| state.select_tab(tab));
    let result = store.list_newest_first().await;
    cell.update(|state| state.finish_fetch(ticket, result))
}

/// Create a record from the form, re-fetch the list, then clear the text fields.
pub async fn submit(store: &dyn RecordStore, cell: &impl BoardCell) -> SubmitOutcome {
    let Some(payload) = cell.update(BoardState::begin_submit) else {
        return SubmitOutcome::Skipped;
    };

    match store.insert(&payload).await {
        Ok(record) => {
            tracing::info!(id = record.id, kind = %record.kind(), "board record created");
            fetch_list(store, cell).await;
            cell.update(BoardState::complete_submit);
            SubmitOutcome::Created(record)
        }
        Err(err) => {
            cell.update(|state| state.fail_submit(&err));
            SubmitOutcome::Failed(err)
        }
    }
}
