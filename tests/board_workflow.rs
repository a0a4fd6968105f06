//! Integration tests for the message board workflow
//!
//! Drives submit / fetch / tab switching against in-process stores and checks
//! the request sequence and the resulting board state.

use async_trait::async_trait;
use jbpotato::board::{BoardState, SubmitOutcome, fetch_list, select_tab, submit};
use jbpotato::display::{LabelTone, record_label};
use jbpotato::store::{RecordStore, StoreError, StoreResult};
use jbpotato::types::{
    BugType, ChatType, NewRecord, Priority, Record, RecordDetails, RecordKind,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use time::{Duration, macros::datetime};
use tokio::sync::oneshot;

type Cell = Arc<Mutex<BoardState>>;

fn new_cell() -> Cell {
    Arc::new(Mutex::new(BoardState::default()))
}

fn snapshot(cell: &Cell) -> BoardState {
    cell.lock().unwrap().clone()
}

fn record(id: i64, details: RecordDetails) -> Record {
    Record {
        id,
        created_at: datetime!(2024-03-05 12:00 UTC) + Duration::minutes(id),
        name: format!("player{id}"),
        email: None,
        content: format!("post {id}"),
        details,
    }
}

/// Table kept in memory; logs every call and what the form held during fetches.
#[derive(Default)]
struct MemoryStore {
    records: Mutex<Vec<Record>>,
    calls: Mutex<Vec<&'static str>>,
    fail_inserts: bool,
    fail_lists: bool,
    watched: Option<Cell>,
    names_seen_by_fetch: Mutex<Vec<String>>,
}

impl MemoryStore {
    fn seeded(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, new: &NewRecord) -> StoreResult<Record> {
        self.calls.lock().unwrap().push("insert");
        if self.fail_inserts {
            return Err(StoreError::Api {
                status: 500,
                message: "insert rejected".into(),
            });
        }
        let mut records = self.records.lock().unwrap();
        let id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let stored = Record {
            id,
            created_at: datetime!(2024-03-05 12:00 UTC) + Duration::minutes(id),
            name: new.name.clone(),
            email: new.email.clone(),
            content: new.content.clone(),
            details: new.details.clone(),
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<Record>> {
        self.calls.lock().unwrap().push("list");
        if let Some(cell) = &self.watched {
            let name = cell.lock().unwrap().form.name.clone();
            self.names_seen_by_fetch.lock().unwrap().push(name);
        }
        if self.fail_lists {
            return Err(StoreError::Api {
                status: 503,
                message: "list unavailable".into(),
            });
        }
        let mut records = self.records.lock().unwrap().clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

/// Store whose list calls resolve only when the test releases them.
struct GatedStore {
    pending: Mutex<VecDeque<oneshot::Receiver<Vec<Record>>>>,
}

#[async_trait]
impl RecordStore for GatedStore {
    async fn insert(&self, _new: &NewRecord) -> StoreResult<Record> {
        Err(StoreError::EmptyInsert)
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<Record>> {
        let gate = self.pending.lock().unwrap().pop_front();
        match gate {
            Some(gate) => Ok(gate.await.unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }
}

#[tokio::test]
async fn message_submission_creates_then_refetches_then_clears() {
    let cell = new_cell();
    let store = MemoryStore {
        watched: Some(cell.clone()),
        ..MemoryStore::seeded(vec![record(1, RecordDetails::Message)])
    };
    {
        let mut state = cell.lock().unwrap();
        state.form.name = "Alice".into();
        state.form.email = "alice@example.com".into();
        state.form.content = "Hello".into();
    }

    let outcome = submit(&store, &cell).await;

    let created = match outcome {
        SubmitOutcome::Created(record) => record,
        other => panic!("expected a created record, got {other:?}"),
    };
    assert_eq!(created.details, RecordDetails::Message);
    assert_eq!(store.calls(), vec!["insert", "list"]);
    // text fields are cleared only after the refetch ran
    assert_eq!(*store.names_seen_by_fetch.lock().unwrap(), vec!["Alice"]);

    let state = snapshot(&cell);
    assert!(state.form.name.is_empty());
    assert!(state.form.email.is_empty());
    assert!(state.form.content.is_empty());
    assert!(!state.submitting);
    let first = state.visible_records().next().unwrap();
    assert_eq!(first.name, "Alice");
    assert_eq!(first.id, created.id);
}

#[tokio::test]
async fn bug_report_keeps_its_selections_and_renders_red() {
    let store = MemoryStore::default();
    let cell = new_cell();
    {
        let mut state = cell.lock().unwrap();
        state.active_tab = RecordKind::Bug;
        state.form.name = "Bob".into();
        state.form.content = "Crash on join".into();
        state.form.bug_type = BugType::Technical;
        state.form.priority = Priority::High;
    }

    submit(&store, &cell).await;

    let stored = store.records.lock().unwrap()[0].clone();
    assert_eq!(
        stored.details,
        RecordDetails::Bug {
            bug_type: Some(BugType::Technical),
            priority: Priority::High
        }
    );
    let label = record_label(&stored).unwrap();
    assert_eq!(label.text, "technical");
    assert_eq!(label.tone, LabelTone::Red);

    let state = snapshot(&cell);
    assert_eq!(state.form.bug_type, BugType::Technical);
    assert_eq!(state.form.priority, Priority::High);
}

#[tokio::test]
async fn blank_name_sends_nothing() {
    let store = MemoryStore::default();
    let cell = new_cell();
    cell.lock().unwrap().form.content = "test".into();
    let before = snapshot(&cell);

    let outcome = submit(&store, &cell).await;

    assert!(matches!(outcome, SubmitOutcome::Skipped));
    assert!(store.calls().is_empty());
    assert_eq!(snapshot(&cell), before);
}

#[tokio::test]
async fn failed_insert_leaves_form_for_resubmit() {
    let store = MemoryStore {
        fail_inserts: true,
        ..MemoryStore::default()
    };
    let cell = new_cell();
    {
        let mut state = cell.lock().unwrap();
        state.form.name = "Carol".into();
        state.form.content = "hi".into();
    }

    let outcome = submit(&store, &cell).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert_eq!(store.calls(), vec!["insert"]);
    let state = snapshot(&cell);
    assert_eq!(state.form.name, "Carol");
    assert_eq!(state.form.content, "hi");
    assert!(!state.submitting);
    assert!(state.last_error.is_some());
}

#[tokio::test]
async fn failed_refetch_after_create_still_clears_and_reports() {
    let cell = new_cell();
    let store = MemoryStore {
        fail_lists: true,
        watched: Some(cell.clone()),
        ..MemoryStore::seeded(vec![record(1, RecordDetails::Message)])
    };
    {
        let mut state = cell.lock().unwrap();
        state.records = vec![record(1, RecordDetails::Message)];
        state.form.name = "Dave".into();
        state.form.email = "dave@example.com".into();
        state.form.content = "see you at spawn".into();
    }

    let outcome = submit(&store, &cell).await;

    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    assert_eq!(store.calls(), vec!["insert", "list"]);
    assert_eq!(*store.names_seen_by_fetch.lock().unwrap(), vec!["Dave"]);

    let state = snapshot(&cell);
    assert!(state.form.name.is_empty());
    assert!(state.form.email.is_empty());
    assert!(state.form.content.is_empty());
    assert!(!state.submitting);
    assert!(!state.loading);
    let error = state.last_error.expect("refetch failure is surfaced");
    assert!(error.contains("list unavailable"), "{error}");
    // the list from before the create is kept
    let ids: Vec<i64> = state.records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn tab_switch_shows_only_that_tab_newest_first() {
    let store = MemoryStore::seeded(vec![
        record(1, RecordDetails::Message),
        record(
            2,
            RecordDetails::Bug {
                bug_type: Some(BugType::Gameplay),
                priority: Priority::Low,
            },
        ),
        record(3, RecordDetails::Chat { chat_type: Some(ChatType::Trade) }),
        record(
            4,
            RecordDetails::Bug {
                bug_type: Some(BugType::Plugin),
                priority: Priority::Medium,
            },
        ),
    ]);
    let cell = new_cell();
    cell.lock().unwrap().form.name = "draft".into();

    select_tab(&store, &cell, RecordKind::Bug).await;

    let state = snapshot(&cell);
    let ids: Vec<i64> = state.visible_records().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 2]);
    assert_eq!(state.records.len(), 4);
    assert_eq!(state.form.name, "draft");
    assert!(!state.loading);

    // refetching an unchanged table yields the same view
    fetch_list(&store, &cell).await;
    let again: Vec<i64> = snapshot(&cell).visible_records().map(|r| r.id).collect();
    assert_eq!(again, ids);
    assert_eq!(store.calls(), vec!["list", "list"]);
}

#[tokio::test]
async fn out_of_order_fetches_keep_the_latest_result() {
    let (release_message, message_gate) = oneshot::channel();
    let (release_bug, bug_gate) = oneshot::channel();
    let (release_chat, chat_gate) = oneshot::channel();
    let store = GatedStore {
        pending: Mutex::new(VecDeque::from([message_gate, bug_gate, chat_gate])),
    };
    let cell = new_cell();

    let chat_post = record(9, RecordDetails::Chat { chat_type: Some(ChatType::Help) });
    let stale_message = record(1, RecordDetails::Message);
    let expected = vec![chat_post.clone()];
    let release = async move {
        tokio::task::yield_now().await;
        release_chat.send(vec![chat_post]).unwrap();
        tokio::task::yield_now().await;
        release_bug.send(Vec::new()).unwrap();
        tokio::task::yield_now().await;
        // the first fetch resolves last
        release_message.send(vec![stale_message]).unwrap();
    };

    let (applied_message, applied_bug, applied_chat, ()) = futures::join!(
        select_tab(&store, &cell, RecordKind::Message),
        select_tab(&store, &cell, RecordKind::Bug),
        select_tab(&store, &cell, RecordKind::Chat),
        release,
    );

    assert!(!applied_message);
    assert!(!applied_bug);
    assert!(applied_chat);
    let state = snapshot(&cell);
    assert_eq!(state.active_tab, RecordKind::Chat);
    assert_eq!(state.records, expected);
    assert!(!state.loading);
}
