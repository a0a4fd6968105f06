//! Record store for the message board.
//!
//! The board never owns persistence; it talks to a hosted table through the
//! [`RecordStore`] trait. The production implementation is
//! [`SupabaseStore`], which speaks PostgREST over `reqwest`.

mod supabase;

use crate::types::{NewRecord, Record};
use async_trait::async_trait;

pub use supabase::SupabaseStore;

/// Name of the table holding board records.
pub const RECORDS_TABLE: &str = "messages";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("store returned no record for the insert")]
    EmptyInsert,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Insert and ordered query over the single record collection.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RecordStore {
    /// Store one record and return it with its server-assigned id and timestamp.
    async fn insert(&self, record: &NewRecord) -> StoreResult<Record>;

    /// Every record, newest `created_at` first.
    async fn list_newest_first(&self) -> StoreResult<Vec<Record>>;
}
