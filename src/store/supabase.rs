use super::{RECORDS_TABLE, RecordStore, StoreError, StoreResult};
use crate::config::StoreConfig;
use crate::types::{NewRecord, Record, RecordRow};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

/// Client for the hosted table, speaking the PostgREST dialect Supabase exposes.
pub struct SupabaseStore {
    client: Client,
    config: StoreConfig,
}

// Error body shape PostgREST uses for failed requests
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl SupabaseStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            RECORDS_TABLE
        )
    }

    pub fn list_url(&self) -> String {
        format!("{}?select=*&order=created_at.desc", self.table_url())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }
}

async fn read_body(response: Response) -> StoreResult<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(api_error(status.as_u16(), &body))
    }
}

pub(crate) fn api_error(status: u16, body: &str) -> StoreError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.message)
        .unwrap_or_else(|_| body.to_string());
    StoreError::Api { status, message }
}

/// Decode a JSON array of rows, dropping rows that do not form a valid record.
pub(crate) fn decode_rows(body: &str) -> StoreResult<Vec<Record>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let mut records = Vec::with_capacity(rows.len());
    for raw in rows {
        match serde_json::from_value::<RecordRow>(raw) {
            Ok(row) => records.push(Record::from(row)),
            Err(err) => tracing::warn!(error = %err, "skipping malformed board record"),
        }
    }
    Ok(records)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RecordStore for SupabaseStore {
    async fn insert(&self, record: &NewRecord) -> StoreResult<Record> {
        tracing::debug!(kind = %record.kind(), "inserting board record");
        let request = self
            .authorize(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[record]);

        let body = read_body(request.send().await?).await?;
        decode_rows(&body)?
            .into_iter()
            .next()
            .ok_or(StoreError::EmptyInsert)
    }

    async fn list_newest_first(&self) -> StoreResult<Vec<Record>> {
        let request = self.authorize(self.client.get(self.list_url()));
        let body = read_body(request.send().await?).await?;
        let records = decode_rows(&body)?;
        tracing::debug!(count = records.len(), "fetched board records");
        Ok(records)
    }
}
