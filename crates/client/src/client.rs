//! Transformation HTTP client.
//!
//! Blocking reqwest client (no Tokio runtime required).
//! Covers the three transformation operations: validate inputs locally, take
//! the shared busy flag, POST the current grid + inputs, reconcile the
//! response into the store.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use gridlift_grid::GridStore;
use gridlift_protocol::{
    AddColumnRequest, CombineColumnsRequest, FilterRowsRequest, TransformResponse,
    ADD_COLUMN_PATH, COMBINE_COLUMNS_PATH, FILTER_ROWS_PATH,
};

use crate::config::ServiceConfig;

/// Error type for transformation operations.
#[derive(Debug)]
pub enum TransformError {
    /// Another transformation is already in flight
    Busy,
    /// A precondition failed locally; no request was made
    Validation(String),
    /// Network error
    Network(String),
    /// HTTP error with status code
    Http(u16, String),
    /// Response body was not a valid transform response
    Parse(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Busy => write!(f, "A transformation is already in progress"),
            TransformError::Validation(msg) => write!(f, "{}", msg),
            TransformError::Network(msg) => write!(f, "Network error: {}", msg),
            TransformError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            TransformError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for TransformError {}

impl TransformError {
    /// The message shown to the user. Validation and busy errors carry a
    /// specific corrective message; transport/service failures surface as a
    /// single generic notice.
    pub fn user_message(&self) -> String {
        match self {
            TransformError::Busy | TransformError::Validation(_) => self.to_string(),
            _ => "An error occurred. Please try again.".to_string(),
        }
    }
}

/// Clears the busy flag when dropped, so every exit path — including `?`
/// returns on transport failures — resets it.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Transformation service client (blocking).
///
/// One logical busy flag shared across all three operations: while a request
/// is in flight, any further trigger gets [`TransformError::Busy`] and no
/// request is sent.
pub struct TransformClient {
    http: reqwest::blocking::Client,
    base_url: String,
    busy: AtomicBool,
}

impl TransformClient {
    /// Create a client against the configured service origin.
    pub fn new(config: ServiceConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("gridlift/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            busy: AtomicBool::new(false),
        }
    }

    /// True while a transformation request is in flight. Frontends use this
    /// to disable the triggering controls.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Add a computed column: sends the grid plus the staged column name and
    /// formula, replaces the store's snapshot from the response.
    pub fn add_column(&self, store: &mut GridStore) -> Result<(), TransformError> {
        if store.inputs().new_column_name.is_empty() || store.snapshot().is_empty() {
            return Err(TransformError::Validation(
                "Please upload a file and provide a new column name.".into(),
            ));
        }

        let request = AddColumnRequest {
            rows: store.snapshot().to_records(),
            new_column_name: store.inputs().new_column_name.clone(),
            formula: store.inputs().formula.clone(),
        };

        let _busy = self.acquire_busy()?;
        let response = self.post_json(ADD_COLUMN_PATH, &request)?;
        let next = gridlift_recon::apply(store.snapshot(), response);
        store.load_snapshot(next);
        Ok(())
    }

    /// Filter rows by the staged condition. Only the row half of the
    /// snapshot changes; the column set is kept as-is.
    pub fn filter_rows(&self, store: &mut GridStore) -> Result<(), TransformError> {
        if store.inputs().filter_condition.is_empty() || store.snapshot().is_empty() {
            return Err(TransformError::Validation(
                "Please upload a file and provide a filter condition.".into(),
            ));
        }

        let request = FilterRowsRequest {
            rows: store.snapshot().to_records(),
            filter_condition: store.inputs().filter_condition.clone(),
        };

        let _busy = self.acquire_busy()?;
        let response = self.post_json(FILTER_ROWS_PATH, &request)?;
        let next = gridlift_recon::apply_rows(store.snapshot(), response.rows);
        store.load_snapshot(next);
        Ok(())
    }

    /// Combine two existing columns into a new one.
    pub fn combine_columns(&self, store: &mut GridStore) -> Result<(), TransformError> {
        let selection = store.inputs().combine.clone();
        if selection.column1.is_empty()
            || selection.column2.is_empty()
            || selection.new_column_name.is_empty()
            || store.snapshot().is_empty()
        {
            return Err(TransformError::Validation(
                "Please upload a file and provide all column details.".into(),
            ));
        }
        // Selections come from the current column set (the dropdown
        // constraint); a stale field is a local error, not a service call.
        for field in [&selection.column1, &selection.column2] {
            if !store.snapshot().has_field(field) {
                return Err(TransformError::Validation(format!(
                    "Column '{}' is not in the current grid.",
                    field
                )));
            }
        }

        let request = CombineColumnsRequest {
            rows: store.snapshot().to_records(),
            column1: selection.column1,
            column2: selection.column2,
            new_column_name: selection.new_column_name,
        };

        let _busy = self.acquire_busy()?;
        let response = self.post_json(COMBINE_COLUMNS_PATH, &request)?;
        let next = gridlift_recon::apply(store.snapshot(), response);
        store.load_snapshot(next);
        Ok(())
    }

    // ── Internal helpers ────────────────────────────────────────────

    /// Take the shared busy flag, or reject if a request is in flight.
    fn acquire_busy(&self) -> Result<BusyGuard<'_>, TransformError> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(TransformError::Busy);
        }
        Ok(BusyGuard(&self.busy))
    }

    fn post_json<T: serde::Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<TransformResponse, TransformError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| {
                log::warn!("transform request failed: {}", e);
                TransformError::Network(e.to_string())
            })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            log::warn!("transform request returned HTTP {}: {}", status, body);
            return Err(TransformError::Http(status, body));
        }

        response
            .json::<TransformResponse>()
            .map_err(|e| TransformError::Parse(e.to_string()))
    }
}
