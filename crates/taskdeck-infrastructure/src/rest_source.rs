//! REST implementation of the remote task source.
//!
//! Only `fetch_all` performs a real wire call; the mutation endpoints are
//! client-side stubs mirroring a backend with no real persistence.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use taskdeck_core::config::RemoteConfig;
use taskdeck_core::error::{Result, TaskdeckError};
use taskdeck_core::task::{RemoteTaskSource, Task, TaskDraft};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote task source talking to the configured base URL.
#[derive(Clone)]
pub struct RestTaskSource {
    client: Client,
    base_url: String,
}

impl RestTaskSource {
    /// Creates a source for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a source from the remote section of the board config.
    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// The base URL this source fetches from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RemoteTaskSource for RestTaskSource {
    async fn fetch_all(&self) -> Result<Vec<Task>> {
        let response = self
            .client
            .get(&self.base_url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| TaskdeckError::remote(format!("Failed to fetch tasks: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TaskdeckError::remote(format!(
                "Task API error ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| TaskdeckError::remote(format!("Failed to parse task response: {}", e)))
    }

    /// Create stub. Fabricates an epoch-ms id and copies the draft's
    /// title/description/status. The priority field is not forwarded;
    /// the backend has never accepted it on this path.
    async fn create(&self, draft: &TaskDraft) -> Result<Task> {
        let task = Task {
            id: Utc::now().timestamp_millis(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: None,
        };
        tracing::debug!(id = task.id, "create stub produced task");
        Ok(task)
    }

    /// Update stub. Echoes the draft fields under the given id, again
    /// without priority.
    async fn update(&self, id: i64, draft: &TaskDraft) -> Result<Task> {
        let task = Task {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
            priority: None,
        };
        tracing::debug!(id, "update stub produced task");
        Ok(task)
    }

    /// Delete stub. Always succeeds.
    async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!(id, "delete stub acknowledged");
        Ok(())
    }
}
