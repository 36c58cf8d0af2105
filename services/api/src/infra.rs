use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use mindease::wellness::{PublishError, SnapshotPublisher, SnapshotStore, StoreError, UserSnapshot};
use tracing::{debug, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySnapshotStore {
    entries: Arc<Mutex<HashMap<String, UserSnapshot>>>,
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self, key: &str) -> Result<Option<UserSnapshot>, StoreError> {
        let guard = self.entries.lock().map_err(|_| {
            StoreError::Unavailable("snapshot store mutex poisoned".to_string())
        })?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, snapshot: &UserSnapshot) -> Result<(), StoreError> {
        let mut guard = self.entries.lock().map_err(|_| {
            StoreError::Unavailable("snapshot store mutex poisoned".to_string())
        })?;
        guard.insert(key.to_string(), snapshot.clone());
        Ok(())
    }
}

/// Ships eligible snapshots to the companion backend's `/sync` endpoint.
/// Dispatch happens on a spawned task: a slow or absent backend must never
/// block a scoring request.
#[derive(Clone)]
pub(crate) struct HttpSnapshotPublisher {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpSnapshotPublisher {
    pub(crate) fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: base_url.map(|base| format!("{}/sync", base.trim_end_matches('/'))),
        }
    }
}

impl SnapshotPublisher for HttpSnapshotPublisher {
    fn publish(&self, snapshot: UserSnapshot) -> Result<(), PublishError> {
        let Some(endpoint) = self.endpoint.clone() else {
            debug!("no sync endpoint configured; snapshot kept local");
            return Ok(());
        };

        let client = self.client.clone();
        tokio::spawn(async move {
            match client.post(&endpoint).json(&snapshot).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(%endpoint, "snapshot synced");
                }
                Ok(response) => {
                    warn!(%endpoint, status = %response.status(), "sync endpoint rejected snapshot");
                }
                Err(err) => {
                    warn!(%endpoint, error = %err, "snapshot sync request failed");
                }
            }
        });

        Ok(())
    }
}
