//! Leaderboard persistence boundary
//!
//! Record reads and writes happen only at life boundaries, never inside a
//! tick. The HTTP store speaks the leaderboard service's REST shape; every
//! failure degrades to a local JSON store so a dead service never costs the
//! player a record.

use std::path::{Path, PathBuf};
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default request timeout; a slow service must not delay the restart flow
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("Local store I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("Local store format: {0}")]
    Format(#[from] serde_json::Error),
}

/// One leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u32,
}

/// Score persistence, keyed by display name
pub trait RecordStore {
    /// Best recorded score for a player, if any
    fn get_record(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<u32>, PersistenceError>> + Send;

    /// Submit a score; the store keeps the best value per name
    fn set_record(
        &self,
        name: &str,
        score: u32,
    ) -> impl std::future::Future<Output = Result<(), PersistenceError>> + Send;

    /// Top `n` entries, descending by score, ties by submission order
    fn get_top(
        &self,
        n: usize,
    ) -> impl std::future::Future<Output = Result<Vec<LeaderboardEntry>, PersistenceError>> + Send;
}

#[derive(Debug, Serialize, Deserialize)]
struct RecordPayload {
    score: u32,
}

/// REST leaderboard client:
/// `GET /api/player/{name}/record`, `POST /api/player/{name}/record`,
/// `GET /api/leaderboard/{n}`.
pub struct HttpRecordStore {
    client: Client,
    base_url: String,
}

impl HttpRecordStore {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl RecordStore for HttpRecordStore {
    async fn get_record(&self, name: &str) -> Result<Option<u32>, PersistenceError> {
        let url = format!("{}/api/player/{}/record", self.base_url, name);
        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(PersistenceError::Status(response.status()));
        }
        let payload: RecordPayload = response.json().await?;
        Ok(Some(payload.score))
    }

    async fn set_record(&self, name: &str, score: u32) -> Result<(), PersistenceError> {
        let url = format!("{}/api/player/{}/record", self.base_url, name);
        debug!(name, score, "submitting record");
        let response = self
            .client
            .post(&url)
            .json(&RecordPayload { score })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(PersistenceError::Status(response.status()));
        }
        Ok(())
    }

    async fn get_top(&self, n: usize) -> Result<Vec<LeaderboardEntry>, PersistenceError> {
        let url = format!("{}/api/leaderboard/{}", self.base_url, n);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PersistenceError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

/// Best-effort JSON file store. Entries keep submission order so the
/// top listing can break score ties by who got there first.
pub struct LocalRecordStore {
    path: PathBuf,
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl LocalRecordStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = std::fs::read(&path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &[LeaderboardEntry]) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl RecordStore for LocalRecordStore {
    async fn get_record(&self, name: &str) -> Result<Option<u32>, PersistenceError> {
        let entries = self.entries.lock();
        Ok(entries
            .iter()
            .find(|e| e.username == name)
            .map(|e| e.score))
    }

    async fn set_record(&self, name: &str, score: u32) -> Result<(), PersistenceError> {
        let mut entries = self.entries.lock();
        match entries.iter_mut().find(|e| e.username == name) {
            Some(existing) => existing.score = existing.score.max(score),
            None => entries.push(LeaderboardEntry {
                username: name.to_string(),
                score,
            }),
        }
        self.persist(&entries)
    }

    async fn get_top(&self, n: usize) -> Result<Vec<LeaderboardEntry>, PersistenceError> {
        let entries = self.entries.lock();
        let mut top: Vec<LeaderboardEntry> = entries.clone();
        // Stable sort keeps submission order among equal scores
        top.sort_by(|a, b| b.score.cmp(&a.score));
        top.truncate(n);
        Ok(top)
    }
}

/// Primary HTTP store with a local fallback. Network failures are logged
/// and absorbed; the caller never sees them as fatal.
pub struct FallbackRecordStore {
    http: HttpRecordStore,
    local: LocalRecordStore,
}

impl FallbackRecordStore {
    pub fn new(http: HttpRecordStore, local: LocalRecordStore) -> Self {
        Self { http, local }
    }

    pub async fn get_record(&self, name: &str) -> Option<u32> {
        match self.http.get_record(name).await {
            Ok(record) => record,
            Err(e) => {
                warn!("record fetch failed, using local store: {}", e);
                self.local.get_record(name).await.ok().flatten()
            }
        }
    }

    /// Submit to the service; on failure the pair lands in the local store
    pub async fn set_record(&self, name: &str, score: u32) {
        if let Err(e) = self.http.set_record(name, score).await {
            warn!("record submit failed, storing locally: {}", e);
            if let Err(e) = self.local.set_record(name, score).await {
                warn!("local record store failed: {}", e);
            }
        }
    }

    pub async fn get_top(&self, n: usize) -> Vec<LeaderboardEntry> {
        match self.http.get_top(n).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("leaderboard fetch failed, using local store: {}", e);
                self.local.get_top(n).await.unwrap_or_default()
            }
        }
    }
}
