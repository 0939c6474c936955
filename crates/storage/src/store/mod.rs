mod backend;
mod migrate;

pub use backend::{BlobBackend, FsBackend, MemoryBackend};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use crate::error::{Result, StorageError};
use crate::models::Registrant;
use migrate::{RawRegistrant, migrate_record};

/// Key of the whole-roster document. Older deployments read only this blob,
/// so every write keeps it current alongside the per-record layout.
const LEGACY_KEY: &str = "participantes";
/// Key of the index document listing the ids of all record blobs.
const INDEX_KEY: &str = "roster/index";
const INDEX_VERSION: u32 = 1;

fn record_key(id: &str) -> String {
    format!("roster/records/{}", id)
}

#[derive(Debug, Serialize, Deserialize)]
struct RosterIndex {
    version: u32,
    ids: Vec<String>,
}

impl RosterIndex {
    fn new(ids: Vec<String>) -> Self {
        Self {
            version: INDEX_VERSION,
            ids,
        }
    }
}

/// Roster persistence over a primary blob backend with an optional fallback.
/// Reads migrate whatever stored shape is found into canonical records;
/// writes keep the per-record layout and the legacy document in step.
#[derive(Clone)]
pub struct RosterStore {
    primary: Arc<dyn BlobBackend>,
    fallback: Option<Arc<dyn BlobBackend>>,
    write_lock: Arc<Mutex<()>>,
}

impl RosterStore {
    pub fn new(primary: Arc<dyn BlobBackend>) -> Self {
        Self {
            primary,
            fallback: None,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn with_fallback(primary: Arc<dyn BlobBackend>, fallback: Arc<dyn BlobBackend>) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Serializes read-modify-write sequences. Callers take the guard before
    /// reading the roster and hold it until the matching write completed.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Reads the full roster. A reachable but empty backend is a valid empty
    /// roster; only an unreachable primary is retried on the fallback.
    pub async fn read_all(&self) -> Result<Vec<Registrant>> {
        match read_from(self.primary.as_ref()).await {
            Ok(roster) => Ok(roster),
            Err(primary_err) => {
                let Some(fallback) = &self.fallback else {
                    return Err(unavailable(&primary_err));
                };
                warn!(
                    "Roster read from {} failed ({}), trying {}",
                    self.primary.name(),
                    primary_err,
                    fallback.name()
                );
                read_from(fallback.as_ref())
                    .await
                    .map_err(|fallback_err| unavailable(&fallback_err))
            }
        }
    }

    /// Replaces the stored roster. Tries the primary first, then the
    /// fallback; fails only when every backend refuses the write.
    pub async fn write_all(&self, roster: &[Registrant]) -> Result<()> {
        match write_to(self.primary.as_ref(), roster).await {
            Ok(()) => Ok(()),
            Err(primary_err) => {
                let Some(fallback) = &self.fallback else {
                    return Err(unavailable(&primary_err));
                };
                warn!(
                    "Roster write to {} failed ({}), trying {}",
                    self.primary.name(),
                    primary_err,
                    fallback.name()
                );
                write_to(fallback.as_ref(), roster)
                    .await
                    .map_err(|fallback_err| unavailable(&fallback_err))
            }
        }
    }
}

fn unavailable(err: &StorageError) -> StorageError {
    StorageError::Unavailable(err.to_string())
}

async fn read_from(backend: &dyn BlobBackend) -> Result<Vec<Registrant>> {
    if let Some(bytes) = backend.get(INDEX_KEY).await? {
        match serde_json::from_slice::<RosterIndex>(&bytes) {
            Ok(index) if index.version == INDEX_VERSION => {
                return read_records(backend, &index.ids).await;
            }
            Ok(index) => warn!(
                "Roster index on {} has unsupported version {}, reading legacy document",
                backend.name(),
                index.version
            ),
            Err(e) => warn!(
                "Roster index on {} is unreadable ({}), reading legacy document",
                backend.name(),
                e
            ),
        }
    }
    read_legacy(backend).await
}

async fn read_records(backend: &dyn BlobBackend, ids: &[String]) -> Result<Vec<Registrant>> {
    let mut roster = Vec::with_capacity(ids.len());
    for id in ids {
        let key = record_key(id);
        let Some(bytes) = backend.get(&key).await? else {
            warn!(
                "Roster index on {} lists {} but the record blob is missing",
                backend.name(),
                id
            );
            continue;
        };
        match serde_json::from_slice::<RawRegistrant>(&bytes) {
            Ok(raw) => {
                if let Some(record) = migrate_record(raw) {
                    roster.push(record);
                }
            }
            Err(e) => warn!(
                "Record blob {} on {} is unreadable ({}), skipping it",
                key,
                backend.name(),
                e
            ),
        }
    }
    Ok(roster)
}

async fn read_legacy(backend: &dyn BlobBackend) -> Result<Vec<Registrant>> {
    let Some(bytes) = backend.get(LEGACY_KEY).await? else {
        return Ok(Vec::new());
    };
    let rows: Vec<RawRegistrant> = serde_json::from_slice(&bytes)?;
    Ok(rows.into_iter().filter_map(migrate_record).collect())
}

async fn write_to(backend: &dyn BlobBackend, roster: &[Registrant]) -> Result<()> {
    let previous = previous_record_ids(backend).await;

    let legacy = serde_json::to_vec_pretty(roster)?;
    backend.put(LEGACY_KEY, &legacy).await?;

    for record in roster {
        let bytes = serde_json::to_vec(record)?;
        backend.put(&record_key(&record.id), &bytes).await?;
    }

    let ids: Vec<String> = roster.iter().map(|record| record.id.clone()).collect();
    let index = serde_json::to_vec(&RosterIndex::new(ids.clone()))?;
    backend.put(INDEX_KEY, &index).await?;

    // A reset or reimport shrinks the roster; record blobs that fell out of
    // the index must go too, but a failed delete never fails the write.
    for stale in &previous {
        if ids.contains(stale) {
            continue;
        }
        if let Err(e) = backend.delete(&record_key(stale)).await {
            warn!(
                "Could not delete stale record blob {} on {}: {}",
                stale,
                backend.name(),
                e
            );
        }
    }
    Ok(())
}

/// Ids listed by the index currently stored on the backend, best effort.
async fn previous_record_ids(backend: &dyn BlobBackend) -> Vec<String> {
    match backend.get(INDEX_KEY).await {
        Ok(Some(bytes)) => serde_json::from_slice::<RosterIndex>(&bytes)
            .map(|index| index.ids)
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
