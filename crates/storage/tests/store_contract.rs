use std::io;
use std::sync::Arc;

use async_trait::async_trait;
use storage::RosterStore;
use storage::error::{Result, StorageError};
use storage::models::{Registrant, RegistrantKind, Team};
use storage::store::{BlobBackend, FsBackend, MemoryBackend};

struct FailingBackend;

#[async_trait]
impl BlobBackend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(io::Error::other("backend offline").into())
    }

    async fn put(&self, _key: &str, _bytes: &[u8]) -> Result<()> {
        Err(io::Error::other("backend offline").into())
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(io::Error::other("backend offline").into())
    }
}

fn participant(id: &str, name: &str) -> Registrant {
    Registrant::from_name(name, id, RegistrantKind::Participant)
}

#[tokio::test]
async fn test_fs_round_trip_writes_both_representations() {
    let dir = tempfile::tempdir().unwrap();
    let store = RosterStore::new(Arc::new(FsBackend::new(dir.path())));

    let mut ana = participant("1", "Ana Souza");
    ana.team = Some(Team::Green);
    ana.checked_in = true;
    ana.checked_in_at = Some("2026-02-01T12:00:00Z".parse().unwrap());
    let roster = vec![ana, participant("2", "Bia Prado")];

    store.write_all(&roster).await.unwrap();
    assert!(dir.path().join("participantes.json").exists());
    assert!(dir.path().join("roster/index.json").exists());
    assert!(dir.path().join("roster/records/1.json").exists());
    assert!(dir.path().join("roster/records/2.json").exists());

    assert_eq!(store.read_all().await.unwrap(), roster);
}

#[tokio::test]
async fn test_unknown_fields_survive_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = RosterStore::new(Arc::new(FsBackend::new(dir.path())));

    let mut record = participant("1", "Ana");
    record
        .extra
        .insert("telefone".to_string(), serde_json::json!("11 99999-0000"));
    store.write_all(&[record]).await.unwrap();

    let roster = store.read_all().await.unwrap();
    assert_eq!(
        roster[0].extra.get("telefone").and_then(|v| v.as_str()),
        Some("11 99999-0000")
    );
}

#[tokio::test]
async fn test_reading_a_fresh_medium_is_an_empty_roster() {
    let dir = tempfile::tempdir().unwrap();
    let store = RosterStore::new(Arc::new(FsBackend::new(dir.path())));
    assert!(store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_legacy_document_is_migrated_on_read() {
    let backend = Arc::new(MemoryBackend::new());
    let legacy = serde_json::json!([
        {
            "id": 1,
            "nomeCompleto": "João Silva",
            "equipe": "VERDE",
            "checkinRealizado": true,
            "checkinEm": "2026-02-01T12:00:00Z"
        },
        { "nomeCompleto": "Linha Sem Id" },
        { "id": 2, "nomeCompleto": "Apoio Um", "tipo": "APOIO" }
    ]);
    backend
        .put("participantes", legacy.to_string().as_bytes())
        .await
        .unwrap();

    let store = RosterStore::new(backend);
    let roster = store.read_all().await.unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].id, "1");
    assert_eq!(roster[0].normalized_name, "joao silva");
    assert_eq!(roster[0].team, Some(Team::Green));
    assert!(roster[0].checked_in);
    assert_eq!(roster[1].id, "2");
    assert!(roster[1].is_support());
}

#[tokio::test]
async fn test_record_layout_wins_over_a_stale_legacy_document() {
    let backend = Arc::new(MemoryBackend::new());
    let store = RosterStore::new(backend.clone());
    store.write_all(&[participant("1", "Nome Atual")]).await.unwrap();

    let stale = serde_json::json!([{ "id": "1", "nomeCompleto": "Nome Antigo" }]);
    backend
        .put("participantes", stale.to_string().as_bytes())
        .await
        .unwrap();

    let roster = store.read_all().await.unwrap();
    assert_eq!(roster[0].full_name, "Nome Atual");
}

#[tokio::test]
async fn test_unsupported_index_version_falls_back_to_the_legacy_document() {
    let backend = Arc::new(MemoryBackend::new());
    backend
        .put("roster/index", br#"{ "version": 99, "ids": [] }"#)
        .await
        .unwrap();
    let legacy = serde_json::json!([{ "id": "1", "nomeCompleto": "Ana" }]);
    backend
        .put("participantes", legacy.to_string().as_bytes())
        .await
        .unwrap();

    let store = RosterStore::new(backend);
    let roster = store.read_all().await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].full_name, "Ana");
}

#[tokio::test]
async fn test_records_missing_from_the_index_are_skipped() {
    let backend = Arc::new(MemoryBackend::new());
    let store = RosterStore::new(backend.clone());
    store
        .write_all(&[participant("1", "Ana"), participant("2", "Bia")])
        .await
        .unwrap();

    backend.delete("roster/records/1").await.unwrap();

    let roster = store.read_all().await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, "2");
}

#[tokio::test]
async fn test_rewriting_drops_record_blobs_of_removed_ids() {
    let backend = Arc::new(MemoryBackend::new());
    let store = RosterStore::new(backend.clone());
    store
        .write_all(&[participant("1", "Ana"), participant("2", "Bia")])
        .await
        .unwrap();

    store.write_all(&[participant("2", "Bia")]).await.unwrap();

    assert_eq!(backend.get("roster/records/1").await.unwrap(), None);
    assert!(backend.get("roster/records/2").await.unwrap().is_some());
}

#[tokio::test]
async fn test_reachable_but_empty_primary_never_consults_the_fallback() {
    let fallback = Arc::new(MemoryBackend::new());
    let seeded = serde_json::json!([{ "id": "9", "nomeCompleto": "Só No Fallback" }]);
    fallback
        .put("participantes", seeded.to_string().as_bytes())
        .await
        .unwrap();

    let store = RosterStore::with_fallback(Arc::new(MemoryBackend::new()), fallback);
    assert!(store.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_primary_reads_from_the_fallback() {
    let fallback = Arc::new(MemoryBackend::new());
    let seeded = serde_json::json!([{ "id": "9", "nomeCompleto": "Guardado" }]);
    fallback
        .put("participantes", seeded.to_string().as_bytes())
        .await
        .unwrap();

    let store = RosterStore::with_fallback(Arc::new(FailingBackend), fallback);
    let roster = store.read_all().await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].id, "9");
}

#[tokio::test]
async fn test_corrupt_primary_payload_reads_from_the_fallback() {
    let primary = Arc::new(MemoryBackend::new());
    primary.put("participantes", b"not json").await.unwrap();
    let fallback = Arc::new(MemoryBackend::new());
    let seeded = serde_json::json!([{ "id": "3", "nomeCompleto": "Ana" }]);
    fallback
        .put("participantes", seeded.to_string().as_bytes())
        .await
        .unwrap();

    let store = RosterStore::with_fallback(primary, fallback);
    let roster = store.read_all().await.unwrap();
    assert_eq!(roster[0].id, "3");
}

#[tokio::test]
async fn test_unreachable_primary_writes_to_the_fallback() {
    let fallback = Arc::new(MemoryBackend::new());
    let store = RosterStore::with_fallback(Arc::new(FailingBackend), fallback.clone());

    store.write_all(&[participant("1", "Ana")]).await.unwrap();
    assert!(fallback.get("participantes").await.unwrap().is_some());
    assert!(fallback.get("roster/records/1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_every_backend_failing_is_unavailable() {
    let store = RosterStore::with_fallback(Arc::new(FailingBackend), Arc::new(FailingBackend));

    let read_err = store.read_all().await.unwrap_err();
    assert!(matches!(read_err, StorageError::Unavailable(_)));

    let write_err = store.write_all(&[participant("1", "Ana")]).await.unwrap_err();
    assert!(matches!(write_err, StorageError::Unavailable(_)));
}
