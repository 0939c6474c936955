use storage::RosterStore;
use storage::dto::admin::ImportItem;
use storage::error::Result;
use storage::models::RegistrantKind;
use storage::services::import::{self, ImportOutcome};
use storage::services::reset::{self, ResetOutcome, ResetScope};

/// Appends an import batch of the given kind and persists the grown roster.
/// Returns the batch outcome and the roster size after the write.
pub async fn import_batch(
    store: &RosterStore,
    items: Vec<ImportItem>,
    kind: RegistrantKind,
) -> Result<(ImportOutcome, usize)> {
    let _guard = store.lock_writes().await;
    let mut roster = store.read_all().await?;
    let outcome = import::import(&mut roster, items, kind);
    store.write_all(&roster).await?;
    Ok((outcome, roster.len()))
}

/// Returns the scoped records to the pending state and persists the roster.
pub async fn reset_roster(store: &RosterStore, scope: ResetScope) -> Result<ResetOutcome> {
    let _guard = store.lock_writes().await;
    let mut roster = store.read_all().await?;
    let outcome = reset::reset(&mut roster, scope);
    store.write_all(&roster).await?;
    Ok(outcome)
}
