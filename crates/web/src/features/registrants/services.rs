use chrono::Utc;
use storage::RosterStore;
use storage::dto::summary::SummaryCounts;
use storage::error::Result;
use storage::models::Registrant;
use storage::services::checkin::{self, CheckInOutcome};
use storage::services::{search as search_service, summary};

/// Registrants whose normalized name contains the normalized query.
pub async fn search(store: &RosterStore, query: &str) -> Result<Vec<Registrant>> {
    let roster = store.read_all().await?;
    Ok(search_service::search(&roster, query)
        .into_iter()
        .cloned()
        .collect())
}

/// The full roster in stored order.
pub async fn list(store: &RosterStore) -> Result<Vec<Registrant>> {
    store.read_all().await
}

/// Participant tally per team.
pub async fn summarize(store: &RosterStore) -> Result<SummaryCounts> {
    let roster = store.read_all().await?;
    Ok(summary::summarize(&roster))
}

/// Confirms an arrival. Holds the store write lock across the whole
/// read-decide-write sequence so concurrent scans cannot oversubscribe a
/// team; a replayed check-in changes nothing and skips the write.
pub async fn check_in(store: &RosterStore, id: &str) -> Result<CheckInOutcome> {
    let _guard = store.lock_writes().await;
    let mut roster = store.read_all().await?;
    let outcome = {
        let mut rng = rand::thread_rng();
        checkin::check_in(&mut roster, id, Utc::now(), &mut rng)
    }?;
    if !outcome.already_checked_in {
        store.write_all(&roster).await?;
    }
    Ok(outcome)
}
