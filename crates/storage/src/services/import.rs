use std::collections::HashSet;

use crate::dto::admin::ImportItem;
use crate::models::{Registrant, RegistrantKind};
use crate::normalize::normalize_name;

/// Result of appending an import batch to the roster.
#[derive(Debug, PartialEq, Eq)]
pub struct ImportOutcome {
    pub added: usize,
    pub skipped: usize,
}

/// Appends the batch as pending records of the given kind. Rows without a
/// usable name are skipped, as is any name whose normalized form already
/// exists in the roster or earlier in the batch. Ids continue the numeric
/// sequence of the ids already present.
pub fn import(
    roster: &mut Vec<Registrant>,
    items: Vec<ImportItem>,
    kind: RegistrantKind,
) -> ImportOutcome {
    let mut seen: HashSet<String> = roster
        .iter()
        .map(|record| record.normalized_name.clone())
        .collect();
    let mut next_id = next_numeric_id(roster);
    let mut outcome = ImportOutcome { added: 0, skipped: 0 };

    for item in items {
        let name = item.full_name.as_deref().unwrap_or("").trim().to_string();
        let normalized = normalize_name(&name);
        if normalized.is_empty() || !seen.insert(normalized) {
            outcome.skipped += 1;
            continue;
        }
        roster.push(Registrant::from_name(name, next_id.to_string(), kind));
        next_id += 1;
        outcome.added += 1;
    }
    outcome
}

/// Highest numeric id present plus one; non-numeric ids are ignored.
fn next_numeric_id(roster: &[Registrant]) -> u64 {
    roster
        .iter()
        .filter_map(|record| record.id.parse::<u64>().ok())
        .max()
        .map_or(1, |highest| highest + 1)
}
