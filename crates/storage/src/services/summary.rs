use crate::dto::summary::SummaryCounts;
use crate::models::{Registrant, Team};

/// Tally of participants per team. Membership counts from the moment a team
/// is recorded, so rows seated by an import show up before they check in;
/// support staff never appear in any figure.
pub fn summarize(roster: &[Registrant]) -> SummaryCounts {
    let mut counts = SummaryCounts::default();
    for record in roster.iter().filter(|record| record.is_participant()) {
        match record.team {
            Some(Team::Orange) => counts.orange += 1,
            Some(Team::Green) => counts.green += 1,
            Some(Team::Red) => counts.red += 1,
            None => counts.unassigned += 1,
        }
        counts.total += 1;
    }
    counts
}
