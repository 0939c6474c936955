use rand::Rng;

use crate::models::{Registrant, Team};

/// Seats available per team.
pub const TEAM_CAPACITY: usize = 47;
/// Seats available across all teams.
pub const TOTAL_CAPACITY: usize = TEAM_CAPACITY * Team::ALL.len();

fn slot(team: Team) -> usize {
    match team {
        Team::Orange => 0,
        Team::Green => 1,
        Team::Red => 2,
    }
}

/// Checked-in participant count per team, in `Team::ALL` order. Support
/// staff and participants still waiting for check-in do not hold a seat.
pub fn checked_in_counts(roster: &[Registrant]) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for record in roster {
        if !record.is_participant() || !record.checked_in {
            continue;
        }
        if let Some(team) = record.team {
            counts[slot(team)] += 1;
        }
    }
    counts
}

/// Picks the team with the fewest checked-in participants, breaking ties
/// uniformly at random. Returns `None` when every team is full.
pub fn choose_team<R: Rng + ?Sized>(roster: &[Registrant], rng: &mut R) -> Option<Team> {
    let counts = checked_in_counts(roster);
    let open: Vec<(Team, usize)> = Team::ALL
        .iter()
        .copied()
        .zip(counts)
        .filter(|(_, count)| *count < TEAM_CAPACITY)
        .collect();
    let lowest = open.iter().map(|(_, count)| *count).min()?;
    let tied: Vec<Team> = open
        .into_iter()
        .filter(|(_, count)| *count == lowest)
        .map(|(team, _)| team)
        .collect();
    Some(tied[rng.gen_range(0..tied.len())])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::RegistrantKind;

    fn member(id: usize, kind: RegistrantKind, team: Option<Team>, checked_in: bool) -> Registrant {
        let mut record = Registrant::from_name(format!("Pessoa {}", id), id.to_string(), kind);
        record.team = team;
        record.checked_in = checked_in;
        record
    }

    fn checked_in_participants(count: usize, team: Team, start_id: usize) -> Vec<Registrant> {
        (0..count)
            .map(|i| member(start_id + i, RegistrantKind::Participant, Some(team), true))
            .collect()
    }

    #[test]
    fn test_counts_only_checked_in_participants() {
        let roster = vec![
            member(1, RegistrantKind::Participant, Some(Team::Orange), true),
            member(2, RegistrantKind::Participant, Some(Team::Orange), false),
            member(3, RegistrantKind::Support, Some(Team::Orange), true),
            member(4, RegistrantKind::Participant, None, true),
            member(5, RegistrantKind::Participant, Some(Team::Green), true),
        ];
        assert_eq!(checked_in_counts(&roster), [1, 1, 0]);
    }

    #[test]
    fn test_chooses_the_least_loaded_team() {
        let mut roster = checked_in_participants(3, Team::Orange, 0);
        roster.extend(checked_in_participants(2, Team::Green, 100));
        roster.extend(checked_in_participants(1, Team::Red, 200));

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(choose_team(&roster, &mut rng), Some(Team::Red));
        }
    }

    #[test]
    fn test_ties_are_broken_across_all_tied_teams() {
        let roster: Vec<Registrant> = Vec::new();
        let mut rng = StdRng::seed_from_u64(7);
        let picks: HashSet<Team> = (0..60)
            .map(|_| choose_team(&roster, &mut rng).unwrap())
            .collect();
        assert_eq!(picks.len(), Team::ALL.len());
    }

    #[test]
    fn test_full_team_is_never_picked() {
        let mut roster = checked_in_participants(TEAM_CAPACITY, Team::Orange, 0);
        roster.extend(checked_in_participants(TEAM_CAPACITY - 1, Team::Green, 1000));

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..40 {
            let pick = choose_team(&roster, &mut rng).unwrap();
            assert_ne!(pick, Team::Orange);
        }
    }

    #[test]
    fn test_no_team_left_when_all_full() {
        let mut roster = checked_in_participants(TEAM_CAPACITY, Team::Orange, 0);
        roster.extend(checked_in_participants(TEAM_CAPACITY, Team::Green, 1000));
        roster.extend(checked_in_participants(TEAM_CAPACITY, Team::Red, 2000));
        assert_eq!(roster.len(), TOTAL_CAPACITY);

        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(choose_team(&roster, &mut rng), None);
    }
}
