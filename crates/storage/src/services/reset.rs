use std::str::FromStr;

use crate::models::Registrant;

/// Which slice of the roster a reset clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
    All,
    Participants,
    Support,
}

impl ResetScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetScope::All => "TODOS",
            ResetScope::Participants => "PARTICIPANTE",
            ResetScope::Support => "APOIO",
        }
    }

    fn applies_to(&self, record: &Registrant) -> bool {
        match self {
            ResetScope::All => true,
            ResetScope::Participants => record.is_participant(),
            ResetScope::Support => record.is_support(),
        }
    }
}

impl FromStr for ResetScope {
    type Err = ();

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "" | "TODOS" => Ok(ResetScope::All),
            "PARTICIPANTE" => Ok(ResetScope::Participants),
            "APOIO" => Ok(ResetScope::Support),
            _ => Err(()),
        }
    }
}

/// Result of a reset pass over the roster.
#[derive(Debug, PartialEq, Eq)]
pub struct ResetOutcome {
    pub affected: usize,
    pub total: usize,
}

/// Returns the scoped records to the pending state. `affected` counts only
/// records that actually carried check-in state; `total` is the full roster
/// size either way.
pub fn reset(roster: &mut [Registrant], scope: ResetScope) -> ResetOutcome {
    let mut affected = 0;
    for record in roster.iter_mut().filter(|record| scope.applies_to(record)) {
        if record.has_check_in_state() {
            affected += 1;
        }
        record.clear_check_in();
    }
    ResetOutcome {
        affected,
        total: roster.len(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{RegistrantKind, Team};

    fn checked_in(id: usize, kind: RegistrantKind, team: Option<Team>) -> Registrant {
        let mut record = Registrant::from_name(format!("Pessoa {}", id), id.to_string(), kind);
        record.team = team;
        record.checked_in = true;
        record.checked_in_at = Some(Utc::now());
        record
    }

    #[test]
    fn test_scope_parsing_is_lenient_about_case_and_spacing() {
        assert_eq!("todos".parse::<ResetScope>(), Ok(ResetScope::All));
        assert_eq!("".parse::<ResetScope>(), Ok(ResetScope::All));
        assert_eq!(" Participante ".parse::<ResetScope>(), Ok(ResetScope::Participants));
        assert_eq!("APOIO".parse::<ResetScope>(), Ok(ResetScope::Support));
        assert!("EQUIPE".parse::<ResetScope>().is_err());
    }

    #[test]
    fn test_reset_all_clears_everyone() {
        let mut roster = vec![
            checked_in(1, RegistrantKind::Participant, Some(Team::Orange)),
            checked_in(2, RegistrantKind::Support, None),
            Registrant::from_name("Pendente", "3", RegistrantKind::Participant),
        ];

        let outcome = reset(&mut roster, ResetScope::All);
        assert_eq!(outcome, ResetOutcome { affected: 2, total: 3 });
        assert!(roster.iter().all(|record| !record.has_check_in_state()));
    }

    #[test]
    fn test_scoped_reset_leaves_the_other_kind_alone() {
        let mut roster = vec![
            checked_in(1, RegistrantKind::Participant, Some(Team::Green)),
            checked_in(2, RegistrantKind::Support, None),
        ];

        let outcome = reset(&mut roster, ResetScope::Support);
        assert_eq!(outcome, ResetOutcome { affected: 1, total: 2 });
        assert!(roster[0].checked_in);
        assert_eq!(roster[0].team, Some(Team::Green));
        assert!(!roster[1].checked_in);
    }

    #[test]
    fn test_team_assignment_alone_counts_as_state() {
        let mut record = Registrant::from_name("Ana", "1", RegistrantKind::Participant);
        record.team = Some(Team::Red);
        let mut roster = vec![record];

        let outcome = reset(&mut roster, ResetScope::Participants);
        assert_eq!(outcome.affected, 1);
        assert_eq!(roster[0].team, None);
    }
}
