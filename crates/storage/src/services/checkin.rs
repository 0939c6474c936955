use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::{Result, StorageError};
use crate::models::{Registrant, RegistrantKind};
use crate::services::balancer;

/// Result of applying a check-in against the roster.
#[derive(Debug)]
pub struct CheckInOutcome {
    pub registrant: Registrant,
    pub already_checked_in: bool,
}

/// Confirms a registrant's arrival, assigning a team on first confirmation.
/// Replaying a confirmed check-in returns the stored record untouched, so a
/// double scan never moves anyone between teams.
pub fn check_in<R: Rng + ?Sized>(
    roster: &mut [Registrant],
    id: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<CheckInOutcome> {
    let position = roster
        .iter()
        .position(|record| record.id == id)
        .ok_or(StorageError::NotFound)?;

    if roster[position].checked_in {
        return Ok(CheckInOutcome {
            registrant: roster[position].clone(),
            already_checked_in: true,
        });
    }

    let team = match roster[position].kind {
        RegistrantKind::Support => None,
        RegistrantKind::Participant => match roster[position].team {
            // An earlier import may have seated the participant already.
            Some(team) => Some(team),
            None => Some(
                balancer::choose_team(roster, rng).ok_or(StorageError::CapacityExhausted)?,
            ),
        },
    };

    let record = &mut roster[position];
    record.team = team;
    record.checked_in = true;
    record.checked_in_at = Some(now);
    Ok(CheckInOutcome {
        registrant: record.clone(),
        already_checked_in: false,
    })
}
