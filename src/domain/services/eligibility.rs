use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::models::schedule::FacilitySchedule;
use crate::domain::services::capacity::has_capacity;
use crate::domain::services::credits::{compute_credits, has_insufficient_credits};

/// Why a booking draft cannot be submitted. Surfaced as a value, never an
/// error: the caller blocks submission and renders the message, it does not
/// retry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    NoSessionsSelected,
    NoParticipantsSelected,
    ScheduleFull,
    InsufficientCredits { needed: i32 },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NoSessionsSelected => write!(f, "No sessions selected"),
            RejectionReason::NoParticipantsSelected => {
                write!(f, "Please select participants to join")
            }
            RejectionReason::ScheduleFull => {
                write!(f, "Schedule is full - not enough spots available")
            }
            RejectionReason::InsufficientCredits { needed } => {
                write!(f, "Insufficient credits - {} credits needed", needed)
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Eligibility {
    pub can_join: bool,
    pub reason: Option<RejectionReason>,
    pub total_credits_needed: i32,
}

/// Single-shot eligibility decision for the current draft. Checks run in
/// precedence order; the first failing one determines the surfaced reason.
pub fn evaluate(
    selected_sessions: i32,
    selected_participants: i32,
    schedule: &FacilitySchedule,
    user_session_credits: i32,
) -> Eligibility {
    let total_credits_needed = compute_credits(selected_participants, selected_sessions);

    let reason = if selected_sessions < 1 {
        Some(RejectionReason::NoSessionsSelected)
    } else if selected_participants == 0 {
        Some(RejectionReason::NoParticipantsSelected)
    } else if !has_capacity(
        schedule.current_participants,
        selected_participants,
        schedule.max_participants,
    ) {
        Some(RejectionReason::ScheduleFull)
    } else if has_insufficient_credits(total_credits_needed, user_session_credits) {
        Some(RejectionReason::InsufficientCredits {
            needed: total_credits_needed,
        })
    } else {
        None
    };

    Eligibility {
        can_join: reason.is_none(),
        reason,
        total_credits_needed,
    }
}
