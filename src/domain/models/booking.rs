use serde::{Deserialize, Serialize};

use crate::domain::models::participant::Participant;

/// Derived snapshot of the current booking draft. Recomputed from scratch on
/// every mutation and never persisted; it lives only for the duration of one
/// booking interaction.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingRequest {
    pub selected_participants: Vec<Participant>,
    pub selected_sessions_count: i32,
    pub total_credits_needed: i32,
    pub user_session_credits: i32,
}

/// Events handed back to the caller instead of invoking callbacks directly.
/// The caller decides how to react (persist, navigate, open a form).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingEvent {
    JoinRequested {
        schedule_id: String,
        session_count: i32,
        participant_ids: Vec<String>,
    },
    AddParticipantRequested,
}
