use chrono::NaiveDate;
use std::cmp::min;
use tracing::debug;

use crate::domain::models::booking::{BookingEvent, BookingRequest};
use crate::domain::models::participant::Participant;
use crate::domain::models::schedule::FacilitySchedule;
use crate::domain::models::session::SessionDate;
use crate::domain::services::eligibility::{self, Eligibility};
use crate::domain::services::sessions::generate_sessions;

/// Upper bound on bookable sessions when the schedule does not declare a
/// total. Carried over from the source flow as-is.
const DEFAULT_TOTAL_SESSIONS: i32 = 8;

/// Owns one in-memory booking draft: the schedule under consideration, the
/// user's credit balance, the seeded participant list, and the generated
/// session dates. All derived values (credit totals, eligibility) are
/// recomputed from current state on every read, so nothing can go stale.
pub struct BookingController {
    schedule: FacilitySchedule,
    user_session_credits: i32,
    participants: Vec<Participant>,
    sessions: Vec<SessionDate>,
    selected_session_count: i32,
    anchor: NaiveDate,
}

impl BookingController {
    /// Seeds a draft for one schedule. `anchor` is the reference date from
    /// which session 0 is located (normally "today"); keeping it explicit
    /// makes regeneration deterministic and testable.
    pub fn new(
        schedule: FacilitySchedule,
        user_session_credits: i32,
        participants: Vec<Participant>,
        anchor: NaiveDate,
    ) -> Self {
        let mut controller = Self {
            schedule,
            user_session_credits,
            participants,
            sessions: Vec::new(),
            selected_session_count: 1,
            anchor,
        };
        controller.selected_session_count = controller.clamp_count(1);
        controller.regenerate();
        controller
    }

    /// Most sessions a user may request: bounded by their credit balance and
    /// by the schedule's declared total (falling back to
    /// [`DEFAULT_TOTAL_SESSIONS`]), floored at 1 so the count range stays
    /// valid even with a zero balance.
    pub fn max_session_count(&self) -> i32 {
        let schedule_cap = if self.schedule.total_sessions > 0 {
            self.schedule.total_sessions
        } else {
            DEFAULT_TOTAL_SESSIONS
        };
        min(self.user_session_credits, schedule_cap).max(1)
    }

    fn clamp_count(&self, count: i32) -> i32 {
        count.clamp(1, self.max_session_count())
    }

    /// Replaces the session list from current weekday/count/anchor. Every
    /// mutation of those inputs calls this; prior per-date selections are
    /// intentionally not preserved.
    pub fn regenerate(&mut self) {
        self.sessions = generate_sessions(
            &self.schedule.day_of_week,
            self.selected_session_count,
            self.anchor,
        );
        debug!(
            "Regenerated {} sessions for schedule {}",
            self.sessions.len(),
            self.schedule.id
        );
    }

    pub fn increment_session_count(&mut self) {
        if self.selected_session_count < self.max_session_count() {
            self.selected_session_count += 1;
            self.regenerate();
        }
    }

    pub fn decrement_session_count(&mut self) {
        if self.selected_session_count > 1 {
            self.selected_session_count -= 1;
            self.regenerate();
        }
    }

    /// Flips a participant's selection. Unknown ids are ignored.
    pub fn toggle_participant(&mut self, id: &str) {
        if let Some(participant) = self.participants.iter_mut().find(|p| p.id == id) {
            participant.is_selected = !participant.is_selected;
        }
    }

    /// Flips a generated session date's selection. Unknown ids are ignored.
    pub fn toggle_session(&mut self, id: &str) {
        if let Some(session) = self.sessions.iter_mut().find(|s| s.id == id) {
            session.is_selected = !session.is_selected;
        }
    }

    /// Swaps the schedule under consideration, re-clamping the requested
    /// count into the new bounds and regenerating the date list.
    pub fn set_schedule(&mut self, schedule: FacilitySchedule) {
        self.schedule = schedule;
        self.selected_session_count = self.clamp_count(self.selected_session_count);
        self.regenerate();
    }

    /// Updates the credit balance (e.g. after a top-up elsewhere in the app),
    /// re-clamping the requested count into the new bounds.
    pub fn set_session_credits(&mut self, credits: i32) {
        self.user_session_credits = credits;
        let clamped = self.clamp_count(self.selected_session_count);
        if clamped != self.selected_session_count {
            self.selected_session_count = clamped;
            self.regenerate();
        }
    }

    pub fn schedule(&self) -> &FacilitySchedule {
        &self.schedule
    }

    pub fn session_credits(&self) -> i32 {
        self.user_session_credits
    }

    pub fn selected_session_count(&self) -> i32 {
        self.selected_session_count
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn sessions(&self) -> &[SessionDate] {
        &self.sessions
    }

    /// Selected participants in stable original order.
    pub fn selected_participants(&self) -> Vec<&Participant> {
        self.participants.iter().filter(|p| p.is_selected).collect()
    }

    fn selected_sessions_count(&self) -> i32 {
        self.sessions.iter().filter(|s| s.is_selected).count() as i32
    }

    /// Fresh derived snapshot of the draft; never cached, never persisted.
    pub fn booking_request(&self) -> BookingRequest {
        let selected_participants: Vec<Participant> = self
            .participants
            .iter()
            .filter(|p| p.is_selected)
            .cloned()
            .collect();
        let selected_sessions_count = self.selected_sessions_count();
        BookingRequest {
            total_credits_needed: selected_participants.len() as i32 * selected_sessions_count,
            selected_participants,
            selected_sessions_count,
            user_session_credits: self.user_session_credits,
        }
    }

    pub fn evaluate(&self) -> Eligibility {
        eligibility::evaluate(
            self.selected_sessions_count(),
            self.selected_participants().len() as i32,
            &self.schedule,
            self.user_session_credits,
        )
    }

    /// Confirms the draft if it is currently eligible, yielding the join
    /// event for the caller to act on. Ineligible drafts yield `None`; the
    /// caller is expected to keep the submit action disabled.
    pub fn confirm_join(&self) -> Option<BookingEvent> {
        let decision = self.evaluate();
        if !decision.can_join {
            return None;
        }
        Some(BookingEvent::JoinRequested {
            schedule_id: self.schedule.id.clone(),
            session_count: self.selected_sessions_count(),
            participant_ids: self
                .selected_participants()
                .into_iter()
                .map(|p| p.id.clone())
                .collect(),
        })
    }

    /// The participant roster is fixed for a booking interaction; growing it
    /// is the caller's job, so this only hands back the request event.
    pub fn request_add_participant(&self) -> BookingEvent {
        BookingEvent::AddParticipantRequested
    }
}
