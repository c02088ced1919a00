/// Whether the schedule can absorb `requested` more participants.
/// Filling to exactly `max_participants` is allowed; a zero-participant
/// request passes vacuously (the eligibility check rejects it separately).
pub fn has_capacity(current_participants: i32, requested: i32, max_participants: i32) -> bool {
    current_participants + requested <= max_participants
}
