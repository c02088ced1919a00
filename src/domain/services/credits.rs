/// Total credits required: one credit per participant per booked session.
/// Pure product, no bounds checking; affordability is judged separately.
pub fn compute_credits(selected_participants: i32, selected_sessions: i32) -> i32 {
    selected_participants * selected_sessions
}

/// Strict greater-than: an exact balance match is still sufficient.
pub fn has_insufficient_credits(credits_needed: i32, balance: i32) -> bool {
    credits_needed > balance
}
