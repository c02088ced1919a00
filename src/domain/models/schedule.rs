use serde::{Deserialize, Serialize};

/// A recurring weekly facility time-slot with fixed capacity.
///
/// Read-only input supplied by the caller. `available_spots` is trusted to
/// equal `max_participants - current_participants`; it is never recomputed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FacilitySchedule {
    pub id: String,
    pub day_of_week: String,
    pub time: String,
    pub location: String,
    pub total_sessions: i32,
    pub current_participants: i32,
    pub max_participants: i32,
    pub available_spots: i32,
}
