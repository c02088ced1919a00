#![allow(dead_code)]

use academy_booking::{FacilitySchedule, Participant, Relationship};
use chrono::NaiveDate;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

pub fn schedule(day: &str, current: i32, max: i32, total_sessions: i32) -> FacilitySchedule {
    FacilitySchedule {
        id: "sched-1".to_string(),
        day_of_week: day.to_string(),
        time: "17:00".to_string(),
        location: "Main Gym".to_string(),
        total_sessions,
        current_participants: current,
        max_participants: max,
        available_spots: max - current,
    }
}

/// A seeded household: account holder plus two family members, none selected.
pub fn family() -> Vec<Participant> {
    vec![
        Participant::new("Jordan", Relationship::Myself),
        Participant::new("Sam", Relationship::Child),
        Participant::new("Alex", Relationship::Spouse),
    ]
}

/// 2025-01-01 fell on a Wednesday.
pub fn wednesday_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}
