pub mod capacity;
pub mod credits;
pub mod eligibility;
pub mod sessions;
