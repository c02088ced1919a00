pub mod controller;
pub mod domain;
pub mod error;

pub use controller::BookingController;
pub use domain::models::booking::{BookingEvent, BookingRequest};
pub use domain::models::participant::{Participant, Relationship};
pub use domain::models::schedule::FacilitySchedule;
pub use domain::models::session::SessionDate;
pub use domain::services::eligibility::{Eligibility, RejectionReason};
pub use error::BookingError;
