pub mod booking;
pub mod participant;
pub mod schedule;
pub mod session;
