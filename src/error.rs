use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid input: {0}")]
    Validation(String),
}
