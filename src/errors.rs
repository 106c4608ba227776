use crate::day::UnknownDay;
use axum::http::StatusCode;
use thiserror::Error;

/// Why a day's input was not accepted into the ledger.
///
/// Both kinds are fixed by the user editing the day again; they are
/// reported back as advisories, never as request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("distance must be a positive number of kilometres")]
    InvalidDistance,
    #[error("destination is required for a day with travel")]
    MissingDestination,
}

impl ValidationError {
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::InvalidDistance => "invalid_distance",
            ValidationError::MissingDestination => "missing_destination",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("name is required")]
    MissingName,
    #[error("vehicle model is required")]
    MissingVehicleModel,
    #[error("city is required")]
    MissingCity,
    #[error("age must be between 0 and 120, got {0}")]
    AgeOutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("profile is already set for this session")]
    ProfileLocked,
    #[error("Please fill in all your details above to proceed.")]
    ProfileIncomplete,
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }
}

impl From<UnknownDay> for AppError {
    fn from(err: UnknownDay) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::ProfileLocked => Self::conflict(err.to_string()),
            SessionError::ProfileIncomplete => Self::bad_request(err.to_string()),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
