use std::fmt::{self, Display};

/// Enum representing the possible errors that can occur while acquiring a
/// position sample.
///
/// The possible errors are:
///
/// - `PermissionDenied`: the provider refused to share the position.
/// - `PositionUnavailable`: the provider could not produce a fix.
/// - `FetchInProgress`: a previous request has not completed yet.
///
/// All of them are recoverable: the user can simply try the check again.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    PermissionDenied,
    PositionUnavailable(String),
    FetchInProgress,
}

impl Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::PermissionDenied => {
                write!(f, "Permission denied: location permission is required")
            }
            LocationError::PositionUnavailable(reason) => {
                write!(f, "Position unavailable: {}", reason)
            }
            LocationError::FetchInProgress => {
                write!(f, "A position request is already in progress")
            }
        }
    }
}

impl std::error::Error for LocationError {}
