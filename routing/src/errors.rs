use common::types::errors::UnknownStopError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    UnknownStop(#[from] UnknownStopError),
    InvalidSettings(String),
}

impl Display for RoutingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let err: &dyn Display = match self {
            RoutingError::UnknownStop(err) => err,
            RoutingError::InvalidSettings(reason) => reason,
        };
        let prefix = match self {
            RoutingError::UnknownStop(_) => "Routing request",
            RoutingError::InvalidSettings(_) => "Invalid routing settings",
        };
        write!(f, "{}: {}", prefix, err)
    }
}
