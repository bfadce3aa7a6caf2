use common::types::errors::UnknownStopError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogueError {
    UnknownStop(#[from] UnknownStopError),
    DuplicateStop(String),
    DuplicateBus(String),
    OpenRoundtrip(String),
    InvalidDistance { from: String, to: String, meters: f64 },
}

impl Display for CatalogueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueError::UnknownStop(err) => write!(f, "{}", err),
            CatalogueError::DuplicateStop(name) => write!(f, "Stop '{}' was already added", name),
            CatalogueError::DuplicateBus(name) => write!(f, "Bus '{}' was already added", name),
            CatalogueError::OpenRoundtrip(name) => {
                write!(f, "Roundtrip bus '{}' has to end at the stop it starts from", name)
            }
            CatalogueError::InvalidDistance { from, to, meters } => {
                write!(f, "Invalid road distance {}m from '{}' to '{}'", meters, from, to)
            }
        }
    }
}
