use std::fmt;
use std::fmt::Formatter;

/// A stop name was referenced that was never added to the catalogue.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub struct UnknownStopError(pub String);

impl fmt::Display for UnknownStopError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown stop '{}'", self.0)
    }
}
