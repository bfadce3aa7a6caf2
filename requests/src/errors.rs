use catalogue::errors::CatalogueError;
use routing::errors::RoutingError;
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    Catalogue(#[from] CatalogueError),
    Routing(#[from] RoutingError),
    MissingRoutingSettings,
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Catalogue(err) => write!(f, "Loading base requests: {}", err),
            RequestError::Routing(err) => write!(f, "{}", err),
            RequestError::MissingRoutingSettings => {
                write!(f, "Route requests need `routing_settings` in the request document")
            }
        }
    }
}
