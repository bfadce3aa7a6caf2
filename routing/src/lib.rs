pub mod errors;
pub mod graph;
pub mod itinerary;
pub mod route_graph;
pub mod settings;
pub mod solver;
pub mod transport_router;
#[cfg(test)]
mod tests;

pub use transport_router::TransportRouter;
