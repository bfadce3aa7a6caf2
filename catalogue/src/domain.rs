use common::types::{BusId, Coordinates, StopId};

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub id: BusId,
    pub name: String,
    /// The closed walk the bus drives. Non-roundtrip routes are already mirrored:
    /// `A-B-C` is stored as `A, B, C, B, A`.
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteDistanceInfo {
    /// Sum of road distances in meters
    pub route_length: f64,
    /// `route_length` divided by the great-circle length, 0 if the latter is 0
    pub route_curvature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusInfo {
    pub name: String,
    pub stop_count: usize,
    pub unique_stop_count: usize,
    pub distance: RouteDistanceInfo,
}
