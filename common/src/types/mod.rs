use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod errors;

// a continuous stop id
// "continuous" means that if we have n stops, all ids are from 0,...,n-1 and no number in that range
// is unused. The id is the position of the stop in catalogue insertion order.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct StopId(pub u32);

impl StopId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Display for StopId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stop#{}", self.0)
    }
}

// Continuous as well, in bus insertion order
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct BusId(pub u32);

impl BusId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl Display for BusId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bus#{}", self.0)
    }
}

/// Geographic position in degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
