use serde::Serialize;

/// One leg of a trip through the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }
}

/// The fastest way between two stops. Times are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}
