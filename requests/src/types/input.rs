use serde::Deserialize;
use std::collections::BTreeMap;

/// The whole request document: what to load and what to ask.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Document {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettingsInput>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// <neighbour stop name, meters>
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct RoutingSettingsInput {
    /// minutes
    pub bus_wait_time: u32,
    /// km/h
    pub bus_velocity: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document() {
        let document: Document = serde_json::from_str(r#"{
            "base_requests": [
                {"type": "Bus", "name": "114", "stops": ["Морской вокзал", "Ривьерский мост"], "is_roundtrip": false},
                {"type": "Stop", "name": "Ривьерский мост", "latitude": 43.587795, "longitude": 39.716901,
                 "road_distances": {"Морской вокзал": 850}},
                {"type": "Stop", "name": "Морской вокзал", "latitude": 43.581969, "longitude": 39.719848}
            ],
            "render_settings": {"width": 200},
            "routing_settings": {"bus_wait_time": 2, "bus_velocity": 30},
            "stat_requests": [
                {"id": 1, "type": "Stop", "name": "Ривьерский мост"},
                {"id": 2, "type": "Bus", "name": "114"},
                {"id": 3, "type": "Route", "from": "Морской вокзал", "to": "Ривьерский мост"}
            ]
        }"#).unwrap();

        assert_eq!(document.base_requests.len(), 3);
        assert_eq!(document.base_requests[1], BaseRequest::Stop(StopRequest {
            name: "Ривьерский мост".into(),
            latitude: 43.587795,
            longitude: 39.716901,
            road_distances: BTreeMap::from([("Морской вокзал".to_string(), 850.0)]),
        }));
        assert!(matches!(&document.base_requests[2], BaseRequest::Stop(stop) if stop.road_distances.is_empty()));
        assert_eq!(document.routing_settings, Some(RoutingSettingsInput { bus_wait_time: 2, bus_velocity: 30.0 }));
        assert_eq!(document.stat_requests[2], StatRequest::Route {
            id: 3,
            from: "Морской вокзал".into(),
            to: "Ривьерский мост".into(),
        });
        assert_eq!(document.stat_requests[1], StatRequest::Bus { id: 2, name: "114".into() });
    }

    #[test]
    fn test_empty_document() {
        let document: Document = serde_json::from_str("{}").unwrap();

        assert!(document.base_requests.is_empty());
        assert!(document.routing_settings.is_none());
        assert!(document.stat_requests.is_empty());
    }
}
