use routing::itinerary::RouteItem;
use serde::Serialize;

pub const NOT_FOUND: &str = "not found";

/// Answer to a single stat request
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        stop_count: usize,
        unique_stop_count: usize,
        route_length: f64,
        curvature: f64,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItem>,
    },
    NotFound {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::NotFound { request_id, error_message: NOT_FOUND.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_route_response_format() {
        let response = StatResponse::Route {
            request_id: 5,
            total_time: 11.5,
            items: vec![
                RouteItem::Wait { stop_name: "Biryulyovo Zapadnoye".into(), time: 6.0 },
                RouteItem::Bus { bus: "297".into(), span_count: 2, time: 5.5 },
            ],
        };

        assert_eq!(serde_json::to_value(&response).unwrap(), json!({
            "request_id": 5,
            "total_time": 11.5,
            "items": [
                {"type": "Wait", "stop_name": "Biryulyovo Zapadnoye", "time": 6.0},
                {"type": "Bus", "bus": "297", "span_count": 2, "time": 5.5}
            ]
        }));
    }

    #[test]
    fn test_not_found_format() {
        assert_eq!(
            serde_json::to_value(StatResponse::not_found(7)).unwrap(),
            json!({"request_id": 7, "error_message": "not found"})
        );
    }
}
