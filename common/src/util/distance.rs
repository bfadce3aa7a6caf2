use crate::types::Coordinates;
use geo::{Distance, Haversine, Point};

/// Great-circle distance in meters between two coordinates.
pub fn great_circle_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }

    // geo uses x for longitude and y for latitude
    let from = Point::new(from.lng, from.lat);
    let to = Point::new(to.lng, to.lat);

    Haversine::distance(from, to)
}
