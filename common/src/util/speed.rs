#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Speed(pub f64); // in km/h

impl Speed {
    /// Minutes needed to cover `meters` at this speed.
    pub fn minutes_to_travel_distance(&self, meters: f64) -> f64 {
        let hours = (1.0 / self.0) * (meters / 1_000.0);
        hours * 60.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}
