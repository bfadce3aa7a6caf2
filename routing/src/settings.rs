use crate::errors::RoutingError;
use common::util::speed::Speed;

/// How long passengers wait for a bus and how fast buses drive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingSettings {
    // in minutes
    pub(crate) wait_time: u32,
    pub(crate) velocity: Speed,
}

impl RoutingSettings {
    pub fn new(wait_time: u32, velocity_kmh: f64) -> Result<Self, RoutingError> {
        let velocity = Speed(velocity_kmh);
        if !velocity.is_valid() {
            return Err(RoutingError::InvalidSettings(format!(
                "bus velocity must be a positive number of km/h, got {}", velocity_kmh
            )));
        }

        Ok(Self { wait_time, velocity })
    }

    pub fn wait_time_minutes(&self) -> f64 {
        self.wait_time as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_settings() {
        let settings = RoutingSettings::new(6, 40.0).unwrap();
        assert_eq!(settings.wait_time_minutes(), 6.0);
        assert_eq!(settings.velocity, Speed(40.0));
    }

    #[test]
    fn test_invalid_velocity() {
        assert!(matches!(RoutingSettings::new(6, 0.0), Err(RoutingError::InvalidSettings(_))));
        assert!(matches!(RoutingSettings::new(6, f64::INFINITY), Err(RoutingError::InvalidSettings(_))));
    }
}
