use geofence::GeoPoint;
use rand::Rng;

use crate::errors::LocationError;
use crate::LocationProvider;

/// Largest drift applied to the held position on a single sample, in meters.
const MAX_STEP_M: f64 = 5.0;

/// Meters covered by one degree of latitude.
const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// A stand-in for a GPS receiver.
///
/// The receiver holds a position that starts at a configured origin and
/// drifts by a small random step on every sample, so consecutive checks look
/// like a person wandering near the starting point. Permission can be
/// configured as denied to exercise the failure path of the application.
#[derive(Debug, Clone)]
pub struct SimulatedGps {
    position: GeoPoint,
    permission_granted: bool,
}

impl SimulatedGps {
    /// Creates a receiver positioned at `origin` with permission granted.
    pub fn new(origin: GeoPoint) -> Self {
        Self {
            position: origin,
            permission_granted: true,
        }
    }

    /// Configures whether the receiver will grant the permission request.
    pub fn with_permission(mut self, granted: bool) -> Self {
        self.permission_granted = granted;
        self
    }

    fn drift(&mut self) {
        let mut rng = rand::thread_rng();
        let step_north = rng.gen_range(-MAX_STEP_M..=MAX_STEP_M);
        let step_east = rng.gen_range(-MAX_STEP_M..=MAX_STEP_M);

        // A degree of longitude shrinks with the cosine of the latitude
        let meters_per_degree_lon =
            METERS_PER_DEGREE_LAT * self.position.latitude.to_radians().cos();

        self.position = GeoPoint::new(
            self.position.latitude + step_north / METERS_PER_DEGREE_LAT,
            self.position.longitude + step_east / meters_per_degree_lon,
        );
    }
}

impl LocationProvider for SimulatedGps {
    fn request_permission(&mut self) -> Result<(), LocationError> {
        if self.permission_granted {
            Ok(())
        } else {
            Err(LocationError::PermissionDenied)
        }
    }

    fn current_position(&mut self) -> Result<GeoPoint, LocationError> {
        if !self.permission_granted {
            return Err(LocationError::PermissionDenied);
        }

        self.drift();
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geofence::haversine_distance;

    #[test]
    fn test_samples_drift_within_the_step_bound() {
        let origin = GeoPoint::new(37.78825, -122.4324);
        let mut gps = SimulatedGps::new(origin);

        let mut previous = origin;
        for _ in 0..50 {
            let sample = gps.current_position().expect("Sample should succeed");
            let step = haversine_distance(previous, sample);
            // Diagonal steps reach sqrt(2) * MAX_STEP_M at most
            assert!(
                step <= MAX_STEP_M * 1.5,
                "Single step of {} m exceeds the bound",
                step
            );
            previous = sample;
        }
    }

    #[test]
    fn test_denied_permission_blocks_samples() {
        let origin = GeoPoint::new(37.78825, -122.4324);
        let mut gps = SimulatedGps::new(origin).with_permission(false);

        assert_eq!(
            gps.request_permission(),
            Err(LocationError::PermissionDenied)
        );
        assert_eq!(
            gps.current_position(),
            Err(LocationError::PermissionDenied)
        );
    }

    #[test]
    fn test_granted_permission_is_acknowledged() {
        let mut gps = SimulatedGps::new(GeoPoint::new(0.0, 0.0));
        assert_eq!(gps.request_permission(), Ok(()));
    }
}
