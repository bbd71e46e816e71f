use errors::GeofenceError;
pub mod errors;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A geographic coordinate pair expressed in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`.
/// Out-of-range values are not validated here; position providers are
/// trusted to hand in valid coordinates, and a NaN component propagates
/// through the distance computation instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Returns the great-circle distance between `a` and `b` in meters.
///
/// Uses the haversine formula over a sphere of radius [`EARTH_RADIUS_M`].
/// Identical points yield exactly 0 and antipodal points yield the maximum
/// of pi times the Earth radius.
///
/// # Parameters
/// - `a`: The first point.
/// - `b`: The second point.
///
/// # Returns
/// * `f64` - The surface distance in meters. The function is pure and never
///   fails; it is safe to call from any thread.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Classification of a sampled position relative to a geofence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceStatus {
    Inside,
    Outside,
}

impl FenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FenceStatus::Inside => "Inside",
            FenceStatus::Outside => "Outside",
        }
    }
}

/// A circular region defined by a center coordinate and a radius in meters.
///
/// The fence is an immutable value: it is built once, validated, and then
/// only read during evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geofence {
    center: GeoPoint,
    radius_m: f64,
}

impl Geofence {
    /// Creates a new `Geofence`.
    ///
    /// # Parameters
    /// - `center`: The center of the circular region.
    /// - `radius_m`: The radius of the region in meters.
    ///
    /// # Returns
    /// * `Result<Geofence, GeofenceError>` - Returns the fence on success, or
    ///   `GeofenceError::InvalidRadius` when the radius is zero, negative or
    ///   not a number.
    pub fn new(center: GeoPoint, radius_m: f64) -> Result<Self, GeofenceError> {
        if radius_m.is_nan() || radius_m <= 0.0 {
            return Err(GeofenceError::InvalidRadius(radius_m));
        }

        Ok(Geofence { center, radius_m })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Classifies `sample` against this fence.
    ///
    /// A sample strictly closer to the center than the radius is `Inside`.
    /// A distance exactly equal to the radius counts as `Outside`: the
    /// boundary itself is excluded from the fence.
    pub fn evaluate(&self, sample: GeoPoint) -> FenceStatus {
        if haversine_distance(sample, self.center) < self.radius_m {
            FenceStatus::Inside
        } else {
            FenceStatus::Outside
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const ANTIPODAL_MAX_M: f64 = PI * EARTH_RADIUS_M;

    fn default_center() -> GeoPoint {
        GeoPoint::new(37.78825, -122.4324)
    }

    #[test]
    fn test_zero_distance_for_identical_points() {
        let points = [
            default_center(),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(-54.843, -68.295),
            GeoPoint::new(89.9, 179.9),
        ];

        for point in points {
            assert_eq!(
                haversine_distance(point, point),
                0.0,
                "Expected exact zero distance for {:?}",
                point
            );
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (GeoPoint::new(51.5074, -0.1278), GeoPoint::new(48.8566, 2.3522)),
            (GeoPoint::new(-34.608, -58.372), GeoPoint::new(40.4168, -3.7038)),
            (default_center(), GeoPoint::new(37.7893, -122.4324)),
        ];

        for (p, q) in pairs {
            assert_eq!(
                haversine_distance(p, q),
                haversine_distance(q, p),
                "Expected symmetric distance for {:?} and {:?}",
                p,
                q
            );
        }
    }

    #[test]
    fn test_distance_bounded_by_antipodal_maximum() {
        let pairs = [
            (GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0)),
            (GeoPoint::new(12.34, 56.78), GeoPoint::new(-43.21, -170.0)),
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 179.999)),
        ];

        for (p, q) in pairs {
            let distance = haversine_distance(p, q);
            assert!(
                (0.0..=ANTIPODAL_MAX_M + 1.0).contains(&distance),
                "Distance {} out of bounds for {:?} and {:?}",
                distance,
                p,
                q
            );
        }
    }

    #[test]
    fn test_antipodal_points_reach_the_maximum() {
        let distance = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!(
            (distance - ANTIPODAL_MAX_M).abs() <= 1.0,
            "Expected about {} m for antipodal points, got {}",
            ANTIPODAL_MAX_M,
            distance
        );
    }

    #[test]
    fn test_london_to_paris_reference_distance() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);

        let distance = haversine_distance(london, paris);
        assert!(
            (distance - 343_556.0).abs() <= 500.0,
            "Expected about 343556 m between London and Paris, got {}",
            distance
        );
    }

    #[test]
    fn test_sample_at_center_is_inside() {
        let fence = Geofence::new(default_center(), 100.0).unwrap();
        assert_eq!(fence.evaluate(default_center()), FenceStatus::Inside);
    }

    #[test]
    fn test_sample_beyond_radius_is_outside() {
        let fence = Geofence::new(default_center(), 100.0).unwrap();
        // Roughly 115 m due north of the center
        let sample = GeoPoint::new(37.7893, -122.4324);

        let distance = haversine_distance(sample, fence.center());
        assert!(
            distance > 100.0 && distance < 130.0,
            "Unexpected distance for the northern sample: {}",
            distance
        );
        assert_eq!(fence.evaluate(sample), FenceStatus::Outside);
    }

    #[test]
    fn test_sample_exactly_on_the_boundary_is_outside() {
        let center = default_center();
        let sample = GeoPoint::new(37.7893, -122.4324);

        // A fence whose radius equals the sample distance exactly
        let fence = Geofence::new(center, haversine_distance(sample, center)).unwrap();
        assert_eq!(fence.evaluate(sample), FenceStatus::Outside);
    }

    #[test]
    fn test_containment_follows_the_distance() {
        let center = default_center();
        let sample = GeoPoint::new(37.7893, -122.4324);
        let distance = haversine_distance(sample, center);

        let wider = Geofence::new(center, distance + 1.0).unwrap();
        assert_eq!(wider.evaluate(sample), FenceStatus::Inside);

        let narrower = Geofence::new(center, distance - 1.0).unwrap();
        assert_eq!(narrower.evaluate(sample), FenceStatus::Outside);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        for radius in [0.0, -1.0, -250.5] {
            assert_eq!(
                Geofence::new(default_center(), radius),
                Err(GeofenceError::InvalidRadius(radius)),
                "Expected radius {} to be rejected",
                radius
            );
        }
        assert!(
            Geofence::new(default_center(), f64::NAN).is_err(),
            "Expected a NaN radius to be rejected"
        );
    }

    #[test]
    fn test_nan_coordinates_propagate_without_panicking() {
        let poisoned = GeoPoint::new(f64::NAN, 0.0);
        assert!(haversine_distance(poisoned, default_center()).is_nan());

        // A NaN distance compares false against the radius, so the sample
        // lands on the Outside branch
        let fence = Geofence::new(default_center(), 100.0).unwrap();
        assert_eq!(fence.evaluate(poisoned), FenceStatus::Outside);
    }
}
