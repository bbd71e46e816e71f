mod fence_area;
mod user_marker;

pub use fence_area::FenceArea;
pub use user_marker::UserMarker;

use geofence::GeoPoint;
use walkers::Position;

/// Converts a core geographic point into a map position.
pub fn to_position(point: GeoPoint) -> Position {
    Position::from_lat_lon(point.latitude, point.longitude)
}
