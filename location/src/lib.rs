use geofence::GeoPoint;

pub mod errors;
mod fetcher;
mod simulated;

pub use fetcher::PositionFetcher;
pub use simulated::SimulatedGps;

use errors::LocationError;

/// A trait that defines the required methods for a provider of the device's
/// current position. This trait is implemented by any structure that stands
/// in for a positioning system, whether a real receiver or a simulated one.
pub trait LocationProvider {
    /// Asks the provider for permission to read the position.
    ///
    /// Providers are expected to answer immediately; a denial is final for
    /// the lifetime of the provider.
    fn request_permission(&mut self) -> Result<(), LocationError>;

    /// Produces a fresh position sample.
    fn current_position(&mut self) -> Result<GeoPoint, LocationError>;
}
