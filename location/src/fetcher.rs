use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use geofence::GeoPoint;
use threadpool::ThreadPool;

use crate::errors::LocationError;
use crate::LocationProvider;

/// Runs position fetches off the caller's thread.
///
/// A caller requests a sample with [`PositionFetcher::request`] and later
/// polls [`PositionFetcher::try_take`] for the result, so a user interface
/// never blocks on the provider. At most one fetch is in flight at a time:
/// checks are driven by discrete user actions, and a second request before
/// the first result is taken is rejected with `FetchInProgress`.
pub struct PositionFetcher {
    provider: Arc<Mutex<dyn LocationProvider + Send>>,
    pool: ThreadPool,
    tx: Sender<Result<GeoPoint, LocationError>>,
    rx: Receiver<Result<GeoPoint, LocationError>>,
    in_flight: bool,
}

impl PositionFetcher {
    /// Creates a fetcher around `provider`.
    pub fn new<P>(provider: P) -> Self
    where
        P: LocationProvider + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        Self {
            provider: Arc::new(Mutex::new(provider)),
            pool: ThreadPool::new(1),
            tx,
            rx,
            in_flight: false,
        }
    }

    /// Forwards the permission request to the underlying provider.
    pub fn request_permission(&mut self) -> Result<(), LocationError> {
        self.provider
            .lock()
            .map_err(|_| LocationError::PositionUnavailable("Provider lock poisoned".to_string()))?
            .request_permission()
    }

    /// Enqueues a fetch for a fresh position sample.
    ///
    /// # Returns
    /// * `Result<(), LocationError>` - Returns `Ok(())` when the fetch was
    ///   enqueued, or `LocationError::FetchInProgress` when the previous
    ///   request has not been taken yet.
    pub fn request(&mut self) -> Result<(), LocationError> {
        if self.in_flight {
            return Err(LocationError::FetchInProgress);
        }

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        self.in_flight = true;

        self.pool.execute(move || {
            let result = match provider.lock() {
                Ok(mut provider) => provider.current_position(),
                Err(_) => Err(LocationError::PositionUnavailable(
                    "Provider lock poisoned".to_string(),
                )),
            };
            tx.send(result).ok();
        });

        Ok(())
    }

    /// Returns the completed fetch result, if any, without blocking.
    pub fn try_take(&mut self) -> Option<Result<GeoPoint, LocationError>> {
        match self.rx.try_recv() {
            Ok(result) => {
                self.in_flight = false;
                Some(result)
            }
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    struct FixedProvider {
        position: GeoPoint,
    }

    impl LocationProvider for FixedProvider {
        fn request_permission(&mut self) -> Result<(), LocationError> {
            Ok(())
        }

        fn current_position(&mut self) -> Result<GeoPoint, LocationError> {
            Ok(self.position)
        }
    }

    fn wait_for_result(fetcher: &mut PositionFetcher) -> Result<GeoPoint, LocationError> {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            if let Some(result) = fetcher.try_take() {
                return result;
            }
            assert!(
                Instant::now() < deadline,
                "Fetch did not complete in time"
            );
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_fetch_delivers_the_provider_sample() {
        let position = GeoPoint::new(37.78825, -122.4324);
        let mut fetcher = PositionFetcher::new(FixedProvider { position });

        fetcher.request().expect("Request should be accepted");
        assert_eq!(wait_for_result(&mut fetcher), Ok(position));
    }

    #[test]
    fn test_second_request_while_pending_is_rejected() {
        let position = GeoPoint::new(0.0, 0.0);
        let mut fetcher = PositionFetcher::new(FixedProvider { position });

        fetcher.request().expect("First request should be accepted");
        assert_eq!(fetcher.request(), Err(LocationError::FetchInProgress));

        wait_for_result(&mut fetcher).expect("First fetch should complete");
        fetcher
            .request()
            .expect("A new request should be accepted after the result is taken");
    }

    #[test]
    fn test_try_take_is_empty_without_a_request() {
        let mut fetcher = PositionFetcher::new(FixedProvider {
            position: GeoPoint::new(0.0, 0.0),
        });
        assert!(fetcher.try_take().is_none());
    }
}
