//! Start-location acquisition.

use crossbeam::channel::{bounded, Receiver};
use thiserror::Error;

use crate::geo::LatLng;
use crate::storage::config::LocationSettings;

/// Failure to determine the session's start location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// No usable start location is available
    #[error("unable to determine the current location")]
    Unavailable,
}

/// Resolves the start location off the UI thread.
///
/// Desktop stand-in for browser geolocation: the configured home coordinates
/// are the only source. Exactly one result is delivered on the returned
/// channel; the UI loop polls it with `try_recv`.
pub struct LocationService;

impl LocationService {
    /// Spawn the lookup and return the result channel.
    pub fn request(settings: &LocationSettings) -> Receiver<Result<LatLng, LocationError>> {
        let (tx, rx) = bounded(1);
        let home = settings.home();

        std::thread::spawn(move || {
            let result = match home {
                Some(coords) if coords.is_finite() => Ok(coords),
                _ => Err(LocationError::Unavailable),
            };
            match &result {
                Ok(coords) => tracing::info!("start location resolved: {}", coords),
                Err(e) => tracing::warn!("start location unavailable: {}", e),
            }
            let _ = tx.send(result);
        });

        rx
    }
}
