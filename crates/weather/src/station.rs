//! Station metadata.

/// Location of the weather station a series was recorded at.
///
/// Constant for one series and attached to every container derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationMetadata {
    /// Elevation above sea level (m).
    pub elevation: f64,
    /// Longitude (decimal degrees).
    pub longitude: f64,
    /// Latitude (decimal degrees).
    pub latitude: f64,
}

impl StationMetadata {
    /// Creates station metadata from elevation, longitude and latitude.
    pub fn new(elevation: f64, longitude: f64, latitude: f64) -> Self {
        Self {
            elevation,
            longitude,
            latitude,
        }
    }
}
