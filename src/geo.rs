//! Great-circle distance supplier.
//!
//! Turns latitude/longitude pairs into a [`DistanceMatrix`] in kilometres
//! using the haversine formula. The colony engine does not depend on this
//! module; it is one possible source of distances.

use crate::error::{AcoError, Result};
use crate::matrix::DistanceMatrix;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two coordinates, in kilometres.
///
/// # Examples
///
/// ```
/// use u_aco::geo::{haversine_km, Coordinate};
///
/// // One degree of latitude is ~111.19 km.
/// let d = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Builds the pairwise haversine matrix for `coords`, zero on the diagonal.
///
/// # Errors
///
/// [`AcoError::EmptyCoordinates`] if `coords` is empty.
pub fn distance_matrix(coords: &[Coordinate]) -> Result<DistanceMatrix> {
    let n = coords.len();
    if n == 0 {
        return Err(AcoError::EmptyCoordinates);
    }

    let mut data = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = haversine_km(coords[i], coords[j]);
            data[i * n + j] = d;
            data[j * n + i] = d;
        }
    }
    DistanceMatrix::from_data(n, data)
}
