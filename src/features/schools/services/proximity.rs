//! Proximity ranking: great-circle distance and stable ascending sort.

use crate::shared::constants::EARTH_RADIUS_KM;

/// A point on the Earth's surface in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Anything that sits at a fixed location
pub trait Located {
    fn coordinates(&self) -> Coordinates;
}

/// An item paired with its distance (km) from a reference point
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub distance: f64,
}

/// Haversine distance between two points, in kilometers.
///
/// `a` is clamped to [0, 1] so that rounding, or coordinates outside the valid
/// geographic range, never turn into NaN.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Order `items` by distance from `origin`, nearest first.
///
/// The sort is stable: items at equal distance keep their input order. Items
/// whose own coordinates are out of range are ranked like any other.
pub fn rank<T: Located>(origin: Coordinates, items: Vec<T>) -> Vec<Ranked<T>> {
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .map(|item| {
            let distance = haversine_km(origin, item.coordinates());
            Ranked { item, distance }
        })
        .collect();

    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}
