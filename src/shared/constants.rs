/// Mean Earth radius used by the Haversine distance, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Largest valid absolute latitude, in degrees
pub const MAX_LATITUDE: f64 = 90.0;

/// Largest valid absolute longitude, in degrees
pub const MAX_LONGITUDE: f64 = 180.0;
