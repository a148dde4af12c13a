use std::f64::consts::PI;

/// Degrees to radians, computed as `degrees * PI / 180`.
pub fn degree_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in the unit of `radius`.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        degree_to_rad(lat1),
        degree_to_rad(lon1),
        degree_to_rad(lat2),
        degree_to_rad(lon2),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Antipodes can push `a` a hair past 1.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radius * c
}

/// Great-circle distance using the spherical law of cosines.
pub fn spherical_law_of_cosines(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        // acos is too coarse near 1 to land on exactly zero.
        return 0.0;
    }
    let (lat1, lon1, lat2, lon2) = (
        degree_to_rad(lat1),
        degree_to_rad(lon1),
        degree_to_rad(lat2),
        degree_to_rad(lon2),
    );
    let dlon = lon2 - lon1;
    let cos_angle = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    let central_angle = cos_angle.clamp(-1.0, 1.0).acos();
    radius * central_angle
}

/// Great-circle distance using the spherical special case of the Vincenty formula.
///
/// This is not the iterative ellipsoidal algorithm. It only avoids the
/// domain-restricted inverse trig of the other two by going through `atan2`.
pub fn vincenty(lat1: f64, lon1: f64, lat2: f64, lon2: f64, radius: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        degree_to_rad(lat1),
        degree_to_rad(lon1),
        degree_to_rad(lat2),
        degree_to_rad(lon2),
    );
    let dlon = lon2 - lon1;
    let a = lat2.cos() * dlon.sin();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let c = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    let central_angle = (a * a + b * b).sqrt().atan2(c);
    radius * central_angle
}
