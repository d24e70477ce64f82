//! Spherical-earth navigation primitives.
//!
//! Bearings are in degrees (0 = north, clockwise), distances in meters.
//! All functions are total: out-of-domain trig arguments are clamped, never
//! reported as errors.

use std::f64::consts::PI;

use crate::models::GeoPoint;

/// Earth radius used for forward projection, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of great-circle arc used by [`distance_m`].
///
/// Defined separately from [`EARTH_RADIUS_M`]; the round-trip agreement of
/// the two constants is pinned by tests.
pub const METERS_PER_ARC_DEG: f64 = 111_194.9267;

/// Great-circle distance between two points in meters.
///
/// Spherical law of cosines. The dot product can overshoot 1.0 on
/// near-coincident points; that case collapses to distance 0 rather than
/// taking `acos` out of domain.
pub fn distance_m(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let dlon = (p1.lon - p2.lon).to_radians();

    let dot = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    if dot > 1.0 {
        0.0
    } else {
        dot.acos().to_degrees() * METERS_PER_ARC_DEG
    }
}

/// Initial bearing from `p1` to `p2` in degrees.
///
/// The hemisphere of the bearing circle is selected by the sign of
/// `sin(Δλ)`: the west branch returns the raw angle, the east branch
/// `360 - angle`. Coincident points and a pole origin degenerate to angle 0
/// before the branch applies.
pub fn bearing_deg(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let lon1 = p1.lon.to_radians();
    let lon2 = p2.lon.to_radians();

    let clat1 = lat1.cos();
    let slat1 = lat1.sin();
    let slat2 = lat2.sin();

    let d = (slat1 * slat2 + clat1 * lat2.cos() * (lon1 - lon2).cos())
        .clamp(-0.999_999_999_999_99, 0.999_999_999_999_99)
        .acos();

    if (lon1 - lon2).sin() < 0.0 {
        let angle = ((slat2 - slat1) * d.cos() / (d.sin() * clat1))
            .clamp(-1.0, 1.0)
            .acos();
        angle.to_degrees()
    } else {
        let angle = if d != 0.0 && clat1 != 0.0 {
            ((slat2 - slat1) * d.cos() / (d.sin() * clat1))
                .clamp(-1.0, 1.0)
                .acos()
        } else {
            0.0
        };
        360.0 - angle.to_degrees()
    }
}

/// Reciprocal of a bearing, in [0, 360).
pub fn reciprocal_deg(bearing: f64) -> f64 {
    if bearing >= 180.0 {
        bearing - 180.0
    } else {
        bearing + 180.0
    }
}

/// Bearing bisecting the reciprocal of `inbound_deg` and `outbound_deg`.
///
/// The short-way/long-way comparison keeps the result pointing outward from
/// the shared vertex whichever side of the outbound course the reciprocal
/// falls on.
pub fn bisector_deg(inbound_deg: f64, outbound_deg: f64) -> f64 {
    let inbound = reciprocal_deg(inbound_deg);

    if inbound == outbound_deg {
        return reciprocal_deg(inbound);
    }

    let mean = (inbound + outbound_deg) / 2.0;
    if (inbound - outbound_deg).abs() < 180.0 {
        reciprocal_deg(mean)
    } else {
        mean
    }
}

/// Project `origin` along `bearing` for `range_m` meters.
///
/// Forward geodesic on a sphere of radius [`EARTH_RADIUS_M`]. Longitude is
/// normalized back into the ±180 range; from a pole the longitude is left
/// unchanged. A negative range projects along the reciprocal bearing.
pub fn destination(origin: GeoPoint, bearing: f64, range_m: f64) -> GeoPoint {
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();
    let theta = bearing.to_radians();
    let delta = range_m / EARTH_RADIUS_M;

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let clat1 = lat1.cos();
    let lon2 = if clat1 == 0.0 {
        lon1
    } else {
        let y = theta.sin() * delta.sin() * clat1;
        let x = delta.cos() - lat1.sin() * lat2.sin();
        (lon1 + y.atan2(x) + PI).rem_euclid(2.0 * PI) - PI
    };

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}
