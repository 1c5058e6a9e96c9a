use crate::constants::{EPSILON14, WGS84_EQUATORIAL_RADIUS, WGS84_POLAR_RADIUS};
use glam::{DMat4, DVec3, DVec4};

pub fn radii() -> DVec3 {
    DVec3::new(WGS84_EQUATORIAL_RADIUS, WGS84_EQUATORIAL_RADIUS, WGS84_POLAR_RADIUS)
}

fn radii_squared() -> DVec3 {
    radii() * radii()
}

/// Geographic position, angles in radians, height in meters above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

impl Cartographic {
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude: longitude.to_radians(),
            latitude: latitude.to_radians(),
            height,
        }
    }

    pub fn surface_normal(&self) -> DVec3 {
        let cos_lat = self.latitude.cos();
        DVec3::new(
            cos_lat * self.longitude.cos(),
            cos_lat * self.longitude.sin(),
            self.latitude.sin(),
        )
        .normalize()
    }

    /// Earth-fixed cartesian position on the WGS84 ellipsoid.
    pub fn to_cartesian(&self) -> DVec3 {
        let n = self.surface_normal();
        let k = radii_squared() * n;
        let gamma = n.dot(k).sqrt();
        k / gamma + n * self.height
    }
}

/// Shorthand for `Cartographic::from_degrees(..).to_cartesian()`.
pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> DVec3 {
    Cartographic::from_degrees(longitude, latitude, height).to_cartesian()
}

pub fn geodetic_surface_normal(position: DVec3) -> DVec3 {
    (position / radii_squared()).normalize_or_zero()
}

/// Local east-north-up frame at `origin`, as a transform from the local
/// frame to the earth-fixed frame. Columns are east, north, up and origin.
pub fn east_north_up_to_fixed_frame(origin: DVec3) -> DMat4 {
    let (east, north, up) = if origin.x.abs() < EPSILON14 && origin.y.abs() < EPSILON14 {
        // on the polar axis the east direction is undefined
        let sign = if origin.z < 0.0 { -1.0 } else { 1.0 };
        (DVec3::Y, DVec3::new(-sign, 0.0, 0.0), DVec3::new(0.0, 0.0, sign))
    } else {
        let up = geodetic_surface_normal(origin);
        let east = DVec3::new(-origin.y, origin.x, 0.0).normalize();
        let north = up.cross(east);
        (east, north, up)
    };

    DMat4::from_cols(
        east.extend(0.0),
        north.extend(0.0),
        up.extend(0.0),
        DVec4::new(origin.x, origin.y, origin.z, 1.0),
    )
}
