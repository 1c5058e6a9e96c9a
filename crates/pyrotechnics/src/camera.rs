use crate::geo::{self, Cartographic};
use glam::{DMat4, DQuat, DVec3};
use std::f64::consts::FRAC_PI_2;

/// Camera placement in a right-handed frame with Z up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub direction: DVec3,
    pub up: DVec3,
}

impl CameraPose {
    /// Camera at `offset` looking at the frame origin, kept upright.
    pub fn look_at_transform(offset: DVec3) -> Self {
        let direction = (-offset).normalize_or(DVec3::X);
        let right = direction.cross(DVec3::Z).try_normalize().unwrap_or(DVec3::X);
        Self {
            position: offset,
            direction,
            up: right.cross(direction),
        }
    }

    pub fn right(&self) -> DVec3 {
        self.direction.cross(self.up).normalize_or_zero()
    }

    /// Pitches the view up by `angle` radians around the camera's right axis.
    pub fn look_up(self, angle: f64) -> Self {
        let rotation = DQuat::from_axis_angle(self.right(), angle);
        Self {
            position: self.position,
            direction: rotation * self.direction,
            up: rotation * self.up,
        }
    }

    pub fn transformed(&self, matrix: DMat4) -> Self {
        Self {
            position: matrix.transform_point3(self.position),
            direction: matrix.transform_vector3(self.direction).normalize_or_zero(),
            up: matrix.transform_vector3(self.up).normalize_or_zero(),
        }
    }
}

/// Frames the show: stand at `offset`, face the launch site and tilt up
/// until the emitter location is centered.
pub fn launch_view(offset: DVec3, emitter_location: DVec3) -> CameraPose {
    let to_fireworks = (emitter_location - offset).normalize_or_zero();
    let angle = FRAC_PI_2 - to_fireworks.dot(DVec3::Z).clamp(-1.0, 1.0).acos();
    CameraPose::look_at_transform(offset).look_up(angle)
}

/// Pose at `destination`, expressed in the frame `launch_frame` maps from.
/// `heading` turns clockwise from north, `pitch` is positive upwards.
pub fn fly_to_pose(
    launch_frame: DMat4,
    destination: Cartographic,
    heading: f64,
    pitch: f64,
) -> CameraPose {
    let position = destination.to_cartesian();
    let enu = geo::east_north_up_to_fixed_frame(position);

    let (sin_h, cos_h) = heading.sin_cos();
    let (sin_p, cos_p) = pitch.sin_cos();
    let local = CameraPose {
        position: DVec3::ZERO,
        direction: DVec3::new(sin_h * cos_p, cos_h * cos_p, sin_p),
        up: DVec3::new(-sin_h * sin_p, -cos_h * sin_p, cos_p),
    };

    local.transformed(launch_frame.inverse() * enu)
}
