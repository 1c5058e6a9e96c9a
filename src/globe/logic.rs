use bevy::math::{DMat4, DVec3, DVec4, Vec3};
use bevy::prelude::Transform;
use pyrotechnics::camera::CameraPose;

/// Launch frame (east, north, up) to the renderer's Y-up axes:
/// east stays X, up becomes Y and north points down -Z.
pub const ENU_TO_RENDER: DMat4 = DMat4::from_cols(DVec4::X, DVec4::NEG_Z, DVec4::Y, DVec4::W);

pub fn enu_to_render(v: DVec3) -> DVec3 {
    DVec3::new(v.x, v.z, -v.y)
}

pub fn world_to_render_matrix(launch_frame: DMat4) -> DMat4 {
    ENU_TO_RENDER * launch_frame.inverse()
}

/// Scales a unit sphere into the ellipsoid with `radii` and places it in
/// render space.
pub fn globe_matrix(launch_frame: DMat4, radii: DVec3) -> DMat4 {
    world_to_render_matrix(launch_frame) * DMat4::from_scale(radii)
}

/// Render transform for a camera pose given in the launch frame.
pub fn pose_to_transform(pose: &CameraPose) -> Transform {
    let position = enu_to_render(pose.position).as_vec3();
    let direction = enu_to_render(pose.direction).as_vec3();
    let up = enu_to_render(pose.up).as_vec3();
    let transform = Transform::from_translation(position);
    if direction.cross(up).length_squared() < 1e-12 {
        return transform.looking_to(direction, Vec3::Y);
    }
    transform.looking_to(direction, up)
}
