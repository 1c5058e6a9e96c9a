use bevy::math::{DQuat, Quat, Vec3};

/// Flights shorter than this arc (radians from the globe center) travel in a
/// straight line.
const STRAIGHT_FLIGHT_ANGLE: f64 = 1e-4;

pub struct CameraInput {
    pub move_forward: bool,
    pub move_backward: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub sprint: bool,
    pub mouse_right_pressed: bool,
    pub mouse_delta: Vec3,
    pub mouse_wheel_delta: f32,
}

pub struct CameraTransformUpdate {
    pub translation: Vec3,
    pub rotation: Quat,
}

/// Free-flight camera step: WASD moves along the view, Q/E along the
/// world up axis, right-drag looks around, the wheel dollies.
/// `move_speed` is in meters per second.
pub fn calculate_camera_transform(
    current_translation: Vec3,
    current_rotation: Quat,
    input: &CameraInput,
    move_speed: f32,
    delta_time: f32,
) -> CameraTransformUpdate {
    let mut translation = current_translation;
    let mut rotation = current_rotation;

    let mut speed = move_speed;
    if input.sprint {
        speed *= 10.0;
    }

    let forward = rotation.mul_vec3(Vec3::NEG_Z);
    let right = rotation.mul_vec3(Vec3::X);
    let mut dir = Vec3::ZERO;

    if input.move_forward {
        dir += forward;
    }
    if input.move_backward {
        dir -= forward;
    }
    if input.move_left {
        dir -= right;
    }
    if input.move_right {
        dir += right;
    }
    if input.move_up {
        dir += Vec3::Y;
    }
    if input.move_down {
        dir -= Vec3::Y;
    }
    if dir.length_squared() > 0.0 {
        translation += dir.normalize() * speed * delta_time;
    }

    if input.mouse_right_pressed && input.mouse_delta.length_squared() > 0.0 {
        let yaw = Quat::from_rotation_y(-input.mouse_delta.x * 0.002);
        let pitch = Quat::from_rotation_x(-input.mouse_delta.y * 0.002);
        rotation = yaw * rotation * pitch;
    }

    // one wheel notch moves a tenth of a second's worth of travel
    if input.mouse_wheel_delta.abs() > 0.0 {
        translation += forward * input.mouse_wheel_delta * speed * 0.1;
    }

    CameraTransformUpdate {
        translation,
        rotation,
    }
}

/// Seconds a fly-to takes: one per thousand kilometers plus one, capped.
pub fn flight_duration(distance: f32, max_duration: f32) -> f32 {
    (1.0 + distance / 1_000_000.0).min(max_duration.max(0.0))
}

/// Eased flight progress for `elapsed` out of `duration` seconds.
pub fn flight_progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    let t = (elapsed / duration).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Camera position at `progress` along a flight from `start` to `end`.
/// Long flights follow an arc around `center` and rise above the straight
/// line so the camera never dives through the globe.
pub fn flight_position(start: Vec3, end: Vec3, center: Vec3, progress: f32) -> Vec3 {
    let s = progress.clamp(0.0, 1.0) as f64;
    let a = (start - center).as_dvec3();
    let b = (end - center).as_dvec3();
    let (length_a, length_b) = (a.length(), b.length());

    let axis = a.cross(b);
    let angle = a.angle_between(b);
    if length_a < 1.0 || length_b < 1.0 || angle < STRAIGHT_FLIGHT_ANGLE || axis.length() < 1e-9 {
        return start.lerp(end, s as f32);
    }

    let direction = DQuat::from_axis_angle(axis.normalize(), angle * s) * (a / length_a);
    let lift = 0.5 * angle * length_a.min(length_b) * 4.0 * s * (1.0 - s);
    let radius = length_a + (length_b - length_a) * s + lift;

    (center.as_dvec3() + direction * radius).as_vec3()
}

/// Camera orientation at `progress`, slerped between the two ends.
pub fn flight_rotation(start: Quat, end: Quat, progress: f32) -> Quat {
    start.slerp(end, progress.clamp(0.0, 1.0))
}
