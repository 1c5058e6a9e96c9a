use bevy::prelude::*;

#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct MainCamera;

/// Smooth fly-to toward a stored camera transform. Free-flight input is
/// ignored while `is_flying` is set.
#[derive(Component, Reflect, Default)]
#[reflect(Component)]
pub struct CameraFlight {
    pub start_translation: Vec3,
    pub start_rotation: Quat,
    pub target_translation: Vec3,
    pub target_rotation: Quat,
    pub elapsed: f32,
    pub duration: f32,
    pub is_flying: bool,
}

impl CameraFlight {
    pub fn begin(&mut self, from: &Transform, to: &Transform, duration: f32) {
        self.start_translation = from.translation;
        self.start_rotation = from.rotation;
        self.target_translation = to.translation;
        self.target_rotation = to.rotation;
        self.elapsed = 0.0;
        self.duration = duration;
        self.is_flying = true;
    }
}
