use bevy::prelude::Resource;
use pyrotechnics::config::CameraConfig;

/// Camera section of the config, read once when the plugin is built.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CameraSettings(pub CameraConfig);

impl CameraSettings {
    pub fn move_speed(&self) -> f32 {
        self.0.move_speed
    }

    pub fn flight_duration(&self) -> f32 {
        self.0.flight_duration
    }
}
