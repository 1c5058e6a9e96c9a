pub(crate) mod components;
pub(crate) mod events;
mod logic;
pub(crate) mod resources;
mod systems;

use crate::core::camera::components::*;
use crate::core::camera::events::FlyToPoseEvent;
use crate::core::camera::resources::CameraSettings;
use crate::core::camera::systems::*;
use bevy::prelude::*;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(CameraSettings(pyrotechnics::get_config().camera))
            .register_type::<MainCamera>()
            .register_type::<CameraFlight>()
            .add_message::<FlyToPoseEvent>()
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (camera_control, handle_fly_to_events, smooth_camera_flight).chain(),
            );
    }
}
