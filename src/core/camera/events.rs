use bevy::prelude::*;
use pyrotechnics::camera::CameraPose;

/// Fly the main camera to a pose given in the launch frame.
#[derive(Message, Debug, Clone, Copy)]
pub struct FlyToPoseEvent {
    pub pose: CameraPose,
}
