pub mod components;
pub mod logic;
pub mod resources;
mod systems;

use crate::globe::resources::RenderFrame;
use crate::globe::systems::*;
use bevy::prelude::*;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        let config = pyrotechnics::get_config();
        app.insert_resource(RenderFrame::from_config(&config))
            .add_systems(Startup, spawn_globe);
    }
}
