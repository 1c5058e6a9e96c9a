pub mod resources;
mod systems;

use crate::scenery::resources::Viewpoints;
use crate::scenery::systems::*;
use bevy::prelude::*;

pub struct SceneryPlugin;

impl Plugin for SceneryPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Viewpoints::new(&pyrotechnics::get_config()))
            .add_systems(Startup, start_scenery_load)
            .add_systems(Update, poll_scenery_load);
    }
}
