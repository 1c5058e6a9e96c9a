pub mod resources;
mod systems;

use crate::core::state::AppState;
use crate::toolbar::resources::ToolbarState;
use crate::toolbar::systems::*;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct ToolbarPlugin;

impl Plugin for ToolbarPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ToolbarState::new(pyrotechnics::get_config().show.seed))
            .add_systems(
                EguiPrimaryContextPass,
                render_toolbar.run_if(in_state(AppState::Show)),
            );
    }
}
