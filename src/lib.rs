mod core;
mod fireworks;
mod globe;
mod scenery;
mod toolbar;

use crate::core::camera::CameraPlugin;
use crate::core::state::AppState;
use crate::fireworks::FireworksPlugin;
use crate::globe::GlobePlugin;
use crate::scenery::SceneryPlugin;
use crate::toolbar::ToolbarPlugin;
use bevy::app::App;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_plugins((
                EguiPlugin::default(),
                FrameTimeDiagnosticsPlugin::default(),
                GlobePlugin,
                CameraPlugin,
                FireworksPlugin,
                SceneryPlugin,
                ToolbarPlugin,
            ))
            .add_systems(OnEnter(AppState::Loading), transition_to_show_after_loading);

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}

// globe and camera are spawned at startup, nothing else to wait for
fn transition_to_show_after_loading(mut next_state: ResMut<NextState<AppState>>) {
    next_state.set(AppState::Show);
}
