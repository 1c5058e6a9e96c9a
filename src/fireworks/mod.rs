pub mod events;
pub mod logic;
pub mod resources;
mod systems;

use crate::core::state::AppState;
use crate::fireworks::events::RestartShowEvent;
use crate::fireworks::resources::FireworkShow;
use crate::fireworks::systems::*;
use bevy::prelude::*;

/// Simulation rate; particle motion is integrated in fixed steps.
const SIMULATION_HZ: f64 = 60.0;

pub struct FireworksPlugin;

impl Plugin for FireworksPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(FireworkShow::new(pyrotechnics::get_config()))
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .add_message::<RestartShowEvent>()
            .add_systems(OnEnter(AppState::Show), launch_show)
            .add_systems(
                FixedUpdate,
                step_show.run_if(in_state(AppState::Show)),
            )
            .add_systems(
                Update,
                (handle_restart_events, draw_particles)
                    .chain()
                    .run_if(in_state(AppState::Show)),
            );
    }
}
