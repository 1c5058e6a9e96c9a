use crate::globe::resources::RenderFrame;
use crate::scenery::resources::Viewpoints;
use bevy::log::{error, info};
use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task, block_on, futures_lite::future};
use pyrotechnics::scenery::{SCENERY_FILE, Scenery, SceneryError};

#[derive(Component)]
pub struct SceneryLoadTask(Task<Result<Scenery, SceneryError>>);

pub fn start_scenery_load(mut commands: Commands) {
    let task = IoTaskPool::get().spawn(async move { Scenery::load_from_file(SCENERY_FILE) });
    commands.spawn(SceneryLoadTask(task));
}

/// Picks up the finished load. A failure is logged and the viewer carries
/// on with the viewpoints it already has.
pub fn poll_scenery_load(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SceneryLoadTask)>,
    frame: Res<RenderFrame>,
    mut viewpoints: ResMut<Viewpoints>,
) {
    for (entity, mut task) in &mut tasks {
        let Some(result) = block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        match result {
            Ok(scenery) => {
                viewpoints.add_scenery(&scenery, frame.launch_frame);
                info!("Loaded {} scenery viewpoints", scenery.viewpoints.len());
            }
            Err(e) => error!("Scenery not loaded: {e}"),
        }
        commands.entity(entity).despawn();
    }
}
