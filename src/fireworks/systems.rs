use crate::core::camera::components::MainCamera;
use crate::fireworks::events::RestartShowEvent;
use crate::fireworks::logic::{particle_radius, to_bevy_color};
use crate::fireworks::resources::FireworkShow;
use crate::globe::resources::RenderFrame;
use bevy::log::{info, warn};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub fn launch_show(mut show: ResMut<FireworkShow>) {
    let report = show.launch();
    info!(
        "Show launched with {} fireworks ({} rejected)",
        report.registered().count(),
        report.failures()
    );
}

pub fn handle_restart_events(
    mut events: MessageReader<RestartShowEvent>,
    mut show: ResMut<FireworkShow>,
) {
    let Some(event) = events.read().last().copied() else {
        return;
    };

    if let Err(e) = pyrotechnics::reload_config() {
        warn!("Keeping previous fireworks config: {e}");
    }
    let config = pyrotechnics::get_config();
    if show.placement_changed(&config) {
        warn!("Launch site and camera changes apply after a restart of the viewer");
    }
    let report = show.restart(config, event.seed);
    info!(
        "Show restarted with {} fireworks ({} rejected)",
        report.registered().count(),
        report.failures()
    );
}

pub fn step_show(time: Res<Time>, mut show: ResMut<FireworkShow>) {
    show.scene.update(time.delta_secs_f64());
}

pub fn draw_particles(
    mut gizmos: Gizmos,
    show: Res<FireworkShow>,
    frame: Res<RenderFrame>,
    camera_q: Query<(&GlobalTransform, &Projection), With<MainCamera>>,
    window_q: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok((camera_transform, projection)) = camera_q.single() else {
        return;
    };
    let Ok(window) = window_q.single() else {
        return;
    };
    let Projection::Perspective(perspective) = projection else {
        return;
    };

    let camera_position = camera_transform.translation();
    let facing = camera_transform.rotation();
    let viewport_height = window.height();

    for (_, system) in show.scene.iter() {
        let options = system.options();
        let fill_ratio = options.image.fill_ratio();
        for particle in system.particles() {
            let position = frame.world_point(particle.position);
            let radius = particle_radius(
                particle.image_size.y as f32,
                fill_ratio,
                position.distance(camera_position),
                perspective.fov,
                viewport_height,
            );
            if radius <= 0.0 {
                continue;
            }

            gizmos
                .circle(Isometry3d::new(position, facing), radius, to_bevy_color(particle.color()))
                .resolution(8);
        }
    }
}
