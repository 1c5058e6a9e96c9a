use crate::globe::components::{Globe, Sun};
use crate::globe::logic::globe_matrix;
use crate::globe::resources::RenderFrame;
use bevy::light::{DirectionalLight, light_consts};
use bevy::log::info;
use bevy::prelude::*;
use pyrotechnics::geo;

pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    frame: Res<RenderFrame>,
) {
    let mesh = Sphere::new(1.0).mesh().uv(256, 128);
    let transform = Transform::from_matrix(globe_matrix(frame.launch_frame, geo::radii()).as_mat4());

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.16, 0.3, 0.18),
            perceptual_roughness: 0.95,
            reflectance: 0.1,
            ..default()
        })),
        transform,
        Globe,
        Name::new("Globe"),
    ));

    // late evening sun low in the west
    commands.spawn((
        DirectionalLight {
            illuminance: light_consts::lux::AMBIENT_DAYLIGHT * 0.05,
            ..default()
        },
        Transform::from_xyz(-1.0, 0.15, 0.3).looking_at(Vec3::ZERO, Vec3::Y),
        Sun,
    ));

    info!("Globe spawned");
}
