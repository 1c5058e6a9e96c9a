use crate::core::camera::components::{CameraFlight, MainCamera};
use crate::core::camera::events::FlyToPoseEvent;
use crate::core::camera::logic::*;
use crate::core::camera::resources::CameraSettings;
use crate::globe::resources::RenderFrame;
use crate::scenery::resources::Viewpoints;
use bevy::input::ButtonInput;
use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::log::info;
use bevy::prelude::*;

pub fn spawn_camera(mut commands: Commands, frame: Res<RenderFrame>, viewpoints: Res<Viewpoints>) {
    let pose = viewpoints.default_entry().pose;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            near: 0.5,
            far: 4.0e7,
            ..default()
        }),
        frame.pose_transform(&pose),
        MainCamera,
        CameraFlight::default(),
    ));

    info!("Camera spawned at the launch view");
}

pub fn camera_control(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    time: Res<Time>,
    settings: Res<CameraSettings>,
    mut camera_q: Query<(&mut Transform, &CameraFlight), With<MainCamera>>,
) {
    let Ok((mut transform, flight)) = camera_q.single_mut() else {
        return;
    };

    let mut total_mouse_delta = Vec3::ZERO;
    for ev in mouse_motion.read() {
        total_mouse_delta.x += ev.delta.x;
        total_mouse_delta.y += ev.delta.y;
    }

    let mut total_wheel_delta = 0.0;
    for ev in mouse_wheel.read() {
        total_wheel_delta += ev.y;
    }

    if flight.is_flying {
        return;
    }

    let input = CameraInput {
        move_forward: keyboard_input.pressed(KeyCode::KeyW),
        move_backward: keyboard_input.pressed(KeyCode::KeyS),
        move_left: keyboard_input.pressed(KeyCode::KeyA),
        move_right: keyboard_input.pressed(KeyCode::KeyD),
        move_up: keyboard_input.pressed(KeyCode::KeyE),
        move_down: keyboard_input.pressed(KeyCode::KeyQ),
        sprint: keyboard_input.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        mouse_right_pressed: mouse_input.pressed(MouseButton::Right),
        mouse_delta: total_mouse_delta,
        mouse_wheel_delta: total_wheel_delta,
    };

    let update = calculate_camera_transform(
        transform.translation,
        transform.rotation,
        &input,
        settings.move_speed(),
        time.delta_secs(),
    );

    transform.translation = update.translation;
    transform.rotation = update.rotation;
}

pub fn handle_fly_to_events(
    mut events: MessageReader<FlyToPoseEvent>,
    frame: Res<RenderFrame>,
    settings: Res<CameraSettings>,
    mut camera_q: Query<(&Transform, &mut CameraFlight), With<MainCamera>>,
) {
    let Ok((transform, mut flight)) = camera_q.single_mut() else {
        return;
    };

    // only the latest request matters
    let Some(event) = events.read().last() else {
        return;
    };

    let target = frame.pose_transform(&event.pose);
    let distance = transform.translation.distance(target.translation);
    let duration = flight_duration(distance, settings.flight_duration());
    flight.begin(transform, &target, duration);

    info!("Camera flying {:.0} m in {duration:.1} s", distance);
}

pub fn smooth_camera_flight(
    time: Res<Time>,
    frame: Res<RenderFrame>,
    mut camera_q: Query<(&mut Transform, &mut CameraFlight), With<MainCamera>>,
) {
    let Ok((mut transform, mut flight)) = camera_q.single_mut() else {
        return;
    };
    if !flight.is_flying {
        return;
    }

    flight.elapsed += time.delta_secs();
    let progress = flight_progress(flight.elapsed, flight.duration);

    transform.translation = flight_position(
        flight.start_translation,
        flight.target_translation,
        frame.globe_center(),
        progress,
    );
    transform.rotation = flight_rotation(flight.start_rotation, flight.target_rotation, progress);

    if progress >= 1.0 {
        // snap to avoid drift from the arc math
        transform.translation = flight.target_translation;
        transform.rotation = flight.target_rotation;
        flight.is_flying = false;
    }
}
