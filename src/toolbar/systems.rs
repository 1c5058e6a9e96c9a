use crate::core::camera::events::FlyToPoseEvent;
use crate::fireworks::events::RestartShowEvent;
use crate::fireworks::resources::FireworkShow;
use crate::scenery::resources::Viewpoints;
use crate::toolbar::resources::ToolbarState;
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

pub fn render_toolbar(
    mut contexts: EguiContexts,
    mut state: ResMut<ToolbarState>,
    show: Res<FireworkShow>,
    viewpoints: Res<Viewpoints>,
    diagnostics: Res<DiagnosticsStore>,
    mut restart_events: MessageWriter<RestartShowEvent>,
    mut fly_to_events: MessageWriter<FlyToPoseEvent>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // a restart may have picked a new seed, show it in the field
    if state.launched_seed != show.seed() {
        state.launched_seed = show.seed();
        state.seed = show.seed();
    }

    egui::Window::new("Fireworks")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(true)
        .show(ctx, |ui| {
            if ui.button("Restart show").clicked() {
                restart_events.write(RestartShowEvent::default());
            }

            ui.horizontal(|ui| {
                ui.label("Seed");
                ui.add(egui::DragValue::new(&mut state.seed));
                if ui.button("Launch").clicked() {
                    restart_events.write(RestartShowEvent {
                        seed: Some(state.seed),
                    });
                }
                if ui.button("Random").clicked() {
                    state.seed = rand::random::<u32>() as u64;
                    restart_events.write(RestartShowEvent {
                        seed: Some(state.seed),
                    });
                }
            });

            ui.add_space(6.0);

            let selected = state.selected_viewpoint.min(viewpoints.entries.len() - 1);
            egui::ComboBox::from_label("View")
                .selected_text(viewpoints.entries[selected].name.as_str())
                .show_ui(ui, |ui| {
                    for (i, entry) in viewpoints.entries.iter().enumerate() {
                        if ui
                            .selectable_value(&mut state.selected_viewpoint, i, entry.name.as_str())
                            .clicked()
                        {
                            fly_to_events.write(FlyToPoseEvent { pose: entry.pose });
                        }
                    }
                });

            ui.add_space(6.0);
            ui.separator();

            ui.label(format!(
                "Emitters: {}   Particles: {}",
                show.scene.len(),
                show.scene.live_particles()
            ));
            if show.report.failures() > 0 {
                ui.colored_label(
                    egui::Color32::LIGHT_RED,
                    format!("{} fireworks failed to launch", show.report.failures()),
                );
            }

            ui.checkbox(&mut state.show_fps, "Show FPS");
            if state.show_fps {
                let fps = diagnostics
                    .get(&FrameTimeDiagnosticsPlugin::FPS)
                    .and_then(|fps| fps.smoothed());
                match fps {
                    Some(fps) => ui.label(format!("{fps:.0} FPS")),
                    None => ui.label("FPS: measuring"),
                };
            }
        });
}
