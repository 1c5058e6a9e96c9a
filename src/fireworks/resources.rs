use bevy::prelude::Resource;
use pyrotechnics::choreographer::{Choreographer, ShowReport};
use pyrotechnics::config::FireworksConfig;
use pyrotechnics::scene::ParticleSystemCollection;
use pyrotechnics::tools::derive_seed;

/// Emission randomness runs on its own stream so the layout of a show does
/// not depend on how many frames were simulated.
const EMISSION_STREAM: u64 = 1;

/// Most emitters a show may register; extra fireworks are rejected.
pub const MAX_EMITTERS: usize = 256;

#[derive(Resource)]
pub struct FireworkShow {
    pub choreographer: Choreographer,
    pub scene: ParticleSystemCollection,
    pub report: ShowReport,
}

impl FireworkShow {
    pub fn new(config: FireworksConfig) -> Self {
        let seed = config.show.seed;
        Self {
            choreographer: Choreographer::new(config),
            scene: ParticleSystemCollection::new(derive_seed(seed, EMISSION_STREAM))
                .with_capacity_limit(MAX_EMITTERS),
            report: ShowReport::default(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.choreographer.config().show.seed
    }

    /// Drops the running show and lays out a fresh one.
    pub fn launch(&mut self) -> &ShowReport {
        let seed = self.seed();
        self.scene.reset(derive_seed(seed, EMISSION_STREAM));
        self.choreographer.reseed(seed);
        self.report = self.choreographer.launch_show(&mut self.scene);
        &self.report
    }

    /// Whether `config` moves the launch site or the camera. The render
    /// frame, globe and viewpoints are built once, so such changes only
    /// apply on the next start.
    pub fn placement_changed(&self, config: &FireworksConfig) -> bool {
        let current = self.choreographer.config();
        config.launch != current.launch || config.camera != current.camera
    }

    /// Replaces the show settings, optionally overriding the seed, and
    /// launches again. The launch site and camera stay as they are.
    pub fn restart(&mut self, mut config: FireworksConfig, seed: Option<u64>) -> &ShowReport {
        if let Some(seed) = seed {
            config.show.seed = seed;
        }
        let current = self.choreographer.config();
        config.launch = current.launch.clone();
        config.camera = current.camera.clone();
        self.choreographer = Choreographer::new(config);
        self.launch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::resources::RenderFrame;
    use bevy::math::DVec3;

    fn positions(show: &FireworkShow) -> Vec<[f64; 3]> {
        show.report.fireworks.iter().map(|f| f.offset.to_array()).collect()
    }

    #[test]
    fn launch_registers_whole_show() {
        let mut show = FireworkShow::new(FireworksConfig::default());
        let report = show.launch();

        assert_eq!(report.registered().count(), 20);
        assert_eq!(report.failures(), 0);
        assert_eq!(show.scene.len(), 20);
    }

    #[test]
    fn relaunch_replays_same_layout() {
        let mut show = FireworkShow::new(FireworksConfig::default());
        show.launch();
        let first = positions(&show);
        for _ in 0..30 {
            show.scene.update(1.0 / 60.0);
        }

        show.launch();

        assert_eq!(positions(&show), first);
        assert_eq!(show.scene.len(), 20);
        assert_eq!(show.scene.live_particles(), 0);
    }

    #[test]
    fn restart_with_seed_changes_layout() {
        let mut show = FireworkShow::new(FireworksConfig::default());
        show.launch();
        let first = positions(&show);

        show.restart(FireworksConfig::default(), Some(7));

        assert_eq!(show.seed(), 7);
        assert_ne!(positions(&show), first);
        assert_eq!(show.scene.len(), 20);
    }

    #[test]
    fn restart_uses_new_config() {
        let mut show = FireworkShow::new(FireworksConfig::default());
        show.launch();

        let mut config = FireworksConfig::default();
        config.show.number_of_fireworks = 4;
        show.restart(config, None);

        assert_eq!(show.scene.len(), 4);
        assert_eq!(show.seed(), 315);
    }

    #[test]
    fn restart_keeps_launch_site_and_camera() {
        let config = FireworksConfig::default();
        let frame = RenderFrame::from_config(&config);
        let mut show = FireworkShow::new(config.clone());
        show.launch();

        let mut moved = config.clone();
        moved.launch.longitude = -122.4175;
        moved.launch.latitude = 37.655;
        moved.camera.offset = [0.0, -500.0, 0.0];
        assert!(show.placement_changed(&moved));

        show.restart(moved, None);

        assert_eq!(show.choreographer.config().launch, config.launch);
        assert_eq!(show.choreographer.config().camera, config.camera);
        assert_eq!(show.choreographer.launch_frame(), frame.launch_frame);
        assert!(!show.placement_changed(&config));

        // every emitter still sits inside the bounds box above the render origin
        for (_, system) in show.scene.iter() {
            let emitter = frame.world_point(system.emitter_to_world().transform_point3(DVec3::ZERO));
            assert!(emitter.length() < 300.0, "{emitter:?}");
        }
    }

    #[test]
    fn show_settings_alone_are_not_a_placement_change() {
        let show = FireworkShow::new(FireworksConfig::default());
        let mut config = FireworksConfig::default();
        config.show.number_of_fireworks = 3;
        config.bounds.x = [-10.0, 10.0];

        assert!(!show.placement_changed(&config));
    }

    #[test]
    fn fireworks_beyond_capacity_are_rejected() {
        let mut config = FireworksConfig::default();
        config.show.number_of_fireworks = MAX_EMITTERS + 4;
        let mut show = FireworkShow::new(config);

        let report = show.launch();

        assert_eq!(report.registered().count(), MAX_EMITTERS);
        assert_eq!(report.failures(), 4);
        assert_eq!(show.scene.len(), MAX_EMITTERS);
    }
}
