//! Firework show layout: places emitters around a launch site, picks their
//! colors and burst times, and registers them with a particle scene.
//!
//! Random draws happen in a fixed order per firework (offset, color,
//! bursts, explosion size), so a given seed always yields the same show.

use crate::burst::{ParticleBurst, schedule_bursts};
use crate::color::{Rgba, palette_for};
use crate::config::FireworksConfig;
use crate::emitter::{EmitterShape, ParticleImage};
use crate::force::ContainmentForce;
use crate::geo;
use crate::random::RandomSource;
use crate::scene::{EmitterId, ParticleScene, SceneError};
use crate::system::ParticleSystemOptions;
use glam::{DMat4, DVec2, DVec3};

/// Per-particle life for an explosion of `radius`, interpolated linearly so
/// bigger explosions fade slower.
pub fn explosion_life(radius: f64, config: &FireworksConfig) -> f64 {
    let explosion = &config.explosion;
    let span = explosion.maximum_size - explosion.minimum_size;
    let normal_size = if span > 0.0 {
        (radius - explosion.minimum_size) / span
    } else {
        0.0
    };
    normal_size * (explosion.maximum_life - explosion.minimum_life) + explosion.minimum_life
}

/// One registered (or attempted) firework.
#[derive(Debug, Clone)]
pub struct Firework {
    pub offset: DVec3,
    pub color: Rgba,
    pub end_color: Rgba,
    pub explosion_radius: f64,
    pub life: f64,
    pub lifetime: f64,
    pub bursts: Vec<ParticleBurst>,
    pub outcome: Result<EmitterId, SceneError>,
}

#[derive(Debug, Default)]
pub struct ShowReport {
    pub fireworks: Vec<Firework>,
}

impl ShowReport {
    pub fn registered(&self) -> impl Iterator<Item = &Firework> {
        self.fireworks.iter().filter(|f| f.outcome.is_ok())
    }

    pub fn failures(&self) -> usize {
        self.fireworks.iter().filter(|f| f.outcome.is_err()).count()
    }
}

pub struct Choreographer {
    config: FireworksConfig,
    launch_frame: DMat4,
    rng: RandomSource,
}

impl Choreographer {
    pub fn new(config: FireworksConfig) -> Self {
        let launch = &config.launch;
        let origin = geo::from_degrees(launch.longitude, launch.latitude, launch.height);
        let launch_frame = geo::east_north_up_to_fixed_frame(origin);
        let rng = RandomSource::new(config.show.seed);
        Self {
            config,
            launch_frame,
            rng,
        }
    }

    pub fn config(&self) -> &FireworksConfig {
        &self.config
    }

    /// Launch site east-north-up frame to earth-fixed.
    pub fn launch_frame(&self) -> DMat4 {
        self.launch_frame
    }

    pub fn emitter_location(&self) -> DVec3 {
        DVec3::from_array(self.config.launch.emitter_location)
    }

    /// Restarts the random sequence; the next show replays from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.show.seed = seed;
        self.rng.set_seed(seed);
    }

    /// Builds one firework `offset` meters away from the emitter location
    /// and registers it with `scene`. Inputs are passed through untouched;
    /// any rejection comes from the scene.
    pub fn create_firework(
        &mut self,
        scene: &mut impl ParticleScene,
        offset: DVec3,
        color: Rgba,
        bursts: Vec<ParticleBurst>,
    ) -> Firework {
        let position = self.emitter_location() + offset;
        let emitter_model_matrix = DMat4::from_translation(position);
        let particle_to_world = self.launch_frame * emitter_model_matrix;

        let explosion = &self.config.explosion;
        let radius = self
            .rng
            .random_between(explosion.minimum_size, explosion.maximum_size);
        let life = explosion_life(radius, &self.config);

        let emitter = &self.config.emitter;
        let end_color = color.with_alpha(0.0);
        let options = ParticleSystemOptions {
            image: ParticleImage::FIREWORK,
            start_color: color,
            end_color,
            life,
            speed: emitter.speed,
            image_size: DVec2::splat(emitter.particle_pixel_size),
            emission_rate: emitter.emission_rate,
            emitter: EmitterShape::Sphere {
                radius: emitter.sphere_radius,
            },
            bursts: bursts.clone(),
            lifetime: self.config.show.lifetime,
            forces: vec![Box::new(ContainmentForce::new(radius, particle_to_world))],
            model_matrix: self.launch_frame,
            emitter_model_matrix,
            looping: emitter.looping,
        };

        Firework {
            offset,
            color,
            end_color,
            explosion_radius: radius,
            life,
            lifetime: self.config.show.lifetime,
            bursts,
            outcome: scene.add(options),
        }
    }

    /// Lays out and registers the whole show. A firework the scene rejects
    /// is logged and skipped; the rest still go up.
    pub fn launch_show(&mut self, scene: &mut impl ParticleScene) -> ShowReport {
        let show = self.config.show.clone();
        let bounds = self.config.bounds.clone();
        let mut report = ShowReport::default();

        for i in 0..show.number_of_fireworks {
            let (x, y, z) = (bounds.x_range(), bounds.y_range(), bounds.z_range());
            let offset = DVec3::new(
                self.rng.random_between(x.start, x.end),
                self.rng.random_between(y.start, y.end),
                self.rng.random_between(z.start, z.end),
            );
            let color = palette_for(i).sample(&mut self.rng);
            let bursts = schedule_bursts(
                &mut self.rng,
                show.bursts_per_firework,
                show.lifetime,
                show.burst_size,
            );

            let firework = self.create_firework(scene, offset, color, bursts);
            if let Err(e) = &firework.outcome {
                log::error!("Firework {i} was not registered: {e}");
            }
            report.fireworks.push(firework);
        }

        log::info!(
            "Firework show laid out: {} registered, {} failed (seed {})",
            report.registered().count(),
            report.failures(),
            show.seed
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{SHOW_PALETTES, palette_index};
    use crate::scene::ParticleSystemCollection;
    use rstest::rstest;

    /// Scene that refuses every third registration.
    struct FlakyScene {
        inner: ParticleSystemCollection,
        attempts: usize,
    }

    impl ParticleScene for FlakyScene {
        fn add(&mut self, options: ParticleSystemOptions) -> Result<EmitterId, SceneError> {
            self.attempts += 1;
            if self.attempts % 3 == 0 {
                return Err(SceneError::InvalidGeometry("refused".into()));
            }
            self.inner.add(options)
        }
    }

    fn run_default_show() -> (ShowReport, ParticleSystemCollection) {
        let mut scene = ParticleSystemCollection::new(1);
        let mut choreographer = Choreographer::new(FireworksConfig::default());
        let report = choreographer.launch_show(&mut scene);
        (report, scene)
    }

    #[rstest]
    #[case(30.0, 0.3)]
    #[case(65.0, 0.65)]
    #[case(100.0, 1.0)]
    fn life_interpolates_between_bounds(#[case] radius: f64, #[case] expected: f64) {
        let life = explosion_life(radius, &FireworksConfig::default());
        assert!((life - expected).abs() < 1e-12, "life {life} for radius {radius}");
    }

    #[test]
    fn life_is_bounded_and_monotone() {
        let config = FireworksConfig::default();
        let mut previous = f64::MIN;
        for step in 0..=700 {
            let radius = 30.0 + step as f64 * 0.1;
            let life = explosion_life(radius, &config);
            assert!((0.3 - 1e-12..=1.0 + 1e-12).contains(&life));
            assert!(life >= previous);
            previous = life;
        }
    }

    #[test]
    fn default_show_registers_twenty_fireworks() {
        let (report, scene) = run_default_show();

        assert_eq!(report.fireworks.len(), 20);
        assert_eq!(report.failures(), 0);
        assert_eq!(scene.len(), 20);

        let ids: Vec<_> = report.registered().map(|f| *f.outcome.as_ref().unwrap()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 20);

        for (_, system) in scene.iter() {
            assert_eq!(system.lifetime(), 10.0);
            assert_eq!(system.options().emission_rate, 0.0);
        }
    }

    #[test]
    fn offsets_are_distinct_and_inside_bounds() {
        let (report, _) = run_default_show();

        for (i, a) in report.fireworks.iter().enumerate() {
            assert!((-100.0..100.0).contains(&a.offset.x));
            assert!((-80.0..100.0).contains(&a.offset.y));
            assert!((-50.0..50.0).contains(&a.offset.z));
            for b in &report.fireworks[i + 1..] {
                assert_ne!(a.offset, b.offset);
            }
        }
    }

    #[test]
    fn configured_bounds_limit_offsets() {
        let mut config = FireworksConfig::default();
        config.bounds.x = [10.0, 20.0];
        config.bounds.y = [-5.0, 5.0];
        config.bounds.z = [0.0, 1.0];
        let mut scene = ParticleSystemCollection::new(1);

        let report = Choreographer::new(config.clone()).launch_show(&mut scene);

        for firework in &report.fireworks {
            assert!(config.bounds.x_range().contains(&firework.offset.x));
            assert!(config.bounds.y_range().contains(&firework.offset.y));
            assert!(config.bounds.z_range().contains(&firework.offset.z));
        }
    }

    #[test]
    fn every_firework_gets_three_fixed_bursts() {
        let (report, _) = run_default_show();

        for firework in &report.fireworks {
            assert_eq!(firework.bursts.len(), 3);
            for burst in &firework.bursts {
                assert!(burst.time >= 0.0 && burst.time < 10.0);
                assert_eq!(burst.minimum, 400.0);
                assert_eq!(burst.maximum, 400.0);
            }
        }
    }

    #[test]
    fn colors_follow_cycled_palettes() {
        let (report, _) = run_default_show();

        for (i, firework) in report.fireworks.iter().enumerate() {
            let palette = &SHOW_PALETTES[palette_index(i)];
            assert!(palette.admits(firework.color));
            assert_eq!(firework.end_color, firework.color.with_alpha(0.0));
        }
    }

    #[test]
    fn explosion_radius_and_life_are_consistent() {
        let (report, _) = run_default_show();
        let config = FireworksConfig::default();

        for firework in &report.fireworks {
            assert!((30.0..100.0).contains(&firework.explosion_radius));
            assert_eq!(firework.life, explosion_life(firework.explosion_radius, &config));
            assert_eq!(firework.lifetime, 10.0);
        }
    }

    #[test]
    fn same_seed_replays_the_show() {
        let (a, _) = run_default_show();
        let (b, _) = run_default_show();

        for (x, y) in a.fireworks.iter().zip(&b.fireworks) {
            assert_eq!(x.offset, y.offset);
            assert_eq!(x.color, y.color);
            assert_eq!(x.bursts, y.bursts);
            assert_eq!(x.explosion_radius, y.explosion_radius);
        }
    }

    #[test]
    fn reseed_changes_and_restores_the_show() {
        let mut scene = ParticleSystemCollection::new(1);
        let mut choreographer = Choreographer::new(FireworksConfig::default());
        let first = choreographer.launch_show(&mut scene);

        choreographer.reseed(316);
        let other = choreographer.launch_show(&mut scene);
        assert_ne!(first.fireworks[0].offset, other.fireworks[0].offset);

        choreographer.reseed(315);
        let again = choreographer.launch_show(&mut scene);
        assert_eq!(first.fireworks[0].offset, again.fireworks[0].offset);
    }

    #[test]
    fn failures_do_not_block_other_fireworks() {
        let mut scene = FlakyScene {
            inner: ParticleSystemCollection::new(1),
            attempts: 0,
        };
        let mut choreographer = Choreographer::new(FireworksConfig::default());

        let report = choreographer.launch_show(&mut scene);

        assert_eq!(report.fireworks.len(), 20);
        assert_eq!(report.failures(), 6);
        assert_eq!(scene.inner.len(), 14);
    }

    #[test]
    fn emitters_sit_at_offset_from_launch_location() {
        let mut scene = ParticleSystemCollection::new(1);
        let mut choreographer = Choreographer::new(FireworksConfig::default());
        let report = choreographer.launch_show(&mut scene);
        let launch = choreographer.launch_frame();

        for firework in report.registered() {
            let id = *firework.outcome.as_ref().unwrap();
            let system = scene.get(id).unwrap();
            let expected = launch.transform_point3(DVec3::new(0.0, 0.0, 100.0) + firework.offset);
            let actual = system.emitter_to_world().transform_point3(DVec3::ZERO);
            assert!((expected - actual).length() < 1e-6);
        }
    }

    #[test]
    fn show_particles_stay_near_their_explosion_radius() {
        let (report, mut scene) = run_default_show();
        let dt = 1.0 / 60.0;

        for _ in 0..(12.0 / dt) as usize {
            scene.update(dt);
        }

        for firework in report.registered() {
            let system = scene.get(*firework.outcome.as_ref().unwrap()).unwrap();
            let world_to_emitter = system.emitter_to_world().inverse();
            for particle in system.particles() {
                let distance = world_to_emitter.transform_point3(particle.position).length();
                // one integration step of overshoot at most
                assert!(distance < firework.explosion_radius + 100.0 * dt + 0.2);
            }
        }
    }
}
