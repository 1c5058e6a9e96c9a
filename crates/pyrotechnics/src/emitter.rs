use crate::random::RandomSource;
use glam::DVec3;
use std::f64::consts::{PI, TAU};

/// Where new particles appear in the emitter's local frame and which way
/// they head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmitterShape {
    Sphere { radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emission {
    pub position: DVec3,
    pub direction: DVec3,
}

impl EmitterShape {
    pub fn emit(&self, rng: &mut RandomSource) -> Emission {
        match *self {
            EmitterShape::Sphere { radius } => {
                let theta = rng.random_between(0.0, TAU);
                let phi = rng.random_between(0.0, PI);
                let r = rng.random_between(0.0, radius);

                let position = DVec3::new(
                    r * theta.cos() * phi.sin(),
                    r * theta.sin() * phi.sin(),
                    r * phi.cos(),
                );
                Emission {
                    position,
                    direction: position.normalize_or_zero(),
                }
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            EmitterShape::Sphere { radius } => radius.is_finite() && radius >= 0.0,
        }
    }
}

/// Particle sprite: a filled disc drawn on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleImage {
    pub canvas_size: u32,
    pub disc_radius: f32,
}

impl ParticleImage {
    pub const FIREWORK: ParticleImage = ParticleImage {
        canvas_size: 20,
        disc_radius: 8.0,
    };

    /// Share of the canvas edge covered by the disc diameter.
    pub fn fill_ratio(&self) -> f32 {
        if self.canvas_size == 0 {
            return 0.0;
        }
        (2.0 * self.disc_radius / self.canvas_size as f32).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_emissions_stay_inside_radius() {
        let shape = EmitterShape::Sphere { radius: 0.1 };
        let mut rng = RandomSource::new(315);
        for _ in 0..500 {
            let emission = shape.emit(&mut rng);
            assert!(emission.position.length() <= 0.1 + 1e-12);
            let len = emission.direction.length();
            assert!(len == 0.0 || (len - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn direction_points_away_from_center() {
        let shape = EmitterShape::Sphere { radius: 2.0 };
        let mut rng = RandomSource::new(9);
        for _ in 0..100 {
            let emission = shape.emit(&mut rng);
            if emission.position.length() > 1e-9 {
                assert!(emission.position.dot(emission.direction) > 0.0);
            }
        }
    }

    #[test]
    fn firework_sprite_fill() {
        assert!((ParticleImage::FIREWORK.fill_ratio() - 0.8).abs() < 1e-6);
    }
}
