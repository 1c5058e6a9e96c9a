use crate::color::Rgba;
use crate::force::ParticleForce;
use glam::{DVec2, DVec3};

/// A single simulated particle. Position and velocity are earth-fixed.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: DVec3,
    pub velocity: DVec3,
    /// Seconds the particle lives for, fading from start to end color.
    pub life: f64,
    pub start_color: Rgba,
    pub end_color: Rgba,
    /// Width and height in pixels.
    pub image_size: DVec2,
    age: f64,
    normalized_age: f64,
}

impl Particle {
    pub fn new(position: DVec3, velocity: DVec3, life: f64) -> Self {
        Self {
            position,
            velocity,
            life,
            start_color: Rgba::WHITE,
            end_color: Rgba::WHITE,
            image_size: DVec2::ONE,
            age: 0.0,
            normalized_age: 0.0,
        }
    }

    pub fn normalized_age(&self) -> f64 {
        self.normalized_age
    }

    /// Integrates the particle over `dt`, then applies every force.
    /// Returns whether the particle is still alive.
    pub fn update(&mut self, dt: f64, forces: &[Box<dyn ParticleForce>]) -> bool {
        self.position += self.velocity * dt;
        for force in forces {
            force.apply(self, dt);
        }

        self.age += dt;
        self.normalized_age = if self.life > 0.0 { self.age / self.life } else { 1.0 };
        self.age <= self.life
    }

    pub fn color(&self) -> Rgba {
        self.start_color.lerp(self.end_color, self.normalized_age as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Brake;

    impl ParticleForce for Brake {
        fn apply(&self, particle: &mut Particle, _dt: f64) {
            particle.velocity *= 0.5;
        }
    }

    #[test]
    fn update_moves_then_applies_forces() {
        let mut particle = Particle::new(DVec3::ZERO, DVec3::X * 10.0, 1.0);
        let forces: Vec<Box<dyn ParticleForce>> = vec![Box::new(Brake)];

        assert!(particle.update(0.1, &forces));
        assert!((particle.position - DVec3::X).length() < 1e-12);
        assert!((particle.velocity - DVec3::X * 5.0).length() < 1e-12);
    }

    #[test]
    fn dies_after_life() {
        let mut particle = Particle::new(DVec3::ZERO, DVec3::ZERO, 0.3);
        assert!(particle.update(0.2, &[]));
        assert!(!particle.update(0.2, &[]));
        assert!(particle.normalized_age() > 1.0);
    }

    #[test]
    fn color_fades_with_age() {
        let mut particle = Particle::new(DVec3::ZERO, DVec3::ZERO, 1.0);
        particle.start_color = Rgba::new(0.0, 0.9, 1.0, 1.0);
        particle.end_color = particle.start_color.with_alpha(0.0);

        particle.update(0.25, &[]);
        assert!((particle.color().alpha - 0.75).abs() < 1e-6);
        assert_eq!(particle.color().green, 0.9);
    }
}
