use crate::particle::Particle;
use glam::{DMat4, DVec3};

/// Per-step velocity modifier run on every live particle of a system.
pub trait ParticleForce: Send + Sync {
    fn apply(&self, particle: &mut Particle, dt: f64);
}

/// Freezes particles once they leave a sphere around the emitter.
///
/// The particle position is moved into the emitter's local frame; if its
/// squared norm reaches `radius²` the velocity is zeroed. Particles are
/// not removed, they coast in place until their life runs out.
#[derive(Debug, Clone, Copy)]
pub struct ContainmentForce {
    pub radius: f64,
    pub world_to_emitter: DMat4,
}

impl ContainmentForce {
    /// `emitter_to_world` is the full placement of the emitter.
    pub fn new(radius: f64, emitter_to_world: DMat4) -> Self {
        Self {
            radius,
            world_to_emitter: emitter_to_world.inverse(),
        }
    }

    pub fn is_outside(&self, world_position: DVec3) -> bool {
        let local = self.world_to_emitter.transform_point3(world_position);
        local.length_squared() >= self.radius * self.radius
    }
}

impl ParticleForce for ContainmentForce {
    fn apply(&self, particle: &mut Particle, _dt: f64) {
        if self.is_outside(particle.position) {
            particle.velocity = DVec3::ZERO;
        }
    }
}
