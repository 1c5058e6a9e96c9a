use crate::random::RandomSource;
use crate::system::{ParticleSystem, ParticleSystemOptions};

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("color channels must be finite")]
    InvalidColor,
    #[error("invalid value {value} for {name}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("scene is full ({0} particle systems)")]
    CapacityExceeded(usize),
}

/// Handle of a particle system registered with a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterId(pub usize);

/// Anything that accepts particle systems for simulation and display.
pub trait ParticleScene {
    fn add(&mut self, options: ParticleSystemOptions) -> Result<EmitterId, SceneError>;
}

/// In-memory scene that owns and steps its particle systems.
pub struct ParticleSystemCollection {
    systems: Vec<ParticleSystem>,
    rng: RandomSource,
    capacity: Option<usize>,
}

impl ParticleSystemCollection {
    /// `seed` drives particle emission, independent of the show layout.
    pub fn new(seed: u64) -> Self {
        Self {
            systems: Vec::new(),
            rng: RandomSource::new(seed),
            capacity: None,
        }
    }

    pub fn with_capacity_limit(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn get(&self, id: EmitterId) -> Option<&ParticleSystem> {
        self.systems.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmitterId, &ParticleSystem)> {
        self.systems.iter().enumerate().map(|(i, system)| (EmitterId(i), system))
    }

    pub fn live_particles(&self) -> usize {
        self.systems.iter().map(|system| system.particles().len()).sum()
    }

    pub fn update(&mut self, dt: f64) {
        for system in &mut self.systems {
            system.update(dt, &mut self.rng);
        }
    }

    pub fn clear(&mut self) {
        self.systems.clear();
    }

    /// Drops every system and restarts emission randomness from `seed`.
    pub fn reset(&mut self, seed: u64) {
        self.clear();
        self.rng.set_seed(seed);
    }
}

impl ParticleScene for ParticleSystemCollection {
    fn add(&mut self, options: ParticleSystemOptions) -> Result<EmitterId, SceneError> {
        if let Some(capacity) = self.capacity {
            if self.systems.len() >= capacity {
                return Err(SceneError::CapacityExceeded(capacity));
            }
        }
        let system = ParticleSystem::new(options)?;
        self.systems.push(system);
        Ok(EmitterId(self.systems.len() - 1))
    }
}
