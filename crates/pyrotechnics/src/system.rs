use crate::burst::ParticleBurst;
use crate::color::Rgba;
use crate::emitter::{EmitterShape, ParticleImage};
use crate::force::ParticleForce;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::scene::SceneError;
use glam::{DMat4, DVec2};

/// Everything needed to register a particle system with a scene.
pub struct ParticleSystemOptions {
    pub image: ParticleImage,
    pub start_color: Rgba,
    pub end_color: Rgba,
    /// Per-particle life in seconds.
    pub life: f64,
    pub speed: f64,
    /// Particle width and height in pixels.
    pub image_size: DVec2,
    /// Continuous emission in particles per second.
    pub emission_rate: f64,
    pub emitter: EmitterShape,
    pub bursts: Vec<ParticleBurst>,
    /// Duration of one run of the system in seconds.
    pub lifetime: f64,
    pub forces: Vec<Box<dyn ParticleForce>>,
    /// Places the system in the earth-fixed frame.
    pub model_matrix: DMat4,
    /// Places the emitter relative to `model_matrix`.
    pub emitter_model_matrix: DMat4,
    /// Restart from time zero once `lifetime` is reached.
    pub looping: bool,
}

impl Default for ParticleSystemOptions {
    fn default() -> Self {
        Self {
            image: ParticleImage::FIREWORK,
            start_color: Rgba::WHITE,
            end_color: Rgba::WHITE,
            life: 5.0,
            speed: 1.0,
            image_size: DVec2::ONE,
            emission_rate: 5.0,
            emitter: EmitterShape::Sphere { radius: 1.0 },
            bursts: Vec::new(),
            lifetime: f64::MAX,
            forces: Vec::new(),
            model_matrix: DMat4::IDENTITY,
            emitter_model_matrix: DMat4::IDENTITY,
            looping: true,
        }
    }
}

pub struct ParticleSystem {
    options: ParticleSystemOptions,
    combined_matrix: DMat4,
    particles: Vec<Particle>,
    current_time: f64,
    carry_over: f64,
    complete: bool,
}

impl ParticleSystem {
    pub fn new(options: ParticleSystemOptions) -> Result<Self, SceneError> {
        validate(&options)?;
        let combined_matrix = options.model_matrix * options.emitter_model_matrix;
        Ok(Self {
            options,
            combined_matrix,
            particles: Vec::new(),
            current_time: 0.0,
            carry_over: 0.0,
            complete: false,
        })
    }

    pub fn options(&self) -> &ParticleSystemOptions {
        &self.options
    }

    pub fn lifetime(&self) -> f64 {
        self.options.lifetime
    }

    pub fn bursts(&self) -> &[ParticleBurst] {
        &self.options.bursts
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Emitter origin in the earth-fixed frame.
    pub fn emitter_to_world(&self) -> DMat4 {
        self.combined_matrix
    }

    /// True once a non-looping system ran past its lifetime and every
    /// particle died.
    pub fn is_complete(&self) -> bool {
        self.complete && self.particles.is_empty()
    }

    /// Advances live particles, emits new ones, then moves the clock.
    pub fn update(&mut self, dt: f64, rng: &mut RandomSource) {
        if dt <= 0.0 {
            return;
        }

        let forces = &self.options.forces;
        self.particles.retain_mut(|particle| particle.update(dt, forces));

        let count = self.number_to_emit(dt, rng);
        for _ in 0..count {
            self.emit_particle(rng);
        }

        self.current_time += dt;
        let lifetime = self.options.lifetime;
        if lifetime < f64::MAX && self.current_time > lifetime {
            if self.options.looping {
                self.current_time %= lifetime;
                for burst in &mut self.options.bursts {
                    burst.rearm();
                }
            } else {
                self.complete = true;
            }
        }
    }

    fn number_to_emit(&mut self, dt: f64, rng: &mut RandomSource) -> usize {
        if self.complete {
            return 0;
        }

        let window = if self.options.lifetime < f64::MAX {
            dt % self.options.lifetime
        } else {
            dt
        };
        let v = window * self.options.emission_rate;
        let mut count = v.floor();
        self.carry_over += v - count;
        if self.carry_over > 1.0 {
            count += 1.0;
            self.carry_over -= 1.0;
        }

        let mut count = count as usize;
        let current_time = self.current_time;
        for burst in &mut self.options.bursts {
            if let Some(burst_count) = burst.fire(current_time, rng) {
                count += burst_count;
            }
        }
        count
    }

    fn emit_particle(&mut self, rng: &mut RandomSource) {
        let emission = self.options.emitter.emit(rng);
        let position = self.combined_matrix.transform_point3(emission.position);
        let direction = self
            .combined_matrix
            .transform_vector3(emission.direction)
            .normalize_or_zero();

        let mut particle = Particle::new(position, direction * self.options.speed, self.options.life);
        particle.start_color = self.options.start_color;
        particle.end_color = self.options.end_color;
        particle.image_size = self.options.image_size;
        self.particles.push(particle);
    }
}

fn validate(options: &ParticleSystemOptions) -> Result<(), SceneError> {
    if !options.model_matrix.is_finite() || !options.emitter_model_matrix.is_finite() {
        return Err(SceneError::InvalidGeometry("placement matrix is not finite".into()));
    }
    if !options.emitter.is_valid() {
        return Err(SceneError::InvalidGeometry(format!("bad emitter shape {:?}", options.emitter)));
    }
    if !options.start_color.is_finite() || !options.end_color.is_finite() {
        return Err(SceneError::InvalidColor);
    }
    if !(options.life > 0.0) {
        return Err(SceneError::InvalidParameter { name: "life", value: options.life });
    }
    if !(options.speed >= 0.0) || !options.speed.is_finite() {
        return Err(SceneError::InvalidParameter { name: "speed", value: options.speed });
    }
    if !(options.emission_rate >= 0.0) || !options.emission_rate.is_finite() {
        return Err(SceneError::InvalidParameter {
            name: "emission_rate",
            value: options.emission_rate,
        });
    }
    if !(options.lifetime > 0.0) {
        return Err(SceneError::InvalidParameter { name: "lifetime", value: options.lifetime });
    }
    for burst in &options.bursts {
        if !burst.time.is_finite() {
            return Err(SceneError::InvalidParameter { name: "burst.time", value: burst.time });
        }
        if !(burst.minimum >= 0.0 && burst.minimum <= burst.maximum) {
            return Err(SceneError::InvalidParameter {
                name: "burst.minimum",
                value: burst.minimum,
            });
        }
    }
    Ok(())
}
