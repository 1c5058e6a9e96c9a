use crate::random::RandomSource;

/// One-time release of particles at `time` seconds into a system's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleBurst {
    pub time: f64,
    pub minimum: f64,
    pub maximum: f64,
    complete: bool,
}

impl ParticleBurst {
    pub fn new(time: f64, minimum: f64, maximum: f64) -> Self {
        Self {
            time,
            minimum,
            maximum,
            complete: false,
        }
    }

    /// Burst of exactly `count` particles.
    pub fn fixed(time: f64, count: f64) -> Self {
        Self::new(time, count, count)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Particle count if the burst is due at `current_time`; marks it fired.
    pub(crate) fn fire(&mut self, current_time: f64, rng: &mut RandomSource) -> Option<usize> {
        if self.complete || current_time <= self.time {
            return None;
        }
        self.complete = true;
        Some(rng.random_between(self.minimum, self.maximum).floor() as usize)
    }

    pub(crate) fn rearm(&mut self) {
        self.complete = false;
    }
}

/// `count` bursts of `size` particles at uniform random times in `[0, lifetime)`.
pub fn schedule_bursts(
    rng: &mut RandomSource,
    count: usize,
    lifetime: f64,
    size: f64,
) -> Vec<ParticleBurst> {
    (0..count)
        .map(|_| ParticleBurst::fixed(rng.next_random_number() * lifetime, size))
        .collect()
}
