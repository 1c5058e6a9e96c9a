pub const WGS84_EQUATORIAL_RADIUS: f64 = 6_378_137.0;
pub const WGS84_POLAR_RADIUS: f64 = 6_356_752.314_245_179_3;

pub const EPSILON14: f64 = 1e-14;

/// Launch site, longitude/latitude in degrees.
pub const LAUNCH_LONGITUDE: f64 = -75.59777;
pub const LAUNCH_LATITUDE: f64 = 40.03883;

pub const EMITTER_INITIAL_LOCATION: [f64; 3] = [0.0, 0.0, 100.0];
pub const CAMERA_OFFSET: [f64; 3] = [-300.0, 0.0, 0.0];

pub const RANDOM_SEED: u64 = 315;
pub const NUMBER_OF_FIREWORKS: usize = 20;
pub const BURSTS_PER_FIREWORK: usize = 3;
pub const BURST_SIZE: f64 = 400.0;
/// Total emitter duration in seconds, not the per-particle life.
pub const FIREWORK_LIFETIME: f64 = 10.0;

pub const MINIMUM_EXPLOSION_SIZE: f64 = 30.0;
pub const MAXIMUM_EXPLOSION_SIZE: f64 = 100.0;
pub const MINIMUM_PARTICLE_LIFE: f64 = 0.3;
pub const MAXIMUM_PARTICLE_LIFE: f64 = 1.0;

pub const PARTICLE_SPEED: f64 = 100.0;
pub const PARTICLE_PIXEL_SIZE: f64 = 7.0;
pub const EMITTER_SPHERE_RADIUS: f64 = 0.1;

/// Offset bounding box around the emitter location: x, y, z ranges.
pub const OFFSET_BOUNDS: [[f64; 2]; 3] = [[-100.0, 100.0], [-80.0, 100.0], [-50.0, 50.0]];
