pub mod burst;
pub mod camera;
pub mod choreographer;
pub mod color;
pub mod config;
pub mod constants;
pub mod emitter;
pub mod force;
pub mod geo;
pub mod particle;
pub mod random;
pub mod scene;
pub mod scenery;
pub mod system;
pub mod tools;

pub use config::{get_config, reload_config};
