use bevy::prelude::*;

/// Clears every firework and lays the show out again. With `seed` set the
/// new show uses it, otherwise the configured seed.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct RestartShowEvent {
    pub seed: Option<u64>,
}
