use bevy::prelude::Resource;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ToolbarState {
    /// Seed typed into the seed field.
    pub seed: u64,
    /// Seed of the show currently running.
    pub launched_seed: u64,
    pub show_fps: bool,
    pub selected_viewpoint: usize,
}

impl ToolbarState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            launched_seed: seed,
            show_fps: true,
            selected_viewpoint: 0,
        }
    }
}
