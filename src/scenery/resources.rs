use bevy::math::{DMat4, DVec3};
use bevy::prelude::Resource;
use pyrotechnics::camera::{CameraPose, launch_view};
use pyrotechnics::config::FireworksConfig;
use pyrotechnics::scenery::Scenery;

pub const LAUNCH_SITE_NAME: &str = "Launch site";

#[derive(Debug, Clone)]
pub struct ViewpointEntry {
    pub name: String,
    /// Pose in the launch frame.
    pub pose: CameraPose,
}

/// Camera destinations offered in the toolbar. The first entry is always
/// the launch view.
#[derive(Resource, Debug, Clone)]
pub struct Viewpoints {
    pub entries: Vec<ViewpointEntry>,
}

impl Viewpoints {
    pub fn new(config: &FireworksConfig) -> Self {
        let pose = launch_view(
            DVec3::from_array(config.camera.offset),
            DVec3::from_array(config.launch.emitter_location),
        );
        Self {
            entries: vec![ViewpointEntry {
                name: LAUNCH_SITE_NAME.to_string(),
                pose,
            }],
        }
    }

    pub fn default_entry(&self) -> &ViewpointEntry {
        &self.entries[0]
    }

    pub fn add_scenery(&mut self, scenery: &Scenery, launch_frame: DMat4) {
        self.entries
            .extend(scenery.viewpoints.iter().map(|viewpoint| ViewpointEntry {
                name: viewpoint.name.clone(),
                pose: viewpoint.pose(launch_frame),
            }));
    }
}
