use crate::globe::logic::{pose_to_transform, world_to_render_matrix};
use bevy::math::{DMat4, DVec3, Vec3};
use bevy::prelude::{Resource, Transform};
use pyrotechnics::camera::CameraPose;
use pyrotechnics::config::FireworksConfig;
use pyrotechnics::geo;

/// Render space is the launch site's east-north-up frame with Y up, so the
/// show stays near the origin where f32 precision is good.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RenderFrame {
    pub launch_frame: DMat4,
    pub world_to_render: DMat4,
}

impl RenderFrame {
    pub fn new(launch_frame: DMat4) -> Self {
        Self {
            launch_frame,
            world_to_render: world_to_render_matrix(launch_frame),
        }
    }

    pub fn from_config(config: &FireworksConfig) -> Self {
        let launch = &config.launch;
        let origin = geo::from_degrees(launch.longitude, launch.latitude, launch.height);
        Self::new(geo::east_north_up_to_fixed_frame(origin))
    }

    /// Earth-fixed position to render space.
    pub fn world_point(&self, world: DVec3) -> Vec3 {
        self.world_to_render.transform_point3(world).as_vec3()
    }

    pub fn globe_center(&self) -> Vec3 {
        self.world_point(DVec3::ZERO)
    }

    pub fn pose_transform(&self, pose: &CameraPose) -> Transform {
        pose_to_transform(pose)
    }
}
