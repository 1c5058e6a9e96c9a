use crate::camera::{CameraPose, fly_to_pose};
use crate::geo::Cartographic;
use glam::DMat4;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SCENERY_FILE: &str = "scenery.toml";

#[derive(Debug, thiserror::Error)]
pub enum SceneryError {
    #[error("failed to read scenery: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenery: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("viewpoint '{0}' is outside the valid longitude/latitude range")]
    InvalidViewpoint(String),
}

/// Named camera destination, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
    #[serde(default)]
    pub heading: f64,
    #[serde(default)]
    pub pitch: f64,
}

impl Viewpoint {
    pub fn destination(&self) -> Cartographic {
        Cartographic::from_degrees(self.longitude, self.latitude, self.height)
    }

    pub fn pose(&self, launch_frame: DMat4) -> CameraPose {
        fly_to_pose(
            launch_frame,
            self.destination(),
            self.heading.to_radians(),
            self.pitch.to_radians(),
        )
    }

    fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.height.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }
}

/// Extra places to look at around the globe, loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenery {
    #[serde(default)]
    pub viewpoints: Vec<Viewpoint>,
}

impl Scenery {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SceneryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, SceneryError> {
        let scenery: Scenery = toml::from_str(content)?;
        if let Some(bad) = scenery.viewpoints.iter().find(|v| !v.is_valid()) {
            return Err(SceneryError::InvalidViewpoint(bad.name.clone()));
        }
        Ok(scenery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[viewpoints]]
        name = "San Francisco"
        longitude = -122.4175
        latitude = 37.655
        height = 400.0
        pitch = -15.0

        [[viewpoints]]
        name = "Null Island"
        longitude = 0.0
        latitude = 0.0
        height = 1000.0
    "#;

    #[test]
    fn parses_viewpoints() {
        let scenery = Scenery::from_toml(SAMPLE).unwrap();
        assert_eq!(scenery.viewpoints.len(), 2);
        assert_eq!(scenery.viewpoints[0].name, "San Francisco");
        assert_eq!(scenery.viewpoints[0].heading, 0.0);
        assert_eq!(scenery.viewpoints[1].pitch, 0.0);
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = Scenery::from_toml(
            r#"
            [[viewpoints]]
            name = "Nowhere"
            longitude = 0.0
            latitude = 120.0
            height = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneryError::InvalidViewpoint(name) if name == "Nowhere"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Scenery::load_from_file("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SceneryError::Io(_)));
    }

    #[test]
    fn empty_document_has_no_viewpoints() {
        assert_eq!(Scenery::from_toml("").unwrap(), Scenery::default());
    }

    #[test]
    fn shipped_scenery_is_valid() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../", "scenery.toml");
        let scenery = Scenery::load_from_file(path).unwrap();
        assert_eq!(scenery.viewpoints[0].name, "San Francisco");
        assert_eq!(scenery.viewpoints[0].pitch, -15.0);
    }
}
