//! Configuration persistence for SignSpeak settings

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraSettings, MAX_FRAMERATE};

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CosmicConfigEntry)]
#[version = 1]
pub struct SignSpeakConfig {
    /// V4L2 device path to capture from (None = let GStreamer pick a source)
    pub camera_device: Option<String>,
    /// Requested capture width in pixels
    pub camera_width: u32,
    /// Requested capture height in pixels
    pub camera_height: u32,
    /// Requested capture framerate, also used as the preview refresh rate
    pub camera_framerate: u32,
    /// Whether to flip the webcam preview horizontally
    #[serde(default = "default_mirror_preview")]
    pub mirror_preview: bool,
}

fn default_mirror_preview() -> bool {
    true
}

impl SignSpeakConfig {
    /// Configuration ID for cosmic-config
    pub const ID: &'static str = "io.github.signspeak.SignSpeak";

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => match Self::get_entry(&config) {
                Ok(entry) => entry,
                Err((errs, entry)) => {
                    log::warn!("Error loading config, using defaults: {:?}", errs);
                    entry
                }
            },
            Err(err) => {
                log::warn!("Could not create config handler: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match cosmic_config::Config::new(Self::ID, Self::VERSION) {
            Ok(config) => {
                if let Err(err) = self.write_entry(&config) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            Err(err) => {
                log::error!("Could not create config handler for saving: {:?}", err);
            }
        }
    }

    /// Capture settings for the next webcam request
    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            device: self.camera_device.clone(),
            width: self.camera_width.max(1),
            height: self.camera_height.max(1),
            framerate: self.camera_framerate.clamp(1, MAX_FRAMERATE),
            mirror: self.mirror_preview,
        }
    }
}

impl Default for SignSpeakConfig {
    fn default() -> Self {
        Self {
            camera_device: None,
            camera_width: 640,
            camera_height: 480,
            camera_framerate: 30,
            mirror_preview: default_mirror_preview(),
        }
    }
}
