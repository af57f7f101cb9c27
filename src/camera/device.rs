//! Video capture device discovery
//!
//! Queries GStreamer's device monitor for video sources that expose a V4L2 path

use anyhow::{Context, Result};
use gstreamer as gst;
use gstreamer::prelude::*;

/// A camera that can be selected in settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Human-readable name (e.g., "Integrated Camera")
    pub name: String,
    /// V4L2 device path (e.g., "/dev/video0")
    pub path: String,
}

/// List the video sources currently attached
pub fn detect_devices() -> Result<Vec<CameraDevice>> {
    gst::init().context("Failed to initialize GStreamer")?;

    let monitor = gst::DeviceMonitor::new();
    if monitor.add_filter(Some("Video/Source"), None).is_none() {
        log::warn!("Device monitor rejected the Video/Source filter");
    }
    monitor.start().context("Failed to start device monitor")?;

    let mut devices: Vec<CameraDevice> = monitor
        .devices()
        .into_iter()
        .filter_map(|device| {
            let properties = device.properties()?;
            let path = properties
                .get::<String>("api.v4l2.path")
                .or_else(|_| properties.get::<String>("device.path"))
                .ok()?;
            Some(CameraDevice {
                name: device.display_name().to_string(),
                path,
            })
        })
        .collect();
    monitor.stop();

    // Several providers can report the same node
    devices.sort_by(|a, b| a.path.cmp(&b.path));
    devices.dedup_by(|a, b| a.path == b.path);

    Ok(devices)
}

/// Discover devices off the UI thread; failures are logged and yield an empty list
pub async fn discover_devices() -> Vec<CameraDevice> {
    match tokio::task::spawn_blocking(detect_devices).await {
        Ok(Ok(devices)) => {
            log::debug!("Found {} camera device(s)", devices.len());
            devices
        }
        Ok(Err(err)) => {
            log::error!("Camera discovery failed: {:?}", err);
            Vec::new()
        }
        Err(err) => {
            log::error!("Camera discovery worker stopped: {}", err);
            Vec::new()
        }
    }
}

/// Dropdown index for the configured device
///
/// Index 0 is automatic selection; device `i` sits at `i + 1`. A configured
/// path that is not currently attached maps to automatic.
pub fn selected_index(devices: &[CameraDevice], configured: Option<&str>) -> usize {
    configured
        .and_then(|path| devices.iter().position(|d| d.path == path))
        .map_or(0, |i| i + 1)
}

/// Device path behind a dropdown index, None for automatic selection
///
/// Inverse of [`selected_index`]; an index past the list is treated as automatic.
pub fn device_path_at(devices: &[CameraDevice], index: usize) -> Option<String> {
    index
        .checked_sub(1)
        .and_then(|i| devices.get(i))
        .map(|d| d.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn devices() -> Vec<CameraDevice> {
        vec![
            CameraDevice {
                name: "Integrated Camera".to_string(),
                path: "/dev/video0".to_string(),
            },
            CameraDevice {
                name: "USB Webcam".to_string(),
                path: "/dev/video2".to_string(),
            },
        ]
    }

    #[test]
    fn test_selected_index_automatic() {
        assert_eq!(selected_index(&devices(), None), 0);
    }

    #[test]
    fn test_selected_index_matches_path() {
        assert_eq!(selected_index(&devices(), Some("/dev/video0")), 1);
        assert_eq!(selected_index(&devices(), Some("/dev/video2")), 2);
    }

    #[test]
    fn test_selected_index_unknown_path_is_automatic() {
        assert_eq!(selected_index(&devices(), Some("/dev/video9")), 0);
        assert_eq!(selected_index(&[], Some("/dev/video0")), 0);
    }

    #[test]
    fn test_device_path_at() {
        assert_eq!(device_path_at(&devices(), 0), None);
        assert_eq!(device_path_at(&devices(), 1).as_deref(), Some("/dev/video0"));
        assert_eq!(device_path_at(&devices(), 2).as_deref(), Some("/dev/video2"));
        assert_eq!(device_path_at(&devices(), 3), None);
        assert_eq!(device_path_at(&[], 1), None);
    }

    #[test]
    fn test_device_path_round_trips_through_index() {
        let devices = devices();
        for index in 0..=devices.len() {
            let path = device_path_at(&devices, index);
            assert_eq!(selected_index(&devices, path.as_deref()), index);
        }
    }

    #[test]
    fn test_detect_devices_has_unique_paths() {
        // Succeeds with an empty list on machines without cameras
        if let Ok(found) = detect_devices() {
            for pair in found.windows(2) {
                assert!(pair[0].path < pair[1].path);
            }
        }
    }
}
