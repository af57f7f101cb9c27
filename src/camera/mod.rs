//! Webcam capture
//!
//! This module provides live camera input through a GStreamer capture pipeline.
//! Frames are converted to RGBA on the streaming thread and picked up by the UI
//! on a timer. Dropping a [`CameraStream`] stops the pipeline.

mod device;
mod error;
mod frame;
mod stream;

pub use device::{CameraDevice, device_path_at, discover_devices, selected_index};
pub use error::CameraError;
pub use frame::Frame;
pub use stream::{CameraSettings, CameraStream, MAX_FRAMERATE};

use std::sync::Arc;

/// Ask the host for camera access and start streaming
///
/// Runs on the blocking pool so the UI stays responsive while the device opens.
/// There is no timeout: the request resolves once the pipeline reaches playing
/// or reports an error.
pub async fn request_access(settings: CameraSettings) -> Result<Arc<CameraStream>, CameraError> {
    tokio::task::spawn_blocking(move || CameraStream::open(&settings))
        .await
        .map_err(|err| CameraError::Worker(err.to_string()))?
        .map(Arc::new)
}
