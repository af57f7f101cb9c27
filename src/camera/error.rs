/// Failure to acquire or keep a camera stream
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("failed to initialize GStreamer: {0}")]
    Init(String),
    #[error("invalid capture pipeline: {0}")]
    Pipeline(String),
    #[error("camera unavailable: {0}")]
    Unavailable(String),
    #[error("camera stream failed: {0}")]
    Stream(String),
    #[error("camera worker stopped: {0}")]
    Worker(String),
}
