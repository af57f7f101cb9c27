//! GStreamer capture pipeline construction and lifetime

use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer_app as gst_app;
use gstreamer_video as gst_video;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::error::CameraError;
use super::frame::Frame;

/// Name of the appsink element frames are pulled from
const SINK_NAME: &str = "preview-sink";

/// Highest capture rate requested from a device
pub const MAX_FRAMERATE: u32 = 120;

/// Parameters for opening a camera
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraSettings {
    /// V4L2 device path (None = autovideosrc)
    pub device: Option<String>,
    pub width: u32,
    pub height: u32,
    pub framerate: u32,
    /// Flip the image horizontally so the preview behaves like a mirror
    pub mirror: bool,
}

impl CameraSettings {
    /// Build the gst-launch style description for this capture
    pub fn pipeline_description(&self) -> String {
        let source = match &self.device {
            Some(path) => format!("v4l2src device=\"{}\"", path),
            None => "autovideosrc".to_string(),
        };
        let flip = if self.mirror {
            " ! videoflip method=horizontal-flip"
        } else {
            ""
        };

        format!(
            "{source} ! videoconvert{flip} ! videoscale ! videorate \
             ! video/x-raw,format=RGBA,width={},height={},framerate={}/1 \
             ! appsink name={SINK_NAME} max-buffers=1 drop=true sync=false",
            self.width, self.height, self.framerate
        )
    }

    /// Preview refresh period matching the capture rate
    ///
    /// The rate is bounded to 1..=MAX_FRAMERATE so the period is never zero.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.framerate.clamp(1, MAX_FRAMERATE)
    }

    /// Short human-readable name of the source for logs
    pub fn source_label(&self) -> String {
        self.device
            .clone()
            .unwrap_or_else(|| "automatic source".to_string())
    }
}

/// A running camera capture
///
/// The newest frame is kept in a single slot; older frames are overwritten.
/// The pipeline is stopped when the stream is dropped.
pub struct CameraStream {
    pipeline: Option<gst::Pipeline>,
    latest: Arc<Mutex<Option<Frame>>>,
    source: String,
}

impl std::fmt::Debug for CameraStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraStream")
            .field("source", &self.source)
            .field("live", &self.pipeline.is_some())
            .finish()
    }
}

impl CameraStream {
    /// Build the capture pipeline and bring it to playing
    ///
    /// Blocks until the device is streaming or has failed.
    pub fn open(settings: &CameraSettings) -> Result<Self, CameraError> {
        gst::init().map_err(|err| CameraError::Init(err.to_string()))?;

        let description = settings.pipeline_description();
        log::info!("Opening camera pipeline: {}", description);

        let pipeline = gst::parse::launch(&description)
            .map_err(|err| CameraError::Pipeline(err.to_string()))?
            .downcast::<gst::Pipeline>()
            .map_err(|_| CameraError::Pipeline("description is not a pipeline".to_string()))?;

        let appsink = pipeline
            .by_name(SINK_NAME)
            .and_then(|element| element.downcast::<gst_app::AppSink>().ok())
            .ok_or_else(|| CameraError::Pipeline(format!("missing appsink '{SINK_NAME}'")))?;

        let latest = Arc::new(Mutex::new(None));
        install_frame_callback(&appsink, Arc::clone(&latest));

        // From here on, an early return drops the stream and resets the pipeline
        let stream = Self {
            pipeline: Some(pipeline),
            latest,
            source: settings.source_label(),
        };
        stream.start()?;

        log::info!("Camera streaming from {}", stream.source);
        Ok(stream)
    }

    fn start(&self) -> Result<(), CameraError> {
        let Some(pipeline) = &self.pipeline else {
            return Ok(());
        };

        if let Err(err) = pipeline.set_state(gst::State::Playing) {
            let detail = self.bus_error().unwrap_or_else(|| err.to_string());
            return Err(CameraError::Unavailable(detail));
        }

        let (result, _, _) = pipeline.state(gst::ClockTime::NONE);
        if let Err(err) = result {
            let detail = self.bus_error().unwrap_or_else(|| err.to_string());
            return Err(CameraError::Unavailable(detail));
        }

        Ok(())
    }

    /// Take the newest frame, if one arrived since the last call
    pub fn take_frame(&self) -> Option<Frame> {
        self.latest.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Check the pipeline bus for a runtime error (device unplugged, etc.)
    pub fn poll_error(&self) -> Option<CameraError> {
        self.bus_error().map(CameraError::Stream)
    }

    fn bus_error(&self) -> Option<String> {
        let bus = self.pipeline.as_ref()?.bus()?;
        let message = bus.pop_filtered(&[gst::MessageType::Error])?;
        match message.view() {
            gst::MessageView::Error(err) => Some(format!(
                "{} ({})",
                err.error(),
                err.debug().unwrap_or_default()
            )),
            _ => None,
        }
    }

    /// Stream with no pipeline behind it, fed by [`CameraStream::publish`]
    #[cfg(test)]
    pub(crate) fn detached(source: &str) -> Self {
        Self {
            pipeline: None,
            latest: Arc::new(Mutex::new(None)),
            source: source.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn publish(&self, frame: Frame) {
        if let Ok(mut slot) = self.latest.lock() {
            *slot = Some(frame);
        }
    }
}

impl Drop for CameraStream {
    fn drop(&mut self) {
        if let Some(pipeline) = self.pipeline.take() {
            if let Err(err) = pipeline.set_state(gst::State::Null) {
                log::warn!("Failed to stop camera pipeline: {}", err);
            }
            log::info!("Released camera: {}", self.source);
        }
    }
}

/// Copy every decoded sample into the shared frame slot, numbering them in order
fn install_frame_callback(appsink: &gst_app::AppSink, latest: Arc<Mutex<Option<Frame>>>) {
    let mut sequence: u64 = 0;
    appsink.set_callbacks(
        gst_app::AppSinkCallbacks::builder()
            .new_sample(move |sink| {
                let sample = sink.pull_sample().map_err(|_| gst::FlowError::Eos)?;
                let info = sample
                    .caps()
                    .and_then(|caps| gst_video::VideoInfo::from_caps(caps).ok())
                    .ok_or(gst::FlowError::NotNegotiated)?;
                let buffer = sample.buffer().ok_or(gst::FlowError::Error)?;
                let map = buffer.map_readable().map_err(|_| gst::FlowError::Error)?;

                let stride = info.stride()[0].max(0) as usize;
                match Frame::from_strided(info.width(), info.height(), stride, map.as_slice()) {
                    Some(frame) => {
                        sequence += 1;
                        if let Ok(mut slot) = latest.lock() {
                            *slot = Some(frame.with_sequence(sequence));
                        }
                    }
                    None => log::warn!(
                        "Dropping malformed camera frame: {}x{}, stride {}, {} bytes",
                        info.width(),
                        info.height(),
                        stride,
                        map.size()
                    ),
                }

                Ok(gst::FlowSuccess::Ok)
            })
            .build(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(device: Option<&str>, mirror: bool) -> CameraSettings {
        CameraSettings {
            device: device.map(str::to_string),
            width: 640,
            height: 480,
            framerate: 30,
            mirror,
        }
    }

    #[test]
    fn test_description_uses_configured_device() {
        let description = settings(Some("/dev/video0"), false).pipeline_description();
        assert!(description.starts_with("v4l2src device=\"/dev/video0\" ! videoconvert"));
        assert!(!description.contains("videoflip"));
    }

    #[test]
    fn test_description_falls_back_to_autovideosrc() {
        let description = settings(None, true).pipeline_description();
        assert!(description.starts_with("autovideosrc ! "));
        assert!(description.contains("videoflip method=horizontal-flip"));
    }

    #[test]
    fn test_description_sets_caps_and_sink() {
        let description = settings(None, false).pipeline_description();
        assert!(description.contains("video/x-raw,format=RGBA,width=640,height=480,framerate=30/1"));
        assert!(description.contains(&format!("appsink name={SINK_NAME}")));
        assert!(description.contains("drop=true"));
    }

    #[test]
    fn test_frame_interval_follows_framerate() {
        assert_eq!(settings(None, false).frame_interval(), Duration::from_nanos(33_333_333));

        let mut fast = settings(None, false);
        fast.framerate = 1001;
        assert_eq!(fast.frame_interval(), Duration::from_secs(1) / MAX_FRAMERATE);

        fast.framerate = 0;
        assert_eq!(fast.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_source_label() {
        assert_eq!(settings(Some("/dev/video3"), false).source_label(), "/dev/video3");
        assert_eq!(settings(None, false).source_label(), "automatic source");
    }

    #[test]
    fn test_take_frame_empties_slot() {
        let stream = CameraStream::detached("test");
        assert!(stream.take_frame().is_none());

        stream.publish(Frame::from_strided(1, 1, 4, &[1, 2, 3, 4]).unwrap());
        assert_eq!(stream.take_frame().map(|f| f.pixels), Some(vec![1, 2, 3, 4]));
        assert!(stream.take_frame().is_none());
    }

    #[test]
    fn test_detached_stream_has_no_bus_errors() {
        let stream = CameraStream::detached("test");
        assert!(stream.poll_error().is_none());
    }
}
