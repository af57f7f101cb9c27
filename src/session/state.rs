//! Shell and translator state, including the camera request transitions

use std::sync::Arc;

use cosmic::iced_widget::text_editor;

use crate::camera::{CameraError, CameraStream};
use crate::domain::{Section, SectionView, TranslationMode};

/// Camera acquisition state for the sign-to-text view
#[derive(Debug, Default)]
pub enum CameraStatus {
    #[default]
    Idle,
    /// Waiting on the host; only the result carrying `ticket` is accepted
    Requesting { ticket: u64 },
    Granted(Arc<CameraStream>),
}

/// State owned by the translator section
pub struct TranslatorState {
    pub mode: TranslationMode,
    /// Never written: no recognizer feeds it yet
    pub translated_text: String,
    /// Text-to-sign input
    pub sign_input: text_editor::Content,
    pub camera: CameraStatus,
    /// Most recent webcam frame ready for display
    pub preview: Option<cosmic::widget::image::Handle>,
    last_ticket: u64,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self {
            mode: TranslationMode::default(),
            translated_text: String::new(),
            sign_input: text_editor::Content::new(),
            camera: CameraStatus::default(),
            preview: None,
            last_ticket: 0,
        }
    }
}

impl std::fmt::Debug for TranslatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorState")
            .field("mode", &self.mode)
            .field("translated_text", &self.translated_text)
            .field("sign_input_len", &self.sign_input.text().len())
            .field("camera", &self.camera)
            .field("preview", &self.preview.is_some())
            .field("last_ticket", &self.last_ticket)
            .finish()
    }
}

impl TranslatorState {
    pub fn set_mode(&mut self, mode: TranslationMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if mode == TranslationMode::TextToSign {
            self.release_camera();
        }
    }

    /// Move Idle -> Requesting and hand out the ticket for the new request
    ///
    /// Returns None while a request is in flight or a stream is live.
    pub fn begin_camera_request(&mut self) -> Option<u64> {
        if self.mode != TranslationMode::SignToText {
            return None;
        }
        match self.camera {
            CameraStatus::Idle => {
                self.last_ticket += 1;
                self.camera = CameraStatus::Requesting {
                    ticket: self.last_ticket,
                };
                Some(self.last_ticket)
            }
            CameraStatus::Requesting { .. } | CameraStatus::Granted(_) => None,
        }
    }

    /// Apply the outcome of a camera request
    ///
    /// Failures only reach the log. A stream from a superseded request is
    /// dropped here, which stops it.
    pub fn finish_camera_request(
        &mut self,
        ticket: u64,
        outcome: Result<Arc<CameraStream>, CameraError>,
    ) {
        let current = matches!(self.camera, CameraStatus::Requesting { ticket: t } if t == ticket);

        match outcome {
            Ok(stream) if current => {
                log::info!("Webcam access granted");
                self.preview = None;
                self.camera = CameraStatus::Granted(stream);
            }
            Ok(stream) => {
                log::debug!("Discarding camera stream from superseded request {}", ticket);
                drop(stream);
            }
            Err(err) => {
                log::error!("Webcam access error: {}", err);
                if current {
                    self.camera = CameraStatus::Idle;
                }
            }
        }
    }

    /// Stop any live stream and forget a pending request
    pub fn release_camera(&mut self) {
        match std::mem::take(&mut self.camera) {
            CameraStatus::Granted(stream) => {
                log::debug!("Releasing webcam stream {:?}", stream);
            }
            CameraStatus::Requesting { ticket } => {
                log::debug!("Abandoning camera request {}", ticket);
            }
            CameraStatus::Idle => {}
        }
        self.preview = None;
    }

    /// Pull the newest frame into the preview
    ///
    /// A pipeline error while streaming is logged and releases the camera.
    pub fn refresh_preview(&mut self) {
        let CameraStatus::Granted(stream) = &self.camera else {
            return;
        };

        if let Some(err) = stream.poll_error() {
            log::error!("Webcam stream error: {}", err);
            self.release_camera();
            return;
        }

        if let Some(frame) = stream.take_frame() {
            log::trace!("Showing camera frame {}", frame.sequence);
            self.preview = Some(frame.into_handle());
        }
    }

    /// Drop everything back to the initial state, keeping the ticket counter
    pub fn reset(&mut self) {
        self.release_camera();
        self.mode = TranslationMode::default();
        self.translated_text.clear();
        self.sign_input = text_editor::Content::new();
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.camera, CameraStatus::Requesting { .. })
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self.camera, CameraStatus::Granted(_))
    }

    pub fn shows_start_button(&self) -> bool {
        self.mode == TranslationMode::SignToText && !self.is_streaming()
    }

    /// Text for the translation area, None when the placeholder should show
    pub fn translation(&self) -> Option<&str> {
        (!self.translated_text.is_empty()).then_some(self.translated_text.as_str())
    }
}

/// Root state: the active section and the translator it may host
#[derive(Debug, Default)]
pub struct ShellState {
    pub active: Section,
    pub translator: TranslatorState,
}

impl ShellState {
    /// Switch sections; leaving the translator tears its state down
    pub fn select(&mut self, section: Section) {
        if self.active == Section::Translator && section != Section::Translator {
            self.translator.reset();
        }
        self.active = section;
    }

    pub fn view(&self) -> SectionView {
        self.active.view()
    }

    /// Whether a live preview is on screen and needs frame ticks
    pub fn is_previewing(&self) -> bool {
        self.active == Section::Translator && self.translator.is_streaming()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Frame;

    fn granted(state: &mut TranslatorState) -> std::sync::Weak<CameraStream> {
        let ticket = state.begin_camera_request().unwrap();
        let stream = Arc::new(CameraStream::detached("test"));
        let weak = Arc::downgrade(&stream);
        state.finish_camera_request(ticket, Ok(stream));
        weak
    }

    #[test]
    fn test_initial_state() {
        let shell = ShellState::default();
        assert_eq!(shell.active, Section::Translator);
        assert_eq!(shell.translator.mode, TranslationMode::SignToText);
        assert!(shell.translator.translated_text.is_empty());
        assert!(shell.translator.translation().is_none());
        assert!(matches!(shell.translator.camera, CameraStatus::Idle));
        assert!(shell.translator.shows_start_button());
    }

    #[test]
    fn test_select_each_section() {
        let mut shell = ShellState::default();
        for section in Section::ALL {
            shell.select(section);
            assert_eq!(shell.active, section);
            assert_eq!(shell.view(), section.view());
        }
    }

    #[test]
    fn test_unbuilt_sections_render_placeholder() {
        let mut shell = ShellState::default();
        for section in [Section::Community, Section::Chat, Section::Resources] {
            shell.select(section);
            assert_eq!(shell.view(), SectionView::Unimplemented(section));
        }
    }

    #[test]
    fn test_mode_toggle_is_idempotent() {
        let mut state = TranslatorState::default();
        state.set_mode(TranslationMode::TextToSign);
        state.set_mode(TranslationMode::TextToSign);
        assert_eq!(state.mode, TranslationMode::TextToSign);
        assert!(!state.shows_start_button());

        state.set_mode(TranslationMode::SignToText);
        state.set_mode(TranslationMode::SignToText);
        assert_eq!(state.mode, TranslationMode::SignToText);
        assert!(state.shows_start_button());
    }

    #[test]
    fn test_camera_grant_replaces_button() {
        let mut state = TranslatorState::default();
        let ticket = state.begin_camera_request().unwrap();
        assert!(state.is_requesting());
        assert!(state.shows_start_button());

        state.finish_camera_request(ticket, Ok(Arc::new(CameraStream::detached("test"))));
        assert!(state.is_streaming());
        assert!(!state.shows_start_button());
    }

    #[test]
    fn test_camera_denial_returns_to_idle() {
        let mut state = TranslatorState::default();
        let ticket = state.begin_camera_request().unwrap();
        state.finish_camera_request(
            ticket,
            Err(CameraError::Unavailable("permission denied".to_string())),
        );
        assert!(matches!(state.camera, CameraStatus::Idle));
        assert!(state.shows_start_button());
        assert!(state.translation().is_none());

        // The button works again
        assert!(state.begin_camera_request().is_some());
    }

    #[test]
    fn test_no_second_request_while_pending_or_granted() {
        let mut state = TranslatorState::default();
        assert!(state.begin_camera_request().is_some());
        assert!(state.begin_camera_request().is_none());

        let mut state = TranslatorState::default();
        let _weak = granted(&mut state);
        assert!(state.begin_camera_request().is_none());
    }

    #[test]
    fn test_no_request_in_text_to_sign() {
        let mut state = TranslatorState::default();
        state.set_mode(TranslationMode::TextToSign);
        assert!(state.begin_camera_request().is_none());
    }

    #[test]
    fn test_stale_grant_is_released() {
        let mut state = TranslatorState::default();
        let first = state.begin_camera_request().unwrap();
        state.release_camera();
        let second = state.begin_camera_request().unwrap();
        assert_ne!(first, second);

        let stale = Arc::new(CameraStream::detached("stale"));
        let weak = Arc::downgrade(&stale);
        state.finish_camera_request(first, Ok(stale));
        assert!(weak.upgrade().is_none());
        assert!(state.is_requesting());
    }

    #[test]
    fn test_stale_denial_keeps_pending_request() {
        let mut state = TranslatorState::default();
        let first = state.begin_camera_request().unwrap();
        state.release_camera();
        let _second = state.begin_camera_request().unwrap();

        state.finish_camera_request(first, Err(CameraError::Unavailable("busy".to_string())));
        assert!(state.is_requesting());
    }

    #[test]
    fn test_switching_mode_releases_stream() {
        let mut state = TranslatorState::default();
        let weak = granted(&mut state);
        assert!(weak.upgrade().is_some());

        state.set_mode(TranslationMode::TextToSign);
        assert!(weak.upgrade().is_none());
        assert!(matches!(state.camera, CameraStatus::Idle));
    }

    #[test]
    fn test_leaving_translator_releases_stream() {
        let mut shell = ShellState::default();
        let weak = granted(&mut shell.translator);
        assert!(shell.is_previewing());

        shell.select(Section::Learn);
        assert!(weak.upgrade().is_none());
        assert!(!shell.is_previewing());

        shell.select(Section::Translator);
        assert!(shell.translator.shows_start_button());
    }

    #[test]
    fn test_leaving_translator_resets_mode() {
        let mut shell = ShellState::default();
        shell.translator.set_mode(TranslationMode::TextToSign);
        shell.translator.sign_input = text_editor::Content::with_text("hello");
        shell.select(Section::Chat);
        shell.select(Section::Translator);
        assert_eq!(shell.translator.mode, TranslationMode::SignToText);
        assert!(shell.translator.sign_input.text().trim().is_empty());
    }

    #[test]
    fn test_reselecting_translator_keeps_sign_input() {
        let mut shell = ShellState::default();
        shell.translator.set_mode(TranslationMode::TextToSign);
        shell.translator.sign_input = text_editor::Content::with_text("hello");
        shell.select(Section::Translator);
        assert_eq!(shell.translator.sign_input.text().trim(), "hello");
    }

    #[test]
    fn test_reselecting_translator_keeps_stream() {
        let mut shell = ShellState::default();
        let weak = granted(&mut shell.translator);
        shell.select(Section::Translator);
        assert!(weak.upgrade().is_some());
    }

    #[test]
    fn test_refresh_preview_takes_new_frame() {
        let mut state = TranslatorState::default();
        let ticket = state.begin_camera_request().unwrap();
        let stream = Arc::new(CameraStream::detached("test"));
        state.finish_camera_request(ticket, Ok(Arc::clone(&stream)));

        state.refresh_preview();
        assert!(state.preview.is_none());

        stream.publish(Frame::from_strided(1, 1, 4, &[0, 0, 0, 255]).unwrap());
        state.refresh_preview();
        assert!(state.preview.is_some());
    }

    #[test]
    fn test_refresh_preview_without_stream_is_noop() {
        let mut state = TranslatorState::default();
        state.refresh_preview();
        assert!(state.preview.is_none());
        assert!(matches!(state.camera, CameraStatus::Idle));
    }
}
