//! Message types for the application shell

use std::sync::Arc;

use cosmic::iced_widget::text_editor;

use crate::camera::{CameraDevice, CameraError, CameraStream};
use crate::domain::{Category, TranslationMode};

/// Top-level application message
#[derive(Debug, Clone)]
pub enum Msg {
    Translator(TranslatorMsg),
    Learn(LearnMsg),
    Settings(SettingsMsg),
}

/// Translator section messages
#[derive(Debug, Clone)]
pub enum TranslatorMsg {
    /// Switch between sign-to-text and text-to-sign
    SetMode(TranslationMode),
    /// "Start Webcam" pressed
    StartWebcam,
    /// Camera request finished; the ticket identifies which request
    CameraResult(u64, Result<Arc<CameraStream>, CameraError>),
    /// Time to pull the newest preview frame
    FrameTick,
    /// Edit in the text-to-sign input
    EditSignInput(text_editor::Action),
    /// "Translate to Sign" pressed (no renderer attached)
    TranslateToSign,
    /// Microphone button pressed (no recognizer attached)
    Microphone,
    /// Read-aloud button pressed (no synthesizer attached)
    Speak,
}

/// Learn section messages
#[derive(Debug, Clone)]
pub enum LearnMsg {
    /// "Start Learning" pressed on a category card (no lessons attached)
    StartLearning(Category),
}

/// Settings drawer messages
#[derive(Debug, Clone)]
pub enum SettingsMsg {
    /// Show or hide the drawer
    ToggleDrawer,
    /// Device discovery finished
    DevicesDiscovered(Vec<CameraDevice>),
    /// Dropdown index picked (0 = automatic)
    SelectDevice(usize),
    /// Mirror preview toggled
    SetMirror(bool),
}

impl Msg {
    pub fn camera_result(ticket: u64, result: Result<Arc<CameraStream>, CameraError>) -> Self {
        Msg::Translator(TranslatorMsg::CameraResult(ticket, result))
    }

    pub fn frame_tick() -> Self {
        Msg::Translator(TranslatorMsg::FrameTick)
    }

    pub fn devices_discovered(devices: Vec<CameraDevice>) -> Self {
        Msg::Settings(SettingsMsg::DevicesDiscovered(devices))
    }
}
