//! Handlers for shell, translator, learn and settings messages

use crate::camera;
use crate::core::app::App;
use crate::domain::Section;
use crate::session::messages::{LearnMsg, Msg, SettingsMsg, TranslatorMsg};

pub type HandlerResult = cosmic::Task<cosmic::Action<Msg>>;

/// Handle a sidebar selection
pub fn handle_section_selected(app: &mut App, section: Section) -> HandlerResult {
    log::debug!("Section selected: {:?}", section);
    app.shell.select(section);
    cosmic::Task::none()
}

pub fn handle_translator(app: &mut App, msg: TranslatorMsg) -> HandlerResult {
    let translator = &mut app.shell.translator;
    match msg {
        TranslatorMsg::SetMode(mode) => {
            translator.set_mode(mode);
        }
        TranslatorMsg::StartWebcam => {
            if let Some(ticket) = translator.begin_camera_request() {
                let settings = app.config.camera_settings();
                log::info!(
                    "Requesting webcam access ({}), request {}",
                    settings.source_label(),
                    ticket
                );
                return cosmic::Task::perform(camera::request_access(settings), move |result| {
                    cosmic::Action::App(Msg::camera_result(ticket, result))
                });
            }
        }
        TranslatorMsg::CameraResult(ticket, result) => {
            translator.finish_camera_request(ticket, result);
        }
        TranslatorMsg::FrameTick => {
            translator.refresh_preview();
        }
        TranslatorMsg::EditSignInput(action) => {
            translator.sign_input.perform(action);
        }
        TranslatorMsg::TranslateToSign => {
            log::debug!(
                "Translate to sign requested for {} characters; no sign renderer attached",
                translator.sign_input.text().trim().chars().count()
            );
        }
        TranslatorMsg::Microphone => {
            log::debug!("Microphone pressed; no speech recognizer attached");
        }
        TranslatorMsg::Speak => {
            log::debug!("Read aloud pressed; no speech synthesizer attached");
        }
    }
    cosmic::Task::none()
}

pub fn handle_learn(msg: LearnMsg) -> HandlerResult {
    match msg {
        LearnMsg::StartLearning(category) => {
            log::debug!("Start learning {:?}; no lessons attached", category);
        }
    }
    cosmic::Task::none()
}

pub fn handle_settings(app: &mut App, msg: SettingsMsg) -> HandlerResult {
    match msg {
        SettingsMsg::ToggleDrawer => {
            app.settings_open = !app.settings_open;
            if app.settings_open {
                return cosmic::Task::perform(camera::discover_devices(), |devices| {
                    cosmic::Action::App(Msg::devices_discovered(devices))
                });
            }
        }
        SettingsMsg::DevicesDiscovered(devices) => {
            app.set_devices(devices);
        }
        SettingsMsg::SelectDevice(index) => {
            let device = camera::device_path_at(&app.devices, index);
            log::info!("Camera device set to {:?}", device);
            app.config.camera_device = device;
            app.config.save();
        }
        SettingsMsg::SetMirror(mirror) => {
            app.config.mirror_preview = mirror;
            app.config.save();
        }
    }
    cosmic::Task::none()
}
