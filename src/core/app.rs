use cosmic::iced::{Length, Size};
use cosmic::iced_futures::Subscription;
use cosmic::iced_widget::row;
use cosmic::widget::{button, icon, nav_bar};
use cosmic::{ApplicationExt, Element, Task, app};

use crate::camera::CameraDevice;
use crate::config::SignSpeakConfig;
use crate::domain::SectionView;
use crate::fl;
use crate::session::handlers;
use crate::session::messages::{Msg, SettingsMsg};
use crate::session::navigation::NavigationModel;
use crate::session::state::ShellState;
use crate::widget;

pub(crate) fn run() -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default().size(Size::new(1100.0, 760.0));
    cosmic::app::run::<App>(settings, SignSpeakConfig::load())
}

pub struct App {
    pub core: app::Core,
    pub config: SignSpeakConfig,
    /// Sidebar model (stored here since it's not Send)
    pub nav: NavigationModel,
    pub shell: ShellState,
    pub settings_open: bool,
    /// Cameras found by the last discovery
    pub devices: Vec<CameraDevice>,
    /// Dropdown labels: "Automatic" followed by one entry per device
    pub device_options: Vec<String>,
}

impl App {
    pub fn set_devices(&mut self, devices: Vec<CameraDevice>) {
        self.device_options = std::iter::once(fl!("camera-automatic"))
            .chain(devices.iter().map(|d| format!("{} ({})", d.name, d.path)))
            .collect();
        self.devices = devices;
    }
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = SignSpeakConfig;

    type Message = Msg;

    const APP_ID: &'static str = "io.github.signspeak.SignSpeak";

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        config: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let shell = ShellState::default();
        let mut app = Self {
            core,
            config,
            nav: NavigationModel::new(shell.active),
            shell,
            settings_open: false,
            devices: Vec::new(),
            device_options: Vec::new(),
        };
        app.set_devices(Vec::new());
        app.set_header_title(fl!("app-title"));

        (app, Task::none())
    }

    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(self.nav.model())
    }

    fn on_nav_select(&mut self, id: nav_bar::Id) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        match self.nav.select(id) {
            Some(section) => handlers::handle_section_selected(self, section),
            None => Task::none(),
        }
    }

    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            button::icon(icon::from_name("preferences-system-symbolic"))
                .on_press(Msg::Settings(SettingsMsg::ToggleDrawer))
                .selected(self.settings_open)
                .into(),
        ]
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let spacing = self.core.system_theme().cosmic().spacing;

        let page: Element<'_, Msg> = match self.shell.view() {
            SectionView::Translator => {
                widget::translator::view(&self.shell.translator, spacing)
                    .map(Msg::Translator)
            }
            SectionView::Learn => widget::learn::view(spacing).map(Msg::Learn),
            SectionView::Unimplemented(section) => widget::placeholder::view(section, spacing),
        };

        if !self.settings_open {
            return page;
        }

        let selected =
            crate::camera::selected_index(&self.devices, self.config.camera_device.as_deref());
        let drawer = widget::settings_drawer::build_settings_drawer(
            &self.device_options,
            selected,
            |index| Msg::Settings(SettingsMsg::SelectDevice(index)),
            self.config.mirror_preview,
            |mirror| Msg::Settings(SettingsMsg::SetMirror(mirror)),
            spacing.space_s,
        );

        row![cosmic::widget::container(page).width(Length::Fill), drawer]
            .spacing(spacing.space_s)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        match message {
            Msg::Translator(msg) => handlers::handle_translator(self, msg),
            Msg::Learn(msg) => handlers::handle_learn(msg),
            Msg::Settings(msg) => handlers::handle_settings(self, msg),
        }
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        if !self.shell.is_previewing() {
            return Subscription::none();
        }

        // Preview refresh follows the capture framerate
        cosmic::iced::time::every(self.config.camera_settings().frame_interval())
            .map(|_| Msg::frame_tick())
    }
}
