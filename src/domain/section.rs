//! Navigable sections and translator modes

use crate::fl;

/// Top-level navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Translator,
    Learn,
    Community,
    Chat,
    Resources,
}

/// What the main area shows for a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView {
    Translator,
    Learn,
    /// Selectable in the sidebar but not built yet
    Unimplemented(Section),
}

impl Section {
    /// Sidebar order
    pub const ALL: [Section; 5] = [
        Section::Translator,
        Section::Learn,
        Section::Community,
        Section::Chat,
        Section::Resources,
    ];

    /// Get the localized label for this section
    pub fn label(self) -> String {
        match self {
            Section::Translator => fl!("nav-translator"),
            Section::Learn => fl!("nav-learn"),
            Section::Community => fl!("nav-community"),
            Section::Chat => fl!("nav-chat"),
            Section::Resources => fl!("nav-resources"),
        }
    }

    /// Get the icon name for this section
    pub fn icon_name(self) -> &'static str {
        match self {
            Section::Translator => "camera-web-symbolic",
            Section::Learn => "accessories-dictionary-symbolic",
            Section::Community => "system-users-symbolic",
            Section::Chat => "internet-chat-symbolic",
            Section::Resources => "help-browser-symbolic",
        }
    }

    pub fn view(self) -> SectionView {
        match self {
            Section::Translator => SectionView::Translator,
            Section::Learn => SectionView::Learn,
            Section::Community | Section::Chat | Section::Resources => {
                SectionView::Unimplemented(self)
            }
        }
    }
}

/// Translator sub-view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationMode {
    #[default]
    SignToText,
    TextToSign,
}

impl TranslationMode {
    pub const ALL: [TranslationMode; 2] = [TranslationMode::SignToText, TranslationMode::TextToSign];

    pub fn label(self) -> String {
        match self {
            TranslationMode::SignToText => fl!("mode-sign-to-text"),
            TranslationMode::TextToSign => fl!("mode-text-to-sign"),
        }
    }
}
