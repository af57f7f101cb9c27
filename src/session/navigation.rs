//! Sidebar navigation model

use cosmic::widget::{icon, nav_bar};

use crate::domain::Section;

/// Single-select model with one entry per [`Section`]
///
/// The model only mirrors the shell's active section; selection results are
/// reported back to the owner.
pub struct NavigationModel {
    model: nav_bar::Model,
}

impl NavigationModel {
    pub fn new(active: Section) -> Self {
        let mut model = nav_bar::Model::default();
        for section in Section::ALL {
            model
                .insert()
                .text(section.label())
                .icon(icon::from_name(section.icon_name()))
                .data::<Section>(section);
        }

        let mut navigation = Self { model };
        navigation.activate(active);
        navigation
    }

    pub fn model(&self) -> &nav_bar::Model {
        &self.model
    }

    /// Activate the clicked entry and report its section
    pub fn select(&mut self, id: nav_bar::Id) -> Option<Section> {
        let section = *self.model.data::<Section>(id)?;
        self.model.activate(id);
        Some(section)
    }

    pub fn activate(&mut self, section: Section) {
        if let Some(id) = self.entity(section) {
            self.model.activate(id);
        }
    }

    #[cfg(test)]
    pub fn active_section(&self) -> Option<Section> {
        self.model.active_data::<Section>().copied()
    }

    pub fn entity(&self, section: Section) -> Option<nav_bar::Id> {
        self.model
            .iter()
            .find(|&id| self.model.data::<Section>(id) == Some(&section))
    }

    /// Sections whose entry is currently highlighted
    #[cfg(test)]
    pub fn highlighted(&self) -> Vec<Section> {
        let active = self.model.active();
        self.model
            .iter()
            .filter(|&id| id == active)
            .filter_map(|id| self.model.data::<Section>(id).copied())
            .collect()
    }
}
