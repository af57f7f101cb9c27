//! Section views and shared widgets

pub mod learn;
pub mod placeholder;
pub mod settings_drawer;
pub mod translator;
