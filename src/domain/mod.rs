//! Domain types for the application shell
//!
//! This module contains:
//! - Section identifiers and the view each one maps to
//! - Translation modes
//! - Learning categories

pub mod category;
pub mod section;

pub use category::Category;
pub use section::{Section, SectionView, TranslationMode};
