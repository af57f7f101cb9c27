//! Session state and message handling
//!
//! This module contains:
//! - Message types for every section and the settings drawer
//! - The navigation model backing the sidebar
//! - Shell and translator state with their transitions
//! - Handlers that turn messages into state changes and tasks

pub mod handlers;
pub mod messages;
pub mod navigation;
pub mod state;
