//! Bundled Tailwind presets.
//!
//! This module provides:
//!
//! - [`INPUT_TEXT`], [`MENU`], [`PASSWORD`]: Widget style maps
//! - [`OVERLAY_TRANSITION`]: The transition shared by overlay panels
//! - [`Preset`]: A registry of widget style maps with fluent builder API
//!
//! Every widget map is a process-wide constant; resolvers are pure functions
//! of the [`PassThroughOptions`](crate::PassThroughOptions) they are given.

mod inputtext;
mod menu;
mod password;
mod preset;
mod transition;

pub use inputtext::INPUT_TEXT;
pub use menu::MENU;
pub use password::PASSWORD;
pub use preset::Preset;
pub use transition::OVERLAY_TRANSITION;
