//! Modern Window Core Library
//!
//! Themeable, pinnable, update-aware window chrome with persisted
//! size and theme preferences.
//!
//! Architecture:
//! - `config` loads and saves the settings record (`app_config.json`)
//! - `controller` owns the window lifecycle and reconciles it with the record
//! - `surface` and `collaborators` are the seams to the toolkit and to the
//!   update/report subsystems
//! - `gui` is the iced front-end driving the controller

pub mod collaborators;
pub mod config;
pub mod controller;
pub mod gui;
pub mod style;
pub mod surface;

pub use crate::config::{ConfigError, ConfigStore, SettingsRecord};
pub use crate::controller::{ControllerOptions, WindowController, WindowGeometry};

/// Channel an embedding application's update checker uses to report a
/// newer version.
///
/// Hand the receiver to `gui::WindowFlags::with_update_signal` and keep the
/// sender in the checker. The signal only takes effect when the settings
/// record enables update checks (`check_for_update` and a non-empty `url`)
/// and a version is configured. `ModernWindow_Demo` ships no checker and
/// leaves it unwired.
pub fn update_signal() -> (crossbeam_channel::Sender<()>, crossbeam_channel::Receiver<()>) {
    crossbeam_channel::bounded(1)
}
