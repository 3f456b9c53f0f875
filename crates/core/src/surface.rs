//! Window surface
//!
//! The handle through which the window controller drives the GUI toolkit.
//! Toolkit-global state (the application stylesheet, window flags) is only
//! ever changed through a surface passed explicitly to each transition.

use crate::style::StyleConfig;

/// Which windows a close request covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseScope {
    /// Only the main window
    MainWindow,
    /// Every window the application has open
    AllWindows,
}

pub trait WindowSurface {
    /// Swap the application-wide stylesheet
    fn apply_style(&mut self, style: &StyleConfig);

    /// Set or clear the always-on-top window flag
    fn set_always_on_top(&mut self, on_top: bool);

    /// Re-apply window visibility (required after a flag change)
    fn show(&mut self);

    fn resize(&mut self, width: u32, height: u32);

    fn close(&mut self, scope: CloseScope);
}

/// Test double recording every surface call in order
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    ApplyStyle(crate::style::ThemeMode),
    SetAlwaysOnTop(bool),
    Show,
    Resize(u32, u32),
    Close(CloseScope),
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }
}

#[cfg(test)]
impl WindowSurface for RecordingSurface {
    fn apply_style(&mut self, style: &StyleConfig) {
        self.calls.push(SurfaceCall::ApplyStyle(style.mode));
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        self.calls.push(SurfaceCall::SetAlwaysOnTop(on_top));
    }

    fn show(&mut self) {
        self.calls.push(SurfaceCall::Show);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(SurfaceCall::Resize(width, height));
    }

    fn close(&mut self, scope: CloseScope) {
        self.calls.push(SurfaceCall::Close(scope));
    }
}
