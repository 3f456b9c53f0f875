//! Collaborator contracts
//!
//! The update checker, issue reporter and issue viewer are separate
//! subsystems. The window controller only shows, hides and queries them;
//! how they talk to the network is their own business.

/// Window of the update-check subsystem
pub trait UpdateWindow {
    fn show(&mut self);
    fn close(&mut self);
    fn is_visible(&self) -> bool;
}

/// Issue report composer
pub trait ReportComposer {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Issue report viewer
pub trait ReportViewer {
    fn show(&mut self);
}

/// Builds the collaborator windows on behalf of the controller
pub trait Collaborators {
    type Updater: UpdateWindow;
    type Reporter: ReportComposer;
    type Viewer: ReportViewer;

    fn update_checker(&mut self, url: &str, token: &str, version: &str) -> Self::Updater;

    fn issue_reporter(&mut self, version: &str, issues_url: &str, issues_token: &str)
        -> Self::Reporter;

    fn issue_viewer(&mut self, issues_url: &str, issues_token: &str) -> Self::Viewer;
}

/// Collaborator set whose windows never appear.
///
/// Used when the chrome is embedded without update or report support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCollaborators;

#[derive(Debug, Default, Clone, Copy)]
pub struct InertWindow {
    visible: bool,
}

impl UpdateWindow for InertWindow {
    fn show(&mut self) {
        self.visible = true;
    }

    fn close(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

impl ReportComposer for InertWindow {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

impl ReportViewer for InertWindow {
    fn show(&mut self) {
        self.visible = true;
    }
}

impl Collaborators for NoCollaborators {
    type Updater = InertWindow;
    type Reporter = InertWindow;
    type Viewer = InertWindow;

    fn update_checker(&mut self, _url: &str, _token: &str, _version: &str) -> InertWindow {
        InertWindow::default()
    }

    fn issue_reporter(&mut self, _version: &str, _url: &str, _token: &str) -> InertWindow {
        InertWindow::default()
    }

    fn issue_viewer(&mut self, _url: &str, _token: &str) -> InertWindow {
        InertWindow::default()
    }
}
