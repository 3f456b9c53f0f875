//! Window Controller
//!
//! Owns the window chrome state and the settings lifecycle:
//! - Applies the stored theme and size when the window is created
//! - Handles the theme, pin, version and issue-report controls
//! - Copies the live window state back into the settings record on close
//!
//! All toolkit side effects go through the `WindowSurface` handed to each
//! transition. Nothing is written to disk before `on_close`.

use crate::collaborators::{Collaborators, ReportComposer, ReportViewer, UpdateWindow};
use crate::config::{ConfigStore, SettingsRecord};
use crate::style::{ButtonStyle, StyleConfig, ThemeMode};
use crate::surface::{CloseScope, WindowSurface};

/// Process-wide window behaviour, injected once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Application version shown in the title bar (empty = no badge)
    pub version: String,
    /// Close every application window when the main window closes
    pub close_all_on_exit: bool,
    /// Persist the maximized state and keep the stored size while maximized
    pub track_maximized: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            version: String::new(),
            close_all_on_exit: true,
            track_maximized: true,
        }
    }
}

impl ControllerOptions {
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }
}

/// Live window geometry reported by the toolkit at close time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
    pub maximized: bool,
}

/// State of the version control in the title bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VersionBadge {
    /// No version configured
    Hidden,
    /// Plain version label
    Current,
    /// A newer version exists; rendered with the given style
    UpdateAvailable(ButtonStyle),
}

pub struct WindowController<C: Collaborators> {
    store: ConfigStore,
    record: SettingsRecord,
    options: ControllerOptions,
    collaborators: C,

    theme: ThemeMode,
    pinned: bool,
    badge: VersionBadge,
    closed: bool,

    updater: Option<C::Updater>,
    reporter: Option<C::Reporter>,
    // Built on the first viewer click
    viewer: Option<C::Viewer>,
}

impl<C: Collaborators> WindowController<C> {
    /// Create the controller and apply the stored preferences to the surface
    pub fn new(
        store: ConfigStore,
        record: SettingsRecord,
        options: ControllerOptions,
        mut collaborators: C,
        surface: &mut impl WindowSurface,
    ) -> Self {
        let version = options.version.as_str();

        let updater = if !version.is_empty() && record.check_for_update && !record.url.is_empty() {
            tracing::info!("Update checks enabled against {}", record.url);
            Some(collaborators.update_checker(&record.url, &record.token, version))
        } else {
            None
        };

        let reporter = if !record.issues_url.is_empty() {
            Some(collaborators.issue_reporter(version, &record.issues_url, &record.issues_token))
        } else {
            None
        };

        let badge = if version.is_empty() {
            VersionBadge::Hidden
        } else {
            VersionBadge::Current
        };

        let theme = ThemeMode::from_dark(record.dark_theme);
        surface.apply_style(&StyleConfig::for_mode(theme));

        match record.stored_size() {
            Some((width, height)) => surface.resize(width, height),
            None => tracing::debug!(
                "Stored size {}x{} not set, keeping toolkit default",
                record.width,
                record.height
            ),
        }

        Self {
            store,
            record,
            options,
            collaborators,
            theme,
            pinned: false,
            badge,
            closed: false,
            updater,
            reporter,
            viewer: None,
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn style(&self) -> StyleConfig {
        StyleConfig::for_mode(self.theme)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn badge(&self) -> VersionBadge {
        self.badge
    }

    pub fn version(&self) -> &str {
        &self.options.version
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    pub fn reporting_enabled(&self) -> bool {
        self.reporter.is_some()
    }

    pub fn updater(&self) -> Option<&C::Updater> {
        self.updater.as_ref()
    }

    pub fn updater_mut(&mut self) -> Option<&mut C::Updater> {
        self.updater.as_mut()
    }

    pub fn reporter(&self) -> Option<&C::Reporter> {
        self.reporter.as_ref()
    }

    pub fn reporter_mut(&mut self) -> Option<&mut C::Reporter> {
        self.reporter.as_mut()
    }

    pub fn viewer(&self) -> Option<&C::Viewer> {
        self.viewer.as_ref()
    }

    pub fn viewer_mut(&mut self) -> Option<&mut C::Viewer> {
        self.viewer.as_mut()
    }

    pub fn toggle_theme(&mut self, surface: &mut impl WindowSurface) {
        if self.closed {
            return;
        }
        self.theme = self.theme.toggled();
        tracing::debug!("Theme switched to {}", self.theme);
        surface.apply_style(&StyleConfig::for_mode(self.theme));
    }

    pub fn toggle_pin(&mut self, surface: &mut impl WindowSurface) {
        if self.closed {
            return;
        }
        self.pinned = !self.pinned;
        tracing::debug!("Always on top: {}", self.pinned);
        surface.set_always_on_top(self.pinned);
        surface.show();
    }

    /// Whether a new-version notification would still change anything
    pub fn awaiting_update_signal(&self) -> bool {
        !self.closed
            && self.updater.is_some()
            && !matches!(self.badge, VersionBadge::UpdateAvailable(_))
    }

    /// The update checker found a newer version.
    ///
    /// Ignored when no update checker was built.
    pub fn notify_new_version(&mut self) {
        if self.closed || self.updater.is_none() {
            return;
        }
        if !matches!(self.badge, VersionBadge::UpdateAvailable(_)) {
            tracing::info!("New version available (running v{})", self.options.version);
            self.badge = VersionBadge::UpdateAvailable(ButtonStyle::download());
        }
    }

    /// Toggle the update checker window
    pub fn on_version_clicked(&mut self) {
        let Some(updater) = self.updater.as_mut() else {
            return;
        };
        if updater.is_visible() {
            updater.close();
        } else {
            updater.show();
        }
    }

    pub fn show_reporter(&mut self) {
        if let Some(reporter) = self.reporter.as_mut() {
            reporter.show();
        }
    }

    pub fn hide_reporter(&mut self) {
        if let Some(reporter) = self.reporter.as_mut() {
            reporter.hide();
        }
    }

    /// The composer submitted a report; hide it
    pub fn on_report_submitted(&mut self) {
        if self.reporter.is_some() {
            tracing::debug!("Report submitted, hiding composer");
        }
        self.hide_reporter();
    }

    pub fn show_viewer(&mut self) {
        if self.reporter.is_none() {
            return;
        }
        if self.viewer.is_none() {
            tracing::debug!("Creating report viewer");
            self.viewer = Some(
                self.collaborators
                    .issue_viewer(&self.record.issues_url, &self.record.issues_token),
            );
        }
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.show();
        }
    }

    /// Persist the live window state and close.
    ///
    /// A failed save is logged and the close still goes ahead. Calling this
    /// again after the window has closed does nothing.
    pub fn on_close(&mut self, geometry: WindowGeometry, surface: &mut impl WindowSurface) {
        if self.closed {
            return;
        }
        self.closed = true;

        let keep_size = if self.options.track_maximized {
            self.record.is_maximized = geometry.maximized;
            geometry.maximized
        } else {
            false
        };
        if !keep_size {
            self.record.width = clamp_dimension(geometry.width);
            self.record.height = clamp_dimension(geometry.height);
        }
        self.record.dark_theme = self.theme.is_dark();

        match self.store.save(&self.record) {
            Ok(()) => tracing::info!("Saved window settings to {:?}", self.store.path()),
            Err(e) => tracing::warn!("Failed to save window settings: {}", e),
        }

        if self.options.close_all_on_exit {
            if let Some(updater) = self.updater.as_mut() {
                updater.close();
            }
            if let Some(reporter) = self.reporter.as_mut() {
                reporter.hide();
            }
            surface.close(CloseScope::AllWindows);
        } else {
            surface.close(CloseScope::MainWindow);
        }
    }
}

fn clamp_dimension(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::NoCollaborators;
    use crate::config::CONFIG_FILE_NAME;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Shared log of collaborator activity
    #[derive(Debug, Default)]
    struct Activity {
        events: Vec<&'static str>,
        viewers_built: usize,
    }

    #[derive(Clone, Default)]
    struct CountingCollaborators {
        activity: Rc<RefCell<Activity>>,
    }

    struct CountingWindow {
        activity: Rc<RefCell<Activity>>,
        visible: bool,
    }

    impl UpdateWindow for CountingWindow {
        fn show(&mut self) {
            self.visible = true;
            self.activity.borrow_mut().events.push("updater.show");
        }

        fn close(&mut self) {
            self.visible = false;
            self.activity.borrow_mut().events.push("updater.close");
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    impl ReportComposer for CountingWindow {
        fn show(&mut self) {
            self.visible = true;
            self.activity.borrow_mut().events.push("reporter.show");
        }

        fn hide(&mut self) {
            self.visible = false;
            self.activity.borrow_mut().events.push("reporter.hide");
        }
    }

    impl ReportViewer for CountingWindow {
        fn show(&mut self) {
            self.visible = true;
            self.activity.borrow_mut().events.push("viewer.show");
        }
    }

    impl CountingCollaborators {
        fn window(&self) -> CountingWindow {
            CountingWindow {
                activity: self.activity.clone(),
                visible: false,
            }
        }
    }

    impl Collaborators for CountingCollaborators {
        type Updater = CountingWindow;
        type Reporter = CountingWindow;
        type Viewer = CountingWindow;

        fn update_checker(&mut self, _url: &str, _token: &str, _version: &str) -> CountingWindow {
            self.window()
        }

        fn issue_reporter(&mut self, _version: &str, _url: &str, _token: &str) -> CountingWindow {
            self.window()
        }

        fn issue_viewer(&mut self, _url: &str, _token: &str) -> CountingWindow {
            self.activity.borrow_mut().viewers_built += 1;
            self.window()
        }
    }

    fn unique_store(prefix: &str) -> (PathBuf, ConfigStore) {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let dir = std::env::temp_dir().join(format!(
            "modern-window-ctl-{prefix}-{}-{nanos}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        let store = ConfigStore::at(dir.join(CONFIG_FILE_NAME));
        (dir, store)
    }

    fn full_record() -> SettingsRecord {
        SettingsRecord {
            url: "https://updates.example.com".to_string(),
            issues_url: "https://issues.example.com".to_string(),
            ..SettingsRecord::default()
        }
    }

    #[test]
    fn test_startup_applies_light_theme_without_resize() {
        let (dir, store) = unique_store("startup-light");
        let mut surface = RecordingSurface::new();

        let ctl = WindowController::new(
            store,
            SettingsRecord::default(),
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );

        assert_eq!(ctl.theme(), ThemeMode::Light);
        assert!(!ctl.is_pinned());
        assert_eq!(ctl.badge(), VersionBadge::Hidden);
        assert_eq!(surface.take(), vec![SurfaceCall::ApplyStyle(ThemeMode::Light)]);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_startup_restores_dark_theme_and_size() {
        let (dir, store) = unique_store("startup-dark");
        let mut surface = RecordingSurface::new();
        let record = SettingsRecord {
            dark_theme: true,
            width: 1024,
            height: 700,
            ..SettingsRecord::default()
        };

        let ctl = WindowController::new(
            store,
            record,
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );

        assert_eq!(ctl.theme(), ThemeMode::Dark);
        assert_eq!(
            surface.take(),
            vec![
                SurfaceCall::ApplyStyle(ThemeMode::Dark),
                SurfaceCall::Resize(1024, 700)
            ]
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_resize_suppressed_when_width_unset() {
        let (dir, store) = unique_store("suppress");
        let mut surface = RecordingSurface::new();
        let record = SettingsRecord {
            width: 0,
            height: 600,
            ..SettingsRecord::default()
        };

        WindowController::new(
            store,
            record,
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );

        assert!(!surface
            .calls
            .iter()
            .any(|call| matches!(call, SurfaceCall::Resize(..))));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_toggle_theme_is_involution() {
        let (dir, store) = unique_store("theme");
        let mut surface = RecordingSurface::new();
        let mut ctl = WindowController::new(
            store,
            SettingsRecord::default(),
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );
        surface.take();

        ctl.toggle_theme(&mut surface);
        assert_eq!(ctl.theme(), ThemeMode::Dark);
        ctl.toggle_theme(&mut surface);
        assert_eq!(ctl.theme(), ThemeMode::Light);

        assert_eq!(
            surface.take(),
            vec![
                SurfaceCall::ApplyStyle(ThemeMode::Dark),
                SurfaceCall::ApplyStyle(ThemeMode::Light)
            ]
        );

        // Theme flips stay in memory until close
        assert!(!dir.join(CONFIG_FILE_NAME).exists());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_toggle_pin_sets_flag_then_reshows() {
        let (dir, store) = unique_store("pin");
        let mut surface = RecordingSurface::new();
        let mut ctl = WindowController::new(
            store,
            SettingsRecord::default(),
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );
        surface.take();

        ctl.toggle_pin(&mut surface);
        assert!(ctl.is_pinned());
        ctl.toggle_pin(&mut surface);
        assert!(!ctl.is_pinned());

        assert_eq!(
            surface.take(),
            vec![
                SurfaceCall::SetAlwaysOnTop(true),
                SurfaceCall::Show,
                SurfaceCall::SetAlwaysOnTop(false),
                SurfaceCall::Show
            ]
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_close_persists_geometry_and_theme() {
        let (dir, store) = unique_store("close");
        let mut surface = RecordingSurface::new();
        let mut ctl = WindowController::new(
            store.clone(),
            SettingsRecord::default(),
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );
        ctl.toggle_theme(&mut surface);

        ctl.on_close(
            WindowGeometry {
                width: 800,
                height: 600,
                maximized: false,
            },
            &mut surface,
        );

        let saved = store.load().unwrap();
        assert_eq!(saved.width, 800);
        assert_eq!(saved.height, 600);
        assert!(saved.dark_theme);
        assert!(!saved.is_maximized);
        assert!(ctl.is_closed());
        assert_eq!(
            surface.calls.last(),
            Some(&SurfaceCall::Close(CloseScope::AllWindows))
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_close_while_maximized_keeps_stored_size() {
        let (dir, store) = unique_store("maximized");
        let mut surface = RecordingSurface::new();
        let record = SettingsRecord {
            width: 640,
            height: 480,
            ..SettingsRecord::default()
        };
        let mut ctl = WindowController::new(
            store.clone(),
            record,
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );

        ctl.on_close(
            WindowGeometry {
                width: 1920,
                height: 1080,
                maximized: true,
            },
            &mut surface,
        );

        let saved = store.load().unwrap();
        assert_eq!(saved.width, 640);
        assert_eq!(saved.height, 480);
        assert!(saved.is_maximized);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_close_without_maximized_tracking() {
        let (dir, store) = unique_store("untracked");
        let mut surface = RecordingSurface::new();
        let options = ControllerOptions {
            close_all_on_exit: false,
            track_maximized: false,
            ..ControllerOptions::default()
        };
        let mut ctl = WindowController::new(
            store.clone(),
            SettingsRecord::default(),
            options,
            NoCollaborators,
            &mut surface,
        );

        ctl.on_close(
            WindowGeometry {
                width: 1920,
                height: 1080,
                maximized: true,
            },
            &mut surface,
        );

        let saved = store.load().unwrap();
        assert_eq!(saved.width, 1920);
        assert_eq!(saved.height, 1080);
        assert!(!saved.is_maximized);
        assert_eq!(
            surface.calls.last(),
            Some(&SurfaceCall::Close(CloseScope::MainWindow))
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_failed_save_still_closes() {
        let (dir, _) = unique_store("save-fails");
        let store = ConfigStore::at(dir.join("missing-subdir").join(CONFIG_FILE_NAME));
        let mut surface = RecordingSurface::new();
        let mut ctl = WindowController::new(
            store,
            SettingsRecord::default(),
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );

        ctl.on_close(
            WindowGeometry {
                width: 800,
                height: 600,
                maximized: false,
            },
            &mut surface,
        );

        assert!(ctl.is_closed());
        assert!(matches!(surface.calls.last(), Some(SurfaceCall::Close(_))));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_second_close_is_noop() {
        let (dir, store) = unique_store("double-close");
        let mut surface = RecordingSurface::new();
        let mut ctl = WindowController::new(
            store,
            SettingsRecord::default(),
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );
        let geometry = WindowGeometry {
            width: 800,
            height: 600,
            maximized: false,
        };

        ctl.on_close(geometry, &mut surface);
        surface.take();
        ctl.on_close(geometry, &mut surface);
        ctl.toggle_theme(&mut surface);

        assert!(surface.calls.is_empty());
        assert_eq!(ctl.theme(), ThemeMode::Light);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_version_click_without_updater_is_noop() {
        let (dir, store) = unique_store("no-updater");
        let mut surface = RecordingSurface::new();
        let collaborators = CountingCollaborators::default();
        let activity = collaborators.activity.clone();

        // Version present but no update url configured
        let mut ctl = WindowController::new(
            store,
            SettingsRecord::default(),
            ControllerOptions::with_version("1.2.0"),
            collaborators,
            &mut surface,
        );

        assert!(ctl.updater().is_none());
        assert_eq!(ctl.badge(), VersionBadge::Current);
        ctl.on_version_clicked();
        assert!(activity.borrow().events.is_empty());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_version_click_toggles_updater_window() {
        let (dir, store) = unique_store("updater");
        let mut surface = RecordingSurface::new();
        let collaborators = CountingCollaborators::default();
        let activity = collaborators.activity.clone();

        let mut ctl = WindowController::new(
            store,
            full_record(),
            ControllerOptions::with_version("1.2.0"),
            collaborators,
            &mut surface,
        );

        ctl.on_version_clicked();
        assert!(ctl.updater().map(|u| u.is_visible()).unwrap_or(false));
        ctl.on_version_clicked();
        assert!(!ctl.updater().map(|u| u.is_visible()).unwrap_or(true));

        assert_eq!(activity.borrow().events, vec!["updater.show", "updater.close"]);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_updater_requires_check_for_update() {
        let (dir, store) = unique_store("updates-off");
        let mut surface = RecordingSurface::new();
        let record = SettingsRecord {
            check_for_update: false,
            ..full_record()
        };

        let ctl = WindowController::new(
            store,
            record,
            ControllerOptions::with_version("1.2.0"),
            CountingCollaborators::default(),
            &mut surface,
        );

        assert!(ctl.updater().is_none());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_new_version_swaps_badge_once() {
        let (dir, store) = unique_store("new-version");
        let mut surface = RecordingSurface::new();
        let mut ctl = WindowController::new(
            store,
            full_record(),
            ControllerOptions::with_version("1.2.0"),
            CountingCollaborators::default(),
            &mut surface,
        );

        ctl.notify_new_version();
        ctl.notify_new_version();

        assert_eq!(
            ctl.badge(),
            VersionBadge::UpdateAvailable(ButtonStyle::download())
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_new_version_ignored_without_version() {
        let (dir, store) = unique_store("no-version");
        let mut surface = RecordingSurface::new();
        let mut ctl = WindowController::new(
            store,
            full_record(),
            ControllerOptions::default(),
            NoCollaborators,
            &mut surface,
        );

        ctl.notify_new_version();
        assert_eq!(ctl.badge(), VersionBadge::Hidden);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_viewer_is_built_lazily_once() {
        let (dir, store) = unique_store("viewer");
        let mut surface = RecordingSurface::new();
        let collaborators = CountingCollaborators::default();
        let activity = collaborators.activity.clone();

        let mut ctl = WindowController::new(
            store,
            full_record(),
            ControllerOptions::with_version("1.2.0"),
            collaborators,
            &mut surface,
        );

        assert!(ctl.viewer().is_none());
        assert_eq!(activity.borrow().viewers_built, 0);

        ctl.show_viewer();
        ctl.show_viewer();

        assert!(ctl.viewer().is_some());
        assert_eq!(activity.borrow().viewers_built, 1);
        assert_eq!(activity.borrow().events, vec!["viewer.show", "viewer.show"]);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_reporting_disabled_without_issues_url() {
        let (dir, store) = unique_store("no-issues");
        let mut surface = RecordingSurface::new();
        let collaborators = CountingCollaborators::default();
        let activity = collaborators.activity.clone();

        let mut ctl = WindowController::new(
            store,
            SettingsRecord::default(),
            ControllerOptions::with_version("1.2.0"),
            collaborators,
            &mut surface,
        );

        assert!(!ctl.reporting_enabled());
        ctl.show_reporter();
        ctl.show_viewer();
        ctl.on_report_submitted();

        assert!(ctl.viewer().is_none());
        assert!(activity.borrow().events.is_empty());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_report_submission_hides_composer() {
        let (dir, store) = unique_store("report");
        let mut surface = RecordingSurface::new();
        let collaborators = CountingCollaborators::default();
        let activity = collaborators.activity.clone();

        let mut ctl = WindowController::new(
            store,
            full_record(),
            ControllerOptions::with_version("1.2.0"),
            collaborators,
            &mut surface,
        );

        ctl.show_reporter();
        ctl.on_report_submitted();

        assert_eq!(activity.borrow().events, vec!["reporter.show", "reporter.hide"]);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_close_all_closes_collaborator_windows() {
        let (dir, store) = unique_store("close-all");
        let mut surface = RecordingSurface::new();
        let collaborators = CountingCollaborators::default();
        let activity = collaborators.activity.clone();

        let mut ctl = WindowController::new(
            store,
            full_record(),
            ControllerOptions::with_version("1.2.0"),
            collaborators,
            &mut surface,
        );
        ctl.on_version_clicked();

        ctl.on_close(
            WindowGeometry {
                width: 800,
                height: 600,
                maximized: false,
            },
            &mut surface,
        );

        assert_eq!(
            activity.borrow().events,
            vec!["updater.show", "updater.close", "reporter.hide"]
        );

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_new_version_ignored_without_updater() {
        let (dir, store) = unique_store("no-updater-signal");
        let mut surface = RecordingSurface::new();

        // Version set but no update url, so no checker is built
        let mut ctl = WindowController::new(
            store,
            SettingsRecord::default(),
            ControllerOptions::with_version("1.0.0"),
            NoCollaborators,
            &mut surface,
        );

        assert!(!ctl.awaiting_update_signal());
        ctl.notify_new_version();
        assert_eq!(ctl.badge(), VersionBadge::Current);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_awaiting_update_signal_until_first_notice() {
        let (dir, store) = unique_store("awaiting-signal");
        let mut surface = RecordingSurface::new();
        let mut ctl = WindowController::new(
            store,
            full_record(),
            ControllerOptions::with_version("1.2.0"),
            CountingCollaborators::default(),
            &mut surface,
        );

        assert!(ctl.awaiting_update_signal());
        ctl.notify_new_version();
        assert!(!ctl.awaiting_update_signal());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_hide_reporter_hides_composer() {
        let (dir, store) = unique_store("hide-reporter");
        let mut surface = RecordingSurface::new();
        let collaborators = CountingCollaborators::default();
        let activity = collaborators.activity.clone();

        let mut ctl = WindowController::new(
            store,
            full_record(),
            ControllerOptions::with_version("1.2.0"),
            collaborators,
            &mut surface,
        );

        ctl.show_reporter();
        ctl.hide_reporter();

        assert_eq!(activity.borrow().events, vec!["reporter.show", "reporter.hide"]);

        let _ = fs::remove_dir_all(dir);
    }
}
