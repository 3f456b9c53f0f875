/// ICED GUI Application Module
///
/// Architecture:
/// - `ModernWindow` renders the chrome and owns the window controller
/// - Controller side effects arrive through `CommandSurface` and become iced commands
/// - The close request is intercepted so settings are saved before the window goes away
pub mod panels;
pub mod styles;

use crate::collaborators::UpdateWindow;
use crate::config::{ConfigStore, SettingsRecord};
use crate::controller::{ControllerOptions, VersionBadge, WindowController, WindowGeometry};
use crate::style::{StyleConfig, ThemeMode};
use crate::surface::{CloseScope, WindowSurface};
use anyhow::Context;
use crossbeam_channel::{Receiver, TryRecvError};
use iced::{
    event, executor, window,
    widget::{Button, Column, Container, Row, Space, Text},
    Alignment, Application, Command, Element, Length, Settings, Size, Subscription, Theme,
};
use panels::PanelCollaborators;
use std::time::Duration;

/// How long the update poller sleeps between checks
const UPDATE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Startup flags for the GUI application
#[derive(Debug)]
pub struct WindowFlags {
    pub store: ConfigStore,
    pub record: SettingsRecord,
    pub options: ControllerOptions,
    /// Fires once when the update checker finds a newer version.
    /// Ignored unless the settings enable an update checker.
    pub update_signal: Option<Receiver<()>>,
}

impl WindowFlags {
    pub fn new(store: ConfigStore, record: SettingsRecord, options: ControllerOptions) -> Self {
        Self {
            store,
            record,
            options,
            update_signal: None,
        }
    }

    pub fn with_update_signal(mut self, signal: Receiver<()>) -> Self {
        self.update_signal = Some(signal);
        self
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Title bar controls
    ToggleTheme,
    TogglePin,
    VersionClicked,

    // Update checker
    UpdatePollTick,
    NewVersionFound,

    // Issue reporting
    ShowReporter,
    ReportDraftChanged(String),
    SubmitReport,
    CancelReport,
    ShowViewer,
    HideViewer,

    // Close sequence
    CloseRequested,
    SizeFetched(Size),
    GeometryFetched(WindowGeometry),
}

/// Translates controller side effects into iced window commands
#[derive(Default)]
pub struct CommandSurface {
    commands: Vec<Command<Message>>,
    style: Option<StyleConfig>,
}

impl CommandSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stylesheet applied since the surface was created, if any
    pub fn applied_style(&self) -> Option<StyleConfig> {
        self.style
    }

    pub fn into_command(self) -> Command<Message> {
        Command::batch(self.commands)
    }
}

impl WindowSurface for CommandSurface {
    fn apply_style(&mut self, style: &StyleConfig) {
        self.style = Some(*style);
    }

    fn set_always_on_top(&mut self, on_top: bool) {
        let level = if on_top {
            window::Level::AlwaysOnTop
        } else {
            window::Level::Normal
        };
        self.commands
            .push(window::change_level(window::Id::MAIN, level));
    }

    fn show(&mut self) {
        self.commands
            .push(window::change_mode(window::Id::MAIN, window::Mode::Windowed));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.commands.push(window::resize(
            window::Id::MAIN,
            Size::new(width as f32, height as f32),
        ));
    }

    fn close(&mut self, scope: CloseScope) {
        // Collaborators render inside the main window, so closing it closes them all
        tracing::debug!("Closing window ({:?})", scope);
        self.commands.push(window::close(window::Id::MAIN));
    }
}

/// Result of one look at the update signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignalPoll {
    Found,
    Empty,
    Disconnected,
}

fn poll_update_signal(rx: &Receiver<()>) -> SignalPoll {
    match rx.try_recv() {
        Ok(()) => SignalPoll::Found,
        Err(TryRecvError::Empty) => SignalPoll::Empty,
        Err(TryRecvError::Disconnected) => SignalPoll::Disconnected,
    }
}

pub struct ModernWindow {
    controller: WindowController<PanelCollaborators>,
    theme: Theme,
    update_signal: Option<Receiver<()>>,
}

impl ModernWindow {
    /// Run a controller transition against a fresh surface and collect its commands
    fn drive(
        &mut self,
        f: impl FnOnce(&mut WindowController<PanelCollaborators>, &mut CommandSurface),
    ) -> Command<Message> {
        let mut surface = CommandSurface::new();
        f(&mut self.controller, &mut surface);
        if let Some(style) = surface.applied_style() {
            self.theme = style.to_theme();
        }
        surface.into_command()
    }

    fn version_badge(&self) -> Option<Element<'_, Message>> {
        let label = format!("v{}", self.controller.version());
        match self.controller.badge() {
            VersionBadge::Hidden => None,
            VersionBadge::Current => Some(
                Button::new(Text::new(label).size(14))
                    .style(iced::theme::Button::Text)
                    .on_press(Message::VersionClicked)
                    .into(),
            ),
            VersionBadge::UpdateAvailable(style) => Some(
                Button::new(Text::new(format!("{label}  Download")).size(14))
                    .style(styles::fixed_button(style))
                    .on_press(Message::VersionClicked)
                    .into(),
            ),
        }
    }

    fn title_bar(&self) -> Element<'_, Message> {
        let mut left = Row::new().spacing(4).align_items(Alignment::Center);
        if let Some(badge) = self.version_badge() {
            left = left.push(badge);
        }

        let mut right = Row::new().spacing(4).align_items(Alignment::Center);
        if self.controller.reporting_enabled() {
            right = right
                .push(
                    Button::new(Text::new("Report").size(14))
                        .style(iced::theme::Button::Text)
                        .on_press(Message::ShowReporter),
                )
                .push(
                    Button::new(Text::new("Issues").size(14))
                        .style(iced::theme::Button::Text)
                        .on_press(Message::ShowViewer),
                );
        }

        let pin_style = if self.controller.is_pinned() {
            iced::theme::Button::Primary
        } else {
            iced::theme::Button::Text
        };
        let theme_label = match self.controller.theme() {
            ThemeMode::Light => "Dark",
            ThemeMode::Dark => "Light",
        };
        right = right
            .push(
                Button::new(Text::new("Pin").size(14))
                    .style(pin_style)
                    .on_press(Message::TogglePin),
            )
            .push(
                Button::new(Text::new(theme_label).size(14))
                    .style(iced::theme::Button::Text)
                    .on_press(Message::ToggleTheme),
            );

        Container::new(
            Row::new()
                .align_items(Alignment::Center)
                .push(left)
                .push(Space::with_width(Length::Fill))
                .push(right),
        )
        .padding(6)
        .width(Length::Fill)
        .style(iced::theme::Container::Box)
        .into()
    }
}

impl Application for ModernWindow {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = WindowFlags;

    fn new(flags: WindowFlags) -> (Self, Command<Message>) {
        let mut surface = CommandSurface::new();
        let controller = WindowController::new(
            flags.store,
            flags.record,
            flags.options,
            PanelCollaborators::new(),
            &mut surface,
        );
        let theme = surface
            .applied_style()
            .unwrap_or_else(|| controller.style())
            .to_theme();

        tracing::info!(
            "Window initialized (theme={}, version={:?})",
            controller.theme(),
            controller.version()
        );

        let app = ModernWindow {
            controller,
            theme,
            update_signal: flags.update_signal,
        };
        (app, surface.into_command())
    }

    fn title(&self) -> String {
        let version = self.controller.version();
        if version.is_empty() {
            String::from("Modern Window")
        } else {
            format!("Modern Window v{version}")
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_events = event::listen_with(|event, _status| match event {
            iced::Event::Window(id, window::Event::CloseRequested) if id == window::Id::MAIN => {
                Some(Message::CloseRequested)
            }
            _ => None,
        });

        // Poll for the update checker's signal
        struct UpdatePoller;

        let update_sub = match &self.update_signal {
            Some(rx) if self.controller.awaiting_update_signal() => iced::subscription::unfold(
                std::any::TypeId::of::<UpdatePoller>(),
                rx.clone(),
                |rx| async move {
                    match poll_update_signal(&rx) {
                        SignalPoll::Found => (Message::NewVersionFound, rx),
                        SignalPoll::Empty => {
                            std::thread::sleep(UPDATE_POLL_INTERVAL);
                            (Message::UpdatePollTick, rx)
                        }
                        // Checker went away without reporting anything
                        SignalPoll::Disconnected => iced::futures::future::pending().await,
                    }
                },
            ),
            _ => Subscription::none(),
        };

        Subscription::batch([window_events, update_sub])
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ToggleTheme => self.drive(|ctl, surface| ctl.toggle_theme(surface)),

            Message::TogglePin => self.drive(|ctl, surface| ctl.toggle_pin(surface)),

            Message::VersionClicked => {
                self.controller.on_version_clicked();
                Command::none()
            }

            Message::UpdatePollTick => Command::none(),

            Message::NewVersionFound => {
                self.controller.notify_new_version();
                Command::none()
            }

            Message::ShowReporter => {
                self.controller.show_reporter();
                Command::none()
            }

            Message::ReportDraftChanged(draft) => {
                if let Some(reporter) = self.controller.reporter_mut() {
                    reporter.set_draft(draft);
                }
                Command::none()
            }

            Message::SubmitReport => {
                let submitted = self
                    .controller
                    .reporter_mut()
                    .map(|reporter| reporter.submit())
                    .unwrap_or(false);
                if submitted {
                    tracing::info!("Issue report submitted");
                    self.controller.on_report_submitted();
                }
                Command::none()
            }

            Message::CancelReport => {
                self.controller.hide_reporter();
                Command::none()
            }

            Message::ShowViewer => {
                self.controller.show_viewer();
                Command::none()
            }

            Message::HideViewer => {
                if let Some(viewer) = self.controller.viewer_mut() {
                    viewer.hide();
                }
                Command::none()
            }

            Message::CloseRequested => {
                window::fetch_size(window::Id::MAIN, Message::SizeFetched)
            }

            Message::SizeFetched(size) => {
                let (width, height) = rounded_size(size);

                if self.controller.options().track_maximized {
                    window::fetch_maximized(window::Id::MAIN, move |maximized| {
                        Message::GeometryFetched(WindowGeometry {
                            width,
                            height,
                            maximized,
                        })
                    })
                } else {
                    let geometry = WindowGeometry {
                        width,
                        height,
                        maximized: false,
                    };
                    self.drive(|ctl, surface| ctl.on_close(geometry, surface))
                }
            }

            Message::GeometryFetched(geometry) => {
                self.drive(|ctl, surface| ctl.on_close(geometry, surface))
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut body = Column::new().spacing(12).padding(16).width(Length::Fill);

        if let Some(updater) = self.controller.updater() {
            if updater.is_visible() {
                body = body.push(updater.view());
            }
        }
        if let Some(reporter) = self.controller.reporter() {
            if reporter.is_visible() {
                body = body.push(reporter.view());
            }
        }
        if let Some(viewer) = self.controller.viewer() {
            if viewer.is_visible() {
                body = body.push(viewer.view());
            }
        }

        Column::new()
            .push(self.title_bar())
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Logical window size rounded to whole pixels
fn rounded_size(size: Size) -> (u32, u32) {
    (
        size.width.round().max(0.0) as u32,
        size.height.round().max(0.0) as u32,
    )
}

/// Run the window with an already loaded settings record
pub fn run(flags: WindowFlags) -> iced::Result {
    tracing::info!("Starting window with settings from {:?}", flags.store.path());

    let mut settings = Settings::with_flags(flags);
    settings.window = window::Settings {
        min_size: Some(Size::new(320.0, 200.0)),
        exit_on_close_request: false,
        ..Default::default()
    };

    let result = ModernWindow::run(settings);
    tracing::info!("Iced returned: {:?}", result);
    result
}

/// Load `app_config.json` from the working directory and run the window.
///
/// A corrupt settings file aborts startup.
pub fn run_from_cwd(options: ControllerOptions) -> anyhow::Result<()> {
    let store = ConfigStore::new()?;
    let record = store
        .load()
        .with_context(|| format!("Failed to load window settings from {:?}", store.path()))?;

    run(WindowFlags::new(store, record, options)).context("Window event loop failed")?;
    Ok(())
}
