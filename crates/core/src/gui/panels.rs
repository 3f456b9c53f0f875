//! In-window collaborator panels
//!
//! Stand-ins for the update, report composer and report viewer windows.
//! They render as panels below the title bar and implement the same
//! show/hide contract the controller expects from real collaborator windows.

use super::Message;
use crate::collaborators::{Collaborators, ReportComposer, ReportViewer, UpdateWindow};
use iced::{
    widget::{Button, Column, Container, Row, Space, Text, TextInput},
    Alignment, Element, Length,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Issue report submitted during this session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReport {
    pub version: String,
    pub text: String,
}

/// Reports shared between the composer and the viewer
pub type ReportLog = Rc<RefCell<Vec<IssueReport>>>;

/// Builds panel-backed collaborators sharing one report log
#[derive(Debug, Default, Clone)]
pub struct PanelCollaborators {
    log: ReportLog,
}

impl PanelCollaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> ReportLog {
        self.log.clone()
    }
}

impl Collaborators for PanelCollaborators {
    type Updater = UpdatePanel;
    type Reporter = ReporterPanel;
    type Viewer = ViewerPanel;

    fn update_checker(&mut self, url: &str, _token: &str, version: &str) -> UpdatePanel {
        UpdatePanel {
            url: url.to_string(),
            version: version.to_string(),
            visible: false,
        }
    }

    fn issue_reporter(&mut self, version: &str, issues_url: &str, _token: &str) -> ReporterPanel {
        ReporterPanel {
            version: version.to_string(),
            issues_url: issues_url.to_string(),
            draft: String::new(),
            visible: false,
            log: self.log.clone(),
        }
    }

    fn issue_viewer(&mut self, issues_url: &str, _token: &str) -> ViewerPanel {
        ViewerPanel {
            issues_url: issues_url.to_string(),
            visible: false,
            log: self.log.clone(),
        }
    }
}

#[derive(Debug)]
pub struct UpdatePanel {
    url: String,
    version: String,
    visible: bool,
}

impl UpdateWindow for UpdatePanel {
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

impl UpdatePanel {
    pub fn view(&self) -> Element<'_, Message> {
        let content = Column::new()
            .spacing(8)
            .push(Text::new("Updates").size(18))
            .push(Text::new(format!("Installed version: v{}", self.version)))
            .push(Text::new(format!("Update service: {}", self.url)).size(12))
            .push(
                Row::new()
                    .push(Space::with_width(Length::Fill))
                    .push(Button::new(Text::new("Close")).on_press(Message::VersionClicked)),
            );

        Container::new(content)
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::Container::Box)
            .into()
    }
}

#[derive(Debug)]
pub struct ReporterPanel {
    version: String,
    issues_url: String,
    draft: String,
    visible: bool,
    log: ReportLog,
}

impl ReportComposer for ReporterPanel {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

impl ReporterPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    /// Record the draft as a report. Returns false if the draft is blank.
    pub fn submit(&mut self) -> bool {
        let text = self.draft.trim();
        if text.is_empty() {
            return false;
        }
        self.log.borrow_mut().push(IssueReport {
            version: self.version.clone(),
            text: text.to_string(),
        });
        self.draft.clear();
        true
    }

    pub fn view(&self) -> Element<'_, Message> {
        let submit = Button::new(Text::new("Submit"));
        let submit = if self.draft.trim().is_empty() {
            submit
        } else {
            submit.on_press(Message::SubmitReport)
        };

        let content = Column::new()
            .spacing(8)
            .push(Text::new("Report a problem").size(18))
            .push(Text::new(format!("Tracker: {}", self.issues_url)).size(12))
            .push(
                TextInput::new("Describe what went wrong...", &self.draft)
                    .on_input(Message::ReportDraftChanged)
                    .on_submit(Message::SubmitReport)
                    .padding(8)
                    .width(Length::Fill),
            )
            .push(
                Row::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(Space::with_width(Length::Fill))
                    .push(
                        Button::new(Text::new("Cancel"))
                            .style(iced::theme::Button::Secondary)
                            .on_press(Message::CancelReport),
                    )
                    .push(submit),
            );

        Container::new(content)
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::Container::Box)
            .into()
    }
}

#[derive(Debug)]
pub struct ViewerPanel {
    issues_url: String,
    visible: bool,
    log: ReportLog,
}

impl ReportViewer for ViewerPanel {
    fn show(&mut self) {
        self.visible = true;
    }
}

impl ViewerPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content = Column::new()
            .spacing(6)
            .push(Text::new("Submitted reports").size(18))
            .push(Text::new(format!("Tracker: {}", self.issues_url)).size(12));

        let reports = self.log.borrow();
        if reports.is_empty() {
            content = content.push(Text::new("No reports submitted yet"));
        }
        for report in reports.iter() {
            content = content.push(Text::new(format!("[v{}] {}", report.version, report.text)));
        }

        content = content.push(
            Row::new()
                .push(Space::with_width(Length::Fill))
                .push(Button::new(Text::new("Close")).on_press(Message::HideViewer)),
        );

        Container::new(content)
            .padding(12)
            .width(Length::Fill)
            .style(iced::theme::Container::Box)
            .into()
    }
}
