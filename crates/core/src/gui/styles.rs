//! Custom widget styles for the title bar

use crate::style::ButtonStyle;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Button painted with fixed colours, independent of the active theme
#[derive(Debug, Clone, Copy)]
pub struct FixedButton(pub ButtonStyle);

impl button::StyleSheet for FixedButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.0.background_color)),
            text_color: self.0.foreground_color,
            border: Border::with_radius(4.0),
            ..Default::default()
        }
    }
}

pub fn fixed_button(style: ButtonStyle) -> iced::theme::Button {
    iced::theme::Button::Custom(Box::new(FixedButton(style)))
}
