// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Shows an error-colored title, a user-facing message and, optionally, a
//! list of technical detail lines under a separator.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::ErrorDisplay;
//!
//! ErrorDisplay::new()
//!     .title("Both images failed to load.")
//!     .message("Check that both image locations are reachable.")
//!     .detail("Before: The image file does not exist.")
//!     .detail("After: Loading the image took too long.")
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, rule, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone, Default)]
pub struct ErrorDisplay {
    title: Option<String>,
    message: Option<String>,
    details: Vec<String>,
}

impl ErrorDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title (main heading).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Appends one technical detail line.
    #[must_use]
    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    /// Renders the error display component.
    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let accent_color = palette::ERROR_500;

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            content = content.push(Text::new(title_text).size(typography::TITLE_MD).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                },
            ));
        }

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        if !self.details.is_empty() {
            let details_column = self.details.into_iter().fold(
                Column::new()
                    .spacing(spacing::XS)
                    .width(Length::Fill)
                    .push(rule::horizontal(1)),
                |column, line| {
                    column.push(Text::new(line).size(typography::CAPTION).style(
                        |theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().secondary.base.text),
                        },
                    ))
                },
            );
            content = content.push(details_column);
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let bg_color = theme.extended_palette().background.weak.color;
                let border_color = theme.extended_palette().background.strong.color;
                container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: iced::Border {
                        color: border_color,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            })
            .into()
    }
}
