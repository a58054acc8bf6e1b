// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the image labels and the drag readout.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Generic style for overlay indicators like the Before/After labels.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Solid bubble for the percentage readout shown while dragging.
#[must_use]
pub fn readout(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(WHITE)),
        text_color: Some(BLACK),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: crate::ui::design_tokens::radius::FULL.into(),
        },
        ..Default::default()
    }
}
