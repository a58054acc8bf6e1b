// SPDX-License-Identifier: MPL-2.0
//! Canvas program that renders the two images and turns raw window events
//! into position messages.
//!
//! Presses only count inside the canvas. Move and release events are
//! window-wide: they are forwarded only while the position controller holds
//! the matching listener registration, so a drag keeps tracking after the
//! cursor leaves the widget and stops being tracked the moment it ends.

use super::position::{self, Message};
use crate::domain::comparison::{ContainerBounds, StepDirection};
use crate::media::probe::LoadedAsset;
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::state::GlobalListener;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::Action;
use iced::{keyboard, mouse, touch, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Draws the comparison and routes input to the position controller.
pub struct ComparisonCanvas<'a> {
    position: &'a position::State,
    before: &'a LoadedAsset,
    after: &'a LoadedAsset,
}

impl<'a> ComparisonCanvas<'a> {
    #[must_use]
    pub fn new(
        position: &'a position::State,
        before: &'a LoadedAsset,
        after: &'a LoadedAsset,
    ) -> Self {
        Self {
            position,
            before,
            after,
        }
    }

    pub fn into_element(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::COMPARISON_HEIGHT))
            .into()
    }

    fn forwards(&self, kind: GlobalListener) -> bool {
        self.position.listens_for(kind)
    }
}

/// Tracks the finger that started the current touch drag; others are ignored.
#[derive(Debug, Default)]
pub struct TouchState {
    finger: Option<touch::Finger>,
}

impl canvas::Program<Message> for ComparisonCanvas<'_> {
    type State = TouchState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let container = ContainerBounds::new(bounds.x, bounds.width);

        let message = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.is_over(bounds).then_some(Message::PointerPressed)?
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if !self.forwards(GlobalListener::PointerMove) {
                    return None;
                }
                Message::PointerMoved {
                    x: position.x,
                    bounds: container,
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.forwards(GlobalListener::PointerUp)
                    .then_some(Message::PointerReleased)?
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.finger.is_some() || !bounds.contains(*position) {
                    return None;
                }
                state.finger = Some(*id);
                Message::TouchStarted
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if state.finger != Some(*id) || !self.forwards(GlobalListener::TouchMove) {
                    return None;
                }
                Message::TouchMoved {
                    x: position.x,
                    bounds: container,
                }
            }
            iced::Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                if state.finger != Some(*id) {
                    return None;
                }
                state.finger = None;
                self.forwards(GlobalListener::TouchEnd)
                    .then_some(Message::TouchEnded)?
            }
            iced::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.finger != Some(*id) {
                    return None;
                }
                state.finger = None;
                self.forwards(GlobalListener::TouchCancel)
                    .then_some(Message::TouchCancelled)?
            }
            iced::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::ArrowLeft => Message::KeyPressed(StepDirection::Left),
                keyboard::key::Named::ArrowRight => Message::KeyPressed(StepDirection::Right),
                _ => return None,
            },
            _ => return None,
        };

        Some(Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);
        let divider_x = divider_offset(self.position.current_position().as_fraction(), size.width);

        let before_rect = cover_rect(self.before, size);
        frame.with_clip(Rectangle::with_size(size), |f| {
            f.draw_image(before_rect, canvas::Image::new(self.before.handle.clone()));
        });

        // Clipped frames draw relative to the clip origin.
        let after_rect = cover_rect(self.after, size);
        let after_clip = Rectangle {
            x: divider_x,
            y: 0.0,
            width: (size.width - divider_x).max(0.0),
            height: size.height,
        };
        frame.with_clip(after_clip, |f| {
            let shifted = Rectangle {
                x: after_rect.x - divider_x,
                ..after_rect
            };
            f.draw_image(shifted, canvas::Image::new(self.after.handle.clone()));
        });

        frame.fill_rectangle(
            Point::new(divider_x - sizing::DIVIDER_WIDTH / 2.0, 0.0),
            Size::new(sizing::DIVIDER_WIDTH, size.height),
            palette::WHITE,
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.position.is_dragging() || cursor.is_over(bounds) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Horizontal offset of the divider within a container of `width`.
#[must_use]
pub fn divider_offset(fraction: f32, width: f32) -> f32 {
    (fraction * width).clamp(0.0, width.max(0.0))
}

/// Rectangle that scales `asset` to cover `area` while keeping its aspect
/// ratio, centered on both axes.
#[must_use]
pub fn cover_rect(asset: &LoadedAsset, area: Size) -> Rectangle {
    #[allow(clippy::cast_precision_loss)]
    let (width, height) = (asset.width as f32, asset.height as f32);
    if width <= 0.0 || height <= 0.0 {
        return Rectangle::with_size(area);
    }

    let scale = (area.width / width).max(area.height / height);
    let drawn = Size::new(width * scale, height * scale);
    Rectangle {
        x: (area.width - drawn.width) / 2.0,
        y: (area.height - drawn.height) / 2.0,
        width: drawn.width,
        height: drawn.height,
    }
}
