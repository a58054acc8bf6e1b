// SPDX-License-Identifier: MPL-2.0
//! Before/after image comparison slider.
//!
//! The component is split into two sub-components following the same
//! `State`/`Message`/`Effect` shape:
//!
//! - [`position`]: divider position, drag session, keyboard stepping
//! - [`assets`]: readiness of the two images and their probes
//!
//! [`canvas`] renders the ready state and feeds raw input back as
//! [`position::Message`]s. This module wires the pieces together, runs probes
//! as iced tasks and picks what to show from the [`DisplayState`].

pub mod assets;
pub mod canvas;
pub mod position;

use crate::domain::comparison::{AssetSlot, DisplayState, FailedAssets, SliderPosition};
use crate::i18n::fluent::I18n;
use crate::media::probe::Prober;
use crate::ui::components::ErrorDisplay;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{tooltip, Column, Container, Row, Space, Stack, Text, Tooltip};
use iced::{Element, Length, Task};
use std::sync::Arc;

pub use position::SliderAccessibility;

/// Comparison slider state.
pub struct State {
    position: position::State,
    assets: assets::State,
    prober: Arc<dyn Prober>,
    spinner_rotation: f32,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("position", &self.position)
            .field("assets", &self.assets)
            .field("spinner_rotation", &self.spinner_rotation)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Position(position::Message),
    Assets(assets::Message),
    SpinnerTick,
}

impl State {
    #[must_use]
    pub fn new(prober: Arc<dyn Prober>) -> Self {
        Self {
            position: position::State::default(),
            assets: assets::State::new(),
            prober,
            spinner_rotation: 0.0,
        }
    }

    /// Points `slot` at a new image and starts probing it.
    pub fn set_asset(&mut self, slot: AssetSlot, url: impl Into<String>) -> Task<Message> {
        self.update(Message::Assets(assets::Message::SetAsset {
            slot,
            url: url.into(),
        }))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Position(msg) => {
                match self.position.handle(msg) {
                    position::Effect::DragEnded { from, to } => {
                        tracing::trace!(from = from.value(), to = to.value(), "divider released");
                    }
                    position::Effect::None
                    | position::Effect::DragStarted
                    | position::Effect::PositionChanged(_)
                    | position::Effect::KeyConsumed(_) => {}
                }
                Task::none()
            }
            Message::Assets(msg) => match self.assets.handle(msg) {
                assets::Effect::StartProbe(request) => {
                    let probe = request.run(self.prober.as_ref());
                    Task::perform(probe, |completion| {
                        Message::Assets(assets::Message::ProbeFinished(completion))
                    })
                }
                assets::Effect::StatusChanged { .. } => {
                    if self.assets.display_state().is_ready() {
                        tracing::info!("both images ready");
                    }
                    Task::none()
                }
                assets::Effect::None => Task::none(),
            },
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                Task::none()
            }
        }
    }

    /// Releases listeners and cancels probes. Further input is ignored.
    pub fn teardown(&mut self) {
        self.position.teardown();
        self.assets.teardown();
    }

    #[must_use]
    pub fn current_position(&self) -> SliderPosition {
        self.position.current_position()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.position.is_dragging()
    }

    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        self.assets.display_state()
    }

    #[must_use]
    pub fn accessibility(&self) -> SliderAccessibility {
        self.position.accessibility()
    }

    #[must_use]
    pub fn position(&self) -> &position::State {
        &self.position
    }

    #[must_use]
    pub fn assets(&self) -> &assets::State {
        &self.assets
    }

    /// Whether the spinner needs ticks.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.display_state() == DisplayState::Loading && !self.position.is_torn_down()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let body = match self.display_state() {
            DisplayState::Ready => self.ready_view(i18n),
            DisplayState::Loading => self.loading_view(i18n),
            DisplayState::Failed(failed) => self.failure_view(i18n, failed),
        };

        Container::new(body)
            .width(Length::Fill)
            .max_width(sizing::COMPARISON_MAX_WIDTH)
            .into()
    }

    fn ready_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let (Some(before), Some(after)) = (
            self.assets.asset(AssetSlot::Before),
            self.assets.asset(AssetSlot::After),
        ) else {
            return self.loading_view(i18n);
        };

        let divider = canvas::ComparisonCanvas::new(&self.position, before, after)
            .into_element()
            .map(Message::Position);
        let comparison = Tooltip::new(
            divider,
            Text::new(accessible_label(i18n, self.accessibility())).size(typography::BODY),
            tooltip::Position::FollowCursor,
        )
        .gap(spacing::XS)
        .padding(spacing::XXS)
        .style(styles::overlay::readout);

        let labels = Row::new()
            .padding(spacing::XS)
            .push(label(i18n.tr("label-before")))
            .push(Space::new().width(Length::Fill))
            .push(label(i18n.tr("label-after")));

        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::COMPARISON_HEIGHT))
            .push(comparison)
            .push(labels);

        if let Some(percent) = self.position.readout() {
            stack = stack.push(readout_overlay(i18n, percent));
        }

        stack.into()
    }

    fn loading_view<'a>(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let content = Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(AnimatedSpinner::new(palette::GRAY_400, self.spinner_rotation).into_element())
            .push(Text::new(i18n.tr("loading-images")).size(typography::BODY));

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::COMPARISON_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }

    fn failure_view<'a>(&self, i18n: &'a I18n, failed: FailedAssets) -> Element<'a, Message> {
        let title = match failed {
            FailedAssets::Both => i18n.tr("error-both-images"),
            FailedAssets::Before | FailedAssets::After => {
                let slot = if failed == FailedAssets::Before {
                    AssetSlot::Before
                } else {
                    AssetSlot::After
                };
                let slot_name = i18n.tr(&format!("slot-{slot}"));
                i18n.tr_with_args("error-single-image", &[("slot", slot_name.as_str())])
            }
        };

        let display = AssetSlot::ALL
            .into_iter()
            .filter_map(|slot| self.assets.error(slot).map(|error| (slot, error)))
            .fold(
                ErrorDisplay::new()
                    .title(title)
                    .message(i18n.tr("error-check-locations")),
                |display, (slot, error)| {
                    let detail = format!("{} ({error})", i18n.tr(error.i18n_key()));
                    display.detail(i18n.tr_with_args(
                        &format!("error-details-{slot}"),
                        &[("detail", detail.as_str())],
                    ))
                },
            );

        Container::new(display.view())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::COMPARISON_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}

fn label<'a>(content: String) -> Element<'a, Message> {
    Container::new(Text::new(content).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::SM))
        .into()
}

/// Spoken-style description of the divider.
///
/// iced 0.14 has no accessibility tree, so the slider role and range are
/// surfaced as the canvas tooltip instead.
fn accessible_label(i18n: &I18n, a11y: SliderAccessibility) -> String {
    i18n.tr_with_args(
        "slider-accessible-name",
        &[
            ("role", a11y.role),
            ("min", &a11y.min.to_string()),
            ("max", &a11y.max.to_string()),
            ("now", &a11y.now.to_string()),
        ],
    )
}

/// Bubble that sits roughly above the divider.
fn readout_overlay<'a>(i18n: &I18n, percent: u8) -> Element<'a, Message> {
    let text = i18n.tr_with_args("slider-readout", &[("percent", &percent.to_string())]);
    let bubble = Container::new(Text::new(text).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::readout);

    let lead = u16::from(percent);
    let row = Row::new()
        .push(Space::new().width(Length::FillPortion(lead.max(1))))
        .push(bubble)
        .push(Space::new().width(Length::FillPortion((100 - lead).max(1))));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
}
