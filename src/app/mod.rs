// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the comparison slider to localization and the
//! window lifecycle: both images are probed at boot, and a close request
//! tears the slider down before the runtime exits.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::domain::comparison::AssetSlot;
use crate::i18n::fluent::I18n;
use crate::ui::comparison;
use crate::ui::design_tokens::spacing;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::Container;
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    slider: comparison::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("display_state", &self.slider.display_state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 880;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings. Close requests are handled by the app.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the app and starts probing both images.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            before,
            after,
            config,
            prober,
        } = flags;

        let mut app = App {
            i18n: I18n::new(lang, &config),
            slider: comparison::State::new(prober),
        };
        tracing::info!(
            locale = %app.i18n.current_locale(),
            before = before.as_str(),
            after = after.as_str(),
            "starting comparison"
        );

        let task = Task::batch([
            app.slider.set_asset(AssetSlot::Before, before),
            app.slider.set_asset(AssetSlot::After, after),
        ])
        .map(Message::Comparison);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.slider.is_loading()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Comparison(msg) => self.slider.update(msg).map(Message::Comparison),
            Message::WindowCloseRequested(id) => {
                tracing::debug!(?id, "window close requested");
                self.slider.teardown();
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        Container::new(self.slider.view(&self.i18n).map(Message::Comparison))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(spacing::MD)
            .into()
    }

    #[must_use]
    pub fn slider(&self) -> &comparison::State {
        &self.slider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::comparison::{AssetStatus, DisplayState};
    use crate::error::ProbeError;
    use crate::media::probe::{LoadedAsset, Prober};
    use crate::ui::comparison::position;
    use futures_util::future::{self, BoxFuture};
    use futures_util::FutureExt;
    use std::sync::Arc;

    struct PendingProber;

    impl Prober for PendingProber {
        fn probe(&self, _url: &str) -> BoxFuture<'static, Result<LoadedAsset, ProbeError>> {
            future::pending().boxed()
        }
    }

    fn app() -> App {
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".into()),
            before: "before.png".into(),
            after: "after.png".into(),
            config: Config::default(),
            prober: Arc::new(PendingProber),
        });
        app
    }

    #[test]
    fn boot_probes_both_slots() {
        let app = app();
        assert_eq!(app.slider().display_state(), DisplayState::Loading);
        for slot in AssetSlot::ALL {
            assert_eq!(app.slider().assets().status(slot), AssetStatus::Pending);
            assert!(app.slider().assets().is_probing(slot));
        }
        assert_eq!(
            app.slider().assets().url(AssetSlot::After),
            Some("after.png")
        );
    }

    #[test]
    fn title_is_localized() {
        assert_eq!(app().title(), "Image Comparison Slider");
    }

    #[test]
    fn close_request_tears_down_slider() {
        let mut app = app();
        let _ = app.update(Message::Comparison(comparison::Message::Position(
            position::Message::PointerPressed,
        )));
        assert!(app.slider().is_dragging());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(!app.slider().is_dragging());
        assert!(app.slider().position().is_torn_down());
        assert_eq!(app.slider().position().registry().total(), 0);
        assert!(!app.slider().assets().is_probing(AssetSlot::Before));
    }
}
