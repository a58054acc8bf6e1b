// SPDX-License-Identifier: MPL-2.0
//! Divider position sub-component.
//!
//! Owns the slider position and the drag flag, and turns pointer, touch and
//! keyboard input into clamped position updates. Mouse and touch feed the same
//! drag session; which device started it does not matter.

use crate::domain::comparison::{position_bounds, ContainerBounds, SliderPosition, StepDirection};
use crate::ui::state::{DragState, GlobalListener, ListenerGuard, ListenerRegistry, DRAG_LISTENERS};

/// ARIA-style description of the divider control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderAccessibility {
    pub role: &'static str,
    pub min: u8,
    pub max: u8,
    pub now: u8,
    pub focusable: bool,
}

/// Position sub-component state.
#[derive(Debug)]
pub struct State {
    position: SliderPosition,
    drag: DragState,
    registry: ListenerRegistry,
    /// Held exactly while a drag is active.
    listeners: Option<ListenerGuard>,
    torn_down: bool,
}

/// Normalized input for the position sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    PointerPressed,
    PointerMoved { x: f32, bounds: ContainerBounds },
    PointerReleased,
    TouchStarted,
    TouchMoved { x: f32, bounds: ContainerBounds },
    TouchEnded,
    TouchCancelled,
    /// Left/right arrow.
    KeyPressed(StepDirection),
}

/// Effects produced by position updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    DragStarted,
    DragEnded {
        from: SliderPosition,
        to: SliderPosition,
    },
    PositionChanged(SliderPosition),
    /// The key was handled; the renderer must keep it from scrolling.
    KeyConsumed(SliderPosition),
}

impl Default for State {
    fn default() -> Self {
        Self::new(ListenerRegistry::new())
    }
}

impl State {
    /// Creates a controller at the default position that registers its
    /// window-wide listeners in `registry`.
    #[must_use]
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            position: SliderPosition::default(),
            drag: DragState::default(),
            registry,
            listeners: None,
            torn_down: false,
        }
    }

    /// Handle a position message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PointerPressed | Message::TouchStarted => {
                if self.begin_drag() {
                    Effect::DragStarted
                } else {
                    Effect::None
                }
            }
            Message::PointerMoved { x, bounds } | Message::TouchMoved { x, bounds } => {
                if self.move_to(x, bounds) {
                    Effect::PositionChanged(self.position)
                } else {
                    Effect::None
                }
            }
            Message::PointerReleased | Message::TouchEnded | Message::TouchCancelled => {
                match self.end_drag() {
                    Some(from) => Effect::DragEnded {
                        from,
                        to: self.position,
                    },
                    None => Effect::None,
                }
            }
            Message::KeyPressed(direction) => {
                if self.torn_down {
                    return Effect::None;
                }
                self.step_by(direction);
                Effect::KeyConsumed(self.position)
            }
        }
    }

    /// Starts a drag and acquires the window-wide listeners.
    ///
    /// Returns false if a drag was already active (or after teardown).
    pub fn begin_drag(&mut self) -> bool {
        if self.torn_down || !self.drag.start(self.position) {
            return false;
        }
        self.listeners = Some(self.registry.acquire(DRAG_LISTENERS));
        tracing::debug!(position = self.position.value(), "drag started");
        true
    }

    /// Ends the drag and releases the listeners. Returns the drag origin, or
    /// `None` if no drag was active.
    pub fn end_drag(&mut self) -> Option<SliderPosition> {
        let origin = self.drag.stop();
        self.listeners = None;
        if let Some(from) = origin {
            tracing::debug!(
                from = from.value(),
                to = self.position.value(),
                "drag ended"
            );
        }
        origin
    }

    /// Moves the divider under `client_x` while dragging.
    ///
    /// Ignored when no drag is active, when `bounds` is degenerate, or when
    /// `client_x` is NaN. Returns true if the position changed.
    pub fn move_to(&mut self, client_x: f32, bounds: ContainerBounds) -> bool {
        if self.torn_down || !self.drag.is_dragging {
            return false;
        }
        let Some(candidate) = SliderPosition::from_client_x(client_x, bounds) else {
            tracing::trace!(?bounds, client_x, "ignoring move with unusable geometry");
            return false;
        };
        self.apply(candidate)
    }

    /// Moves the divider one keyboard step, regardless of drag state.
    /// Returns true if the position changed.
    pub fn step_by(&mut self, direction: StepDirection) -> bool {
        if self.torn_down {
            return false;
        }
        self.apply(self.position.step(direction))
    }

    fn apply(&mut self, candidate: SliderPosition) -> bool {
        if candidate == self.position {
            return false;
        }
        self.position = candidate;
        true
    }

    /// Releases every listener and freezes the controller; later input is ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.end_drag();
        self.torn_down = true;
    }

    #[must_use]
    pub fn current_position(&self) -> SliderPosition {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether the renderer should forward window-wide events of `kind`.
    #[must_use]
    pub fn listens_for(&self, kind: GlobalListener) -> bool {
        self.listeners
            .as_ref()
            .is_some_and(|guard| guard.kinds().contains(&kind))
            && self.registry.is_registered(kind)
    }

    /// Registry the window-wide listeners are registered in.
    #[must_use]
    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    /// Percentage readout, shown only while dragging.
    #[must_use]
    pub fn readout(&self) -> Option<u8> {
        self.drag.is_dragging.then(|| self.position.rounded())
    }

    #[must_use]
    pub fn accessibility(&self) -> SliderAccessibility {
        SliderAccessibility {
            role: "slider",
            min: position_bounds::MIN_PERCENT as u8,
            max: position_bounds::MAX_PERCENT as u8,
            now: self.position.rounded(),
            focusable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn container() -> ContainerBounds {
        ContainerBounds::new(0.0, 200.0)
    }

    #[test]
    fn starts_centered_and_idle() {
        let state = State::default();
        assert_abs_diff_eq!(state.current_position().value(), 50.0);
        assert!(!state.is_dragging());
        assert!(state.readout().is_none());
    }

    #[test]
    fn move_is_ignored_without_drag() {
        let mut state = State::default();
        assert!(!state.move_to(10.0, container()));
        assert_abs_diff_eq!(state.current_position().value(), 50.0);
    }

    #[test]
    fn drag_scenario_applies_and_then_ignores_moves() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::PointerPressed), Effect::DragStarted);

        let effect = state.handle(Message::PointerMoved {
            x: 150.0,
            bounds: container(),
        });
        assert_eq!(effect, Effect::PositionChanged(SliderPosition::new(75.0)));

        assert_eq!(
            state.handle(Message::PointerReleased),
            Effect::DragEnded {
                from: SliderPosition::new(50.0),
                to: SliderPosition::new(75.0),
            }
        );

        let effect = state.handle(Message::PointerMoved {
            x: 20.0,
            bounds: container(),
        });
        assert_eq!(effect, Effect::None);
        assert_abs_diff_eq!(state.current_position().value(), 75.0);
    }

    #[test]
    fn moves_past_edges_clamp() {
        let mut state = State::default();
        state.begin_drag();
        state.move_to(-50.0, container());
        assert!(state.current_position().is_min());
        state.move_to(500.0, container());
        assert!(state.current_position().is_max());
    }

    #[test]
    fn inexact_fractions_land_within_float_tolerance() {
        let mut state = State::default();
        state.begin_drag();
        state.move_to(60.0, container());
        assert_abs_diff_eq!(state.current_position().value(), 30.0, epsilon = 1e-4);
        assert_eq!(state.readout(), Some(30));
    }

    #[test]
    fn zero_width_container_is_noop() {
        let mut state = State::default();
        state.begin_drag();
        assert!(!state.move_to(10.0, ContainerBounds::new(0.0, 0.0)));
        assert_abs_diff_eq!(state.current_position().value(), 50.0);
        assert!(!state.current_position().value().is_nan());
    }

    #[test]
    fn begin_and_end_are_idempotent() {
        let mut state = State::default();
        assert!(state.begin_drag());
        assert!(!state.begin_drag());
        assert_eq!(state.registry().total(), DRAG_LISTENERS.len());

        assert!(state.end_drag().is_some());
        assert!(state.end_drag().is_none());
        assert_eq!(state.handle(Message::TouchEnded), Effect::None);
        assert_eq!(state.registry().total(), 0);
    }

    #[test]
    fn touch_and_pointer_share_a_session() {
        let mut state = State::default();
        state.handle(Message::TouchStarted);
        state.handle(Message::PointerMoved {
            x: 50.0,
            bounds: container(),
        });
        assert_abs_diff_eq!(state.current_position().value(), 25.0);
        state.handle(Message::TouchCancelled);
        assert!(!state.is_dragging());
    }

    #[test]
    fn keys_step_independently_of_drag() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::KeyPressed(StepDirection::Right)),
            Effect::KeyConsumed(SliderPosition::new(51.0))
        );
        state.begin_drag();
        state.handle(Message::KeyPressed(StepDirection::Left));
        state.handle(Message::KeyPressed(StepDirection::Left));
        assert_abs_diff_eq!(state.current_position().value(), 49.0);
    }

    #[test]
    fn keys_at_edges_are_consumed_without_moving() {
        let mut state = State::default();
        state.begin_drag();
        state.move_to(0.0, container());
        state.end_drag();

        assert!(!state.step_by(StepDirection::Left));
        assert_eq!(
            state.handle(Message::KeyPressed(StepDirection::Left)),
            Effect::KeyConsumed(SliderPosition::new(0.0))
        );
    }

    #[test]
    fn listeners_follow_drag_lifecycle() {
        let mut state = State::default();
        assert!(!state.listens_for(GlobalListener::PointerMove));
        state.begin_drag();
        for kind in DRAG_LISTENERS {
            assert!(state.listens_for(*kind));
            assert!(state.registry().is_registered(*kind));
        }
        state.end_drag();
        assert!(!state.listens_for(GlobalListener::TouchMove));
        assert_eq!(state.registry().total(), 0);
    }

    #[test]
    fn teardown_during_drag_releases_and_freezes() {
        let mut state = State::default();
        state.begin_drag();
        state.move_to(50.0, container());
        state.teardown();

        assert!(state.is_torn_down());
        assert!(!state.is_dragging());
        assert_eq!(state.registry().total(), 0);

        state.handle(Message::PointerPressed);
        state.handle(Message::PointerMoved {
            x: 190.0,
            bounds: container(),
        });
        assert_eq!(
            state.handle(Message::KeyPressed(StepDirection::Right)),
            Effect::None
        );
        assert_abs_diff_eq!(state.current_position().value(), 25.0);
        assert_eq!(state.registry().total(), 0);
    }

    #[test]
    fn dropping_the_controller_releases_listeners() {
        let registry = ListenerRegistry::new();
        {
            let mut state = State::new(registry.clone());
            state.begin_drag();
            assert!(registry.is_registered(GlobalListener::PointerUp));
        }
        assert_eq!(registry.total(), 0);
    }

    #[test]
    fn readout_and_accessibility_round_position() {
        let mut state = State::default();
        state.begin_drag();
        state.move_to(125.0, container());
        assert_eq!(state.readout(), Some(63));

        let a11y = state.accessibility();
        assert_eq!(a11y.role, "slider");
        assert_eq!((a11y.min, a11y.max, a11y.now), (0, 100, 63));
        assert!(a11y.focusable);

        state.end_drag();
        assert!(state.readout().is_none());
    }
}
