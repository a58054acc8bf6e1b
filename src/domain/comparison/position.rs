// SPDX-License-Identifier: MPL-2.0
//! Slider position value objects.
//!
//! The divider position is a percentage of the container width. Every input
//! source (pointer, touch, keyboard) produces a candidate value that is clamped
//! by the same rule before it is applied.

// =============================================================================
// Position Bounds
// =============================================================================

/// Slider position bounds (0% to 100%).
pub mod position_bounds {
    /// Leftmost divider position.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Rightmost divider position.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Position at mount.
    pub const DEFAULT_PERCENT: f32 = 50.0;
    /// Distance moved by a single arrow key press.
    pub const KEYBOARD_STEP: f32 = 1.0;
}

// =============================================================================
// ContainerBounds
// =============================================================================

/// Horizontal geometry of the comparison container, in window coordinates.
///
/// Read fresh for every move event since layout can change between events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    /// Left edge of the container.
    pub left: f32,
    /// Container width.
    pub width: f32,
}

impl ContainerBounds {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Returns true when the bounds cannot be used to map a coordinate
    /// (zero, negative or non-finite width, or a non-finite left edge).
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.left.is_finite() || !self.width.is_finite() || self.width <= 0.0
    }
}

// =============================================================================
// StepDirection
// =============================================================================

/// Keyboard step direction (left/right arrow).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Left arrow, -1.
    Left,
    /// Right arrow, +1.
    Right,
}

impl StepDirection {
    /// Returns the signed unit of this direction.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            StepDirection::Left => -1.0,
            StepDirection::Right => 1.0,
        }
    }
}

// =============================================================================
// SliderPosition
// =============================================================================

/// Divider position, guaranteed to be within [0, 100] and never NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SliderPosition(f32);

impl SliderPosition {
    /// Creates a position, clamping to the valid range.
    ///
    /// NaN has no meaningful place on the slider and yields the default.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(
            percent
                .max(position_bounds::MIN_PERCENT)
                .min(position_bounds::MAX_PERCENT),
        )
    }

    /// Maps a client coordinate inside `bounds` to a candidate position.
    ///
    /// Returns `None` for degenerate bounds or a NaN coordinate; coordinates
    /// at or past either edge map exactly to 0 or 100.
    #[must_use]
    pub fn from_client_x(client_x: f32, bounds: ContainerBounds) -> Option<Self> {
        if bounds.is_degenerate() || client_x.is_nan() {
            return None;
        }
        let raw = (client_x - bounds.left) / bounds.width * 100.0;
        Some(Self::new(raw))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction of the width (50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Returns the position rounded to a whole percent.
    #[must_use]
    pub fn rounded(self) -> u8 {
        // Always within 0..=100 after clamping.
        self.0.round() as u8
    }

    /// Moves one keyboard step in `direction`, clamping at the edges.
    #[must_use]
    pub fn step(self, direction: StepDirection) -> Self {
        Self::new(self.0 + direction.sign() * position_bounds::KEYBOARD_STEP)
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= position_bounds::MIN_PERCENT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= position_bounds::MAX_PERCENT
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self(position_bounds::DEFAULT_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ContainerBounds {
        ContainerBounds::new(100.0, 400.0)
    }

    #[test]
    fn default_is_centered() {
        assert!((SliderPosition::default().value() - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn new_clamps_out_of_range() {
        assert!(SliderPosition::new(-20.0).is_min());
        assert!(SliderPosition::new(250.0).is_max());
        assert!((SliderPosition::new(33.3).value() - 33.3).abs() < f32::EPSILON);
    }

    #[test]
    fn new_rejects_nan_and_clamps_infinities() {
        assert_eq!(SliderPosition::new(f32::NAN), SliderPosition::default());
        assert!(SliderPosition::new(f32::INFINITY).is_max());
        assert!(SliderPosition::new(f32::NEG_INFINITY).is_min());
    }

    #[test]
    fn client_x_maps_linearly_inside_container() {
        let pos = SliderPosition::from_client_x(400.0, bounds()).unwrap();
        assert!((pos.value() - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn client_x_at_or_past_edges_maps_to_extremes() {
        for x in [-1000.0, 0.0, 99.0, 100.0] {
            assert!(SliderPosition::from_client_x(x, bounds()).unwrap().is_min());
        }
        for x in [500.0, 501.0, 1e9] {
            assert!(SliderPosition::from_client_x(x, bounds()).unwrap().is_max());
        }
    }

    #[test]
    fn degenerate_bounds_yield_no_candidate() {
        assert!(SliderPosition::from_client_x(10.0, ContainerBounds::new(0.0, 0.0)).is_none());
        assert!(SliderPosition::from_client_x(10.0, ContainerBounds::new(0.0, -5.0)).is_none());
        assert!(
            SliderPosition::from_client_x(10.0, ContainerBounds::new(0.0, f32::NAN)).is_none()
        );
        assert!(
            SliderPosition::from_client_x(10.0, ContainerBounds::new(f32::INFINITY, 10.0))
                .is_none()
        );
        assert!(SliderPosition::from_client_x(f32::NAN, bounds()).is_none());
    }

    #[test]
    fn step_moves_by_one_and_stops_at_edges() {
        let pos = SliderPosition::new(50.0);
        assert!((pos.step(StepDirection::Right).value() - 51.0).abs() < f32::EPSILON);
        assert!((pos.step(StepDirection::Left).value() - 49.0).abs() < f32::EPSILON);
        assert!(SliderPosition::new(0.0).step(StepDirection::Left).is_min());
        assert!(SliderPosition::new(100.0).step(StepDirection::Right).is_max());
        assert!((SliderPosition::new(99.5).step(StepDirection::Right).value() - 100.0).abs()
            < f32::EPSILON);
    }

    #[test]
    fn rounded_and_fraction() {
        assert_eq!(SliderPosition::new(74.6).rounded(), 75);
        assert_eq!(SliderPosition::new(0.4).rounded(), 0);
        assert!((SliderPosition::new(25.0).as_fraction() - 0.25).abs() < f32::EPSILON);
    }
}
