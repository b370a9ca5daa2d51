//! Value types shared by the tracker, the DOM binding and the demo.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Page coordinates of a single touch point, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizontal {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Up,
    Down,
}

impl Horizontal {
    /// Direction of travel from `from` to `to`. Equal coordinates map to `Left`.
    pub fn between(from: f64, to: f64) -> Self {
        if to > from { Self::Right } else { Self::Left }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl Vertical {
    /// Direction of travel from `from` to `to`. Equal coordinates map to `Up`.
    pub fn between(from: f64, to: f64) -> Self {
        if to > from { Self::Down } else { Self::Up }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Vertical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One touch sample as seen by the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// First contact; `touches[0]`.
    Start(TouchPoint),
    /// Finger moved; `touches[0]`.
    Move(TouchPoint),
    /// Finger lifted; `changedTouches[0]`.
    End(TouchPoint),
}

impl GestureEvent {
    pub fn point(&self) -> TouchPoint {
        match *self {
            Self::Start(p) | Self::Move(p) | Self::End(p) => p,
        }
    }
}

/// Directions that fired while handling a single sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slide {
    pub x: Option<Horizontal>,
    pub y: Option<Vertical>,
}

impl Slide {
    pub const NONE: Slide = Slide { x: None, y: None };

    pub fn is_none(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_left_and_up() {
        assert_eq!(Horizontal::between(10.0, 10.0), Horizontal::Left);
        assert_eq!(Vertical::between(10.0, 10.0), Vertical::Up);
        assert_eq!(Horizontal::between(10.0, 11.0), Horizontal::Right);
        assert_eq!(Vertical::between(10.0, 11.0), Vertical::Down);
    }

    #[test]
    fn directions_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Horizontal::Right).unwrap(), "\"right\"");
        assert_eq!(serde_json::to_string(&Vertical::Up).unwrap(), "\"up\"");
        assert_eq!(Vertical::Down.to_string(), "down");
    }
}
