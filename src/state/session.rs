// Per-session tracker state, reset on every touchstart
use crate::model::{Horizontal, TouchPoint, Vertical};

#[derive(Default, Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Anchor of the current X segment.
    pub start_x: f64,
    /// Anchor of the current Y segment.
    pub start_y: f64,
    pub start_time_x: f64,
    pub start_time_y: f64,
    pub last_x: f64,
    pub last_y: f64,
    /// `None` until the first sample after touchstart.
    pub horizontal: Option<Horizontal>,
    pub vertical: Option<Vertical>,
    pub fired_x: bool,
    pub fired_y: bool,
    pub suppress_x: bool,
    pub suppress_y: bool,
}

impl SessionState {
    /// Anchors both axes at `point`. Suppression flags carry over; they are
    /// only recomputed by scroll sync.
    pub fn reset(&mut self, point: TouchPoint, now: f64) {
        self.start_x = point.x;
        self.start_y = point.y;
        self.start_time_x = now;
        self.start_time_y = now;
        self.fired_x = false;
        self.fired_y = false;
        self.last_x = point.x;
        self.last_y = point.y;
        self.horizontal = None;
        self.vertical = None;
    }
}
