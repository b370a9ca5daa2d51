//! Direction/velocity state machine.
//!
//! Each axis runs independently:
//! `unset -> tracking(dir, fired = false) -> tracking(dir, fired = true)`,
//! and a reversal moves back to `tracking(dir', fired = false)` with the
//! anchor reset to the last observed point. Only a new touchstart returns
//! an axis to `unset`.
//!
//! The tracker knows nothing about the DOM: timestamps are passed in as
//! milliseconds and scroll metrics come from a [`ScrollSource`].

use crate::model::{GestureEvent, Horizontal, Slide, TouchPoint, Vertical};
use crate::options::TriggerOptions;
use crate::scroll::ScrollSource;
use crate::state::SessionState;
use crate::util::clog;

#[derive(Debug, Clone, Default)]
pub struct SlideTracker {
    options: TriggerOptions,
    session: SessionState,
}

impl SlideTracker {
    pub fn new(options: TriggerOptions) -> Self {
        Self {
            options,
            session: SessionState::default(),
        }
    }

    pub fn options(&self) -> &TriggerOptions {
        &self.options
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Feeds one sample through the machine and reports what fired.
    pub fn handle<S: ScrollSource + ?Sized>(
        &mut self,
        event: GestureEvent,
        scroll: &S,
        now: f64,
    ) -> Slide {
        match event {
            GestureEvent::Start(p) => {
                self.session.reset(p, now);
                Slide::NONE
            }
            GestureEvent::Move(p) | GestureEvent::End(p) => {
                self.update_suppression(scroll);
                self.update_direction(p, now);
                self.evaluate(p, now)
            }
        }
    }

    /// Recomputes the per-axis suppression flags from the element's scroll
    /// position. Flags are left untouched unless scroll sync is active.
    pub fn update_suppression<S: ScrollSource + ?Sized>(&mut self, scroll: &S) {
        if !self.options.syncs_scroll() {
            return;
        }
        let offset = scroll.scroll_offset();
        let extent = scroll.scroll_extent();
        self.session.suppress_x = offset.x == 0.0 || offset.x == extent.x;
        self.session.suppress_y = offset.y == 0.0 || offset.y == extent.y;
    }

    pub fn update_direction(&mut self, p: TouchPoint, now: f64) {
        let s = &mut self.session;
        match (s.horizontal, s.vertical) {
            (None, None) => {
                s.horizontal = Some(Horizontal::between(s.last_x, p.x));
                s.vertical = Some(Vertical::between(s.last_y, p.y));
            }
            (h, v) => {
                let flip_x = match h {
                    Some(Horizontal::Right) if p.x < s.last_x => Some(Horizontal::Left),
                    Some(Horizontal::Left) if p.x > s.last_x => Some(Horizontal::Right),
                    _ => None,
                };
                if let Some(dir) = flip_x {
                    s.horizontal = Some(dir);
                    s.start_x = s.last_x;
                    s.start_time_x = now;
                    s.fired_x = false;
                }
                let flip_y = match v {
                    Some(Vertical::Up) if p.y > s.last_y => Some(Vertical::Down),
                    Some(Vertical::Down) if p.y < s.last_y => Some(Vertical::Up),
                    _ => None,
                };
                if let Some(dir) = flip_y {
                    s.vertical = Some(dir);
                    s.start_y = s.last_y;
                    s.start_time_y = now;
                    s.fired_y = false;
                }
            }
        }
        s.last_x = p.x;
        s.last_y = p.y;
    }

    /// Fires each enabled axis at most once per segment, when the distance
    /// from its anchor exceeds the threshold fast enough.
    pub fn evaluate(&mut self, p: TouchPoint, now: f64) -> Slide {
        let o = &self.options;
        let s = &mut self.session;
        let mut slide = Slide::NONE;

        let span_x = (p.x - s.start_x).abs();
        if o.enable_x && !s.suppress_x && !s.fired_x && span_x > o.threshold_x {
            let speed = speed(span_x, s.start_time_x, now);
            if speed > o.min_speed {
                s.fired_x = true;
                slide.x = s.horizontal;
                if o.debug {
                    let dir = s.horizontal;
                    clog(&format!("slide x {dir:?} span={span_x:.0}px speed={speed:.0}px/s"));
                }
            }
        }

        let span_y = (p.y - s.start_y).abs();
        if o.enable_y && !s.suppress_y && !s.fired_y && span_y > o.threshold_y {
            let speed = speed(span_y, s.start_time_y, now);
            if speed > o.min_speed {
                s.fired_y = true;
                slide.y = s.vertical;
                if o.debug {
                    let dir = s.vertical;
                    clog(&format!("slide y {dir:?} span={span_y:.0}px speed={speed:.0}px/s"));
                }
            }
        }

        slide
    }
}

/// Pixels per second. Zero elapsed time yields +inf.
fn speed(span: f64, since_ms: f64, now_ms: f64) -> f64 {
    span / ((now_ms - since_ms) / 1000.0)
}
