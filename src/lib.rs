//! Touch slide detection for DOM elements.
//!
//! A [`TouchTrigger`] listens to touch events on an element and reports
//! directional slides (`left`/`right`, `up`/`down`) once the finger has
//! travelled far enough, fast enough, from the start of the current
//! direction. Each axis fires at most once until the finger reverses on
//! that axis or a new touch begins.
//!
//! The state machine lives in [`SlideTracker`] and has no DOM dependency;
//! [`TouchTrigger`] and [`use_touch_trigger`] wire it up to `web_sys`.

pub mod binder;
pub mod errors;
pub mod handlers;
pub mod hooks;
pub mod js;
pub mod model;
pub mod options;
pub mod scroll;
pub mod state;
pub mod tracker;
pub mod trigger;
pub mod util;

pub use errors::TriggerError;
pub use handlers::SlideHandlers;
pub use hooks::use_touch_trigger;
pub use model::{GestureEvent, Horizontal, Slide, TouchPoint, Vertical};
pub use options::TriggerOptions;
pub use scroll::{FixedScroll, ScrollExtent, ScrollOffset, ScrollSource};
pub use state::SessionState;
pub use tracker::SlideTracker;
pub use trigger::TouchTrigger;
