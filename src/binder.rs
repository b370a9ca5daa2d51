// Event (de)registration for the three touch events a trigger listens to
use std::cell::Cell;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, TouchEvent};

use crate::model::{GestureEvent, TouchPoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchKind {
    Start,
    Move,
    End,
}

/// Touch list a sample is read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchSource {
    Touches,
    /// The lifted finger is no longer in `touches`.
    ChangedTouches,
}

impl TouchKind {
    pub const ALL: [TouchKind; 3] = [TouchKind::Start, TouchKind::End, TouchKind::Move];

    pub fn event_name(self) -> &'static str {
        match self {
            Self::Start => "touchstart",
            Self::Move => "touchmove",
            Self::End => "touchend",
        }
    }

    /// `None` for anything that is not one of the three tracked events.
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "touchstart" => Some(Self::Start),
            "touchmove" => Some(Self::Move),
            "touchend" => Some(Self::End),
            _ => None,
        }
    }

    pub fn source(self) -> TouchSource {
        match self {
            Self::Start | Self::Move => TouchSource::Touches,
            Self::End => TouchSource::ChangedTouches,
        }
    }

    /// Every touchmove is prevented while scrolling is blocked.
    pub fn prevents_default(self, block_scroll: bool) -> bool {
        self == Self::Move && block_scroll
    }

    /// Sample for the tracker, or `None` when the touch list was empty.
    pub fn gesture(self, first: Option<TouchPoint>) -> Option<GestureEvent> {
        let p = first?;
        Some(match self {
            Self::Start => GestureEvent::Start(p),
            Self::Move => GestureEvent::Move(p),
            Self::End => GestureEvent::End(p),
        })
    }
}

pub type TouchHandler = Closure<dyn FnMut(TouchEvent)>;

pub fn bind_handler(
    target: &EventTarget,
    kind: TouchKind,
    handler: &TouchHandler,
) -> Result<(), JsValue> {
    target.add_event_listener_with_callback(kind.event_name(), handler.as_ref().unchecked_ref())
}

/// Safe to call for a handler that is not bound.
pub fn remove_handler(target: &EventTarget, kind: TouchKind, handler: &TouchHandler) {
    let _ = target
        .remove_event_listener_with_callback(kind.event_name(), handler.as_ref().unchecked_ref());
}

/// Binds every kind in order. On the first failure the kinds bound so far
/// are unbound again and the failing kind is returned with its error.
pub fn bind_all<E>(
    mut bind: impl FnMut(TouchKind) -> Result<(), E>,
    mut unbind: impl FnMut(TouchKind),
) -> Result<(), (TouchKind, E)> {
    for (i, kind) in TouchKind::ALL.into_iter().enumerate() {
        if let Err(err) = bind(kind) {
            for bound in &TouchKind::ALL[..i] {
                unbind(*bound);
            }
            return Err((kind, err));
        }
    }
    Ok(())
}

/// Unbinds every kind once; later calls see `attached == false` and do
/// nothing. Returns whether anything was unbound.
pub fn unbind_all(attached: &Cell<bool>, unbind: impl FnMut(TouchKind)) -> bool {
    if !attached.replace(false) {
        return false;
    }
    TouchKind::ALL.into_iter().for_each(unbind);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_round_trip() {
        for kind in TouchKind::ALL {
            assert_eq!(TouchKind::from_event_name(kind.event_name()), Some(kind));
        }
        assert_eq!(TouchKind::from_event_name("touchcancel"), None);
        assert_eq!(TouchKind::from_event_name("click"), None);
    }

    #[test]
    fn end_reads_the_lifted_touch() {
        assert_eq!(TouchKind::Start.source(), TouchSource::Touches);
        assert_eq!(TouchKind::Move.source(), TouchSource::Touches);
        assert_eq!(TouchKind::End.source(), TouchSource::ChangedTouches);
    }

    #[test]
    fn only_moves_are_prevented_and_only_when_blocking() {
        assert!(TouchKind::Move.prevents_default(true));
        assert!(!TouchKind::Move.prevents_default(false));
        assert!(!TouchKind::Start.prevents_default(true));
        assert!(!TouchKind::End.prevents_default(true));
    }

    #[test]
    fn empty_touch_list_drops_the_sample() {
        for kind in TouchKind::ALL {
            assert_eq!(kind.gesture(None), None);
        }
        let p = TouchPoint::new(3.0, 4.0);
        assert_eq!(TouchKind::Move.gesture(Some(p)), Some(GestureEvent::Move(p)));
        assert_eq!(TouchKind::End.gesture(Some(p)).map(|e| e.point()), Some(p));
    }

    #[test]
    fn failed_bind_unbinds_what_was_bound() {
        let mut bound = Vec::new();
        let mut unbound = Vec::new();
        let result = bind_all(
            |kind| {
                if kind == TouchKind::Move {
                    return Err("nope");
                }
                bound.push(kind);
                Ok(())
            },
            |kind| unbound.push(kind),
        );
        assert_eq!(result, Err((TouchKind::Move, "nope")));
        assert_eq!(bound, vec![TouchKind::Start, TouchKind::End]);
        assert_eq!(unbound, bound);
    }

    #[test]
    fn successful_bind_unbinds_nothing() {
        let mut unbound = 0;
        let result: Result<(), (TouchKind, ())> = bind_all(|_| Ok(()), |_| unbound += 1);
        assert_eq!(result, Ok(()));
        assert_eq!(unbound, 0);
    }

    #[test]
    fn unbinding_twice_is_a_no_op() {
        let attached = Cell::new(true);
        let mut calls = 0;
        assert!(unbind_all(&attached, |_| calls += 1));
        assert!(!unbind_all(&attached, |_| calls += 1));
        assert_eq!(calls, 3);
        assert!(!attached.get());
    }
}
