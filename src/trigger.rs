//! DOM-facing touch trigger: binds `touchstart`/`touchmove`/`touchend` on an
//! element and drives a [`SlideTracker`] from them.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};

use crate::binder::{
    TouchHandler, TouchKind, TouchSource, bind_all, bind_handler, remove_handler, unbind_all,
};
use crate::errors::TriggerError;
use crate::handlers::SlideHandlers;
use crate::model::TouchPoint;
use crate::options::TriggerOptions;
use crate::state::SessionState;
use crate::tracker::SlideTracker;
use crate::util::clog;

pub struct TouchTrigger {
    element: HtmlElement,
    tracker: Rc<RefCell<SlideTracker>>,
    handler: TouchHandler,
    attached: Cell<bool>,
}

impl TouchTrigger {
    /// Binds the three touch events on `element`. If any bind fails the
    /// others are unbound again before the error is returned.
    pub fn attach(
        element: HtmlElement,
        options: TriggerOptions,
        handlers: SlideHandlers,
    ) -> Result<Self, TriggerError> {
        options.validate()?;
        let block_scroll = options.block_scroll;
        let tracker = Rc::new(RefCell::new(SlideTracker::new(options)));

        let handler = {
            let element = element.clone();
            let tracker = tracker.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(kind) = TouchKind::from_event_name(&e.type_()) else {
                    return;
                };
                if kind.prevents_default(block_scroll) {
                    e.prevent_default();
                }
                let Some(event) = kind.gesture(first_touch(&e, kind.source())) else {
                    clog(&format!("dropped {} without a touch point", kind.event_name()));
                    return;
                };
                let now = js_sys::Date::now();
                // borrow ends before user callbacks run
                let slide = tracker.borrow_mut().handle(event, &element, now);
                handlers.emit(slide);
            }) as Box<dyn FnMut(TouchEvent)>)
        };

        let trigger = Self {
            element,
            tracker,
            handler,
            attached: Cell::new(false),
        };
        let bound = bind_all(
            |kind| bind_handler(&trigger.element, kind, &trigger.handler),
            |kind| remove_handler(&trigger.element, kind, &trigger.handler),
        );
        if let Err((kind, err)) = bound {
            clog(&format!("bind {} failed: {:?}", kind.event_name(), err));
            return Err(TriggerError::Bind {
                event: kind.event_name(),
                reason: format!("{err:?}"),
            });
        }
        trigger.attached.set(true);
        clog(&format!("attached to <{}>", trigger.element.tag_name().to_lowercase()));
        Ok(trigger)
    }

    /// Unbinds all three events. Calling it again is a no-op.
    pub fn detach(&self) {
        let unbound = unbind_all(&self.attached, |kind| {
            remove_handler(&self.element, kind, &self.handler)
        });
        if unbound {
            clog("detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn options(&self) -> TriggerOptions {
        self.tracker.borrow().options().clone()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> SessionState {
        self.tracker.borrow().session().clone()
    }
}

impl Drop for TouchTrigger {
    fn drop(&mut self) {
        self.detach();
    }
}

fn first_touch(e: &TouchEvent, source: TouchSource) -> Option<TouchPoint> {
    let touches = match source {
        TouchSource::Touches => e.touches(),
        TouchSource::ChangedTouches => e.changed_touches(),
    };
    let t0 = touches.item(0)?;
    Some(TouchPoint::new(t0.page_x() as f64, t0.page_y() as f64))
}
