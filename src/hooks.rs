use web_sys::HtmlElement;
use yew::prelude::*;

use crate::errors::TriggerError;
use crate::handlers::SlideHandlers;
use crate::options::TriggerOptions;
use crate::trigger::TouchTrigger;
use crate::util::clog;

/// Attaches a [`TouchTrigger`] to `node` once it is mounted. The trigger is
/// rebuilt whenever the node, the options or the handlers change and is
/// detached on unmount.
#[hook]
pub fn use_touch_trigger(node: NodeRef, options: TriggerOptions, handlers: SlideHandlers) {
    use_effect_with((node, options, handlers), |(node, options, handlers)| {
        let trigger = node
            .cast::<HtmlElement>()
            .ok_or(TriggerError::NotAnElement)
            .and_then(|el| TouchTrigger::attach(el, options.clone(), handlers.clone()));
        let trigger = match trigger {
            Ok(t) => Some(t),
            Err(err) => {
                clog(&format!("use_touch_trigger: {err}"));
                None
            }
        };
        move || drop(trigger)
    });
}
