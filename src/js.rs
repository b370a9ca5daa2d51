// Plain-JS entry point: `new TouchTrigger(el, { enableX: true, onSlideX })`
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;
use yew::Callback;

use crate::handlers::SlideHandlers;
use crate::model::{Horizontal, Vertical};
use crate::options::TriggerOptions;
use crate::trigger::TouchTrigger;

#[wasm_bindgen(js_name = TouchTrigger)]
pub struct JsTouchTrigger {
    inner: TouchTrigger,
}

#[wasm_bindgen(js_class = TouchTrigger)]
impl JsTouchTrigger {
    /// `options` may carry `onSlideX` / `onSlideY` functions next to the
    /// plain option keys; they receive the direction as a string.
    #[wasm_bindgen(constructor)]
    pub fn new(el: HtmlElement, options: JsValue) -> Result<JsTouchTrigger, JsValue> {
        let opts = TriggerOptions::from_js(&options)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let handlers = SlideHandlers {
            on_slide_x: js_callback(&options, "onSlideX").map(|f| {
                Callback::from(move |d: Horizontal| {
                    if let Err(err) = call_slide(&f, d.as_str()) {
                        wasm_bindgen::throw_val(err);
                    }
                })
            }),
            on_slide_y: js_callback(&options, "onSlideY").map(|f| {
                Callback::from(move |d: Vertical| {
                    if let Err(err) = call_slide(&f, d.as_str()) {
                        wasm_bindgen::throw_val(err);
                    }
                })
            }),
        };
        let inner = TouchTrigger::attach(el, opts, handlers)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }

    pub fn detach(&self) {
        self.inner.detach();
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.inner.is_attached()
    }
}

/// Calls a host callback with the direction string. A throwing callback
/// comes back as `Err` and is re-thrown by the caller.
fn call_slide(f: &js_sys::Function, dir: &str) -> Result<JsValue, JsValue> {
    f.call1(&JsValue::NULL, &JsValue::from_str(dir))
}

fn js_callback(options: &JsValue, key: &str) -> Option<js_sys::Function> {
    if !options.is_object() {
        return None;
    }
    js_sys::Reflect::get(options, &JsValue::from_str(key))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn callback_receives_the_direction() {
        let f = js_sys::Function::new_with_args("dir", "return dir");
        let out = call_slide(&f, "up").unwrap();
        assert_eq!(out.as_string().as_deref(), Some("up"));
    }

    #[wasm_bindgen_test]
    fn throwing_callback_is_not_swallowed() {
        let f = js_sys::Function::new_with_args("dir", "throw new Error('boom ' + dir)");
        let err = call_slide(&f, "left").unwrap_err();
        let err: js_sys::Error = err.dyn_into().unwrap();
        assert_eq!(String::from(err.message()), "boom left");
    }

    #[wasm_bindgen_test]
    fn callbacks_are_read_from_the_options_object() {
        let opts = js_sys::Object::new();
        let f = js_sys::Function::new_with_args("dir", "return dir");
        js_sys::Reflect::set(&opts, &JsValue::from_str("onSlideY"), &f).unwrap();
        assert!(js_callback(&opts, "onSlideY").is_some());
        assert!(js_callback(&opts, "onSlideX").is_none());
        assert!(js_callback(&JsValue::UNDEFINED, "onSlideY").is_none());
    }
}
