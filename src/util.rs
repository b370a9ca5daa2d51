// Console logging helper

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    let line = format!("[touch-trigger] {msg}");
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&line));
}

/// Off the browser there is no console to write to.
#[cfg(not(target_arch = "wasm32"))]
pub fn clog(_msg: &str) {}
