//! `web-sys` implementations of the controller runtime seams.

mod client;
mod dom;
mod fullscreen;
mod orientation;
mod subscription;

pub use client::GameClient;
pub use dom::BrowserDom;
pub use fullscreen::BrowserFullscreen;
pub use orientation::BrowserOrientation;
pub use subscription::EventSubscription;

use controller_core::device::UserAgentProbe;
use controller_core::{Runtime, UiError};
use js_sys::{Function, Promise, Reflect};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

pub(crate) fn dom_error(err: &JsValue) -> UiError {
    UiError::Dom(format!("{err:?}"))
}

/// Looks up `name` on `target` and returns it if it is callable.
pub(crate) fn js_method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Logs a rejection of a fire-and-forget promise instead of leaving it
/// unhandled.
pub(crate) fn warn_on_reject(result: JsValue, what: &'static str) {
    let Ok(promise) = result.dyn_into::<Promise>() else {
        return;
    };
    let on_reject: Closure<dyn FnMut(JsValue)> =
        Closure::once(move |err: JsValue| log::warn!("{what} rejected: {err:?}"));
    let _ = promise.catch(&on_reject);
    on_reject.forget();
}

pub fn runtime(window: &Window) -> Result<Runtime, UiError> {
    let document = window
        .document()
        .ok_or(UiError::Dom("window has no document".into()))?;
    let screen = window.screen().map_err(|e| dom_error(&e))?;
    let user_agent = window.navigator().user_agent().unwrap_or_default();

    Ok(Runtime {
        fullscreen: Rc::new(BrowserFullscreen::new(document)),
        orientation: Rc::new(BrowserOrientation::new(screen)),
        device: Rc::new(UserAgentProbe::new(&user_agent)),
    })
}
