//! JavaScript surface: `setupControllerUI(client, options)` returns a
//! `ControllerUI` handle.

use crate::browser::GameClient;
use controller_core::runtime::Handler;
use controller_core::{ConnectionCallbacks, ControllerOptions, ControllerSession, UiError};
use js_sys::{Function, Reflect, JSON};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

fn js_error(err: &UiError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Unusable options fall back to the defaults rather than failing setup.
fn read_options(options: &JsValue) -> ControllerOptions {
    if options.is_undefined() || options.is_null() {
        return ControllerOptions::default();
    }
    let parsed = JSON::stringify(options)
        .map_err(|e| format!("{e:?}"))
        .and_then(|json| {
            ControllerOptions::from_json(&String::from(json))
                .map_err(|e: serde_json::Error| e.to_string())
        });
    parsed.unwrap_or_else(|e| {
        log::warn!("ignoring controller options: {e}");
        ControllerOptions::default()
    })
}

fn read_callback(options: &JsValue, key: &'static str) -> Option<Handler> {
    let f = Reflect::get(options, &JsValue::from_str(key))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    Some(Rc::new(move || {
        if let Err(e) = f.call0(&JsValue::NULL) {
            log::error!("{key} threw: {e:?}");
        }
    }))
}

#[wasm_bindgen(js_name = ControllerUI)]
pub struct ControllerUi {
    session: ControllerSession,
}

#[wasm_bindgen(js_class = ControllerUI)]
impl ControllerUi {
    /// Adds a line to the on-screen console (debug only).
    pub fn log(&self, msg: &str) {
        self.session.log(msg);
    }

    /// Adds a red line to the on-screen console (debug only).
    pub fn error(&self, msg: &str) {
        self.session.error(msg);
    }

    #[wasm_bindgen(js_name = setStatus)]
    pub fn set_status(&self, text: &str) {
        self.session.set_status(text);
    }

    #[wasm_bindgen(js_name = setOrientation)]
    pub fn set_orientation(
        &self,
        desired: Option<String>,
        optional: Option<bool>,
    ) -> Result<(), JsValue> {
        self.session
            .set_orientation(desired, optional.unwrap_or(false))
            .map_err(|e| js_error(&e))
    }

    /// Removes the controller's listeners. The page keeps its controller
    /// behaviour until this is called, even after the handle is freed.
    pub fn dispose(&self) {
        self.session.dispose();
    }
}

/// Options are the usual controller options object: `debug`,
/// `numConsoleLines`, `orientation`, `orientationOptional`, `requireApp`,
/// `connectFn` and `disconnectFn`.
#[wasm_bindgen(js_name = setupControllerUI)]
pub fn setup_controller_ui(client: &GameClient, options: JsValue) -> Result<ControllerUi, JsValue> {
    console_error_panic_hook::set_once();
    let debug = Reflect::get(&options, &JsValue::from_str("debug"))
        .is_ok_and(|v| v.is_truthy());
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);
    let controller_options = read_options(&options);

    let callbacks = ConnectionCallbacks {
        connect_fn: read_callback(&options, "connectFn"),
        disconnect_fn: read_callback(&options, "disconnectFn"),
    };
    let session =
        crate::attach(client, &controller_options, callbacks).map_err(|e| js_error(&e))?;
    Ok(ControllerUi { session })
}
