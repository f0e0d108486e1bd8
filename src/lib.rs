//! Standard UI scaffolding for phone controllers: fullscreen on first
//! touch, orientation lock or a rotate-the-phone prompt, and the debug
//! console.

pub mod api;
pub mod browser;
pub mod page;
pub mod styles;

use browser::BrowserDom;
use controller_core::runtime::ConnectionSource;
use controller_core::{ConnectionCallbacks, ControllerOptions, ControllerSession, UiError};

/// Sets up the controller UI on the current page.
pub fn attach(
    client: &dyn ConnectionSource,
    options: &ControllerOptions,
    callbacks: ConnectionCallbacks,
) -> Result<ControllerSession, UiError> {
    let window = web_sys::window().ok_or(UiError::Dom("no window".into()))?;
    let document = window
        .document()
        .ok_or(UiError::Dom("window has no document".into()))?;
    let runtime = browser::runtime(&window)?;
    let dom = BrowserDom::new(document);
    controller_core::setup_controller_ui(client, &dom, &runtime, options, callbacks)
}
