//! Seams between the controller UI and the host runtime.
//!
//! The browser build implements these on top of `web-sys`; tests swap in
//! fakes so the fullscreen handshake can be driven event by event.

use crate::debug::LogLine;
use crate::error::UiError;
use std::rc::Rc;

/// Callback fired by a runtime event.
pub type Handler = Rc<dyn Fn()>;

/// A registered event handler. Dropping it without `cancel` leaves the
/// handler registered.
pub trait Subscription {
    fn cancel(self: Box<Self>);
}

pub trait FullscreenApi {
    /// Whether the body can be asked to go fullscreen at all.
    fn can_go_fullscreen(&self) -> bool;
    fn is_fullscreen(&self) -> bool;
    /// Fire-and-forget; the answer arrives through `on_change`.
    fn request_fullscreen(&self);
    fn on_change(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError>;
}

pub trait OrientationApi {
    /// Whether the runtime can lock orientation without user action.
    fn can_orient(&self) -> bool;
    fn lock(&self, orientation: &str);
    fn unlock(&self);
}

pub trait DeviceProbe {
    fn is_mobile(&self) -> bool;
}

/// Element showing the tap-to-continue affordance and receiving the gesture.
pub trait TouchTarget {
    fn on_touch_start(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError>;
    fn set_visible(&self, visible: bool);
}

/// Element that is shown or hidden as a whole.
pub trait Banner {
    fn set_visible(&self, visible: bool);
}

/// The overlay node once it is in the document.
pub trait OverlaySlot {
    fn set_markup(&self, markup: &str);
}

/// Where the orientation overlay gets inserted.
pub trait OverlayHost {
    fn insert_overlay(&self) -> Result<Box<dyn OverlaySlot>, UiError>;
}

pub trait ConsoleView {
    /// Returns false if the line could not be shown.
    fn push_line(&self, line: &LogLine) -> bool;
    fn remove_oldest(&self);
}

pub trait StatusView {
    fn set_text(&self, text: &str);
}

/// Resolves the fixed elements of the controller page.
pub trait ControllerDom {
    fn overlay_host(&self) -> Result<Rc<dyn OverlayHost>, UiError>;
    fn touch_target(&self) -> Result<Rc<dyn TouchTarget>, UiError>;
    /// Only called with debug on; makes the debug panel visible.
    fn debug_views(&self) -> Result<(Rc<dyn ConsoleView>, Rc<dyn StatusView>), UiError>;
    fn disconnected_banner(&self) -> Option<Rc<dyn Banner>>;
}

/// Connection events of the game client.
pub trait ConnectionSource {
    fn on_connect(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError>;
    fn on_disconnect(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError>;
}
