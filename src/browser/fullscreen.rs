use super::{js_method, warn_on_reject, EventSubscription};
use controller_core::runtime::{FullscreenApi, Handler, Subscription};
use controller_core::UiError;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

const REQUEST_METHODS: [&str; 4] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
];

const ELEMENT_PROPERTIES: [&str; 4] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "mozFullScreenElement",
    "msFullscreenElement",
];

const CHANGE_EVENTS: &[&str] = &[
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// Fullscreen API of the document, including the vendor-prefixed variants
/// older mobile browsers ship.
pub struct BrowserFullscreen {
    document: Document,
}

impl BrowserFullscreen {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn request_method(&self) -> Option<(HtmlElement, Function)> {
        let body = self.document.body()?;
        let method = REQUEST_METHODS
            .iter()
            .find_map(|name| js_method(&body, name))?;
        Some((body, method))
    }
}

impl FullscreenApi for BrowserFullscreen {
    fn can_go_fullscreen(&self) -> bool {
        self.request_method().is_some()
    }

    fn is_fullscreen(&self) -> bool {
        ELEMENT_PROPERTIES.iter().any(|name| {
            Reflect::get(&self.document, &JsValue::from_str(name))
                .is_ok_and(|element| !element.is_null() && !element.is_undefined())
        })
    }

    fn request_fullscreen(&self) {
        let Some((body, method)) = self.request_method() else {
            log::warn!("fullscreen is not supported");
            return;
        };
        match method.call0(&body) {
            Ok(result) => warn_on_reject(result, "fullscreen request"),
            Err(e) => log::warn!("fullscreen request failed: {e:?}"),
        }
    }

    fn on_change(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        let subscription = EventSubscription::listen(&self.document, CHANGE_EVENTS, handler)?;
        Ok(Box::new(subscription))
    }
}
