use super::{js_method, warn_on_reject};
use controller_core::runtime::OrientationApi;
use js_sys::{Function, Reflect};
use wasm_bindgen::JsValue;
use web_sys::Screen;

const LEGACY_LOCK: [&str; 3] = ["lockOrientation", "mozLockOrientation", "msLockOrientation"];
const LEGACY_UNLOCK: [&str; 3] = [
    "unlockOrientation",
    "mozUnlockOrientation",
    "msUnlockOrientation",
];

/// `screen.orientation`, falling back to the old `screen.lockOrientation`
/// family.
pub struct BrowserOrientation {
    screen: Screen,
}

impl BrowserOrientation {
    pub const fn new(screen: Screen) -> Self {
        Self { screen }
    }

    /// Finds `method` on `screen.orientation`, else one of `legacy` on
    /// `screen`. Returns the method with the receiver to call it on.
    fn method(&self, method: &str, legacy: &[&str]) -> Option<(JsValue, Function)> {
        let orientation = Reflect::get(&self.screen, &JsValue::from_str("orientation"))
            .ok()
            .filter(JsValue::is_object);
        if let Some(orientation) = orientation {
            if let Some(f) = js_method(&orientation, method) {
                return Some((orientation, f));
            }
        }
        let screen = JsValue::from(self.screen.clone());
        let f = legacy.iter().find_map(|name| js_method(&screen, name))?;
        Some((screen, f))
    }
}

impl OrientationApi for BrowserOrientation {
    fn can_orient(&self) -> bool {
        self.method("lock", &LEGACY_LOCK).is_some()
    }

    fn lock(&self, orientation: &str) {
        let Some((this, lock)) = self.method("lock", &LEGACY_LOCK) else {
            return;
        };
        match lock.call1(&this, &JsValue::from_str(orientation)) {
            Ok(result) => warn_on_reject(result, "orientation lock"),
            Err(e) => log::warn!("orientation lock to {orientation} failed: {e:?}"),
        }
    }

    fn unlock(&self) {
        let Some((this, unlock)) = self.method("unlock", &LEGACY_UNLOCK) else {
            return;
        };
        if let Err(e) = unlock.call0(&this) {
            log::warn!("orientation unlock failed: {e:?}");
        }
    }
}
