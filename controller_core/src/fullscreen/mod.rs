use crate::error::UiError;
use crate::runtime::{DeviceProbe, FullscreenApi, Handler, Subscription, TouchTarget};
use std::rc::Rc;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Waiting for a touch to ask for fullscreen.
    Armed,
    /// Fullscreen requested or confirmed.
    Active,
}

/// Browsers only grant fullscreen from inside a user gesture, so the gate
/// waits for the first touch on the tap-to-continue element, asks for
/// fullscreen from there, and re-arms when the user leaves fullscreen.
///
/// The gate never touches orientation itself. Methods return `true` when the
/// caller should re-apply the stored orientation.
pub struct FullscreenGate {
    fullscreen: Rc<dyn FullscreenApi>,
    device: Rc<dyn DeviceProbe>,
    touch_target: Rc<dyn TouchTarget>,
    touch_handler: Handler,
    touch_subscription: Option<Box<dyn Subscription>>,
    state: GateState,
}

impl FullscreenGate {
    pub fn new(
        fullscreen: Rc<dyn FullscreenApi>,
        device: Rc<dyn DeviceProbe>,
        touch_target: Rc<dyn TouchTarget>,
        touch_handler: Handler,
    ) -> Self {
        Self {
            fullscreen,
            device,
            touch_target,
            touch_handler,
            touch_subscription: None,
            state: GateState::Armed,
        }
    }

    pub const fn state(&self) -> GateState {
        self.state
    }

    /// Whether a touch listener is currently registered.
    pub const fn is_listening(&self) -> bool {
        self.touch_subscription.is_some()
    }

    pub fn arm(&mut self) -> Result<bool, UiError> {
        if self.fullscreen.is_fullscreen() {
            self.state = GateState::Active;
            return Ok(true);
        }
        self.state = GateState::Armed;
        if self.fullscreen.can_go_fullscreen() {
            self.stop_listening();
            let subscription = self.touch_target.on_touch_start(self.touch_handler.clone())?;
            self.touch_subscription = Some(subscription);
            self.touch_target.set_visible(true);
            log::debug!("fullscreen gate armed");
        }
        Ok(false)
    }

    pub fn on_touch_start(&mut self) {
        self.stop_listening();
        self.touch_target.set_visible(false);
        if !self.fullscreen.is_fullscreen() {
            log::debug!("requesting fullscreen");
            self.fullscreen.request_fullscreen();
        }
        self.state = GateState::Active;
    }

    pub fn on_fullscreen_change(&mut self) -> Result<bool, UiError> {
        if self.fullscreen.is_fullscreen() {
            log::debug!("fullscreen confirmed");
            self.state = GateState::Active;
            return Ok(true);
        }
        log::debug!("fullscreen exited");
        self.state = GateState::Armed;
        if self.device.is_mobile() {
            self.arm()
        } else {
            Ok(false)
        }
    }

    /// Drops the touch listener, if any.
    pub fn stop_listening(&mut self) {
        if let Some(subscription) = self.touch_subscription.take() {
            subscription.cancel();
        }
    }

    /// Stops listening and hides the affordance for good.
    pub fn disarm(&mut self) {
        self.stop_listening();
        self.touch_target.set_visible(false);
    }
}
