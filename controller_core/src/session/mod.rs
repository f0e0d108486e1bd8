//! Entry point tying the controller UI pieces to one page session.

use crate::debug::{DebugSurface, HtmlLogger, NullLogger};
use crate::error::UiError;
use crate::fullscreen::{FullscreenGate, GateState};
use crate::options::ControllerOptions;
use crate::orientation::{OrientationController, Prompt};
use crate::runtime::{
    Banner, ConnectionSource, ControllerDom, DeviceProbe, FullscreenApi, Handler, OrientationApi,
    Subscription,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};


/// Runtime capabilities of the host browser.
#[derive(Clone)]
pub struct Runtime {
    pub fullscreen: Rc<dyn FullscreenApi>,
    pub orientation: Rc<dyn OrientationApi>,
    pub device: Rc<dyn DeviceProbe>,
}

/// Page callbacks run when the game client connects or drops.
#[derive(Clone, Default)]
pub struct ConnectionCallbacks {
    pub connect_fn: Option<Handler>,
    pub disconnect_fn: Option<Handler>,
}

struct SessionState {
    orientation: OrientationController,
    gate: FullscreenGate,
    debug: Box<dyn DebugSurface>,
}

impl SessionState {
    fn arm(&mut self) -> Result<(), UiError> {
        if self.gate.arm()? {
            self.orientation.reset_orientation();
        }
        Ok(())
    }

    fn on_touch_start(&mut self) -> Result<(), UiError> {
        self.gate.on_touch_start();
        Ok(())
    }

    fn on_fullscreen_change(&mut self) -> Result<(), UiError> {
        if self.gate.on_fullscreen_change()? {
            self.orientation.reset_orientation();
        }
        Ok(())
    }
}

/// Runs `f` against the session behind an event handler. Events arriving
/// after the session is gone, or while it is mid-update, are dropped.
fn dispatch(
    weak: &Weak<SessionInner>,
    event: &str,
    f: impl FnOnce(&mut SessionState) -> Result<(), UiError>,
) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let Ok(mut state) = inner.state.try_borrow_mut() else {
        log::warn!("{event} ignored: session busy");
        return;
    };
    if let Err(e) = f(&mut state) {
        log::error!("{event}: {e}");
    }
}

struct SessionInner {
    state: RefCell<SessionState>,
    subscriptions: RefCell<Vec<Box<dyn Subscription>>>,
    /// Keeps the session alive for the page while it is wired up.
    /// Cleared by `dispose`.
    pinned: RefCell<Option<Rc<SessionInner>>>,
}

/// A controller page's UI context.
///
/// Handles are cheap clones of one session. The session stays wired to the
/// page after every handle is dropped; only [`ControllerSession::dispose`]
/// unsubscribes.
#[derive(Clone)]
pub struct ControllerSession {
    inner: Rc<SessionInner>,
}

impl ControllerSession {
    pub fn log(&self, msg: &str) {
        self.with_state(|s| s.debug.log(msg));
    }

    pub fn error(&self, msg: &str) {
        self.with_state(|s| s.debug.error(msg));
    }

    pub fn set_status(&self, text: &str) {
        self.with_state(|s| s.debug.set_status(text));
    }

    /// Valid values are "portrait-primary", "portrait-secondary",
    /// "landscape-primary", "landscape-secondary" and "none" (or `None`).
    /// Native locking only works on some phones and only in fullscreen;
    /// elsewhere the user is asked to rotate unless `optional` is set.
    pub fn set_orientation(&self, desired: Option<String>, optional: bool) -> Result<(), UiError> {
        self.with_state(|s| s.orientation.set_orientation(desired, optional))
            .unwrap_or(Ok(()))
    }

    pub fn gate_state(&self) -> Option<GateState> {
        self.with_state(|s| s.gate.state())
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.with_state(|s| s.orientation.prompt()).flatten()
    }

    /// Removes every listener the session added and hides the touch
    /// affordance. The page stops reacting to touches, fullscreen changes and
    /// connection events. Calling it again does nothing.
    pub fn dispose(&self) {
        let subscriptions = std::mem::take(&mut *self.inner.subscriptions.borrow_mut());
        for subscription in subscriptions {
            subscription.cancel();
        }
        if let Ok(mut state) = self.inner.state.try_borrow_mut() {
            state.gate.disarm();
        }
        self.inner.pinned.borrow_mut().take();
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> Option<R> {
        match self.inner.state.try_borrow_mut() {
            Ok(mut state) => Some(f(&mut state)),
            Err(_) => {
                log::warn!("controller session busy");
                None
            }
        }
    }

    fn subscribe(&self, subscription: Result<Box<dyn Subscription>, UiError>) -> Result<(), UiError> {
        self.inner.subscriptions.borrow_mut().push(subscription?);
        Ok(())
    }

    fn watch_connection(
        &self,
        client: &dyn ConnectionSource,
        banner: Option<Rc<dyn Banner>>,
        callbacks: ConnectionCallbacks,
    ) -> Result<(), UiError> {
        let ConnectionCallbacks {
            connect_fn,
            disconnect_fn,
        } = callbacks;

        let disconnected_banner = banner.clone();
        self.subscribe(client.on_disconnect(Rc::new(move || {
            log::info!("disconnected from game");
            if let Some(banner) = &disconnected_banner {
                banner.set_visible(true);
            }
            if let Some(f) = &disconnect_fn {
                f();
            }
        })))?;

        self.subscribe(client.on_connect(Rc::new(move || {
            log::info!("connected to game");
            if let Some(banner) = &banner {
                banner.set_visible(false);
            }
            if let Some(f) = &connect_fn {
                f();
            }
        })))
    }

    fn wire(
        &self,
        client: &dyn ConnectionSource,
        banner: Option<Rc<dyn Banner>>,
        runtime: &Runtime,
        options: &ControllerOptions,
        callbacks: ConnectionCallbacks,
    ) -> Result<(), UiError> {
        let weak = Rc::downgrade(&self.inner);
        self.subscribe(runtime.fullscreen.on_change(Rc::new(move || {
            dispatch(&weak, "fullscreenchange", SessionState::on_fullscreen_change);
        })))?;

        self.watch_connection(client, banner, callbacks)?;

        if runtime.device.is_mobile() {
            self.inner.state.borrow_mut().arm()?;
        }

        if options.require_app {
            log::info!("page requires the controller app");
        }

        self.set_orientation(options.orientation.clone(), options.orientation_optional)
    }
}

/// Sets up the standard UI of a controller page: debug panel, fullscreen on
/// first touch, orientation lock or rotate prompt, and the disconnected
/// banner.
///
/// Fails if `hft-menu` or `hft-touchstart` (or, with debug on, the debug
/// panel elements) are missing from the page.
pub fn setup_controller_ui(
    client: &dyn ConnectionSource,
    dom: &dyn ControllerDom,
    runtime: &Runtime,
    options: &ControllerOptions,
    callbacks: ConnectionCallbacks,
) -> Result<ControllerSession, UiError> {
    let debug: Box<dyn DebugSurface> = if options.debug {
        let (console, status) = dom.debug_views()?;
        Box::new(HtmlLogger::new(console, status, options.console_lines()))
    } else {
        Box::new(NullLogger)
    };

    let overlay_host = dom.overlay_host()?;
    let touch_target = dom.touch_target()?;

    let inner = Rc::new_cyclic(|weak: &Weak<SessionInner>| {
        let weak = weak.clone();
        let touch_handler: Handler =
            Rc::new(move || dispatch(&weak, "touchstart", SessionState::on_touch_start));
        SessionInner {
            state: RefCell::new(SessionState {
                orientation: OrientationController::new(
                    runtime.orientation.clone(),
                    runtime.fullscreen.clone(),
                    overlay_host,
                ),
                gate: FullscreenGate::new(
                    runtime.fullscreen.clone(),
                    runtime.device.clone(),
                    touch_target,
                    touch_handler,
                ),
                debug,
            }),
            subscriptions: RefCell::new(Vec::new()),
            pinned: RefCell::new(None),
        }
    });
    let session = ControllerSession { inner };

    if let Err(e) = session.wire(client, dom.disconnected_banner(), runtime, options, callbacks) {
        session.dispose();
        return Err(e);
    }
    *session.inner.pinned.borrow_mut() = Some(session.inner.clone());
    Ok(session)
}
