//! In-memory stand-ins for the browser, driven by hand from tests.

use crate::debug::LogLine;
use crate::error::UiError;
use crate::runtime::{
    Banner, ConnectionSource, ConsoleView, ControllerDom, DeviceProbe, FullscreenApi, Handler,
    OrientationApi, OverlayHost, OverlaySlot, StatusView, Subscription, TouchTarget,
};
use crate::session::Runtime;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

type HandlerList = Rc<RefCell<Vec<(usize, Handler)>>>;

#[derive(Clone, Default)]
pub struct Listeners {
    handlers: HandlerList,
    next_id: Rc<Cell<usize>>,
}

impl Listeners {
    pub fn subscribe(&self, handler: Handler) -> Box<dyn Subscription> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers.borrow_mut().push((id, handler));
        Box::new(ListenerSubscription {
            handlers: self.handlers.clone(),
            id,
        })
    }

    pub fn count(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn fire(&self) {
        let handlers: Vec<Handler> = self.handlers.borrow().iter().map(|(_, h)| h.clone()).collect();
        for handler in handlers {
            handler();
        }
    }
}

struct ListenerSubscription {
    handlers: HandlerList,
    id: usize,
}

impl Subscription for ListenerSubscription {
    fn cancel(self: Box<Self>) {
        self.handlers.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

#[derive(Default)]
pub struct FakeFullscreen {
    pub capable: Cell<bool>,
    pub active: Cell<bool>,
    pub requests: Cell<usize>,
    pub listeners: Listeners,
}

impl FakeFullscreen {
    /// Flips the state and notifies like a `fullscreenchange` event.
    pub fn change(&self, active: bool) {
        self.active.set(active);
        self.listeners.fire();
    }
}

impl FullscreenApi for FakeFullscreen {
    fn can_go_fullscreen(&self) -> bool {
        self.capable.get()
    }

    fn is_fullscreen(&self) -> bool {
        self.active.get()
    }

    fn request_fullscreen(&self) {
        self.requests.set(self.requests.get() + 1);
    }

    fn on_change(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        Ok(self.listeners.subscribe(handler))
    }
}

#[derive(Default)]
pub struct FakeOrientation {
    pub capable: Cell<bool>,
    /// `Some` for a lock, `None` for an unlock.
    pub calls: RefCell<Vec<Option<String>>>,
}

impl FakeOrientation {
    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.borrow().clone()
    }
}

impl OrientationApi for FakeOrientation {
    fn can_orient(&self) -> bool {
        self.capable.get()
    }

    fn lock(&self, orientation: &str) {
        self.calls.borrow_mut().push(Some(orientation.to_string()));
    }

    fn unlock(&self) {
        self.calls.borrow_mut().push(None);
    }
}

#[derive(Default)]
pub struct FakeDevice {
    pub mobile: Cell<bool>,
}

impl DeviceProbe for FakeDevice {
    fn is_mobile(&self) -> bool {
        self.mobile.get()
    }
}

#[derive(Default)]
pub struct FakeTouch {
    pub listeners: Listeners,
    pub visible: Cell<bool>,
}

impl TouchTarget for FakeTouch {
    fn on_touch_start(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        Ok(self.listeners.subscribe(handler))
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

#[derive(Default)]
pub struct FakeOverlayHost {
    pub inserted: Cell<usize>,
    pub markup: Rc<RefCell<String>>,
}

impl FakeOverlayHost {
    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }
}

struct FakeSlot(Rc<RefCell<String>>);

impl OverlaySlot for FakeSlot {
    fn set_markup(&self, markup: &str) {
        *self.0.borrow_mut() = markup.to_string();
    }
}

impl OverlayHost for FakeOverlayHost {
    fn insert_overlay(&self) -> Result<Box<dyn OverlaySlot>, UiError> {
        self.inserted.set(self.inserted.get() + 1);
        Ok(Box::new(FakeSlot(self.markup.clone())))
    }
}

#[derive(Default)]
pub struct FakeConsole {
    lines: RefCell<VecDeque<LogLine>>,
    /// Refuse new lines, like a console whose append fails.
    pub rejects: Cell<bool>,
}

impl FakeConsole {
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.borrow().iter().cloned().collect()
    }
}

impl ConsoleView for FakeConsole {
    fn push_line(&self, line: &LogLine) -> bool {
        if self.rejects.get() {
            return false;
        }
        self.lines.borrow_mut().push_back(line.clone());
        true
    }

    fn remove_oldest(&self) {
        self.lines.borrow_mut().pop_front();
    }
}

#[derive(Default)]
pub struct FakeStatus {
    text: RefCell<String>,
}

impl FakeStatus {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl StatusView for FakeStatus {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

#[derive(Default)]
pub struct FakeBanner {
    pub visible: Cell<Option<bool>>,
}

impl Banner for FakeBanner {
    fn set_visible(&self, visible: bool) {
        self.visible.set(Some(visible));
    }
}

pub struct FakeDom {
    pub overlay: Rc<FakeOverlayHost>,
    pub touch: Rc<FakeTouch>,
    pub console: Rc<FakeConsole>,
    pub status: Rc<FakeStatus>,
    pub banner: Option<Rc<FakeBanner>>,
    /// Whether `hft-menu` is on the page.
    pub has_menu: bool,
    pub debug_views_resolved: Cell<usize>,
}

impl Default for FakeDom {
    fn default() -> Self {
        Self {
            overlay: Rc::default(),
            touch: Rc::default(),
            console: Rc::default(),
            status: Rc::default(),
            banner: Some(Rc::default()),
            has_menu: true,
            debug_views_resolved: Cell::new(0),
        }
    }
}

impl ControllerDom for FakeDom {
    fn overlay_host(&self) -> Result<Rc<dyn OverlayHost>, UiError> {
        if self.has_menu {
            Ok(self.overlay.clone())
        } else {
            Err(UiError::MissingElement("hft-menu"))
        }
    }

    fn touch_target(&self) -> Result<Rc<dyn TouchTarget>, UiError> {
        Ok(self.touch.clone())
    }

    fn debug_views(&self) -> Result<(Rc<dyn ConsoleView>, Rc<dyn StatusView>), UiError> {
        self.debug_views_resolved
            .set(self.debug_views_resolved.get() + 1);
        let console: Rc<dyn ConsoleView> = self.console.clone();
        let status: Rc<dyn StatusView> = self.status.clone();
        Ok((console, status))
    }

    fn disconnected_banner(&self) -> Option<Rc<dyn Banner>> {
        self.banner.clone().map(|b| b as Rc<dyn Banner>)
    }
}

#[derive(Default)]
pub struct FakeClient {
    pub connect: Listeners,
    pub disconnect: Listeners,
}

impl ConnectionSource for FakeClient {
    fn on_connect(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        Ok(self.connect.subscribe(handler))
    }

    fn on_disconnect(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        Ok(self.disconnect.subscribe(handler))
    }
}

/// One fake of each collaborator.
#[derive(Default)]
pub struct Harness {
    pub fullscreen: Rc<FakeFullscreen>,
    pub orientation: Rc<FakeOrientation>,
    pub device: Rc<FakeDevice>,
    pub dom: FakeDom,
    pub client: FakeClient,
}

impl Harness {
    /// A phone whose browser can go fullscreen but can't lock orientation.
    pub fn phone() -> Self {
        let harness = Self::default();
        harness.fullscreen.capable.set(true);
        harness.device.mobile.set(true);
        harness
    }

    pub fn runtime(&self) -> Runtime {
        Runtime {
            fullscreen: self.fullscreen.clone(),
            orientation: self.orientation.clone(),
            device: self.device.clone(),
        }
    }
}
