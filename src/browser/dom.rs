use super::{dom_error, EventSubscription};
use controller_core::debug::{LineKind, LogLine};
use controller_core::runtime::{
    Banner, ConsoleView, ControllerDom, Handler, OverlayHost, OverlaySlot, StatusView,
    Subscription, TouchTarget,
};
use controller_core::UiError;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Text};

const TOUCH_EVENTS: &[&str] = &["touchstart"];

fn set_display(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", display);
}

/// The fixed elements of a controller page, looked up by id.
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &'static str) -> Result<HtmlElement, UiError> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or(UiError::MissingElement(id))
    }
}

impl ControllerDom for BrowserDom {
    fn overlay_host(&self) -> Result<Rc<dyn OverlayHost>, UiError> {
        Ok(Rc::new(MenuAnchor {
            document: self.document.clone(),
            menu: self.element("hft-menu")?,
        }))
    }

    fn touch_target(&self) -> Result<Rc<dyn TouchTarget>, UiError> {
        Ok(Rc::new(TouchStart(self.element("hft-touchstart")?)))
    }

    fn debug_views(&self) -> Result<(Rc<dyn ConsoleView>, Rc<dyn StatusView>), UiError> {
        let status = self.element("hft-status")?;
        let console = self.element("hft-console")?;
        set_display(&self.element("hft-debug")?, true);

        let text = self.document.create_text_node("");
        status.append_child(&text).map_err(|e| dom_error(&e))?;

        let console: Rc<dyn ConsoleView> = Rc::new(HtmlConsole {
            document: self.document.clone(),
            container: console,
            lines: RefCell::default(),
        });
        let status: Rc<dyn StatusView> = Rc::new(StatusText(text));
        Ok((console, status))
    }

    fn disconnected_banner(&self) -> Option<Rc<dyn Banner>> {
        let element = self.element("hft-disconnected").ok()?;
        Some(Rc::new(ElementBanner(element)))
    }
}

/// Overlays go right before `hft-menu` so the menu stays on top.
struct MenuAnchor {
    document: Document,
    menu: HtmlElement,
}

impl OverlayHost for MenuAnchor {
    fn insert_overlay(&self) -> Result<Box<dyn OverlaySlot>, UiError> {
        let parent = self
            .menu
            .parent_node()
            .ok_or(UiError::MissingElement("hft-menu"))?;
        let div = self
            .document
            .create_element("div")
            .map_err(|e| dom_error(&e))?;
        parent
            .insert_before(&div, Some(self.menu.as_ref()))
            .map_err(|e| dom_error(&e))?;
        Ok(Box::new(OverlayDiv(div)))
    }
}

struct OverlayDiv(Element);

impl OverlaySlot for OverlayDiv {
    fn set_markup(&self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

struct TouchStart(HtmlElement);

impl TouchTarget for TouchStart {
    fn on_touch_start(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        let subscription = EventSubscription::listen(&self.0, TOUCH_EVENTS, handler)?;
        Ok(Box::new(subscription))
    }

    fn set_visible(&self, visible: bool) {
        set_display(&self.0, visible);
    }
}

struct ElementBanner(HtmlElement);

impl Banner for ElementBanner {
    fn set_visible(&self, visible: bool) {
        set_display(&self.0, visible);
    }
}

struct HtmlConsole {
    document: Document,
    container: HtmlElement,
    lines: RefCell<VecDeque<HtmlElement>>,
}

impl ConsoleView for HtmlConsole {
    fn push_line(&self, line: &LogLine) -> bool {
        let Some(element) = self
            .document
            .create_element("div")
            .ok()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        else {
            return false;
        };
        element.set_text_content(Some(&line.text));
        if line.kind == LineKind::Error {
            let _ = element.style().set_property("color", "red");
        }
        if self.container.append_child(&element).is_err() {
            return false;
        }
        self.lines.borrow_mut().push_back(element);
        true
    }

    fn remove_oldest(&self) {
        if let Some(element) = self.lines.borrow_mut().pop_front() {
            element.remove();
        }
    }
}

struct StatusText(Text);

impl StatusView for StatusText {
    fn set_text(&self, text: &str) {
        self.0.set_node_value(Some(text));
    }
}
