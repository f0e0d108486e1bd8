use crate::error::UiError;
use crate::runtime::{FullscreenApi, OrientationApi, OverlayHost, OverlaySlot};
use std::rc::Rc;


/// Shown when the game wants landscape but the phone can't lock it.
pub const REQUIRE_LANDSCAPE_HTML: &str = r#"<div id="hft-portrait" class="hft-fullsize hft-fullcenter">
  <div class="hft-portrait-rot90">
    <div class="hft-instruction">
      Turn the Screen
    </div>
    <div class="hft-xlarge">
      &#x21ba;
    </div>
  </div>
</div>"#;

/// Shown when the game wants portrait but the phone can't lock it.
pub const REQUIRE_PORTRAIT_HTML: &str = r#"<div id="hft-landscape" class="hft-fullsize hft-fullcenter">
  <div class="hft-landscape-rot90">
    <div class="hft-instruction">
      Turn the Screen
    </div>
    <div class="hft-xlarge">
      &#x21bb;
    </div>
  </div>
</div>"#;

/// Desired orientation for the session. The string is kept as given;
/// only substring checks are ever made against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrientationRequest {
    pub desired: Option<String>,
    pub optional: bool,
}

impl OrientationRequest {
    pub fn new(desired: Option<String>, optional: bool) -> Self {
        Self { desired, optional }
    }

    /// Value handed to the native lock, `None` meaning unlock.
    pub fn lock_target(&self) -> Option<&str> {
        match self.desired.as_deref() {
            None | Some("" | "none") => None,
            Some(orientation) => Some(orientation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Portrait,
    Landscape,
    Empty,
}

impl Prompt {
    pub fn for_orientation(desired: Option<&str>) -> Self {
        let desired = desired.unwrap_or_default();
        if desired.contains("portrait") {
            Self::Portrait
        } else if desired.contains("landscape") {
            Self::Landscape
        } else {
            Self::Empty
        }
    }

    pub const fn markup(self) -> &'static str {
        match self {
            Self::Portrait => REQUIRE_PORTRAIT_HTML,
            Self::Landscape => REQUIRE_LANDSCAPE_HTML,
            Self::Empty => "",
        }
    }
}

/// Locks orientation natively when possible, otherwise asks the user to
/// rotate the phone through an overlay.
pub struct OrientationController {
    request: OrientationRequest,
    orientation: Rc<dyn OrientationApi>,
    fullscreen: Rc<dyn FullscreenApi>,
    overlay_host: Rc<dyn OverlayHost>,
    overlay: Option<Box<dyn OverlaySlot>>,
    prompt: Option<Prompt>,
}

impl OrientationController {
    pub fn new(
        orientation: Rc<dyn OrientationApi>,
        fullscreen: Rc<dyn FullscreenApi>,
        overlay_host: Rc<dyn OverlayHost>,
    ) -> Self {
        Self {
            request: OrientationRequest::default(),
            orientation,
            fullscreen,
            overlay_host,
            overlay: None,
            prompt: None,
        }
    }

    pub const fn request(&self) -> &OrientationRequest {
        &self.request
    }

    /// Last prompt rendered, `None` if the overlay was never needed.
    pub const fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    pub fn set_orientation(&mut self, desired: Option<String>, optional: bool) -> Result<(), UiError> {
        self.request = OrientationRequest::new(desired, optional);
        if self.orientation.can_orient() {
            self.reset_orientation();
            Ok(())
        } else {
            let prompt = if optional {
                Prompt::Empty
            } else {
                Prompt::for_orientation(self.request.desired.as_deref())
            };
            self.show_prompt(prompt)
        }
    }

    /// Applies the stored request natively. Only done while fullscreen since
    /// runtimes reject locks outside of it. Returns whether it was applied.
    pub fn reset_orientation(&self) -> bool {
        if !self.fullscreen.is_fullscreen() {
            return false;
        }
        match self.request.lock_target() {
            Some(target) => {
                log::debug!("locking orientation to {target}");
                self.orientation.lock(target);
            }
            None => self.orientation.unlock(),
        }
        true
    }

    fn show_prompt(&mut self, prompt: Prompt) -> Result<(), UiError> {
        let slot = match self.overlay.take() {
            Some(slot) => slot,
            None => self.overlay_host.insert_overlay()?,
        };
        slot.set_markup(prompt.markup());
        self.overlay = Some(slot);
        self.prompt = Some(prompt);
        Ok(())
    }
}
