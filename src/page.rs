use crate::styles::CONTROLLER_STYLES;
use leptos::{component, view, IntoView};

/// The element layout every controller page provides.
#[component]
pub fn ControllerPage(
    /// Title text shown in the middle of the page, inside `hft-content`.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <style>
            {CONTROLLER_STYLES}
        </style>
        <div id="hft-content" class="hft-fullsize hft-fullcenter">
            <div class="hft-instruction">{title}</div>
        </div>
        <div id="hft-menu">"⚙"</div>
        <div id="hft-touchstart" class="hft-fullsize hft-fullcenter">
            <div class="hft-instruction">"Tap to continue"</div>
        </div>
        <div id="hft-disconnected" class="hft-fullsize hft-fullcenter">
            <div class="hft-instruction">"Disconnected"</div>
        </div>
        <div id="hft-debug">
            <div id="hft-status"></div>
            <div id="hft-console"></div>
        </div>
    }
}
