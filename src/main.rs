use controller_core::runtime::{ConnectionSource, Handler, Subscription};
use controller_core::{ConnectionCallbacks, ControllerOptions, UiError};
use hft_controller::page::ControllerPage;
use leptos::{mount_to_body, view};

/// Stand-in for a game client; the demo page never connects anywhere.
struct OfflineClient;

struct NoSubscription;

impl Subscription for NoSubscription {
    fn cancel(self: Box<Self>) {}
}

impl ConnectionSource for OfflineClient {
    fn on_connect(&self, _handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        Ok(Box::new(NoSubscription))
    }

    fn on_disconnect(&self, _handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        Ok(Box::new(NoSubscription))
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(|| view! { <ControllerPage title="Controller demo"/> });

    let options = ControllerOptions {
        debug: true,
        orientation: Some("landscape-primary".to_string()),
        ..ControllerOptions::default()
    };
    match hft_controller::attach(&OfflineClient, &options, ConnectionCallbacks::default()) {
        Ok(session) => {
            session.log("controller ready");
            session.set_status("offline");
        }
        Err(e) => log::error!("controller setup failed: {e}"),
    }
}
