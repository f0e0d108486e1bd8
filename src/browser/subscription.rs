use controller_core::runtime::{Handler, Subscription};
use controller_core::UiError;
use leptos::set_timeout;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// DOM listener for one or more event names sharing a handler.
pub struct EventSubscription {
    target: EventTarget,
    events: &'static [&'static str],
    closure: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn listen(
        target: &EventTarget,
        events: &'static [&'static str],
        handler: Handler,
    ) -> Result<Self, UiError> {
        let subscription = Self {
            target: target.clone(),
            events,
            closure: Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler()),
        };
        for event in events {
            let added = subscription
                .target
                .add_event_listener_with_callback(event, subscription.closure.as_ref().unchecked_ref());
            if let Err(e) = added {
                Box::new(subscription).cancel();
                return Err(super::dom_error(&e));
            }
        }
        Ok(subscription)
    }
}

impl Subscription for EventSubscription {
    fn cancel(self: Box<Self>) {
        let Self {
            target,
            events,
            closure,
        } = *self;
        for event in events {
            let _ = target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        // Cancelling from inside the handler itself is normal (touchstart),
        // so the closure must outlive the current dispatch.
        set_timeout(move || drop(closure), Duration::ZERO);
    }
}
