use controller_core::runtime::{ConnectionSource, Handler, Subscription};
use controller_core::UiError;
use js_sys::Function;
use leptos::set_timeout;
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The page's connection to the game host.
    #[derive(Clone)]
    pub type GameClient;

    #[wasm_bindgen(method, catch, js_name = addEventListener)]
    fn add_event_listener(
        this: &GameClient,
        event: &str,
        handler: &Function,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeEventListener)]
    fn remove_event_listener(
        this: &GameClient,
        event: &str,
        handler: &Function,
    ) -> Result<(), JsValue>;
}

struct ClientSubscription {
    client: GameClient,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Subscription for ClientSubscription {
    fn cancel(self: Box<Self>) {
        let Self {
            client,
            event,
            closure,
        } = *self;
        let _ = client.remove_event_listener(event, closure.as_ref().unchecked_ref());
        set_timeout(move || drop(closure), Duration::ZERO);
    }
}

impl GameClient {
    fn listen(
        &self,
        event: &'static str,
        handler: Handler,
    ) -> Result<Box<dyn Subscription>, UiError> {
        let closure = Closure::<dyn FnMut()>::new(move || handler());
        self.add_event_listener(event, closure.as_ref().unchecked_ref())
            .map_err(|e| super::dom_error(&e))?;
        Ok(Box::new(ClientSubscription {
            client: self.clone(),
            event,
            closure,
        }))
    }
}

impl ConnectionSource for GameClient {
    fn on_connect(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        self.listen("connect", handler)
    }

    fn on_disconnect(&self, handler: Handler) -> Result<Box<dyn Subscription>, UiError> {
        self.listen("disconnect", handler)
    }
}
