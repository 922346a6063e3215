use std::cell::RefCell;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use sixcities_shared::Navigator;

const OFFER_PREFIX: &str = "/offer/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Offer(String),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let Some(rest) = path.strip_prefix(OFFER_PREFIX) else {
            return Self::NotFound;
        };
        let segment = rest.trim_end_matches('/');
        if segment.is_empty() || segment.contains('/') {
            return Self::NotFound;
        }
        match urlencoding::decode(segment) {
            Ok(id) if !id.is_empty() => Self::Offer(id.into_owned()),
            _ => Self::NotFound,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct CurrentRoute(pub RwSignal<Route>);

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Redirects by replacing the current history entry and switching the route signal.
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    route: RwSignal<Route>,
}

impl BrowserNavigator {
    pub fn new(route: RwSignal<Route>) -> Self {
        Self { route }
    }
}

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        if let Some(history) = web_sys::window().and_then(|window| window.history().ok())
            && let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(path))
        {
            web_sys::console::warn_1(&format!("history.replaceState({path}) failed: {e:?}").into());
        }
        self.route.set(Route::parse(path));
    }
}

struct PopStateBinding {
    window: web_sys::Window,
    _handler: Closure<dyn Fn(web_sys::PopStateEvent)>,
}

thread_local! {
    static POPSTATE_BINDING: RefCell<Option<PopStateBinding>> = const { RefCell::new(None) };
}

/// Keep the route signal in step with browser back/forward navigation.
pub fn bind_popstate(route: RwSignal<Route>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    POPSTATE_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old.window.remove_event_listener_with_callback(
                "popstate",
                old._handler.as_ref().unchecked_ref(),
            );
        }
    });

    let handler = Closure::<dyn Fn(web_sys::PopStateEvent)>::new(move |_: web_sys::PopStateEvent| {
        route.set(Route::parse(&current_path()));
    });

    if window
        .add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
        .is_ok()
    {
        POPSTATE_BINDING.with(|slot| {
            *slot.borrow_mut() = Some(PopStateBinding {
                window: window.clone(),
                _handler: handler,
            });
        });
    }
}
