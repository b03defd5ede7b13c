//! Application Context
//!
//! Shared state provided via Leptos Context API: current route, active
//! session, one-shot flash notice. The session is mirrored into
//! localStorage so a page reload stays signed in.

use leptos::prelude::*;

use potluck_core::Session;

use crate::route::Route;

const SESSION_KEY: &str = "potluck.session";

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Active session, None when signed out - read
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
    /// One-shot notice shown by the next screen - read
    pub flash: ReadSignal<Option<String>>,
    set_flash: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        flash: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            session: session.0,
            set_session: session.1,
            flash: flash.0,
            set_flash: flash.1,
        }
    }

    /// Switch screens and mirror the route into the URL hash
    pub fn navigate(&self, route: Route) {
        self.set_flash.set(None);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.to_hash());
        }
        self.set_route.set(route);
    }

    /// Navigate leaving a notice for the target screen
    pub fn navigate_with_flash(&self, route: Route, message: &str) {
        self.navigate(route);
        self.set_flash.set(Some(message.to_string()));
    }

    /// Called by the hash listener. `navigate` already moved both the hash
    /// and the signal, so only a genuine back/forward jump sets anything.
    pub fn sync_route_from_hash(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// Store the session and flip the UI to signed-in
    pub fn sign_in(&self, session: Session) {
        save_stored_session(&session);
        self.set_session.set(Some(session));
    }

    /// Drop local session state; callers handle the service-side call
    pub fn sign_out(&self) {
        clear_stored_session();
        self.set_session.set(None);
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Session left in localStorage by a previous visit, if any
pub fn load_stored_session() -> Option<Session> {
    let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

fn save_stored_session(session: &Session) {
    if let (Some(storage), Ok(raw)) = (storage(), serde_json::to_string(session)) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

fn clear_stored_session() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
