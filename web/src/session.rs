//! Session binding for the browser
//!
//! The controller lives in a local [`StoredValue`] owned by the component that
//! called [`use_game_session`]; its state is mirrored into an [`RwSignal`] after every
//! change. When that component is unmounted the poll interval is cleared and the
//! controller deactivated, so responses still in flight are dropped.

use leptos::prelude::*;
use shadowchess::core::{ClientSettings, API_URL_ENV};
use shadowchess::game::{Coord, SessionController, SessionState};
use shadowchess::networking::HttpGameClient;
use std::rc::Rc;

type Controller = Rc<SessionController<HttpGameClient>>;

/// Settings for the web build
///
/// The API root can be baked in at compile time through `SHADOWCHESS_API_URL`.
pub fn web_settings() -> ClientSettings {
    let baked = option_env!("SHADOWCHESS_API_URL").map(str::to_string);
    log::debug!("[SETTINGS] {} = {:?}", API_URL_ENV, baked);
    ClientSettings::default().with_api_override(baked)
}

/// Copyable handle to a live game session
#[derive(Clone, Copy)]
pub struct GameSession {
    pub state: RwSignal<SessionState>,
    controller: StoredValue<Controller, LocalStorage>,
}

impl GameSession {
    pub fn click(&self, coord: Coord) {
        let controller = self.controller.get_value();
        wasm_bindgen_futures::spawn_local(async move { controller.click(coord).await });
    }

    pub fn reset(&self) {
        let controller = self.controller.get_value();
        wasm_bindgen_futures::spawn_local(async move { controller.reset().await });
    }

    fn refresh(&self) {
        let controller = self.controller.get_value();
        wasm_bindgen_futures::spawn_local(async move { controller.refresh().await });
    }

    fn deactivate(&self) {
        self.controller.with_value(|controller| controller.deactivate());
    }
}

/// Start a session scoped to the calling component
///
/// Fetches immediately and then on every tick of the poll interval.
pub fn use_game_session(settings: &ClientSettings) -> GameSession {
    let controller: Controller = Rc::new(SessionController::new(HttpGameClient::new(
        settings.api_base_url.clone(),
    )));

    let state = RwSignal::new(controller.snapshot());
    controller.subscribe(move |next| state.set(next.clone()));

    let session = GameSession {
        state,
        controller: StoredValue::new_local(controller),
    };

    session.refresh();
    match set_interval_with_handle(move || session.refresh(), settings.poll_interval()) {
        Ok(handle) => {
            log::info!("[POLL] Polling every {:?}", settings.poll_interval());
            on_cleanup(move || {
                handle.clear();
                session.deactivate();
                log::debug!("[POLL] Polling stopped");
            });
        }
        Err(e) => {
            log::error!("[POLL] Could not start polling: {:?}", e);
            on_cleanup(move || session.deactivate());
        }
    }

    session
}
