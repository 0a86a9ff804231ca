//! Polling lifecycle for native builds
//!
//! [`ActiveSession`] ties the polling task to a value: creating it issues the first
//! fetch and starts the timer, dropping it stops the timer and deactivates the
//! controller so late responses are discarded.
//!
//! Must be created inside a tokio [`LocalSet`](tokio::task::LocalSet) because the
//! controller is not `Send`.

use std::rc::Rc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::session::SessionController;
use crate::networking::GameApi;

/// A running session: the controller plus its polling task
pub struct ActiveSession<A: GameApi + 'static> {
    controller: Rc<SessionController<A>>,
    poller: JoinHandle<()>,
}

impl<A: GameApi + 'static> ActiveSession<A> {
    /// Start polling `controller` every `interval`, beginning immediately
    pub fn start(controller: Rc<SessionController<A>>, interval: Duration) -> Self {
        info!("[POLL] Polling every {:?}", interval);
        let poller = tokio::task::spawn_local(poll_loop(controller.clone(), interval));
        Self { controller, poller }
    }

    pub fn controller(&self) -> &Rc<SessionController<A>> {
        &self.controller
    }

    /// Stop polling and deactivate the controller
    pub fn stop(self) {
        drop(self);
    }
}

impl<A: GameApi + 'static> Drop for ActiveSession<A> {
    fn drop(&mut self) {
        self.poller.abort();
        self.controller.deactivate();
        debug!("[POLL] Polling stopped");
    }
}

async fn poll_loop<A: GameApi>(controller: Rc<SessionController<A>>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        // First tick completes immediately, giving the initial fetch.
        ticker.tick().await;
        if !controller.is_active() {
            break;
        }
        controller.refresh().await;
    }
}
