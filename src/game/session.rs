//! Game session controller
//!
//! Owns the client's cached view of the remote game and is the only thing that
//! mutates it. Three kinds of events feed it: poll results, clicks, and reset
//! results.
//!
//! # Ordering
//!
//! Polls and user requests are never serialized against each other, so responses
//! can arrive in any order. Every request takes a sequence number when it is
//! issued; a snapshot is applied only if its number is newer than the last applied
//! one. Older snapshots are dropped.
//!
//! # Lifecycle
//!
//! A controller starts active in [`SessionPhase::Loading`]. After
//! [`SessionController::deactivate`] nothing changes the state again, including
//! responses to requests that were already in flight.

use std::cell::RefCell;
use tracing::{debug, info, warn};

use super::selection::{ClickAction, Selection};
use super::types::{Coord, GameState, Move};
use crate::networking::{ClientError, GameApi, MoveOutcome};

/// Session-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Waiting for the first snapshot
    #[default]
    Loading,
    /// First fetch failed and nothing has been loaded since
    Error,
    /// A snapshot is available
    Ready,
}

/// Everything the view needs to draw the session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub game: Option<GameState>,
    pub selection: Selection,
    /// Last move this client got accepted, for highlighting
    pub last_move: Option<Move>,
    /// Message shown while in [`SessionPhase::Error`]
    pub error: Option<String>,
    /// Reason the last move was rejected, for diagnostics
    pub rejection: Option<String>,
}

impl SessionState {
    /// Clicks are only processed with a live, unfinished game
    pub fn accepts_clicks(&self) -> bool {
        self.phase == SessionPhase::Ready && self.game.as_ref().is_some_and(|g| !g.game_over)
    }
}

/// Issue-order number attached to each remote request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestSeq(u64);

struct Inner {
    state: SessionState,
    issued: u64,
    applied: u64,
    active: bool,
}

impl Inner {
    fn issue(&mut self) -> RequestSeq {
        self.issued += 1;
        RequestSeq(self.issued)
    }

    /// Install `game` if the session is live and `seq` is newer than what is shown
    fn apply_snapshot(&mut self, seq: RequestSeq, game: GameState, source: &str) -> bool {
        if seq.0 <= self.applied {
            debug!(
                "[SESSION] Dropping stale {} snapshot #{} (showing #{})",
                source, seq.0, self.applied
            );
            return false;
        }
        self.applied = seq.0;

        let state = &mut self.state;
        if state.phase != SessionPhase::Ready {
            info!("[SESSION] Ready after {} #{}", source, seq.0);
        }
        state.phase = SessionPhase::Ready;
        state.error = None;
        if state.selection.revalidate(&game) {
            debug!("[SESSION] Selection no longer valid in new snapshot, cleared");
        }
        state.game = Some(game);
        true
    }
}

type Listener = Box<dyn Fn(&SessionState)>;

/// The game session controller
///
/// Shared as `Rc<SessionController<_>>` between the polling task, input handlers and
/// the view. Interior mutability keeps every method on `&self`; no borrow is held
/// across an `.await`.
pub struct SessionController<A> {
    api: A,
    inner: RefCell<Inner>,
    listener: RefCell<Option<Listener>>,
}

impl<A: GameApi> SessionController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            inner: RefCell::new(Inner {
                state: SessionState::default(),
                issued: 0,
                applied: 0,
                active: true,
            }),
            listener: RefCell::new(None),
        }
    }

    /// Register the callback run after every state change
    ///
    /// Replaces any previous listener. The callback must not call back into the
    /// controller's mutating methods.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    /// Stop accepting results; in-flight responses are discarded on arrival
    pub fn deactivate(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.active {
            info!("[SESSION] Deactivated");
        }
        inner.active = false;
    }

    /// Copy of the current session state
    pub fn snapshot(&self) -> SessionState {
        self.inner.borrow().state.clone()
    }

    fn issue(&self) -> Option<RequestSeq> {
        let mut inner = self.inner.borrow_mut();
        if !inner.active {
            return None;
        }
        Some(inner.issue())
    }

    fn notify(&self) {
        if let Some(listener) = self.listener.borrow().as_ref() {
            let inner = self.inner.borrow();
            listener(&inner.state);
        }
    }

    /// One poll: fetch the state and apply it
    ///
    /// A failure before anything was loaded puts the session in
    /// [`SessionPhase::Error`]; later failures keep the last good snapshot.
    pub async fn refresh(&self) {
        let Some(seq) = self.issue() else {
            return;
        };
        let result = self.api.fetch_state().await;

        let changed = {
            let mut inner = self.inner.borrow_mut();
            if !inner.active {
                debug!("[SESSION] Ignoring poll #{} after deactivation", seq.0);
                return;
            }
            match result {
                Ok(game) => inner.apply_snapshot(seq, game, "poll"),
                Err(e) => Self::record_fetch_failure(&mut inner.state, &e),
            }
        };
        if changed {
            self.notify();
        }
    }

    fn record_fetch_failure(state: &mut SessionState, error: &ClientError) -> bool {
        if state.phase == SessionPhase::Loading {
            warn!("[SESSION] Initial load failed: {}", error);
            state.phase = SessionPhase::Error;
            state.error = Some(format!("Failed to load game state: {}", error));
            true
        } else {
            debug!("[SESSION] Poll failed, keeping last state: {}", error);
            false
        }
    }

    /// Handle a click on `coord`
    ///
    /// Selects, deselects, or submits a move depending on the current selection.
    /// Ignored while loading, in error, after game over, or once deactivated.
    pub async fn click(&self, coord: Coord) {
        let action = {
            let mut inner = self.inner.borrow_mut();
            if !inner.active || !inner.state.accepts_clicks() {
                return;
            }
            let SessionState {
                game, selection, ..
            } = &mut inner.state;
            match game.as_ref() {
                Some(game) => selection.on_click(game, coord),
                None => ClickAction::Ignored,
            }
        };

        match action {
            ClickAction::Ignored => {}
            ClickAction::Selected(at) => {
                debug!("[SESSION] Selected {}", at);
                self.notify();
            }
            ClickAction::Deselected => {
                debug!("[SESSION] Deselected {}", coord);
                self.notify();
            }
            ClickAction::SubmitMove { mv, reselect } => self.submit_move(mv, reselect).await,
        }
    }

    async fn submit_move(&self, mv: Move, reselect: Option<Coord>) {
        let Some(seq) = self.issue() else {
            return;
        };
        info!("[SESSION] Submitting move {} (#{})", mv, seq.0);
        let outcome = self.api.submit_move(mv).await;

        {
            let mut inner = self.inner.borrow_mut();
            if !inner.active {
                debug!("[SESSION] Ignoring move result #{} after deactivation", seq.0);
                return;
            }
            match outcome {
                MoveOutcome::Applied(game) => {
                    inner.state.selection.on_move_result(true, None);
                    inner.state.last_move = Some(mv);
                    inner.state.rejection = None;
                    inner.apply_snapshot(seq, game, "move");
                }
                MoveOutcome::Rejected { message } => {
                    info!("[SESSION] Move {} rejected: {}", mv, message);
                    let state = &mut inner.state;
                    state.selection.on_move_result(false, reselect);
                    // A poll may have landed while the move was in flight.
                    if let Some(game) = &state.game {
                        state.selection.revalidate(game);
                    }
                    state.rejection = Some(message);
                }
            }
        }
        self.notify();
    }

    /// Ask the server for a new game
    ///
    /// On success the returned state replaces the cached one and selection and
    /// last-move highlight are cleared. On failure nothing changes.
    pub async fn reset(&self) {
        let Some(seq) = self.issue() else {
            return;
        };
        info!("[SESSION] Requesting reset (#{})", seq.0);
        let result = self.api.reset().await;

        {
            let mut inner = self.inner.borrow_mut();
            if !inner.active {
                debug!("[SESSION] Ignoring reset result #{} after deactivation", seq.0);
                return;
            }
            match result {
                Ok(game) => {
                    inner.state.selection.clear();
                    inner.state.last_move = None;
                    inner.state.rejection = None;
                    inner.apply_snapshot(seq, game, "reset");
                }
                Err(e) => {
                    warn!("[SESSION] Reset failed: {}", e);
                    return;
                }
            }
        }
        self.notify();
    }
}
