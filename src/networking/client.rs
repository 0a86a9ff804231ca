use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared::protocol::{GameStateDto, MoveRequest, MoveResponse, ResetResponse};
use std::rc::Rc;
use tracing::{debug, warn};

use super::error::{ClientError, ClientResult};
use crate::game::types::{GameState, Move};

/// Result of submitting a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The server accepted the move; this is the state after it (and after the AI reply)
    Applied(GameState),
    /// Illegal move, wrong turn, or the request never reached the server
    Rejected { message: String },
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }
}

/// Operations offered by the remote game authority
///
/// Futures are not `Send`: the client runs on one cooperative thread, in the browser
/// or inside a tokio `LocalSet`.
#[async_trait(?Send)]
pub trait GameApi {
    /// Current snapshot of the game
    async fn fetch_state(&self) -> ClientResult<GameState>;

    /// Ask the server to play `mv` for the player
    ///
    /// Transport failures come back as [`MoveOutcome::Rejected`].
    async fn submit_move(&self, mv: Move) -> MoveOutcome;

    /// Start a fresh game
    async fn reset(&self) -> ClientResult<GameState>;
}

#[async_trait(?Send)]
impl<T: GameApi + ?Sized> GameApi for Rc<T> {
    async fn fetch_state(&self) -> ClientResult<GameState> {
        (**self).fetch_state().await
    }

    async fn submit_move(&self, mv: Move) -> MoveOutcome {
        (**self).submit_move(mv).await
    }

    async fn reset(&self) -> ClientResult<GameState> {
        (**self).reset().await
    }
}

/// [`GameApi`] over the server's HTTP/JSON endpoints
///
/// Stateless apart from the connection pool: no retries, no caching, and no timeout
/// beyond what the transport applies.
#[derive(Debug, Clone)]
pub struct HttpGameClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGameClient {
    /// `base_url` is the API root, e.g. `http://localhost:5000/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/game/{}", self.base_url, path)
    }

    async fn try_submit_move(&self, mv: Move) -> ClientResult<MoveOutcome> {
        let response = self
            .http
            .post(self.endpoint("move"))
            .json(&MoveRequest::from(mv))
            .send()
            .await?;

        // Rejections may arrive as 400 with a JSON body, so read the body first.
        let body: MoveResponse = read_json(response).await?;
        if !body.success {
            let message = body
                .message
                .unwrap_or_else(|| "Move rejected by server".to_string());
            return Ok(MoveOutcome::Rejected { message });
        }

        let state = body.state.ok_or(ClientError::MissingState)?;
        Ok(MoveOutcome::Applied(GameState::try_from(state)?))
    }
}

#[async_trait(?Send)]
impl GameApi for HttpGameClient {
    async fn fetch_state(&self) -> ClientResult<GameState> {
        let response = self.http.get(self.endpoint("state")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let dto: GameStateDto = read_json(response).await?;
        let state = GameState::try_from(dto)?;
        debug!(
            "[API] Fetched state: {} pieces, game_over={}",
            state.pieces.len(),
            state.game_over
        );
        Ok(state)
    }

    async fn submit_move(&self, mv: Move) -> MoveOutcome {
        match self.try_submit_move(mv).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("[API] Move {} failed: {}", mv, e);
                MoveOutcome::Rejected {
                    message: e.to_string(),
                }
            }
        }
    }

    async fn reset(&self) -> ClientResult<GameState> {
        let response = self.http.post(self.endpoint("reset")).send().await?;
        let body: ResetResponse = read_json(response).await?;
        if !body.success {
            return Err(ClientError::ResetRejected);
        }

        let state = body.state.ok_or(ClientError::MissingState)?;
        Ok(GameState::try_from(state)?)
    }
}

/// Decode a JSON body, reporting the HTTP status instead when an error status has
/// no parseable body
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let body = response.bytes().await?;
    match serde_json::from_slice(&body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(ClientError::Status(status.as_u16())),
        Err(e) => Err(ClientError::Decode(e)),
    }
}
