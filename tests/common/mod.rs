//! In-process stand-in for the game server
//!
//! Serves the three `/api/game/...` endpoints on an ephemeral localhost port. Moves
//! are accepted when they start on a player piece and do not land on another one;
//! there is no AI reply.

#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing, Json, Router};
use shared::protocol::{
    GameStateDto, MoveRequest, MoveResponse, PieceDto, ResetResponse, TEAM_AI, TEAM_PLAYER,
    TIPO_PEON, TIPO_REY,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub struct FakeGame {
    pub state: Mutex<GameStateDto>,
    pub state_hits: AtomicUsize,
    pub fail_state: AtomicBool,
    pub malformed_state: AtomicBool,
}

impl FakeGame {
    fn new() -> Self {
        Self {
            state: Mutex::new(initial_state()),
            state_hits: AtomicUsize::new(0),
            fail_state: AtomicBool::new(false),
            malformed_state: AtomicBool::new(false),
        }
    }

    pub fn hits(&self) -> usize {
        self.state_hits.load(Ordering::SeqCst)
    }
}

pub fn pawn(x: i64, y: i64, team: &str) -> PieceDto {
    PieceDto {
        x,
        y,
        tipo: TIPO_PEON.to_string(),
        team: team.to_string(),
        hp: 10,
        hp_max: 10,
        es_boss: false,
        damage: Some(3),
        nombre: None,
    }
}

/// Player pawn on (0,6), enemy boss king on (4,0) under fog
pub fn initial_state() -> GameStateDto {
    let mut niebla = vec![vec![false; 8]; 8];
    niebla[0][4] = true;
    GameStateDto {
        turno: TEAM_PLAYER.to_string(),
        game_over: false,
        winner: None,
        piezas: vec![
            pawn(0, 6, TEAM_PLAYER),
            pawn(1, 6, TEAM_PLAYER),
            PieceDto {
                x: 4,
                y: 0,
                tipo: TIPO_REY.to_string(),
                team: TEAM_AI.to_string(),
                hp: 30,
                hp_max: 30,
                es_boss: true,
                damage: Some(6),
                nombre: Some("Rey Sombrio".to_string()),
            },
        ],
        niebla,
        logs: vec!["Partida iniciada".to_string()],
        width: Some(8),
        height: Some(8),
    }
}

type Shared = Arc<FakeGame>;

async fn get_state(State(game): State<Shared>) -> Result<Json<serde_json::Value>, StatusCode> {
    game.state_hits.fetch_add(1, Ordering::SeqCst);
    if game.fail_state.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if game.malformed_state.load(Ordering::SeqCst) {
        let mut state = serde_json::to_value(initial_state()).unwrap_or_default();
        state["niebla"] = serde_json::json!([[false, false], [true]]);
        return Ok(Json(state));
    }
    let state = game.state.lock().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(serde_json::to_value(&*state).unwrap_or_default()))
}

async fn post_move(
    State(game): State<Shared>,
    Json(req): Json<MoveRequest>,
) -> (StatusCode, Json<MoveResponse>) {
    let mut state = game.state.lock().unwrap();
    let from = (i64::from(req.from_x), i64::from(req.from_y));
    let to = (i64::from(req.to_x), i64::from(req.to_y));

    let has_mover = state
        .piezas
        .iter()
        .any(|p| (p.x, p.y) == from && p.team == TEAM_PLAYER);
    let blocked = state
        .piezas
        .iter()
        .any(|p| (p.x, p.y) == to && p.team == TEAM_PLAYER);

    if has_mover && !blocked && from != to {
        state.piezas.retain(|p| (p.x, p.y) != to);
        for piece in state.piezas.iter_mut().filter(|p| (p.x, p.y) == from) {
            piece.x = to.0;
            piece.y = to.1;
        }
        state
            .logs
            .push(format!("JUGADOR mueve {:?} -> {:?}", from, to));
        (
            StatusCode::OK,
            Json(MoveResponse {
                success: true,
                state: Some(state.clone()),
                message: None,
            }),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(MoveResponse {
                success: false,
                state: None,
                message: Some("Movimiento invalido".to_string()),
            }),
        )
    }
}

async fn post_reset(State(game): State<Shared>) -> Json<ResetResponse> {
    let fresh = initial_state();
    *game.state.lock().unwrap() = fresh.clone();
    Json(ResetResponse {
        success: true,
        state: Some(fresh),
    })
}

/// Start the fake server; returns its API root and the shared game
pub async fn spawn_server() -> (String, Shared) {
    let game = Arc::new(FakeGame::new());
    let app = Router::new()
        .route("/api/game/state", routing::get(get_state))
        .route("/api/game/move", routing::post(post_move))
        .route("/api/game/reset", routing::post(post_reset))
        .with_state(game.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake server crashed");
    });
    (format!("http://{}/api", addr), game)
}

/// An API root nothing is listening on
pub async fn dead_server_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");
    drop(listener);
    format!("http://{}/api", addr)
}
