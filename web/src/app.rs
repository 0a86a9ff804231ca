use leptos::prelude::*;
use shadowchess::game::{SessionPhase, SessionState};
use shadowchess::rendering::{BoardTheme, BoardView, GameOverBanner};

use crate::session::{use_game_session, web_settings, GameSession};
use crate::square::BoardSquare;

#[component]
pub fn ChessApp() -> impl IntoView {
    let settings = web_settings();
    let session = use_game_session(&settings);
    let highlight_last_move = settings.highlight_last_move;

    let header_style = "height: 64px; background: rgba(13, 13, 25, 0.85); border-bottom: 1px solid rgba(255,255,255,0.08); display: flex; align-items: center; justify-content: space-between; padding: 0 32px; box-shadow: 0 4px 20px rgba(0,0,0,0.4);";
    let title_style = "color: white; font-family: 'Outfit', sans-serif; font-size: 20px; font-weight: 600; letter-spacing: 0.5px;";
    let container_style = "width: 100vw; min-height: 100vh; margin: 0; padding: 0; background: radial-gradient(circle at center, #1a1a2e 0%, #0a0a15 100%); display: flex; flex-direction: column;";
    let button_style = "background: #6c63ff; color: white; border: none; border-radius: 4px; padding: 8px 16px; font-size: 13px; cursor: pointer;";

    view! {
        <div style=container_style>
            <header style=header_style>
                <h1 style=title_style>"AJEDREZ DE LAS SOMBRAS"</h1>
                <button style=button_style on:click=move |_| session.reset()>
                    "New game"
                </button>
            </header>

            <main style="flex: 1; display: flex; flex-direction: column; align-items: center; padding: 24px; gap: 16px;">
                {move || session.state.with(|state| session_view(session, state, highlight_last_move))}
            </main>
        </div>
    }
}

fn session_view(session: GameSession, state: &SessionState, highlight_last_move: bool) -> AnyView {
    let message_style = "color: white; font-family: sans-serif; font-size: 16px;";
    match state.phase {
        SessionPhase::Loading => view! { <p style=message_style>"Loading..."</p> }.into_any(),
        SessionPhase::Error => {
            let error = state
                .error
                .clone()
                .unwrap_or_else(|| "Failed to load game state".to_string());
            view! { <p style="color: #ff4444; font-family: monospace;">{error}</p> }.into_any()
        }
        SessionPhase::Ready => match BoardView::from_session(state, highlight_last_move) {
            Some(board) => {
                let rejection = state.rejection.clone();
                let logs = board.logs.clone();
                view! {
                    <StatusBar board=board.clone() />
                    <ChessBoard board=board session=session />
                    {rejection.map(|reason| view! {
                        <p style="color: #ffaa44; font-family: monospace; font-size: 12px;">
                            {format!("Last move rejected: {}", reason)}
                        </p>
                    })}
                    <LogPanel logs=logs />
                }
                .into_any()
            }
            None => view! { <p style=message_style>"No game state"</p> }.into_any(),
        },
    }
}

/// Turn indicator, or the result once the game is over
#[component]
fn StatusBar(board: BoardView) -> impl IntoView {
    let (text, color) = match board.banner {
        Some(banner @ GameOverBanner::Victory) => (banner.label(), BoardTheme::VICTORY),
        Some(banner @ GameOverBanner::Defeat) => (banner.label(), BoardTheme::DEFEAT),
        None => (board.turn.label(), "white"),
    };
    let size = if board.banner.is_some() { "32px" } else { "18px" };
    view! {
        <div style=format!("color: {}; font-family: sans-serif; font-weight: 600; font-size: {};", color, size)>
            {text}
        </div>
    }
}

/// The 8×8 grid, `y = 0` at the top
#[component]
fn ChessBoard(board: BoardView, session: GameSession) -> impl IntoView {
    let frame_style = format!(
        "display: grid; grid-template-columns: repeat(8, 60px); border: 8px solid {};",
        BoardTheme::FRAME
    );
    let squares = board
        .squares()
        .iter()
        .cloned()
        .map(|square| {
            let coord = square.coord;
            let on_click = Callback::new(move |_| session.click(coord));
            view! { <BoardSquare square=square on_click=on_click /> }
        })
        .collect_view();
    view! { <div style=frame_style>{squares}</div> }
}

/// Most recent server log lines
#[component]
fn LogPanel(logs: Vec<String>) -> impl IntoView {
    view! {
        <ul style="list-style: none; margin: 0; padding: 12px; width: 480px; background: rgba(0,0,0,0.4); color: #ccc; font-family: monospace; font-size: 12px;">
            {logs.into_iter().map(|line| view! { <li>{format!("> {}", line)}</li> }).collect_view()}
        </ul>
    }
}
