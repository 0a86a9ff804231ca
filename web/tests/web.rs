//! WASM-specific tests
//!
//! These tests run in a browser environment using wasm-pack test.
//! Run with: cd web && wasm-pack test --headless --chrome

use leptos::prelude::*;
use shadowchess::game::{Coord, Piece, PieceKind, Team};
use shadowchess::rendering::SquareView;
use shadowchess_web::square::BoardSquare;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> web_sys::HtmlElement {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("Document should exist");
    let host = document
        .create_element("div")
        .expect("create div")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("div is an HtmlElement");
    document
        .body()
        .expect("Body should exist")
        .append_child(&host)
        .expect("append host");
    host
}

fn square(fogged: bool) -> SquareView {
    let coord = Coord::new(4, 0).unwrap();
    SquareView {
        coord,
        piece: Some(Piece {
            coord,
            kind: PieceKind::King,
            team: Team::Opponent,
            hp: 30,
            hp_max: 30,
            is_boss: true,
            damage: Some(6),
            name: Some("Rey Sombrio".to_string()),
        }),
        fogged,
        selected: false,
        last_move: false,
    }
}

/// Test console logging works
#[wasm_bindgen_test]
fn test_console_logging() {
    console_log::init_with_level(log::Level::Debug).ok();
    log::info!("WASM test logging works!");
}

/// Test web_sys window access
#[wasm_bindgen_test]
fn test_window_exists() {
    let window = web_sys::window();
    assert!(window.is_some(), "Window should exist in browser context");
}

/// Test web-time crate works (wasm-safe replacement for std::time::Instant)
#[wasm_bindgen_test]
fn test_web_time() {
    use web_time::Instant;

    let start = Instant::now();
    assert!(start.elapsed() >= std::time::Duration::ZERO);
}

#[wasm_bindgen_test]
fn test_web_settings_poll_interval() {
    let settings = shadowchess_web::session::web_settings();
    assert_eq!(settings.poll_interval().as_millis(), 2000);
    assert!(!settings.api_base_url.is_empty());
}

/// A fogged square must not leak its piece into the DOM
#[wasm_bindgen_test]
fn test_fogged_square_hides_piece() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || {
        view! { <BoardSquare square=square(true) on_click=Callback::new(|_| {}) /> }
    });
    let html = host.inner_html();
    assert!(!html.contains("<img"), "fogged square rendered: {}", html);
    assert!(!html.contains("Rey Sombrio"));
}

#[wasm_bindgen_test]
fn test_visible_square_shows_boss() {
    let host = host();
    let _mounted = leptos::mount::mount_to(host.clone(), || {
        view! { <BoardSquare square=square(false) on_click=Callback::new(|_| {}) /> }
    });
    let html = host.inner_html();
    assert!(html.contains("/images/boss.png"), "visible square rendered: {}", html);
    assert!(html.contains("Rey Sombrio 30/30 HP, 6 DMG"));
}
