use leptos::prelude::*;
use shadowchess_web::app::ChessApp;

fn main() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    log::info!("[MAIN] Starting Shadow Chess web client");

    mount_to_body(ChessApp);
}
