use anyhow::Context;
use clap::Parser;
use shadowchess::core::settings_persistence::{load_settings, save_settings, settings_path};
use shadowchess::core::{ClientSettings, API_URL_ENV};
use shadowchess::game::{ActiveSession, Coord, SessionController};
use shadowchess::networking::HttpGameClient;
use shadowchess::rendering::text::render_session;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Terminal client for Shadow Chess
#[derive(Parser, Debug)]
#[command(name = "shadowchess", version, about)]
struct Args {
    /// API root, e.g. http://localhost:5000/api
    #[arg(long)]
    server: Option<String>,

    /// Milliseconds between state polls
    #[arg(long)]
    poll_ms: Option<u64>,

    /// Settings file (defaults to the user config dir)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Do not outline the last move
    #[arg(long)]
    no_last_move: bool,

    /// Write the resolved settings back to the settings file
    #[arg(long)]
    save: bool,
}

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Click(Coord),
    Reset,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let first = words.next()?;
        match first {
            "reset" | "r" => Some(Command::Reset),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => {
                let x = first.parse().ok()?;
                let y = words.next()?.parse().ok()?;
                if words.next().is_some() {
                    return None;
                }
                Coord::new(x, y).map(Command::Click)
            }
        }
    }
}

const USAGE: &str = "Commands: `x y` to click a square, `reset`, `quit`";

fn resolve_settings(args: &Args, path: &Path) -> ClientSettings {
    let mut settings =
        load_settings(path).with_api_override(std::env::var(API_URL_ENV).ok());
    settings = settings.with_api_override(args.server.clone());
    if let Some(ms) = args.poll_ms {
        settings.poll_interval_ms = ms;
    }
    if args.no_last_move {
        settings.highlight_last_move = false;
    }
    settings
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let path = args.settings.clone().unwrap_or_else(settings_path);
    let settings = resolve_settings(&args, &path);
    if args.save {
        save_settings(&path, &settings).context("saving settings")?;
    }
    info!("[MAIN] Using API at {}", settings.api_base_url);

    LocalSet::new().run_until(run(settings)).await
}

async fn run(settings: ClientSettings) -> anyhow::Result<()> {
    let controller = Rc::new(SessionController::new(HttpGameClient::new(
        settings.api_base_url.clone(),
    )));

    let highlight = settings.highlight_last_move;
    let last_frame = RefCell::new(String::new());
    controller.subscribe(move |state| {
        let frame = render_session(state, highlight);
        let mut last = last_frame.borrow_mut();
        if *last != frame {
            println!("{}", frame);
            *last = frame;
        }
    });

    println!("{}", USAGE);
    let session = ActiveSession::start(controller.clone(), settings.poll_interval());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Some(Command::Click(coord)) => {
                let controller = controller.clone();
                tokio::task::spawn_local(async move { controller.click(coord).await });
            }
            Some(Command::Reset) => {
                let controller = controller.clone();
                tokio::task::spawn_local(async move { controller.reset().await });
            }
            Some(Command::Quit) => break,
            None => println!("{}", USAGE),
        }
    }

    session.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(
            Command::parse("0 6"),
            Some(Command::Click(Coord::new(0, 6).unwrap()))
        );
        assert_eq!(
            Command::parse("  7   7 "),
            Some(Command::Click(Coord::new(7, 7).unwrap()))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Command::parse("8 0"), None);
        assert_eq!(Command::parse("1"), None);
        assert_eq!(Command::parse("1 2 3"), None);
        assert_eq!(Command::parse("a b"), None);
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("reset"), Some(Command::Reset));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
    }
}
