use leptos::prelude::*;
use shadowchess::rendering::{BoardTheme, HpBar, PieceRender, SquareRender, SquareView};

const SQUARE_STYLE: &str = "width: 60px; height: 60px; position: relative; display: flex; align-items: center; justify-content: center; box-sizing: border-box; cursor: pointer; user-select: none;";

/// One board cell
///
/// Fogged cells draw as an opaque tile; the piece, HP and highlight data of the
/// underlying square never reach the DOM.
#[component]
pub fn BoardSquare(square: SquareView, on_click: Callback<()>) -> impl IntoView {
    match square.render() {
        SquareRender::Fogged => view! {
            <div
                style=format!("{} background: {};", SQUARE_STYLE, BoardTheme::FOG)
                on:click=move |_| on_click.run(())
            ></div>
        }
        .into_any(),
        SquareRender::Visible {
            shade,
            border,
            highlighted,
            piece,
        } => {
            let background = if highlighted {
                BoardTheme::SELECTED_FILL
            } else {
                shade.color()
            };
            let style = format!(
                "{} background: {}; border: {};",
                SQUARE_STYLE,
                background,
                border.css()
            );
            view! {
                <div style=style on:click=move |_| on_click.run(())>
                    {piece.map(piece_view)}
                </div>
            }
            .into_any()
        }
    }
}

fn piece_view(piece: PieceRender) -> impl IntoView {
    let PieceRender {
        icon,
        label,
        hp,
        tooltip,
    } = piece;
    let art = match icon {
        Some(src) => view! {
            <img src=src alt=label style="width: 80%; height: 80%; pointer-events: none;" />
        }
        .into_any(),
        None => view! { <span style="font-size: 11px; color: #222;">{label}</span> }
            .into_any(),
    };
    view! {
        <div title=tooltip style="width: 100%; height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center;">
            {art}
            {hp_bar(hp)}
        </div>
    }
}

fn hp_bar(hp: HpBar) -> impl IntoView {
    let track = format!(
        "position: absolute; bottom: 2px; left: 10%; width: 80%; height: 4px; background: {};",
        BoardTheme::HP_TRACK
    );
    let fill = format!(
        "width: {:.0}%; height: 100%; background: {};",
        hp.percent(),
        hp.tone().color()
    );
    view! {
        <div style=track>
            <div style=fill></div>
        </div>
    }
}
