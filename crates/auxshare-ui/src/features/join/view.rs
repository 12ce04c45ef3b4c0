//! Shared session page.

use crate::app::api::SessionCtx;
use crate::core::logic::format_percent;
use crate::core::platforms::display_name;
use crate::core::store::PlaylistState;
use crate::features::join::logic::{TrackRow, track_rows, ttl_label};
use crate::routes::Route;
use auxshare_api_models::DEFAULT_TARGET_PLATFORM;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct JoinPageProps {
    pub code: String,
}

#[function_component(JoinPage)]
pub(crate) fn join_page(props: &JoinPageProps) -> Html {
    let ctx = use_context::<SessionCtx>();
    let state = use_selector(|state: &PlaylistState| state.clone());
    let expiry = use_state(|| None::<String>);

    {
        let expiry = expiry.clone();
        use_effect_with_deps(
            move |code: &String| {
                expiry.set(None);
                if let Some(ctx) = ctx {
                    let pending = ctx.session.load_session(code);
                    spawn_local(async move {
                        let _ = pending.await;
                    });
                    let api = ctx.session.api();
                    let code = code.clone();
                    spawn_local(async move {
                        if let Ok(ttl) = api.get_session_ttl(&code).await {
                            expiry.set(Some(ttl_label(&ttl)));
                        }
                    });
                }
                || ()
            },
            props.code.clone(),
        );
    }

    let platform = state
        .target_platform
        .as_deref()
        .unwrap_or(DEFAULT_TARGET_PLATFORM);

    html! {
        <section class="join-page">
            <div class="panel">
                <div class="panel-head">
                    <p class="eyebrow">{"Session"}</p>
                    <h2><code>{props.code.clone()}</code></h2>
                    {(*expiry).clone().map(|label| html! { <p class="muted">{label}</p> }).unwrap_or_default()}
                </div>
                {render_body(&state, platform)}
            </div>
        </section>
    }
}

fn render_body(state: &PlaylistState, platform: &str) -> Html {
    if state.loading {
        return html! { <p class="muted">{"Loading session…"}</p> };
    }
    if let Some(error) = state.error.clone() {
        return html! {
            <div class="alert alert-error" role="alert">
                {error}
                <Link<Route> to={Route::Home} classes="btn btn-sm">{"Convert a playlist"}</Link<Route>>
            </div>
        };
    }
    if !state.has_results() {
        return html! { <p class="muted">{"This session has no tracks."}</p> };
    }
    let rows = track_rows(&state.tracks, platform);
    html! {
        <>
            <div class="panel-subhead">
                <strong>{format!("{} tracks on {}", rows.len(), display_name(platform))}</strong>
                <span class="pill subtle">{format!("{} matched", format_percent(state.match_rate()))}</span>
            </div>
            <table class="table track-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Title"}</th>
                        <th>{"Artist"}</th>
                        <th>{"Album"}</th>
                        <th>{"Match"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(render_row)}
                </tbody>
            </table>
        </>
    }
}

fn render_row(row: &TrackRow) -> Html {
    let tone = row.tier.map_or("subtle", |tier| tier.tone());
    html! {
        <tr class={classes!((!row.matched).then_some("unmatched"))}>
            <td>{row.position}</td>
            <td>
                {match row.link.clone() {
                    Some(link) => html! {
                        <a href={link} target="_blank" rel="noopener noreferrer">{row.title.clone()}</a>
                    },
                    None => html! { <span>{row.title.clone()}</span> },
                }}
            </td>
            <td>{row.artists.clone()}</td>
            <td>{row.album.clone().unwrap_or_default()}</td>
            <td><span class={classes!("pill", tone)}>{row.confidence.clone()}</span></td>
        </tr>
    }
}
