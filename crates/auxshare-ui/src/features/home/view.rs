//! Convert page view.
//!
//! # Design
//! - Targets are fetched once per mount; the built-in catalogue covers an empty
//!   or failed response. A pick made before they arrive is kept.
//! - All store writes go through the session manager.

use crate::app::api::SessionCtx;
use crate::core::logic::format_percent;
use crate::core::platforms::display_name;
use crate::core::store::PlaylistState;
use crate::features::home::logic::{
    TargetChoice, source_hint, target_options, validate_playlist_url,
};
use crate::routes::Route;
use auxshare_api_models::{MatchStats, PlatformInfo};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let ctx = use_context::<SessionCtx>();
    let state = use_selector(|state: &PlaylistState| state.clone());
    let url = use_state(String::new);
    let choice = use_mut_ref(TargetChoice::default);
    let target = use_state(|| choice.borrow().current().to_string());
    let targets = use_state(|| target_options(Vec::new()));
    let validation = use_state(|| None::<&'static str>);

    {
        let ctx = ctx.clone();
        let targets = targets.clone();
        let target = target.clone();
        let choice = choice.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = ctx {
                    let api = ctx.session.api();
                    spawn_local(async move {
                        let options = target_options(api.get_supported_targets().await.unwrap_or_default());
                        let picked = choice.borrow_mut().apply_options(&options).to_string();
                        target.set(picked);
                        targets.set(options);
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_url = {
        let url = url.clone();
        let validation = validation.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            validation.set(None);
            url.set(input.value());
        })
    };
    let on_target = {
        let target = target.clone();
        let choice = choice.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let picked = select.value();
            choice.borrow_mut().choose(picked.clone());
            target.set(picked);
        })
    };
    let on_submit = {
        let ctx = ctx.clone();
        let url = url.clone();
        let target = target.clone();
        let validation = validation.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(ctx) = ctx.as_ref() else {
                return;
            };
            match validate_playlist_url(&url) {
                Ok(valid) => {
                    let pending = ctx.session.convert_playlist(&valid, &target);
                    spawn_local(async move {
                        let _ = pending.await;
                    });
                }
                Err(message) => validation.set(Some(message)),
            }
        })
    };
    let on_reset = {
        let ctx = ctx.clone();
        let url = url.clone();
        Callback::from(move |_| {
            if let Some(ctx) = ctx.as_ref() {
                ctx.session.reset();
            }
            url.set(String::new());
        })
    };

    let hint = source_hint(&url);
    let error = (*validation).map(str::to_string).or_else(|| state.error.clone());

    html! {
        <section class="home-page">
            <div class="panel">
                <div class="panel-head">
                    <p class="eyebrow">{"Convert"}</p>
                    <h2>{"Move a playlist between services"}</h2>
                    <p class="muted">{"Paste a Spotify or YouTube Music playlist link and pick where it should go."}</p>
                </div>
                <form class="convert-form" onsubmit={on_submit}>
                    <input
                        class="input input-bordered w-full"
                        type="url"
                        placeholder="https://open.spotify.com/playlist/…"
                        value={(*url).clone()}
                        oninput={on_url}
                        disabled={state.loading}
                    />
                    {hint.map(|hint| html! { <p class="source-hint muted">{hint}</p> }).unwrap_or_default()}
                    <select class="select select-bordered" onchange={on_target} disabled={state.loading}>
                        {for targets.iter().map(|platform| target_option(platform, &target))}
                    </select>
                    <button class="btn btn-primary" type="submit" disabled={state.loading}>
                        {if state.loading { "Converting…" } else { "Convert" }}
                    </button>
                </form>
                {error.map(|message| html! {
                    <div class="alert alert-error" role="alert">{message}</div>
                }).unwrap_or_default()}
            </div>
            {render_result(&state, on_reset)}
        </section>
    }
}

fn target_option(platform: &PlatformInfo, selected: &str) -> Html {
    html! {
        <option value={platform.name.clone()} selected={platform.name == selected}>
            {format!("{} {}", platform.icon, platform.display_name)}
        </option>
    }
}

fn render_result(state: &PlaylistState, on_reset: Callback<MouseEvent>) -> Html {
    let Some(code) = state.session_code.clone() else {
        return html! {};
    };
    let platform = |name: &Option<String>| name.as_deref().map(display_name).unwrap_or_default();
    html! {
        <div class="panel result-card">
            <div class="panel-subhead">
                <strong>{"Playlist converted"}</strong>
                <span class="pill subtle">
                    {format!("{} → {}", platform(&state.source_platform), platform(&state.target_platform))}
                </span>
            </div>
            <dl class="session-meta">
                <dt>{"Session code"}</dt>
                <dd><code>{code.clone()}</code></dd>
                {state.share_url.clone().map(|share_url| html! {
                    <>
                        <dt>{"Share link"}</dt>
                        <dd><a href={share_url.clone()}>{share_url}</a></dd>
                    </>
                }).unwrap_or_default()}
                <dt>{"Match rate"}</dt>
                <dd>{format_percent(state.match_rate())}</dd>
            </dl>
            {state.stats.map(render_stats).unwrap_or_default()}
            <div class="actions">
                <Link<Route> to={Route::join(code)} classes="btn btn-primary">{"Open session"}</Link<Route>>
                <button class="btn btn-ghost" onclick={on_reset}>{"Convert another"}</button>
            </div>
        </div>
    }
}

fn render_stats(stats: MatchStats) -> Html {
    html! {
        <ul class="stats-breakdown">
            <li>{format!("{} of {} tracks matched", stats.matched, stats.total)}</li>
            <li>{format!("{} not found", stats.failed)}</li>
            <li class="pill ok">{format!("{} high confidence", stats.high_confidence)}</li>
            <li class="pill warn">{format!("{} medium confidence", stats.medium_confidence)}</li>
            <li class="pill error">{format!("{} low confidence", stats.low_confidence)}</li>
            <li>{format!("Average confidence {}", format_percent(stats.avg_confidence * 100.0))}</li>
        </ul>
    }
}
