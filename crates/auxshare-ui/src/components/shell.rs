//! Page chrome: header, backend status and join-by-code form.

use crate::app::api::SessionCtx;
use crate::core::logic::normalize_session_code;
use crate::routes::Route;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum BackendStatus {
    Checking,
    Online,
    Offline,
}

impl BackendStatus {
    const fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking…",
            Self::Online => "API online",
            Self::Offline => "API offline",
        }
    }

    const fn tone(self) -> &'static str {
        match self {
            Self::Checking => "badge-ghost",
            Self::Online => "badge-success",
            Self::Offline => "badge-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let ctx = use_context::<SessionCtx>();
    let status = use_state(|| BackendStatus::Checking);
    {
        let status = status.clone();
        let ctx = ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(ctx) = ctx {
                    let api = ctx.session.api();
                    spawn_local(async move {
                        let next = match api.health_check().await {
                            Ok(_) => BackendStatus::Online,
                            Err(_) => BackendStatus::Offline,
                        };
                        status.set(next);
                    });
                } else {
                    status.set(BackendStatus::Offline);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="app-shell">
            <header class="navbar bg-base-200">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">{"AuxShare"}</Link<Route>>
                <span class={classes!("badge", status.tone())}>{status.label()}</span>
                <JoinForm />
            </header>
            <main class="container mx-auto p-4">
                {for props.children.iter()}
            </main>
        </div>
    }
}

#[function_component(JoinForm)]
fn join_form() -> Html {
    let navigator = use_navigator();
    let input_ref = use_node_ref();
    let invalid = use_state(|| false);
    let on_submit = {
        let input_ref = input_ref.clone();
        let invalid = invalid.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            match normalize_session_code(&input.value()) {
                Some(code) => {
                    invalid.set(false);
                    input.set_value("");
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::join(code));
                    }
                }
                None => invalid.set(true),
            }
        })
    };

    html! {
        <form class="join-form" onsubmit={on_submit}>
            <input
                ref={input_ref}
                class={classes!("input", "input-sm", invalid.then_some("input-error"))}
                placeholder="Session code or link"
                aria-label="Session code"
            />
            <button class="btn btn-sm" type="submit">{"Join"}</button>
        </form>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <h2>{"Page not found"}</h2>
            <p class="muted">{"That link does not point anywhere."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">{"Convert a playlist"}</Link<Route>>
        </section>
    }
}
