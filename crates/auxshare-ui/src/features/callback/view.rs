//! OAuth redirect landing page.

use crate::features::callback::logic::CallbackOutcome;
use crate::routes::Route;
use gloo::utils::window;
use yew::prelude::*;
use yew_router::prelude::Link;

fn current_query() -> String {
    window().location().search().unwrap_or_default()
}

#[function_component(CallbackPage)]
pub(crate) fn callback_page() -> Html {
    let outcome = use_memo(|_| CallbackOutcome::from_query(&current_query()), ());
    {
        let outcome = outcome.clone();
        use_effect_with_deps(
            move |_| {
                match &*outcome {
                    CallbackOutcome::Authorized { state, .. } => {
                        tracing::info!(has_state = state.is_some(), "authorization callback received");
                    }
                    CallbackOutcome::Denied { error, .. } => {
                        tracing::warn!(error = %error, "authorization denied");
                    }
                    CallbackOutcome::Missing => {
                        tracing::debug!("callback opened without parameters");
                    }
                }
                || ()
            },
            (),
        );
    }

    let body = match &*outcome {
        CallbackOutcome::Authorized { .. } => html! {
            <div class="alert alert-success">{"Account connected. You can return to your playlist."}</div>
        },
        CallbackOutcome::Denied { error, description } => html! {
            <div class="alert alert-error" role="alert">
                <strong>{"Authorization failed"}</strong>
                <p>{description.clone().unwrap_or_else(|| error.clone())}</p>
            </div>
        },
        CallbackOutcome::Missing => html! {
            <p class="muted">{"Nothing to finish here."}</p>
        },
    };

    html! {
        <section class="callback-page">
            <div class="panel">
                <p class="eyebrow">{"Connect"}</p>
                {body}
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Back to converter"}</Link<Route>>
            </div>
        </section>
    }
}
