//! Application root: context wiring, routing and boot.

use crate::components::shell::{AppShell, NotFoundPage};
use crate::core::config::ClientConfig;
use crate::core::telemetry::{LoggingConfig, console_sink, init_logging};
use crate::features::callback::view::CallbackPage;
use crate::features::home::view::HomePage;
use crate::features::join::view::JoinPage;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;

use api::SessionCtx;

#[function_component(AuxShareApp)]
pub fn auxshare_app() -> Html {
    let ctx = use_memo(|_| SessionCtx::new(ClientConfig::from_build_env()), ());

    html! {
        <ContextProvider<SessionCtx> context={(*ctx).clone()}>
            <BrowserRouter>
                <AppShell>
                    <Switch<Route> render={switch} />
                </AppShell>
            </BrowserRouter>
        </ContextProvider<SessionCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Join { code } => html! { <JoinPage {code} /> },
        Route::Callback => html! { <CallbackPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Install logging and mount the app.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_logging(&LoggingConfig::default(), console_sink) {
        gloo::console::error!(format!("logging unavailable: {err}"));
    }
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AuxShareApp>::with_root(root).render();
    } else {
        yew::Renderer::<AuxShareApp>::new().render();
    }
}
