pub(crate) use api::ApiCtx;
use crate::components::toast::ToastHost;
use crate::core::store::app_dispatch;
use crate::features::ai_search::view::AiSearchPage;
use crate::features::auth::view::{LoginPage, SignupPage};
use crate::features::browse::view::BrowsePage;
use crate::features::favorites::view::FavoritesPage;
use crate::features::home::view::HomePage;
use crate::features::movie::view::MoviePage;
use crate::features::profile::view::ProfilePage;
use crate::features::search::view::SearchPage;
use env::api_base_url;
pub(crate) use routes::{BrowseParams, Route, SearchParams};
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod actions;
mod api;
mod env;
mod routes;

#[function_component(MoodreelApp)]
pub(crate) fn moodreel_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    // Read the durable session record exactly once per boot.
    use_effect_with_deps(
        |_| {
            app_dispatch().reduce_mut(|store| store.session.restore());
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
                <ToastHost />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Browse => html! { <BrowsePage /> },
        Route::Search => html! { <SearchPage /> },
        Route::AiSearch => html! { <AiSearchPage /> },
        Route::Movie { id } => html! { <MoviePage {id} /> },
        Route::Favorites => html! { <FavoritesPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! {
            <main class="not-found">
                <h1>{"404"}</h1>
                <p class="muted">{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home} classes="underline">{"Return to Home"}</Link<Route>>
            </main>
        },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<MoodreelApp>::with_root(root).render();
    } else {
        yew::Renderer::<MoodreelApp>::new().render();
    }
}
