//! Favorites page views.

use crate::app::{ApiCtx, Route};
use crate::components::footer::Footer;
use crate::components::movie_card::MovieCard;
use crate::components::navbar::Navbar;
use crate::core::session::SessionPhase;
use crate::core::store::AppStore;
use futures_util::future::join_all;
use moodreel_api_models::Movie;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(FavoritesPage)]
pub(crate) fn favorites_page() -> Html {
    let api = use_context::<ApiCtx>();
    let session = use_selector(|store: &AppStore| store.session.clone());
    let movies = use_state(Vec::<Movie>::new);
    let loading = use_state(|| true);

    let favorites = session.user().map(|user| user.favorites.clone());

    {
        let api = api.clone();
        let movies = movies.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |favorites: &Option<Vec<String>>| {
                match (api, favorites.clone()) {
                    (Some(api), Some(ids)) if !ids.is_empty() => {
                        loading.set(true);
                        spawn_local(async move {
                            let fetched =
                                join_all(ids.iter().map(|id| api.client.fetch_movie(id))).await;
                            movies.set(fetched.into_iter().filter_map(Result::ok).collect());
                            loading.set(false);
                        });
                    }
                    _ => {
                        movies.set(Vec::new());
                        loading.set(false);
                    }
                }
                || ()
            },
            favorites,
        );
    }

    let body = match session.phase() {
        // The boot restore has not settled yet.
        SessionPhase::Unknown => html! {},
        SessionPhase::Anonymous => html! {
            <section class="login-gate">
                <h1>{"Login Required"}</h1>
                <p class="muted">{"You need to be logged in to view your favorites."}</p>
                <Link<Route> to={Route::Login} classes="primary">{"Login to continue"}</Link<Route>>
            </section>
        },
        SessionPhase::Authenticated(_) => {
            let grid = if *loading {
                html! { <div class="movie-grid movie-grid--loading" aria-busy="true"></div> }
            } else if movies.is_empty() {
                html! {
                    <div class="empty-state">
                        <h2>{"Your list is empty"}</h2>
                        <p class="muted">
                            {"Start adding movies to your favorites to see them here."}
                        </p>
                        <Link<Route> to={Route::Browse} classes="primary">{"Browse Movies"}</Link<Route>>
                    </div>
                }
            } else {
                html! {
                    <div class="movie-grid">
                        {for movies.iter().map(|movie| html! {
                            <MovieCard movie={movie.clone()} />
                        })}
                    </div>
                }
            };
            html! {
                <section class="favorites">
                    <h1>{"My List"}</h1>
                    <p class="muted">{"Your favorite movies in one place"}</p>
                    {grid}
                </section>
            }
        }
    };

    html! {
        <>
            <Navbar />
            <main class="page">{body}</main>
            <Footer />
        </>
    }
}
