//! Browse page views.

use crate::app::{ApiCtx, BrowseParams};
use crate::components::footer::Footer;
use crate::components::movie_card::MovieCard;
use crate::components::navbar::Navbar;
use crate::features::browse::state::{BrowseSelection, BrowseTab, CatalogQuery};
use crate::services::api::list_or_empty;
use moodreel_api_models::{GENRES, MOODS, Movie};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(BrowsePage)]
pub(crate) fn browse_page() -> Html {
    let api = use_context::<ApiCtx>();
    let location = use_location();
    let selection = use_state(|| {
        BrowseSelection::seeded(
            location
                .and_then(|location| location.query::<BrowseParams>().ok())
                .and_then(|params| params.genre),
        )
    });
    let movies = use_state(Vec::<Movie>::new);
    let loading = use_state(|| true);

    {
        let api = api.clone();
        let movies = movies.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |query: &CatalogQuery| {
                if let Some(api) = api {
                    let query = query.clone();
                    loading.set(true);
                    spawn_local(async move {
                        let fetched = match query {
                            CatalogQuery::All => api.client.fetch_movies().await,
                            CatalogQuery::Genre(genre) => api.client.movies_by_genre(&genre).await,
                            CatalogQuery::Mood(mood) => api.client.movies_by_mood(&mood).await,
                        };
                        movies.set(list_or_empty(fetched));
                        loading.set(false);
                    });
                }
                || ()
            },
            selection.query(),
        );
    }

    let set_tab = {
        let selection = selection.clone();
        Callback::from(move |tab: BrowseTab| {
            let mut next = (*selection).clone();
            next.tab = tab;
            selection.set(next);
        })
    };

    let pick_genre = {
        let selection = selection.clone();
        Callback::from(move |genre: &'static str| {
            let mut next = (*selection).clone();
            next.toggle_genre(genre);
            selection.set(next);
        })
    };

    let pick_mood = {
        let selection = selection.clone();
        Callback::from(move |mood: &'static str| {
            let mut next = (*selection).clone();
            next.toggle_mood(mood);
            selection.set(next);
        })
    };

    let tabs: Html = [BrowseTab::Genres, BrowseTab::Moods]
        .into_iter()
        .map(|tab| {
            let active = selection.tab == tab;
            html! {
                <button
                    role="tab"
                    aria-selected={if active { "true" } else { "false" }}
                    class={classes!("tab", active.then_some("tab--active"))}
                    onclick={set_tab.reform(move |_| tab)}
                >
                    {tab.label()}
                </button>
            }
        })
        .collect();

    let chips: Html = match selection.tab {
        BrowseTab::Genres => GENRES
            .into_iter()
            .map(|genre| {
                let active = selection.genre.as_deref() == Some(genre);
                html! {
                    <button
                        class={classes!("chip", active.then_some("chip--active"))}
                        onclick={pick_genre.reform(move |_| genre)}
                    >
                        {genre}
                    </button>
                }
            })
            .collect(),
        BrowseTab::Moods => MOODS
            .into_iter()
            .map(|mood| {
                let active = selection.mood.as_deref() == Some(mood);
                html! {
                    <button
                        class={classes!("chip", active.then_some("chip--active"))}
                        onclick={pick_mood.reform(move |_| mood)}
                    >
                        {mood}
                    </button>
                }
            })
            .collect(),
    };

    let results = if *loading {
        html! { <div class="movie-grid movie-grid--loading" aria-busy="true"></div> }
    } else if movies.is_empty() {
        html! { <p class="muted">{"No movies found for your selection."}</p> }
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
        <>
            <Navbar />
            <main class="page">
                <h1>{"Browse Movies"}</h1>
                <div class="tabs" role="tablist">{tabs}</div>
                <div class="chip-row">{chips}</div>
                <h2>{selection.heading()}</h2>
                {results}
            </main>
            <Footer />
        </>
    }
}
