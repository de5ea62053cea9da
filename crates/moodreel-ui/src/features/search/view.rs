//! Search page views.
//!
//! # Design
//! - Keystrokes land in `query`; a timer copies the settled value into
//!   `debounced` after 500ms, and only `debounced` drives the fetch.
//! - The URL's `q` parameter and the input seed each other, so a navbar
//!   search and a typed search share one page state.

use crate::app::{ApiCtx, Route, SearchParams};
use crate::components::footer::Footer;
use crate::components::movie_card::MovieCard;
use crate::components::navbar::Navbar;
use crate::features::search::logic::result_count_label;
use crate::services::api::list_or_empty;
use gloo_timers::callback::Timeout;
use moodreel_api_models::Movie;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const DEBOUNCE_MS: u32 = 500;

#[function_component(SearchPage)]
pub(crate) fn search_page() -> Html {
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let location = use_location();
    let route_query = location
        .and_then(|location| location.query::<SearchParams>().ok())
        .map(|params| params.q)
        .unwrap_or_default();
    let query = use_state(|| route_query.clone());
    let debounced = use_state(|| route_query.clone());
    let results = use_state(Vec::<Movie>::new);
    let loading = use_state(|| false);

    {
        let debounced = debounced.clone();
        use_effect_with_deps(
            move |query: &String| {
                let query = query.clone();
                let timer = Timeout::new(DEBOUNCE_MS, move || debounced.set(query));
                move || drop(timer)
            },
            (*query).clone(),
        );
    }

    // A navbar search while this page is open only changes the URL, so the
    // parameter re-seeds both states without waiting out the debounce.
    {
        let query = query.clone();
        let debounced = debounced.clone();
        use_effect_with_deps(
            move |route_query: &String| {
                if !route_query.is_empty() {
                    query.set(route_query.clone());
                    debounced.set(route_query.clone());
                }
                || ()
            },
            route_query,
        );
    }

    {
        let api = api.clone();
        let results = results.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |debounced: &String| {
                if debounced.is_empty() {
                    results.set(Vec::new());
                } else if let Some(api) = api {
                    let text = debounced.clone();
                    loading.set(true);
                    spawn_local(async move {
                        let fetched = api.client.ai_recommendations(&text).await;
                        results.set(list_or_empty(fetched));
                        loading.set(false);
                    });
                }
                || ()
            },
            (*debounced).clone(),
        );
    }

    let submit = {
        let query = query.clone();
        let debounced = debounced.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            let value = (*query).clone();
            if *debounced != value {
                debounced.set(value.clone());
            }
            let Some(navigator) = navigator.clone() else {
                return;
            };
            if value.is_empty() {
                navigator.push(&Route::Search);
            } else {
                navigator
                    .push_with_query(&Route::Search, &SearchParams { q: value })
                    .ok();
            }
        })
    };

    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let summary = if debounced.is_empty() {
        html! { <p class="muted">{"Start typing to search the catalog."}</p> }
    } else if *loading {
        html! {}
    } else {
        let heading = if results.is_empty() {
            format!("No results for \"{}\"", *debounced)
        } else {
            format!("Search results for \"{}\"", *debounced)
        };
        html! {
            <div class="search-summary">
                <h2>{heading}</h2>
                <p class="muted">{result_count_label(results.len())}</p>
            </div>
        }
    };

    let body = if *loading {
        html! { <div class="movie-grid movie-grid--loading" aria-busy="true"></div> }
    } else if !debounced.is_empty() && results.is_empty() {
        html! {
            <div class="empty-state">
                <p>{"No movies match your search criteria."}</p>
                <p class="muted">{"Try a different search term or browse our categories."}</p>
            </div>
        }
    } else {
        html! {
            <div class="movie-grid">
                {for results.iter().map(|movie| html! {
                    <MovieCard movie={movie.clone()} />
                })}
            </div>
        }
    };

    html! {
        <>
            <Navbar />
            <main class="page">
                <h1>{"Search Movies"}</h1>
                <div class="search-form">
                    <input
                        type="search"
                        placeholder="Search by title..."
                        value={(*query).clone()}
                        onkeydown={onkeydown}
                        oninput={{
                            let query = query.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    query.set(input.value());
                                }
                            })
                        }}
                    />
                    <button
                        class="primary"
                        disabled={*loading}
                        onclick={submit.reform(|_| ())}
                    >
                        {if *loading { "Searching..." } else { "Search" }}
                    </button>
                </div>
                {summary}
                {body}
            </main>
            <Footer />
        </>
    }
}
