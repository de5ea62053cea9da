//! Poster card for catalog grids and the home hero.
//!
//! # Design
//! - Navigation hands the full movie through history state so the detail
//!   page renders without a refetch.
//! - A missing poster falls back to a stock backdrop, rolled once per card.

use crate::app::actions;
use crate::app::{ApiCtx, Route};
use crate::core::store::AppStore;
use crate::models::fallback_poster;
use moodreel_api_models::Movie;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieCardProps {
    pub movie: Movie,
    #[prop_or_default]
    pub featured: bool,
}

#[function_component(MovieCard)]
pub(crate) fn movie_card(props: &MovieCardProps) -> Html {
    let navigator = use_navigator();
    let session = use_selector(|store: &AppStore| store.session.clone());
    let api = use_context::<ApiCtx>();
    let fallback = use_memo(
        |_| fallback_poster(js_sys::Math::random()),
        props.movie.id.clone(),
    );

    let poster = props
        .movie
        .poster_path
        .clone()
        .unwrap_or_else(|| (*fallback).to_string());

    let open = {
        let navigator = navigator.clone();
        let movie = props.movie.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                let route = Route::Movie {
                    id: movie.id.clone(),
                };
                navigator.push_with_state(&route, movie.clone());
            }
        })
    };

    let favorited = session.is_favorite(&props.movie.id);
    let toggle_favorite = {
        let api = api.clone();
        let id = props.movie.id.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            let Some(api) = api.clone() else {
                return;
            };
            let id = id.clone();
            spawn_local(async move {
                actions::toggle_favorite(&api.client, id).await;
            });
        })
    };

    if props.featured {
        let favorite_button = if session.is_authenticated() {
            let label = if favorited {
                "Remove from List"
            } else {
                "Add to My List"
            };
            html! { <button class="outline" onclick={toggle_favorite}>{label}</button> }
        } else {
            html! {}
        };

        return html! {
            <div class="movie-hero">
                <img class="movie-hero__backdrop" src={poster} alt={props.movie.title.clone()} />
                <div class="movie-hero__overlay">
                    <div class="movie-hero__meta">
                        <span class="movie-hero__rating">{format!("{:.1}", props.movie.rating)}</span>
                        <span>{props.movie.release_year}</span>
                        <span>{props.movie.duration.clone()}</span>
                    </div>
                    <h1>{props.movie.title.clone()}</h1>
                    <p class="movie-hero__description">{props.movie.description.clone()}</p>
                    <div class="movie-hero__genres">
                        {for props.movie.genres.iter().map(|genre| html! {
                            <span class="chip">{genre.clone()}</span>
                        })}
                    </div>
                    <div class="movie-hero__actions">
                        <button class="primary" onclick={open}>
                            <span class="iconify lucide--play size-4"></span>
                            <span>{"Watch Now"}</span>
                        </button>
                        {favorite_button}
                    </div>
                </div>
            </div>
        };
    }

    html! {
        <div class="movie-card" onclick={open}>
            <div class="movie-card__poster">
                <img src={poster} alt={props.movie.title.clone()} />
                <div class="movie-card__overlay">
                    <div>
                        <h3>{props.movie.title.clone()}</h3>
                        <div class="movie-card__meta">
                            <span class="movie-card__rating">{format!("{:.1}", props.movie.rating)}</span>
                            <span>{props.movie.release_year}</span>
                        </div>
                        <div class="movie-card__genres">
                            {for props.movie.genres.iter().take(2).map(|genre| html! {
                                <span class="chip">{genre.clone()}</span>
                            })}
                        </div>
                    </div>
                    <button class="primary movie-card__play">
                        <span class="iconify lucide--play size-3"></span>
                        <span>{"Play"}</span>
                    </button>
                </div>
            </div>
            <div class="movie-card__caption">
                <h3>{props.movie.title.clone()}</h3>
                <div class="movie-card__caption-meta">
                    <span>{props.movie.release_year}</span>
                    <span>{"•"}</span>
                    <span>{props.movie.duration.clone()}</span>
                </div>
            </div>
        </div>
    }
}
