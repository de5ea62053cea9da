//! Movie detail views.

use crate::app::actions;
use crate::app::{ApiCtx, BrowseParams, Route};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::video_player::VideoPlayer;
use crate::core::store::AppStore;
use crate::models::{VIDEO_CLIP_URL, fallback_poster, mood_emoji};
use moodreel_api_models::Movie;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct MoviePageProps {
    pub id: String,
}

#[function_component(MoviePage)]
pub(crate) fn movie_page(props: &MoviePageProps) -> Html {
    let location = use_location();
    let passed: Option<Rc<Movie>> = location.and_then(|location| location.state::<Movie>());
    let session = use_selector(|store: &AppStore| store.session.clone());
    let api = use_context::<ApiCtx>();
    let movie = use_state(|| passed.as_deref().cloned());
    let loading = use_state(|| passed.is_none());
    let failed = use_state(|| false);
    let playing = use_state(|| false);
    let fallback = use_memo(
        |_| fallback_poster(js_sys::Math::random()),
        props.id.clone(),
    );

    {
        let api = api.clone();
        let movie = movie.clone();
        let loading = loading.clone();
        let failed = failed.clone();
        let playing = playing.clone();
        use_effect_with_deps(
            move |(id, passed): &(String, Option<Rc<Movie>>)| {
                playing.set(false);
                if let Some(passed) = passed {
                    movie.set(Some((**passed).clone()));
                    loading.set(false);
                    failed.set(false);
                } else if let Some(api) = api {
                    let id = id.clone();
                    loading.set(true);
                    failed.set(false);
                    spawn_local(async move {
                        match api.client.fetch_movie(&id).await {
                            Ok(fetched) => movie.set(Some(fetched)),
                            Err(_) => failed.set(true),
                        }
                        loading.set(false);
                    });
                }
                || ()
            },
            (props.id.clone(), passed),
        );
    }

    if *loading {
        return html! {
            <main class="page movie-detail movie-detail--loading" aria-busy="true">
                <div class="skeleton skeleton--hero"></div>
                <div class="skeleton skeleton--line"></div>
                <div class="skeleton skeleton--line"></div>
            </main>
        };
    }

    let Some(movie) = (*movie).clone().filter(|_| !*failed) else {
        return html! {
            <main class="page movie-detail">
                <h1>{"Movie not found"}</h1>
                <p class="muted">
                    {"The movie you're looking for doesn't exist or has been removed."}
                </p>
                <Link<Route> to={Route::Browse} classes="primary">{"Back to Browse"}</Link<Route>>
            </main>
        };
    };

    let play = {
        let playing = playing.clone();
        Callback::from(move |_| playing.set(true))
    };

    let favorited = session.is_favorite(&movie.id);
    let toggle_favorite = {
        let api = api.clone();
        let id = movie.id.clone();
        Callback::from(move |_| {
            let Some(api) = api.clone() else {
                return;
            };
            let id = id.clone();
            spawn_local(async move {
                actions::toggle_favorite(&api.client, id).await;
            });
        })
    };

    let poster = movie
        .poster_path
        .clone()
        .unwrap_or_else(|| (*fallback).to_string());

    let hero = if *playing {
        html! {
            <VideoPlayer
                video_url={VIDEO_CLIP_URL}
                title={movie.title.clone()}
                autoplay={true}
            />
        }
    } else {
        html! {
            <div class="movie-detail__hero">
                <img class="movie-detail__backdrop" src={poster} alt={movie.title.clone()} />
                <div class="movie-detail__scrim"></div>
                <button class="primary movie-detail__play" aria-label="Play" onclick={play.clone()}>
                    <span class="iconify lucide--play size-8"></span>
                </button>
            </div>
        }
    };

    let favorite_button = if session.is_authenticated() {
        let label = if favorited {
            "Remove from Favorites"
        } else {
            "Add to Favorites"
        };
        html! { <button class="outline" onclick={toggle_favorite}>{label}</button> }
    } else {
        html! {}
    };

    let why = format!(
        "This {} movie perfectly captures the {} mood you're looking for, \
         with stunning visuals and an engaging storyline.",
        movie.genres.join(", "),
        movie.moods.join(" and "),
    );

    html! {
        <>
            <Navbar />
            <main class="page movie-detail">
                {hero}
                <div class="movie-detail__body">
                    <div class="movie-detail__main">
                        <Link<Route> to={Route::Browse} classes="underline">
                            {"Back to Browse"}
                        </Link<Route>>
                        <h1>{&movie.title}</h1>
                        <div class="movie-detail__meta">
                            <span>{movie.release_year}</span>
                            <span>{movie.duration.clone()}</span>
                            <span class="movie-detail__rating">
                                {format!("{:.1} / 5", movie.rating)}
                            </span>
                        </div>
                        <p class="movie-detail__description">{&movie.description}</p>
                        <h2>{"Genres"}</h2>
                        <div class="chip-row">
                            {for movie.genres.iter().map(|genre| {
                                let params = BrowseParams {
                                    genre: Some(genre.clone()),
                                };
                                html! {
                                    <Link<Route, BrowseParams>
                                        to={Route::Browse}
                                        query={Some(params)}
                                        classes="chip"
                                    >
                                        {genre.clone()}
                                    </Link<Route, BrowseParams>>
                                }
                            })}
                        </div>
                        <h2>{"Moods"}</h2>
                        <div class="chip-row">
                            {for movie.moods.iter().map(|mood| html! {
                                <span class="chip chip--mood">
                                    <span>{mood_emoji(mood)}</span>
                                    <span>{mood.clone()}</span>
                                </span>
                            })}
                        </div>
                    </div>
                    <aside class="movie-detail__sidebar">
                        <button class="primary" onclick={play}>{"Watch Movie Clip"}</button>
                        {favorite_button}
                        <div class="panel">
                            <h3>{"Why we recommend it"}</h3>
                            <p class="muted">{why}</p>
                        </div>
                    </aside>
                </div>
            </main>
            <Footer />
        </>
    }
}
