//! Home page views.

use crate::app::ApiCtx;
use crate::components::footer::Footer;
use crate::components::mood_selector::MoodSelector;
use crate::components::movie_card::MovieCard;
use crate::components::movie_list::MovieList;
use crate::components::navbar::Navbar;
use crate::core::store::AppStore;
use crate::features::home::logic::{GENRE_ROWS, featured_index, row_title};
use crate::services::api::list_or_empty;
use moodreel_api_models::Movie;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let api = use_context::<ApiCtx>();
    let session = use_selector(|store: &AppStore| store.session.clone());
    let catalog = use_state(Vec::<Movie>::new);
    let selected_mood = use_state(|| None::<String>);
    let mood_movies = use_state(Vec::<Movie>::new);
    let recommended = use_state(Vec::<Movie>::new);
    let action_movies = use_state(Vec::<Movie>::new);
    let drama_movies = use_state(Vec::<Movie>::new);
    let comedy_movies = use_state(Vec::<Movie>::new);

    // One hero per catalog load, not one per render.
    let featured = use_memo(
        |catalog: &Vec<Movie>| {
            featured_index(catalog.len(), js_sys::Math::random())
                .map(|index| catalog[index].clone())
        },
        (*catalog).clone(),
    );

    {
        let api = api.clone();
        let catalog = catalog.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    spawn_local(async move {
                        catalog.set(list_or_empty(api.client.fetch_movies().await));
                    });
                }
                || ()
            },
            (),
        );
    }

    {
        let api = api.clone();
        let rows = [
            action_movies.clone(),
            drama_movies.clone(),
            comedy_movies.clone(),
        ];
        use_effect_with_deps(
            move |_| {
                if let Some(api) = api {
                    for (genre, row) in GENRE_ROWS.into_iter().zip(rows) {
                        let api = api.clone();
                        spawn_local(async move {
                            row.set(list_or_empty(api.client.movies_by_genre(genre).await));
                        });
                    }
                }
                || ()
            },
            (),
        );
    }

    {
        let api = api.clone();
        let mood_movies = mood_movies.clone();
        use_effect_with_deps(
            move |mood: &Option<String>| {
                mood_movies.set(Vec::new());
                if let (Some(api), Some(mood)) = (api, mood.clone()) {
                    spawn_local(async move {
                        mood_movies.set(list_or_empty(api.client.movies_by_mood(&mood).await));
                    });
                }
                || ()
            },
            (*selected_mood).clone(),
        );
    }

    let user_id = session.user().map(|user| user.id.clone());
    {
        let api = api.clone();
        let recommended = recommended.clone();
        use_effect_with_deps(
            // The mood is part of the key so picking one re-rolls the picks.
            move |(user_id, _mood): &(Option<String>, Option<String>)| {
                match (api, user_id.clone()) {
                    (Some(api), Some(user_id)) => {
                        spawn_local(async move {
                            recommended.set(list_or_empty(
                                api.client.recommended_movies(&user_id).await,
                            ));
                        });
                    }
                    _ => recommended.set(Vec::new()),
                }
                || ()
            },
            (user_id, (*selected_mood).clone()),
        );
    }

    let on_select_mood = {
        let selected_mood = selected_mood.clone();
        Callback::from(move |mood: Option<String>| selected_mood.set(mood))
    };

    let mood_row = match ((*selected_mood).clone(), mood_movies.is_empty()) {
        (Some(mood), false) => html! {
            <MovieList title={row_title(&mood)} movies={(*mood_movies).clone()} />
        },
        _ => html! {},
    };

    let recommended_row = if session.is_authenticated() && !recommended.is_empty() {
        html! { <MovieList title="Recommended for You" movies={(*recommended).clone()} /> }
    } else {
        html! {}
    };

    html! {
        <>
            <Navbar />
            {if let Some(movie) = (*featured).clone() {
                html! { <MovieCard movie={movie} featured={true} /> }
            } else {
                html! {}
            }}
            <main class="page">
                <MoodSelector selected={(*selected_mood).clone()} on_select={on_select_mood} />
                {mood_row}
                {recommended_row}
                <MovieList title="Action Movies" movies={(*action_movies).clone()} />
                <MovieList title="Drama Movies" movies={(*drama_movies).clone()} />
                <MovieList title="Comedy Movies" movies={(*comedy_movies).clone()} />
            </main>
            <Footer />
        </>
    }
}
