//! AI search page views.

use crate::app::ApiCtx;
use crate::components::footer::Footer;
use crate::components::movie_card::MovieCard;
use crate::components::navbar::Navbar;
use crate::services::api::ApiError;
use moodreel_api_models::Movie;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::platform::spawn_local;
use yew::prelude::*;

#[function_component(AiSearchPage)]
pub(crate) fn ai_search_page() -> Html {
    let api = use_context::<ApiCtx>();
    let prompt = use_state(String::new);
    let results = use_state(Vec::<Movie>::new);
    let error = use_state(|| None::<&'static str>);
    let loading = use_state(|| false);

    let submit = {
        let api = api.clone();
        let prompt = prompt.clone();
        let results = results.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |()| {
            if *loading || prompt.trim().is_empty() {
                return;
            }
            let Some(api) = api.clone() else {
                return;
            };
            let text = (*prompt).clone();
            let results = results.clone();
            let error = error.clone();
            let loading = loading.clone();
            loading.set(true);
            error.set(None);
            results.set(Vec::new());
            spawn_local(async move {
                match api.client.ai_search(&text).await {
                    Ok(movies) if movies.is_empty() => error.set(Some("No results found.")),
                    Ok(movies) => results.set(movies),
                    Err(ApiError::Rejected(_)) => error.set(Some("No results found.")),
                    Err(_) => error.set(Some("An error occurred. Please try again.")),
                }
                loading.set(false);
            });
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

    html! {
        <>
            <Navbar />
            <main class="page">
                <h1>{"AI Movie Search"}</h1>
                <div class="search-form">
                    <input
                        type="text"
                        required={true}
                        placeholder="Describe what you want to watch..."
                        value={(*prompt).clone()}
                        onkeydown={onkeydown}
                        oninput={{
                            let prompt = prompt.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    prompt.set(input.value());
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
                {if let Some(message) = *error {
                    html! { <p class="text-sm text-error">{message}</p> }
                } else {
                    html! {}
                }}
                <div class="movie-grid">
                    {for results.iter().map(|movie| html! {
                        <MovieCard movie={movie.clone()} />
                    })}
                </div>
            </main>
            <Footer />
        </>
    }
}
