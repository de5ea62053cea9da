//! Horizontal movie row with stepped smooth scrolling.

use crate::components::movie_card::MovieCard;
use moodreel_api_models::Movie;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const SCROLL_STEP: f64 = 300.0;

#[derive(Properties, PartialEq)]
pub(crate) struct MovieListProps {
    pub title: AttrValue,
    pub movies: Vec<Movie>,
}

#[function_component(MovieList)]
pub(crate) fn movie_list(props: &MovieListProps) -> Html {
    let scroller = use_node_ref();
    let scroll_position = use_state(|| 0.0f64);

    let scroll_by = {
        let scroller = scroller.clone();
        let scroll_position = scroll_position.clone();
        Callback::from(move |delta: f64| {
            let Some(element) = scroller.cast::<Element>() else {
                return;
            };
            let limit = f64::from(element.scroll_width() - element.client_width());
            let next = (*scroll_position + delta).clamp(0.0, limit.max(0.0));
            let options = ScrollToOptions::new();
            options.set_left(next);
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_to_with_scroll_to_options(&options);
            scroll_position.set(next);
        })
    };

    if props.movies.is_empty() {
        return html! {};
    }

    html! {
        <div class="movie-list">
            <h2 class="movie-list__title">{props.title.clone()}</h2>
            <div class="movie-list__row">
                {if *scroll_position > 0.0 {
                    html! {
                        <button
                            class="movie-list__step movie-list__step--left"
                            aria-label="Scroll left"
                            onclick={scroll_by.reform(|_| -SCROLL_STEP)}
                        >
                            <span class="iconify lucide--arrow-left size-4"></span>
                        </button>
                    }
                } else {
                    html! {}
                }}
                <div class="movie-list__scroller" ref={scroller}>
                    {for props.movies.iter().map(|movie| html! {
                        <div class="movie-list__item" key={movie.id.clone()}>
                            <MovieCard movie={movie.clone()} />
                        </div>
                    })}
                </div>
                <button
                    class="movie-list__step movie-list__step--right"
                    aria-label="Scroll right"
                    onclick={scroll_by.reform(|_| SCROLL_STEP)}
                >
                    <span class="iconify lucide--arrow-right size-4"></span>
                </button>
            </div>
        </div>
    }
}
