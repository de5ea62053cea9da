use crate::models::mood_emoji;
use moodreel_api_models::MOODS;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct MoodSelectorProps {
    /// Currently active mood, if any.
    #[prop_or_default]
    pub selected: Option<String>,
    /// Emits the next selection; `None` clears it.
    pub on_select: Callback<Option<String>>,
}

#[function_component(MoodSelector)]
pub(crate) fn mood_selector(props: &MoodSelectorProps) -> Html {
    html! {
        <div class="mood-selector">
            <h2 class="mood-selector__title">{"I'm in the mood for..."}</h2>
            <div class="mood-selector__grid">
                {for MOODS.into_iter().map(|mood| {
                    let active = props.selected.as_deref() == Some(mood);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_| {
                            let next = if active { None } else { Some(mood.to_string()) };
                            on_select.emit(next);
                        })
                    };
                    html! {
                        <button
                            key={mood}
                            class={classes!("mood-selector__chip", active.then_some("mood-selector__chip--active"))}
                            {onclick}
                        >
                            <span class="mood-selector__emoji">{mood_emoji(mood)}</span>
                            <span>{mood}</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
