//! Embedded clip player with auto-hiding chrome.

use crate::core::logic::{embed_url, format_seconds, progress_percent};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

const CHROME_HIDE_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub(crate) struct VideoPlayerProps {
    pub video_url: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub autoplay: bool,
}

#[function_component(VideoPlayer)]
pub(crate) fn video_player(props: &VideoPlayerProps) -> Html {
    let is_playing = use_state(|| props.autoplay);
    let is_muted = use_state(|| false);
    let show_chrome = use_state(|| true);
    let hide_timer = use_mut_ref(|| None as Option<Timeout>);

    // Elapsed and duration stay at 0:00; the embed does not report playback.
    // TODO: track position through the iframe player events (enablejsapi is
    // already set on the embed URL).
    let elapsed = 0;
    let duration = 0;

    {
        let show_chrome = show_chrome.clone();
        let hide_timer = hide_timer.clone();
        let playing = *is_playing;
        use_effect_with_deps(
            move |_| {
                if let Some(timer) = hide_timer.borrow_mut().take() {
                    drop(timer);
                }
                if playing {
                    let show_chrome = show_chrome.clone();
                    *hide_timer.borrow_mut() =
                        Some(Timeout::new(CHROME_HIDE_MS, move || show_chrome.set(false)));
                }
                move || drop(hide_timer.borrow_mut().take())
            },
            playing,
        );
    }

    let reveal_chrome = {
        let show_chrome = show_chrome.clone();
        let hide_timer = hide_timer.clone();
        let is_playing = is_playing.clone();
        Callback::from(move |()| {
            show_chrome.set(true);
            if let Some(timer) = hide_timer.borrow_mut().take() {
                drop(timer);
            }
            if *is_playing {
                let show_chrome = show_chrome.clone();
                *hide_timer.borrow_mut() =
                    Some(Timeout::new(CHROME_HIDE_MS, move || show_chrome.set(false)));
            }
        })
    };

    let toggle_play = {
        let is_playing = is_playing.clone();
        let reveal_chrome = reveal_chrome.clone();
        Callback::from(move |_| {
            is_playing.set(!*is_playing);
            reveal_chrome.emit(());
        })
    };

    let toggle_mute = {
        let is_muted = is_muted.clone();
        let reveal_chrome = reveal_chrome.clone();
        Callback::from(move |_| {
            is_muted.set(!*is_muted);
            reveal_chrome.emit(());
        })
    };

    let onmousemove = reveal_chrome.reform(|_| ());
    let onmouseleave = {
        let show_chrome = show_chrome.clone();
        let is_playing = is_playing.clone();
        Callback::from(move |_| {
            if *is_playing {
                show_chrome.set(false);
            }
        })
    };

    let progress = progress_percent(elapsed, duration);
    let chrome = if *show_chrome {
        html! {
            <div class="video-player__chrome">
                <div class="video-player__progress">
                    <div class="video-player__progress-fill" style={format!("width: {progress}%")}></div>
                </div>
                <div class="video-player__controls">
                    <div class="video-player__cluster">
                        <button
                            class="ghost"
                            aria-label={if *is_playing { "Pause" } else { "Play" }}
                            onclick={toggle_play}
                        >
                            <span class={if *is_playing {
                                "iconify lucide--pause size-5"
                            } else {
                                "iconify lucide--play size-5"
                            }}></span>
                        </button>
                        <button
                            class="ghost"
                            aria-label={if *is_muted { "Unmute" } else { "Mute" }}
                            onclick={toggle_mute}
                        >
                            <span class={if *is_muted {
                                "iconify lucide--volume-x size-5"
                            } else {
                                "iconify lucide--volume-2 size-5"
                            }}></span>
                        </button>
                        <span class="video-player__time">
                            {format!("{} / {}", format_seconds(elapsed), format_seconds(duration))}
                        </span>
                    </div>
                    // Inert control; the embed is created without fullscreen
                    // permission.
                    <button class="ghost" aria-label="Fullscreen">
                        <span class="iconify lucide--maximize size-5"></span>
                    </button>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="video-player" {onmousemove} {onmouseleave}>
            <iframe
                class="video-player__frame"
                src={embed_url(&props.video_url, props.autoplay, *is_muted)}
                title={props.title.clone()}
                allow="autoplay; encrypted-media"
            />
            {chrome}
        </div>
    }
}
