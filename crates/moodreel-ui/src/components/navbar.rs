//! Top navigation bar with inline search and session controls.

use crate::app::actions;
use crate::app::{Route, SearchParams};
use crate::core::store::AppStore;
use gloo::events::EventListener;
use gloo::utils::window;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    let scrolled = use_state(|| false);
    let query = use_state(String::new);
    let session = use_selector(|store: &AppStore| store.session.clone());
    let navigator = use_navigator();

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&window(), "scroll", move |_| {
                    let offset = window().scroll_y().unwrap_or(0.0);
                    scrolled.set(offset > 10.0);
                });
                move || drop(listener)
            },
            (),
        );
    }

    let Some(navigator) = navigator else {
        return html! {};
    };

    let submit_search = {
        let query = query.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if query.trim().is_empty() {
                return;
            }
            let params = SearchParams {
                q: (*query).clone(),
            };
            navigator.push_with_query(&Route::Search, &params).ok();
        })
    };

    let oninput = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                query.set(input.value());
            }
        })
    };

    let onkeydown = {
        let submit_search = submit_search.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                submit_search.emit(());
            }
        })
    };

    let logout = Callback::from(|_| actions::logout());

    let account = if session.is_authenticated() {
        html! {
            <div class="navbar__account">
                <Link<Route> to={Route::Profile} classes="navbar__icon-link">
                    <span class="iconify lucide--user size-5"></span>
                </Link<Route>>
                <button class="outline" onclick={logout}>{"Logout"}</button>
            </div>
        }
    } else {
        html! {
            <Link<Route> to={Route::Login} classes="navbar__login">
                <span class="iconify lucide--log-in size-4"></span>
                <span>{"Login"}</span>
            </Link<Route>>
        }
    };

    html! {
        <nav class={classes!("navbar", (*scrolled).then_some("navbar--scrolled"))}>
            <div class="navbar__inner">
                <div class="navbar__links">
                    <Link<Route> to={Route::Home} classes="navbar__brand">
                        <span class="iconify lucide--film size-6"></span>
                        <span>{"Moodreel"}</span>
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="navbar__link">{"Home"}</Link<Route>>
                    <Link<Route> to={Route::Browse} classes="navbar__link">{"Browse"}</Link<Route>>
                    <Link<Route> to={Route::AiSearch} classes="navbar__link">{"AI Search"}</Link<Route>>
                    {if session.is_authenticated() {
                        html! { <Link<Route> to={Route::Favorites} classes="navbar__link">{"My List"}</Link<Route>> }
                    } else {
                        html! {}
                    }}
                </div>
                <div class="navbar__actions">
                    <label class="navbar__search">
                        <span class="iconify lucide--search size-3.5"></span>
                        <input
                            type="search"
                            placeholder="Search movies..."
                            value={(*query).clone()}
                            {oninput}
                            {onkeydown}
                        />
                    </label>
                    {account}
                </div>
            </div>
        </nav>
    }
}
