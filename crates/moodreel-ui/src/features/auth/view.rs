//! Login and signup pages. Both render standalone, without the navbar.

use crate::app::actions;
use crate::app::{ApiCtx, Route};
use crate::features::auth::logic::validate_signup;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn brand() -> Html {
    html! {
        <Link<Route> to={Route::Home} classes="auth-page__brand">
            <span class="iconify lucide--film size-6"></span>
            <span>{"Moodreel"}</span>
        </Link<Route>>
    }
}

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();

    let Some(navigator) = navigator else {
        return html! {};
    };

    let submit = {
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let api = api.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if *submitting || email.trim().is_empty() || password.is_empty() {
                return;
            }
            let Some(api) = api.clone() else {
                return;
            };
            submitting.set(true);
            let email = (*email).clone();
            let password = (*password).clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let signed_in = actions::login(&api.client, &email, &password).await;
                submitting.set(false);
                if signed_in {
                    navigator.push(&Route::Home);
                }
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
        <main class="auth-page">
            <div class="panel auth-page__panel">
                {brand()}
                <h1>{"Sign in to your account"}</h1>
                <p class="muted">{"Enter your credentials to access your account"}</p>
                <label>
                    <span>{"Email"}</span>
                    <input
                        type="email"
                        placeholder="name@example.com"
                        value={(*email).clone()}
                        onkeydown={onkeydown.clone()}
                        oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    email.set(input.value());
                                }
                            })
                        }}
                    />
                </label>
                <label>
                    <span>{"Password"}</span>
                    <input
                        type="password"
                        placeholder="••••••••"
                        value={(*password).clone()}
                        onkeydown={onkeydown}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    password.set(input.value());
                                }
                            })
                        }}
                    />
                </label>
                <button
                    class="primary"
                    disabled={*submitting}
                    onclick={submit.reform(|_| ())}
                >
                    {if *submitting { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="muted">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup} classes="underline">{"Sign up"}</Link<Route>>
                </p>
                <p class="auth-page__hint">
                    {"Demo credentials: user@example.com / password123"}
                </p>
            </div>
        </main>
    }
}

#[function_component(SignupPage)]
pub(crate) fn signup_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirmation = use_state(String::new);
    let password_error = use_state(|| None::<&'static str>);
    let submitting = use_state(|| false);
    let api = use_context::<ApiCtx>();
    let navigator = use_navigator();

    let Some(navigator) = navigator else {
        return html! {};
    };

    let submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirmation = confirmation.clone();
        let password_error = password_error.clone();
        let submitting = submitting.clone();
        let api = api.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if *submitting || name.trim().is_empty() || email.trim().is_empty() {
                return;
            }
            if let Err(message) = validate_signup(&password, &confirmation) {
                password_error.set(Some(message));
                return;
            }
            password_error.set(None);
            let Some(api) = api.clone() else {
                return;
            };
            submitting.set(true);
            let name = (*name).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let signed_up = actions::signup(&api.client, &name, &email, &password).await;
                submitting.set(false);
                if signed_up {
                    navigator.push(&Route::Home);
                }
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
        <main class="auth-page">
            <div class="panel auth-page__panel">
                {brand()}
                <h1>{"Create an account"}</h1>
                <p class="muted">{"Sign up to start discovering movies tailored to your mood"}</p>
                <label>
                    <span>{"Full Name"}</span>
                    <input
                        type="text"
                        placeholder="John Doe"
                        value={(*name).clone()}
                        onkeydown={onkeydown.clone()}
                        oninput={{
                            let name = name.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    name.set(input.value());
                                }
                            })
                        }}
                    />
                </label>
                <label>
                    <span>{"Email"}</span>
                    <input
                        type="email"
                        placeholder="name@example.com"
                        value={(*email).clone()}
                        onkeydown={onkeydown.clone()}
                        oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    email.set(input.value());
                                }
                            })
                        }}
                    />
                </label>
                <label>
                    <span>{"Password"}</span>
                    <input
                        type="password"
                        placeholder="••••••••"
                        value={(*password).clone()}
                        onkeydown={onkeydown.clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    password.set(input.value());
                                }
                            })
                        }}
                    />
                </label>
                <label>
                    <span>{"Confirm Password"}</span>
                    <input
                        type="password"
                        placeholder="••••••••"
                        value={(*confirmation).clone()}
                        onkeydown={onkeydown}
                        oninput={{
                            let confirmation = confirmation.clone();
                            Callback::from(move |e: InputEvent| {
                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                    confirmation.set(input.value());
                                }
                            })
                        }}
                    />
                </label>
                {if let Some(message) = *password_error {
                    html! { <p class="text-sm text-error">{message}</p> }
                } else {
                    html! {}
                }}
                <button
                    class="primary"
                    disabled={*submitting}
                    onclick={submit.reform(|_| ())}
                >
                    {if *submitting { "Creating account..." } else { "Create Account" }}
                </button>
                <p class="muted">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="underline">{"Sign in"}</Link<Route>>
                </p>
            </div>
        </main>
    }
}
