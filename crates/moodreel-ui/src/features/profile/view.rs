//! Profile page views.

use crate::app::Route;
use crate::app::actions;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::core::session::SessionPhase;
use crate::core::store::AppStore;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(ProfilePage)]
pub(crate) fn profile_page() -> Html {
    let session = use_selector(|store: &AppStore| store.session.clone());

    let body = match session.phase() {
        // The boot restore has not settled yet.
        SessionPhase::Unknown => html! {},
        SessionPhase::Anonymous => html! {
            <section class="login-gate">
                <h1>{"Login Required"}</h1>
                <p class="muted">{"You need to be logged in to view your profile."}</p>
                <Link<Route> to={Route::Login} classes="primary">{"Login to continue"}</Link<Route>>
            </section>
        },
        SessionPhase::Authenticated(user) => {
            let logout = Callback::from(|_| actions::logout());
            html! {
                <section class="profile">
                    <div class="profile__header">
                        <h1>{"Your Profile"}</h1>
                        <button class="outline" onclick={logout}>{"Logout"}</button>
                    </div>
                    <div class="panel">
                        <h2>{"Profile Information"}</h2>
                        <label>
                            <span>{"Full Name"}</span>
                            <input type="text" readonly={true} value={user.name.clone()} />
                        </label>
                        <label>
                            <span>{"Email"}</span>
                            <input type="email" readonly={true} value={user.email.clone()} />
                        </label>
                    </div>
                </section>
            }
        }
    };

    html! {
        <>
            <Navbar />
            <main class="page">{body}</main>
            <Footer />
        </>
    }
}
