use crate::app::Route;
use js_sys::Date;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <Link<Route> to={Route::Home} classes="footer__logo">
                        <span class="iconify lucide--film size-5"></span>
                        <span>{"Moodreel"}</span>
                    </Link<Route>>
                    <p class="footer__blurb">
                        {"Discover movies based on your mood, preferences, and what your friends are watching."}
                    </p>
                </div>
                <div class="footer__columns">
                    <div>
                        <h4>{"Navigation"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Browse}>{"Browse"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Search}>{"Search"}</Link<Route>></li>
                        </ul>
                    </div>
                    <div>
                        <h4>{"Account"}</h4>
                        <ul>
                            <li><Link<Route> to={Route::Login}>{"Login"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Signup}>{"Sign Up"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Profile}>{"My Profile"}</Link<Route>></li>
                        </ul>
                    </div>
                </div>
            </div>
            <div class="footer__legal">
                <p>{format!("© {year} Moodreel. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
