use crate::core::store::{AppStore, app_dispatch};
use crate::models::{Toast, ToastKind};
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::use_selector;

const TOAST_MS: u32 = 4000;

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let toasts = use_selector(|store: &AppStore| store.ui.toasts.clone());
    let on_dismiss = Callback::from(|id: u64| {
        app_dispatch().reduce_mut(|store| store.ui.dismiss_toast(id));
    });

    {
        let list = (*toasts).clone();
        let on_dismiss = on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut handles = Vec::new();
                for toast in list.iter() {
                    let on_dismiss = on_dismiss.clone();
                    let id = toast.id;
                    handles.push(Timeout::new(TOAST_MS, move || on_dismiss.emit(id)));
                }
                move || drop(handles)
            },
            list,
        );
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| render_toast(toast, on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let class = match toast.kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div class={classes!("toast", class)} role="status">
            <span>{toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
