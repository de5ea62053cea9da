//! Session and favorites actions shared across components.
//!
//! # Design
//! - Each remote outcome lands in the store inside one `reduce_mut`, so the
//!   session change and its toast commit together.
//! - Favorites mutate optimistically; a failed call re-reads the durable
//!   record instead of replaying the attempted change.

use crate::core::session::FavoriteChange;
use crate::core::store::app_dispatch;
use crate::models::ToastKind;
use crate::services::api::ApiClient;

/// Sign in, toast the outcome, and install the session. True on success so
/// the form can navigate away.
pub(crate) async fn login(client: &ApiClient, email: &str, password: &str) -> bool {
    match client.login(email, password).await {
        Ok(user) => {
            let message = format!("Welcome back, {}!", user.name);
            app_dispatch().reduce_mut(|store| {
                store.session.apply_login(user);
                store.ui.push_toast(message, ToastKind::Success);
            });
            true
        }
        Err(error) => {
            app_dispatch().reduce_mut(|store| {
                store.ui.push_toast(error.to_string(), ToastKind::Error);
            });
            false
        }
    }
}

/// Create an account and install the session. Greets with the form name,
/// not the response name.
pub(crate) async fn signup(client: &ApiClient, name: &str, email: &str, password: &str) -> bool {
    match client.signup(name, email, password).await {
        Ok(user) => {
            let message = format!("Welcome to Moodreel, {name}!");
            app_dispatch().reduce_mut(|store| {
                store.session.apply_login(user);
                store.ui.push_toast(message, ToastKind::Success);
            });
            true
        }
        Err(error) => {
            app_dispatch().reduce_mut(|store| {
                store.ui.push_toast(error.to_string(), ToastKind::Error);
            });
            false
        }
    }
}

/// Drop the session and confirm with a toast.
pub(crate) fn logout() {
    app_dispatch().reduce_mut(|store| {
        store.session.logout();
        store
            .ui
            .push_toast("You have been logged out", ToastKind::Info);
    });
}

/// Flip the movie's favorite membership: memory and record move first, the
/// backend call follows. On failure the durable record is re-read, so a
/// later toggle that already overwrote it wins over the rollback.
pub(crate) async fn toggle_favorite(client: &ApiClient, movie_id: String) {
    let dispatch = app_dispatch();
    let change = if dispatch.get().session.is_favorite(&movie_id) {
        FavoriteChange::Remove(movie_id)
    } else {
        FavoriteChange::Add(movie_id)
    };
    let confirmation = match &change {
        FavoriteChange::Add(_) => "Added to favorites",
        FavoriteChange::Remove(_) => "Removed from favorites",
    };

    let planned = dispatch.reduce_mut(|store| {
        let favorites = store.session.favorites_with(&change)?;
        store.session.apply_favorites(favorites.clone());
        store.ui.push_toast(confirmation, ToastKind::Success);
        store
            .session
            .user()
            .map(|user| (user.id.clone(), favorites))
    });
    let Some((user_id, favorites)) = planned else {
        return;
    };

    if client.update_favorites(&user_id, favorites).await.is_err() {
        app_dispatch().reduce_mut(|store| {
            store
                .ui
                .push_toast("Failed to update favorites", ToastKind::Error);
            store.session.reconcile_from_record();
        });
    }
}
