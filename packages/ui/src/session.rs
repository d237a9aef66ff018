//! Session context and hooks for the UI.

use api::{load_session, logout, SessionState};
use dioxus::prelude::*;

use crate::config::use_config;
use crate::platform::{hard_navigate, make_client, Client};

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared API client.
pub fn use_client() -> Client {
    use_context::<Client>()
}

/// Provider component that owns the API client and the session state.
///
/// The current user is resolved once on mount. A refresh failure anywhere in the
/// app drops the session back to guest.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_config();
    let mut session = use_signal(SessionState::default);

    let client = use_hook(|| {
        make_client(&config, move || {
            let mut session = session;
            session.set(SessionState::guest());
        })
    });
    use_context_provider(|| client.clone());
    use_context_provider(|| session);

    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            let state = match load_session(&client).await {
                Some(user) => SessionState::signed_in(user),
                None => SessionState::guest(),
            };
            session.set(state);
        }
    });

    rsx! {
        {children}
    }
}

/// Render children only for signed-in users.
#[component]
pub fn AuthRequired(children: Element) -> Element {
    let session = use_session();
    if !session().visibility().authenticated {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

/// Render children only for guests. Shown while the session is still loading.
#[component]
pub fn GuestOnly(children: Element) -> Element {
    let session = use_session();
    if !session().visibility().guest {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

/// Render children only for admins and moderators.
#[component]
pub fn StaffOnly(children: Element) -> Element {
    let session = use_session();
    if !session().visibility().staff {
        return rsx! {};
    }
    rsx! {
        {children}
    }
}

#[component]
pub fn UserBadge() -> Element {
    let session = use_session();
    let name = session()
        .user
        .map(|user| user.display_name().to_string())
        .unwrap_or_else(|| "Guest".to_string());

    rsx! {
        span { class: "user-badge", "{name}" }
    }
}

/// Button to sign the current user out.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let client = use_client();

    let onclick = move |_| {
        logout(&client);
        session.set(SessionState::guest());
        hard_navigate("/");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
