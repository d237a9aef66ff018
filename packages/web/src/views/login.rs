//! Login page: password form, followed by a TOTP code when the account requires it.

use api::{load_session, login, verify_two_factor, LoginOutcome, SessionState};
use dioxus::prelude::*;
use store::Notice;
use ui::{notify, use_client, use_session, use_toasts};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_client();
    let mut session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut challenge = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // Already signed in
    if session().is_signed_in() {
        nav.replace(Route::Home {});
    }

    let onsubmit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            busy.set(true);
            let outcome = match challenge() {
                Some(temporary_token) => verify_two_factor(&client, &temporary_token, &code())
                    .await
                    .map(|()| LoginOutcome::SignedIn),
                None => login(&client, &username(), &password()).await,
            };

            match outcome {
                Ok(LoginOutcome::SignedIn) => {
                    let state = match load_session(&client).await {
                        Some(user) => SessionState::signed_in(user),
                        None => SessionState::guest(),
                    };
                    let welcome = state
                        .user
                        .as_ref()
                        .map(|user| format!("Welcome back, {}.", user.display_name()))
                        .unwrap_or_default();
                    session.set(state);
                    notify(&mut toasts, Notice::success("Signed in", welcome));
                    nav.push(Route::Home {});
                }
                Ok(LoginOutcome::TwoFactorRequired {
                    temporary_token,
                    detail,
                }) => {
                    notify(&mut toasts, Notice::info("Two-factor authentication", detail));
                    challenge.set(Some(temporary_token));
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {}", e);
                    notify(&mut toasts, e.notice("Sign-in failed", "Could not sign in"));
                }
            }
            busy.set(false);
        }
    };

    rsx! {
        div {
            class: "login-container",
            h1 { "Sign in" }
            form {
                class: "login-form",
                onsubmit: onsubmit,
                if challenge().is_some() {
                    label { r#for: "totpCode", "Authentication code" }
                    input {
                        id: "totpCode",
                        inputmode: "numeric",
                        autocomplete: "one-time-code",
                        required: true,
                        value: "{code}",
                        oninput: move |evt| code.set(evt.value()),
                    }
                } else {
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        autocomplete: "username",
                        required: true,
                        value: "{username}",
                        oninput: move |evt| username.set(evt.value()),
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
