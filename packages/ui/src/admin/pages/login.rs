//! Admin sign-in form.

use api::AdminClient;
use dioxus::prelude::*;

use crate::admin::ErrorBanner;

/// Props for LoginPage.
#[derive(Props, Clone, PartialEq)]
pub struct LoginPageProps {
    /// Why the admin was sent here, such as an expired session.
    #[props(default)]
    pub notice: Option<String>,
}

/// Login page component.
#[component]
pub fn LoginPage(props: LoginPageProps) -> Element {
    let client = use_context::<AdminClient>();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        let (email, password) = (email(), password());
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match client.login(email.trim(), &password).await {
                Ok(_) => {
                    tracing::info!("Admin signed in");
                    nav.replace("/");
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {e}");
                    error.set(Some(e.message_or("Login failed")));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "login-container",
            form { class: "card login-card", onsubmit: on_submit,
                h1 { class: "page-title", "Admin Login" }

                if let Some(notice) = props.notice.clone() {
                    div { class: "notice notice-warning", "{notice}" }
                }
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                div { class: "form-group",
                    label { class: "form-label", "Email" }
                    input {
                        class: "form-input",
                        r#type: "email",
                        autocomplete: "username",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", "Password" }
                    input {
                        class: "form-input",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign In" }
                }
            }
        }
    }
}
