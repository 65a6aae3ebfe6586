use crate::auth::use_auth;
use crate::notify;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdAnchor, LdLockKeyhole, LdShip};
use dioxus_free_icons::Icon;
use shared_types::{LoginRequest, PortalConfig};
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input,
    Separator,
};
use std::collections::HashMap;

/// Login page with email/password and the demo account list.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let config: PortalConfig = use_context();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    // Redirect to dashboard if already authenticated
    if auth.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let demo_accounts: Vec<(String, String, String)> = if config.features.demo_credentials {
        auth.session
            .read()
            .directory()
            .demo_accounts()
            .into_iter()
            .map(|(role, email, password)| (role, email.to_string(), password.to_string()))
            .collect()
    } else {
        Vec::new()
    };

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        field_errors.set(HashMap::new());

        let request = LoginRequest::new(email(), password());
        if let Err(e) = request.validate_request() {
            field_errors.set(e.field_errors);
            return;
        }

        let outcome = auth.login(&request.email, &request.password);
        notify::show(&toast, &outcome.notice());
        if outcome.succeeded() {
            navigator().push(Route::Dashboard {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-panel",
                div { class: "auth-heading",
                    Icon::<LdShip> { icon: LdShip, width: 48, height: 48 }
                    h1 { "Cruise Ship Services" }
                    p { "Access all ship services in one place" }
                }

                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Sign In" }
                        CardDescription { "Enter your credentials to access your account" }
                    }

                    CardContent {
                        form { onsubmit: handle_login,
                            div { class: "auth-field",
                                label { r#for: "email", class: "auth-label", "Email" }
                                Input {
                                    input_type: "email",
                                    id: "email",
                                    placeholder: "Email",
                                    required: true,
                                    value: email(),
                                    on_input: move |e: FormEvent| email.set(e.value()),
                                    error: field_errors().get("email").cloned(),
                                    icon: rsx! { Icon::<LdAnchor> { icon: LdAnchor, width: 16, height: 16 } },
                                }
                            }
                            div { class: "auth-field",
                                label { r#for: "password", class: "auth-label", "Password" }
                                Input {
                                    input_type: "password",
                                    id: "password",
                                    placeholder: "Password",
                                    required: true,
                                    value: password(),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                    error: field_errors().get("password").cloned(),
                                    icon: rsx! { Icon::<LdLockKeyhole> { icon: LdLockKeyhole, width: 16, height: 16 } },
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "auth-submit button",
                                "data-style": "primary",
                                "data-width": "full",
                                "Sign In"
                            }
                        }
                    }

                    if !demo_accounts.is_empty() {
                        CardFooter { class: "auth-demo",
                            Separator { label: "Demo Login Credentials" }
                            for (role, email, password) in demo_accounts {
                                p { key: "{email}", class: "auth-demo-account",
                                    span { class: "auth-demo-role", "{role}:" }
                                    " {email} / {password}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
