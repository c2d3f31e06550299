use crate::auth::{HttpAuthService, LoginController, SignupController, SubmitOutcome};
use crate::routes::Route;
use crate::ui::AppState;
use dioxus::prelude::*;

#[component]
pub fn LoginView() -> Element {
    let app = use_context::<AppState>();
    let service = use_context::<HttpAuthService>();
    let mut controller = use_signal(LoginController::new);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let Ok(request) = controller.with_mut(|c| c.begin()) else {
            return;
        };
        let service = service.clone();
        spawn(async move {
            let result = request.send(&service).await;
            if let SubmitOutcome::Redirect(route) = controller.with_mut(|c| c.finish(result)) {
                app.navigate(route);
            }
        });
    };

    let current = controller.read();
    let error = current.error().map(str::to_string);
    let loading = current.is_loading();
    let show_password = current.show_password();
    let email = current.form.email.clone();
    let password = current.form.password.clone();
    drop(current);

    rsx! {
        div { class: "auth-page",
            form { class: "auth-card", onsubmit: on_submit,
                h2 { class: "auth-title", "Login" }
                if let Some(message) = error {
                    p { class: "auth-error", "{message}" }
                }
                label { class: "field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |ev| controller.with_mut(|c| c.form.email = ev.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    div { class: "password-row",
                        input {
                            r#type: if show_password { "text" } else { "password" },
                            placeholder: "Enter password",
                            value: "{password}",
                            oninput: move |ev| controller.with_mut(|c| c.form.password = ev.value()),
                        }
                        button {
                            class: "action-btn",
                            r#type: "button",
                            onclick: move |_| controller.with_mut(|c| c.toggle_password_visibility()),
                            if show_password { "Hide" } else { "Show" }
                        }
                    }
                }
                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Logging in..." } else { "Login" }
                }
                p {
                    class: "auth-switch",
                    onclick: move |_| app.navigate(Route::Signup),
                    "Signup"
                }
            }
        }
    }
}

#[component]
pub fn SignupView() -> Element {
    let app = use_context::<AppState>();
    let service = use_context::<HttpAuthService>();
    let mut controller = use_signal(SignupController::new);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let Ok(request) = controller.with_mut(|c| c.begin()) else {
            return;
        };
        let service = service.clone();
        spawn(async move {
            let result = request.send(&service).await;
            if let SubmitOutcome::Redirect(route) = controller.with_mut(|c| c.finish(result)) {
                app.navigate(route);
            }
        });
    };

    let current = controller.read();
    let error = current.error().map(str::to_string);
    let loading = current.is_loading();
    let show_password = current.show_password();
    let form = current.form.clone();
    drop(current);
    let input_type = if show_password { "text" } else { "password" };

    rsx! {
        div { class: "auth-page",
            form { class: "auth-card", onsubmit: on_submit,
                h2 { class: "auth-title", "Sign Up" }
                if let Some(message) = error {
                    p { class: "auth-error", "{message}" }
                }
                label { class: "field",
                    span { "Name" }
                    input {
                        r#type: "text",
                        placeholder: "Your name",
                        value: "{form.name}",
                        oninput: move |ev| controller.with_mut(|c| c.form.name = ev.value()),
                    }
                }
                label { class: "field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{form.email}",
                        oninput: move |ev| controller.with_mut(|c| c.form.email = ev.value()),
                    }
                }
                label { class: "field",
                    span { "Password" }
                    div { class: "password-row",
                        input {
                            r#type: input_type,
                            placeholder: "Enter password",
                            value: "{form.password}",
                            oninput: move |ev| controller.with_mut(|c| c.form.password = ev.value()),
                        }
                        button {
                            class: "action-btn",
                            r#type: "button",
                            onclick: move |_| controller.with_mut(|c| c.toggle_password_visibility()),
                            if show_password { "Hide" } else { "Show" }
                        }
                    }
                }
                label { class: "field",
                    span { "Confirm Password" }
                    input {
                        r#type: input_type,
                        placeholder: "Confirm password",
                        value: "{form.confirm}",
                        oninput: move |ev| controller.with_mut(|c| c.form.confirm = ev.value()),
                    }
                }
                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Signing up..." } else { "Sign Up" }
                }
                p {
                    class: "auth-switch",
                    onclick: move |_| app.navigate(Route::Login),
                    "Login"
                }
            }
        }
    }
}
