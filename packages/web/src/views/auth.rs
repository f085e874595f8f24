//! Sign-in and sign-up page.

use dioxus::prelude::*;
use ui::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Label, Tabs, TabsContent, TabsList, TabsTrigger,
};
use ui::use_auth;

use crate::Route;

/// Auth page with a sign-in / sign-up tab card and the Google button.
#[component]
pub fn Auth() -> Element {
    let auth = use_auth();
    let state = auth.state;
    let nav = use_navigator();

    let mut signin_email = use_signal(String::new);
    let mut signin_password = use_signal(String::new);
    let mut signup_name = use_signal(String::new);
    let mut signup_email = use_signal(String::new);
    let mut signup_password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    // Redirect if already authenticated
    if state().user.is_some() && !state().loading {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    if state().loading {
        return rsx! {
            div { class: "page-loading", div { class: "spinner" } }
        };
    }

    let mut signin_auth = auth;
    let on_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            let _ = signin_auth
                .sign_in(signin_email.peek().clone(), signin_password.peek().clone())
                .await;
            busy.set(false);
        });
    };

    let mut signup_auth = auth;
    let on_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            let name = signup_name.peek().trim().to_string();
            let display_name = if name.is_empty() { None } else { Some(name) };
            let _ = signup_auth
                .sign_up(
                    signup_email.peek().clone(),
                    signup_password.peek().clone(),
                    display_name,
                )
                .await;
            busy.set(false);
        });
    };

    let mut google_auth = auth;
    let on_google = move |_| {
        spawn(async move {
            busy.set(true);
            let _ = google_auth.sign_in_with_google().await;
            busy.set(false);
        });
    };

    let signin_label = if busy() { "登入中..." } else { "登入" };
    let signup_label = if busy() { "註冊中..." } else { "註冊" };
    let google_label = if busy() { "連接中..." } else { "使用 Google 登入" };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card card-glow",
                CardHeader { class: "auth-header",
                    div { class: "auth-brand",
                        div { class: "brand-mark brand-mark-lg", span { "🐱" } }
                        h1 { class: "text-gradient", "CatmanAI" }
                    }
                    CardTitle { "歡迎來到 CatmanAI" }
                    CardDescription { "專教人善用AI的有趣學習平台" }
                }
                CardContent {
                    Tabs { default_value: "signin".to_string(), class: "auth-tabs",
                        TabsList { class: "auth-tabs-list",
                            TabsTrigger { value: "signin".to_string(), "登入" }
                            TabsTrigger { value: "signup".to_string(), "註冊" }
                        }
                        TabsContent { value: "signin".to_string(),
                            form { class: "auth-form", onsubmit: on_sign_in,
                                div { class: "form-field",
                                    Label { r#for: "signin-email", "電子郵件" }
                                    Input {
                                        id: "signin-email",
                                        r#type: "email",
                                        placeholder: "你的電子郵件",
                                        required: true,
                                        value: signin_email(),
                                        oninput: move |evt: FormEvent| signin_email.set(evt.value()),
                                    }
                                }
                                div { class: "form-field",
                                    Label { r#for: "signin-password", "密碼" }
                                    Input {
                                        id: "signin-password",
                                        r#type: "password",
                                        placeholder: "你的密碼",
                                        required: true,
                                        value: signin_password(),
                                        oninput: move |evt: FormEvent| signin_password.set(evt.value()),
                                    }
                                }
                                Button {
                                    r#type: "submit",
                                    class: "btn-hero auth-submit",
                                    disabled: busy(),
                                    "{signin_label}"
                                }
                            }
                        }
                        TabsContent { value: "signup".to_string(),
                            form { class: "auth-form", onsubmit: on_sign_up,
                                div { class: "form-field",
                                    Label { r#for: "signup-name", "顯示名稱" }
                                    Input {
                                        id: "signup-name",
                                        placeholder: "你的名稱",
                                        value: signup_name(),
                                        oninput: move |evt: FormEvent| signup_name.set(evt.value()),
                                    }
                                }
                                div { class: "form-field",
                                    Label { r#for: "signup-email", "電子郵件" }
                                    Input {
                                        id: "signup-email",
                                        r#type: "email",
                                        placeholder: "你的電子郵件",
                                        required: true,
                                        value: signup_email(),
                                        oninput: move |evt: FormEvent| signup_email.set(evt.value()),
                                    }
                                }
                                div { class: "form-field",
                                    Label { r#for: "signup-password", "密碼" }
                                    Input {
                                        id: "signup-password",
                                        r#type: "password",
                                        placeholder: "至少6個字符",
                                        required: true,
                                        value: signup_password(),
                                        oninput: move |evt: FormEvent| signup_password.set(evt.value()),
                                    }
                                }
                                Button {
                                    r#type: "submit",
                                    class: "btn-hero auth-submit",
                                    disabled: busy(),
                                    "{signup_label}"
                                }
                            }
                        }
                    }
                    div { class: "auth-divider",
                        span { class: "auth-divider-line" }
                        span { class: "auth-divider-text", "或" }
                        span { class: "auth-divider-line" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "auth-google",
                        disabled: busy(),
                        onclick: on_google,
                        svg { class: "google-icon", view_box: "0 0 24 24",
                            path {
                                fill: "currentColor",
                                d: "M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z",
                            }
                            path {
                                fill: "currentColor",
                                d: "M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z",
                            }
                            path {
                                fill: "currentColor",
                                d: "M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z",
                            }
                            path {
                                fill: "currentColor",
                                d: "M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z",
                            }
                        }
                        "{google_label}"
                    }
                }
            }
        }
    }
}
