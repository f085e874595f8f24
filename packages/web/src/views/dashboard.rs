//! Member dashboard with password-gated content sections.

use std::collections::HashMap;

use api::UserRole;
use dioxus::prelude::*;
use ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Input, Label, Tabs, TabsContent, TabsList, TabsTrigger,
};
use ui::unlock::META_SECTION_NAME;
use ui::{submit_password, use_auth, use_toast, SectionData, Toasts, UnlockOutcome};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let state = auth.state;
    let nav = use_navigator();
    let toasts = use_toast();

    let mut sections = use_signal(Vec::<SectionData>::new);
    let mut loading_sections = use_signal(|| true);
    let passwords = use_signal(HashMap::<String, String>::new);

    // Fetch the visible sections once the user is known, then let each
    // section's items land independently.
    let user_id = use_memo(move || state().user.as_ref().map(|user| user.id.clone()));
    use_effect(move || {
        if user_id().is_none() {
            return;
        }
        let mut toasts = toasts;
        spawn(async move {
            match api::list_sections().await {
                Ok(list) => {
                    let fetched: Vec<SectionData> =
                        list.into_iter().map(SectionData::new).collect();
                    let ids: Vec<String> =
                        fetched.iter().map(|data| data.section.id.clone()).collect();
                    sections.set(fetched);
                    loading_sections.set(false);
                    for id in ids {
                        spawn(async move {
                            let mut toasts = toasts;
                            match api::list_section_items(id.clone()).await {
                                Ok(items) => {
                                    let mut list = sections.write();
                                    if let Some(data) =
                                        list.iter_mut().find(|data| data.section.id == id)
                                    {
                                        data.items = items;
                                        data.items_loaded = true;
                                    }
                                }
                                Err(_) => {
                                    toasts.error("載入失敗", Some("無法載入內容區域".to_string()));
                                }
                            }
                        });
                    }
                }
                Err(_) => {
                    loading_sections.set(false);
                    toasts.error("載入失敗", Some("無法載入內容區域".to_string()));
                }
            }
        });
    });

    // Redirect if not authenticated
    if state().user.is_none() && !state().loading {
        nav.replace(Route::Auth {});
        return rsx! {};
    }

    if state().loading || loading_sections() {
        return rsx! {
            div { class: "page-loading", div { class: "spinner" } }
        };
    }

    let snapshot = state();
    let email = snapshot
        .user
        .as_ref()
        .map(|user| user.email.clone())
        .unwrap_or_default();
    let role_badge = snapshot.role.map(|role| {
        let variant = if role == UserRole::Admin {
            BadgeVariant::Primary
        } else {
            BadgeVariant::Secondary
        };
        (variant, role.label())
    });

    let mut signout_auth = auth;
    let on_sign_out = move |_| {
        spawn(async move {
            signout_auth.sign_out().await;
        });
    };

    let section_list = sections();
    let default_tab = section_list
        .first()
        .map(|data| data.section.id.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "dashboard",
            nav { class: "dashboard-nav",
                div { class: "dashboard-nav-inner",
                    div { class: "brand",
                        div { class: "brand-mark", span { "🐱" } }
                        span { class: "brand-name text-gradient", "CatmanAI" }
                    }
                    div { class: "dashboard-nav-user",
                        span { class: "dashboard-welcome", "歡迎, {email}" }
                        if let Some((variant, label)) = role_badge {
                            Badge { variant, "{label}" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "btn-sm",
                            onclick: on_sign_out,
                            "登出"
                        }
                    }
                }
            }

            div { class: "dashboard-body",
                div { class: "dashboard-heading",
                    h1 { class: "text-gradient", "CatmanAI 學習平台" }
                    p { "專教人善用AI的有趣學習平台 - 探索各種AI工具和學習資源" }
                }

                Tabs { default_value: default_tab, class: "dashboard-tabs",
                    TabsList { class: "dashboard-tabs-list",
                        for data in section_list.iter() {
                            TabsTrigger {
                                key: "{data.section.id}",
                                value: data.section.id.clone(),
                                span { class: "tab-lock", if data.unlocked { "🔓" } else { "🔒" } }
                                span { "{data.section.name}" }
                            }
                        }
                    }
                    for data in section_list.iter() {
                        TabsContent { key: "{data.section.id}", value: data.section.id.clone(),
                            SectionPane { data: data.clone(), sections, passwords }
                        }
                    }
                }
            }
        }
    }
}

/// One dashboard section: the password form while locked, the item list
/// once unlocked.
#[component]
fn SectionPane(
    data: SectionData,
    sections: Signal<Vec<SectionData>>,
    passwords: Signal<HashMap<String, String>>,
) -> Element {
    let toasts = use_toast();

    let section_id = data.section.id.clone();
    let password_value = passwords()
        .get(&section_id)
        .cloned()
        .unwrap_or_default();
    let hint = if data.section.name == META_SECTION_NAME {
        "密碼為 \"meta\" 或 \"symptom\""
    } else {
        "密碼為 \"symptom\""
    };
    let status_icon = if data.unlocked { "🔓" } else { "🔒" };
    let status_text = if data.unlocked {
        "已解鎖 - 瀏覽以下資源"
    } else {
        "輸入密碼以解鎖此區域的內容"
    };
    let input_dom_id = format!("password-{section_id}");

    let mut passwords_mut = passwords;
    let input_id = section_id.clone();
    let on_password_input = move |evt: FormEvent| {
        passwords_mut.write().insert(input_id.clone(), evt.value());
    };

    let click_id = section_id.clone();
    let on_unlock = move |_| handle_unlock(sections, passwords, toasts, &click_id);

    let key_id = section_id.clone();
    let on_password_key = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            handle_unlock(sections, passwords, toasts, &key_id);
        }
    };

    rsx! {
        Card { class: "card-glow section-card",
            CardHeader {
                CardTitle { class: "section-title",
                    span { class: "section-status", "{status_icon}" }
                    span { "{data.section.name}" }
                }
                CardDescription { "{status_text}" }
            }
            CardContent {
                if !data.unlocked {
                    div { class: "unlock-form",
                        div { class: "form-field",
                            Label { r#for: "{input_dom_id}", "密碼" }
                            div { class: "unlock-row",
                                Input {
                                    id: input_dom_id.clone(),
                                    r#type: "password",
                                    placeholder: "輸入密碼",
                                    value: password_value,
                                    oninput: on_password_input,
                                    onkeydown: on_password_key,
                                }
                                Button { class: "btn-hero", onclick: on_unlock, "解鎖" }
                            }
                        }
                        div { class: "unlock-hint", "提示: {hint}" }
                    }
                } else if !data.items_loaded {
                    div { class: "section-loading", div { class: "spinner spinner-sm" } }
                } else if data.items.is_empty() {
                    p { class: "section-empty", "此區域暫無內容" }
                } else {
                    div { class: "section-items",
                        for item in data.items.iter() {
                            ContentRow { key: "{item.id}", item: item.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ContentRow(item: api::ItemInfo) -> Element {
    let url = item.url.clone();

    rsx! {
        div { class: "content-row",
            div { class: "content-row-main",
                h3 { "{item.title}" }
                if let Some(description) = &item.description {
                    p { class: "content-row-description", "{description}" }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                class: "btn-sm content-open",
                onclick: move |_| open_in_new_tab(&url),
                span { class: "content-open-mark", "↗" }
                span { "開啟" }
            }
        }
    }
}

fn handle_unlock(
    mut sections: Signal<Vec<SectionData>>,
    passwords: Signal<HashMap<String, String>>,
    mut toasts: Toasts,
    section_id: &str,
) {
    let attempt = passwords
        .peek()
        .get(section_id)
        .cloned()
        .unwrap_or_default();
    let outcome = submit_password(&mut sections.write(), section_id, &attempt);
    match outcome {
        UnlockOutcome::Unlocked => {
            let name = sections
                .peek()
                .iter()
                .find(|data| data.section.id == section_id)
                .map(|data| data.section.name.clone())
                .unwrap_or_default();
            toasts.success("解鎖成功", Some(format!("{name} 已解鎖！")));
        }
        UnlockOutcome::WrongPassword => {
            toasts.error("密碼錯誤", Some("請輸入正確的密碼".to_string()));
        }
        UnlockOutcome::UnknownSection => {}
    }
}

fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = url;
    }
}
