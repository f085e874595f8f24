//! Admin panel for users, content sections and items.

use api::{AdminSection, AdminUser, ItemInfo, UserRole};
use dioxus::prelude::*;
use ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Input, Label, ModalOverlay, Switch, Tabs, TabsContent, TabsList, TabsTrigger,
    Textarea,
};
use ui::{use_auth, use_toast, Toasts};

use crate::Route;

#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let state = auth.state;
    let nav = use_navigator();
    let toasts = use_toast();

    let users = use_signal(Vec::<AdminUser>::new);
    let admin_sections = use_signal(Vec::<AdminSection>::new);
    let mut items = use_signal(Vec::<ItemInfo>::new);
    let mut selected_section = use_signal(|| None::<String>);

    let mut section_dialog = use_signal(|| false);
    let mut editing_section = use_signal(|| None::<AdminSection>);
    let mut item_dialog = use_signal(|| false);
    let mut editing_item = use_signal(|| None::<ItemInfo>);
    let mut confirm_delete_section = use_signal(|| None::<String>);
    let mut confirm_delete_item = use_signal(|| None::<String>);

    let mut section_name = use_signal(String::new);
    let mut section_password = use_signal(String::new);
    let mut section_visible = use_signal(|| true);
    let mut item_title = use_signal(String::new);
    let mut item_description = use_signal(String::new);
    let mut item_url = use_signal(String::new);

    // Load users and sections once the admin role is confirmed
    let is_admin = use_memo(move || state().is_admin());
    use_effect(move || {
        if is_admin() {
            spawn(async move { load_users(users, toasts).await });
            spawn(async move { load_sections(admin_sections, toasts).await });
        }
    });

    // Items follow the selected section
    use_effect(move || {
        if let Some(id) = selected_section() {
            spawn(async move { load_items(id, items, toasts).await });
        }
    });

    // Non-admins land back on the home page
    if !state().loading && !state().is_admin() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    if state().loading {
        return rsx! {
            div { class: "page-loading", "載入中..." }
        };
    }

    let my_id = state().user.map(|user| user.id);

    let on_toggle_role = move |(id, role): (String, UserRole)| {
        spawn(async move { change_role(id, role, users, toasts).await });
    };

    let on_select_section = move |id: String| {
        if selected_section.peek().as_deref() != Some(id.as_str()) {
            selected_section.set(Some(id));
        }
    };

    let open_create_section = move |_| {
        editing_section.set(None);
        section_name.set(String::new());
        section_password.set(String::new());
        section_visible.set(true);
        section_dialog.set(true);
    };

    let on_edit_section = move |section: AdminSection| {
        section_name.set(section.name.clone());
        section_password.set(String::new());
        section_visible.set(section.is_visible);
        editing_section.set(Some(section));
        section_dialog.set(true);
    };

    let mut save_toasts = toasts;
    let on_save_section = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let name = section_name.peek().clone();
            let visible = *section_visible.peek();
            let password = section_password.peek().clone();
            let editing = editing_section.peek().clone();

            let saved_id = if let Some(section) = editing {
                match api::update_section(section.id.clone(), name, visible).await {
                    Ok(()) => {
                        save_toasts.success("專區已更新", None);
                        Some(section.id)
                    }
                    Err(e) => {
                        save_toasts.error("操作失敗", Some(e.to_string()));
                        None
                    }
                }
            } else {
                match api::create_section(name, visible).await {
                    Ok(section) => {
                        save_toasts.success("專區已新增", None);
                        Some(section.id)
                    }
                    Err(e) => {
                        save_toasts.error("操作失敗", Some(e.to_string()));
                        None
                    }
                }
            };

            let Some(section_id) = saved_id else { return };

            if !password.is_empty()
                && api::set_section_secret(section_id, password).await.is_err()
            {
                save_toasts.error("密碼設定失敗", Some("專區已保存但密碼設定失敗".to_string()));
            }

            section_dialog.set(false);
            editing_section.set(None);
            load_sections(admin_sections, toasts).await;
        });
    };

    let open_create_item = move |_| {
        editing_item.set(None);
        item_title.set(String::new());
        item_description.set(String::new());
        item_url.set(String::new());
        item_dialog.set(true);
    };

    let on_edit_item = move |item: ItemInfo| {
        item_title.set(item.title.clone());
        item_description.set(item.description.clone().unwrap_or_default());
        item_url.set(item.url.clone());
        editing_item.set(Some(item));
        item_dialog.set(true);
    };

    let mut item_toasts = toasts;
    let on_save_item = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(section_id) = selected_section.peek().clone() else {
                return;
            };
            let title = item_title.peek().clone();
            let description = {
                let text = item_description.peek().clone();
                if text.is_empty() { None } else { Some(text) }
            };
            let url = item_url.peek().clone();
            let editing = editing_item.peek().clone();

            let result = if let Some(item) = editing {
                api::update_item(item.id, title, description, url)
                    .await
                    .map(|_| "內容已更新")
            } else {
                let order_index = items.peek().len() as i32;
                api::create_item(section_id.clone(), title, description, url, order_index)
                    .await
                    .map(|_| "內容已新增")
            };

            match result {
                Ok(message) => {
                    item_toasts.success(message, None);
                    item_dialog.set(false);
                    editing_item.set(None);
                    load_items(section_id, items, toasts).await;
                }
                Err(e) => item_toasts.error("操作失敗", Some(e.to_string())),
            }
        });
    };

    let mut delete_toasts = toasts;
    let on_confirm_delete_section = move |_| {
        let Some(id) = confirm_delete_section.peek().clone() else {
            return;
        };
        confirm_delete_section.set(None);
        spawn(async move {
            match api::delete_section(id.clone()).await {
                Ok(()) => {
                    delete_toasts.success("專區已刪除", None);
                    if selected_section.peek().as_deref() == Some(id.as_str()) {
                        selected_section.set(None);
                        items.set(Vec::new());
                    }
                    load_sections(admin_sections, toasts).await;
                }
                Err(e) => delete_toasts.error("刪除失敗", Some(e.to_string())),
            }
        });
    };

    let mut delete_item_toasts = toasts;
    let on_confirm_delete_item = move |_| {
        let Some(id) = confirm_delete_item.peek().clone() else {
            return;
        };
        confirm_delete_item.set(None);
        spawn(async move {
            match api::delete_item(id).await {
                Ok(()) => {
                    delete_item_toasts.success("內容已刪除", None);
                    if let Some(section_id) = selected_section.peek().clone() {
                        load_items(section_id, items, toasts).await;
                    }
                }
                Err(e) => delete_item_toasts.error("刪除失敗", Some(e.to_string())),
            }
        });
    };

    let user_list = users();
    let section_list = admin_sections();
    let item_list = items();
    let selection = selected_section();

    let editing_section_now = editing_section().is_some();
    let section_dialog_title = if editing_section_now { "編輯專區" } else { "新增專區" };
    let section_submit_label = if editing_section_now { "更新" } else { "新增" };
    let editing_item_now = editing_item().is_some();
    let item_dialog_title = if editing_item_now { "編輯內容" } else { "新增內容" };
    let item_submit_label = if editing_item_now { "更新" } else { "新增" };
    let items_description = if selection.is_some() {
        "管理選中專區的內容"
    } else {
        "請先選擇一個專區"
    };

    rsx! {
        div { class: "admin",
            div { class: "admin-body",
                div { class: "admin-heading",
                    h1 { class: "text-gradient", "管理員面板" }
                    p { "管理用戶和內容專區" }
                }

                Tabs { default_value: "users".to_string(), class: "admin-tabs",
                    TabsList {
                        TabsTrigger { value: "users".to_string(), "用戶管理" }
                        TabsTrigger { value: "content".to_string(), "內容管理" }
                    }

                    TabsContent { value: "users".to_string(),
                        Card {
                            CardHeader {
                                CardTitle { "用戶管理" }
                                CardDescription { "管理所有用戶的角色和權限" }
                            }
                            CardContent {
                                table { class: "admin-table",
                                    thead {
                                        tr {
                                            th { "電子郵件" }
                                            th { "顯示名稱" }
                                            th { "角色" }
                                            th { "註冊時間" }
                                            th { "操作" }
                                        }
                                    }
                                    tbody {
                                        for user in user_list.iter() {
                                            UserRow {
                                                key: "{user.id}",
                                                user: user.clone(),
                                                is_self: Some(user.id.as_str()) == my_id.as_deref(),
                                                on_toggle_role,
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    TabsContent { value: "content".to_string(),
                        div { class: "admin-content-grid",
                            Card {
                                CardHeader { class: "admin-card-header",
                                    div {
                                        CardTitle { "內容專區" }
                                        CardDescription { "管理所有內容專區" }
                                    }
                                    Button { onclick: open_create_section, "新增專區" }
                                }
                                CardContent {
                                    div { class: "admin-section-list",
                                        for section in section_list.iter() {
                                            SectionRow {
                                                key: "{section.id}",
                                                section: section.clone(),
                                                selected: selection.as_deref() == Some(section.id.as_str()),
                                                on_select: on_select_section,
                                                on_edit: on_edit_section,
                                                on_delete: move |id: String| confirm_delete_section.set(Some(id)),
                                            }
                                        }
                                    }
                                }
                            }

                            Card {
                                CardHeader { class: "admin-card-header",
                                    div {
                                        CardTitle { "內容項目" }
                                        CardDescription { "{items_description}" }
                                    }
                                    if selection.is_some() {
                                        Button { onclick: open_create_item, "新增內容" }
                                    }
                                }
                                CardContent {
                                    if selection.is_none() {
                                        p { class: "admin-empty", "請先選擇一個專區以查看內容" }
                                    } else if item_list.is_empty() {
                                        p { class: "admin-empty", "此專區暫無內容" }
                                    } else {
                                        div { class: "admin-item-list",
                                            for item in item_list.iter() {
                                                ItemRow {
                                                    key: "{item.id}",
                                                    item: item.clone(),
                                                    on_edit: on_edit_item,
                                                    on_delete: move |id: String| confirm_delete_item.set(Some(id)),
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if section_dialog() {
                ModalOverlay { on_close: move |_| section_dialog.set(false),
                    h3 { class: "modal-title", "{section_dialog_title}" }
                    form { onsubmit: on_save_section,
                        div { class: "form-field",
                            Label { r#for: "section-name", "專區名稱" }
                            Input {
                                id: "section-name",
                                required: true,
                                value: section_name(),
                                oninput: move |evt: FormEvent| section_name.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            Label { r#for: "section-password", "專區密碼（選填）" }
                            Input {
                                id: "section-password",
                                r#type: "password",
                                placeholder: "設定專區解鎖密碼",
                                value: section_password(),
                                oninput: move |evt: FormEvent| section_password.set(evt.value()),
                            }
                            p { class: "form-hint", "留空表示不需要密碼即可查看此專區" }
                        }
                        div { class: "form-field form-field-row",
                            Switch {
                                id: "section-visible",
                                checked: section_visible(),
                                onchange: move |checked: bool| section_visible.set(checked),
                            }
                            Label { r#for: "section-visible", "公開顯示" }
                        }
                        div { class: "modal-actions",
                            Button { r#type: "submit", "{section_submit_label}" }
                        }
                    }
                }
            }

            if item_dialog() {
                ModalOverlay { on_close: move |_| item_dialog.set(false),
                    h3 { class: "modal-title", "{item_dialog_title}" }
                    form { onsubmit: on_save_item,
                        div { class: "form-field",
                            Label { r#for: "item-title", "標題" }
                            Input {
                                id: "item-title",
                                required: true,
                                value: item_title(),
                                oninput: move |evt: FormEvent| item_title.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            Label { r#for: "item-description", "描述" }
                            Textarea {
                                id: "item-description",
                                rows: 3,
                                value: item_description(),
                                oninput: move |evt: FormEvent| item_description.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            Label { r#for: "item-url", "連結" }
                            Input {
                                id: "item-url",
                                r#type: "url",
                                required: true,
                                value: item_url(),
                                oninput: move |evt: FormEvent| item_url.set(evt.value()),
                            }
                        }
                        div { class: "modal-actions",
                            Button { r#type: "submit", "{item_submit_label}" }
                        }
                    }
                }
            }

            if confirm_delete_section().is_some() {
                ModalOverlay { on_close: move |_| confirm_delete_section.set(None),
                    p { class: "confirm-text", "確定要刪除此專區嗎？這將同時刪除所有相關內容。" }
                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| confirm_delete_section.set(None),
                            "取消"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: on_confirm_delete_section,
                            "刪除"
                        }
                    }
                }
            }

            if confirm_delete_item().is_some() {
                ModalOverlay { on_close: move |_| confirm_delete_item.set(None),
                    p { class: "confirm-text", "確定要刪除此內容嗎？" }
                    div { class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| confirm_delete_item.set(None),
                            "取消"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: on_confirm_delete_item,
                            "刪除"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserRow(user: AdminUser, is_self: bool, on_toggle_role: EventHandler<(String, UserRole)>) -> Element {
    let registered = user
        .created_at
        .split('T')
        .next()
        .unwrap_or_default()
        .to_string();
    let display = user
        .display_name
        .clone()
        .unwrap_or_else(|| "未設定".to_string());
    let variant = if user.role == UserRole::Admin {
        BadgeVariant::Primary
    } else {
        BadgeVariant::Secondary
    };
    let label = user.role.label();
    let toggle = (user.id.clone(), user.role);
    let toggle_label = match user.role {
        UserRole::Admin => "降為會員",
        UserRole::Member => "升為管理員",
    };

    rsx! {
        tr {
            td { "{user.email}" }
            td { "{display}" }
            td {
                Badge { variant, "{label}" }
            }
            td { "{registered}" }
            td {
                if !is_self {
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "btn-sm",
                        onclick: move |_| on_toggle_role.call(toggle.clone()),
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn SectionRow(
    section: AdminSection,
    selected: bool,
    on_select: EventHandler<String>,
    on_edit: EventHandler<AdminSection>,
    on_delete: EventHandler<String>,
) -> Element {
    let row_class = if selected {
        "admin-section-row selected"
    } else {
        "admin-section-row"
    };
    let eye = if section.is_visible { "👁" } else { "🙈" };
    let select_id = section.id.clone();
    let delete_id = section.id.clone();
    let edit_section = section.clone();

    rsx! {
        div { class: "{row_class}", onclick: move |_| on_select.call(select_id.clone()),
            div { class: "admin-section-main",
                span { class: "admin-section-eye", "{eye}" }
                span { class: "admin-section-name", "{section.name}" }
                Badge { variant: BadgeVariant::Outline, "{section.items_count} 項目" }
            }
            div { class: "admin-section-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "btn-sm",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_edit.call(edit_section.clone());
                    },
                    "✏️"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "btn-sm",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_delete.call(delete_id.clone());
                    },
                    "🗑"
                }
            }
        }
    }
}

#[component]
fn ItemRow(item: ItemInfo, on_edit: EventHandler<ItemInfo>, on_delete: EventHandler<String>) -> Element {
    let edit_item = item.clone();
    let delete_id = item.id.clone();

    rsx! {
        div { class: "admin-item-row",
            div { class: "admin-item-main",
                h4 { "{item.title}" }
                if let Some(description) = &item.description {
                    p { class: "admin-item-description", "{description}" }
                }
                a {
                    class: "admin-item-url",
                    href: "{item.url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{item.url}"
                }
            }
            div { class: "admin-item-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "btn-sm",
                    onclick: move |_| on_edit.call(edit_item.clone()),
                    "✏️"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "btn-sm",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "🗑"
                }
            }
        }
    }
}

async fn load_users(mut users: Signal<Vec<AdminUser>>, mut toasts: Toasts) {
    match api::list_users().await {
        Ok(list) => users.set(list),
        Err(e) => toasts.error("載入用戶失敗", Some(e.to_string())),
    }
}

async fn load_sections(mut sections: Signal<Vec<AdminSection>>, mut toasts: Toasts) {
    match api::list_sections_admin().await {
        Ok(list) => sections.set(list),
        Err(e) => toasts.error("載入專區失敗", Some(e.to_string())),
    }
}

async fn load_items(section_id: String, mut items: Signal<Vec<ItemInfo>>, mut toasts: Toasts) {
    match api::list_section_items(section_id).await {
        Ok(list) => items.set(list),
        Err(e) => toasts.error("載入內容失敗", Some(e.to_string())),
    }
}

async fn change_role(
    user_id: String,
    current: UserRole,
    users: Signal<Vec<AdminUser>>,
    mut toasts: Toasts,
) {
    let next = match current {
        UserRole::Admin => UserRole::Member,
        UserRole::Member => UserRole::Admin,
    };
    match api::update_user_role(user_id, next).await {
        Ok(()) => {
            toasts.success("用戶角色已更新", Some(format!("已成功更改為{}", next.label())));
            load_users(users, toasts).await;
        }
        Err(e) => toasts.error("更新失敗", Some(e.to_string())),
    }
}
