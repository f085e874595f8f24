use dioxus::prelude::*;

/// Shared selection for a [`Tabs`] group, provided to triggers and panes.
#[derive(Clone, Copy)]
struct ActiveTab(Signal<String>);

#[component]
pub fn Tabs(
    default_value: String,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    let active = use_signal(|| default_value.clone());
    use_context_provider(|| ActiveTab(active));

    rsx! {
        div { class: "tabs {class}", {children} }
    }
}

#[component]
pub fn TabsList(#[props(default = String::new())] class: String, children: Element) -> Element {
    rsx! {
        div { class: "tabs-list {class}", {children} }
    }
}

#[component]
pub fn TabsTrigger(
    value: String,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    let mut active = use_context::<ActiveTab>().0;
    let state_class = if active() == value { "active" } else { "" };
    let select = value.clone();

    rsx! {
        button {
            class: "tabs-trigger {state_class} {class}",
            r#type: "button",
            onclick: move |_| active.set(select.clone()),
            {children}
        }
    }
}

#[component]
pub fn TabsContent(
    value: String,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    let active = use_context::<ActiveTab>().0;
    if active() != value {
        return rsx! {};
    }

    rsx! {
        div { class: "tabs-content {class}", {children} }
    }
}
