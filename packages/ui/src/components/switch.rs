use dioxus::prelude::*;

#[component]
pub fn Switch(
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] id: String,
    checked: bool,
    #[props(default)] onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        label { class: "switch {class}",
            input {
                r#type: "checkbox",
                id: "{id}",
                checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            span { class: "switch-track" }
        }
    }
}
