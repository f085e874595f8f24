use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = false)] required: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(default)] onkeydown: EventHandler<KeyboardEvent>,
) -> Element {
    let kind = r#type;

    rsx! {
        input {
            class: "input {class}",
            id: "{id}",
            r#type: "{kind}",
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            oninput: move |evt| oninput.call(evt),
            onkeydown: move |evt| onkeydown.call(evt),
        }
    }
}
