use dioxus::prelude::*;

#[component]
pub fn Textarea(
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = 3)] rows: i64,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            class: "textarea {class}",
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows,
            oninput: move |evt| oninput.call(evt),
        }
    }
}
