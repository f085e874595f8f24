use dioxus::prelude::*;

#[component]
pub fn Label(
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] r#for: String,
    children: Element,
) -> Element {
    let target = r#for;

    rsx! {
        label { class: "label {class}", r#for: "{target}", {children} }
    }
}
