use dioxus::prelude::*;

/// Dimmed backdrop with a centered dialog card. Clicking the backdrop
/// closes the dialog; clicks inside the card do not.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                {children}
            }
        }
    }
}
