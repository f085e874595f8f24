use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Handle for raising transient notifications from anywhere in the app.
///
/// Obtain it with [`use_toast`]. Every toast dismisses itself a few
/// seconds after it is raised.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

pub fn use_toast() -> Toasts {
    use_context::<Toasts>()
}

impl Toasts {
    pub fn success(&mut self, title: &str, description: Option<String>) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&mut self, title: &str, description: Option<String>) {
        self.push(ToastKind::Error, title, description);
    }

    pub(crate) fn push(&mut self, kind: ToastKind, title: &str, description: Option<String>) {
        let id = self.next_id.peek().wrapping_add(1);
        self.next_id.set(id);
        self.entries.write().push(Toast {
            id,
            kind,
            title: title.to_string(),
            description,
        });

        let mut entries = self.entries;
        spawn(async move {
            dismiss_delay().await;
            entries.write().retain(|toast| toast.id != id);
        });
    }
}

async fn dismiss_delay() {
    let duration = std::time::Duration::from_secs(4);
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Provides the [`Toasts`] context and renders the stacked toast cards
/// in a corner of the viewport.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Toasts {
        entries: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });
    let entries = toasts.entries;

    rsx! {
        {children}
        div { class: "toast-host",
            for toast in entries() {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let kind_class = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    rsx! {
        div { class: "toast {kind_class}",
            p { class: "toast-title", "{toast.title}" }
            if let Some(description) = &toast.description {
                p { class: "toast-description", "{description}" }
            }
        }
    }
}
