use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no question. `on_result` receives `true` for confirm and `false` for cancel or
/// a click outside the card.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    on_result: EventHandler<bool>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_result.call(false),
            div {
                class: "modal-header",
                h5 { "{title}" }
            }
            div {
                class: "modal-body",
                p { "{message}" }
            }
            div {
                class: "modal-footer",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_result.call(false),
                    "Cancel"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_result.call(true),
                    "{confirm_label}"
                }
            }
        }
    }
}
