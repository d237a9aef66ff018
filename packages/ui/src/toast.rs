//! Transient notifications.
//!
//! Every user-facing outcome (cart changes, validation failures, server errors) is
//! shown as a toast tagged with its [`NoticeLevel`]. Toasts dismiss themselves
//! after [`TOAST_LIFETIME_MS`] or when closed.

use dioxus::prelude::*;
use store::{Notice, NoticeLevel};

use crate::platform::delay;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

pub const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<ToastEntry>,
    next_id: u64,
}

impl Toasts {
    fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.entries.push(ToastEntry {
            id: self.next_id,
            notice,
        });
        self.next_id
    }

    fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a notice and schedule its removal.
pub fn notify(toasts: &mut Signal<Toasts>, notice: Notice) {
    let id = toasts.write().push(notice);
    let mut toasts = *toasts;
    spawn(async move {
        delay(TOAST_LIFETIME_MS).await;
        toasts.write().dismiss(id);
    });
}

/// Show `notice` when there is one.
pub fn notify_opt(toasts: &mut Signal<Toasts>, notice: Option<Notice>) {
    if let Some(notice) = notice {
        notify(toasts, notice);
    }
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
    }
}

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let entries = toasts().entries.clone();

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        div {
            class: "toast-stack",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: match entry.notice.level {
                        NoticeLevel::Success => "toast toast-success",
                        NoticeLevel::Error => "toast toast-error",
                        NoticeLevel::Warning => "toast toast-warning",
                        NoticeLevel::Info => "toast toast-info",
                    },
                    role: "status",
                    div {
                        class: "toast-header",
                        strong { "{entry.notice.title}" }
                        button {
                            class: "toast-close",
                            "aria-label": "Close",
                            onclick: move |_| toasts.write().dismiss(entry.id),
                            "×"
                        }
                    }
                    div { class: "toast-body", "{entry.notice.message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_stack_in_order() {
        let mut toasts = Toasts::default();
        let cleared = toasts.push(Notice::info("Cart cleared", "All items were removed."));
        let placed = toasts.push(Notice::success("Order placed", "Order #7 was placed."));

        let titles: Vec<&str> = toasts
            .entries
            .iter()
            .map(|entry| entry.notice.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Cart cleared", "Order placed"]);
        assert_ne!(cleared, placed);

        toasts.dismiss(cleared);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].notice.level, NoticeLevel::Success);
    }
}
