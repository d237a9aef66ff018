use api::{keyword_path, list_books};
use dioxus::prelude::*;
use ui::use_client;

use super::BookGrid;

#[component]
pub fn Home() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut keyword = use_signal(String::new);

    let books = use_resource(move || {
        let client = client.clone();
        async move {
            list_books(&client, "")
                .await
                .map_err(|e| e.user_message("Could not load books"))
        }
    });

    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();
        nav.push(keyword_path(&keyword()));
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Bookstore" }
            form {
                class: "search-form",
                onsubmit: on_search,
                input {
                    r#type: "search",
                    placeholder: "Title, author or ISBN",
                    value: "{keyword}",
                    oninput: move |evt| keyword.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Search" }
            }
        }
        BookGrid { books: books.cloned() }
    }
}
