use api::Book;
use dioxus::prelude::*;
use ui::BookCard;

/// Catalogue grid shared by the home and search pages.
#[component]
pub fn BookGrid(books: Option<Result<Vec<Book>, String>>) -> Element {
    match books {
        None => rsx! {
            p { class: "loading", "Loading books..." }
        },
        Some(Err(message)) => rsx! {
            div { class: "alert alert-error", "{message}" }
        },
        Some(Ok(books)) if books.is_empty() => rsx! {
            p { class: "empty-state", "No books match your search." }
        },
        Some(Ok(books)) => rsx! {
            div {
                class: "book-grid",
                for book in books {
                    BookCard { key: "{book.id}", book }
                }
            }
        },
    }
}
