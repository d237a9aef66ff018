use api::models::ReviewInfo;
use api::{get_book, submit_review, ReviewForm};
use dioxus::prelude::*;
use store::Notice;
use ui::{
    delay, format_date, notify, reload_page, use_client, use_config, use_session, use_toasts,
    AddToCartButton, GuestOnly, PriceTag, StarRating,
};

#[component]
pub fn BookPage(id: u64) -> Element {
    let client = use_client();
    let mut quantity = use_signal(|| 1u32);

    let book = use_resource(use_reactive!(|(id,)| {
        let client = client.clone();
        async move { get_book(&client, id).await }
    }));

    let detail = match &*book.read() {
        None => {
            return rsx! {
                p { class: "loading", "Loading..." }
            }
        }
        Some(Err(e)) => {
            let message = e.user_message("Could not load this book");
            return rsx! {
                div { class: "alert alert-error", "{message}" }
            };
        }
        Some(Ok(detail)) => detail.clone(),
    };

    let facts: Vec<(&str, String)> = [
        ("Original title", detail.original_title.clone()),
        ("Publisher", detail.book.publisher.clone()),
        ("Translator", detail.translator.clone()),
        ("Pages", detail.pages.map(|pages| pages.to_string())),
        ("Cover", detail.cover_type.clone()),
        ("Language", detail.language.clone()),
        ("ISBN", detail.isbn.clone()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|value| (label, value)))
    .collect();

    rsx! {
        article {
            class: "book-detail",
            h1 { "{detail.book.title}" }
            if let Some(rating) = detail.book.goodreads_rating {
                StarRating { rating, size: 18 }
            }
            div {
                class: "book-detail-price",
                PriceTag { book: detail.book.clone() }
            }
            if detail.book.in_stock {
                div {
                    class: "book-detail-buy",
                    input {
                        r#type: "number",
                        min: "1",
                        class: "quantity-input",
                        value: "{quantity}",
                        oninput: move |evt| {
                            quantity.set(evt.value().trim().parse::<u32>().unwrap_or(1).max(1));
                        },
                    }
                    AddToCartButton {
                        book_id: detail.book.id,
                        title: detail.book.title.clone(),
                        price: detail.book.effective_price(),
                        quantity: quantity(),
                    }
                }
            } else {
                span { class: "badge badge-out-of-stock", "Out of stock" }
            }

            dl {
                class: "book-facts",
                for (label, value) in facts {
                    div {
                        key: "{label}",
                        class: "book-fact",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }

            if let Some(description) = &detail.description {
                p { class: "book-description", "{description}" }
            }
        }

        section {
            class: "reviews",
            h2 { "Reviews" }
            if detail.reviews.is_empty() {
                p { class: "empty-state", "No reviews yet." }
            }
            for review in detail.reviews.clone() {
                ReviewItem { key: "{review.id}", review }
            }
            ReviewFormView { book_id: id }
        }
    }
}

#[component]
fn ReviewItem(review: ReviewInfo) -> Element {
    let posted = format_date(&review.created_at);

    rsx! {
        div {
            class: "review",
            div {
                class: "review-header",
                strong { "{review.user}" }
                StarRating { rating: f64::from(review.rating) }
                span { class: "review-date", "{posted}" }
            }
            if let Some(comment) = &review.comment {
                p { "{comment}" }
            }
        }
    }
}

#[component]
fn ReviewFormView(book_id: u64) -> Element {
    let client = use_client();
    let config = use_config();
    let session = use_session();
    let mut toasts = use_toasts();
    let mut form = use_signal(ReviewForm::default);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let client = client.clone();
        let reload_delay = config.checkout.redirect_delay_ms;
        async move {
            let review = form();
            submitting.set(true);
            match submit_review(&client, session().is_signed_in(), book_id, &review).await {
                Ok(receipt) => {
                    let message = receipt
                        .message
                        .unwrap_or_else(|| "Thank you for your review.".to_string());
                    notify(&mut toasts, Notice::success("Review added", message));
                    delay(reload_delay).await;
                    reload_page();
                }
                Err(e) => {
                    tracing::warn!("Review submission failed: {}", e);
                    notify(&mut toasts, e.notice("Review failed", "Could not add the review"));
                }
            }
            submitting.set(false);
        }
    };

    let rating = form.read().rating;
    let comment = form.read().comment.clone();

    rsx! {
        form {
            class: "review-form",
            onsubmit: onsubmit,
            h3 { "Write a review" }
            GuestOnly {
                p { class: "hint", "Sign in to leave a review." }
            }
            label { r#for: "reviewRating", "Rating" }
            select {
                id: "reviewRating",
                value: "{rating}",
                onchange: move |evt| {
                    form.write().rating = evt.value().parse().unwrap_or(5);
                },
                for stars in (1..=5u8).rev() {
                    option { key: "{stars}", value: "{stars}", "{stars}" }
                }
            }
            label { r#for: "reviewComment", "Comment" }
            textarea {
                id: "reviewComment",
                rows: "4",
                value: "{comment}",
                oninput: move |evt| form.write().comment = evt.value(),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                "Submit review"
            }
        }
    }
}
