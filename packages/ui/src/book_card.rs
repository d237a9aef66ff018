//! # Book presentation
//!
//! [`BookCard`] is the catalogue tile used on the home and search pages. It shows the
//! discounted price next to the struck-through original while a promotion runs, an
//! out-of-stock badge, and the Goodreads rating as stars when one is known.
//!
//! Star slots are computed by [`star_slots`]: `floor(rating)` full stars, one half
//! star when the fractional part is at least one half, and empty stars for the rest
//! of the five slots.

use api::Book;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_regular_icons::FaStar as FaStarOutline;

use crate::cart::AddToCartButton;
use crate::config::use_config;
use crate::format::format_price;
use crate::icons::{FaStar, FaStarHalfStroke};
use crate::Icon;

pub const STAR_SLOTS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarSlots {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

pub fn star_slots(rating: f64) -> StarSlots {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, f64::from(STAR_SLOTS))
    } else {
        0.0
    };
    let full = rating.floor() as u8;
    let half = u8::from(full < STAR_SLOTS && rating - rating.floor() >= 0.5);
    StarSlots {
        full,
        half,
        empty: STAR_SLOTS - full - half,
    }
}

#[component]
pub fn StarRating(rating: f64, #[props(default = 14)] size: u32) -> Element {
    let slots = star_slots(rating);
    let label = format!("{rating:.1} / {STAR_SLOTS}");

    rsx! {
        span {
            class: "star-rating",
            title: "{label}",
            for i in 0..slots.full {
                span { key: "full-{i}", class: "star star-full",
                    Icon { icon: FaStar, width: size, height: size }
                }
            }
            if slots.half == 1 {
                span { class: "star star-half",
                    Icon { icon: FaStarHalfStroke, width: size, height: size }
                }
            }
            for i in 0..slots.empty {
                span { key: "empty-{i}", class: "star star-empty",
                    Icon { icon: FaStarOutline, width: size, height: size }
                }
            }
        }
    }
}

/// Price line: discounted and original while a promotion runs, the list price otherwise.
#[component]
pub fn PriceTag(book: Book) -> Element {
    let currency = use_config().display.currency;
    let list_price = format_price(book.price, &currency);

    match book.discounted_price() {
        Some(discounted) => {
            let discounted = format_price(discounted, &currency);
            rsx! {
                span { class: "price price-discounted", "{discounted}" }
                span { class: "price price-original", "{list_price}" }
            }
        }
        None => rsx! {
            span { class: "price", "{list_price}" }
        },
    }
}

#[component]
pub fn BookCard(book: Book) -> Element {
    let href = format!("/books/{}", book.id);
    let categories = book
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let discount = book
        .promotion
        .as_ref()
        .map(|promotion| format!("-{:.0}%", promotion.discount_percentage));

    rsx! {
        div {
            class: "book-card",
            div {
                class: "book-card-body",
                Link {
                    to: href,
                    class: "book-card-title",
                    h5 { "{book.title}" }
                }
                if let Some(publisher) = &book.publisher {
                    p { class: "book-card-publisher", "{publisher}" }
                }
                if !categories.is_empty() {
                    p { class: "book-card-categories", "{categories}" }
                }
                if let Some(rating) = book.goodreads_rating {
                    StarRating { rating }
                }
                div {
                    class: "book-card-price",
                    PriceTag { book: book.clone() }
                    if let Some(discount) = discount {
                        span { class: "badge badge-promo", "{discount}" }
                    }
                }
                if !book.in_stock {
                    span { class: "badge badge-out-of-stock", "Out of stock" }
                }
            }
            div {
                class: "book-card-footer",
                AddToCartButton {
                    book_id: book.id,
                    title: book.title.clone(),
                    price: book.effective_price(),
                    disabled: !book.in_stock,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_star() {
        assert_eq!(
            star_slots(3.5),
            StarSlots {
                full: 3,
                half: 1,
                empty: 1
            }
        );
    }

    #[test]
    fn test_whole_rating() {
        assert_eq!(
            star_slots(4.0),
            StarSlots {
                full: 4,
                half: 0,
                empty: 1
            }
        );
    }

    #[test]
    fn test_zero_rating() {
        assert_eq!(
            star_slots(0.0),
            StarSlots {
                full: 0,
                half: 0,
                empty: 5
            }
        );
    }

    #[test]
    fn test_fraction_below_half_rounds_down() {
        let slots = star_slots(3.49);
        assert_eq!((slots.full, slots.half, slots.empty), (3, 0, 2));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(star_slots(7.2).full, 5);
        assert_eq!(star_slots(-1.0).empty, 5);
        assert_eq!(star_slots(f64::NAN).empty, 5);
    }

    #[test]
    fn test_always_five_slots() {
        for tenth in 0..=50 {
            let slots = star_slots(f64::from(tenth) / 10.0);
            assert_eq!(slots.full + slots.half + slots.empty, STAR_SLOTS);
        }
    }
}
