//! # Catalogue records
//!
//! Books are supplied by the server and only ever rendered on the client.
//! [`Book`] is an entry of `GET /api/books`; [`BookDetail`] is the body of
//! `GET /api/books/{id}` and embeds the same fields plus the long-form metadata
//! and the review list.

use serde::{Deserialize, Serialize};

/// Active promotion on a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub discount_percentage: f64,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// Book as listed in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub publisher: Option<String>,
    pub in_stock: bool,
    #[serde(default)]
    pub stock_count: Option<u32>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub goodreads_rating: Option<f64>,
    #[serde(default)]
    pub promotion: Option<Promotion>,
}

impl Book {
    /// Price after the promotion discount, if a promotion is running.
    pub fn discounted_price(&self) -> Option<f64> {
        self.promotion
            .as_ref()
            .map(|promo| self.price * (1.0 - promo.discount_percentage / 100.0))
    }

    /// The price a buyer pays right now.
    pub fn effective_price(&self) -> f64 {
        self.discounted_price().unwrap_or(self.price)
    }
}

/// A review shown under a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewInfo {
    pub id: u64,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub user: String,
    pub created_at: String,
}

/// Full book page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetail {
    #[serde(flatten)]
    pub book: Book,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub translator: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub cover_type: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reviews: Vec<ReviewInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(promotion: Option<f64>) -> Book {
        Book {
            id: 1,
            title: "Pod igoto".to_string(),
            price: 40.0,
            publisher: None,
            in_stock: true,
            stock_count: None,
            categories: Vec::new(),
            goodreads_rating: None,
            promotion: promotion.map(|pct| Promotion {
                discount_percentage: pct,
                end_date: None,
                description: None,
            }),
        }
    }

    #[test]
    fn test_discounted_price() {
        assert_eq!(book(Some(25.0)).discounted_price(), Some(30.0));
        assert_eq!(book(Some(25.0)).effective_price(), 30.0);
        assert_eq!(book(None).discounted_price(), None);
        assert_eq!(book(None).effective_price(), 40.0);
    }

    #[test]
    fn test_parse_list_entry() {
        let book: Book = serde_json::from_str(
            r#"{"id":9,"title":"Tyutyun","publisher":"Ciela","price":18.5,"in_stock":false,
                "stock_count":0,"categories":[{"id":2,"name":"Classics"}],
                "goodreads_rating":4.2,
                "promotion":{"discount_percentage":10,"end_date":"2026-12-01T00:00:00"},
                "discounted_price":16.65}"#,
        )
        .unwrap();
        assert!(!book.in_stock);
        assert_eq!(book.categories[0].name, "Classics");
        assert_eq!(book.promotion.as_ref().map(|p| p.discount_percentage), Some(10.0));
    }

    #[test]
    fn test_parse_detail_with_reviews() {
        let detail: BookDetail = serde_json::from_str(
            r#"{"id":9,"title":"Tyutyun","publisher":"Ciela","price":18.5,"in_stock":true,
                "isbn":"978-954-28-0000-0","pages":420,"description":"A novel.",
                "reviews":[{"id":1,"rating":5,"comment":"Great","user":"ana",
                            "created_at":"2026-01-02T10:00:00"}]}"#,
        )
        .unwrap();
        assert_eq!(detail.book.id, 9);
        assert_eq!(detail.pages, Some(420));
        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.reviews[0].user, "ana");
    }
}
