//! # Search filter → URL
//!
//! The search page keeps its state in the query string. Applying the filter form
//! takes the current query, overlays each control (set when it has a value, deleted
//! when empty or unchecked) and navigates to `/search?<result>`. Parameters the form
//! does not own, such as `search`, are kept where they were.
//!
//! | Control | Parameter | Value |
//! |---------|-----------|-------|
//! | category | `category_id` | as entered |
//! | min price | `min_price` | as entered |
//! | max price | `max_price` | as entered |
//! | in stock | `in_stock` | `true` when checked |
//! | sort field | `sort_by` | as entered |
//! | sort direction | `sort_desc` | `true` for descending, `false` otherwise |
//!
//! `GET /api/books` only filters by keyword, category and stock, so the price bounds
//! and the ordering are applied to the returned list by [`SearchFilters::filter_and_sort`].

use std::cmp::Ordering;

use url::form_urlencoded;

use crate::models::Book;

const DEFAULT_SORT: &str = "title";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Read the sort-direction control. Empty means "not set".
    pub fn from_control(value: &str) -> Option<Self> {
        match value.trim() {
            "" => None,
            "desc" => Some(SortOrder::Desc),
            _ => Some(SortOrder::Asc),
        }
    }

    pub fn control_value(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Current values of the filter controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub category_id: String,
    pub min_price: String,
    pub max_price: String,
    pub in_stock: bool,
    pub sort_by: String,
    pub sort_order: Option<SortOrder>,
}

impl SearchFilters {
    /// Pre-fill the controls from an existing query string.
    pub fn from_query(query: &str) -> Self {
        let mut filters = Self::default();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match key.as_ref() {
                "category_id" => filters.category_id = value.into_owned(),
                "min_price" => filters.min_price = value.into_owned(),
                "max_price" => filters.max_price = value.into_owned(),
                "in_stock" => filters.in_stock = value == "true",
                "sort_by" => filters.sort_by = value.into_owned(),
                "sort_desc" => {
                    filters.sort_order = Some(if value == "true" {
                        SortOrder::Desc
                    } else {
                        SortOrder::Asc
                    })
                }
                _ => {}
            }
        }
        filters
    }

    /// Overlay the controls onto `existing` and return the new query string.
    pub fn apply(&self, existing: &str) -> String {
        let mut params: Vec<(String, String)> =
            form_urlencoded::parse(existing.trim_start_matches('?').as_bytes())
                .into_owned()
                .collect();

        overlay(&mut params, "category_id", non_empty(&self.category_id));
        overlay(&mut params, "min_price", non_empty(&self.min_price));
        overlay(&mut params, "max_price", non_empty(&self.max_price));
        overlay(&mut params, "in_stock", self.in_stock.then(|| "true".to_string()));
        overlay(&mut params, "sort_by", non_empty(&self.sort_by));
        overlay(
            &mut params,
            "sort_desc",
            self.sort_order
                .map(|order| (order == SortOrder::Desc).to_string()),
        );

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish()
    }

    /// Drop books outside the price bounds and order the rest by `sort_by`.
    ///
    /// Bounds compare against the list price and are ignored when they do not parse.
    /// An empty or unknown sort field sorts by title.
    pub fn filter_and_sort(&self, books: &mut Vec<Book>) {
        let min = parse_price(&self.min_price);
        let max = parse_price(&self.max_price);
        books.retain(|book| {
            min.map_or(true, |min| book.price >= min) && max.map_or(true, |max| book.price <= max)
        });

        let field = non_empty(&self.sort_by).unwrap_or_else(|| DEFAULT_SORT.to_string());
        let descending = self.sort_order == Some(SortOrder::Desc);
        books.sort_by(|a, b| {
            let ordering = compare_by(&field, a, b);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    /// Path to navigate to after applying the filters.
    pub fn search_path(&self, existing: &str) -> String {
        format!("/search?{}", self.apply(existing))
    }
}

/// Search page for a free-text query entered outside the filter form.
pub fn keyword_path(keyword: &str) -> String {
    match non_empty(keyword) {
        Some(keyword) => format!(
            "/search?{}",
            form_urlencoded::Serializer::new(String::new())
                .append_pair("search", &keyword)
                .finish()
        ),
        None => "/search".to_string(),
    }
}

fn parse_price(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|price| price.is_finite())
}

fn compare_by(field: &str, a: &Book, b: &Book) -> Ordering {
    match field {
        "price" => a.price.total_cmp(&b.price),
        // Unrated books sort first, like NULLs
        "goodreads_rating" => match (a.goodreads_rating, b.goodreads_rating) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (x, y) => x.is_some().cmp(&y.is_some()),
        },
        _ => a.title.cmp(&b.title),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Set `key` in place of its first occurrence (dropping the rest), append it when
/// absent, or delete every occurrence when `value` is `None`.
fn overlay(params: &mut Vec<(String, String)>, key: &str, value: Option<String>) {
    let first = params.iter().position(|(k, _)| k == key);
    match (value, first) {
        (Some(value), Some(index)) => {
            params[index].1 = value;
            let mut seen = 0;
            params.retain(|(k, _)| {
                if k != key {
                    return true;
                }
                seen += 1;
                seen == 1
            });
        }
        (Some(value), None) => params.push((key.to_string(), value)),
        (None, _) => params.retain(|(k, _)| k != key),
    }
}
