//! Search results with the filter sidebar. Applying the filters only rewrites the
//! URL; the results and the controls both follow from the new query.

use api::{list_books, list_categories, SearchFilters, SortOrder};
use dioxus::prelude::*;
use ui::use_client;

use super::BookGrid;

const SORT_FIELDS: [(&str, &str); 4] = [
    ("", "Relevance"),
    ("price", "Price"),
    ("title", "Title"),
    ("goodreads_rating", "Rating"),
];

#[component]
pub fn Search(query: String) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut filters = use_signal(|| SearchFilters::from_query(&query));

    // Back/forward and the navbar link change the query without remounting
    use_effect({
        let query = query.clone();
        use_reactive!(|(query,)| {
            filters.set(SearchFilters::from_query(&query));
        })
    });

    let categories = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { list_categories(&client).await.unwrap_or_default() }
        }
    });

    let books = use_resource({
        let query = query.clone();
        use_reactive!(|(query,)| {
            let client = client.clone();
            async move {
                let mut found = list_books(&client, &query)
                    .await
                    .map_err(|e| e.user_message("Could not load books"))?;
                SearchFilters::from_query(&query).filter_and_sort(&mut found);
                Ok::<_, String>(found)
            }
        })
    });

    let apply = {
        let query = query.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            let path = filters.read().search_path(&query);
            tracing::debug!("Applying search filters: {}", path);
            nav.push(path);
        }
    };

    let current = filters();
    let sort_direction = current
        .sort_order
        .map(SortOrder::control_value)
        .unwrap_or_default();

    rsx! {
        div {
            class: "search-layout",
            form {
                class: "filters",
                onsubmit: apply,
                h5 { "Filters" }

                label { r#for: "categoryFilter", "Category" }
                select {
                    id: "categoryFilter",
                    value: "{current.category_id}",
                    onchange: move |evt| filters.write().category_id = evt.value(),
                    option { value: "", "All categories" }
                    for category in categories.cloned().unwrap_or_default() {
                        option {
                            key: "{category.id}",
                            value: "{category.id}",
                            selected: current.category_id == category.id.to_string(),
                            "{category.name}"
                        }
                    }
                }

                label { r#for: "priceMinFilter", "Price from" }
                input {
                    id: "priceMinFilter",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    value: "{current.min_price}",
                    oninput: move |evt| filters.write().min_price = evt.value(),
                }

                label { r#for: "priceMaxFilter", "Price to" }
                input {
                    id: "priceMaxFilter",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    value: "{current.max_price}",
                    oninput: move |evt| filters.write().max_price = evt.value(),
                }

                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: current.in_stock,
                        onchange: move |evt| filters.write().in_stock = evt.checked(),
                    }
                    "In stock only"
                }

                label { r#for: "sortByFilter", "Sort by" }
                select {
                    id: "sortByFilter",
                    value: "{current.sort_by}",
                    onchange: move |evt| filters.write().sort_by = evt.value(),
                    for (value, label) in SORT_FIELDS {
                        option {
                            key: "{value}",
                            value: "{value}",
                            selected: current.sort_by == value,
                            "{label}"
                        }
                    }
                }

                label { r#for: "sortOrderFilter", "Direction" }
                select {
                    id: "sortOrderFilter",
                    value: "{sort_direction}",
                    onchange: move |evt| filters.write().sort_order = SortOrder::from_control(&evt.value()),
                    option { value: "", selected: sort_direction.is_empty(), "Default" }
                    option { value: "asc", selected: sort_direction == "asc", "Ascending" }
                    option { value: "desc", selected: sort_direction == "desc", "Descending" }
                }

                button { class: "btn btn-primary", r#type: "submit", "Apply filters" }
            }

            section {
                class: "results",
                BookGrid { books: books.cloned() }
            }
        }
    }
}
