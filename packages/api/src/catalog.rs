//! Catalogue reads. These work for guests too; the token is attached when present.

use store::KeyValueStore;

use crate::client::AuthClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{Book, BookDetail, Category};
use crate::transport::{HttpRequest, Transport};

/// `GET /api/books`, passing `query` (without the leading `?`) through unchanged.
pub async fn list_books<T, S>(client: &AuthClient<T, S>, query: &str) -> Result<Vec<Book>, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    let path = if query.is_empty() {
        endpoints::BOOKS.to_string()
    } else {
        format!("{}?{}", endpoints::BOOKS, query)
    };
    client
        .request(HttpRequest::get(path))
        .await?
        .error_for_status()?
        .json()
}

pub async fn get_book<T, S>(client: &AuthClient<T, S>, id: u64) -> Result<BookDetail, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    client
        .request(HttpRequest::get(endpoints::book(id)))
        .await?
        .error_for_status()?
        .json()
}

/// `GET /api/categories`, used to fill the search page's category filter.
pub async fn list_categories<T, S>(client: &AuthClient<T, S>) -> Result<Vec<Category>, ApiError>
where
    T: Transport,
    S: KeyValueStore,
{
    client
        .request(HttpRequest::get(endpoints::CATEGORIES))
        .await?
        .error_for_status()?
        .json()
}

#[cfg(test)]
mod tests {
    use store::MemoryStore;

    use super::*;
    use crate::testing::ScriptedTransport;
    use crate::transport::HttpResponse;

    #[tokio::test]
    async fn test_list_books_forwards_query() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(
            200,
            r#"[{"id":1,"title":"A","price":10,"in_stock":true}]"#,
        ));
        let client = AuthClient::new(transport, MemoryStore::new());

        let books = list_books(&client, "category_id=3&in_stock=true").await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].price, 10.0);
        assert_eq!(
            client.transport().requests()[0].path,
            "/api/books?category_id=3&in_stock=true"
        );
    }

    #[tokio::test]
    async fn test_missing_book_is_status_error() {
        let transport = ScriptedTransport::new()
            .respond(HttpResponse::json_body(404, r#"{"detail":"Book not found"}"#));
        let client = AuthClient::new(transport, MemoryStore::new());

        let err = get_book(&client, 99).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(client.transport().requests()[0].path, "/api/books/99");
    }

    #[tokio::test]
    async fn test_list_categories() {
        let transport = ScriptedTransport::new().respond(HttpResponse::json_body(
            200,
            r#"[{"id":3,"name":"Fantasy","description":null},{"id":4,"name":"History"}]"#,
        ));
        let client = AuthClient::new(transport, MemoryStore::new());

        let categories = list_categories(&client).await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Fantasy");
        assert_eq!(client.transport().calls_to("/api/categories"), 1);
    }
}
