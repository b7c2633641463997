//! Public catalogue of available books and the purchase action.

use super::{authorize, load_failed, Flow, Outcome, Rejection, ERROR_TITLE, SUCCESS_TITLE};
use crate::api::{ApiClient, ApiError, Book};
use crate::forms::validate_purchase_quantity;
use crate::notice::Notice;
use crate::session::{SessionContext, SessionStore};
use crate::role::Role;
use crate::view::Access;
use tracing::info;

const FETCH_FAILED: &str = "Failed to fetch books";
const PURCHASE_FAILED: &str = "Failed to purchase book";

/// Browsing is public, buying needs a session.
const BUYER: Access = Access::AnyAuthenticated {
    login: Role::Client,
};

async fn fetch(api: &ApiClient, search: &str) -> Result<Vec<Book>, ApiError> {
    let books = api.available_books().await?;
    Ok(books.into_iter().filter(|book| book.matches(search)).collect())
}

/// Lists available books whose title or author contains `search`.
///
/// # Errors
/// `Rejection::Failed` when the listing cannot be fetched.
pub async fn load(api: &ApiClient, search: &str) -> Flow<Vec<Book>> {
    fetch(api, search)
        .await
        .map(Outcome::new)
        .map_err(|err| Rejection::Failed(load_failed(&err, FETCH_FAILED, false)))
}

/// Checks that the visitor may buy, without sending anything.
///
/// # Errors
/// `Rejection::Redirect` to the client login without a session.
pub fn check_buyer<S: SessionStore>(session: &SessionContext<S>) -> Result<(), Rejection> {
    authorize(BUYER, &session.session()).map(|_| ())
}

/// Buys `quantity` copies of `book`, then reloads the listing with `search`
/// applied. Visitors without a session are sent to the client login before
/// anything is sent.
///
/// # Errors
/// `Rejection::Redirect` without a session, `Rejection::Invalid` for a bad
/// quantity, `Rejection::Failed` when the purchase is refused.
pub async fn buy<S: SessionStore>(
    api: &ApiClient,
    session: &SessionContext<S>,
    book: &Book,
    quantity: &str,
    search: &str,
) -> Flow<Vec<Book>> {
    let credential = authorize(BUYER, &session.session())?;
    let quantity = validate_purchase_quantity(quantity, book.quantity)?;

    api.buy_book(&credential, &book.id, quantity)
        .await
        .map_err(|err| Rejection::Failed(Notice::from_api(ERROR_TITLE, &err, PURCHASE_FAILED)))?;
    info!(book = %book.id, quantity, "book purchased");

    let outcome = Outcome::new(Vec::new())
        .with_notice(Notice::success(SUCCESS_TITLE, "Book purchased successfully"));
    Ok(match fetch(api, search).await {
        Ok(books) => outcome.map(|_| books),
        Err(err) => outcome.with_notice(load_failed(&err, FETCH_FAILED, false)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;
    use crate::pages::testing::{anonymous, book_json, can_bind_localhost, client_for, signed_in};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn listing() -> serde_json::Value {
        json!([
            book_json("b1", "Dune", "Frank Herbert", 3),
            book_json("b2", "Emma", "Jane Austen", 1),
        ])
    }

    async fn mount_listing(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/books/available"))
            .respond_with(ResponseTemplate::new(200).set_body_json(listing()))
            .mount(server)
            .await;
    }

    fn dune() -> anyhow::Result<Book> {
        Ok(serde_json::from_value(book_json("b1", "Dune", "Frank Herbert", 3))?)
    }

    #[tokio::test]
    async fn load_filters_by_search() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        mount_listing(&server).await;
        let api = client_for(&server)?;

        let outcome = load(&api, "austen")
            .await
            .map_err(|rejection| anyhow::anyhow!("{rejection}"))?;
        assert_eq!(outcome.data.len(), 1);
        assert_eq!(outcome.data[0].title, "Emma");

        let outcome = load(&api, "")
            .await
            .map_err(|rejection| anyhow::anyhow!("{rejection}"))?;
        assert_eq!(outcome.data.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn load_failure_uses_server_message() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/books/available"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let Err(Rejection::Failed(notice)) = load(&api, "").await else {
            panic!("expected a failed load");
        };
        assert_eq!(notice.description, "Failed to fetch books");
        Ok(())
    }

    #[tokio::test]
    async fn buy_without_session_redirects_and_sends_nothing() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let result = buy(&api, &anonymous(), &dune()?, "1", "").await;
        assert_eq!(result.err(), Some(Rejection::Redirect(View::ClientLogin)));
        Ok(())
    }

    #[tokio::test]
    async fn buy_above_stock_is_invalid() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let result = buy(&api, &signed_in("client"), &dune()?, "4", "").await;
        let Err(Rejection::Invalid(errors)) = result else {
            panic!("expected field errors");
        };
        assert_eq!(errors.get("quantity"), Some("Quantity exceeds available stock"));
        Ok(())
    }

    #[tokio::test]
    async fn buy_patches_then_refetches() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/books/b1/buy"))
            .and(header("authorization", "Bearer tok-123"))
            .and(body_json(json!({ "quantity": 2 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
            .expect(1)
            .mount(&server)
            .await;
        mount_listing(&server).await;
        let api = client_for(&server)?;

        let outcome = buy(&api, &signed_in("client"), &dune()?, "2", "dune")
            .await
            .map_err(|rejection| anyhow::anyhow!("{rejection}"))?;
        assert_eq!(outcome.notices.len(), 1);
        assert_eq!(outcome.notices[0].description, "Book purchased successfully");
        assert_eq!(outcome.data.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn refused_purchase_reports_server_message() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/books/b1/buy"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "Not enough stock" })),
            )
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let result = buy(&api, &signed_in("client"), &dune()?, "1", "").await;
        let Err(Rejection::Failed(notice)) = result else {
            panic!("expected a failed purchase");
        };
        assert_eq!(notice.description, "Not enough stock");
        Ok(())
    }
}
