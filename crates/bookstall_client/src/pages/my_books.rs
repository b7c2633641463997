use super::{authorize, load_failed, Flow, Outcome, Rejection};
use crate::api::{ApiClient, Book};
use crate::session::{SessionContext, SessionStore};
use crate::view::View;

/// Listings created by the signed-in user, in every review status.
///
/// # Errors
/// `Rejection::Redirect` without a session, `Rejection::Failed` when the
/// listing cannot be fetched.
pub async fn load<S: SessionStore>(api: &ApiClient, session: &SessionContext<S>) -> Flow<Vec<Book>> {
    let credential = authorize(View::MyBooks.access(), &session.session())?;
    api.my_books(&credential)
        .await
        .map(Outcome::new)
        .map_err(|err| Rejection::Failed(load_failed(&err, "Failed to fetch your books", false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BookStatus;
    use crate::pages::testing::{anonymous, book_json, can_bind_localhost, client_for, signed_in};
    use serde_json::json;
    use wiremock::matchers::{any, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn no_credential_redirects_to_client_login_without_calls() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let result = load(&api, &anonymous()).await;
        assert_eq!(result.err(), Some(Rejection::Redirect(View::ClientLogin)));
        Ok(())
    }

    #[tokio::test]
    async fn lists_own_books_with_bearer() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        let mut pending = book_json("b1", "Dune", "Frank Herbert", 2);
        pending["status"] = json!("pending");
        Mock::given(method("GET"))
            .and(path("/api/books/my-books"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([pending])))
            .expect(1)
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let outcome = load(&api, &signed_in("client"))
            .await
            .map_err(|rejection| anyhow::anyhow!("{rejection}"))?;
        assert_eq!(outcome.data.len(), 1);
        assert_eq!(outcome.data[0].status, BookStatus::Pending);
        Ok(())
    }

    #[tokio::test]
    async fn failure_reports_server_message() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/books/my-books"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Token expired" })))
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let Err(Rejection::Failed(notice)) = load(&api, &signed_in("client")).await else {
            panic!("expected a failed load");
        };
        assert_eq!(notice.description, "Token expired");
        Ok(())
    }
}
