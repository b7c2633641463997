use super::{authorize, section, Flow, Outcome};
use crate::api::{ApiClient, Book, ClientStatistics, Purchase};
use crate::session::{SessionContext, SessionStore};
use crate::view::View;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientDashboard {
    pub books: Vec<Book>,
    pub purchases: Vec<Purchase>,
    pub stats: ClientStatistics,
}

/// Loads the three dashboard sections concurrently. A failed section stays
/// empty and adds one error notice; the others still render.
///
/// # Errors
/// `Rejection::Redirect` without a session.
pub async fn load<S: SessionStore>(
    api: &ApiClient,
    session: &SessionContext<S>,
) -> Flow<ClientDashboard> {
    let credential = authorize(View::ClientDashboard.access(), &session.session())?;

    let (books, purchases, stats) = futures::join!(
        api.my_books(&credential),
        api.purchases(&credential),
        api.client_stats(&credential),
    );

    let mut notices = Vec::new();
    let dashboard = ClientDashboard {
        books: section(books, "Failed to fetch your books", false, &mut notices),
        purchases: section(purchases, "Failed to fetch purchase history", false, &mut notices),
        stats: section(stats, "Failed to fetch statistics", false, &mut notices),
    };
    Ok(Outcome {
        notices,
        ..Outcome::new(dashboard)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::{anonymous, book_json, can_bind_localhost, client_for, signed_in};
    use crate::pages::Rejection;
    use serde_json::json;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn anonymous_is_redirected_without_calls() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let result = load(&api, &anonymous()).await;
        assert_eq!(result.err(), Some(Rejection::Redirect(View::ClientLogin)));
        Ok(())
    }

    #[tokio::test]
    async fn failed_sections_add_one_notice_each() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/books/my-books"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([book_json("b1", "Dune", "Frank Herbert", 1)])),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/books/purchases"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/books/client-stats"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({ "error": "Access denied" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let outcome = load(&api, &signed_in("client"))
            .await
            .map_err(|rejection| anyhow::anyhow!("{rejection}"))?;
        assert_eq!(outcome.data.books.len(), 1);
        assert!(outcome.data.purchases.is_empty());
        assert_eq!(outcome.data.stats, ClientStatistics::default());

        let descriptions: Vec<_> = outcome
            .notices
            .iter()
            .map(|notice| notice.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            vec!["Failed to fetch purchase history", "Access denied"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn full_load_has_no_notices() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/books/my-books"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/books/purchases"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "_id": "p1",
                "book": { "title": "Dune", "author": "Frank Herbert" },
                "quantity": 1,
                "totalPrice": 10.0,
                "purchaseDate": "2024-03-09T17:45:00.000Z"
            }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/books/client-stats"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "totalBooks": 2, "totalPurchases": 1 })),
            )
            .mount(&server)
            .await;
        let api = client_for(&server)?;

        let outcome = load(&api, &signed_in("client"))
            .await
            .map_err(|rejection| anyhow::anyhow!("{rejection}"))?;
        assert!(outcome.notices.is_empty());
        assert_eq!(outcome.data.purchases.len(), 1);
        assert_eq!(outcome.data.stats.total_purchases, 1);
        Ok(())
    }
}
