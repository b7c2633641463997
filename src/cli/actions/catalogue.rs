//! Catalogue actions for signed-in clients and anonymous browsing.

use super::render::{client_stats_lines, Report};
use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use bookstall_client::forms::BookForm;
use bookstall_client::pages::{books, client_dashboard, my_books, sell};
use bookstall_client::Notice;

#[derive(Debug)]
pub enum Command {
    Books { search: String },
    Buy { book_id: String, quantity: String },
    Sell(BookForm),
    MyBooks,
    Dashboard,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// # Errors
/// Returns an error if the API client cannot be built.
pub async fn execute(args: Args) -> Result<Report> {
    let api = args.globals.api_client()?;
    let session = args.globals.session();

    let report = match args.command {
        Command::Books { search } => {
            Report::from_flow(books::load(&api, &search).await, |report, listing| {
                report.books(&listing, "No books available");
            })
        }
        Command::Buy { book_id, quantity } => {
            if let Err(rejection) = books::check_buyer(&session) {
                let mut report = Report::new();
                report.rejection(&rejection);
                return Ok(report);
            }

            // Stock is checked against a fresh listing, as shown in the browser.
            let listing = match books::load(&api, "").await {
                Ok(outcome) => outcome.data,
                Err(rejection) => {
                    let mut report = Report::new();
                    report.rejection(&rejection);
                    return Ok(report);
                }
            };
            let Some(book) = listing.into_iter().find(|book| book.id == book_id) else {
                let mut report = Report::new();
                report.fail(&Notice::error(
                    "Error",
                    format!("Book {book_id} is not available"),
                ));
                return Ok(report);
            };

            let flow = books::buy(&api, &session, &book, &quantity, "").await;
            Report::from_flow(flow, |report, listing| {
                report.heading("Available Books");
                report.books(&listing, "No books available");
            })
        }
        Command::Sell(form) => Report::from_flow(sell::submit(&api, &session, &form).await, |_, ()| {}),
        Command::MyBooks => {
            Report::from_flow(my_books::load(&api, &session).await, |report, listing| {
                report.books(&listing, "You have not listed any books yet");
            })
        }
        Command::Dashboard => {
            Report::from_flow(client_dashboard::load(&api, &session).await, |report, dashboard| {
                report.heading("Statistics");
                for line in client_stats_lines(&dashboard.stats) {
                    report.line(line);
                }
                report.heading("My Listings");
                report.books(&dashboard.books, "You have not listed any books yet");
                report.heading("Purchase History");
                report.purchases(&dashboard.purchases);
            })
        }
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_client::Role;
    use secrecy::SecretString;
    use serde_json::json;
    use std::net::TcpListener;
    use std::path::Path;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn globals(server: &MockServer, dir: &Path) -> GlobalArgs {
        GlobalArgs::new(format!("{}/api", server.uri()), dir.join("session.json"))
    }

    fn sign_in(globals: &GlobalArgs) -> Result<()> {
        globals
            .session()
            .login(Role::Client, &SecretString::from("tok-cli"))?;
        Ok(())
    }

    #[tokio::test]
    async fn books_lists_matches() -> Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/books/available"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "_id": "b1", "title": "Dune", "author": "Frank Herbert", "price": 12.5, "quantity": 3 },
                { "_id": "b2", "title": "Emma", "author": "Jane Austen", "price": 4.0, "quantity": 1 }
            ])))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir()?;

        let report = execute(Args {
            globals: globals(&server, dir.path()),
            command: Command::Books {
                search: "dune".to_string(),
            },
        })
        .await?;
        assert_eq!(report.lines().len(), 1);
        assert!(report.lines()[0].starts_with("b1  Dune by Frank Herbert"));
        Ok(())
    }

    #[tokio::test]
    async fn buy_without_session_makes_no_calls() -> Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir()?;

        let report = execute(Args {
            globals: globals(&server, dir.path()),
            command: Command::Buy {
                book_id: "b1".to_string(),
                quantity: "1".to_string(),
            },
        })
        .await?;
        assert!(report.is_failed());
        assert_eq!(report.lines(), ["→ Client Login (/client/login)"]);
        Ok(())
    }

    #[tokio::test]
    async fn buy_unknown_book_fails_before_purchase() -> Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/books/available"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir()?;
        let globals = globals(&server, dir.path());
        sign_in(&globals)?;

        let report = execute(Args {
            globals,
            command: Command::Buy {
                book_id: "b404".to_string(),
                quantity: "1".to_string(),
            },
        })
        .await?;
        assert!(report.is_failed());
        assert_eq!(report.lines(), ["[error] Error: Book b404 is not available"]);
        Ok(())
    }

    #[tokio::test]
    async fn sell_posts_and_points_to_my_books() -> Result<()> {
        if !can_bind_localhost() {
            return Ok(());
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/books"))
            .and(body_json(json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "description": "Desert planet",
                "price": 12.5,
                "quantity": 2
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "_id": "b9" })))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir()?;
        let globals = globals(&server, dir.path());
        sign_in(&globals)?;

        let report = execute(Args {
            globals,
            command: Command::Sell(BookForm {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                description: "Desert planet".to_string(),
                price: "12.5".to_string(),
                quantity: "2".to_string(),
            }),
        })
        .await?;
        assert_eq!(
            report.lines(),
            [
                "[ok] Success: Book submitted for approval",
                "→ My Books (/my-books)"
            ]
        );
        Ok(())
    }
}
