//! Moderation dashboard. Admins review pending listings here and can add
//! their own.

use super::{authorize, section, Flow, Outcome, Rejection, ERROR_TITLE, SUCCESS_TITLE};
use crate::api::{AdminStatistics, ApiClient, Book, ReviewAction};
use crate::forms::BookForm;
use crate::notice::Notice;
use crate::session::{SessionContext, SessionStore};
use crate::view::View;
use secrecy::SecretString;
use tracing::info;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminDashboard {
    pub books: Vec<Book>,
    pub pending: Vec<Book>,
    pub stats: AdminStatistics,
}

async fn fetch_all(api: &ApiClient, credential: &SecretString) -> Outcome<AdminDashboard> {
    let (books, pending, stats) = futures::join!(
        api.available_books(),
        api.pending_books(credential),
        api.statistics(credential),
    );

    let mut notices = Vec::new();
    let dashboard = AdminDashboard {
        books: section(books, "Failed to fetch books", true, &mut notices),
        pending: section(pending, "Failed to fetch pending books", true, &mut notices),
        stats: section(stats, "Failed to fetch statistics", true, &mut notices),
    };
    Outcome {
        notices,
        ..Outcome::new(dashboard)
    }
}

fn credential<S: SessionStore>(session: &SessionContext<S>) -> Result<SecretString, Rejection> {
    authorize(View::AdminDashboard.access(), &session.session())
}

/// Loads all three sections concurrently with partial-failure notices.
///
/// # Errors
/// `Rejection::Redirect` unless signed in as admin.
pub async fn load<S: SessionStore>(
    api: &ApiClient,
    session: &SessionContext<S>,
) -> Flow<AdminDashboard> {
    let credential = credential(session)?;
    Ok(fetch_all(api, &credential).await)
}

/// Approves or rejects a pending listing, then reloads every section.
///
/// # Errors
/// `Rejection::Redirect` unless signed in as admin, `Rejection::Failed`
/// when the review is refused.
pub async fn review<S: SessionStore>(
    api: &ApiClient,
    session: &SessionContext<S>,
    book_id: &str,
    action: ReviewAction,
) -> Flow<AdminDashboard> {
    let credential = credential(session)?;

    api.review_book(&credential, book_id, action)
        .await
        .map_err(|err| {
            let fallback = format!("Failed to {} book", action.as_str());
            Rejection::Failed(Notice::from_api(ERROR_TITLE, &err, &fallback))
        })?;
    info!(book = book_id, action = action.as_str(), "listing reviewed");

    let done = Notice::success(
        SUCCESS_TITLE,
        format!("Book {} successfully", action.past_tense()),
    );
    let mut outcome = fetch_all(api, &credential).await;
    outcome.notices.insert(0, done);
    Ok(outcome)
}

/// Adds a listing as admin, then reloads the catalogue and statistics. The
/// review queue is left as it was, so `pending` comes back empty.
///
/// # Errors
/// `Rejection::Redirect` unless signed in as admin, `Rejection::Invalid`
/// for field errors, `Rejection::Failed` when the server refuses it.
pub async fn add_book<S: SessionStore>(
    api: &ApiClient,
    session: &SessionContext<S>,
    form: &BookForm,
) -> Flow<AdminDashboard> {
    let credential = credential(session)?;
    let book = form.validate()?;

    api.create_book(&credential, &book).await.map_err(|err| {
        Rejection::Failed(Notice::from_api(ERROR_TITLE, &err, "Failed to add book"))
    })?;
    info!(title = %book.title, "admin listing added");

    let (books, stats) = futures::join!(api.available_books(), api.statistics(&credential));
    let mut notices = vec![Notice::success(SUCCESS_TITLE, "Book added successfully")];
    let dashboard = AdminDashboard {
        books: section(books, "Failed to fetch books", true, &mut notices),
        pending: Vec::new(),
        stats: section(stats, "Failed to fetch statistics", true, &mut notices),
    };
    Ok(Outcome {
        notices,
        ..Outcome::new(dashboard)
    })
}
