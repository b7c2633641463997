use super::{authorize, Flow, Outcome, Rejection, ERROR_TITLE, SUCCESS_TITLE};
use crate::api::ApiClient;
use crate::forms::BookForm;
use crate::notice::Notice;
use crate::session::{SessionContext, SessionStore};
use crate::view::View;
use tracing::info;

/// Submits a new listing for review. On success the caller should clear the
/// form and follow `navigate` to the listing view.
///
/// # Errors
/// `Rejection::Redirect` without a session, `Rejection::Invalid` for field
/// errors, `Rejection::Failed` when the server refuses the listing.
pub async fn submit<S: SessionStore>(
    api: &ApiClient,
    session: &SessionContext<S>,
    form: &BookForm,
) -> Flow<()> {
    let credential = authorize(View::SellBook.access(), &session.session())?;
    let book = form.validate()?;

    api.create_book(&credential, &book).await.map_err(|err| {
        Rejection::Failed(Notice::from_api(ERROR_TITLE, &err, "Failed to submit book"))
    })?;
    info!(title = %book.title, "listing submitted");

    Ok(Outcome::new(())
        .with_notice(Notice::success(SUCCESS_TITLE, "Book submitted for approval"))
        .navigate_to(View::MyBooks))
}
