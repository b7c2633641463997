use super::{require, Flow, Outcome};
use crate::session::{SessionContext, SessionStore};
use crate::view::View;

/// Landing has no data of its own; signed-in users are sent home.
///
/// # Errors
/// Returns `Rejection::Redirect` to the role's home view when signed in.
pub fn enter<S: SessionStore>(session: &SessionContext<S>) -> Flow<()> {
    require(View::Landing, &session.session())?;
    Ok(Outcome::new(()))
}
