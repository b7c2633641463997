//! Login, signup and logout for both roles.

use super::{Flow, Outcome, Rejection};
use crate::api::ApiClient;
use crate::forms::{LoginForm, SignupForm};
use crate::notice::Notice;
use crate::role::Role;
use crate::session::{SessionContext, SessionStore};
use crate::view::View;
use secrecy::SecretString;
use tracing::{info, warn};

const GENERIC_FAILURE: &str = "Something went wrong";

const fn welcome(role: Role) -> &'static str {
    match role {
        Role::Client => "Welcome back!",
        Role::Admin => "Welcome, Admin!",
    }
}

const fn signup_hint(role: Role) -> &'static str {
    match role {
        Role::Client => "You can now log in to your account",
        Role::Admin => "You can now log in to your admin account",
    }
}

/// Validates the form, exchanges it for a credential and opens the session.
/// The session is only written after the server accepted the login.
///
/// # Errors
/// `Rejection::Invalid` for field errors, `Rejection::Failed` when the
/// server rejects the login or the session cannot be stored.
pub async fn login<S: SessionStore>(
    api: &ApiClient,
    session: &SessionContext<S>,
    role: Role,
    form: &LoginForm,
) -> Flow<()> {
    let request = form.validate()?;

    let response = api.login(role, &request).await.map_err(|err| {
        info!(%role, "login rejected: {err}");
        Rejection::Failed(Notice::from_api("Login Failed", &err, GENERIC_FAILURE))
    })?;

    let credential = SecretString::from(response.token);
    session.login(role, &credential).map_err(|err| {
        warn!("failed to store session: {err}");
        Rejection::Failed(Notice::error("Login Failed", GENERIC_FAILURE))
    })?;

    info!(%role, "logged in");
    Ok(Outcome::new(())
        .with_notice(Notice::success("Login Successful", welcome(role)))
        .navigate_to(View::dashboard_for(role)))
}

/// Registers an account and sends the user to the matching login view.
///
/// # Errors
/// `Rejection::Invalid` for field errors, `Rejection::Failed` when the
/// server rejects the registration.
pub async fn signup(api: &ApiClient, role: Role, form: &SignupForm) -> Flow<()> {
    let request = form.validate(role)?;

    api.register(role, &request).await.map_err(|err| {
        info!(%role, "signup rejected: {err}");
        Rejection::Failed(Notice::from_api("Signup Failed", &err, GENERIC_FAILURE))
    })?;

    info!(%role, "account registered");
    Ok(Outcome::new(())
        .with_notice(Notice::success("Signup Successful", signup_hint(role)))
        .navigate_to(View::login_for(role)))
}

/// Clears the session and returns to landing. A storage failure is logged
/// and still navigates away.
pub fn logout<S: SessionStore>(session: &SessionContext<S>) -> Outcome<()> {
    if let Err(err) = session.logout() {
        warn!("failed to clear session: {err}");
    }
    Outcome::new(()).navigate_to(View::Landing)
}
