//! Landing, navigation and account actions.

use super::render::{nav_lines, Report};
use crate::cli::globals::GlobalArgs;
use anyhow::Result;
use bookstall_client::forms::{LoginForm, SignupForm};
use bookstall_client::pages::{auth, landing};
use bookstall_client::view::nav_bar;
use bookstall_client::{Rejection, Role, View};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct SignupArgs {
    pub role: Role,
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub admin_code: Option<SecretString>,
}

impl SignupArgs {
    fn form(&self) -> SignupForm {
        SignupForm {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.expose_secret().to_string(),
            confirm_password: self.confirm_password.expose_secret().to_string(),
            admin_code: self
                .admin_code
                .as_ref()
                .map(|code| code.expose_secret().to_string())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug)]
pub enum Command {
    Home,
    Nav,
    Signup(SignupArgs),
    Login {
        role: Role,
        email: String,
        password: SecretString,
    },
    Logout,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// # Errors
/// Returns an error if the API client cannot be built.
pub async fn execute(args: Args) -> Result<Report> {
    let session = args.globals.session();
    let report = match args.command {
        Command::Home => {
            let mut report = Report::new();
            match landing::enter(&session) {
                Ok(_) => landing_menu(&mut report),
                // Being sent home is the expected result when signed in.
                Err(Rejection::Redirect(view)) => report.navigate(view),
                Err(rejection) => report.rejection(&rejection),
            }
            report
        }
        Command::Nav => {
            let principal = session.role_of();
            let mut report = Report::new();
            report.line(format!("Signed in as: {principal}"));
            if let Some(bar) = nav_bar(View::AvailableBooks, principal) {
                for line in nav_lines(&bar) {
                    report.line(line);
                }
            }
            report
        }
        Command::Signup(signup) => {
            let api = args.globals.api_client()?;
            let flow = auth::signup(&api, signup.role, &signup.form()).await;
            Report::from_flow(flow, |_, ()| {})
        }
        Command::Login {
            role,
            email,
            password,
        } => {
            let api = args.globals.api_client()?;
            let form = LoginForm {
                email,
                password: password.expose_secret().to_string(),
            };
            let flow = auth::login(&api, &session, role, &form).await;
            Report::from_flow(flow, |_, ()| {})
        }
        Command::Logout => Report::from_flow(Ok(auth::logout(&session)), |_, ()| {}),
    };
    Ok(report)
}

fn landing_menu(report: &mut Report) {
    report.line("DK Book Stall");
    report.line("Your premier destination for buying and selling books online.");
    for role in Role::ALL {
        report.line(format!(
            "  {role}: {}  |  {}",
            View::login_for(role),
            View::signup_for(role)
        ));
    }
    report.line(format!("  Browse without an account: {}", View::AvailableBooks));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_client::session::{ROLE_KEY, TOKEN_KEY};
    use crate::store::FileStore;
    use bookstall_client::SessionStore;
    use std::path::Path;

    fn globals(dir: &Path) -> GlobalArgs {
        // Nothing listens here; these actions must not touch the network.
        GlobalArgs::new("http://127.0.0.1:9/api".to_string(), dir.join("session.json"))
    }

    #[tokio::test]
    async fn home_shows_menu_when_signed_out() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let report = execute(Args {
            globals: globals(dir.path()),
            command: Command::Home,
        })
        .await?;
        assert!(!report.is_failed());
        assert!(report
            .lines()
            .iter()
            .any(|line| line.contains("/client/login")));
        Ok(())
    }

    #[tokio::test]
    async fn home_redirects_admin_to_dashboard() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let globals = globals(dir.path());
        let store = FileStore::new(globals.session_file.clone());
        store.set(TOKEN_KEY, "tok")?;
        store.set(ROLE_KEY, "admin")?;

        let report = execute(Args {
            globals,
            command: Command::Home,
        })
        .await?;
        assert_eq!(report.lines(), ["→ Admin Dashboard (/admin/dashboard)"]);
        assert!(!report.is_failed());
        Ok(())
    }

    #[tokio::test]
    async fn nav_lists_anonymous_actions() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let report = execute(Args {
            globals: globals(dir.path()),
            command: Command::Nav,
        })
        .await?;
        let lines = report.lines();
        assert_eq!(lines[0], "Signed in as: anonymous");
        assert!(lines.iter().any(|line| line.contains("Login  → Client Login")));
        assert!(lines.iter().any(|line| line.contains("Sign Up  → Client Signup")));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_login_fails_without_network() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let report = execute(Args {
            globals: globals(dir.path()),
            command: Command::Login {
                role: Role::Client,
                email: "nope".to_string(),
                password: SecretString::from("pw"),
            },
        })
        .await?;
        assert!(report.is_failed());
        assert_eq!(report.lines(), ["[invalid] email: Invalid email format"]);
        Ok(())
    }

    #[tokio::test]
    async fn logout_returns_to_landing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let globals = globals(dir.path());
        globals
            .session()
            .login(Role::Client, &SecretString::from("tok"))?;

        let report = execute(Args {
            globals: globals.clone(),
            command: Command::Logout,
        })
        .await?;
        assert_eq!(report.lines(), ["→ DK Book Stall (/)"]);
        assert!(!globals.session().is_authenticated());
        Ok(())
    }
}
