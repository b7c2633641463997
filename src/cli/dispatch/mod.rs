use crate::cli::actions::{admin, catalogue, session, Action};
use crate::cli::commands::{
    account::{
        ARG_ADMIN_CODE, ARG_CONFIRM_PASSWORD, ARG_EMAIL, ARG_PASSWORD, ARG_ROLE, ARG_USERNAME,
    },
    admin::ARG_REVIEW_ACTION,
    books::{
        ARG_AUTHOR, ARG_BOOK_ID, ARG_DESCRIPTION, ARG_PRICE, ARG_QUANTITY, ARG_SEARCH, ARG_TITLE,
    },
    ARG_API_URL, ARG_SESSION_FILE,
};
use crate::cli::globals::GlobalArgs;
use crate::store::default_session_path;
use anyhow::{anyhow, bail, Context, Result};
use bookstall_client::api::ReviewAction;
use bookstall_client::forms::BookForm;
use bookstall_client::Role;
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

/// Maps parsed arguments to the action to run.
///
/// # Errors
/// Returns an error if a required argument is missing or no session file
/// location can be determined.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;

    let action = match matches.subcommand() {
        Some(("home", _)) => session_action(globals, session::Command::Home),
        Some(("nav", _)) => session_action(globals, session::Command::Nav),
        Some(("signup", sub)) => session_action(
            globals,
            session::Command::Signup(session::SignupArgs {
                role: role(sub)?,
                username: string(sub, ARG_USERNAME)?,
                email: string(sub, ARG_EMAIL)?,
                password: secret(sub, ARG_PASSWORD)?,
                confirm_password: secret(sub, ARG_CONFIRM_PASSWORD)?,
                admin_code: sub
                    .get_one::<String>(ARG_ADMIN_CODE)
                    .map(|code| SecretString::from(code.clone())),
            }),
        ),
        Some(("login", sub)) => session_action(
            globals,
            session::Command::Login {
                role: role(sub)?,
                email: string(sub, ARG_EMAIL)?,
                password: secret(sub, ARG_PASSWORD)?,
            },
        ),
        Some(("logout", _)) => session_action(globals, session::Command::Logout),
        Some(("books", sub)) => catalogue_action(
            globals,
            catalogue::Command::Books {
                search: string(sub, ARG_SEARCH)?,
            },
        ),
        Some(("buy", sub)) => catalogue_action(
            globals,
            catalogue::Command::Buy {
                book_id: string(sub, ARG_BOOK_ID)?,
                quantity: string(sub, ARG_QUANTITY)?,
            },
        ),
        Some(("sell", sub)) => catalogue_action(globals, catalogue::Command::Sell(book_form(sub)?)),
        Some(("my-books", _)) => catalogue_action(globals, catalogue::Command::MyBooks),
        Some(("dashboard", _)) => catalogue_action(globals, catalogue::Command::Dashboard),
        Some(("admin", admin_matches)) => {
            let command = match admin_matches.subcommand() {
                Some(("dashboard", _)) => admin::Command::Dashboard,
                Some(("review", sub)) => admin::Command::Review {
                    book_id: string(sub, ARG_BOOK_ID)?,
                    action: review_action(sub)?,
                },
                Some(("add-book", sub)) => admin::Command::AddBook(book_form(sub)?),
                Some((name, _)) => bail!("unknown admin subcommand: {name}"),
                None => bail!("missing admin subcommand"),
            };
            Action::Admin(admin::Args { globals, command })
        }
        Some((name, _)) => bail!("unknown subcommand: {name}"),
        None => bail!("missing subcommand"),
    };

    Ok(action)
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    let api_url = string(matches, ARG_API_URL)?;
    let session_file = match matches.get_one::<PathBuf>(ARG_SESSION_FILE) {
        Some(path) => path.clone(),
        None => default_session_path()
            .context("could not determine a data directory, pass --session-file")?,
    };
    Ok(GlobalArgs::new(api_url, session_file))
}

fn session_action(globals: GlobalArgs, command: session::Command) -> Action {
    Action::Session(session::Args { globals, command })
}

fn catalogue_action(globals: GlobalArgs, command: catalogue::Command) -> Action {
    Action::Catalogue(catalogue::Args { globals, command })
}

fn string(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn secret(matches: &ArgMatches, id: &str) -> Result<SecretString> {
    string(matches, id).map(SecretString::from)
}

fn role(matches: &ArgMatches) -> Result<Role> {
    let tag = string(matches, ARG_ROLE)?;
    Role::parse(&tag).ok_or_else(|| anyhow!("unknown role: {tag}"))
}

fn review_action(matches: &ArgMatches) -> Result<ReviewAction> {
    match string(matches, ARG_REVIEW_ACTION)?.as_str() {
        "approve" => Ok(ReviewAction::Approve),
        "reject" => Ok(ReviewAction::Reject),
        other => bail!("unknown review action: {other}"),
    }
}

fn book_form(matches: &ArgMatches) -> Result<BookForm> {
    Ok(BookForm {
        title: string(matches, ARG_TITLE)?,
        author: string(matches, ARG_AUTHOR)?,
        description: string(matches, ARG_DESCRIPTION)?,
        price: string(matches, ARG_PRICE)?,
        quantity: string(matches, ARG_QUANTITY)?,
    })
}
