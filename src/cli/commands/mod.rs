pub mod account;
pub mod admin;
pub mod books;
pub mod logging;

use bookstall_client::DEFAULT_API_BASE_URL;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};
use std::path::PathBuf;
use url::Url;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_FILE: &str = "session-file";

/// Accepts absolute http(s) URLs only.
#[must_use]
pub fn validator_api_url() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<String, String> {
        let url = Url::parse(value.trim()).map_err(|err| format!("invalid URL: {err}"))?;
        if matches!(url.scheme(), "http" | "https") {
            Ok(value.trim().to_string())
        } else {
            Err("expected an http:// or https:// URL".to_string())
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("bookstall")
        .about("DK Book Stall marketplace")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Marketplace API base URL")
                .env("BOOKSTALL_API_URL")
                .default_value(DEFAULT_API_BASE_URL)
                .global(true)
                .value_parser(validator_api_url()),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("Where the session is stored (default: <data dir>/bookstall/session.json)")
                .env("BOOKSTALL_SESSION_FILE")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf)),
        );

    let command = account::with_args(command);
    let command = books::with_args(command);
    let command = admin::with_args(command);
    logging::with_args(command)
}
