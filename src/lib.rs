//! # bookstall
//!
//! Terminal front-end for the DK Book Stall marketplace. Each subcommand
//! enters one view of the marketplace through the flows in
//! `bookstall_client::pages`, so the same access rules, validation and
//! notices apply as in the browser. The session lives in a small JSON file
//! instead of browser storage.

pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
