//! Cross-page state and the glue between Leptos and the flows in
//! `bookstall_client::pages`.

pub(crate) mod flow;
pub(crate) mod notices;
pub(crate) mod session;
