//! Shared UI components exported for routes.

pub(crate) mod book_card;
pub(crate) mod book_form;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use book_card::BookCard;
pub(crate) use book_form::{BookFormFields, BookFormState};
pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, Button, StatCard, Spinner, TextField};
