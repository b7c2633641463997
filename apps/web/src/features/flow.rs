//! Turns a flow result into page updates: notices go to the toast stack,
//! field errors to the form, navigation to the router.

use crate::app_lib::{api_client, config::AppConfig};
use crate::features::{notices::{use_notices, NoticeState}, session::{use_session, SessionState}};
use bookstall_client::forms::FieldErrors;
use bookstall_client::pages::Flow;
use bookstall_client::{ApiClient, Notice, Rejection};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

/// API client for a flow. A bad base address fails the flow with a notice.
pub fn api(config: &AppConfig) -> Result<ApiClient, Rejection> {
    api_client(config).map_err(|err| Rejection::Failed(Notice::error("Error", err.to_string())))
}

#[derive(Clone, Copy)]
pub struct FlowUi {
    notices: NoticeState,
    session: SessionState,
    pub errors: RwSignal<FieldErrors>,
}

impl FlowUi {
    pub fn new() -> Self {
        Self {
            notices: use_notices(),
            session: use_session(),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    /// Clears field errors before a new submission.
    pub fn start(&self) {
        self.errors.set(FieldErrors::new());
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<&'static str>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|errors| errors.get(field)))
    }

    /// Applies `flow` and returns its data when it got through. The page may
    /// be gone by the time a request finishes, so page signals are written
    /// with `try_set`.
    pub fn settle<T>(&self, flow: Flow<T>, navigate: &impl Fn(&str, NavigateOptions)) -> Option<T> {
        // Login and logout write the session; re-reading is harmless otherwise.
        self.session.changed();
        match flow {
            Ok(outcome) => {
                self.notices.extend(outcome.notices);
                if let Some(view) = outcome.navigate {
                    navigate(view.path(), NavigateOptions::default());
                }
                Some(outcome.data)
            }
            Err(Rejection::Redirect(view)) => {
                navigate(view.path(), NavigateOptions::default());
                None
            }
            Err(Rejection::Invalid(errors)) => {
                let _ = self.errors.try_set(errors);
                None
            }
            Err(Rejection::Failed(notice)) => {
                self.notices.extend(vec![notice]);
                None
            }
        }
    }
}
