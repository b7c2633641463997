//! Session state for the browser. The session itself lives in
//! `localStorage`; the reactive part is a revision counter that is bumped
//! after every flow that may have written it, so guards and the navbar
//! re-read the stored fields.

use crate::app_lib::storage::BrowserStorage;
use bookstall_client::{enter, Guard, Principal, Session, SessionContext, View};
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};

#[derive(Clone, Copy)]
pub struct SessionState {
    revision: RwSignal<u64>,
}

impl SessionState {
    fn new() -> Self {
        Self {
            revision: RwSignal::new(0),
        }
    }

    /// Handle passed to flows. Reading through it is not tracked.
    pub fn context(&self) -> SessionContext<BrowserStorage> {
        SessionContext::new(BrowserStorage)
    }

    /// Tracked snapshot of the stored fields.
    pub fn session(&self) -> Session {
        self.revision.track();
        self.context().session()
    }

    pub fn principal(&self) -> Principal {
        self.session().role_of()
    }

    pub fn changed(&self) {
        self.revision.update(|revision| *revision += 1);
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionState::new());

    view! { {children()} }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>().unwrap_or_else(SessionState::new)
}

/// Renders `children` only when the session may enter `page`, and replaces
/// the location with the guard's target otherwise.
#[component]
pub fn Guarded(page: View, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| enter(page, &session.session()));

    Effect::new(move |_| {
        if let Guard::RedirectTo(target) = decision.get() {
            navigate(
                target.path(),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! { <Show when=move || decision.get().is_allowed()>{children()}</Show> }
}
