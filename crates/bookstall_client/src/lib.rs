//! # DK Book Stall client core
//!
//! Everything a front-end of the marketplace needs that does not depend on
//! how it renders. Front-ends only call the flows in [`pages`]; those reach
//! the session, the view table and the REST client on their behalf.
//!
//! ## Session and access
//!
//! The session is two durable string fields, `token` and `role`, held by a
//! [`SessionStore`](session::SessionStore) chosen by the front-end. Only a
//! credential paired with a recognized role (`client` or `admin`) counts as
//! signed in. Before a view loads anything it asks [`guard::enter`], which
//! either allows entry or names the view to redirect to. This gate is a UX
//! convenience; the server enforces authorization on every call.
//!
//! ## Flows
//!
//! [`pages`] functions return `Result<Outcome<T>, Rejection>`. A rejection
//! means nothing was rendered: a redirect, field errors, or a failed request
//! with a notice. An outcome carries the data plus any notices and an
//! optional navigation target.

pub mod api;
pub mod forms;
pub mod guard;
pub mod notice;
pub mod pages;
pub mod role;
pub mod session;
pub mod view;

pub use api::{ApiClient, ApiError, DEFAULT_API_BASE_URL};
pub use guard::{enter, Guard};
pub use notice::{Notice, NoticeKind};
pub use pages::{Outcome, Rejection};
pub use role::{Principal, Role};
pub use session::{Session, SessionContext, SessionStore, StoreError};
pub use view::{Access, NavAction, NavBar, NavTarget, View};
