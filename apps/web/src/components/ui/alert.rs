//! Alert banners and the toast stack built from them. Messages come from the
//! API or from validation and never include credentials.

use crate::features::notices::use_notices;
use bookstall_client::NoticeKind;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl From<NoticeKind> for AlertKind {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Success => Self::Success,
            NoticeKind::Error => Self::Error,
            NoticeKind::Info => Self::Info,
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(
    kind: AlertKind,
    #[prop(optional, into)] title: Option<String>,
    message: String,
) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
        }
        AlertKind::Success => {
            "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700"
        }
        AlertKind::Info => {
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700"
        }
    };

    view! {
        <div class=class role="alert">
            {title.map(|title| view! { <p class="font-semibold">{title}</p> })}
            <p>{message}</p>
        </div>
    }
}

/// Toasts for the notices raised by flows, newest last.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="fixed top-4 right-4 z-50 flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || notices.items()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    view! {
                        <div class="relative shadow-md">
                            <Alert
                                kind=notice.kind.into()
                                title=notice.title
                                message=notice.description
                            />
                            <button
                                type="button"
                                class="absolute top-2 right-2 text-xs text-gray-500 hover:text-gray-900"
                                aria-label="Dismiss"
                                on:click=move |_| notices.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
