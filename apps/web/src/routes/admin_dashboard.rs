//! Admin dashboard. Reviewing reloads every section; adding a book leaves
//! the review queue as shown.

use crate::components::{
    AppShell, BookCard, BookFormFields, BookFormState, Button, Spinner, StatCard,
};
use crate::features::flow::{api, use_config, FlowUi};
use crate::features::session::{use_session, Guarded};
use bookstall_client::api::{AdminStatistics, ReviewAction};
use bookstall_client::forms::BookForm;
use bookstall_client::pages::admin_dashboard::{self, AdminDashboard};
use bookstall_client::View;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <Guarded page=View::AdminDashboard>
                <Moderation />
            </Guarded>
        </AppShell>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    AddBook,
    Pending,
    Available,
}

#[derive(Clone)]
struct Review {
    book_id: String,
    action: ReviewAction,
}

#[component]
fn Moderation() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigate = use_navigate();
    let ui = FlowUi::new();
    let form = BookFormState::new();
    let dashboard = RwSignal::new(None::<AdminDashboard>);
    let tab = RwSignal::new(Tab::AddBook);

    let load_config = config.clone();
    let load_action = Action::new_local(move |_: &()| {
        let config = load_config.clone();
        async move {
            let api = api(&config)?;
            admin_dashboard::load(&api, &session.context()).await
        }
    });

    let review_config = config.clone();
    let review_action = Action::new_local(move |review: &Review| {
        let review = review.clone();
        let config = review_config.clone();
        async move {
            let api = api(&config)?;
            admin_dashboard::review(&api, &session.context(), &review.book_id, review.action).await
        }
    });

    let add_action = Action::new_local(move |input: &BookForm| {
        let input = input.clone();
        let config = config.clone();
        async move {
            let api = api(&config)?;
            admin_dashboard::add_book(&api, &session.context(), &input).await
        }
    });

    let load_navigate = navigate.clone();
    Effect::new(move |_| {
        if let Some(flow) = load_action.value().get() {
            if let Some(data) = ui.settle(flow, &load_navigate) {
                let _ = dashboard.try_set(Some(data));
            }
        }
    });

    let review_navigate = navigate.clone();
    Effect::new(move |_| {
        if let Some(flow) = review_action.value().get() {
            if let Some(data) = ui.settle(flow, &review_navigate) {
                let _ = dashboard.try_set(Some(data));
            }
        }
    });

    Effect::new(move |_| {
        if let Some(flow) = add_action.value().get() {
            if let Some(data) = ui.settle(flow, &navigate) {
                form.clear();
                // The review queue is not part of the reload; keep what is shown.
                let _ = dashboard.try_update(|current| {
                    let pending = current.take().map(|old| old.pending).unwrap_or_default();
                    *current = Some(AdminDashboard { pending, ..data });
                });
            }
        }
    });

    load_action.dispatch(());

    let on_add = move |event: SubmitEvent| {
        event.prevent_default();
        ui.start();
        add_action.dispatch(form.snapshot());
    };

    let on_review = move |book_id: String, action: ReviewAction| {
        review_action.dispatch(Review { book_id, action });
    };

    let stats = Memo::new(move |_| {
        dashboard.with(|data| data.as_ref().map(|data| data.stats).unwrap_or_default())
    });
    let stat = move |read: fn(&AdminStatistics) -> u64| {
        Signal::derive(move || read(&stats.get()).to_string())
    };
    let pending_count = move || dashboard.with(|data| data.as_ref().map_or(0, |data| data.pending.len()));

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-gray-900">"Dashboard Statistics"</h1>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard label="Total Books" value=stat(|stats| stats.total_books) />
                <StatCard label="Available Books" value=stat(|stats| stats.available_books) />
                <StatCard label="Pending Review" value=stat(|stats| stats.pending_books) />
                <StatCard label="Sold Books" value=stat(|stats| stats.sold_books) />
            </div>
            <div class="rounded-lg border border-gray-200 bg-white p-6 shadow-sm space-y-3">
                <h2 class="text-lg font-semibold text-gray-900">"Sales Overview"</h2>
                <div class="flex justify-between text-sm">
                    <span>"Total Inventory"</span>
                    <span>{move || format!("{} units", stats.get().total_units())}</span>
                </div>
                <div class="flex justify-between text-sm">
                    <span>"Available Stock"</span>
                    <span>{move || format!("{} units", stats.get().total_quantity)}</span>
                </div>
                <div class="flex justify-between text-sm">
                    <span>"Total Sold"</span>
                    <span>{move || format!("{} units", stats.get().total_sold_quantity)}</span>
                </div>
                <div class="h-2 w-full rounded-full bg-gray-200">
                    <div
                        class="h-2 rounded-full bg-emerald-500"
                        style:width=move || format!("{:.1}%", stats.get().sold_ratio() * 100.0)
                    ></div>
                </div>
            </div>
            <div class="flex gap-6 border-b border-gray-200">
                <TabButton tab=tab value=Tab::AddBook label=Signal::derive(|| "Add New Book".to_string()) />
                <TabButton
                    tab=tab
                    value=Tab::Pending
                    label=Signal::derive(move || format!("Pending Approvals ({})", pending_count()))
                />
                <TabButton tab=tab value=Tab::Available label=Signal::derive(|| "Available Books".to_string()) />
            </div>
            <div class:hidden=move || tab.get() != Tab::AddBook>
                <form class="max-w-xl rounded-lg bg-white p-8 shadow" on:submit=on_add>
                    <h2 class="mb-6 text-lg font-semibold text-gray-900">"Add New Book"</h2>
                    <BookFormFields state=form ui=ui />
                    <Button button_type="submit" disabled=add_action.pending()>
                        "Add Book"
                    </Button>
                </form>
            </div>
            {move || match (dashboard.get(), tab.get()) {
                (_, Tab::AddBook) => ().into_any(),
                (None, _) => view! { <Spinner /> }.into_any(),
                (Some(data), Tab::Pending) if data.pending.is_empty() => {
                    view! { <p class="p-8 text-center text-gray-500">"No books pending approval."</p> }
                        .into_any()
                }
                (Some(data), Tab::Pending) => {
                    view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {data
                                .pending
                                .into_iter()
                                .map(|book| {
                                    let id = book.id.clone();
                                    view! {
                                        <BookCard book=book>
                                            <ReviewButtons
                                                book_id=id
                                                on_review=on_review
                                                pending=review_action.pending()
                                            />
                                        </BookCard>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                (Some(data), Tab::Available) if data.books.is_empty() => {
                    view! { <p class="p-8 text-center text-gray-500">"No books available."</p> }
                        .into_any()
                }
                (Some(data), Tab::Available) => {
                    view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {data
                                .books
                                .into_iter()
                                .map(|book| view! { <BookCard book=book show_sales=true /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn TabButton(tab: RwSignal<Tab>, value: Tab, #[prop(into)] label: Signal<String>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="pb-2 text-sm font-medium"
            class:border-b-2=move || tab.get() == value
            class:border-indigo-700=move || tab.get() == value
            class:text-indigo-700=move || tab.get() == value
            on:click=move |_| tab.set(value)
        >
            {move || label.get()}
        </button>
    }
}

#[component]
fn ReviewButtons(
    book_id: String,
    on_review: impl Fn(String, ReviewAction) + Copy + Send + Sync + 'static,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    let reject_id = book_id.clone();

    view! {
        <div class="flex gap-3">
            <button
                type="button"
                class="flex-1 rounded-lg bg-emerald-600 px-4 py-2 text-sm font-medium text-white hover:bg-emerald-700 disabled:opacity-50"
                disabled=move || pending.get()
                on:click=move |_| on_review(book_id.clone(), ReviewAction::Approve)
            >
                "Approve"
            </button>
            <button
                type="button"
                class="flex-1 rounded-lg bg-red-600 px-4 py-2 text-sm font-medium text-white hover:bg-red-700 disabled:opacity-50"
                disabled=move || pending.get()
                on:click=move |_| on_review(reject_id.clone(), ReviewAction::Reject)
            >
                "Reject"
            </button>
        </div>
    }
}
