//! Public catalogue with search and per-book purchase. Searching filters the
//! loaded listing; buying reloads it.

use crate::components::{AppShell, BookCard, Spinner};
use crate::features::flow::{api, use_config, FlowUi};
use crate::features::session::{use_session, Guarded};
use bookstall_client::api::Book;
use bookstall_client::pages::books;
use bookstall_client::View;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn AvailableBooksPage() -> impl IntoView {
    view! {
        <AppShell>
            <Guarded page=View::AvailableBooks>
                <Catalogue />
            </Guarded>
        </AppShell>
    }
}

#[derive(Clone)]
struct Purchase {
    book: Book,
    quantity: String,
}

#[component]
fn Catalogue() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigate = use_navigate();
    let ui = FlowUi::new();
    let listing = RwSignal::new(None::<Vec<Book>>);
    let search = RwSignal::new(String::new());
    // Book whose purchase produced the current field errors.
    let buying = RwSignal::new(None::<String>);

    let load_config = config.clone();
    let load_action = Action::new_local(move |_: &()| {
        let config = load_config.clone();
        async move {
            let api = api(&config)?;
            books::load(&api, "").await
        }
    });

    let buy_action = Action::new_local(move |purchase: &Purchase| {
        let purchase = purchase.clone();
        let config = config.clone();
        async move {
            let api = api(&config)?;
            books::buy(&api, &session.context(), &purchase.book, &purchase.quantity, "").await
        }
    });

    let load_navigate = navigate.clone();
    Effect::new(move |_| {
        if let Some(flow) = load_action.value().get() {
            let books = ui.settle(flow, &load_navigate).unwrap_or_default();
            let _ = listing.try_set(Some(books));
        }
    });

    Effect::new(move |_| {
        if let Some(flow) = buy_action.value().get() {
            if let Some(books) = ui.settle(flow, &navigate) {
                let _ = buying.try_set(None);
                let _ = listing.try_set(Some(books));
            }
        }
    });

    load_action.dispatch(());

    let on_buy = move |book: Book, quantity: String| {
        ui.start();
        buying.set(Some(book.id.clone()));
        buy_action.dispatch(Purchase { book, quantity });
    };

    let visible = move || {
        let needle = search.get();
        listing.get().map(|books| {
            books
                .into_iter()
                .filter(|book| book.matches(&needle))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Available Books"</h1>
                <p class="text-gray-600">"Browse our collection of books"</p>
            </div>
            <input
                type="search"
                class="w-full max-w-md rounded-full border border-gray-300 px-4 py-2 text-sm"
                placeholder="Search by title or author..."
                prop:value=move || search.get()
                on:input=move |event| search.set(event_target_value(&event))
            />
            {move || match visible() {
                None => view! { <Spinner /> }.into_any(),
                Some(books) if books.is_empty() => {
                    view! { <p class="p-8 text-center text-gray-500">"No books found."</p> }
                        .into_any()
                }
                Some(books) => {
                    view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {books
                                .into_iter()
                                .map(|book| {
                                    let error = Signal::derive({
                                        let id = book.id.clone();
                                        move || {
                                            (buying.get().as_deref() == Some(id.as_str()))
                                                .then(|| ui.errors.with(|errors| errors.get("quantity")))
                                                .flatten()
                                        }
                                    });
                                    view! { <BuyCard book=book error=error on_buy=on_buy pending=buy_action.pending() /> }
                                })
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
fn BuyCard(
    book: Book,
    #[prop(into)] error: Signal<Option<&'static str>>,
    on_buy: impl Fn(Book, String) + Copy + Send + Sync + 'static,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    let quantity = RwSignal::new("1".to_string());
    let in_stock = book.in_stock();
    let max = book.quantity.to_string();
    let target = book.clone();

    view! {
        <BookCard book=book>
            <div class="flex items-center gap-3">
                {in_stock
                    .then(|| {
                        view! {
                            <input
                                type="number"
                                min="1"
                                max=max.clone()
                                class="w-20 rounded-lg border border-gray-300 p-2 text-sm"
                                prop:value=move || quantity.get()
                                on:input=move |event| quantity.set(event_target_value(&event))
                            />
                        }
                    })}
                <button
                    type="button"
                    class="rounded-lg bg-indigo-700 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-800 disabled:opacity-50"
                    disabled=move || !in_stock || pending.get()
                    on:click=move |_| on_buy(target.clone(), quantity.get_untracked())
                >
                    "Buy"
                </button>
            </div>
            {move || error.get().map(|message| view! { <p class="mt-2 text-sm text-red-600">{message}</p> })}
        </BookCard>
    }
}
