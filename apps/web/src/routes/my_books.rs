use crate::components::{AppShell, BookCard, Spinner};
use crate::features::flow::{api, use_config, FlowUi};
use crate::features::session::{use_session, Guarded};
use bookstall_client::api::Book;
use bookstall_client::pages::my_books;
use bookstall_client::View;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn MyBooksPage() -> impl IntoView {
    view! {
        <AppShell>
            <Guarded page=View::MyBooks>
                <MyListings />
            </Guarded>
        </AppShell>
    }
}

#[component]
fn MyListings() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigate = use_navigate();
    let ui = FlowUi::new();
    let listing = RwSignal::new(None::<Vec<Book>>);

    let load_action = Action::new_local(move |_: &()| {
        let config = config.clone();
        async move {
            let api = api(&config)?;
            my_books::load(&api, &session.context()).await
        }
    });

    Effect::new(move |_| {
        if let Some(flow) = load_action.value().get() {
            let books = ui.settle(flow, &navigate).unwrap_or_default();
            let _ = listing.try_set(Some(books));
        }
    });

    load_action.dispatch(());

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold text-gray-900">"My Books"</h1>
                <A
                    href=View::SellBook.path()
                    {..}
                    class="rounded-lg bg-indigo-700 px-4 py-2 text-sm font-medium text-white hover:bg-indigo-800"
                >
                    "Sell a Book"
                </A>
            </div>
            {move || match listing.get() {
                None => view! { <Spinner /> }.into_any(),
                Some(books) if books.is_empty() => {
                    view! {
                        <p class="p-8 text-center text-gray-500">
                            "You haven't listed any books yet."
                        </p>
                    }
                        .into_any()
                }
                Some(books) => {
                    view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {books
                                .into_iter()
                                .map(|book| view! { <BookCard book=book show_status=true show_sales=true /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
