use crate::components::{AppShell, BookCard, Spinner, StatCard};
use crate::features::flow::{api, use_config, FlowUi};
use crate::features::session::{use_session, Guarded};
use bookstall_client::api::Purchase;
use bookstall_client::pages::client_dashboard::{self, ClientDashboard};
use bookstall_client::View;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn ClientDashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <Guarded page=View::ClientDashboard>
                <Overview />
            </Guarded>
        </AppShell>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Books,
    Purchases,
}

#[component]
fn Overview() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigate = use_navigate();
    let ui = FlowUi::new();
    let dashboard = RwSignal::new(None::<ClientDashboard>);
    let tab = RwSignal::new(Tab::Books);

    let load_action = Action::new_local(move |_: &()| {
        let config = config.clone();
        async move {
            let api = api(&config)?;
            client_dashboard::load(&api, &session.context()).await
        }
    });

    Effect::new(move |_| {
        if let Some(flow) = load_action.value().get() {
            if let Some(data) = ui.settle(flow, &navigate) {
                let _ = dashboard.try_set(Some(data));
            }
        }
    });

    load_action.dispatch(());

    let stat = move |read: fn(&ClientDashboard) -> u64| {
        Signal::derive(move || {
            dashboard.with(|data| data.as_ref().map_or(0, read).to_string())
        })
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Client Dashboard"</h1>
                <p class="text-gray-600">"Manage your books and view your activity"</p>
            </div>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                <StatCard label="Total Books" value=stat(|data| data.stats.total_books) />
                <StatCard label="Pending Review" value=stat(|data| data.stats.pending_books) />
                <StatCard label="Approved" value=stat(|data| data.stats.approved_books) />
                <StatCard label="Total Purchases" value=stat(|data| data.stats.total_purchases) />
            </div>
            <div class="flex gap-4">
                <A
                    href=View::SellBook.path()
                    {..}
                    class="rounded-lg bg-indigo-700 px-5 py-3 font-medium text-white hover:bg-indigo-800"
                >
                    "Sell a Book"
                </A>
                <A
                    href=View::AvailableBooks.path()
                    {..}
                    class="rounded-lg bg-emerald-600 px-5 py-3 font-medium text-white hover:bg-emerald-700"
                >
                    "Browse Books"
                </A>
            </div>
            <div class="flex gap-6 border-b border-gray-200">
                <TabButton tab=tab value=Tab::Books label="My Books" />
                <TabButton tab=tab value=Tab::Purchases label="Purchase History" />
            </div>
            {move || match (dashboard.get(), tab.get()) {
                (None, _) => view! { <Spinner /> }.into_any(),
                (Some(data), Tab::Books) if data.books.is_empty() => {
                    view! {
                        <p class="p-8 text-center text-gray-500">
                            "You haven't listed any books yet."
                        </p>
                    }
                        .into_any()
                }
                (Some(data), Tab::Books) => {
                    view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {data
                                .books
                                .into_iter()
                                .map(|book| view! { <BookCard book=book show_status=true show_sales=true /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
                (Some(data), Tab::Purchases) => view! { <PurchaseHistory purchases=data.purchases /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn TabButton(tab: RwSignal<Tab>, value: Tab, label: &'static str) -> impl IntoView {
    view! {
        <button
            type="button"
            class="pb-2 text-sm font-medium"
            class:border-b-2=move || tab.get() == value
            class:border-indigo-700=move || tab.get() == value
            class:text-indigo-700=move || tab.get() == value
            on:click=move |_| tab.set(value)
        >
            {label}
        </button>
    }
}

#[component]
fn PurchaseHistory(purchases: Vec<Purchase>) -> impl IntoView {
    if purchases.is_empty() {
        return view! {
            <p class="p-8 text-center text-gray-500">"You haven't purchased any books yet."</p>
        }
        .into_any();
    }

    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
            {purchases
                .into_iter()
                .map(|purchase| {
                    let date = purchase
                        .purchased_on()
                        .map_or_else(|| purchase.purchase_date.clone(), |day| day.to_string());
                    view! {
                        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm space-y-1">
                            <h3 class="text-lg font-semibold text-gray-900">
                                {purchase.book.title().to_string()}
                            </h3>
                            <p class="text-sm text-gray-600">
                                {purchase.book.author().map(|author| format!("by {author}"))}
                            </p>
                            <p class="text-sm">{format!("Quantity: {}", purchase.quantity)}</p>
                            <p class="text-sm">{format!("Total Price: ${:.2}", purchase.total_price)}</p>
                            <p class="text-sm text-gray-500">{format!("Purchased: {date}")}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
