use crate::features::{flow::FlowUi, session::use_session};
use bookstall_client::pages::auth;
use bookstall_client::view::nav_bar;
use bookstall_client::{NavAction, NavTarget, View};
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};

const LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:hover:text-indigo-700 md:p-0";

/// Top bar with the actions visible to the current principal.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let (menu_open, set_menu_open) = signal(false);

    let bar = Memo::new(move |_| {
        // Paths outside the view table still get the regular bar.
        let current = View::from_path(&location.pathname.get()).unwrap_or(View::AvailableBooks);
        nav_bar(current, session.principal())
    });

    view! {
        {move || {
            bar.get()
                .map(|bar| {
                    view! {
                        <header class="border-b border-gray-200 bg-white">
                            <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                                <A
                                    href=bar.brand.path()
                                    {..}
                                    class="text-xl font-bold text-indigo-700 whitespace-nowrap"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "DK Book Stall"
                                </A>
                                <button
                                    type="button"
                                    class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100"
                                    aria-controls="navbar-default"
                                    aria-expanded=move || menu_open.get().to_string()
                                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                >
                                    <span class="sr-only">"Open main menu"</span>
                                    "☰"
                                </button>
                                <div
                                    id="navbar-default"
                                    class="w-full md:block md:w-auto"
                                    class:hidden=move || !menu_open.get()
                                >
                                    <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 md:flex-row md:space-x-8 md:mt-0">
                                        {bar
                                            .actions
                                            .into_iter()
                                            .map(|action| {
                                                view! {
                                                    <li>
                                                        <NavItem action=action menu=set_menu_open />
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        </header>
                    }
                })
        }}
    }
}

#[component]
fn NavItem(action: NavAction, menu: WriteSignal<bool>) -> impl IntoView {
    match action.target {
        NavTarget::Go(view) => view! {
            <A href=view.path() {..} class=LINK_CLASS on:click=move |_| menu.set(false)>
                {action.label}
            </A>
        }
        .into_any(),
        NavTarget::Logout => {
            let session = use_session();
            let ui = FlowUi::new();
            let navigate = use_navigate();
            view! {
                <button
                    type="button"
                    class=LINK_CLASS
                    on:click=move |_| {
                        menu.set(false);
                        ui.settle(Ok(auth::logout(&session.context())), &navigate);
                    }
                >
                    {action.label}
                </button>
            }
            .into_any()
        }
    }
}
