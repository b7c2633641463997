//! Landing page. Signed-in visitors never see it: the guard sends clients
//! to the catalogue and admins to their dashboard.

use crate::components::AppShell;
use crate::features::session::Guarded;
use bookstall_client::{Role, View};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <Guarded page=View::Landing>
                <div class="flex flex-col items-center gap-10 py-12">
                    <div class="text-center space-y-4">
                        <h1 class="text-5xl font-bold text-indigo-700">"DK Book Stall"</h1>
                        <p class="text-lg text-gray-600 max-w-2xl">
                            "Your premier destination for buying and selling books online. Join our community of book lovers today!"
                        </p>
                    </div>
                    <div class="flex flex-col md:flex-row gap-8 w-full max-w-4xl justify-center">
                        <AccessCard
                            role=Role::Client
                            heading="Client Access"
                            blurb="Browse and purchase books from our extensive collection"
                        />
                        <AccessCard
                            role=Role::Admin
                            heading="Admin Access"
                            blurb="Manage the catalogue and review submitted books"
                        />
                    </div>
                    <A href=View::AvailableBooks.path() {..} class="text-indigo-700 hover:underline">
                        "Browse books without an account"
                    </A>
                </div>
            </Guarded>
        </AppShell>
    }
}

#[component]
fn AccessCard(role: Role, heading: &'static str, blurb: &'static str) -> impl IntoView {
    let login = View::login_for(role);
    let signup = View::signup_for(role);

    view! {
        <div class="flex-1 md:max-w-sm rounded-xl bg-white p-8 shadow-xl space-y-6 text-center">
            <h2 class="text-2xl font-semibold text-gray-900">{heading}</h2>
            <p class="text-gray-600">{blurb}</p>
            <div class="flex flex-col gap-3">
                <A
                    href=login.path()
                    {..}
                    class="w-full px-5 py-2.5 text-sm font-medium text-white bg-indigo-700 rounded-lg hover:bg-indigo-800"
                >
                    {login.title()}
                </A>
                <A
                    href=signup.path()
                    {..}
                    class="w-full px-5 py-2.5 text-sm font-medium text-indigo-700 border border-indigo-700 rounded-lg hover:bg-indigo-50"
                >
                    {signup.title()}
                </A>
            </div>
        </div>
    }
}
