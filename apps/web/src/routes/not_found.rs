use crate::components::AppShell;
use bookstall_client::View;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-9xl font-black text-gray-200 select-none">"404"</h1>
                <p class="mt-2 text-2xl font-bold text-gray-900">"Page not found"</p>
                <p class="mt-4 text-gray-500 max-w-sm">
                    "This page is not part of the book stall."
                </p>
                <div class="mt-6 flex gap-4">
                    <A
                        href=View::Landing.path()
                        {..}
                        class="px-5 py-2.5 text-sm font-medium text-white bg-indigo-700 rounded-lg hover:bg-indigo-800"
                    >
                        "Go Home"
                    </A>
                    <A
                        href=View::AvailableBooks.path()
                        {..}
                        class="px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100"
                    >
                        "Browse Books"
                    </A>
                </div>
            </div>
        </AppShell>
    }
}
