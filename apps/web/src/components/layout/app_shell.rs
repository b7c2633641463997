//! Page wrapper around every route. The navbar hides itself on the landing
//! page.

use super::Navbar;
use crate::app_lib::build_info;
use crate::components::ui::NoticeStack;
use leptos::prelude::*;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <Navbar />
            <NoticeStack />
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400">
                {format!("DK Book Stall · {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
