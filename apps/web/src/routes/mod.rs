mod admin_dashboard;
mod books;
mod client_dashboard;
mod landing;
mod login;
mod my_books;
mod not_found;
mod sell;
mod signup;

pub(crate) use admin_dashboard::AdminDashboardPage;
pub(crate) use books::AvailableBooksPage;
pub(crate) use client_dashboard::ClientDashboardPage;
pub(crate) use landing::LandingPage;
pub(crate) use login::LoginPage;
pub(crate) use my_books::MyBooksPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use sell::SellBookPage;
pub(crate) use signup::SignupPage;

use bookstall_client::Role;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// One route per `View`; the paths match `View::path`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/books") view=AvailableBooksPage />
            <Route path=path!("/admin/login") view=|| view! { <LoginPage role=Role::Admin /> } />
            <Route path=path!("/admin/signup") view=|| view! { <SignupPage role=Role::Admin /> } />
            <Route path=path!("/admin/dashboard") view=AdminDashboardPage />
            <Route path=path!("/client/login") view=|| view! { <LoginPage role=Role::Client /> } />
            <Route path=path!("/client/signup") view=|| view! { <SignupPage role=Role::Client /> } />
            <Route path=path!("/client/dashboard") view=ClientDashboardPage />
            <Route path=path!("/sell-book") view=SellBookPage />
            <Route path=path!("/my-books") view=MyBooksPage />
        </Routes>
    }
}
