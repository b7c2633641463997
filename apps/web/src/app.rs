use crate::app_lib::config::AppConfig;
use crate::features::notices::NoticeProvider;
use crate::features::session::SessionProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::load());

    view! {
        <SessionProvider>
            <NoticeProvider>
                <Router>
                    <AppRoutes />
                </Router>
            </NoticeProvider>
        </SessionProvider>
    }
}
