use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-4 shadow-sm">
            <p class="text-sm text-gray-500">{label}</p>
            <p class="mt-1 text-2xl font-semibold text-gray-900">{move || value.get()}</p>
        </div>
    }
}
