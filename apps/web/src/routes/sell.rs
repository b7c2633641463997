use crate::components::{AppShell, BookFormFields, BookFormState, Button, Spinner};
use crate::features::flow::{api, use_config, FlowUi};
use crate::features::session::{use_session, Guarded};
use bookstall_client::forms::BookForm;
use bookstall_client::pages::sell;
use bookstall_client::View;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn SellBookPage() -> impl IntoView {
    view! {
        <AppShell>
            <Guarded page=View::SellBook>
                <SellForm />
            </Guarded>
        </AppShell>
    }
}

#[component]
fn SellForm() -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigate = use_navigate();
    let ui = FlowUi::new();
    let form = BookFormState::new();

    let submit_action = Action::new_local(move |input: &BookForm| {
        let input = input.clone();
        let config = config.clone();
        async move {
            let api = api(&config)?;
            sell::submit(&api, &session.context(), &input).await
        }
    });

    Effect::new(move |_| {
        if let Some(flow) = submit_action.value().get() {
            if ui.settle(flow, &navigate).is_some() {
                form.clear();
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        ui.start();
        submit_action.dispatch(form.snapshot());
    };

    view! {
        <form class="max-w-xl mx-auto rounded-lg bg-white p-8 shadow" on:submit=on_submit>
            <h1 class="text-2xl font-semibold text-gray-900">"Sell Your Book"</h1>
            <p class="mb-6 text-sm text-gray-600">
                "Listings are reviewed by an admin before they appear in the catalogue."
            </p>
            <BookFormFields state=form ui=ui />
            <div class="flex items-center gap-4">
                <Button button_type="submit" disabled=submit_action.pending()>
                    "Submit for Review"
                </Button>
                {move || submit_action.pending().get().then_some(view! { <Spinner /> })}
            </div>
        </form>
    }
}
