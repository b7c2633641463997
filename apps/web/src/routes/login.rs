use crate::components::{AppShell, Button, Spinner, TextField};
use crate::features::flow::{api, use_config, FlowUi};
use crate::features::session::{use_session, Guarded};
use bookstall_client::forms::LoginForm;
use bookstall_client::pages::auth;
use bookstall_client::{Role, View};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let page = View::login_for(role);

    view! {
        <AppShell>
            <Guarded page=page>
                <LoginCard role=role />
            </Guarded>
        </AppShell>
    }
}

#[component]
fn LoginCard(role: Role) -> impl IntoView {
    let config = use_config();
    let session = use_session();
    let navigate = use_navigate();
    let ui = FlowUi::new();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let login_action = Action::new_local(move |form: &LoginForm| {
        let form = form.clone();
        let config = config.clone();
        async move {
            let api = api(&config)?;
            auth::login(&api, &session.context(), role, &form).await
        }
    });

    Effect::new(move |_| {
        if let Some(flow) = login_action.value().get() {
            ui.settle(flow, &navigate);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        ui.start();
        login_action.dispatch(LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    let signup = View::signup_for(role);

    view! {
        <form class="max-w-sm mx-auto rounded-lg bg-white p-8 shadow" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900">{View::login_for(role).title()}</h1>
            <TextField
                id="email"
                label="Email"
                value=email
                error=ui.error_for("email")
                input_type="email"
                autocomplete="email"
            />
            <TextField
                id="password"
                label="Password"
                value=password
                error=ui.error_for("password")
                input_type="password"
                autocomplete="current-password"
            />
            <div class="flex items-center gap-4">
                <Button button_type="submit" disabled=login_action.pending()>
                    "Login"
                </Button>
                {move || login_action.pending().get().then_some(view! { <Spinner /> })}
            </div>
            <p class="mt-6 text-sm text-gray-600">
                "Don't have an account? "
                <A href=signup.path() {..} class="text-indigo-700 hover:underline">
                    "Sign up"
                </A>
            </p>
        </form>
    }
}
