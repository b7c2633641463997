use crate::components::{AppShell, Button, Spinner, TextField};
use crate::features::flow::{api, use_config, FlowUi};
use crate::features::session::Guarded;
use bookstall_client::forms::SignupForm;
use bookstall_client::pages::auth;
use bookstall_client::{Role, View};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn SignupPage(role: Role) -> impl IntoView {
    let page = View::signup_for(role);

    view! {
        <AppShell>
            <Guarded page=page>
                <SignupCard role=role />
            </Guarded>
        </AppShell>
    }
}

#[component]
fn SignupCard(role: Role) -> impl IntoView {
    let config = use_config();
    let navigate = use_navigate();
    let ui = FlowUi::new();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let admin_code = RwSignal::new(String::new());

    let signup_action = Action::new_local(move |form: &SignupForm| {
        let form = form.clone();
        let config = config.clone();
        async move {
            let api = api(&config)?;
            auth::signup(&api, role, &form).await
        }
    });

    Effect::new(move |_| {
        if let Some(flow) = signup_action.value().get() {
            ui.settle(flow, &navigate);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        ui.start();
        signup_action.dispatch(SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            admin_code: admin_code.get_untracked(),
        });
    };

    let login = View::login_for(role);

    view! {
        <form class="max-w-sm mx-auto rounded-lg bg-white p-8 shadow" on:submit=on_submit>
            <h1 class="mb-6 text-2xl font-semibold text-gray-900">{View::signup_for(role).title()}</h1>
            <TextField id="username" label="Username" value=username error=ui.error_for("username") />
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
                autocomplete="new-password"
            />
            <TextField
                id="confirm-password"
                label="Confirm Password"
                value=confirm_password
                error=ui.error_for("confirmPassword")
                input_type="password"
                autocomplete="new-password"
            />
            {(role == Role::Admin)
                .then(|| {
                    view! {
                        <TextField
                            id="admin-code"
                            label="Admin Code"
                            value=admin_code
                            error=ui.error_for("adminCode")
                            input_type="password"
                        />
                    }
                })}
            <div class="flex items-center gap-4">
                <Button button_type="submit" disabled=signup_action.pending()>
                    "Sign Up"
                </Button>
                {move || signup_action.pending().get().then_some(view! { <Spinner /> })}
            </div>
            <p class="mt-6 text-sm text-gray-600">
                "Already have an account? "
                <A href=login.path() {..} class="text-indigo-700 hover:underline">
                    "Log in"
                </A>
            </p>
        </form>
    }
}
